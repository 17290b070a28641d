pub mod catalog;

use super::prelude::*;

use itertools::Itertools;
pub use catalog::ShapeCatalog;

/// An immutable piece geometry with its bounding box and column profile worked out up front.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Shape {
    pub kind: ShapeKind,
    pub coordinates: [Block; BLOCKS_PER_SHAPE],
    pub width: usize,
    pub height: usize,
    profile: Vec<usize>,
}

impl Shape {
    /// Builds a shape from its block offsets, shifting them so the leftmost block sits in column 0.
    pub fn new(kind: ShapeKind, coordinates: [Block; BLOCKS_PER_SHAPE]) -> Shape {
        let (min_x, max_x) = coordinates.iter().map(|b| b.x).minmax().into_option().unwrap_or((0, 0));
        let coordinates = coordinates.map(|b| b - Block::new(min_x, 0));

        let width = max_x - min_x + 1;
        let height = coordinates.iter().map(|b| b.depth()).max().unwrap_or(0);

        let mut profile = vec![0; width];
        for block in &coordinates {
            profile[block.x] = profile[block.x].max(block.depth());
        }

        Shape { kind, coordinates, width, height, profile }
    }

    /// Constructs the catalog shape of the given kind.
    pub fn identity(kind: ShapeKind) -> Shape {
        Shape::new(kind, Shape::_identity_template(kind))
    }

    /// The depth, per column of the bounding box, that terrain must reach to touch the shape.
    ///
    /// For the T:
    ///
    /// `# # #`
    ///
    /// `. # .`
    ///
    /// the profile is `[1, 2, 1]`.
    pub fn profile(&self) -> &[usize] {
        &self.profile
    }

    /// The canonical notation for the shape dropped at the given column.
    pub fn notate(&self, dx: isize) -> String {
        format!("{}{}", self.kind, dx)
    }

    /// Gets the block offsets for each kind, origin at the top-left of the bounding box.
    fn _identity_template(kind: ShapeKind) -> [Block; BLOCKS_PER_SHAPE] {
        let b = Block::new;
        match kind {
            ShapeKind::Q => [b(0, 0), b(1, 0), b(0, 1), b(1, 1)],
            ShapeKind::Z => [b(0, 0), b(1, 0), b(1, 1), b(2, 1)],
            ShapeKind::S => [b(0, 1), b(1, 0), b(1, 1), b(2, 0)],
            ShapeKind::T => [b(0, 0), b(1, 0), b(1, 1), b(2, 0)],
            ShapeKind::I => [b(0, 0), b(1, 0), b(2, 0), b(3, 0)],
            ShapeKind::L => [b(0, 0), b(0, 1), b(0, 2), b(1, 2)],
            ShapeKind::J => [b(0, 2), b(1, 0), b(1, 1), b(1, 2)],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimensions() {
        let expected = [
            (ShapeKind::Q, 2, 2),
            (ShapeKind::Z, 3, 2),
            (ShapeKind::S, 3, 2),
            (ShapeKind::T, 3, 2),
            (ShapeKind::I, 4, 1),
            (ShapeKind::L, 2, 3),
            (ShapeKind::J, 2, 3),
        ];
        for (kind, width, height) in expected {
            let shape = Shape::identity(kind);
            assert_eq!((shape.width, shape.height), (width, height), "{kind}");
            assert_eq!(shape.profile().len(), shape.width);
        }
    }

    #[test]
    fn profiles() {
        assert_eq!(Shape::identity(ShapeKind::Q).profile(), &[2, 2]);
        assert_eq!(Shape::identity(ShapeKind::Z).profile(), &[1, 2, 2]);
        assert_eq!(Shape::identity(ShapeKind::S).profile(), &[2, 2, 1]);
        assert_eq!(Shape::identity(ShapeKind::T).profile(), &[1, 2, 1]);
        assert_eq!(Shape::identity(ShapeKind::I).profile(), &[1, 1, 1, 1]);
        assert_eq!(Shape::identity(ShapeKind::L).profile(), &[3, 3]);
        assert_eq!(Shape::identity(ShapeKind::J).profile(), &[3, 3]);
    }

    #[test]
    fn shifted_coordinates_are_normalised() {
        let b = Block::new;
        let shape = Shape::new(ShapeKind::I, [b(3, 0), b(4, 0), b(5, 0), b(6, 0)]);
        assert_eq!(shape.width, 4);
        assert_eq!(shape.coordinates[0], b(0, 0));
        assert_eq!(shape.profile(), &[1, 1, 1, 1]);
    }

    #[test]
    fn gapped_columns_have_zero_depth() {
        let b = Block::new;
        let shape = Shape::new(ShapeKind::I, [b(0, 0), b(0, 1), b(2, 0), b(2, 1)]);
        assert_eq!(shape.width, 3);
        assert_eq!(shape.profile(), &[2, 0, 2]);
    }
}
