use crate::tetris::prelude::*;

/// The fixed set of shapes, built once and borrowed by every board.
#[derive(Clone, Debug)]
pub struct ShapeCatalog {
    /// Get a shape by kind.
    shapes: [Shape; NUM_SHAPES],
}

impl ShapeCatalog {
    /// Creates a new ShapeCatalog.
    pub fn new() -> ShapeCatalog {
        ShapeCatalog {
            shapes: ShapeKind::all().map(Shape::identity),
        }
    }

    /// Gets a shape by kind.
    pub fn get(&self, kind: ShapeKind) -> &Shape {
        &self.shapes[kind as usize]
    }

    /// Looks a shape up by its letter, in either case.
    pub fn lookup(&self, name: &str) -> Result<&Shape> {
        let kind = name.parse::<ShapeKind>()?;
        Ok(self.get(kind))
    }

    /// Iterates over the shapes in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter()
    }
}

impl Default for ShapeCatalog {
    fn default() -> Self {
        ShapeCatalog::new()
    }
}

#[cfg(test)]
mod tests {
    use super::ShapeCatalog;
    use crate::tetris::prelude::*;

    #[test]
    fn ensure_builds() {
        let catalog = ShapeCatalog::new();
        assert_eq!(catalog.iter().count(), NUM_SHAPES);
        for (i, shape) in catalog.iter().enumerate() {
            assert_eq!(shape.kind, ShapeKind::from(i as u8));
        }
    }

    #[test]
    fn lookup_is_case_insensitive() -> Result<()> {
        let catalog = ShapeCatalog::new();
        for kind in ShapeKind::all() {
            let upper = kind.notate();
            let lower = upper.to_lowercase();
            assert_eq!(catalog.lookup(&upper)?, catalog.get(kind));
            assert_eq!(catalog.lookup(&lower)?, catalog.get(kind));
        }
        Ok(())
    }

    #[test]
    fn lookup_miss() {
        let catalog = ShapeCatalog::new();
        for name in ["X", "", "QQ", "1"] {
            let err = catalog.lookup(name).expect_err("lookup unexpectedly succeeded");
            assert_eq!(
                err.downcast_ref::<EngineError>(),
                Some(&EngineError::UnknownShape { name: name.to_owned() })
            );
        }
    }
}
