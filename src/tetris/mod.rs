/*
 *  A falling-block board engine that only remembers what a falling piece can still touch.
 */

pub(crate) mod board;
pub(crate) mod consts;
pub mod coords;
pub mod errors;
pub mod notation;
pub(crate) mod shape;

pub mod prelude {
    pub(crate) use crate::utils::prelude::*;

    pub use super::{
        board::{Board, Heights, Row},
        consts::*,
        coords::*,
        errors::EngineError,
        notation::*,
        shape::{Shape, ShapeCatalog}
    };
}
