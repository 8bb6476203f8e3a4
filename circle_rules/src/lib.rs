//! # Circle Rules
//!
//! The rules crate of the circle dance puzzle. Holds the ring of slots, move
//! classification, character definitions and the catalog that feeds them.
//! Nothing in here keeps time or round state; `circle_engine` drives it.

pub mod catalog;
pub mod entities;
pub mod mechanics;
pub mod ring;

pub use catalog::*;
pub use entities::*;
pub use mechanics::*;
pub use ring::*;
