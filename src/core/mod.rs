//! World constants, tuning values and geometry shared by logic and UI.

pub mod constants;
pub mod geometry;
pub mod tuning;

pub use geometry::Hitbox;
pub use tuning::Tuning;
