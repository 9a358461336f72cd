//! Dino Runner: an endless side-scroller.
//!
//! The player jumps over cacti and ducks under pterodactyls. Scroll speed
//! ramps with the score until the first collision ends the run.

pub mod collision;
pub mod difficulty;
pub mod logic;
pub mod physics;
pub mod scenery;
pub mod spawner;
pub mod types;

pub use logic::*;
pub use types::*;
