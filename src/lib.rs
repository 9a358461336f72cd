//! Dino Runner - terminal endless runner library
//!
//! This module exposes the game logic, input mapping and rendering for
//! testing and for the binary.

pub mod core;
pub mod input;
pub mod runner;
pub mod terminal;
pub mod ui;
