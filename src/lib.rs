//! ascii-projector library crate.
//!
//! Renders rotating 3D point sets (a wireframe cube logo and a particle
//! flame) into fixed-size character grids and animates them in a terminal.

pub mod animation;
pub mod cli;
pub mod config;
pub mod frame;
pub mod projector;
pub mod terminal;
