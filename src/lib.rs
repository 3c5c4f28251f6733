//! Shape shooter: a fixed-timestep arcade game on a 500×500-unit canvas.
//!
//! The library holds everything that is independent of the terminal:
//! - `config`: game constants
//! - `entities`: pure data types
//! - `compute`: pure state transitions
//! - `assets`: startup sprite loading
//!
//! Rendering and the event loop live in the binary.

pub mod assets;
pub mod compute;
pub mod config;
pub mod entities;
