//! Metro exit guide builder.
//!
//! Reads a rail system's door, station, exit and egress tables, works out
//! which train door is closest to every escalator, staircase and elevator,
//! and renders the result as a static offline web app.

pub mod domain;
pub mod engine;
mod error;
pub mod input;
pub mod pipeline;
pub mod render;
pub mod web;

pub use error::Error;
