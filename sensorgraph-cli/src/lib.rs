//! Support library for the sensorgraph CLI binary.
//!
//! Exposes the command pipeline and logging setup so doctests and unit tests
//! can exercise them without spawning a subprocess.

pub mod cli;
pub mod logging;
