//! Arcade snake for the terminal.
//!
//! The simulation core (grid, direction buffering, score decay, fixed
//! tick clock and the session state machine) is pure and deterministic;
//! rendering, input, audio and persistence sit behind narrow seams so
//! the core can be driven tick by tick in tests.

pub mod audio;
pub mod clock;
pub mod config;
pub mod game;
pub mod grid;
pub mod input;
pub mod renderer;
pub mod score;
pub mod store;
pub mod terminal_runtime;
pub mod theme;
pub mod ui;
