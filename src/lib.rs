//! Torus Snake - a terminal Snake game on a board whose edges wrap around
//!
//! This library provides:
//! - Core game logic and the tick-driven session state machine (game module)
//! - Buffered keyboard steering (input module)
//! - Score keeping with a persisted best score (score, store modules)
//! - TUI rendering (render module)
//! - The interactive terminal runtime (modes module)

pub mod game;
pub mod input;
pub mod modes;
pub mod render;
pub mod score;
pub mod store;
