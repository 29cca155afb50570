//! Core game logic module for Snake
//!
//! This module contains all the game logic without any terminal I/O. Drawing
//! and status updates go through the traits in [`crate::render::surface`],
//! timing through [`scheduler::Scheduler`].

pub mod action;
pub mod config;
pub mod engine;
pub mod food;
pub mod grid;
pub mod scheduler;
pub mod session;
pub mod state;

// Re-export commonly used types
pub use action::Direction;
pub use config::GameConfig;
pub use engine::{GameEngine, StepInfo, advance, check_collision, check_victory};
pub use food::place_food;
pub use grid::Grid;
pub use scheduler::{Scheduler, TickSchedule, TimerHandle};
pub use session::GameSession;
pub use state::{GameState, GameStatus, Position, Snake};
