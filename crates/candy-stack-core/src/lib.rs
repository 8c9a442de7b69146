//! Candy Stack - the model behind the candy dispenser
//!
//! A stack visualized as a spring-loaded candy dispenser. This crate holds
//! everything except the window: the LIFO container, the candy factory, the
//! spring motion model, the controller that maps user commands onto them,
//! and the scene geometry the renderer draws from.
//!
//! # Architecture
//!
//! ```text
//!            Command (Pop / Push / Top / Is Empty / Len)
//!                 │
//!                 ▼
//!   ┌──────────────────────────── Dispenser ───┐
//!   │  Stack<Candy>   Spring   DisplayState    │
//!   │       ▲                                  │
//!   │  CandyFactory                            │
//!   └──────────────────────────────────────────┘
//!                 │ (read only)
//!                 ▼
//!            SceneLayout ──► renderer
//! ```
//!
//! # Usage
//!
//! ```
//! use candy_stack_core::{Command, Dispenser, DispenserConfig};
//!
//! let config = DispenserConfig::default();
//! let mut dispenser = Dispenser::new(&config.spring);
//!
//! dispenser.execute(Command::Push);
//! dispenser.execute(Command::Len);
//! assert_eq!(dispenser.display().message(), Some("Stack Length : 1"));
//! ```

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Candies and the candy factory
pub mod candy;

/// User commands
pub mod command;

/// Configuration
pub mod config;

/// The controller that owns all dispenser state
pub mod dispenser;

/// Status line state
pub mod display;

/// Error types
pub mod error;

/// Scene geometry for the renderer
pub mod layout;

/// Spring motion model
pub mod spring;

/// LIFO container
pub mod stack;

pub use candy::{Candy, CandyFactory, Rgb, LABEL_RANGE};
pub use command::Command;
pub use config::{CandyConfig, DispenserConfig, SpringConfig, WindowConfig};
pub use dispenser::{Dispenser, EMPTY_MESSAGE};
pub use display::{DisplayState, Tone};
pub use error::{ConfigError, ConfigResult, StackError, StackResult};
pub use layout::{Button, ButtonPanel, CandySlot, Point, Rect, SceneLayout, Size};
pub use spring::{Adjustment, Spring};
pub use stack::Stack;
