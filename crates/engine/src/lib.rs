//! ESSER engine library.
//!
//! Async use cases over the rules core.
//!
//! ## Structure
//!
//! - `use_cases/` - Skill checks, opposed tests, strikes, NPC import
//! - `infrastructure/` - Port traits plus local adapters
//! - `app` - Application composition

pub mod app;
pub mod infrastructure;
pub mod use_cases;

/// End-to-end flows over the in-memory adapters.
#[cfg(test)]
mod e2e_tests;

pub use app::{App, Ports};
