//! State Management
//!
//! The guess book signal shared by every component, and the browser
//! `localStorage` backend it persists to.

pub mod global;
pub mod storage;

pub use global::{provide_guess_state, use_guess_state, GuessState};
pub use storage::BrowserStore;
