//! UI Components
//!
//! Leptos components for the guess page.

pub mod chart;
pub mod guess_form;
pub mod guess_table;
pub mod stats_card;
pub mod toast;

pub use guess_form::GuessForm;
pub use guess_table::GuessTable;
pub use stats_card::StatsCard;
pub use toast::Toast;
