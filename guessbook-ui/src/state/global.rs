//! Global Application State
//!
//! Reactive state management using Leptos signals. The whole guess book lives
//! in one signal; components read it with `with` and mutate it through the
//! methods below so every change goes through the book's own operations.

use guessbook::guess::{DraftField, GuessBook, Submission, DEFAULT_STORAGE_KEY};
use leptos::*;

use crate::state::storage::BrowserStore;

/// State provided to all components
#[derive(Clone, Copy)]
pub struct GuessState {
    /// Records, draft and the store they are mirrored to
    pub book: RwSignal<GuessBook<BrowserStore>>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Load the book from local storage and provide it to the component tree
pub fn provide_guess_state() {
    let book = GuessBook::load(BrowserStore::open(), DEFAULT_STORAGE_KEY);
    web_sys::console::log_1(&format!("Loaded {} guesses", book.len()).into());

    provide_context(GuessState {
        book: create_rw_signal(book),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    });
}

/// Fetch the state from context
pub fn use_guess_state() -> GuessState {
    use_context::<GuessState>().expect("GuessState not found")
}

impl GuessState {
    /// Current raw value of a draft field
    pub fn draft_value(&self, field: DraftField) -> String {
        self.book.with(|book| book.draft().get(field).to_string())
    }

    /// Bind a control's value into the draft
    pub fn set_field(&self, field: DraftField, value: String) {
        self.book.update(|book| book.update_draft_field(field, value));
    }

    /// Submit the draft. Missing fields are a silent no-op.
    pub fn submit(&self) {
        let mut outcome = None;
        self.book.update(|book| outcome = Some(book.submit_guess()));

        match outcome {
            Some(Ok(Submission::Recorded(record))) => {
                self.show_success(&format!("Palpite de {} registrado!", record.guesser_name));
            }
            Some(Ok(Submission::Incomplete { .. })) | None => {}
            Some(Err(e)) => {
                web_sys::console::error_1(&format!("Failed to record guess: {}", e).into());
                self.show_error(&e.to_string());
            }
        }
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}
