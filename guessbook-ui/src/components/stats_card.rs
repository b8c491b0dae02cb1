//! Statistics Card Component
//!
//! Totals plus the two charts, or a placeholder when nobody has guessed yet.

use guessbook::guess::compute_statistics;
use leptos::*;

use crate::components::chart::{AveragesChart, SexChart};
use crate::state::use_guess_state;

/// Statistics card component
#[component]
pub fn StatsCard() -> impl IntoView {
    let state = use_guess_state();
    let stats = create_memo(move |_| state.book.with(|book| compute_statistics(book.records())));

    view! {
        <div class="bg-white rounded-lg shadow-lg p-6">
            <h2 class="text-xl font-semibold">"Estatísticas dos Palpites"</h2>
            <p class="text-sm text-gray-500 mb-4">
                {move || format!("Total de palpites: {}", stats.get().total)}
            </p>

            {move || {
                if stats.get().is_empty() {
                    view! {
                        <p class="text-center text-gray-500 py-8">
                            "Ainda não há palpites registrados. Seja o primeiro!"
                        </p>
                    }.into_view()
                } else {
                    view! {
                        <div class="space-y-6">
                            <SexChart stats=stats />
                            <AveragesChart stats=stats />
                        </div>
                    }.into_view()
                }
            }}
        </div>
    }
}
