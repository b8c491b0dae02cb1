//! App Root Component
//!
//! Page layout and the guess state provider.

use leptos::*;

use crate::components::{GuessForm, GuessTable, StatsCard, Toast};
use crate::state::provide_guess_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_guess_state();

    view! {
        <div class="min-h-screen bg-gradient-to-br from-pink-50 to-blue-50 p-4">
            <div class="max-w-6xl mx-auto">
                <Header />

                <div class="grid grid-cols-1 lg:grid-cols-2 gap-8">
                    <GuessForm />
                    <StatsCard />
                </div>

                <GuessTable />
            </div>

            <Toast />
        </div>
    }
}

#[component]
fn Header() -> impl IntoView {
    view! {
        <header class="text-center mb-8">
            <div class="flex justify-center items-center gap-2 mb-4">
                <span class="text-3xl">"👶"</span>
                <h1 class="text-4xl font-bold text-gray-800">"Palpites do Bebê"</h1>
                <span class="text-3xl text-pink-500">"♥"</span>
            </div>
            <p class="text-lg text-gray-600">"Faça seu palpite sobre os detalhes do nascimento!"</p>
        </header>
    }
}
