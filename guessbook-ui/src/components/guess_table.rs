//! Guess Table Component
//!
//! Every record in insertion order. Hidden while the list is empty.

use leptos::*;

use crate::state::use_guess_state;

/// Guess table component
#[component]
pub fn GuessTable() -> impl IntoView {
    let state = use_guess_state();
    let records = move || state.book.with(|book| book.records().to_vec());

    view! {
        <Show when=move || state.book.with(|book| !book.is_empty())>
            <div class="bg-white rounded-lg shadow-lg p-6 mt-8">
                <h2 class="text-xl font-semibold">"Todos os Palpites"</h2>
                <p class="text-sm text-gray-500 mb-4">
                    "Lista completa de todos os palpites registrados"
                </p>

                <div class="overflow-x-auto">
                    <table class="w-full border-collapse">
                        <thead>
                            <tr class="border-b">
                                <th class="text-left p-2 font-semibold">"Nome"</th>
                                <th class="text-left p-2 font-semibold">"Sexo"</th>
                                <th class="text-left p-2 font-semibold">"Peso (kg)"</th>
                                <th class="text-left p-2 font-semibold">"Tamanho (cm)"</th>
                                <th class="text-left p-2 font-semibold">"Data de Nascimento"</th>
                                <th class="text-left p-2 font-semibold">"Registrado em"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=records
                                key=|record| record.id
                                children=move |record| view! {
                                    <tr class="border-b hover:bg-gray-50">
                                        <td class="p-2">{record.guesser_name.clone()}</td>
                                        <td class="p-2">{record.sex.label()}</td>
                                        <td class="p-2">{record.weight_display()}</td>
                                        <td class="p-2">{record.length_display()}</td>
                                        <td class="p-2">{record.birth_date_display()}</td>
                                        <td class="p-2 text-sm text-gray-500">{record.submitted_at.clone()}</td>
                                    </tr>
                                }
                            />
                        </tbody>
                    </table>
                </div>
            </div>
        </Show>
    }
}
