//! Guess Form Component
//!
//! The input form bound to the guess book's draft.

use guessbook::guess::{DraftField, Sex};
use leptos::*;

use crate::state::use_guess_state;

const INPUT_CLASS: &str = "w-full bg-white rounded-md px-3 py-2 text-gray-900 \
                           border border-gray-300 focus:border-pink-400 focus:outline-none";

/// Guess form component
#[component]
pub fn GuessForm() -> impl IntoView {
    let state = use_guess_state();
    let bounds = state.book.with_untracked(|book| *book.bounds());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        state.submit();
    };

    view! {
        <div class="bg-white rounded-lg shadow-lg p-6">
            <h2 class="text-xl font-semibold flex items-center gap-2">"👶 Faça seu Palpite"</h2>
            <p class="text-sm text-gray-500 mb-4">
                "Preencha todos os campos para registrar seu palpite"
            </p>

            <form on:submit=on_submit class="space-y-4">
                <FieldInput
                    field=DraftField::GuesserName
                    label="Seu Nome"
                    placeholder="Digite seu nome"
                />

                <SexSelect />

                <FieldInput
                    field=DraftField::WeightKg
                    label="⚖️ Peso (kg)"
                    input_type="number"
                    placeholder="Ex: 3.2"
                    min=bounds.weight_min_kg.to_string()
                    max=bounds.weight_max_kg.to_string()
                    step=bounds.weight_step_kg.to_string()
                />

                <FieldInput
                    field=DraftField::LengthCm
                    label="📏 Tamanho (cm)"
                    input_type="number"
                    placeholder="Ex: 50"
                    min=bounds.length_min_cm.to_string()
                    max=bounds.length_max_cm.to_string()
                />

                <FieldInput
                    field=DraftField::BirthDate
                    label="📅 Data de Nascimento"
                    input_type="date"
                />

                <button
                    type="submit"
                    class="w-full bg-gray-900 hover:bg-gray-700 text-white rounded-md py-2
                           font-semibold transition-colors"
                >
                    "Registrar Palpite"
                </button>
            </form>
        </div>
    }
}

/// Labelled input bound to one draft field
#[component]
fn FieldInput(
    field: DraftField,
    label: &'static str,
    #[prop(default = "text")]
    input_type: &'static str,
    #[prop(default = "")]
    placeholder: &'static str,
    #[prop(optional, into)]
    min: Option<String>,
    #[prop(optional, into)]
    max: Option<String>,
    #[prop(optional, into)]
    step: Option<String>,
) -> impl IntoView {
    let state = use_guess_state();
    let id = format!("{:?}", field).to_lowercase();

    view! {
        <div>
            <label for=id.clone() class="block text-sm font-medium text-gray-700 mb-1">{label}</label>
            <input
                id=id
                type=input_type
                placeholder=placeholder
                min=min
                max=max
                step=step
                required=true
                prop:value=move || state.draft_value(field)
                on:input=move |ev| state.set_field(field, event_target_value(&ev))
                class=INPUT_CLASS
            />
        </div>
    }
}

/// Sex selector
#[component]
fn SexSelect() -> impl IntoView {
    let state = use_guess_state();

    view! {
        <div>
            <label for="sex" class="block text-sm font-medium text-gray-700 mb-1">"Sexo do Bebê"</label>
            <select
                id="sex"
                required=true
                prop:value=move || state.draft_value(DraftField::Sex)
                on:change=move |ev| state.set_field(DraftField::Sex, event_target_value(&ev))
                class=INPUT_CLASS
            >
                <option value="">"Selecione o sexo"</option>
                {Sex::all()
                    .iter()
                    .map(|sex| view! {
                        <option value=sex.as_str()>{sex.label()}</option>
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
