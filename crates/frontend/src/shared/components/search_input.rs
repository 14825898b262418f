use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Debounced search box. `on_change` fires 300ms after the last keystroke
/// so filtering never runs once per keypress.
#[component]
pub fn SearchInput(
    /// Current committed filter value
    #[prop(into)]
    value: Signal<String>,
    /// Callback fired with the debounced value
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    // Local state for the input, ahead of the debounce
    let (input_value, set_input_value) = signal(String::new());

    // Every keystroke bumps the generation; only the latest timer commits.
    let debounce_generation = StoredValue::new(0u64);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());

        let generation = debounce_generation.get_value().wrapping_add(1);
        debounce_generation.set_value(generation);

        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(300).await;
            if debounce_generation.try_get_value() == Some(generation) {
                on_change.run(new_value);
            }
        });
    };

    let has_text = move || !value.get().is_empty();

    let clear_filter = move |_| {
        set_input_value.set(String::new());
        debounce_generation.update_value(|g| *g = g.wrapping_add(1));
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <span class="search-input__icon">{icon("search")}</span>
            <input
                type="text"
                class="search-input__field"
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| {
                    handle_input_change(event_target_value(&ev));
                }
            />
            <Show when=has_text>
                <button class="search-input__clear" on:click=clear_filter title="Clear search">
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}
