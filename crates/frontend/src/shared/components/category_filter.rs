use crate::shared::icons::icon;
use leptos::prelude::*;
use std::collections::BTreeSet;

/// Multi-select dropdown for a category dimension.
///
/// Checkbox changes only touch a temporary selection; Apply commits it
/// through `on_apply`, Cancel (and reopening) resets the temporary set to
/// the committed one.
#[component]
pub fn CategoryFilter(
    /// Button label
    #[prop(into)]
    label: String,
    /// All selectable categories
    #[prop(into)]
    options: Signal<Vec<String>>,
    /// Currently committed selection
    #[prop(into)]
    selected: Signal<BTreeSet<String>>,
    /// Callback fired with the new selection when Apply is pressed
    #[prop(into)]
    on_apply: Callback<BTreeSet<String>>,
) -> impl IntoView {
    let (open, set_open) = signal(false);
    let (temp, set_temp) = signal(BTreeSet::<String>::new());

    let toggle_open = move |_| {
        set_temp.set(selected.get());
        set_open.update(|o| *o = !*o);
    };

    let apply = move |_| {
        set_open.set(false);
        on_apply.run(temp.get());
    };

    let cancel = move |_| {
        set_open.set(false);
        set_temp.set(selected.get());
    };

    view! {
        <div class="category-filter">
            <button class="category-filter__toggle" on:click=toggle_open>
                <span>{label}</span>
                {icon("chevron-down")}
            </button>
            <Show when=move || open.get()>
                <div class="category-filter__dropdown">
                    <div class="category-filter__options">
                        {move || {
                            options
                                .get()
                                .into_iter()
                                .map(|category| {
                                    let is_checked = {
                                        let category = category.clone();
                                        move || temp.with(|t| t.contains(&category))
                                    };
                                    let toggle = {
                                        let category = category.clone();
                                        move |_| {
                                            set_temp.update(|t| {
                                                if !t.remove(&category) {
                                                    t.insert(category.clone());
                                                }
                                            });
                                        }
                                    };
                                    view! {
                                        <label class="category-filter__option">
                                            <input
                                                type="checkbox"
                                                prop:checked=is_checked
                                                on:change=toggle
                                            />
                                            <span>{category}</span>
                                        </label>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                    <div class="category-filter__actions">
                        <button class="btn btn--primary" on:click=apply>"Apply"</button>
                        <button class="btn btn--outline" on:click=cancel>"Cancel"</button>
                    </div>
                </div>
            </Show>
        </div>
    }
}
