use leptos::prelude::*;

use crate::typeahead::{TypeaheadKey, TypeaheadState};

/// Everything that differs between typeahead fields on the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeaheadConfig {
    pub options: &'static [&'static str],
    pub accent: &'static str,
    pub placeholder: &'static str,
    pub empty_label: &'static str,
    pub aria_label: &'static str,
}

pub const TALENT_CATEGORIES: TypeaheadConfig = TypeaheadConfig {
    options: &[
        "Model",
        "Designer",
        "Photographer",
        "Stylist",
        "Makeup Artist",
        "Performer",
        "Artist",
        "Influencer",
        "Other",
    ],
    accent: "#00E5FF",
    placeholder: "Search or select a category",
    empty_label: "No categories found",
    aria_label: "Talent category autocomplete",
};

pub const BRAND_CATEGORIES: TypeaheadConfig = TypeaheadConfig {
    options: &[
        "Clothing",
        "Jewelry",
        "Cosmetics",
        "Accessories",
        "Beauty Products",
        "Other",
    ],
    accent: "#FF2F92",
    placeholder: "Select your brand category",
    empty_label: "No categories found",
    aria_label: "Brand category autocomplete",
};

pub const AGE_GROUPS: TypeaheadConfig = TypeaheadConfig {
    options: &["18-24", "25-34", "35-44", "45-54", "55+"],
    accent: "#00E5FF",
    placeholder: "Search or select age group",
    empty_label: "No age groups found",
    aria_label: "Age group autocomplete",
};

fn option_class(highlighted: bool, current: bool) -> &'static str {
    match (highlighted, current) {
        (true, true) => "typeahead__option typeahead__option--highlighted typeahead__option--current",
        (true, false) => "typeahead__option typeahead__option--highlighted",
        (false, true) => "typeahead__option typeahead__option--current",
        (false, false) => "typeahead__option",
    }
}

fn option_style(accent: &str, highlighted: bool, current: bool) -> String {
    if highlighted {
        format!("background-color: {accent}26;")
    } else if current {
        format!("background-color: {accent}1a; color: {accent};")
    } else {
        String::new()
    }
}

/// Local picker state that follows the committed value whenever the parent
/// overwrites it (e.g. the form reset after a successful submit).
pub fn use_typeahead_state(
    options: &'static [&'static str],
    value: Signal<String>,
) -> RwSignal<TypeaheadState> {
    let state = RwSignal::new(TypeaheadState::new(options, &value.get_untracked()));
    Effect::new(move |_| {
        let committed = value.get();
        state.update(|s| s.sync_committed(&committed));
    });
    state
}

#[component]
pub fn Typeahead(
    config: TypeaheadConfig,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(into)] id: String,
    #[prop(into)] name: String,
) -> impl IntoView {
    let state = use_typeahead_state(config.options, value);
    let container_ref = NodeRef::<leptos::html::Div>::new();
    let listbox_id = format!("{id}-listbox");

    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let outside_click = window_event_listener(leptos::ev::mousedown, move |ev| {
            let Some(container) = container_ref.get_untracked() else {
                return;
            };
            let inside = ev
                .target()
                .and_then(|target| target.dyn_into::<web_sys::Node>().ok())
                .is_some_and(|node| container.contains(Some(&node)));
            if !inside && state.with_untracked(|s| s.is_open()) {
                state.update(|s| s.dismiss());
            }
        });
        on_cleanup(move || outside_click.remove());
    }

    let commit = move |choice: Option<String>| {
        if let Some(choice) = choice {
            on_change.run(choice);
        }
    };

    let handle_keydown = move |ev: leptos::ev::KeyboardEvent| {
        let key = TypeaheadKey::from_key_name(&ev.key());
        let open = state.with_untracked(|s| s.is_open());
        if key.is_navigation() && (open || key == TypeaheadKey::ArrowDown) {
            ev.prevent_default();
        }
        commit(state.try_update(|s| s.key(key)).flatten());
    };

    let panel = move || {
        state.with(|s| {
            if s.shows_no_results() {
                return Some(
                    view! {
                        <div class="typeahead__empty">{config.empty_label}</div>
                    }
                    .into_any(),
                );
            }

            let filtered = s.filtered();
            if !s.is_open() || filtered.is_empty() {
                return None;
            }

            let highlighted = s.highlighted();
            let text = s.text().to_string();
            let listbox_id = listbox_id.clone();
            Some(
                view! {
                    <ul class="typeahead__list" role="listbox" id=listbox_id>
                        {filtered
                            .into_iter()
                            .enumerate()
                            .map(|(index, option)| {
                                let is_highlighted = highlighted == Some(index);
                                let is_current = text == option;
                                view! {
                                    <li
                                        role="option"
                                        class=option_class(is_highlighted, is_current)
                                        style=option_style(config.accent, is_highlighted, is_current)
                                        aria-selected=(is_highlighted || is_current).to_string()
                                        on:click=move |_| commit(state.try_update(|s| s.click(index)).flatten())
                                        on:mouseenter=move |_| {
                                            if state.with_untracked(|s| s.highlighted()) != Some(index) {
                                                state.update(|s| s.hover(index));
                                            }
                                        }
                                    >
                                        {option}
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                }
                .into_any(),
            )
        })
    };

    view! {
        <div class="typeahead" node_ref=container_ref>
            <div class="typeahead__field">
                <input
                    id=id.clone()
                    name=name
                    type="text"
                    class="typeahead__input"
                    autocomplete="off"
                    placeholder=config.placeholder
                    aria-label=config.aria_label
                    aria-autocomplete="list"
                    aria-controls=format!("{id}-listbox")
                    aria-expanded=move || state.with(|s| s.is_open()).to_string()
                    prop:value=move || state.with(|s| s.text().to_string())
                    on:input=move |ev| state.update(|s| s.input(event_target_value(&ev)))
                    on:focus=move |_| state.update(|s| s.focus())
                    on:keydown=handle_keydown
                />
                <span
                    class=move || {
                        if state.with(|s| s.is_open()) {
                            "typeahead__chevron typeahead__chevron--open"
                        } else {
                            "typeahead__chevron"
                        }
                    }
                    style=format!("color: {};", config.accent)
                >
                    "▾"
                </span>
            </div>
            {panel}
        </div>
    }
}
