use leptos::prelude::*;
use leptos_router::components::A;

const NAV_LINKS: &[(&str, &str)] = &[
    ("/", "Home"),
    ("/about", "About"),
    ("/talent", "Talent"),
    ("/brands", "Brands"),
    ("/community", "Community"),
];

#[component]
pub fn Header() -> impl IntoView {
    let menu_open = RwSignal::new(false);

    view! {
        <header class="site-header">
            <div class="site-header__container">
                <A href="/" attr:class="site-header__logo">
                    "Creative Agency"
                </A>

                <nav class="site-header__links">
                    {NAV_LINKS
                        .iter()
                        .map(|(href, label)| view! {
                            <A href=*href attr:class="site-header__link">{*label}</A>
                        })
                        .collect_view()}
                </nav>

                <button
                    class="site-header__menu-toggle"
                    aria-label="Toggle navigation"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>

            <Show when=move || menu_open.get()>
                <nav class="site-header__mobile" on:click=move |_| menu_open.set(false)>
                    {NAV_LINKS
                        .iter()
                        .map(|(href, label)| view! {
                            <A href=*href attr:class="site-header__mobile-link">{*label}</A>
                        })
                        .collect_view()}
                </nav>
            </Show>
        </header>
    }
}
