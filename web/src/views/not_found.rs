use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// 404 page with a way back into the site
#[component]
pub fn NotFoundPage() -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <div class="not-found">
            <div class="not-found__code gradient-text">"404"</div>

            <div class="not-found__card">
                <h1>"Page Not Found"</h1>
                <p>"This look didn't make it to the runway. The page you're looking for doesn't exist or may have been moved."</p>

                <div class="not-found__actions">
                    <button
                        class="btn btn-primary"
                        on:click={
                            let navigate = navigate.clone();
                            move |_| navigate("/", Default::default())
                        }
                    >
                        "Go Home"
                    </button>
                    <button
                        class="btn btn-outlined"
                        on:click={
                            let navigate = navigate.clone();
                            move |_| navigate("/community", Default::default())
                        }
                    >
                        "Join the Community"
                    </button>
                    <button
                        class="btn btn-outlined"
                        on:click=move |_| {
                            if let Some(history) = web_sys::window().and_then(|window| window.history().ok()) {
                                let _ = history.back();
                            }
                        }
                    >
                        "Go Back"
                    </button>
                </div>
            </div>
        </div>
    }
}
