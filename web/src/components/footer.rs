use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="site-footer__container">
                <div class="site-footer__brand">
                    <span class="site-footer__logo">"Creative Agency"</span>
                    <p>"Fashion, talent and culture, connected."</p>
                </div>
                <nav class="site-footer__links">
                    <A href="/talent" attr:class="site-footer__link">"Join as Talent"</A>
                    <A href="/brands" attr:class="site-footer__link">"Partner as a Brand"</A>
                    <A href="/community" attr:class="site-footer__link">"Join the Community"</A>
                </nav>
                <p class="site-footer__copyright">"© Fashion Nights. All rights reserved."</p>
            </div>
        </footer>
    }
}
