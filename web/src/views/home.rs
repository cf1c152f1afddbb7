use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::showcase::{ShowcaseGrid, CURATED_EXPERIENCES};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home">
            <section class="hero">
                <h1 class="hero__title">
                    "Where "
                    <span class="gradient-text">"Fashion"</span>
                    " Meets Opportunity"
                </h1>
                <p class="hero__subtitle">
                    "A platform connecting designers, models, performers and brands with the culture they shape."
                </p>
                <div class="hero__actions">
                    <A href="/talent" attr:class="btn btn-primary">"Showcase Your Talent"</A>
                    <A href="/brands" attr:class="btn btn-outlined">"Partner With Us"</A>
                </div>
            </section>

            <ShowcaseGrid
                heading="Our Curated Experiences"
                intro="Crafted at the intersection of fashion, talent, and culture."
                cards=CURATED_EXPERIENCES
            />

            <section class="cta-band">
                <h2>"Be Part of Fashion Nights"</h2>
                <p>"Join a community of creatives, events and media built around fashion culture."</p>
                <A href="/community" attr:class="btn btn-primary">"Join the Community"</A>
            </section>
        </div>
    }
}
