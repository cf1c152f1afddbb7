use leptos::prelude::*;

const AUDIENCE_TAGS: &[&str] = &[
    "Designers",
    "Models",
    "Performers",
    "Artists",
    "Influencers",
    "Brands",
    "Fashion Enthusiasts",
];

const TAG_ACCENTS: &[&str] = &["#FF2F92", "#7B61FF", "#00E5FF"];

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="about">
            <section class="about__header">
                <h1>
                    "The Creative Agency "
                    <span class="gradient-text">"Platform"</span>
                </h1>
                <p>"A modern platform for creative businesses and talent management."</p>
            </section>

            <section class="about__vision">
                <div class="about__statement">
                    <h2>"Our Vision"</h2>
                    <p>"To create a global, inclusive fashion community powered by creativity and collaboration."</p>
                </div>
                <div class="about__statement">
                    <h2>"Our Mission"</h2>
                    <p>"To become a leading digital fashion media brand connecting talent and opportunity."</p>
                </div>
            </section>

            <section class="about__audience">
                <h2>"Who It's For"</h2>
                <p>"Creative Agency is built for everyone who loves creating and collaborating"</p>
                <div class="about__tags">
                    {AUDIENCE_TAGS
                        .iter()
                        .zip(TAG_ACCENTS.iter().cycle())
                        .map(|(tag, accent)| view! {
                            <span class="about__tag" style=format!("border-color: {accent}4d; color: {accent};")>
                                {*tag}
                            </span>
                        })
                        .collect_view()}
                </div>
            </section>
        </div>
    }
}
