use leptos::prelude::*;

use crate::components::lead_form::{use_lead_form, FieldLabel, FormField, FormTextArea, SubmitButton};
use crate::components::showcase::{ShowcaseGrid, FEATURED_MEMBERS};
use crate::components::typeahead::{Typeahead, AGE_GROUPS};
use crate::config::FormKind;

const COMMUNITY_ROLES: &[(&str, &str)] = &[
    ("Events", "Volunteer at runway shows, pop-ups and launch nights."),
    ("Media", "Create content and share the stories behind the looks."),
    ("Culture", "Meet designers, stylists and creatives in your city."),
];

#[component]
pub fn CommunityPage() -> impl IntoView {
    let form = use_lead_form(FormKind::Community);
    let in_flight = form.in_flight();
    let (age_group, set_age_group) = (form.value("ageGroup"), form.setter("ageGroup"));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        form.submit();
    };

    view! {
        <div class="form-page form-page--community">
            <div class="form-page__header">
                <h1>
                    "Join the "
                    <span class="gradient-text">"Fashion Nights"</span>
                    " Community"
                </h1>
                <p>"Be part of fashion culture, media, and events."</p>
            </div>

            <ShowcaseGrid heading="Featured Community Members" cards=FEATURED_MEMBERS/>

            <section class="community-roles">
                {COMMUNITY_ROLES
                    .iter()
                    .map(|(title, blurb)| view! {
                        <div class="community-roles__item">
                            <h3>{*title}</h3>
                            <p>{*blurb}</p>
                        </div>
                    })
                    .collect_view()}
            </section>

            <div class="form-page__card">
                <form class="lead-form" on:submit=on_submit novalidate>
                    <div class="lead-form__grid">
                        <FormField form=form name="name" label="Full Name" placeholder="Your name" wide=true/>

                        <div class="lead-form__field lead-form__field--wide">
                            <FieldLabel name="ageGroup" label="Age Group" required=form.is_required("ageGroup")/>
                            <Typeahead
                                config=AGE_GROUPS
                                id="ageGroup"
                                name="ageGroup"
                                value=age_group
                                on_change=set_age_group
                            />
                        </div>

                        <FormField form=form name="city" label="City" placeholder="City"/>
                        <FormField form=form name="state" label="State" placeholder="State or Country"/>
                        <FormField form=form name="email" label="Email" input_type="email" placeholder="your.email@example.com"/>
                        <FormField form=form name="phone" label="Phone" input_type="tel" placeholder="(555) 123-4567"/>
                        <FormField form=form name="username" label="Username" placeholder="Choose a unique username"/>
                        <FormField form=form name="instagram" label="Instagram" placeholder="@your_instagram_handle"/>
                        <FormField form=form name="interests" label="Interests" placeholder="Events, styling, photography..." wide=true/>
                        <FormTextArea form=form name="notes" label="Anything else?" rows=4 placeholder="Tell us what you'd love to get involved in"/>
                    </div>

                    <SubmitButton in_flight=in_flight label="Join the Community"/>
                </form>
            </div>
        </div>
    }
}
