use leptos::prelude::*;

use crate::components::lead_form::{use_lead_form, FieldLabel, FormField, FormTextArea, SubmitButton};
use crate::components::typeahead::{Typeahead, TALENT_CATEGORIES};
use crate::config::FormKind;

#[component]
pub fn TalentPage() -> impl IntoView {
    let form = use_lead_form(FormKind::Talent);
    let in_flight = form.in_flight();
    let (category, set_category) = (form.value("category"), form.setter("category"));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        form.submit();
    };

    view! {
        <div class="form-page">
            <div class="form-page__header">
                <h1>
                    "Showcase Your "
                    <span class="gradient-text">"Talent"</span>
                </h1>
                <p>"Join our platform and connect with fashion enthusiasts, brands, and opportunities."</p>
            </div>

            <div class="form-page__card">
                <form class="lead-form" on:submit=on_submit novalidate>
                    <div class="lead-form__grid">
                        <FormField form=form name="fullName" label="Full Name" placeholder="Enter your full name" wide=true/>

                        <div class="lead-form__field lead-form__field--wide">
                            <FieldLabel name="category" label="Category" required=form.is_required("category")/>
                            <Typeahead
                                config=TALENT_CATEGORIES
                                id="category"
                                name="category"
                                value=category
                                on_change=set_category
                            />
                        </div>

                        <FormField form=form name="city" label="City" placeholder="City"/>
                        <FormField form=form name="state" label="State" placeholder="State or Country"/>
                        <FormField form=form name="email" label="Email" input_type="email" placeholder="your.email@example.com"/>
                        <FormField form=form name="phone" label="Phone" input_type="tel" placeholder="(555) 123-4567"/>
                        <FormField form=form name="dateOfBirth" label="Date of Birth" input_type="date"/>
                        <FormField form=form name="instagram" label="Instagram Handle" placeholder="@your_instagram_handle"/>
                        <FormField form=form name="website" label="Website" input_type="url" placeholder="https://yourwebsite.com"/>
                        <FormField form=form name="portfolio" label="Portfolio Link" input_type="url" placeholder="https://yourportfolio.com" wide=true/>
                        <FormTextArea
                            form=form
                            name="bio"
                            label="Bio"
                           
                            rows=6
                            placeholder="Tell us about yourself, your experience, and your goals..."
                        />
                    </div>

                    <SubmitButton in_flight=in_flight label="Submit Talent Profile"/>
                </form>
            </div>
        </div>
    }
}
