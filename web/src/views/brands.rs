use leptos::prelude::*;

use crate::components::lead_form::{use_lead_form, FieldLabel, FormField, FormTextArea, SubmitButton};
use crate::components::typeahead::{Typeahead, BRAND_CATEGORIES};
use crate::config::FormKind;

#[component]
pub fn BrandsPage() -> impl IntoView {
    let form = use_lead_form(FormKind::Brand);
    let in_flight = form.in_flight();
    let (category, set_category) = (form.value("category"), form.setter("category"));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        form.submit();
    };

    view! {
        <div class="form-page">
            <div class="form-page__header">
                <h1>"Partner With Us"</h1>
                <p>"Connect with talented individuals in the fashion industry for collaborations"</p>
            </div>

            <div class="form-page__card">
                <form class="lead-form" on:submit=on_submit novalidate>
                    <div class="lead-form__grid">
                        <FormField form=form name="brandName" label="Brand Name" placeholder="Enter your brand name"/>
                        <FormField form=form name="contactPerson" label="Contact Person" placeholder="Your name"/>
                        <FormField form=form name="email" label="Email" input_type="email" placeholder="Business email address"/>
                        <FormField form=form name="phone" label="Phone" input_type="tel" placeholder="Contact phone number"/>

                        <div class="lead-form__field lead-form__field--wide">
                            <FieldLabel name="category" label="Category" required=form.is_required("category")/>
                            <Typeahead
                                config=BRAND_CATEGORIES
                                id="category"
                                name="category"
                                value=category
                                on_change=set_category
                            />
                        </div>

                        <FormField form=form name="website" label="Website" input_type="url" placeholder="https://your-brand-website.com"/>
                        <FormField form=form name="instagram" label="Instagram" placeholder="@your_brand"/>
                        <FormTextArea
                            form=form
                            name="collaborationInterest"
                            label="Collaboration Interest"
                           
                            placeholder="Describe the type of collaboration you're interested in..."
                        />
                    </div>

                    <SubmitButton in_flight=in_flight label="Submit Partnership Inquiry"/>
                </form>
            </div>
        </div>
    }
}
