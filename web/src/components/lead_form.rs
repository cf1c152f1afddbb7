use std::rc::Rc;

use leptos::{prelude::*, task::spawn_local};
use shared_types::FormDraft;
use thaw::{Button, ButtonAppearance, ButtonType};

use crate::config::{FormKind, SiteEnvironment};
use crate::submission::{FormSubmitter, HttpTransport, Notifier, SubmitPhase, TimeoutDelay, ToastNotifier};

/// Draft and submission state for one lead-capture page.
#[derive(Clone, Copy)]
pub struct LeadForm {
    pub kind: FormKind,
    pub draft: RwSignal<FormDraft>,
    pub phase: RwSignal<SubmitPhase>,
    site: StoredValue<SiteEnvironment>,
    notifier: StoredValue<Rc<dyn Notifier>, LocalStorage>,
}

pub fn use_lead_form(kind: FormKind) -> LeadForm {
    let site = use_context::<SiteEnvironment>().unwrap_or_else(SiteEnvironment::detect);
    LeadForm::new(kind, site, ToastNotifier::from_context())
}

impl LeadForm {
    pub fn new(kind: FormKind, site: SiteEnvironment, notifier: impl Notifier + 'static) -> Self {
        let notifier: Rc<dyn Notifier> = Rc::new(notifier);
        Self {
            kind,
            draft: RwSignal::new(FormDraft::empty(kind.config().fields)),
            phase: RwSignal::new(SubmitPhase::Idle),
            site: StoredValue::new(site),
            notifier: StoredValue::new_local(notifier),
        }
    }

    pub fn is_required(self, field: &str) -> bool {
        self.kind.config().is_required(field)
    }

    /// The committed value of one field. Memoized so readers only rerun
    /// when that field changes, not on every edit to the draft.
    pub fn value(self, field: &'static str) -> Signal<String> {
        let draft = self.draft;
        Memo::new(move |_| draft.with(|d| d.get(field).to_string())).into()
    }

    pub fn setter(self, field: &'static str) -> Callback<String> {
        let draft = self.draft;
        Callback::new(move |value: String| draft.update(|d| d.set(field, value)))
    }

    pub fn in_flight(self) -> Signal<bool> {
        let phase = self.phase;
        Signal::derive(move || phase.get().is_in_flight())
    }

    /// Starts a submission attempt unless one is already running.
    pub fn submit(self) {
        if self.phase.get_untracked().is_in_flight() {
            return;
        }

        self.phase.set(SubmitPhase::Validating);
        let config = self.kind.config();
        let snapshot = self.draft.get_untracked();
        let submitter = FormSubmitter::new(config, self.site.get_value(), HttpTransport::new(), TimeoutDelay);
        let notifier = self.notifier.get_value();
        let (draft, phase) = (self.draft, self.phase);

        spawn_local(async move {
            let outcome = submitter
                .submit(&snapshot, notifier.as_ref(), move |next| {
                    let _ = phase.try_set(next);
                })
                .await;
            if outcome.resets_draft() {
                let _ = draft.try_set(FormDraft::empty(config.fields));
            }
        });
    }
}

#[component]
pub fn FormField(
    form: LeadForm,
    name: &'static str,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] wide: bool,
) -> impl IntoView {
    let (draft, required) = (form.draft, form.is_required(name));
    view! {
        <div class=if wide { "lead-form__field lead-form__field--wide" } else { "lead-form__field" }>
            <FieldLabel name=name label=label required=required/>
            <input
                id=name
                name=name
                type=input_type
                class="lead-form__input"
                placeholder=placeholder
                aria-required=required.to_string()
                prop:value=move || draft.with(|d| d.get(name).to_string())
                on:input=move |ev| draft.update(|d| d.set(name, event_target_value(&ev)))
            />
        </div>
    }
}

#[component]
pub fn FormTextArea(
    form: LeadForm,
    name: &'static str,
    label: &'static str,
    #[prop(optional)] placeholder: &'static str,
    #[prop(default = 5)] rows: u32,
) -> impl IntoView {
    let (draft, required) = (form.draft, form.is_required(name));
    view! {
        <div class="lead-form__field lead-form__field--wide">
            <FieldLabel name=name label=label required=required/>
            <textarea
                id=name
                name=name
                class="lead-form__input lead-form__textarea"
                rows=rows.to_string()
                placeholder=placeholder
                aria-required=required.to_string()
                prop:value=move || draft.with(|d| d.get(name).to_string())
                on:input=move |ev| draft.update(|d| d.set(name, event_target_value(&ev)))
            ></textarea>
        </div>
    }
}

#[component]
pub fn FieldLabel(name: &'static str, label: &'static str, required: bool) -> impl IntoView {
    view! {
        <label for=name class="lead-form__label">
            {label}
            {required.then(|| view! { <span class="lead-form__required">" *"</span> })}
        </label>
    }
}

#[component]
pub fn SubmitButton(#[prop(into)] in_flight: Signal<bool>, label: &'static str) -> impl IntoView {
    view! {
        <Button
            class="lead-form__submit"
            appearance=ButtonAppearance::Primary
            button_type=ButtonType::Submit
            loading=in_flight
            disabled=in_flight
        >
            {move || if in_flight.get() { "Submitting..." } else { label }}
        </Button>
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::time::Duration;

    use leptos::task::Executor;
    use mockito::Server;
    use tokio::task::LocalSet;

    use super::*;
    use crate::config::BRAND_FORM;

    #[derive(Clone, Default)]
    struct RecordingNotifier {
        notes: Rc<RefCell<Vec<String>>>,
    }

    impl Notifier for RecordingNotifier {
        fn success(&self, message: &str) {
            self.notes.borrow_mut().push(format!("success: {message}"));
        }

        fn error(&self, message: &str) {
            self.notes.borrow_mut().push(format!("error: {message}"));
        }
    }

    fn fill_required(form: LeadForm) {
        form.draft.update(|d| {
            for field in BRAND_FORM.required {
                d.set(field, "x");
            }
        });
    }

    async fn wait_until_idle(form: LeadForm) {
        tokio::time::timeout(Duration::from_secs(5), async {
            while form.phase.get_untracked().is_in_flight() {
                tokio::time::sleep(Duration::from_millis(10)).await;
            }
        })
        .await
        .expect("submission did not finish");
    }

    #[tokio::test]
    async fn second_submit_while_in_flight_is_ignored() {
        _ = Executor::init_tokio();
        let owner = Owner::new();
        owner.set();

        LocalSet::new()
            .run_until(async {
                let mut server = Server::new_async().await;
                let m = server
                    .mock("POST", "/api/brand-submit")
                    .with_status(200)
                    .with_header("content-type", "application/json")
                    .with_body(r#"{"message":"Thanks"}"#)
                    .expect(1)
                    .create_async()
                    .await;

                let notifier = RecordingNotifier::default();
                let site = SiteEnvironment::new("fashionnights.example", server.url());
                let form = LeadForm::new(FormKind::Brand, site, notifier.clone());
                fill_required(form);

                form.submit();
                assert_eq!(form.phase.get_untracked(), SubmitPhase::Validating);
                form.submit();
                wait_until_idle(form).await;

                m.assert_async().await;
                assert_eq!(*notifier.notes.borrow(), vec!["success: Thanks".to_string()]);
                assert_eq!(form.draft.get_untracked(), FormDraft::empty(BRAND_FORM.fields));
            })
            .await;
    }

    #[tokio::test]
    async fn validation_failure_keeps_draft_and_returns_to_idle() {
        _ = Executor::init_tokio();
        let owner = Owner::new();
        owner.set();

        LocalSet::new()
            .run_until(async {
                let notifier = RecordingNotifier::default();
                let site = SiteEnvironment::new("fashionnights.example", "https://fashionnights.example");
                let form = LeadForm::new(FormKind::Brand, site, notifier.clone());
                form.setter("brandName").run("Acme".to_string());

                form.submit();
                wait_until_idle(form).await;

                assert_eq!(
                    *notifier.notes.borrow(),
                    vec!["error: Please fill out all required fields.".to_string()]
                );
                assert_eq!(form.draft.with_untracked(|d| d.get("brandName").to_string()), "Acme");
                assert!(!form.in_flight().get_untracked());
            })
            .await;
    }

    #[test]
    fn required_markers_follow_form_config() {
        let owner = Owner::new();
        owner.set();
        let form = LeadForm::new(FormKind::Brand, SiteEnvironment::default(), RecordingNotifier::default());
        assert!(form.is_required("collaborationInterest"));
        assert!(!form.is_required("website"));
    }
}
