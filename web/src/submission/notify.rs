use leptos::prelude::*;
use thaw::{Toast, ToastBody, ToastIntent, ToastOptions, ToastPosition, ToastTitle, ToasterInjection};

/// The page shell's transient message surface.
pub trait Notifier {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Dispatches thaw toasts; needs a `ToasterProvider` above the caller.
#[derive(Clone)]
pub struct ToastNotifier {
    toaster: ToasterInjection,
}

impl ToastNotifier {
    pub fn new(toaster: ToasterInjection) -> Self {
        Self { toaster }
    }

    pub fn from_context() -> Self {
        Self::new(ToasterInjection::expect_context())
    }

    fn dispatch(&self, title: &'static str, message: &str, intent: ToastIntent) {
        let message = message.to_string();
        self.toaster.dispatch_toast(
            move || {
                view! {
                    <Toast>
                        <ToastTitle>{title}</ToastTitle>
                        <ToastBody>{message}</ToastBody>
                    </Toast>
                }
            },
            ToastOptions::default()
                .with_position(ToastPosition::TopEnd)
                .with_intent(intent),
        );
    }
}

impl Notifier for ToastNotifier {
    fn success(&self, message: &str) {
        self.dispatch("Success", message, ToastIntent::Success);
    }

    fn error(&self, message: &str) {
        self.dispatch("Something went wrong", message, ToastIntent::Error);
    }
}
