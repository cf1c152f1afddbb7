use std::time::Duration;

use leptos::logging::{error, log, warn};
use shared_types::FormDraft;

use super::delay::Delay;
use super::notify::Notifier;
use super::outcome::{SubmissionOutcome, SubmitPhase};
use super::transport::{SubmissionTransport, SubmitReply};
use crate::config::{Environment, FormConfig, SiteEnvironment};

pub const REQUIRED_FIELDS_MESSAGE: &str = "Please fill out all required fields.";
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to submit form. Please try again.";
pub const SIMULATED_LATENCY: Duration = Duration::from_secs(1);

/// Submits one form: validate, pick live or simulated delivery, notify.
///
/// Deployed sites always post to the real endpoint. On a loopback host the
/// local backend is probed first and, when it is not up, the submission is
/// simulated so the forms stay usable without a backend running.
pub struct FormSubmitter<T, D> {
    config: FormConfig,
    site: SiteEnvironment,
    submit_url: String,
    health_url: String,
    transport: T,
    delay: D,
}

impl<T, D> FormSubmitter<T, D>
where
    T: SubmissionTransport,
    D: Delay,
{
    pub fn new(config: &FormConfig, site: SiteEnvironment, transport: T, delay: D) -> Self {
        Self {
            submit_url: config.submit_url(&site),
            health_url: config.health_url.to_string(),
            config: config.clone(),
            site,
            transport,
            delay,
        }
    }

    pub fn with_submit_url(mut self, url: impl Into<String>) -> Self {
        self.submit_url = url.into();
        self
    }

    pub fn with_health_url(mut self, url: impl Into<String>) -> Self {
        self.health_url = url.into();
        self
    }

    /// Runs one submission attempt to completion.
    ///
    /// `on_phase` sees every transition and always ends on `SubmitPhase::Idle`,
    /// whichever way the attempt exits. Exactly one notification is issued.
    pub async fn submit<N, F>(&self, draft: &FormDraft, notifier: &N, on_phase: F) -> SubmissionOutcome
    where
        N: Notifier + ?Sized,
        F: Fn(SubmitPhase),
    {
        let _idle = IdleOnDrop(&on_phase);

        let outcome = self.run(draft, &on_phase).await;
        if outcome.resets_draft() {
            notifier.success(outcome.message());
        } else {
            notifier.error(outcome.message());
        }
        outcome
    }

    async fn run(&self, draft: &FormDraft, on_phase: &impl Fn(SubmitPhase)) -> SubmissionOutcome {
        on_phase(SubmitPhase::Validating);
        let missing = draft.missing(self.config.required);
        if !missing.is_empty() {
            log!("{} form missing required fields: {:?}", self.config.kind.label(), missing);
            return SubmissionOutcome::ValidationFailure {
                missing: missing.into_iter().map(str::to_string).collect(),
            };
        }

        match self.site.kind() {
            Environment::Deployed => self.deliver(draft, on_phase).await,
            Environment::Development => {
                on_phase(SubmitPhase::Probing);
                match self.transport.probe_health(&self.health_url).await {
                    Ok(report) if report.is_ready() => self.deliver(draft, on_phase).await,
                    Ok(report) => {
                        warn!("backend at {} reported {:?}, simulating", self.health_url, report.status);
                        self.simulate(draft, on_phase).await
                    }
                    Err(e) => {
                        warn!("backend at {} unavailable ({}), simulating", self.health_url, e);
                        self.simulate(draft, on_phase).await
                    }
                }
            }
        }
    }

    async fn deliver(&self, draft: &FormDraft, on_phase: &impl Fn(SubmitPhase)) -> SubmissionOutcome {
        on_phase(SubmitPhase::Submitting);
        match self.transport.post_draft(&self.submit_url, draft).await {
            Ok(reply) if reply.is_success() => SubmissionOutcome::Success {
                message: self.success_message(reply),
                simulated: false,
            },
            Ok(reply) => {
                warn!("{} rejected submission with status {}", self.submit_url, reply.status);
                let reason = match reply.message {
                    Some(message) => format!("Error: {}", message),
                    None => format!("Error: request failed with status {}", reply.status),
                };
                SubmissionOutcome::TransportFailure { reason }
            }
            Err(e) => {
                error!("Error submitting {} form: {}", self.config.kind.label(), e);
                SubmissionOutcome::TransportFailure {
                    reason: GENERIC_FAILURE_MESSAGE.to_string(),
                }
            }
        }
    }

    async fn simulate(&self, draft: &FormDraft, on_phase: &impl Fn(SubmitPhase)) -> SubmissionOutcome {
        on_phase(SubmitPhase::Simulating);
        self.delay.wait(SIMULATED_LATENCY).await;
        log!("Form data would be sent to email service: {:?}", draft);
        SubmissionOutcome::Success {
            message: self.config.simulated_message.to_string(),
            simulated: true,
        }
    }

    fn success_message(&self, reply: SubmitReply) -> String {
        reply
            .message
            .filter(|message| !message.trim().is_empty())
            .unwrap_or_else(|| self.config.success_fallback.to_string())
    }
}

struct IdleOnDrop<'a, F: Fn(SubmitPhase)>(&'a F);

impl<F: Fn(SubmitPhase)> Drop for IdleOnDrop<'_, F> {
    fn drop(&mut self) {
        (self.0)(SubmitPhase::Idle);
    }
}
