/// Where a submission attempt currently is. Anything but `Idle` means the
/// submit control is disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Validating,
    Probing,
    Submitting,
    Simulating,
}

impl SubmitPhase {
    pub fn is_in_flight(self) -> bool {
        self != SubmitPhase::Idle
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Success { message: String, simulated: bool },
    ValidationFailure { missing: Vec<String> },
    TransportFailure { reason: String },
}

impl SubmissionOutcome {
    /// Only a success clears the form; failures leave the draft for another try.
    pub fn resets_draft(&self) -> bool {
        matches!(self, SubmissionOutcome::Success { .. })
    }

    pub fn message(&self) -> &str {
        match self {
            SubmissionOutcome::Success { message, .. } => message,
            SubmissionOutcome::ValidationFailure { .. } => super::submitter::REQUIRED_FIELDS_MESSAGE,
            SubmissionOutcome::TransportFailure { reason } => reason,
        }
    }
}
