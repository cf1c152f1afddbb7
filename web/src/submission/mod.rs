pub mod delay;
pub mod error;
pub mod notify;
pub mod outcome;
pub mod submitter;
pub mod transport;

pub use delay::{Delay, TimeoutDelay};
pub use error::TransportError;
pub use notify::{Notifier, ToastNotifier};
pub use outcome::{SubmissionOutcome, SubmitPhase};
pub use submitter::FormSubmitter;
pub use transport::{HttpTransport, SubmissionTransport, SubmitReply};
