//! Contact form controller: field state, submit flow and the timed status reset.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, error};

use crate::transport::{ContactFormData, ContactTransport};

/// How long the error banner stays up.
pub const ERROR_RESET_AFTER: Duration = Duration::from_secs(3);
/// How long the success banner stays up.
pub const SUCCESS_RESET_AFTER: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Sending,
    Success,
    Error,
}

impl FormStatus {
    pub fn button_label(self) -> &'static str {
        match self {
            FormStatus::Sending => "Sending...",
            _ => "Send Message",
        }
    }

    /// Banner shown under the form, if any. The error banner points at
    /// `contact_email` as the fallback channel.
    pub fn banner(self, contact_email: &str) -> Option<String> {
        match self {
            FormStatus::Success => Some(
                "Thank you! Your message has been sent successfully. I'll get back to you soon."
                    .to_string(),
            ),
            FormStatus::Error => Some(format!(
                "Oops! Something went wrong. Please try again or contact me directly at {contact_email}"
            )),
            FormStatus::Idle | FormStatus::Sending => None,
        }
    }
}

#[derive(Debug, Default)]
struct FormState {
    fields: ContactFormData,
    status: FormStatus,
    /// Bumped on every status change that supersedes a pending reset.
    generation: u64,
}

/// Owns the form fields and status for one page instance.
///
/// Status resets run as tokio tasks. Scheduling a reset cancels the pending
/// one, starting a send cancels it, and dropping the form cancels it.
pub struct ContactForm {
    transport: Arc<dyn ContactTransport>,
    state: Arc<Mutex<FormState>>,
    pending_reset: Mutex<Option<JoinHandle<()>>>,
}

impl ContactForm {
    pub fn new(transport: Arc<dyn ContactTransport>) -> Self {
        Self {
            transport,
            state: Arc::new(Mutex::new(FormState::default())),
            pending_reset: Mutex::new(None),
        }
    }

    pub fn status(&self) -> FormStatus {
        self.lock().status
    }

    pub fn fields(&self) -> ContactFormData {
        self.lock().fields.clone()
    }

    pub fn set_name(&self, value: impl Into<String>) {
        self.lock().fields.name = value.into();
    }

    pub fn set_email(&self, value: impl Into<String>) {
        self.lock().fields.email = value.into();
    }

    pub fn set_message(&self, value: impl Into<String>) {
        self.lock().fields.message = value.into();
    }

    /// The submit control is disabled while a send is in flight.
    pub fn can_submit(&self) -> bool {
        self.status() != FormStatus::Sending
    }

    /// Runs one submission and returns the resulting status.
    ///
    /// Incomplete input goes straight to `Error` without a request. A submit
    /// while `Sending` is ignored.
    pub async fn submit(&self) -> FormStatus {
        let form = {
            let mut state = self.lock();
            if state.status == FormStatus::Sending {
                debug!("Ignoring submit while a send is in flight");
                return FormStatus::Sending;
            }
            if !state.fields.is_complete() {
                drop(state);
                self.finish(FormStatus::Error, ERROR_RESET_AFTER, false);
                return FormStatus::Error;
            }
            state.status = FormStatus::Sending;
            state.generation += 1;
            state.fields.clone()
        };
        self.cancel_reset();

        match self.transport.submit(&form).await {
            Ok(()) => {
                self.finish(FormStatus::Success, SUCCESS_RESET_AFTER, true);
                FormStatus::Success
            }
            Err(e) => {
                error!("Contact form submission failed: {e}");
                self.finish(FormStatus::Error, ERROR_RESET_AFTER, false);
                FormStatus::Error
            }
        }
    }

    /// Sets the terminal status and schedules its reset to `Idle`.
    fn finish(&self, status: FormStatus, reset_after: Duration, clear_fields: bool) {
        let generation = {
            let mut state = self.lock();
            if clear_fields {
                state.fields = ContactFormData::default();
            }
            state.status = status;
            state.generation += 1;
            state.generation
        };

        let shared = Arc::clone(&self.state);
        let task = tokio::spawn(async move {
            tokio::time::sleep(reset_after).await;
            let mut state = shared.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            // a newer status owns the banner now
            if state.generation == generation {
                state.status = FormStatus::Idle;
            }
        });

        let previous = self.reset_slot().replace(task);
        if let Some(previous) = previous {
            previous.abort();
        }
    }

    fn cancel_reset(&self) {
        if let Some(task) = self.reset_slot().take() {
            task.abort();
        }
    }

    fn lock(&self) -> MutexGuard<'_, FormState> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn reset_slot(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
        self.pending_reset
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Drop for ContactForm {
    fn drop(&mut self) {
        self.cancel_reset();
    }
}
