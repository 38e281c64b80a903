//! Client-side state for the portfolio page.
//!
//! `PageState` owns navigation state and the `ContactForm`, which validates
//! presence, posts to `/api/contact` through a `ContactTransport`, and resets
//! its status banner on a timer.

pub mod contact_form;
pub mod page;
pub mod transport;

pub use contact_form::{ContactForm, FormStatus, ERROR_RESET_AFTER, SUCCESS_RESET_AFTER};
pub use page::{PageState, Section, SectionBounds};
pub use transport::{ContactFormData, ContactTransport, HttpContactTransport, SubmitError};
