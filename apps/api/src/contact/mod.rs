// Contact form relay: validates a submission and sends the owner
// notification plus the submitter acknowledgment.

pub mod handlers;
pub mod templates;
pub mod validation;
