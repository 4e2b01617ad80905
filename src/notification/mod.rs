//! Turning a visitor enquiry into the notification email for the business inbox.

mod notifier;
mod template;

pub use notifier::EnquiryNotifier;
pub use template::{EnquiryTemplate, RenderedEmail, TemplateRenderer};
