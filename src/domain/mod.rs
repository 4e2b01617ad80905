mod email_address;
mod enquiry;
mod phone_number;
mod visitor_name;

pub use email_address::{EmailAddress, Mailbox};
pub use enquiry::{Enquiry, EnquirySource};
pub use phone_number::PhoneNumber;
pub use visitor_name::VisitorName;
