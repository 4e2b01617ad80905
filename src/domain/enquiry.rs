use crate::domain::{PhoneNumber, VisitorName};

/// Where on the site the enquiry was submitted.
#[derive(serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EnquirySource {
    ContactForm,
    PropertyEnquiry,
}

impl EnquirySource {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnquirySource::ContactForm => "contact_form",
            EnquirySource::PropertyEnquiry => "property_enquiry",
        }
    }
}

impl std::fmt::Display for EnquirySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated visitor enquiry. Optional fields are `None` when the visitor
/// left them blank.
#[derive(Debug, Clone)]
pub struct Enquiry {
    pub name: VisitorName,
    pub phone: PhoneNumber,
    pub email: Option<String>,
    pub looking_for: Option<String>,
    pub area: Option<String>,
    pub message: Option<String>,
    pub property_title: Option<String>,
    pub source: EnquirySource,
}

impl Enquiry {
    pub fn new(name: VisitorName, phone: PhoneNumber, source: EnquirySource) -> Self {
        Self {
            name,
            phone,
            email: None,
            looking_for: None,
            area: None,
            message: None,
            property_title: None,
            source,
        }
    }

    pub fn with_email(mut self, email: Option<String>) -> Self {
        self.email = non_blank(email);
        self
    }

    pub fn with_looking_for(mut self, looking_for: Option<String>) -> Self {
        self.looking_for = non_blank(looking_for);
        self
    }

    pub fn with_area(mut self, area: Option<String>) -> Self {
        self.area = non_blank(area);
        self
    }

    pub fn with_message(mut self, message: Option<String>) -> Self {
        self.message = non_blank(message);
        self
    }

    pub fn with_property_title(mut self, property_title: Option<String>) -> Self {
        self.property_title = non_blank(property_title);
        self
    }

    /// The listing this enquiry is about, if it came from one.
    pub fn enquired_property(&self) -> Option<&str> {
        match self.source {
            EnquirySource::PropertyEnquiry => self.property_title.as_deref(),
            EnquirySource::ContactForm => None,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
