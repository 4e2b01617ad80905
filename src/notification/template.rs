use crate::domain::Enquiry;
use anyhow::Context as _;
use tera::{Context, Tera};

/// The two notification layouts. A property enquiry without a property title
/// is rendered with the contact layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnquiryTemplate {
    Property,
    Contact,
}

impl EnquiryTemplate {
    pub fn for_enquiry(enquiry: &Enquiry) -> Self {
        match enquiry.enquired_property() {
            Some(_) => EnquiryTemplate::Property,
            None => EnquiryTemplate::Contact,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            EnquiryTemplate::Property => "property_enquiry",
            EnquiryTemplate::Contact => "contact_enquiry",
        }
    }
}

#[derive(Debug, Clone)]
pub struct RenderedEmail {
    pub subject: String,
    pub html: String,
    pub text: String,
}

/// Renders enquiry emails from the templates compiled into the binary.
///
/// HTML templates are auto-escaped, plain-text templates are not.
pub struct TemplateRenderer {
    engine: Tera,
    business_name: String,
}

impl TemplateRenderer {
    pub fn new(business_name: impl Into<String>) -> Result<Self, anyhow::Error> {
        let mut engine = Tera::default();
        engine
            .add_raw_templates(vec![
                (
                    "property_enquiry.html",
                    include_str!("../../templates/property_enquiry.html"),
                ),
                (
                    "property_enquiry.txt",
                    include_str!("../../templates/property_enquiry.txt"),
                ),
                (
                    "contact_enquiry.html",
                    include_str!("../../templates/contact_enquiry.html"),
                ),
                (
                    "contact_enquiry.txt",
                    include_str!("../../templates/contact_enquiry.txt"),
                ),
            ])
            .context("Failed to compile the enquiry email templates.")?;

        Ok(Self {
            engine,
            business_name: business_name.into(),
        })
    }

    pub fn render(&self, enquiry: &Enquiry) -> Result<RenderedEmail, anyhow::Error> {
        let template = EnquiryTemplate::for_enquiry(enquiry);
        let subject = subject_line(template, enquiry);

        let mut context = Context::new();
        context.insert("business_name", &self.business_name);
        context.insert("name", enquiry.name.as_ref());
        context.insert("phone", enquiry.phone.as_ref());
        context.insert("email", &enquiry.email);
        context.insert("message", &enquiry.message);
        match template {
            EnquiryTemplate::Property => {
                context.insert("property_title", &enquiry.enquired_property());
            }
            EnquiryTemplate::Contact => {
                context.insert("looking_for", &enquiry.looking_for);
                context.insert("area", &enquiry.area);
            }
        }

        let html = self
            .engine
            .render(&format!("{}.html", template.name()), &context)
            .with_context(|| format!("Failed to render the {} HTML email.", template.name()))?;
        let text = self
            .engine
            .render(&format!("{}.txt", template.name()), &context)
            .with_context(|| format!("Failed to render the {} text email.", template.name()))?;

        Ok(RenderedEmail {
            subject,
            html,
            text,
        })
    }
}

fn subject_line(template: EnquiryTemplate, enquiry: &Enquiry) -> String {
    match (template, enquiry.enquired_property()) {
        (EnquiryTemplate::Property, Some(title)) => {
            format!("🏠 New Property Enquiry: {}", title)
        }
        _ => format!("📩 New Contact Enquiry from {}", enquiry.name),
    }
}
