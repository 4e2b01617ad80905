use crate::domain::{Enquiry, EnquirySource, PhoneNumber, VisitorName};
use crate::notification::EnquiryNotifier;
use crate::routes::error_chain_fmt;
use rocket::http::Status;
use rocket::response::Responder;
use rocket::serde::json::{self, Json};
use rocket::{Request, State};
use uuid::Uuid;

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnquiryRequest {
    name: String,
    phone: String,
    email: Option<String>,
    looking_for: Option<String>,
    area: Option<String>,
    message: Option<String>,
    property_title: Option<String>,
    source: EnquirySource,
}

impl TryFrom<EnquiryRequest> for Enquiry {
    type Error = String;

    fn try_from(request: EnquiryRequest) -> Result<Self, Self::Error> {
        let name = VisitorName::parse(request.name)?;
        let phone = PhoneNumber::parse(request.phone)?;
        Ok(Enquiry::new(name, phone, request.source)
            .with_email(request.email)
            .with_looking_for(request.looking_for)
            .with_area(request.area)
            .with_message(request.message)
            .with_property_title(request.property_title))
    }
}

#[derive(serde::Serialize)]
pub struct EnquiryAccepted {
    success: bool,
    data: serde_json::Value,
}

#[tracing::instrument(
    name = "Handling a new enquiry",
    skip(body, notifier),
    fields(
        request_id = %Uuid::new_v4(),
        enquiry_source = tracing::field::Empty,
        visitor_name = tracing::field::Empty
    )
)]
#[post("/send-enquiry", data = "<body>")]
pub async fn send_enquiry(
    body: Result<Json<EnquiryRequest>, json::Error<'_>>,
    notifier: &State<EnquiryNotifier>,
) -> Result<Json<EnquiryAccepted>, EnquiryError> {
    let request = body
        .map_err(|e| EnquiryError::ValidationError(format!("Invalid enquiry payload: {}", e)))?
        .into_inner();
    let enquiry: Enquiry = request
        .try_into()
        .map_err(EnquiryError::ValidationError)?;

    let span = tracing::Span::current();
    span.record("enquiry_source", &tracing::field::display(enquiry.source));
    span.record("visitor_name", &tracing::field::display(&enquiry.name));
    tracing::info!("Received enquiry");

    let data = notifier.notify(&enquiry).await?;
    Ok(Json(EnquiryAccepted {
        success: true,
        data,
    }))
}

#[derive(thiserror::Error)]
pub enum EnquiryError {
    #[error("{0}")]
    ValidationError(String),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for EnquiryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl EnquiryError {
    fn status(&self) -> Status {
        match self {
            EnquiryError::ValidationError(_) => Status::BadRequest,
            EnquiryError::UnexpectedError(_) => Status::InternalServerError,
        }
    }
}

impl<'r> Responder<'r, 'static> for EnquiryError {
    fn respond_to(self, request: &'r Request<'_>) -> rocket::response::Result<'static> {
        match &self {
            EnquiryError::ValidationError(_) => tracing::warn!("EnquiryError: {:?}", self),
            EnquiryError::UnexpectedError(_) => tracing::error!("EnquiryError: {:?}", self),
        }
        // `{:#}` keeps the whole anyhow context chain on one line.
        let body = serde_json::json!({
            "success": false,
            "error": format!("{:#}", self),
        });
        (self.status(), Json(body)).respond_to(request)
    }
}
