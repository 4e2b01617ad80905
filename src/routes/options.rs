/// Answers every CORS preflight. The headers themselves are added by the
/// `Cors` fairing, which runs for all responses.
#[options("/<_..>")]
pub fn preflight() {}
