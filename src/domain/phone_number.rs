#[derive(Debug, Clone)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Only presence is checked; visitors type numbers in every format.
    pub fn parse(s: String) -> Result<PhoneNumber, String> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("The phone number must not be empty.".to_string());
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
