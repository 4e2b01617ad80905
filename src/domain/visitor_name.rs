#[derive(Debug, Clone)]
pub struct VisitorName(String);

impl VisitorName {
    /// Returns an instance of `VisitorName` if the input is not blank.
    /// Surrounding whitespace is dropped.
    pub fn parse(s: String) -> Result<VisitorName, String> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("The visitor's name must not be empty.".to_string());
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl AsRef<str> for VisitorName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VisitorName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
