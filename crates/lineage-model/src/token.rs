use std::fmt;

use crate::ModelError;

/// Cell values that mean "no person here", compared case-insensitively.
pub const MISSING_SENTINELS: &[&str] = &["nan", "none"];

/// Returns true if the value is a missing-cell placeholder.
pub fn is_missing_sentinel(value: &str) -> bool {
    let trimmed = value.trim();
    MISSING_SENTINELS
        .iter()
        .any(|sentinel| trimmed.eq_ignore_ascii_case(sentinel))
}

/// Canonical identity of a person: trimmed, lowercased, never empty.
///
/// Two people whose names normalize to the same text are the same token.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct Token(String);

impl Token {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        let canonical = value.trim().to_lowercase();
        if canonical.is_empty() {
            return Err(ModelError::EmptyToken(value));
        }
        Ok(Self(canonical))
    }

    /// Canonicalizes a whole cell, treating missing sentinels as absent.
    pub fn from_cell(raw: &str) -> Option<Self> {
        if is_missing_sentinel(raw) {
            return None;
        }
        Self::new(raw).ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Token {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Token> for String {
    fn from(token: Token) -> Self {
        token.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_trims_and_lowercases() {
        let token = Token::new("  Mary Ann ").unwrap();
        assert_eq!(token.as_str(), "mary ann");
    }

    #[test]
    fn new_rejects_blank() {
        assert_eq!(
            Token::new("   "),
            Err(ModelError::EmptyToken("   ".to_string()))
        );
    }

    #[test]
    fn from_cell_drops_sentinels() {
        assert_eq!(Token::from_cell("NaN"), None);
        assert_eq!(Token::from_cell(" None "), None);
        assert_eq!(Token::from_cell(""), None);
        assert_eq!(Token::from_cell("Nancy").unwrap().as_str(), "nancy");
    }

    #[test]
    fn serde_round_trip_is_canonical() {
        let token: Token = serde_json::from_str("\"  JOHN2 \"").unwrap();
        assert_eq!(token.as_str(), "john2");
        assert_eq!(serde_json::to_string(&token).unwrap(), "\"john2\"");
        assert!(serde_json::from_str::<Token>("\" \"").is_err());
    }
}
