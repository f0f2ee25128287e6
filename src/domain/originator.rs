use crate::domain::validation::ValidationError;

/// Longest alphanumeric sender id networks will display.
pub const ALPHANUMERIC_MAX_LEN: usize = 11;
/// Longest numeric sender id (international phone number without prefix).
pub const NUMERIC_MAX_LEN: usize = 15;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Sender id shown on the handset (`from`).
///
/// Construction normalizes the input the way networks expect it: only ASCII letters
/// and digits survive, alphanumeric ids are cut to 11 characters, numeric ids lose
/// one leading `00` and are cut to 15 digits.
pub struct Originator(String);

impl Originator {
    /// Form field name used by Nexmo (`from`).
    pub const FIELD: &'static str = "from";

    /// Normalize an arbitrary sender id. Never fails; empty input stays empty.
    pub fn new(value: impl AsRef<str>) -> Self {
        Self(normalize(value.as_ref()))
    }

    /// Normalize a sender id given as raw bytes, rejecting anything that is not UTF-8.
    pub fn from_utf8(bytes: impl Into<Vec<u8>>) -> Result<Self, ValidationError> {
        let value = String::from_utf8(bytes.into())
            .map_err(|_| ValidationError::InvalidEncoding { field: Self::FIELD })?;
        Ok(Self::new(value))
    }

    /// Borrow the normalized sender id.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn normalize(input: &str) -> String {
    let mut stripped: String = input
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect();

    // Classification looks at the input before stripping.
    if input.chars().any(|ch| ch.is_ascii_alphabetic()) {
        stripped.truncate(ALPHANUMERIC_MAX_LEN);
        return stripped;
    }

    if stripped.starts_with("00") {
        stripped.replace_range(..2, "");
    }
    stripped.truncate(NUMERIC_MAX_LEN);
    stripped
}
