use crate::domain::validation::ValidationError;

use phonenumber::country;

fn decode_utf8(field: &'static str, bytes: Vec<u8>) -> Result<String, ValidationError> {
    String::from_utf8(bytes).map_err(|_| ValidationError::InvalidEncoding { field })
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Nexmo account API key.
///
/// Invariant: non-empty after trimming.
pub struct ApiKey(String);

impl ApiKey {
    /// Form field name used by Nexmo (`username`).
    pub const FIELD: &'static str = "username";

    /// Create a validated [`ApiKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// Nexmo account API secret.
///
/// Invariant: must not be empty (whitespace is preserved and allowed).
pub struct ApiSecret(String);

impl ApiSecret {
    /// Form field name used by Nexmo (`password`).
    pub const FIELD: &'static str = "password";

    /// Create a validated [`ApiSecret`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the secret as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiSecret(..)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Unvalidated destination number as sent to Nexmo (`to`).
///
/// Invariant: non-empty after trimming. This type does not normalize; if you want
/// normalization, parse into [`PhoneNumber`] and convert it into [`RawPhoneNumber`].
pub struct RawPhoneNumber(String);

impl RawPhoneNumber {
    /// Form field name used by Nexmo (`to`).
    pub const FIELD: &'static str = "to";

    /// Create a validated (non-empty) raw phone number.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Raw (trimmed) value as sent to Nexmo.
    pub fn raw(&self) -> &str {
        &self.0
    }
}

impl From<PhoneNumber> for RawPhoneNumber {
    /// Convert an already-parsed phone number to the gateway's international format
    /// (E.164 digits without the leading `+`).
    fn from(value: PhoneNumber) -> Self {
        let digits = value
            .e164
            .strip_prefix('+')
            .unwrap_or(&value.e164)
            .to_owned();
        Self(digits)
    }
}

#[derive(Debug, Clone)]
/// Parsed phone number with an E.164 representation.
///
/// Equality, ordering, and hashing are based on the E.164 form.
pub struct PhoneNumber {
    raw: String,
    e164: String,
    parsed: phonenumber::PhoneNumber,
}

impl PhoneNumber {
    /// Form field name used by Nexmo (`to`).
    pub const FIELD: &'static str = "to";

    /// Parse and normalize a phone number into E.164.
    ///
    /// `default_region` is used when the input does not contain an explicit country prefix.
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let input = input.into();
        let raw = input.trim().to_owned();
        if raw.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }

        let parsed = phonenumber::parse(default_region, &raw)
            .map_err(|_| ValidationError::InvalidPhoneNumber { input: raw.clone() })?;

        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();

        Ok(Self { raw, e164, parsed })
    }

    /// Raw input after trimming.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Normalized E.164 representation.
    pub fn e164(&self) -> &str {
        &self.e164
    }

    /// The parsed phone number from the `phonenumber` crate.
    pub fn parsed(&self) -> &phonenumber::PhoneNumber {
        &self.parsed
    }
}

impl PartialEq for PhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        self.e164 == other.e164
    }
}

impl Eq for PhoneNumber {}

impl std::hash::Hash for PhoneNumber {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.e164.hash(state);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS message text (`text`).
///
/// Invariant: non-empty after trimming. The original value (including whitespace) is preserved.
pub struct MessageText(String);

impl MessageText {
    /// Form field name used by Nexmo (`text`).
    pub const FIELD: &'static str = "text";

    /// Create validated message text.
    ///
    /// Blank or whitespace-only text is rejected locally with
    /// [`ValidationError::Empty`] instead of being sent for the gateway to refuse.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Create message text from raw bytes, rejecting anything that is not UTF-8.
    pub fn from_utf8(bytes: impl Into<Vec<u8>>) -> Result<Self, ValidationError> {
        Self::new(decode_utf8(Self::FIELD, bytes.into())?)
    }

    /// Borrow the message text as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether any character falls outside 7-bit ASCII.
    pub fn needs_unicode(&self) -> bool {
        self.0.chars().any(|ch| u32::from(ch) > 127)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// WAP push title (`title`).
///
/// Invariant: non-empty after trimming.
pub struct WapTitle(String);

impl WapTitle {
    /// Form field name used by Nexmo (`title`).
    pub const FIELD: &'static str = "title";

    /// Create a validated title.
    ///
    /// Blank or whitespace-only titles are rejected locally with
    /// [`ValidationError::Empty`] instead of being sent for the gateway to refuse.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Create a title from raw bytes, rejecting anything that is not UTF-8.
    pub fn from_utf8(bytes: impl Into<Vec<u8>>) -> Result<Self, ValidationError> {
        Self::new(decode_utf8(Self::FIELD, bytes.into())?)
    }

    /// Borrow the title as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// WAP push link target (`url`).
///
/// Invariant: non-empty after trimming. Any form is accepted, scheme-less
/// (`www.example.com/offer`) included; the handset resolves it.
pub struct WapUrl(String);

impl WapUrl {
    /// Form field name used by Nexmo (`url`).
    pub const FIELD: &'static str = "url";

    /// Create a link target. Surrounding whitespace is dropped; blank input is
    /// rejected with [`ValidationError::Empty`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Create a URL from raw bytes, rejecting anything that is not UTF-8.
    pub fn from_utf8(bytes: impl Into<Vec<u8>>) -> Result<Self, ValidationError> {
        Self::new(decode_utf8(Self::FIELD, bytes.into())?)
    }

    /// Borrow the URL as provided (trimmed).
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// How long a WAP push stays valid, in milliseconds (`validity`).
pub struct ValidityMillis(u64);

impl ValidityMillis {
    /// Form field name used by Nexmo (`validity`).
    pub const FIELD: &'static str = "validity";

    /// 48 hours.
    pub const DEFAULT: Self = Self(172_800_000);

    /// Create a validity window (no range validation is performed).
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the underlying value in milliseconds.
    pub fn value(self) -> u64 {
        self.0
    }
}

impl Default for ValidityMillis {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Unix timestamp in seconds.
pub struct UnixTimestamp(u64);

impl UnixTimestamp {
    /// Create a timestamp value (no range validation is performed).
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the underlying timestamp in seconds.
    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Per-message status code reported by Nexmo.
///
/// `0` means the message part was accepted. The value is preserved as-is even when
/// the code is unknown to this crate.
pub struct StatusCode(i32);

impl StatusCode {
    /// The "accepted" code.
    pub const SUCCESS: Self = Self(0);

    /// Construct a status code from its integer representation.
    pub fn new(code: i32) -> Self {
        Self(code)
    }

    /// Get the integer code as provided by Nexmo.
    pub fn as_i32(self) -> i32 {
        self.0
    }

    /// Whether the gateway accepted the message part.
    pub fn is_success(self) -> bool {
        self == Self::SUCCESS
    }

    /// Map this code to a known status code variant, if one exists.
    pub fn known(self) -> Option<KnownStatusCode> {
        KnownStatusCode::from_code(self.0)
    }

    /// Returns `true` if this status code is considered retryable by the crate.
    pub fn is_retryable(self) -> bool {
        matches!(self.known(), Some(kind) if kind.is_retryable())
    }

    /// Returns `true` if this status code represents an authentication/authorization error.
    pub fn is_auth_error(self) -> bool {
        matches!(self.known(), Some(kind) if kind.is_auth_error())
    }
}

impl Default for StatusCode {
    fn default() -> Self {
        Self::SUCCESS
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
/// Documented Nexmo SMS status codes.
///
/// Unknown codes are preserved as [`StatusCode`] and return `None` from [`KnownStatusCode::from_code`].
pub enum KnownStatusCode {
    Success,
    Throttled,
    MissingParameters,
    InvalidParameters,
    InvalidCredentials,
    InternalError,
    InvalidMessage,
    NumberBarred,
    PartnerAccountBarred,
    PartnerQuotaExceeded,
    TooManyExistingBinds,
    AccountNotEnabledForRest,
    MessageTooLong,
    CommunicationFailed,
    InvalidSignature,
    InvalidSenderAddress,
    InvalidTtl,
    FacilityNotAllowed,
    InvalidMessageClass,
    BadCallbackMissingTls,
    NonWhitelistedDestination,
    SignatureAndSecretDisallowed,
    NumberDeactivated,
}

impl KnownStatusCode {
    /// Convert a raw Nexmo integer code into a known variant.
    pub fn from_code(code: i32) -> Option<Self> {
        Some(match code {
            0 => Self::Success,
            1 => Self::Throttled,
            2 => Self::MissingParameters,
            3 => Self::InvalidParameters,
            4 => Self::InvalidCredentials,
            5 => Self::InternalError,
            6 => Self::InvalidMessage,
            7 => Self::NumberBarred,
            8 => Self::PartnerAccountBarred,
            9 => Self::PartnerQuotaExceeded,
            10 => Self::TooManyExistingBinds,
            11 => Self::AccountNotEnabledForRest,
            12 => Self::MessageTooLong,
            13 => Self::CommunicationFailed,
            14 => Self::InvalidSignature,
            15 => Self::InvalidSenderAddress,
            16 => Self::InvalidTtl,
            19 => Self::FacilityNotAllowed,
            20 => Self::InvalidMessageClass,
            23 => Self::BadCallbackMissingTls,
            29 => Self::NonWhitelistedDestination,
            32 => Self::SignatureAndSecretDisallowed,
            33 => Self::NumberDeactivated,
            _ => return None,
        })
    }

    /// Whether this status is likely transient and can be retried.
    pub fn is_retryable(self) -> bool {
        matches!(
            self,
            Self::Throttled | Self::InternalError | Self::CommunicationFailed
        )
    }

    /// Whether this status indicates invalid or disallowed credentials.
    pub fn is_auth_error(self) -> bool {
        matches!(
            self,
            Self::InvalidCredentials | Self::InvalidSignature | Self::SignatureAndSecretDisallowed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_newtypes_trim_or_validate() {
        let key = ApiKey::new("  key ").unwrap();
        assert_eq!(key.as_str(), "key");
        assert!(ApiKey::new("  ").is_err());

        let secret = ApiSecret::new(" secret ").unwrap();
        assert_eq!(secret.as_str(), " secret ");
        assert!(ApiSecret::new("").is_err());

        let msg = MessageText::new(" hi ").unwrap();
        assert_eq!(msg.as_str(), " hi ");
        assert!(MessageText::new("  ").is_err());

        let title = WapTitle::new("Deals").unwrap();
        assert_eq!(title.as_str(), "Deals");
        assert!(WapTitle::new("").is_err());
    }

    #[test]
    fn secret_is_not_printed_by_debug() {
        let secret = ApiSecret::new("hunter2").unwrap();
        assert!(!format!("{secret:?}").contains("hunter2"));
    }

    #[test]
    fn byte_constructors_reject_invalid_utf8() {
        let bad = vec![0x66, 0x6f, 0xff, 0x6f];
        assert_eq!(
            MessageText::from_utf8(bad.clone()),
            Err(ValidationError::InvalidEncoding {
                field: MessageText::FIELD
            })
        );
        assert_eq!(
            WapTitle::from_utf8(bad.clone()),
            Err(ValidationError::InvalidEncoding {
                field: WapTitle::FIELD
            })
        );
        assert_eq!(
            WapUrl::from_utf8(bad),
            Err(ValidationError::InvalidEncoding {
                field: WapUrl::FIELD
            })
        );

        let ok = MessageText::from_utf8("héllo".as_bytes()).unwrap();
        assert_eq!(ok.as_str(), "héllo");
    }

    #[test]
    fn unicode_detection_uses_code_points_above_127() {
        assert!(!MessageText::new("plain ascii ~").unwrap().needs_unicode());
        assert!(MessageText::new("caf\u{e9}").unwrap().needs_unicode());
        assert!(MessageText::new("\u{1F600}").unwrap().needs_unicode());
        assert!(!MessageText::new("\u{7f}x").unwrap().needs_unicode());
    }

    #[test]
    fn wap_url_accepts_scheme_less_links() {
        let url = WapUrl::new(" https://example.com/offer ").unwrap();
        assert_eq!(url.as_str(), "https://example.com/offer");
        let url = WapUrl::new("www.example.com/offer").unwrap();
        assert_eq!(url.as_str(), "www.example.com/offer");
        assert!(matches!(
            WapUrl::new(""),
            Err(ValidationError::Empty { field: "url" })
        ));
    }

    #[test]
    fn blank_text_and_title_are_rejected_locally() {
        assert_eq!(
            MessageText::new(" \t"),
            Err(ValidationError::Empty { field: "text" })
        );
        assert_eq!(
            WapTitle::new(""),
            Err(ValidationError::Empty { field: "title" })
        );
        assert_eq!(MessageText::new(" hi ").unwrap().as_str(), " hi ");
    }

    #[test]
    fn validity_defaults_to_48_hours() {
        assert_eq!(ValidityMillis::default().value(), 172_800_000);
        assert_eq!(ValidityMillis::new(60_000).value(), 60_000);
    }

    #[test]
    fn raw_phone_number_trims_and_exposes_raw() {
        let raw = RawPhoneNumber::new(" 447700900000 ").unwrap();
        assert_eq!(raw.raw(), "447700900000");
        assert!(RawPhoneNumber::new("").is_err());
    }

    #[test]
    fn phone_number_converts_to_gateway_format() {
        let p1 = PhoneNumber::parse(None, "+44 7700 900000").unwrap();
        let p2 = PhoneNumber::parse(Some(country::Id::GB), "07700 900000").unwrap();
        assert_eq!(p1, p2);
        assert_eq!(p1.e164(), "+447700900000");

        let raw: RawPhoneNumber = p1.into();
        assert_eq!(raw.raw(), "447700900000");
        assert!(PhoneNumber::parse(None, "not-a-number").is_err());
    }

    #[test]
    fn status_code_knows_retryable_and_auth_errors() {
        assert!(StatusCode::new(0).is_success());
        assert_eq!(StatusCode::new(0).known(), Some(KnownStatusCode::Success));

        let throttled = StatusCode::new(1);
        assert!(throttled.is_retryable());
        assert!(!throttled.is_auth_error());

        let auth = StatusCode::new(4);
        assert!(auth.is_auth_error());
        assert!(!auth.is_retryable());

        let unknown = StatusCode::new(9999);
        assert!(unknown.known().is_none());
        assert!(!unknown.is_retryable());
        assert!(!unknown.is_auth_error());
    }
}
