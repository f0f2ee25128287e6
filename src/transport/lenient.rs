use std::str::FromStr;

use serde::Deserialize;
use serde::de::Error as DeError;

/// A message-part field (`message-id`, `remaining-balance`, `message-price`, ...).
///
/// The SMS API is inconsistent about quoting: the same field arrives as `"0A01"` in
/// one response and as a bare number in another. Bare numbers keep their exact
/// token so balances like `3.14115000` keep their trailing zeros.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WireScalar(String);

impl WireScalar {
    pub fn into_string(self) -> String {
        self.0
    }
}

impl<'de> Deserialize<'de> for WireScalar {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw: Box<serde_json::value::RawValue> = Deserialize::deserialize(deserializer)?;
        let token = raw.get();

        if token.starts_with('"') {
            return serde_json::from_str::<String>(token)
                .map(Self)
                .map_err(D::Error::custom);
        }
        if token.starts_with(|ch: char| ch == '-' || ch.is_ascii_digit()) {
            return Ok(Self(token.to_owned()));
        }
        Err(D::Error::custom(format!(
            "message part field must be a string or a number, got `{token}`"
        )))
    }
}

/// Status or count that may arrive quoted (`"status": "0"`) or bare (`"status": 0`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WireInt<T>(T);

impl<T> WireInt<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<'de, T> Deserialize<'de> for WireInt<T>
where
    T: FromStr,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = WireScalar::deserialize(deserializer)?.into_string();
        text.trim()
            .parse::<T>()
            .map(Self)
            .map_err(|_| D::Error::custom(format!("{text:?} is not a valid status or count")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_keeps_numeric_tokens_verbatim() {
        let quoted: WireScalar = serde_json::from_str(r#""3.14115000""#).unwrap();
        assert_eq!(quoted.into_string(), "3.14115000");

        let bare: WireScalar = serde_json::from_str("0.03330000").unwrap();
        assert_eq!(bare.into_string(), "0.03330000");

        let err = serde_json::from_str::<WireScalar>("true").unwrap_err();
        assert!(err.to_string().contains("must be a string or a number, got `true`"));
    }

    #[test]
    fn number_accepts_quoted_and_bare_integers() {
        let quoted: WireInt<i32> = serde_json::from_str(r#""15""#).unwrap();
        assert_eq!(quoted.into_inner(), 15);

        let bare: WireInt<u32> = serde_json::from_str("2").unwrap();
        assert_eq!(bare.into_inner(), 2);

        let err = serde_json::from_str::<WireInt<i32>>(r#""abc""#).unwrap_err();
        assert!(err.to_string().contains("\"abc\" is not a valid status or count"));
        assert!(serde_json::from_str::<WireInt<u32>>("1.5").is_err());
    }
}
