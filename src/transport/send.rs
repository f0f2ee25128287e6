use std::fmt;

use serde::de::{Error as DeError, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer};

use super::lenient::{WireInt, WireScalar};
use crate::domain::{
    DeliveryResult, MessagePart, MessageText, Originator, PushWap, RawPhoneNumber, SendBinary,
    SendText, StatusCode, ValidityMillis, WapTitle, WapUrl,
};

const TYPE_FIELD: &str = "type";

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
}

// The live gateway hyphenates its keys (`message-count`, `error-text`); older
// deployments and documentation use the compact spelling.
#[derive(Debug, Deserialize)]
struct SendJsonResponse {
    #[serde(default, rename = "messagecount", alias = "message-count")]
    message_count: Option<WireInt<u32>>,
    #[serde(default, deserialize_with = "parts_or_empty")]
    messages: Vec<MessagePartJson>,
}

#[derive(Debug, Deserialize)]
struct MessagePartJson {
    status: WireInt<i32>,
    #[serde(default, rename = "errortext", alias = "error-text")]
    error_text: Option<String>,
    #[serde(default, rename = "messageid", alias = "message-id")]
    message_id: Option<WireScalar>,
    #[serde(default)]
    to: Option<WireScalar>,
    #[serde(default, rename = "remainingbalance", alias = "remaining-balance")]
    remaining_balance: Option<WireScalar>,
    #[serde(default, rename = "messageprice", alias = "message-price")]
    message_price: Option<WireScalar>,
    #[serde(default)]
    network: Option<WireScalar>,
}

impl From<MessagePartJson> for MessagePart {
    fn from(value: MessagePartJson) -> Self {
        Self {
            status: StatusCode::new(value.status.into_inner()),
            error_text: value.error_text,
            message_id: value.message_id.map(WireScalar::into_string),
            to: value.to.map(WireScalar::into_string),
            remaining_balance: value.remaining_balance.map(WireScalar::into_string),
            message_price: value.message_price.map(WireScalar::into_string),
            network: value.network.map(WireScalar::into_string),
        }
    }
}

/// A `messages` member that is not an array counts as no parts. Elements of an
/// array must all decode.
fn parts_or_empty<'de, D>(deserializer: D) -> Result<Vec<MessagePartJson>, D::Error>
where
    D: Deserializer<'de>,
{
    struct PartsVisitor;

    impl<'de> Visitor<'de> for PartsVisitor {
        type Value = Vec<MessagePartJson>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a list of message parts")
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where
            A: SeqAccess<'de>,
        {
            let mut parts = Vec::new();
            while let Some(part) = seq.next_element::<MessagePartJson>()? {
                parts.push(part);
            }
            Ok(parts)
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
            Ok(Vec::new())
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: DeError,
        {
            Ok(Vec::new())
        }

        fn visit_bool<E>(self, _: bool) -> Result<Self::Value, E>
        where
            E: DeError,
        {
            Ok(Vec::new())
        }

        fn visit_i64<E>(self, _: i64) -> Result<Self::Value, E>
        where
            E: DeError,
        {
            Ok(Vec::new())
        }

        fn visit_u64<E>(self, _: u64) -> Result<Self::Value, E>
        where
            E: DeError,
        {
            Ok(Vec::new())
        }

        fn visit_f64<E>(self, _: f64) -> Result<Self::Value, E>
        where
            E: DeError,
        {
            Ok(Vec::new())
        }

        fn visit_str<E>(self, _: &str) -> Result<Self::Value, E>
        where
            E: DeError,
        {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(PartsVisitor)
}

pub fn encode_text_form(request: &SendText) -> Vec<(String, String)> {
    vec![
        (
            Originator::FIELD.to_owned(),
            request.from().as_str().to_owned(),
        ),
        (
            RawPhoneNumber::FIELD.to_owned(),
            request.to().raw().to_owned(),
        ),
        (
            MessageText::FIELD.to_owned(),
            request.text().as_str().to_owned(),
        ),
        (
            TYPE_FIELD.to_owned(),
            request.text_type().as_str().to_owned(),
        ),
    ]
}

pub fn encode_binary_form(request: &SendBinary) -> Vec<(String, String)> {
    vec![
        (
            Originator::FIELD.to_owned(),
            request.from().as_str().to_owned(),
        ),
        (
            RawPhoneNumber::FIELD.to_owned(),
            request.to().raw().to_owned(),
        ),
        (TYPE_FIELD.to_owned(), "binary".to_owned()),
        ("body".to_owned(), hex::encode(request.body())),
        ("udh".to_owned(), hex::encode(request.udh())),
    ]
}

pub fn encode_wap_push_form(request: &PushWap) -> Vec<(String, String)> {
    vec![
        (
            Originator::FIELD.to_owned(),
            request.from().as_str().to_owned(),
        ),
        (
            RawPhoneNumber::FIELD.to_owned(),
            request.to().raw().to_owned(),
        ),
        (TYPE_FIELD.to_owned(), "wappush".to_owned()),
        (WapUrl::FIELD.to_owned(), request.url().as_str().to_owned()),
        (
            WapTitle::FIELD.to_owned(),
            request.title().as_str().to_owned(),
        ),
        (
            ValidityMillis::FIELD.to_owned(),
            request.validity().value().to_string(),
        ),
    ]
}

/// Decode a send response. Either the whole body decodes or nothing does.
pub fn decode_send_json_response(json: &str) -> Result<DeliveryResult, TransportError> {
    let parsed: SendJsonResponse = serde_json::from_str(json)?;

    let messages = parsed
        .messages
        .into_iter()
        .map(MessagePart::from)
        .collect::<Vec<_>>();
    let message_count = match parsed.message_count {
        Some(count) => count.into_inner(),
        None => u32::try_from(messages.len()).unwrap_or(u32::MAX),
    };

    Ok(DeliveryResult {
        message_count,
        messages,
    })
}
