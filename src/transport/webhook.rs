use std::collections::BTreeMap;

use chrono::NaiveDate;
use url::form_urlencoded;

use crate::domain::{DeliveryReceipt, InboundMessage, ReceiptStatus, UnixTimestamp};

const SCTS_LEN: usize = 10;

const INBOUND_REQUIRED: [&str; 3] = ["text", "msisdn", "to"];
const RECEIPT_REQUIRED: [&str; 6] = [
    "msisdn",
    "network-code",
    "messageId",
    "to",
    "status",
    "scts",
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WebhookError {
    #[error("webhook payload is missing `{field}`")]
    MissingField { field: &'static str },

    #[error("invalid scts timestamp {value:?}: expected YYMMDDhhmm")]
    InvalidTimestamp { value: String },
}

type Payload = BTreeMap<String, String>;

fn collect_payload<I, K, V>(pairs: I) -> Payload
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(key, value)| (key.into(), value.into()))
        .collect()
}

fn parse_query(query: &str) -> Payload {
    let query = query.strip_prefix('?').unwrap_or(query);
    collect_payload(form_urlencoded::parse(query.as_bytes()))
}

fn first_missing(payload: &Payload, required: &[&'static str]) -> Option<&'static str> {
    required
        .iter()
        .copied()
        .find(|key| !payload.contains_key(*key))
}

/// Decode an inbound-message webhook from its key/value pairs.
///
/// The sender arrives as `msisdn`, the number it was sent to as `to`.
pub fn decode_inbound_message<I, K, V>(pairs: I) -> Result<InboundMessage, WebhookError>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    inbound_from_payload(collect_payload(pairs))
}

/// Decode an inbound-message webhook from a raw query string (leading `?` optional).
pub fn decode_inbound_message_query(query: &str) -> Result<InboundMessage, WebhookError> {
    inbound_from_payload(parse_query(query))
}

fn inbound_from_payload(mut payload: Payload) -> Result<InboundMessage, WebhookError> {
    if let Some(field) = first_missing(&payload, &INBOUND_REQUIRED) {
        tracing::debug!(field, "inbound message payload is incomplete");
        return Err(WebhookError::MissingField { field });
    }

    let mut take = |key: &'static str| {
        payload
            .remove(key)
            .ok_or(WebhookError::MissingField { field: key })
    };

    let to = take("to")?;
    let from = take("msisdn")?;
    let text = take("text")?;

    Ok(InboundMessage {
        to,
        from,
        text,
        message_id: payload.remove("messageId"),
        message_type: payload.remove("type"),
        keyword: payload.remove("keyword"),
    })
}

/// Decode a delivery-receipt webhook from its key/value pairs.
///
/// Returns `Ok(None)` when the payload is not a complete receipt. Note that the
/// roles of `msisdn` and `to` are the reverse of the inbound-message webhook:
/// here `msisdn` is the handset the message went to and `to` is our sender id.
pub fn decode_delivery_receipt<I, K, V>(
    pairs: I,
) -> Result<Option<DeliveryReceipt>, WebhookError>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    receipt_from_payload(collect_payload(pairs))
}

/// Decode a delivery-receipt webhook from a raw query string (leading `?` optional).
pub fn decode_delivery_receipt_query(
    query: &str,
) -> Result<Option<DeliveryReceipt>, WebhookError> {
    receipt_from_payload(parse_query(query))
}

fn receipt_from_payload(mut payload: Payload) -> Result<Option<DeliveryReceipt>, WebhookError> {
    if let Some(field) = first_missing(&payload, &RECEIPT_REQUIRED) {
        tracing::debug!(field, "delivery receipt payload is incomplete");
        return Ok(None);
    }

    let mut take = |key: &'static str| {
        payload
            .remove(key)
            .ok_or(WebhookError::MissingField { field: key })
    };

    let to = take("msisdn")?;
    let from = take("to")?;
    let network = take("network-code")?;
    let message_id = take("messageId")?;
    let status = ReceiptStatus::parse(&take("status")?);
    let received_time = parse_scts(&take("scts")?)?;

    Ok(Some(DeliveryReceipt {
        to,
        from,
        network,
        message_id,
        status,
        received_time,
        err_code: payload.remove("err-code"),
        price: payload.remove("price"),
        client_ref: payload.remove("client-ref"),
    }))
}

/// Parse a service-centre timestamp: exactly ten digits, `YYMMDDhhmm`, read as UTC
/// in the 2000s with seconds set to zero.
pub fn parse_scts(value: &str) -> Result<UnixTimestamp, WebhookError> {
    let invalid = || WebhookError::InvalidTimestamp {
        value: value.to_owned(),
    };

    let bytes = value.as_bytes();
    if bytes.len() != SCTS_LEN || !bytes.iter().all(u8::is_ascii_digit) {
        return Err(invalid());
    }
    let pair = |at: usize| (bytes[at] - b'0') * 10 + (bytes[at + 1] - b'0');

    let year = 2000 + i32::from(pair(0));
    let datetime = NaiveDate::from_ymd_opt(year, u32::from(pair(2)), u32::from(pair(4)))
        .and_then(|date| date.and_hms_opt(u32::from(pair(6)), u32::from(pair(8)), 0))
        .ok_or_else(invalid)?;

    u64::try_from(datetime.and_utc().timestamp())
        .map(UnixTimestamp::new)
        .map_err(|_| invalid())
}
