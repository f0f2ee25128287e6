//! Transport layer: HTTP and wire-format details (serialization/deserialization).

mod form;
mod lenient;
mod send;
mod webhook;

pub use form::encode_form_body;
pub use send::{
    decode_send_json_response, encode_binary_form, encode_text_form, encode_wap_push_form,
};
pub use webhook::{
    WebhookError, decode_delivery_receipt, decode_delivery_receipt_query, decode_inbound_message,
    decode_inbound_message_query, parse_scts,
};
