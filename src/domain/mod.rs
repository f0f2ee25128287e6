//! Domain layer: strong types with validation and invariants (no I/O).

mod inbound;
mod originator;
mod request;
mod response;
mod validation;
mod value;

pub use inbound::{DeliveryReceipt, InboundMessage, ReceiptStatus};
pub use originator::{ALPHANUMERIC_MAX_LEN, NUMERIC_MAX_LEN, Originator};
pub use request::{PushWap, SendBinary, SendText, TextType};
pub use response::{DeliveryResult, MessagePart};
pub use validation::ValidationError;
pub use value::{
    ApiKey, ApiSecret, KnownStatusCode, MessageText, PhoneNumber, RawPhoneNumber, StatusCode,
    UnixTimestamp, ValidityMillis, WapTitle, WapUrl,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_key_rejects_empty() {
        assert!(matches!(
            ApiKey::new("   "),
            Err(ValidationError::Empty {
                field: ApiKey::FIELD
            })
        ));
    }

    #[test]
    fn api_secret_rejects_empty() {
        assert!(matches!(
            ApiSecret::new(""),
            Err(ValidationError::Empty {
                field: ApiSecret::FIELD
            })
        ));
    }

    #[test]
    fn phone_number_parses_with_region_and_trims() {
        let pn = PhoneNumber::parse(Some(phonenumber::country::Id::GB), " 07700900000 ").unwrap();
        assert_eq!(pn.raw(), "07700900000");
    }

    #[test]
    fn send_text_from_raw_bytes_validates_each_field() {
        let to = RawPhoneNumber::new("447700900000").unwrap();

        let bad_from = Originator::from_utf8(vec![0xff, 0xfe]);
        assert!(matches!(
            bad_from,
            Err(ValidationError::InvalidEncoding { field: "from" })
        ));

        let bad_text = MessageText::from_utf8(vec![0xe2, 0x82]);
        assert!(matches!(
            bad_text,
            Err(ValidationError::InvalidEncoding { field: "text" })
        ));

        let request = SendText::new(
            to,
            Originator::from_utf8(b"0044 7700 900001".to_vec()).unwrap(),
            MessageText::from_utf8("hi".as_bytes()).unwrap(),
        );
        assert_eq!(request.from().as_str(), "447700900001");
    }

    #[test]
    fn status_code_known_mapping() {
        let code = StatusCode::new(15);
        assert_eq!(code.known(), Some(KnownStatusCode::InvalidSenderAddress));

        let unknown = StatusCode::new(999_999);
        assert_eq!(unknown.known(), None);
    }
}
