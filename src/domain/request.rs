use crate::domain::originator::Originator;
use crate::domain::value::{MessageText, RawPhoneNumber, ValidityMillis, WapTitle, WapUrl};

/// Encoding requested for a text message (`type`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextType {
    /// GSM 7-bit; every character is ASCII.
    Text,
    /// UCS-2; at least one character is above code point 127.
    Unicode,
}

impl TextType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Unicode => "unicode",
        }
    }

    fn detect(text: &MessageText) -> Self {
        if text.needs_unicode() {
            Self::Unicode
        } else {
            Self::Text
        }
    }
}

/// Plain text SMS.
#[derive(Debug, Clone)]
pub struct SendText {
    to: RawPhoneNumber,
    from: Originator,
    text: MessageText,
    text_type: TextType,
}

impl SendText {
    pub fn new(to: RawPhoneNumber, from: Originator, text: MessageText) -> Self {
        let text_type = TextType::detect(&text);
        Self {
            to,
            from,
            text,
            text_type,
        }
    }

    pub fn to(&self) -> &RawPhoneNumber {
        &self.to
    }

    pub fn from(&self) -> &Originator {
        &self.from
    }

    pub fn text(&self) -> &MessageText {
        &self.text
    }

    pub fn text_type(&self) -> TextType {
        self.text_type
    }
}

/// Binary SMS with a user-data header; both parts are sent hex-encoded.
#[derive(Debug, Clone)]
pub struct SendBinary {
    to: RawPhoneNumber,
    from: Originator,
    body: Vec<u8>,
    udh: Vec<u8>,
}

impl SendBinary {
    pub fn new(
        to: RawPhoneNumber,
        from: Originator,
        body: impl Into<Vec<u8>>,
        udh: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            to,
            from,
            body: body.into(),
            udh: udh.into(),
        }
    }

    pub fn to(&self) -> &RawPhoneNumber {
        &self.to
    }

    pub fn from(&self) -> &Originator {
        &self.from
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn udh(&self) -> &[u8] {
        &self.udh
    }
}

/// WAP push: a titled link the handset offers to open.
#[derive(Debug, Clone)]
pub struct PushWap {
    to: RawPhoneNumber,
    from: Originator,
    title: WapTitle,
    url: WapUrl,
    validity: ValidityMillis,
}

impl PushWap {
    /// Build a WAP push valid for [`ValidityMillis::DEFAULT`] (48 hours).
    pub fn new(to: RawPhoneNumber, from: Originator, title: WapTitle, url: WapUrl) -> Self {
        Self {
            to,
            from,
            title,
            url,
            validity: ValidityMillis::DEFAULT,
        }
    }

    pub fn with_validity(mut self, validity: ValidityMillis) -> Self {
        self.validity = validity;
        self
    }

    pub fn to(&self) -> &RawPhoneNumber {
        &self.to
    }

    pub fn from(&self) -> &Originator {
        &self.from
    }

    pub fn title(&self) -> &WapTitle {
        &self.title
    }

    pub fn url(&self) -> &WapUrl {
        &self.url
    }

    pub fn validity(&self) -> ValidityMillis {
        self.validity
    }
}
