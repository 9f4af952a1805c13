use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Which generation form is active. Selects the validation rules and the
/// builder rule that apply; fixed for the duration of one generation attempt.
#[derive(Clone, Copy, Debug, Display, EnumString, Eq, PartialEq, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
pub enum PayloadType {
    Url,
    Phone,
    Email,
    Wifi,
    Text,
    Messaging,
    ContactCard,
}

/// Encryption mode of the WIFI payload. The wire spellings are the ones the
/// WIFI scheme expects (`WPA`, `WEP`, `nopass`); `nopass` suppresses the
/// password clause entirely.
#[derive(Clone, Copy, Debug, Default, Display, EnumString, Eq, PartialEq, Serialize, Deserialize)]
pub enum WifiEncryption {
    #[default]
    #[strum(serialize = "WPA")]
    Wpa,
    #[strum(serialize = "WEP")]
    Wep,
    #[strum(serialize = "nopass")]
    None,
}

/// Every form field the core reads, one variant per distinct field. Phone and
/// Messaging carry independent number fields on purpose. The string form is
/// the field identifier shared with the UI shell.
#[derive(AsRefStr, Clone, Copy, Debug, Display, EnumString, Eq, Hash, PartialEq)]
pub enum Field {
    #[strum(serialize = "input-url")]
    Url,
    #[strum(serialize = "phone-code")]
    PhoneCode,
    #[strum(serialize = "phone-number")]
    PhoneNumber,
    #[strum(serialize = "email-address")]
    EmailAddress,
    #[strum(serialize = "email-subject")]
    EmailSubject,
    #[strum(serialize = "email-body")]
    EmailBody,
    #[strum(serialize = "wifi-ssid")]
    WifiSsid,
    #[strum(serialize = "wifi-password")]
    WifiPassword,
    #[strum(serialize = "wifi-encryption")]
    WifiEncryption,
    #[strum(serialize = "text-message")]
    TextMessage,
    #[strum(serialize = "wa-code")]
    MessagingCode,
    #[strum(serialize = "wa-number")]
    MessagingNumber,
    #[strum(serialize = "wa-message")]
    MessagingText,
    #[strum(serialize = "vc-name")]
    ContactName,
    #[strum(serialize = "vc-phone")]
    ContactPhone,
    #[strum(serialize = "vc-email")]
    ContactEmail,
    #[strum(serialize = "vc-org")]
    ContactOrg,
}

/// The field-access collaborator seam: anything that can hand the core the
/// current raw value of a form field. The core never writes through it.
pub trait FieldSource {
    /// Raw value of a field, or `None` when the field does not exist at all.
    fn raw(&self, field: Field) -> Option<&str>;

    /// Value with surrounding whitespace removed; a missing field reads as
    /// the empty string.
    fn trimmed(&self, field: Field) -> &str {
        self.raw(field).map_or("", str::trim)
    }
}

/// A plain key-to-string snapshot of the form values relevant to one payload
/// type. Deserializes from a JSON object keyed by the field identifiers.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(transparent)]
pub struct FieldSet(HashMap<String, String>);

impl FieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, value: impl Into<String>) {
        self.0.insert(field.as_ref().to_string(), value.into());
    }

    /// Builder-style insert, convenient for assembling a set in one expression.
    #[must_use]
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.insert(field, value);
        self
    }
}

impl From<HashMap<String, String>> for FieldSet {
    fn from(values: HashMap<String, String>) -> Self {
        Self(values)
    }
}

impl FieldSource for FieldSet {
    fn raw(&self, field: Field) -> Option<&str> {
        self.0.get(field.as_ref()).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_identifiers() {
        assert_eq!(Field::Url.as_ref(), "input-url");
        assert_eq!(Field::MessagingCode.as_ref(), "wa-code");
        assert_eq!(Field::ContactOrg.as_ref(), "vc-org");
        assert_eq!("wifi-ssid".parse::<Field>().unwrap(), Field::WifiSsid);
    }

    #[test]
    fn test_payload_type_round_trip() {
        assert_eq!("wifi".parse::<PayloadType>().unwrap(), PayloadType::Wifi);
        assert_eq!(
            "contact_card".parse::<PayloadType>().unwrap(),
            PayloadType::ContactCard
        );
        assert_eq!(PayloadType::Messaging.to_string(), "messaging");
    }

    #[test]
    fn test_wifi_encryption_wire_spellings() {
        assert_eq!("WPA".parse::<WifiEncryption>().unwrap(), WifiEncryption::Wpa);
        assert_eq!(
            "nopass".parse::<WifiEncryption>().unwrap(),
            WifiEncryption::None
        );
        assert_eq!(WifiEncryption::Wep.to_string(), "WEP");
        assert_eq!(WifiEncryption::default(), WifiEncryption::Wpa);
    }

    #[test]
    fn test_missing_field_reads_empty() {
        let fields = FieldSet::new();
        assert_eq!(fields.raw(Field::Url), None);
        assert_eq!(fields.trimmed(Field::Url), "");
    }

    #[test]
    fn test_trimmed_strips_whitespace() {
        let fields = FieldSet::new().with(Field::TextMessage, "  hello \n");
        assert_eq!(fields.raw(Field::TextMessage), Some("  hello \n"));
        assert_eq!(fields.trimmed(Field::TextMessage), "hello");
    }

    #[test]
    fn test_field_set_from_json_object() {
        let fields: FieldSet = serde_json::from_str(
            r#"{"phone-code": "+91", "phone-number": "9876543210"}"#,
        )
        .unwrap();
        assert_eq!(fields.trimmed(Field::PhoneCode), "+91");
        assert_eq!(fields.trimmed(Field::PhoneNumber), "9876543210");
        assert_eq!(fields.trimmed(Field::EmailAddress), "");
    }
}
