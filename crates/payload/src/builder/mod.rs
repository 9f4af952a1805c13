mod percent_encode;
mod phone;


use tracing::debug;

use crate::models::{Field, FieldSource, PayloadType, WifiEncryption};

/// Builds the payload string for the active payload type.
///
/// Total and deterministic: never fails, returns `None` when the required
/// fields are empty, even if the caller skipped validation. Optional fields
/// that are empty are simply omitted from the output.
pub fn build<F: FieldSource>(payload_type: PayloadType, fields: &F) -> Option<String> {
    debug!("building {payload_type} payload");
    match payload_type {
        PayloadType::Url => trimmed_verbatim(fields, Field::Url),
        PayloadType::Phone => build_phone(fields),
        PayloadType::Email => build_email(fields),
        PayloadType::Wifi => build_wifi(fields),
        PayloadType::Text => trimmed_verbatim(fields, Field::TextMessage),
        PayloadType::Messaging => build_messaging(fields),
        PayloadType::ContactCard => build_contact_card(fields),
    }
}

fn trimmed_verbatim<F: FieldSource>(fields: &F, field: Field) -> Option<String> {
    let value = fields.trimmed(field);
    (!value.is_empty()).then(|| value.to_string())
}

fn build_phone<F: FieldSource>(fields: &F) -> Option<String> {
    let number_raw = fields.trimmed(Field::PhoneNumber);
    if number_raw.is_empty() {
        return None;
    }

    let (code, local) = phone::normalize(fields.trimmed(Field::PhoneCode), number_raw);
    Some(format!("tel:+{code}{local}"))
}

fn build_email<F: FieldSource>(fields: &F) -> Option<String> {
    let address = fields.trimmed(Field::EmailAddress);
    if address.is_empty() {
        return None;
    }

    let mut params = Vec::new();
    let subject = fields.trimmed(Field::EmailSubject);
    if !subject.is_empty() {
        params.push(format!("subject={}", percent_encode::encode(subject)));
    }
    let body = fields.trimmed(Field::EmailBody);
    if !body.is_empty() {
        params.push(format!("body={}", percent_encode::encode(body)));
    }

    let query = if params.is_empty() {
        String::new()
    } else {
        format!("?{}", params.join("&"))
    };
    Some(format!("mailto:{address}{query}"))
}

fn build_wifi<F: FieldSource>(fields: &F) -> Option<String> {
    let ssid = fields.trimmed(Field::WifiSsid);
    if ssid.is_empty() {
        return None;
    }

    let encryption = fields
        .trimmed(Field::WifiEncryption)
        .parse::<WifiEncryption>()
        .unwrap_or_default();

    let password_clause = match encryption {
        WifiEncryption::None => String::new(),
        WifiEncryption::Wpa | WifiEncryption::Wep => {
            format!("P:{};", escape_wifi(fields.trimmed(Field::WifiPassword)))
        }
    };

    Some(format!(
        "WIFI:T:{encryption};S:{};{password_clause};",
        escape_wifi(ssid)
    ))
}

fn build_messaging<F: FieldSource>(fields: &F) -> Option<String> {
    let number_raw = fields.trimmed(Field::MessagingNumber);
    if number_raw.is_empty() {
        return None;
    }

    let (code, local) = phone::normalize(fields.trimmed(Field::MessagingCode), number_raw);

    // wa.me wants the bare digits, no plus sign and no scheme prefix.
    let message = fields.trimmed(Field::MessagingText);
    let text_part = if message.is_empty() {
        String::new()
    } else {
        format!("?text={}", percent_encode::encode(message))
    };
    Some(format!("https://wa.me/{code}{local}{text_part}"))
}

fn build_contact_card<F: FieldSource>(fields: &F) -> Option<String> {
    let name = fields.trimmed(Field::ContactName);
    let phone = fields.trimmed(Field::ContactPhone);
    let email = fields.trimmed(Field::ContactEmail);
    let org = fields.trimmed(Field::ContactOrg);

    // Org alone is not enough to form a meaningful card.
    if name.is_empty() && phone.is_empty() && email.is_empty() {
        return None;
    }

    let mut vcard = String::from("BEGIN:VCARD\nVERSION:3.0\n");
    vcard.push_str(&format!("FN:{name}\n"));
    if !name.is_empty() {
        vcard.push_str(&format!("N:{name};;;;\n"));
    }
    if !phone.is_empty() {
        vcard.push_str(&format!("TEL;TYPE=CELL:{phone}\n"));
    }
    if !email.is_empty() {
        vcard.push_str(&format!("EMAIL:{email}\n"));
    }
    if !org.is_empty() {
        vcard.push_str(&format!("ORG:{org}\n"));
    }
    vcard.push_str("END:VCARD");
    Some(vcard)
}

/// Backslash-escapes the characters the WIFI scheme treats as special in
/// SSIDs and passwords: `\`, `;`, `,`, `:` and `"`.
fn escape_wifi(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '\\' | ';' | ',' | ':' | '"') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
