use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::{
    error::{InvalidField, InvalidReason},
    models::{Field, FieldSource, PayloadType},
};

static URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(https?://)[\w.-]+").expect("valid regex"));
static COUNTRY_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?\d{1,4}$").expect("valid regex"));
static LOCAL_NUMBER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{6,15}$").expect("valid regex"));
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"));

/// Checks the fields of the active payload type against its constraints.
///
/// Fields are checked in a fixed order per type and the first failure is
/// returned; later fields are not inspected. Pure predicate, no UI concerns.
pub fn validate<F: FieldSource>(
    payload_type: PayloadType,
    fields: &F,
) -> Result<(), InvalidField> {
    debug!("validating {payload_type} fields");
    match payload_type {
        PayloadType::Url => {
            let url = fields.trimmed(Field::Url);
            if !URL_REGEX.is_match(url) {
                return Err(InvalidField::new(Field::Url, InvalidReason::InvalidUrl));
            }
            Ok(())
        }
        PayloadType::Phone => validate_number_pair(
            fields,
            Field::PhoneCode,
            Field::PhoneNumber,
            InvalidReason::InvalidLocalNumber,
        ),
        PayloadType::Email => {
            let address = fields.trimmed(Field::EmailAddress);
            if !EMAIL_REGEX.is_match(address) {
                return Err(InvalidField::new(
                    Field::EmailAddress,
                    InvalidReason::InvalidEmail,
                ));
            }
            Ok(())
        }
        PayloadType::Wifi => validate_non_empty(fields, Field::WifiSsid, InvalidReason::EmptySsid),
        PayloadType::Text => {
            validate_non_empty(fields, Field::TextMessage, InvalidReason::EmptyText)
        }
        PayloadType::Messaging => validate_number_pair(
            fields,
            Field::MessagingCode,
            Field::MessagingNumber,
            InvalidReason::InvalidMessagingNumber,
        ),
        PayloadType::ContactCard => {
            let any_filled = [Field::ContactName, Field::ContactPhone, Field::ContactEmail]
                .into_iter()
                .any(|field| !fields.trimmed(field).is_empty());
            if !any_filled {
                return Err(InvalidField::new(
                    Field::ContactName,
                    InvalidReason::NoContactFields,
                ));
            }
            Ok(())
        }
    }
}

fn validate_non_empty<F: FieldSource>(
    fields: &F,
    field: Field,
    reason: InvalidReason,
) -> Result<(), InvalidField> {
    if fields.trimmed(field).is_empty() {
        return Err(InvalidField::new(field, reason));
    }
    Ok(())
}

/// Country code first, then the local number; the local-number reason differs
/// between the tel: form and the messaging form.
fn validate_number_pair<F: FieldSource>(
    fields: &F,
    code_field: Field,
    number_field: Field,
    number_reason: InvalidReason,
) -> Result<(), InvalidField> {
    if !COUNTRY_CODE_REGEX.is_match(fields.trimmed(code_field)) {
        return Err(InvalidField::new(
            code_field,
            InvalidReason::InvalidCountryCode,
        ));
    }
    if !LOCAL_NUMBER_REGEX.is_match(fields.trimmed(number_field)) {
        return Err(InvalidField::new(number_field, number_reason));
    }
    Ok(())
}
