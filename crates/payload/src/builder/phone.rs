//! Number normalization shared by the tel: and wa.me builders.

/// Keeps only ASCII digits, dropping `+`, spaces, dashes, parentheses and
/// anything else a user might type into a number field.
fn digits_only(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

/// Normalizes a raw (country code, local number) pair into digit strings.
///
/// The country code loses its `+` and leading zeros. If the local number
/// starts with the country-code digits the user pasted a full international
/// number into the local field, so that duplicated prefix is stripped; leading
/// zeros are then stripped from what remains.
pub(super) fn normalize(code_raw: &str, number_raw: &str) -> (String, String) {
    let code = digits_only(code_raw);
    let code = code.trim_start_matches('0').to_string();

    let number = digits_only(number_raw);
    let local = if code.is_empty() {
        number.as_str()
    } else {
        number.strip_prefix(code.as_str()).unwrap_or(&number)
    };
    let local = local.trim_start_matches('0').to_string();

    (code, local)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_only() {
        assert_eq!(digits_only("+91 (987) 654-3210"), "919876543210");
        assert_eq!(digits_only("abc"), "");
        assert_eq!(digits_only(""), "");
    }

    #[test]
    fn test_normalize() {
        // (code, number, expected code, expected local)
        let vectors = [
            ("+91", "9876543210", "91", "9876543210"),
            ("091", "919876543210", "91", "9876543210"),
            ("91", "09876543210", "91", "9876543210"),
            ("+1", "(555) 012-3456", "1", "5550123456"),
            ("", "0123456", "", "123456"),
            ("+44", "44", "44", ""),
        ];

        for (code_raw, number_raw, code, local) in vectors {
            assert_eq!(
                normalize(code_raw, number_raw),
                (code.to_string(), local.to_string()),
                "normalize({code_raw:?}, {number_raw:?})"
            );
        }
    }
}
