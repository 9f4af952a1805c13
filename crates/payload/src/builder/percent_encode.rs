// Byte-wise percent encoding matching what browser form front-ends apply to
// query parameters (the encodeURIComponent escaping rules).

/// Percent-encode a string for use as a URI query parameter value.
/// Leaves alphanumerics and `- _ . ! ~ * ' ( )` untouched.
pub(super) fn encode(input: &str) -> String {
    let mut result = String::new();

    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => {
                result.push(byte as char);
            }
            _ => {
                use std::fmt::Write;
                result.push('%');
                write!(result, "{byte:02X}").expect("writing to String cannot fail");
            }
        }
    }

    result
}
