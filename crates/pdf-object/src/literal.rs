//! Codecs for the textual forms of PDF strings and names.
//!
//! - Literal strings: backslash escapes inside `( ... )`
//! - Hexadecimal strings: pairs of hex digits inside `< ... >`
//! - Names: `#XX` escapes for bytes that may not appear bare after `/`

use crate::error::{PdfError, Result};

/// Unescape the text of a literal string to raw bytes.
///
/// Handles the escapes `\n \r \t \b \f \( \) \\`, octal `\d`, `\dd` and
/// `\ddd` (bits beyond the low byte are dropped), and a backslash before an
/// end-of-line marker, which continues the string on the next line. A
/// backslash before any other character stands for that character.
///
/// # Example
/// ```
/// use pdf_object::literal::unescape;
/// assert_eq!(unescape(r"a\(b\)\101").unwrap(), b"a(b)A");
/// ```
pub fn unescape(s: &str) -> Result<Vec<u8>> {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        if b != b'\\' {
            out.push(b);
            i += 1;
            continue;
        }

        i += 1;
        let Some(&esc) = bytes.get(i) else {
            return Err(PdfError::Encoding(format!(
                "unescape: dangling backslash at end of {:?}",
                s
            )));
        };

        match esc {
            b'n' => out.push(b'\n'),
            b'r' => out.push(b'\r'),
            b't' => out.push(b'\t'),
            b'b' => out.push(0x08),
            b'f' => out.push(0x0C),
            b'(' | b')' | b'\\' => out.push(esc),
            b'\n' => {}
            b'\r' => {
                // \r\n counts as a single end-of-line marker
                if bytes.get(i + 1) == Some(&b'\n') {
                    i += 1;
                }
            }
            b'0'..=b'7' => {
                let mut code: u32 = 0;
                let mut digits = 0;
                while digits < 3 {
                    match bytes.get(i) {
                        Some(&d @ b'0'..=b'7') => {
                            code = code * 8 + u32::from(d - b'0');
                            digits += 1;
                            i += 1;
                        }
                        _ => break,
                    }
                }
                out.push((code & 0xFF) as u8);
                continue;
            }
            other => out.push(other),
        }
        i += 1;
    }

    Ok(out)
}

/// Escape raw bytes so they can be written between the parentheses of a
/// literal string. Inverse of [`unescape`].
pub fn escape(raw: &[u8]) -> String {
    let mut out = String::with_capacity(raw.len());
    for &b in raw {
        match b {
            b'\\' => out.push_str("\\\\"),
            b'(' => out.push_str("\\("),
            b')' => out.push_str("\\)"),
            b'\n' => out.push_str("\\n"),
            b'\r' => out.push_str("\\r"),
            b'\t' => out.push_str("\\t"),
            0x08 => out.push_str("\\b"),
            0x0C => out.push_str("\\f"),
            0x20..=0x7E => out.push(b as char),
            _ => out.push_str(&format!("\\{:03o}", b)),
        }
    }
    out
}

/// Decode the digits of a hexadecimal string.
///
/// The input must consist of an even number of hex digits (either case).
pub fn decode_hex(s: &str) -> Result<Vec<u8>> {
    let bytes = s.as_bytes();
    if bytes.len() % 2 != 0 {
        return Err(PdfError::Encoding(format!(
            "hex: odd length {} in {:?}",
            bytes.len(),
            s
        )));
    }
    bytes
        .chunks_exact(2)
        .map(|pair| {
            let hi = hex_digit(pair[0]);
            let lo = hex_digit(pair[1]);
            match (hi, lo) {
                (Some(hi), Some(lo)) => Ok((hi << 4) | lo),
                _ => Err(PdfError::Encoding(format!(
                    "hex: invalid digit in {:?}",
                    s
                ))),
            }
        })
        .collect()
}

/// Encode bytes as uppercase hex digits.
pub fn encode_hex(raw: &[u8]) -> String {
    const DIGITS: &[u8; 16] = b"0123456789ABCDEF";
    let mut out = String::with_capacity(raw.len() * 2);
    for &b in raw {
        out.push(DIGITS[usize::from(b >> 4)] as char);
        out.push(DIGITS[usize::from(b & 0x0F)] as char);
    }
    out
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// Encode a name for output after its `/`. Bytes outside `!`..`~`,
/// delimiters and `#` are written as `#XX`.
///
/// ```
/// use pdf_object::literal::encode_name;
/// assert_eq!(encode_name("A B#1"), "A#20B#231");
/// ```
pub fn encode_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for &b in name.as_bytes() {
        if needs_name_escape(b) {
            out.push_str(&format!("#{:02X}", b));
        } else {
            out.push(b as char);
        }
    }
    out
}

fn needs_name_escape(b: u8) -> bool {
    !(b'!'..=b'~').contains(&b) || is_delimiter(b) || b == b'#'
}

fn is_delimiter(b: u8) -> bool {
    matches!(
        b,
        b'(' | b')' | b'<' | b'>' | b'[' | b']' | b'{' | b'}' | b'/' | b'%'
    )
}
