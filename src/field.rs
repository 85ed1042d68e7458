use std::borrow::Cow;
use std::result;

use bstr::ByteSlice;

use crate::error::ErrorKind;

/// Tokens that read as `true`, compared ASCII case insensitively after
/// trimming whitespace.
pub const TRUTHY: &[&str] = &["1", "true", "yes", "y", "t"];

/// Tokens that read as `false` in strict mode. The lenient reader treats
/// every non-truthy token as `false`.
pub const FALSY: &[&str] = &["0", "false", "no", "n", "f"];

/// Strip the quotes from a raw quoted field and collapse doubled quotes.
///
/// Bytes that follow the closing quote are kept verbatim. A field with no
/// closing quote keeps everything after the opening quote.
pub fn unescape(raw: &[u8], quote: u8) -> Vec<u8> {
    let mut out = Vec::with_capacity(raw.len());
    let mut i = 1;
    while i < raw.len() {
        let b = raw[i];
        if b == quote {
            if raw.get(i + 1) == Some(&quote) {
                out.push(quote);
                i += 2;
                continue;
            }
            out.extend_from_slice(&raw[i + 1..]);
            return out;
        }
        out.push(b);
        i += 1;
    }
    out
}

/// Trim leading and trailing whitespace without copying borrowed data.
pub fn trim(bytes: Cow<[u8]>) -> Cow<[u8]> {
    match bytes {
        Cow::Borrowed(b) => Cow::Borrowed(b.trim()),
        Cow::Owned(b) => {
            let trimmed = b.trim();
            if trimmed.len() == b.len() {
                Cow::Owned(b)
            } else {
                Cow::Owned(trimmed.to_vec())
            }
        }
    }
}

/// Decode a field as UTF-8, failing on invalid sequences.
pub fn decode(bytes: &[u8]) -> result::Result<&str, ErrorKind> {
    bytes
        .to_str()
        .map_err(|err| ErrorKind::Utf8 { valid_up_to: err.valid_up_to() })
}

/// Parse a field as an `f32`, ignoring surrounding whitespace.
pub fn parse_float(bytes: &[u8]) -> result::Result<f32, ErrorKind> {
    let s = decode(bytes.trim())?;
    if s.is_empty() {
        return Err(ErrorKind::EmptyField);
    }
    s.parse().map_err(ErrorKind::ParseFloat)
}

/// Parse a field as a boolean using the truthy and falsy token sets.
pub fn parse_bool(bytes: &[u8]) -> result::Result<bool, ErrorKind> {
    let token = bytes.trim();
    if token.is_empty() {
        Err(ErrorKind::EmptyField)
    } else if matches_any(token, TRUTHY) {
        Ok(true)
    } else if matches_any(token, FALSY) {
        Ok(false)
    } else {
        Err(ErrorKind::ParseBool { token: token.to_str_lossy().into_owned() })
    }
}

fn matches_any(token: &[u8], set: &[&str]) -> bool {
    set.iter().any(|t| token.eq_ignore_ascii_case(t.as_bytes()))
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use crate::error::ErrorKind;

    use super::{parse_bool, parse_float, trim, unescape};

    #[test]
    fn unescape_quotes() {
        assert_eq!(b"a,b".to_vec(), unescape(b"\"a,b\"", b'"'));
        assert_eq!(b"a\"b".to_vec(), unescape(b"\"a\"\"b\"", b'"'));
        assert_eq!(b"".to_vec(), unescape(b"\"\"", b'"'));
        assert_eq!(b"ab".to_vec(), unescape(b"\"a\"b", b'"'));
        assert_eq!(b"open".to_vec(), unescape(b"\"open", b'"'));
    }

    #[test]
    fn trim_borrowed_and_owned() {
        assert_eq!(&b"x y"[..], &*trim(Cow::Borrowed(&b"  x y\t"[..])));
        assert_eq!(&b"z"[..], &*trim(Cow::Owned(b" z ".to_vec())));
    }

    #[test]
    fn floats() {
        assert_eq!(Ok(172.5), parse_float(b"172.5"));
        assert_eq!(Ok(-3.0), parse_float(b" -3 "));
        assert_eq!(Ok(1e3), parse_float(b"1e3"));
        assert_eq!(Err(ErrorKind::EmptyField), parse_float(b""));
        assert_eq!(Err(ErrorKind::EmptyField), parse_float(b"   "));
        match parse_float(b"12kg") {
            Err(ErrorKind::ParseFloat(_)) => {}
            got => panic!("expected float error, got {:?}", got),
        }
        match parse_float(b"\xFF") {
            Err(ErrorKind::Utf8 { valid_up_to: 0 }) => {}
            got => panic!("expected utf-8 error, got {:?}", got),
        }
    }

    #[test]
    fn bools() {
        for t in &["1", "true", "TRUE", "Yes", "y", "T", " yes "] {
            assert_eq!(Ok(true), parse_bool(t.as_bytes()), "{:?}", t);
        }
        for f in &["0", "false", "No", "n", "F"] {
            assert_eq!(Ok(false), parse_bool(f.as_bytes()), "{:?}", f);
        }
        assert_eq!(Err(ErrorKind::EmptyField), parse_bool(b""));
        assert_eq!(
            Err(ErrorKind::ParseBool { token: "2".to_string() }),
            parse_bool(b"2")
        );
        assert_eq!(
            Err(ErrorKind::ParseBool { token: "yess".to_string() }),
            parse_bool(b"yess")
        );
    }
}
