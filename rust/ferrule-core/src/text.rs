//! String description: length reporting with a console side effect.

use std::io::{self, Write};

/// Write one line to `out` quoting `bytes`, then return the byte length.
///
/// The returned length is the raw byte count (the `strlen` contract), even
/// when the bytes are not valid UTF-8; invalid sequences are printed lossily.
/// The caller supplies the line prefix so the two library variants can keep
/// their own wording.
pub fn describe_to<W: Write>(prefix: &str, bytes: &[u8], out: &mut W) -> io::Result<usize> {
    writeln!(out, "{} \"{}\"", prefix, String::from_utf8_lossy(bytes))?;
    Ok(bytes.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_byte_length() {
        let mut out = Vec::new();
        let len = describe_to("String passed library is:", b"hello", &mut out).unwrap();
        assert_eq!(len, 5);
    }

    #[test]
    fn emits_exactly_one_quoted_line() {
        let mut out = Vec::new();
        describe_to("String passed library is:", b"hello", &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "String passed library is: \"hello\"\n");
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn empty_string_is_zero_length() {
        let mut out = Vec::new();
        let len = describe_to("got:", b"", &mut out).unwrap();
        assert_eq!(len, 0);
        assert_eq!(String::from_utf8(out).unwrap(), "got: \"\"\n");
    }

    #[test]
    fn multibyte_input_counts_bytes_not_chars() {
        let mut out = Vec::new();
        // "héllo" is five chars but six bytes in UTF-8.
        let len = describe_to("got:", "héllo".as_bytes(), &mut out).unwrap();
        assert_eq!(len, 6);
    }

    #[test]
    fn invalid_utf8_prints_lossily_but_counts_raw_bytes() {
        let mut out = Vec::new();
        let len = describe_to("got:", &[0x66, 0xFF, 0x66], &mut out).unwrap();
        assert_eq!(len, 3);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains('\u{FFFD}'));
    }
}
