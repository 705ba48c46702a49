//! String literals.

use crate::cursor::Source;
use crate::error::{ParseError, Result};
use crate::options::EscapeStyle;

const HIGH_SURROGATES: std::ops::Range<u32> = 0xD800..0xDC00;
const LOW_SURROGATES: std::ops::Range<u32> = 0xDC00..0xE000;

/// Parse a quoted string at the read position.
///
/// Returns `Ok(None)` without consuming anything when the read position is not
/// on a `"`. Fails with [`ParseError::UnexpectedEnd`] only if there is no
/// character to inspect at all; once the opening quote is consumed, running
/// out of input is [`ParseError::UnterminatedString`].
pub fn parse_string<S: Source + ?Sized>(
    src: &mut S,
    escapes: EscapeStyle,
) -> Result<Option<String>> {
    if src.current_char()? != '"' {
        return Ok(None);
    }
    src.advance(1);

    let mut result = String::new();
    loop {
        let c = src
            .current_char()
            .map_err(|_| ParseError::UnterminatedString)?;
        match c {
            '"' => {
                src.advance(1);
                return Ok(Some(result));
            }
            '\\' => parse_escape(src, escapes, &mut result)?,
            '\t' => return Err(ParseError::TabInString),
            '\n' => return Err(ParseError::NewlineInString),
            c if (c as u32) < 0x20 => return Err(ParseError::ControlCharInString(c as u32)),
            c => {
                result.push(c);
                src.advance(1);
            }
        }
    }
}

/// Decode one escape sequence starting at the backslash.
fn parse_escape<S: Source + ?Sized>(
    src: &mut S,
    escapes: EscapeStyle,
    result: &mut String,
) -> Result<()> {
    let letter = src
        .next_char()
        .map_err(|_| ParseError::UnterminatedString)?;
    match letter {
        '"' | '\\' | '/' => {
            result.push(letter);
            src.advance(2);
        }
        'b' | 'f' | 'n' | 'r' | 't' => {
            result.push(match escapes {
                EscapeStyle::Letter => letter,
                EscapeStyle::Standard => control_char(letter),
            });
            src.advance(2);
        }
        'u' => {
            let code = read_hex4(src, src.index() + 2)?;
            src.advance(6);
            result.push(decode_code_unit(src, code)?);
        }
        _ => return Err(ParseError::IllegalBackslash),
    }
    Ok(())
}

fn control_char(letter: char) -> char {
    match letter {
        'b' => '\u{8}',
        'f' => '\u{c}',
        'n' => '\n',
        'r' => '\r',
        _ => '\t',
    }
}

/// Turn a UTF-16 code unit into a character, pairing a high surrogate with an
/// immediately following `\uDC00`-`\uDFFF` escape. Unpaired surrogates become
/// U+FFFD.
fn decode_code_unit<S: Source + ?Sized>(src: &mut S, code: u32) -> Result<char> {
    if HIGH_SURROGATES.contains(&code) {
        let at = src.index();
        if src.peek_at(at) == Some('\\') && src.peek_at(at + 1) == Some('u') {
            let low = read_hex4(src, at + 2)?;
            if LOW_SURROGATES.contains(&low) {
                src.advance(6);
                let combined = 0x10000 + ((code - 0xD800) << 10) + (low - 0xDC00);
                return Ok(char::from_u32(combined).unwrap_or(char::REPLACEMENT_CHARACTER));
            }
        }
    }
    Ok(char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER))
}

/// Read exactly four hex digits starting at absolute offset `at`.
fn read_hex4<S: Source + ?Sized>(src: &S, at: usize) -> Result<u32> {
    let mut code = 0;
    for offset in 0..4 {
        let c = src
            .peek_at(at + offset)
            .ok_or(ParseError::UnterminatedString)?;
        let digit = c.to_digit(16).ok_or(ParseError::InvalidUnicodeEscape)?;
        code = code * 16 + digit;
    }
    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Cursor;

    fn string(input: &str) -> Result<Option<String>> {
        parse_string(&mut Cursor::new(input), EscapeStyle::Standard)
    }

    #[test]
    fn test_not_a_string() {
        let mut cursor = Cursor::new("123");
        assert_eq!(parse_string(&mut cursor, EscapeStyle::Standard), Ok(None));
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn test_plain_and_empty() {
        assert_eq!(string(r#""""#), Ok(Some(String::new())));
        assert_eq!(string(r#""hello world""#), Ok(Some("hello world".into())));
        assert_eq!(string(r#""  padded""#), Ok(Some("  padded".into())));
    }

    #[test]
    fn test_consumes_closing_quote() {
        let mut cursor = Cursor::new(r#""ab", 1"#);
        parse_string(&mut cursor, EscapeStyle::Standard).unwrap();
        assert_eq!(cursor.current_char(), Ok(','));
    }

    #[test]
    fn test_escapes_standard() {
        assert_eq!(
            string(r#""\"\\\/\b\f\n\r\t""#),
            Ok(Some("\"\\/\u{8}\u{c}\n\r\t".into()))
        );
    }

    #[test]
    fn test_escapes_letter() {
        let mut cursor = Cursor::new(r#""a\nb\tc\"""#);
        assert_eq!(
            parse_string(&mut cursor, EscapeStyle::Letter),
            Ok(Some("anbtc\"".into()))
        );
    }

    #[test]
    fn test_unicode_escape() {
        assert_eq!(string(r#""\u00e9""#), Ok(Some("\u{e9}".into())));
        assert_eq!(string(r#""\u263a!""#), Ok(Some("\u{263A}!".into())));
    }

    #[test]
    fn test_surrogate_pair() {
        assert_eq!(string(r#""\uD83D\uDE00""#), Ok(Some("\u{1F600}".into())));
        assert_eq!(string(r#""\uD800x""#), Ok(Some("\u{FFFD}x".into())));
        assert_eq!(string(r#""\uDC00""#), Ok(Some("\u{FFFD}".into())));
        assert_eq!(
            string(r#""\uD800\u0041""#),
            Ok(Some("\u{FFFD}A".into()))
        );
    }

    #[test]
    fn test_bad_unicode_escape() {
        assert_eq!(string(r#""\u12G4""#), Err(ParseError::InvalidUnicodeEscape));
        assert_eq!(string(r#""\u12""#), Err(ParseError::InvalidUnicodeEscape));
        assert_eq!(string(r#""\u12"#), Err(ParseError::UnterminatedString));
    }

    #[test]
    fn test_illegal_backslash() {
        assert_eq!(string(r#""\x""#), Err(ParseError::IllegalBackslash));
        assert_eq!(string(r#""\'""#), Err(ParseError::IllegalBackslash));
    }

    #[test]
    fn test_raw_control_characters() {
        assert_eq!(string("\"a\tb\""), Err(ParseError::TabInString));
        assert_eq!(string("\"a\nb\""), Err(ParseError::NewlineInString));
        assert_eq!(
            string("\"a\u{0}b\""),
            Err(ParseError::ControlCharInString(0))
        );
        assert_eq!(string("\"\u{7f}\""), Ok(Some("\u{7f}".into())));
    }

    #[test]
    fn test_unterminated() {
        assert_eq!(string(r#""abc"#), Err(ParseError::UnterminatedString));
        assert_eq!(string(r#""abc\"#), Err(ParseError::UnterminatedString));
        assert_eq!(string(""), Err(ParseError::UnexpectedEnd));
    }
}
