// Integration tests for the combinator toolkit and the quoted-string
// codec, exercised through the public API.

use proptest::prelude::*;

use sip_via_core::parser::quoted::{quote, quoted_string, unquote, unquoting_parse};
use sip_via_core::parser::token::{is_token_char, token};
use sip_via_core::parser::values::{parse_non_neg_int, parse_pos_int};
use sip_via_core::parser::{parse_kvps, KvpAction};
use sip_via_core::Error;

#[test]
fn token_charset_matches_rfc3261() {
    // alphanum plus the fixed punctuation set, nothing else
    let accepted: String = (0u8..=127)
        .map(|b| b as char)
        .filter(|&c| is_token_char(c))
        .collect();
    assert_eq!(
        accepted,
        "!%'*+-.0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ_`abcdefghijklmnopqrstuvwxyz~"
    );
}

#[test]
fn token_scan_is_greedy_and_scalar_safe() {
    let (rem, val) = token("alpha-1.0!жжж".as_bytes()).unwrap();
    assert_eq!(val, b"alpha-1.0!");
    // The remainder starts exactly at the first non-ASCII scalar
    assert_eq!(std::str::from_utf8(rem).unwrap(), "жжж");
}

#[test]
fn quoted_string_scan_reports_remainder_after_close() {
    let (rem, region) = quoted_string(b"\"one \\\"two\\\"\" three").unwrap();
    assert_eq!(region, b"\"one \\\"two\\\"\"");
    assert_eq!(rem, b" three");
}

#[test]
fn unquoting_parse_handles_four_byte_scalars() {
    let text = "caller \u{1F600}\u{1F680} done";
    let quoted = quote(text.as_bytes());
    let (rem, content) = unquoting_parse(&quoted).unwrap();
    assert!(rem.is_empty());
    assert_eq!(std::str::from_utf8(content.as_ref()).unwrap(), text);
}

#[test]
fn quoted_string_rejects_bare_line_breaks() {
    assert!(quoted_string(b"\"line one\r\nline two\"").is_err());
    assert!(quoted_string(b"\"trailing").is_err());
}

#[test]
fn integers_do_not_wrap() {
    assert!(parse_non_neg_int(b"340282366920938463463374607431768211456").is_err());
    let (_, v) = parse_pos_int(b"65535").unwrap();
    assert_eq!(v, 65535);
}

#[test]
fn kvps_validator_short_circuits() {
    let mut seen = Vec::new();
    let result: Result<Vec<(String, Option<String>)>, Error> = parse_kvps(
        |k, _v| {
            let key = String::from_utf8_lossy(k).into_owned();
            seen.push(key.clone());
            if key == "boom" {
                Err(Error::InvalidParam(key))
            } else {
                Ok(KvpAction::Keep(key, None))
            }
        },
        b';',
        b"a;b;boom;never",
    );
    assert!(result.is_err());
    // The validator never saw the pair after the failing one
    assert_eq!(seen, vec!["a", "b", "boom"]);
}

#[test]
fn kvps_trims_linear_white_space() {
    let pairs = parse_kvps(
        |k, v| {
            Ok::<_, Error>(KvpAction::Keep(
                String::from_utf8_lossy(k).into_owned(),
                v.map(|v| String::from_utf8_lossy(v).into_owned()),
            ))
        },
        b',',
        b" q = 0.5 ,\texpires\t=\t60 ",
    )
    .unwrap();
    assert_eq!(
        pairs,
        vec![
            ("q".to_string(), Some("0.5".to_string())),
            ("expires".to_string(), Some("60".to_string())),
        ]
    );
}

// A validator shaped like a real header parameter grammar: token keys,
// numeric "expires", everything else kept verbatim.
fn contact_style_validator(
    key: &[u8],
    value: Option<&[u8]>,
) -> Result<KvpAction<String, String>, Error> {
    if key.is_empty() || !key.iter().all(|&b| b.is_ascii() && is_token_char(b as char)) {
        return Err(Error::NotAToken);
    }
    let key = String::from_utf8_lossy(key).into_owned();
    let value = value
        .map(|v| {
            if key.eq_ignore_ascii_case("expires") && parse_non_neg_int(v).is_err() {
                return Err(Error::InvalidInteger(String::from_utf8_lossy(v).into_owned()));
            }
            Ok(String::from_utf8_lossy(v).into_owned())
        })
        .transpose()?;
    Ok(KvpAction::Keep(key, value))
}

#[test]
fn kvps_with_grammar_validator() {
    let pairs = parse_kvps(contact_style_validator, b';', b"q=0.7;expires=3600").unwrap();
    assert_eq!(pairs.len(), 2);

    assert_eq!(
        parse_kvps(contact_style_validator, b';', b"expires=soon"),
        Err(Error::InvalidInteger("soon".into()))
    );
    assert_eq!(
        parse_kvps(contact_style_validator, b';', b"a=1;;b=2"),
        Err(Error::NotAToken)
    );
}

proptest! {
    // quote/unquote are exact inverses for raw text free of CR/LF/NUL
    #[test]
    fn quote_unquote_round_trip(raw in "[^\r\n\0]{0,64}") {
        let quoted = quote(raw.as_bytes());
        let unquoted = unquote(&quoted);
        prop_assert_eq!(unquoted.as_ref(), raw.as_bytes());
    }

    // unquoting_parse agrees with unquote and consumes the whole input
    #[test]
    fn unquoting_parse_round_trip(raw in "[^\r\n\0]{0,64}") {
        let quoted = quote(raw.as_bytes());
        let (rem, content) = unquoting_parse(&quoted).unwrap();
        prop_assert!(rem.is_empty());
        prop_assert_eq!(content.as_ref(), raw.as_bytes());
    }
}
