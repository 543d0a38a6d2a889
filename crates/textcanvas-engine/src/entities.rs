//! HTML character reference decoding with the HTML5 parsing rules.
//!
//! `html_escape` knows the named entity table but only decodes exact
//! references ending in `;`. Browsers also accept the legacy names without
//! a semicolon (`&amp`, `&copy`), remap C1 code points to Windows-1252 and
//! replace out-of-range numbers with U+FFFD. [`unescape`] applies those rules
//! and uses `html_escape` for the table lookup.

use std::{borrow::Cow, sync::OnceLock};

use regex::{Captures, Regex};

/// Named references that may appear without a trailing semicolon.
const LEGACY_NAMES: &[&str] = &[
    "AElig", "AMP", "Aacute", "Acirc", "Agrave", "Aring", "Atilde", "Auml", "COPY", "Ccedil",
    "ETH", "Eacute", "Ecirc", "Egrave", "Euml", "GT", "Iacute", "Icirc", "Igrave", "Iuml", "LT",
    "Ntilde", "Oacute", "Ocirc", "Ograve", "Oslash", "Otilde", "Ouml", "QUOT", "REG", "THORN",
    "Uacute", "Ucirc", "Ugrave", "Uuml", "Yacute", "aacute", "acirc", "acute", "aelig", "agrave",
    "amp", "aring", "atilde", "auml", "brvbar", "ccedil", "cedil", "cent", "copy", "curren", "deg",
    "divide", "eacute", "ecirc", "egrave", "eth", "euml", "frac12", "frac14", "frac34", "gt",
    "iacute", "icirc", "iexcl", "igrave", "iquest", "iuml", "laquo", "lt", "macr", "micro",
    "middot", "nbsp", "not", "ntilde", "oacute", "ocirc", "ograve", "ordf", "ordm", "oslash",
    "otilde", "ouml", "para", "plusmn", "pound", "quot", "raquo", "reg", "sect", "shy", "sup1",
    "sup2", "sup3", "szlig", "thorn", "times", "uacute", "ucirc", "ugrave", "uml", "uuml",
    "yacute", "yen", "yuml",
];

/// Numeric references `&#128;` to `&#159;` as Windows-1252. Unassigned
/// positions keep their C1 code point.
const WINDOWS_1252: [char; 32] = [
    '\u{20AC}', '\u{81}', '\u{201A}', '\u{192}', '\u{201E}', '\u{2026}', '\u{2020}', '\u{2021}',
    '\u{2C6}', '\u{2030}', '\u{160}', '\u{2039}', '\u{152}', '\u{8D}', '\u{17D}', '\u{8F}',
    '\u{90}', '\u{2018}', '\u{2019}', '\u{201C}', '\u{201D}', '\u{2022}', '\u{2013}', '\u{2014}',
    '\u{2DC}', '\u{2122}', '\u{161}', '\u{203A}', '\u{153}', '\u{9D}', '\u{17E}', '\u{178}',
];

/// Decodes every named and numeric character reference in `text`.
pub fn unescape(text: &str) -> Cow<'_, str> {
    if !text.contains('&') {
        return Cow::Borrowed(text);
    }

    static REFERENCE: OnceLock<Regex> = OnceLock::new();
    let reference = REFERENCE.get_or_init(|| {
        Regex::new(r"&(#[0-9]+;?|#[xX][0-9a-fA-F]+;?|[^\t\n\f <&#;]{1,32};?)")
            .expect("Invalid character reference regex")
    });

    reference.replace_all(text, |caps: &Captures| {
        let reference = &caps[1];
        match reference.strip_prefix('#') {
            Some(number) => numeric_reference(number),
            None => named_reference(reference),
        }
    })
}

/// `number` is the part after `#`, e.g. `x41;` or `65`.
fn numeric_reference(number: &str) -> String {
    let number = number.trim_end_matches(';');
    let code = match number.strip_prefix(['x', 'X']) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => number.parse::<u32>(),
    };
    // too many digits for u32 is out of range as well
    let Ok(code) = code else {
        return '\u{FFFD}'.to_string();
    };

    match code {
        0 => '\u{FFFD}'.to_string(),
        0x80..=0x9F => WINDOWS_1252[(code - 0x80) as usize].to_string(),
        0x1..=0x8 | 0xB | 0xE..=0x1F | 0x7F | 0xFDD0..=0xFDEF => String::new(),
        _ if code & 0xFFFE == 0xFFFE && code <= 0x10FFFF => String::new(),
        _ => char::from_u32(code).unwrap_or('\u{FFFD}').to_string(),
    }
}

/// `name` is the reference without `&`, with its `;` if it had one.
fn named_reference(name: &str) -> String {
    if name.ends_with(';') {
        let candidate = format!("&{name}");
        let decoded = html_escape::decode_html_entities(&candidate);
        if decoded != candidate.as_str() {
            return decoded.into_owned();
        }
    }

    // longest legacy name the reference starts with
    let stem = name.strip_suffix(';').unwrap_or(name);
    for end in (2..=stem.len()).rev() {
        if let Some(head) = stem.get(..end)
            && LEGACY_NAMES.contains(&head)
        {
            let decoded = html_escape::decode_html_entities(&format!("&{head};")).into_owned();
            return decoded + &name[end..];
        }
    }

    format!("&{name}")
}
