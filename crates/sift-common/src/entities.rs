//! Character reference decoding.
//!
//! Decodes the HTML 4 named references plus decimal (`&#60;`) and
//! hexadecimal (`&#x3C;`) numeric references. A reference is only decoded
//! when it is terminated by `;`. Anything unrecognized is copied through
//! literally, so obfuscations like `&colon;` survive decoding and can still
//! be matched by the attribute checks downstream.

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Longest name we bother looking up (`&thetasym;` is the longest in the table).
const MAX_NAME_LEN: usize = 10;

/// Longest numeric body, `#` included (`#x0010FFFF`, `#001114111`).
const MAX_NUMERIC_LEN: usize = 10;

/// How far past a '&' the terminating ';' may sit.
const MAX_REFERENCE_LEN: usize = if MAX_NAME_LEN > MAX_NUMERIC_LEN {
    MAX_NAME_LEN
} else {
    MAX_NUMERIC_LEN
};

/// The named character reference table.
/// Maps entity names (without the leading '&', with the trailing ';') to
/// their replacement strings.
static NAMED_ENTITIES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        // Markup-significant
        ("amp;", "&"),
        ("lt;", "<"),
        ("gt;", ">"),
        ("quot;", "\""),
        ("apos;", "'"),
        ("nbsp;", "\u{00A0}"),
        // Latin-1 punctuation and symbols
        ("iexcl;", "\u{00A1}"),
        ("cent;", "\u{00A2}"),
        ("pound;", "\u{00A3}"),
        ("curren;", "\u{00A4}"),
        ("yen;", "\u{00A5}"),
        ("brvbar;", "\u{00A6}"),
        ("sect;", "\u{00A7}"),
        ("uml;", "\u{00A8}"),
        ("copy;", "\u{00A9}"),
        ("ordf;", "\u{00AA}"),
        ("laquo;", "\u{00AB}"),
        ("not;", "\u{00AC}"),
        ("shy;", "\u{00AD}"),
        ("reg;", "\u{00AE}"),
        ("macr;", "\u{00AF}"),
        ("deg;", "\u{00B0}"),
        ("plusmn;", "\u{00B1}"),
        ("sup2;", "\u{00B2}"),
        ("sup3;", "\u{00B3}"),
        ("acute;", "\u{00B4}"),
        ("micro;", "\u{00B5}"),
        ("para;", "\u{00B6}"),
        ("middot;", "\u{00B7}"),
        ("cedil;", "\u{00B8}"),
        ("sup1;", "\u{00B9}"),
        ("ordm;", "\u{00BA}"),
        ("raquo;", "\u{00BB}"),
        ("frac14;", "\u{00BC}"),
        ("frac12;", "\u{00BD}"),
        ("frac34;", "\u{00BE}"),
        ("iquest;", "\u{00BF}"),
        ("times;", "\u{00D7}"),
        ("divide;", "\u{00F7}"),
        // Accented characters
        ("Agrave;", "\u{00C0}"),
        ("Aacute;", "\u{00C1}"),
        ("Acirc;", "\u{00C2}"),
        ("Atilde;", "\u{00C3}"),
        ("Auml;", "\u{00C4}"),
        ("Aring;", "\u{00C5}"),
        ("AElig;", "\u{00C6}"),
        ("Ccedil;", "\u{00C7}"),
        ("Egrave;", "\u{00C8}"),
        ("Eacute;", "\u{00C9}"),
        ("Ecirc;", "\u{00CA}"),
        ("Euml;", "\u{00CB}"),
        ("Igrave;", "\u{00CC}"),
        ("Iacute;", "\u{00CD}"),
        ("Icirc;", "\u{00CE}"),
        ("Iuml;", "\u{00CF}"),
        ("ETH;", "\u{00D0}"),
        ("Ntilde;", "\u{00D1}"),
        ("Ograve;", "\u{00D2}"),
        ("Oacute;", "\u{00D3}"),
        ("Ocirc;", "\u{00D4}"),
        ("Otilde;", "\u{00D5}"),
        ("Ouml;", "\u{00D6}"),
        ("Oslash;", "\u{00D8}"),
        ("Ugrave;", "\u{00D9}"),
        ("Uacute;", "\u{00DA}"),
        ("Ucirc;", "\u{00DB}"),
        ("Uuml;", "\u{00DC}"),
        ("Yacute;", "\u{00DD}"),
        ("THORN;", "\u{00DE}"),
        ("szlig;", "\u{00DF}"),
        ("agrave;", "\u{00E0}"),
        ("aacute;", "\u{00E1}"),
        ("acirc;", "\u{00E2}"),
        ("atilde;", "\u{00E3}"),
        ("auml;", "\u{00E4}"),
        ("aring;", "\u{00E5}"),
        ("aelig;", "\u{00E6}"),
        ("ccedil;", "\u{00E7}"),
        ("egrave;", "\u{00E8}"),
        ("eacute;", "\u{00E9}"),
        ("ecirc;", "\u{00EA}"),
        ("euml;", "\u{00EB}"),
        ("igrave;", "\u{00EC}"),
        ("iacute;", "\u{00ED}"),
        ("icirc;", "\u{00EE}"),
        ("iuml;", "\u{00EF}"),
        ("eth;", "\u{00F0}"),
        ("ntilde;", "\u{00F1}"),
        ("ograve;", "\u{00F2}"),
        ("oacute;", "\u{00F3}"),
        ("ocirc;", "\u{00F4}"),
        ("otilde;", "\u{00F5}"),
        ("ouml;", "\u{00F6}"),
        ("oslash;", "\u{00F8}"),
        ("ugrave;", "\u{00F9}"),
        ("uacute;", "\u{00FA}"),
        ("ucirc;", "\u{00FB}"),
        ("uuml;", "\u{00FC}"),
        ("yacute;", "\u{00FD}"),
        ("thorn;", "\u{00FE}"),
        ("yuml;", "\u{00FF}"),
        // General punctuation
        ("ensp;", "\u{2002}"),
        ("emsp;", "\u{2003}"),
        ("thinsp;", "\u{2009}"),
        ("zwnj;", "\u{200C}"),
        ("zwj;", "\u{200D}"),
        ("ndash;", "\u{2013}"),
        ("mdash;", "\u{2014}"),
        ("lsquo;", "\u{2018}"),
        ("rsquo;", "\u{2019}"),
        ("sbquo;", "\u{201A}"),
        ("ldquo;", "\u{201C}"),
        ("rdquo;", "\u{201D}"),
        ("bdquo;", "\u{201E}"),
        ("dagger;", "\u{2020}"),
        ("Dagger;", "\u{2021}"),
        ("bull;", "\u{2022}"),
        ("hellip;", "\u{2026}"),
        ("permil;", "\u{2030}"),
        ("prime;", "\u{2032}"),
        ("lsaquo;", "\u{2039}"),
        ("rsaquo;", "\u{203A}"),
        ("euro;", "\u{20AC}"),
        ("trade;", "\u{2122}"),
        // Arrows
        ("larr;", "\u{2190}"),
        ("uarr;", "\u{2191}"),
        ("rarr;", "\u{2192}"),
        ("darr;", "\u{2193}"),
        ("harr;", "\u{2194}"),
        // Math symbols
        ("minus;", "\u{2212}"),
        ("infin;", "\u{221E}"),
        ("ne;", "\u{2260}"),
        ("le;", "\u{2264}"),
        ("ge;", "\u{2265}"),
        // Greek letters
        ("alpha;", "\u{03B1}"),
        ("beta;", "\u{03B2}"),
        ("gamma;", "\u{03B3}"),
        ("delta;", "\u{03B4}"),
        ("epsilon;", "\u{03B5}"),
        ("theta;", "\u{03B8}"),
        ("thetasym;", "\u{03D1}"),
        ("lambda;", "\u{03BB}"),
        ("mu;", "\u{03BC}"),
        ("pi;", "\u{03C0}"),
        ("sigma;", "\u{03C3}"),
        ("omega;", "\u{03C9}"),
    ])
});

/// Look up a named character reference.
///
/// The `name` should NOT include the leading '&' but must include the
/// trailing ';'.
///
/// # Example
/// ```ignore
/// lookup_entity("amp;")   // Returns Some("&")
/// lookup_entity("colon;") // Returns None - not an HTML 4 reference
/// ```
#[must_use]
pub fn lookup_entity(name: &str) -> Option<&'static str> {
    NAMED_ENTITIES.get(name).copied()
}

/// Decode every `;`-terminated character reference in `input`.
///
/// Only the HTML 4 names are known: HTML5 additions such as `&Tab;` and
/// `&NewLine;` are left as written. Runs in time linear in `input`.
///
/// Borrows when there is nothing to decode.
#[must_use]
pub fn decode_entities(input: &str) -> Cow<'_, str> {
    if !input.contains('&') {
        return Cow::Borrowed(input);
    }

    let mut output = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(amp) = rest.find('&') {
        output.push_str(&rest[..amp]);
        let after = &rest[amp + 1..];

        match decode_reference(after) {
            Some((replacement, consumed)) => {
                output.push_str(&replacement);
                rest = &after[consumed..];
            }
            None => {
                output.push('&');
                rest = after;
            }
        }
    }
    output.push_str(rest);

    Cow::Owned(output)
}

/// Try to decode the reference that starts right after a '&'.
///
/// Returns the replacement text and the number of bytes consumed after the
/// '&' (including the ';').
fn decode_reference(after: &str) -> Option<(Cow<'static, str>, usize)> {
    // ';' is ASCII, so its byte position is always a char boundary
    let semicolon = after
        .bytes()
        .take(MAX_REFERENCE_LEN + 1)
        .position(|b| b == b';')?;
    let body = &after[..semicolon];

    if let Some(numeric) = body.strip_prefix('#') {
        let code_point = match numeric.strip_prefix(['x', 'X']) {
            Some(hex) if is_all(hex, |c| c.is_ascii_hexdigit()) => {
                u32::from_str_radix(hex, 16).ok()?
            }
            None if is_all(numeric, |c| c.is_ascii_digit()) => numeric.parse().ok()?,
            _ => return None,
        };
        // NUL and surrogates are never produced
        if code_point == 0 {
            return None;
        }
        let c = char::from_u32(code_point)?;
        return Some((Cow::Owned(c.to_string()), semicolon + 1));
    }

    if body.is_empty() || body.len() > MAX_NAME_LEN || !is_all(body, |c| c.is_ascii_alphanumeric())
    {
        return None;
    }
    lookup_entity(&after[..=semicolon]).map(|text| (Cow::Borrowed(text), semicolon + 1))
}

fn is_all(s: &str, pred: impl Fn(char) -> bool) -> bool {
    !s.is_empty() && s.chars().all(pred)
}
