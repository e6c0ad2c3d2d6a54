//! Ranking of [`MediaTypeEntry`] values by client preference.
//!
//! [`compare`] returns [`Ordering::Greater`] when the first entry should be
//! preferred over the second. Ties are broken in this order:
//!
//! 1. higher quality (`q`, default `1.0`)
//! 2. fewer parameters (`q` itself counts as one)
//! 3. concrete subtype over `*`
//! 4. concrete type over `*`
//!
//! The parameter count rule deliberately prefers the *less* parameterized
//! entry, unlike the RFC 9110 specificity rule.

use std::cmp::Ordering;

use crate::http::WILDCARD;
use crate::http::media_type::MediaTypeEntry;

pub const QUALITY_PARAM: &str = "q";
pub const DEFAULT_QUALITY: f32 = 1.0;

/// Reads the `q` parameter of an entry, falling back to [`DEFAULT_QUALITY`]
/// when absent or not a finite number.
pub fn quality(entry: &MediaTypeEntry) -> f32 {
    entry
        .params
        .get(QUALITY_PARAM)
        .and_then(|q| q.parse::<f32>().ok())
        .filter(|q| q.is_finite())
        .unwrap_or(DEFAULT_QUALITY)
}

pub fn compare(a: &MediaTypeEntry, b: &MediaTypeEntry) -> Ordering {
    // Both values are finite, so partial_cmp never yields None.
    let by_quality = quality(a)
        .partial_cmp(&quality(b))
        .unwrap_or(Ordering::Equal);
    if by_quality != Ordering::Equal {
        return by_quality;
    }

    // Fewer parameters wins.
    let by_params = b.params.len().cmp(&a.params.len());
    if by_params != Ordering::Equal {
        return by_params;
    }

    compare_wildcard(&a.subtype, &b.subtype).then_with(|| compare_wildcard(&a.typ, &b.typ))
}

/// A concrete token is preferred over `*`; anything else ranks equal.
pub fn compare_wildcard(a: &str, b: &str) -> Ordering {
    match (a == WILDCARD, b == WILDCARD) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(typ: &str, subtype: &str) -> MediaTypeEntry {
        MediaTypeEntry::new(typ, subtype)
    }

    #[test]
    fn higher_quality_is_preferred() {
        let json = entry("application", "json").with_param("q", "0.9");
        let html = entry("text", "html").with_param("q", "0.5");

        assert_eq!(compare(&json, &html), Ordering::Greater);
        assert_eq!(compare(&html, &json), Ordering::Less);
    }

    #[test]
    fn missing_or_garbage_quality_counts_as_one() {
        let plain = entry("text", "plain");
        let garbage = entry("text", "plain").with_param("q", "high");
        let nan = entry("text", "plain").with_param("q", "NaN");
        let explicit = entry("text", "plain").with_param("q", "1");

        assert_eq!(quality(&plain), 1.0);
        assert_eq!(quality(&garbage), 1.0);
        assert_eq!(quality(&nan), 1.0);
        assert_eq!(compare(&garbage, &explicit), Ordering::Equal);
    }

    #[test]
    fn fewer_params_win_quality_ties() {
        let short = entry("text", "html").with_param("q", "0.5");
        let long = entry("text", "html")
            .with_param("level", "1")
            .with_param("q", "0.5");

        assert_eq!(compare(&short, &long), Ordering::Greater);
        assert_eq!(compare(&long, &short), Ordering::Less);
    }

    #[test]
    fn quality_beats_param_count() {
        let short = entry("text", "html").with_param("q", "0.4");
        let long = entry("text", "html")
            .with_param("level", "1")
            .with_param("q", "0.5");

        assert_eq!(compare(&long, &short), Ordering::Greater);
    }

    #[test]
    fn concrete_subtype_beats_wildcard() {
        assert_eq!(
            compare(&entry("text", "plain"), &entry("text", "*")),
            Ordering::Greater
        );
        assert_eq!(
            compare(&entry("*", "*"), &entry("image", "png")),
            Ordering::Less
        );
    }

    #[test]
    fn type_wildcard_breaks_subtype_ties() {
        assert_eq!(
            compare(&entry("*", "*"), &entry("text", "*")),
            Ordering::Less
        );
    }

    #[test]
    fn no_lexical_tie_break() {
        assert_eq!(
            compare(&entry("text", "html"), &entry("application", "json")),
            Ordering::Equal
        );
        assert_eq!(compare_wildcard("*", "*"), Ordering::Equal);
        assert_eq!(compare_wildcard("html", "xml"), Ordering::Equal);
    }
}
