//! `Accept` header parsing.
//!
//! A header such as `text/html;q=0.8,application/json;q=0.9,*/*;q=0.1` is
//! split into comma-separated segments. Each segment becomes one
//! [`MediaTypeEntry`], in header order:
//!
//! 1. split the segment on `;`
//! 2. the first token must be `type/subtype` with a single `/`
//! 3. every following token must be `name=value` with a single `=`
//!
//! Names, values and both halves of the media range are trimmed. Empty
//! parameter tokens, as left by a trailing `;`, are ignored.
//!
//! What happens to a segment that breaks rule 2 or 3 depends on the
//! [`MalformedPolicy`] of the [`NegotiationConfig`] in use.

use std::ops::Deref;
use std::str::FromStr;

use crate::config::{MalformedPolicy, NegotiationConfig, config};
use crate::http::error::ParseError;
use crate::http::media_type::MediaTypeEntry;
use crate::http::params::MediaParams;
use crate::http::preference;

const SEGMENT_SEPARATOR: char = ',';
const PARAM_SEPARATOR: char = ';';
const TYPE_SEPARATOR: char = '/';
const VALUE_SEPARATOR: char = '=';

/// Parsed `Accept` header, in header order until
/// [`sort_by_preference`](AcceptHeaderList::sort_by_preference) is called.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AcceptHeaderList {
    entries: Vec<MediaTypeEntry>,
    skipped: usize,
}

impl AcceptHeaderList {
    /// Parses with the process-wide [`config`].
    pub fn parse(header: &str) -> Result<Self, ParseError> {
        Self::parse_with(header, config())
    }

    pub fn parse_with(header: &str, cfg: &NegotiationConfig) -> Result<Self, ParseError> {
        let mut list = AcceptHeaderList::default();

        for (index, segment) in header.split(SEGMENT_SEPARATOR).enumerate() {
            match parse_segment(index, segment) {
                Ok(entry) => list.entries.push(entry),
                Err(err) => match cfg.malformed {
                    MalformedPolicy::Strict => return Err(err),
                    MalformedPolicy::Skip => {
                        log::warn!("skipping malformed Accept segment: {err}");
                        list.skipped += 1;
                    }
                },
            }
        }

        log::debug!(
            "parsed Accept header {:?}: {} entries, {} skipped",
            header,
            list.entries.len(),
            list.skipped
        );
        Ok(list)
    }

    /// Number of malformed segments dropped under [`MalformedPolicy::Skip`].
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Reorders the entries so the most preferred comes first.
    ///
    /// The sort is stable: entries that [`preference::compare`] ranks equal
    /// keep their header order.
    pub fn sort_by_preference(&mut self) {
        self.entries.sort_by(|a, b| preference::compare(b, a));
    }

    pub fn sorted_by_preference(mut self) -> Self {
        self.sort_by_preference();
        self
    }

    /// Most preferred entry, without reordering the list.
    pub fn preferred(&self) -> Option<&MediaTypeEntry> {
        // max_by returns the last of equal maxima, so walk backwards to keep
        // the first one in header order.
        self.entries
            .iter()
            .rev()
            .max_by(|a, b| preference::compare(a, b))
    }

    pub fn into_vec(self) -> Vec<MediaTypeEntry> {
        self.entries
    }
}

fn parse_segment(index: usize, segment: &str) -> Result<MediaTypeEntry, ParseError> {
    let mut tokens = segment.split(PARAM_SEPARATOR);

    // split always yields at least one item
    let media_range = tokens.next().unwrap_or_default();
    let (typ, subtype) = split_pair(media_range, TYPE_SEPARATOR).ok_or_else(|| {
        ParseError::InvalidMediaRange {
            index,
            segment: segment.to_string(),
        }
    })?;

    let mut params = MediaParams::new();
    for token in tokens {
        if token.trim().is_empty() {
            continue;
        }

        let (name, value) =
            split_pair(token, VALUE_SEPARATOR).ok_or_else(|| ParseError::InvalidParameter {
                index,
                segment: segment.to_string(),
                token: token.to_string(),
            })?;
        params.set_raw(name, value);
    }

    Ok(MediaTypeEntry {
        typ: typ.to_string(),
        subtype: subtype.to_string(),
        params,
    })
}

/// Splits `s` around its only `sep`, trimming both halves.
fn split_pair(s: &str, sep: char) -> Option<(&str, &str)> {
    let (left, right) = s.split_once(sep)?;
    if right.contains(sep) {
        return None;
    }
    Some((left.trim(), right.trim()))
}

impl FromStr for AcceptHeaderList {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AcceptHeaderList::parse(s)
    }
}

impl Deref for AcceptHeaderList {
    type Target = [MediaTypeEntry];

    fn deref(&self) -> &Self::Target {
        &self.entries
    }
}

impl IntoIterator for AcceptHeaderList {
    type Item = MediaTypeEntry;
    type IntoIter = std::vec::IntoIter<MediaTypeEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a AcceptHeaderList {
    type Item = &'a MediaTypeEntry;
    type IntoIter = std::slice::Iter<'a, MediaTypeEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
