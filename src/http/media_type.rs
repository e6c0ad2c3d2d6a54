use std::fmt;

use crate::http::params::MediaParams;
use crate::http::preference;

/// One comma-separated segment of an `Accept` header, e.g. `text/html;q=0.8`.
///
/// `typ` holds the primary type (`text`); `type` is reserved in Rust.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaTypeEntry {
    pub typ: String,
    pub subtype: String,
    pub params: MediaParams,
}

impl MediaTypeEntry {
    pub fn new(typ: &str, subtype: &str) -> Self {
        Self {
            typ: typ.to_string(),
            subtype: subtype.to_string(),
            params: MediaParams::new(),
        }
    }

    pub fn with_param(mut self, name: &str, value: &str) -> Self {
        self.params.set_raw(name, value);
        self
    }

    /// Effective quality weight: the `q` parameter, or `1.0` when it is
    /// missing or not a number.
    pub fn quality(&self) -> f32 {
        preference::quality(self)
    }

    /// `type/subtype` without parameters.
    pub fn essence(&self) -> String {
        format!("{}/{}", self.typ, self.subtype)
    }
}

impl fmt::Display for MediaTypeEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}{}", self.typ, self.subtype, self.params.stringify())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_renders_params_in_order() {
        let entry = MediaTypeEntry::new("text", "html")
            .with_param("level", "1")
            .with_param("q", "0.5");

        assert_eq!(entry.to_string(), "text/html;level=1;q=0.5");
        assert_eq!(entry.essence(), "text/html");
    }

    #[test]
    fn quality_defaults_to_one() {
        assert_eq!(MediaTypeEntry::new("text", "html").quality(), 1.0);
        assert_eq!(
            MediaTypeEntry::new("text", "html").with_param("q", "0.3").quality(),
            0.3
        );
    }
}
