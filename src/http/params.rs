//! Media type parameters for a [`MediaTypeEntry`](crate::http::media_type::MediaTypeEntry)
//!
//! Parameters are the `name=value` pairs following a media range, such as
//! `q=0.8` or `level=1` in `text/html;level=1;q=0.8`.
//!
//! Parameters are stored in an ordered map to preserve insertion order.
//! Both names and values are stored as trimmed raw strings, without
//! validation or restrictions on which parameters are allowed. Setting a
//! name twice keeps the last value.
//!
//! The only parameter given a meaning by this crate is `q`, read by the
//! [`preference`](crate::http::preference) module.

use indexmap::IndexMap;
use indexmap::map::Iter;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaParams {
    params: IndexMap<String, String>,
}

impl MediaParams {
    pub fn new() -> Self {
        Self {
            params: IndexMap::new(),
        }
    }

    pub fn set_raw(&mut self, name: &str, value: &str) {
        self.params.insert(name.to_string(), value.to_string());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.params.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, String, String> {
        self.params.iter()
    }

    /// Renders the parameters as they appear after a media range,
    /// each one prefixed with `;`.
    pub fn stringify(&self) -> String {
        let mut result = String::new();
        for (name, value) in &self.params {
            result.push_str(&format!(";{}={}", name, value));
        }
        result
    }
}

impl<'a> IntoIterator for &'a MediaParams {
    type Item = (&'a String, &'a String);
    type IntoIter = Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.params.iter()
    }
}

impl<N: AsRef<str>, V: AsRef<str>> FromIterator<(N, V)> for MediaParams {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut params = MediaParams::new();
        for (name, value) in iter {
            params.set_raw(name.as_ref(), value.as_ref());
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_value_wins() {
        let mut params = MediaParams::new();
        params.set_raw("q", "0.5");
        params.set_raw("level", "1");
        params.set_raw("q", "0.7");

        assert_eq!(params.len(), 2);
        assert_eq!(params.get("q"), Some("0.7"));
    }

    #[test]
    fn stringify_keeps_insertion_order() {
        let params: MediaParams = [("level", "1"), ("q", "0.5")].into_iter().collect();
        assert_eq!(params.stringify(), ";level=1;q=0.5");
        assert_eq!(MediaParams::new().stringify(), "");
    }
}
