//! Query strings: constructing them from parts, parsing them, and
//! appending them to existing URLs.

use itertools::Itertools;
use kstring::KString;

use crate::url_encoding::{url_encode, url_decode, UrlDecodingError};

/// Flat representation of a query string, in order. So far used for
/// constructing serialized representations and for parsing ones
/// received back from the interactive runtime.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryString(Vec<(KString, KString)>);

impl From<&QueryString> for String {
    fn from(q: &QueryString) -> Self {
        q.0.iter()
            .map(|(k, v)| format!("{}={}", url_encode(k), url_encode(v)))
            .join("&")
    }
}

impl QueryString {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn from_pairs<'s>(pairs: impl IntoIterator<Item = (&'s str, &'s str)>) -> Self {
        Self(pairs.into_iter()
             .map(|(k, v)| (KString::from_ref(k), KString::from_ref(v)))
             .collect())
    }

    pub fn from_str(s: &str) -> Result<Self, UrlDecodingError> {
        let mut v = Vec::new();
        for partraw in s.split('&') {
            if ! partraw.is_empty() {
                if let Some((key, val)) = partraw.split_once('=') {
                    v.push((url_decode(key)?.into(),
                            url_decode(val)?.into()));
                } else {
                    // value-less key
                    v.push((url_decode(partraw)?.into(),
                            "".into()));
                }
            }
        }
        Ok(QueryString(v))
    }

    pub fn push(&mut self, key: impl Into<KString>, val: impl Into<KString>) {
        self.0.push((key.into(), val.into()));
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.iter().find(|(k, _)| k.as_str() == key).map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Append `query` to `url`, using `?` if `url` has no query part yet
/// and `&` otherwise. A trailing `?` or `&` on `url` is reused. A
/// fragment (`#...`) stays at the end.
pub fn append_query(url: &str, query: &QueryString) -> String {
    if query.is_empty() {
        return url.into()
    }
    let (base, fragment) = match url.split_once('#') {
        Some((b, f)) => (b, Some(f)),
        None => (url, None),
    };
    let mut s = String::with_capacity(url.len() + 16);
    s.push_str(base);
    if base.ends_with('?') || base.ends_with('&') {
        // separator already present
    } else if base.contains('?') {
        s.push('&');
    } else {
        s.push('?');
    }
    s.push_str(&String::from(query));
    if let Some(fragment) = fragment {
        s.push('#');
        s.push_str(fragment);
    }
    s
}

/// Append a single `key=val` parameter, see `append_query`.
pub fn append_query_param(url: &str, key: &str, val: &str) -> String {
    append_query(url, &QueryString::from_pairs([(key, val)]))
}
