use std::collections::BTreeMap;

use url::Url;

/// Query parameter mirroring the committed search term.
pub const SEARCH_PARAM: &str = "search";

/// Read/write access to the query string of the page location.
///
/// Writes replace the location in place; they never navigate or add a
/// history entry.
pub trait QueryLocation {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&mut self, key: &str, value: Option<&str>);
}

/// Location backed by a full URL. Path, fragment and unrelated query pairs
/// are preserved across writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlLocation {
    url: Url,
}

impl UrlLocation {
    pub fn new(url: Url) -> Self {
        Self { url }
    }

    pub fn parse(input: &str) -> Result<Self, url::ParseError> {
        Url::parse(input).map(Self::new)
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl QueryLocation for UrlLocation {
    fn read(&self, key: &str) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    }

    fn write(&mut self, key: &str, value: Option<&str>) {
        // Same semantics as URLSearchParams.set/delete: the first occurrence is
        // replaced in place, later duplicates are dropped, a new key is appended.
        let mut pairs = Vec::new();
        let mut replaced = false;
        for (k, v) in self.url.query_pairs() {
            if k != key {
                pairs.push((k.into_owned(), v.into_owned()));
                continue;
            }
            if let (Some(value), false) = (value, replaced) {
                pairs.push((k.into_owned(), value.to_string()));
                replaced = true;
            }
        }
        if let (Some(value), false) = (value, replaced) {
            pairs.push((key.to_string(), value.to_string()));
        }

        if pairs.is_empty() {
            self.url.set_query(None);
        } else {
            self.url.query_pairs_mut().clear().extend_pairs(pairs);
        }
    }
}

/// In-memory location that records every write, for tests and headless runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryLocation {
    params: BTreeMap<String, String>,
    writes: Vec<(String, Option<String>)>,
}

impl MemoryLocation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_param(mut self, key: &str, value: &str) -> Self {
        self.params.insert(key.to_string(), value.to_string());
        self
    }

    pub fn writes(&self) -> &[(String, Option<String>)] {
        &self.writes
    }
}

impl QueryLocation for MemoryLocation {
    fn read(&self, key: &str) -> Option<String> {
        self.params.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: Option<&str>) {
        match value {
            Some(value) => {
                self.params.insert(key.to_string(), value.to_string());
            }
            None => {
                self.params.remove(key);
            }
        }
        self.writes
            .push((key.to_string(), value.map(ToOwned::to_owned)));
    }
}
