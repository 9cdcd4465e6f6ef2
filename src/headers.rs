use crate::constants::header;
use crate::util::equals_ignore_case;
use indexmap::IndexMap;

/// Header name to value, in insertion order.
pub type Headers = IndexMap<String, String>;

/// Builder for header blocks. Names compare case-insensitively; `Vary`
/// values accumulate instead of replacing each other.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct HeaderCollection {
    headers: Headers,
}

impl HeaderCollection {
    pub(crate) fn new() -> Self {
        Self::with_estimate(8)
    }

    pub(crate) fn with_estimate(estimate: usize) -> Self {
        Self {
            headers: IndexMap::with_capacity(estimate),
        }
    }

    pub(crate) fn from_headers(headers: &Headers) -> Self {
        Self {
            headers: headers.clone(),
        }
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.headers
            .keys()
            .position(|existing| equals_ignore_case(existing, name))
    }

    pub(crate) fn push<N, V>(&mut self, name: N, value: V)
    where
        N: Into<String>,
        V: Into<String>,
    {
        let name = name.into();
        if name.eq_ignore_ascii_case(header::VARY) {
            self.add_vary(value);
            return;
        }

        let value = value.into();
        match self.position(&name) {
            Some(index) => {
                if let Some((_, existing)) = self.headers.get_index_mut(index) {
                    *existing = value;
                }
            }
            None => {
                self.headers.insert(name, value);
            }
        }
    }

    pub(crate) fn add_vary<S: Into<String>>(&mut self, value: S) {
        let incoming = value.into();
        let merged = merge_vary(self.get(header::VARY), incoming.trim());

        match (merged, self.position(header::VARY)) {
            (Some(merged), Some(index)) => {
                if let Some((_, existing)) = self.headers.get_index_mut(index) {
                    *existing = merged;
                }
            }
            (Some(merged), None) => {
                self.headers.insert(header::VARY.to_string(), merged);
            }
            (None, Some(index)) => {
                self.headers.shift_remove_index(index);
            }
            (None, None) => {}
        }
    }

    pub(crate) fn get(&self, name: &str) -> Option<&str> {
        self.position(name)
            .and_then(|index| self.headers.get_index(index))
            .map(|(_, value)| value.as_str())
    }

    pub(crate) fn extend(&mut self, other: HeaderCollection) {
        for (name, value) in other.headers {
            self.push(name, value);
        }
    }

    pub(crate) fn into_headers(self) -> Headers {
        self.headers
    }
}

/// Appends `incoming` to an existing comma-separated `Vary` value, skipping
/// entries already present. Returns `None` when nothing remains.
pub(crate) fn merge_vary(existing: Option<&str>, incoming: &str) -> Option<String> {
    let mut entries: Vec<&str> = Vec::new();
    let candidates = existing
        .into_iter()
        .flat_map(|value| value.split(','))
        .chain(std::iter::once(incoming));

    for entry in candidates.map(str::trim).filter(|entry| !entry.is_empty()) {
        if !entries
            .iter()
            .any(|present| equals_ignore_case(present, entry))
        {
            entries.push(entry);
        }
    }

    if entries.is_empty() {
        None
    } else {
        Some(entries.join(", "))
    }
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;
