use crate::constants::{WILDCARD, method};

/// Canonical `Access-Control-Allow-Methods` list.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct AllowedMethods {
    values: Vec<String>,
}

impl AllowedMethods {
    /// Builds the list in caller order. A `"*"` anywhere in the input replaces
    /// the whole list with [`method::ALL`].
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        if values.iter().any(|value| value == WILDCARD) {
            return Self::any();
        }

        Self { values }
    }

    pub fn any() -> Self {
        Self {
            values: method::ALL.iter().map(|value| value.to_string()).collect(),
        }
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Method tokens are case-sensitive, so `"post"` is not `"POST"`.
    pub fn allows_method(&self, requested: &str) -> bool {
        self.values.iter().any(|value| value == requested)
    }

    pub fn header_value(&self) -> String {
        self.values.join(", ")
    }
}

impl Default for AllowedMethods {
    fn default() -> Self {
        Self::list([method::GET])
    }
}

#[cfg(test)]
#[path = "allowed_methods_test.rs"]
mod allowed_methods_test;
