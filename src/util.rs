pub(crate) fn normalize_lower(value: &str) -> String {
    if value.is_ascii() {
        let mut owned = value.to_owned();
        owned.make_ascii_lowercase();
        owned
    } else {
        value.to_lowercase()
    }
}

pub(crate) fn equals_ignore_case(a: &str, b: &str) -> bool {
    if a == b {
        return true;
    }

    if a.is_ascii() && b.is_ascii() {
        return a.eq_ignore_ascii_case(b);
    }

    normalize_lower(a) == normalize_lower(b)
}

/// Splits a comma-separated header value into trimmed, lower-cased tokens.
/// Empty entries are kept, so `"X-A,"` yields `"x-a"` and `""`.
pub(crate) fn lower_tokens(value: &str) -> impl Iterator<Item = String> + '_ {
    value.split(',').map(str::trim).map(normalize_lower)
}

#[cfg(test)]
#[path = "util_test.rs"]
mod util_test;
