//! String helpers: regex replace and split, whitespace removal, filtering.

use crate::error::UtilsResult;
use regex::Regex;

/// Replace every match of `regex` in `sample` with `replace`.
///
/// `replace` may reference capture groups (`$1`, `${name}`).
pub fn regex_replace(sample: &str, regex: &str, replace: &str) -> UtilsResult<String> {
    let re = Regex::new(regex)?;
    Ok(re.replace_all(sample, replace).into_owned())
}

/// Split `text` on every match of `delimiter`.
///
/// Leading, trailing and adjacent matches produce empty pieces, so the result
/// always has one more element than there are matches.
pub fn reg_split(text: &str, delimiter: &str) -> UtilsResult<Vec<String>> {
    let re = Regex::new(delimiter)?;
    Ok(re.split(text).map(str::to_string).collect())
}

/// Remove all whitespace from `s`.
pub fn ws_trim(s: &str) -> String {
    s.split_whitespace().collect()
}

/// Keep the items for which `test` returns true.
pub fn filter_strings<S, F>(items: &[S], mut test: F) -> Vec<String>
where
    S: AsRef<str>,
    F: FnMut(&str) -> bool,
{
    items
        .iter()
        .map(AsRef::as_ref)
        .filter(|s| test(*s))
        .map(str::to_string)
        .collect()
}
