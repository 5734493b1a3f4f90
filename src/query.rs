//! Repair of SQL text assembled by conditional string concatenation.
//!
//! Callers commonly build a clause like `"... WHERE " + cond_a + " AND " + cond_b + " GROUP BY ..."`
//! where some of the conditions may be empty. That leaves dangling keywords such as
//! `WHERE AND` or `AND GROUP BY` which [`clean_query`] patches up.
//!
//! This is plain pattern matching over the text, not a SQL parser. Only the keyword
//! pairs listed in `REPAIRS` are recognized; any other malformation passes through
//! untouched and will surface as a prepare error. Keywords are matched case-sensitively
//! and inside string literals too, so untested clause combinations are a likely source
//! of surprises.

use regex::Regex;
use std::sync::OnceLock;

/// Substitutions applied in order. Later entries rely on earlier ones having run:
/// `AND ORDER BY` must be folded before `AND OR` is considered.
const REPAIRS: [(&str, &str); 8] = [
    (r"\bAND\s+GROUP BY\b", "GROUP BY"),
    (r"\bAND\s+ORDER BY\b", "ORDER BY"),
    (r"\bWHERE\s+GROUP BY\b", "GROUP BY"),
    (r"\bWHERE\s+ORDER BY\b", "ORDER BY"),
    (r"\bAND\s+OR\b\s*", "AND "),
    (r"\bWHERE\s+AND\b\s*", "WHERE "),
    (r"\bAND\s+AND\b\s*", "AND "),
    (r"\bAND\s+", "AND "),
];

fn repairs() -> &'static [(Regex, &'static str)] {
    static COMPILED: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();
    COMPILED.get_or_init(|| {
        REPAIRS
            .iter()
            .map(|(pattern, replacement)| {
                let re = Regex::new(pattern).expect("invalid built-in query repair regex");
                (re, *replacement)
            })
            .collect()
    })
}

fn repair_pass(query: &str) -> String {
    let mut out = query.to_string();
    for (re, replacement) in repairs() {
        // NoExpand: replacements are literal text, not capture templates
        out = re
            .replace_all(&out, regex::NoExpand(*replacement))
            .into_owned();
    }
    out.trim_end_matches(',').to_string()
}

/// Remove leftover keywords and trailing commas from a concatenated query.
///
/// Passes are repeated until the text stops changing, so the result is a fixed
/// point: `clean_query(&clean_query(q)) == clean_query(q)`.
///
/// ```
/// use rust_utils::query::clean_query;
///
/// assert_eq!(clean_query("WHERE AND x=1"), "WHERE x=1");
/// assert_eq!(
///     clean_query("SELECT a FROM t WHERE a=1 AND GROUP BY a"),
///     "SELECT a FROM t WHERE a=1 GROUP BY a"
/// );
/// ```
pub fn clean_query(query: &str) -> String {
    let mut current = repair_pass(query);
    loop {
        let next = repair_pass(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

/// Strip one trailing `suffix` from `s`, or return `s` unchanged.
///
/// ```
/// use rust_utils::query::trim_suffix;
///
/// assert_eq!(trim_suffix("abc,", ","), "abc");
/// assert_eq!(trim_suffix("abc", ","), "abc");
/// ```
pub fn trim_suffix<'a>(s: &'a str, suffix: &str) -> &'a str {
    s.strip_suffix(suffix).unwrap_or(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_dangling_where_and() {
        assert_eq!(clean_query("WHERE AND x=1"), "WHERE x=1");
        assert_eq!(
            clean_query("SELECT * FROM t WHERE  AND a=1 AND b=2"),
            "SELECT * FROM t WHERE a=1 AND b=2"
        );
    }

    #[test]
    fn folds_keywords_before_grouping_and_ordering() {
        assert_eq!(
            clean_query("SELECT a FROM t WHERE ORDER BY a"),
            "SELECT a FROM t ORDER BY a"
        );
        assert_eq!(
            clean_query("SELECT a FROM t WHERE GROUP BY a"),
            "SELECT a FROM t GROUP BY a"
        );
        assert_eq!(
            clean_query("SELECT a FROM t WHERE a=1 AND\n ORDER BY a"),
            "SELECT a FROM t WHERE a=1 ORDER BY a"
        );
    }

    #[test]
    fn collapses_repeated_connectives() {
        assert_eq!(clean_query("WHERE a=1 AND AND b=2"), "WHERE a=1 AND b=2");
        assert_eq!(clean_query("WHERE a=1 AND OR b=2"), "WHERE a=1 AND b=2");
        assert_eq!(
            clean_query("WHERE a=1 AND AND AND b=2"),
            "WHERE a=1 AND b=2"
        );
        assert_eq!(clean_query("WHERE a=1 AND\t\tb=2"), "WHERE a=1 AND b=2");
    }

    #[test]
    fn and_before_order_by_is_not_read_as_and_or() {
        assert_eq!(
            clean_query("WHERE a=1 AND ORDERS=2"),
            "WHERE a=1 AND ORDERS=2"
        );
    }

    #[test]
    fn trims_trailing_commas() {
        assert_eq!(
            clean_query("INSERT INTO t VALUES (1),(2),"),
            "INSERT INTO t VALUES (1),(2)"
        );
        assert_eq!(clean_query("a,,"), "a");
    }

    #[test]
    fn unrelated_text_is_untouched() {
        let q = "SELECT * FROM t WHERE a = 'x' OR b = 2";
        assert_eq!(clean_query(q), q);
        assert_eq!(clean_query(""), "");
    }

    #[test]
    fn cleaning_is_idempotent() {
        let samples = [
            "WHERE AND x=1",
            "SELECT * FROM t WHERE AND AND AND a=1 AND OR b=2 AND GROUP BY a,",
            "WHERE a=1 AND \n\t AND b=2 AND ORDER BY c,,",
            "UPDATE t SET a=?, b=? WHERE AND id=?",
            "no keywords here,",
        ];
        for q in samples {
            let once = clean_query(q);
            assert_eq!(clean_query(&once), once, "not idempotent for {q:?}");
        }
    }

    #[test]
    fn trim_suffix_removes_a_single_occurrence() {
        assert_eq!(trim_suffix("abc,", ","), "abc");
        assert_eq!(trim_suffix("abc", ","), "abc");
        assert_eq!(trim_suffix("abc,,", ","), "abc,");
        assert_eq!(trim_suffix("", ","), "");
        assert_eq!(trim_suffix("abc", ""), "abc");
    }
}
