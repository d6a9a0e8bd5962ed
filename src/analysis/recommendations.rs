//! SQL recommendation extraction
//!
//! Turns the free-text suggestion section into short actionable statements.
//! One rule per line, first match wins.

use crate::analysis::chunker::split_lines;

/// Emitted for lines mentioning `SELECT *`
pub const AVOID_SELECT_STAR: &str = "Avoid SELECT *; select only needed columns.";

/// Emitted for lines mentioning a leading `LIKE` wildcard
pub const AVOID_LEADING_WILDCARD: &str =
    "Avoid leading wildcard in LIKE; consider FULLTEXT or RIGHT().";

/// Emitted for lines mentioning caching
pub const CONSIDER_CACHING: &str = "Consider query result caching (e.g., Redis, Memcached).";

/// Recommendation for a single suggestion line, if any
fn recommend_line(line: &str) -> Option<String> {
    let lower = line.to_lowercase();

    // An index line without a target table gets nothing, not a fallback
    if lower.contains("create index") || lower.contains("add index") {
        return lower.contains("on").then(|| line.to_string());
    }

    if lower.contains("select *") {
        Some(AVOID_SELECT_STAR.to_string())
    } else if lower.contains("like '%") || lower.contains("leading wildcard") {
        Some(AVOID_LEADING_WILDCARD.to_string())
    } else if lower.contains("cache") {
        Some(CONSIDER_CACHING.to_string())
    } else {
        None
    }
}

/// Extract recommendations from suggestion text, in line order
///
/// Duplicates across lines are kept.
pub fn sql_recommendations(suggestion_text: &str) -> Vec<String> {
    split_lines(suggestion_text)
        .map(str::trim)
        .filter_map(recommend_line)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_index_line_is_kept_verbatim() {
        let recs = sql_recommendations("CREATE INDEX idx ON table(col)");
        assert_eq!(recs, vec!["CREATE INDEX idx ON table(col)".to_string()]);
    }

    #[test]
    fn test_index_line_is_trimmed() {
        let recs = sql_recommendations("   ALTER TABLE t ADD INDEX idx_a (a) on t   ");
        assert_eq!(recs, vec!["ALTER TABLE t ADD INDEX idx_a (a) on t".to_string()]);
    }

    #[test]
    fn test_select_star_literal() {
        assert_eq!(
            sql_recommendations("select * from t"),
            vec![AVOID_SELECT_STAR.to_string()]
        );
    }

    #[test]
    fn test_leading_wildcard_literal() {
        assert_eq!(
            sql_recommendations("Remove the leading wildcard"),
            vec![AVOID_LEADING_WILDCARD.to_string()]
        );
        assert_eq!(
            sql_recommendations("WHERE name LIKE '%abc'"),
            vec![AVOID_LEADING_WILDCARD.to_string()]
        );
    }

    #[test]
    fn test_cache_literal() {
        assert_eq!(
            sql_recommendations("Cache the dashboard results"),
            vec![CONSIDER_CACHING.to_string()]
        );
    }

    #[test]
    fn test_index_rule_takes_priority() {
        // "on" is also satisfied by "columns"
        let line = "Add index to avoid SELECT * scanning all columns";
        assert_eq!(sql_recommendations(line), vec![line.to_string()]);
    }

    #[test]
    fn test_index_without_on_yields_nothing() {
        assert!(sql_recommendations("create index idx_email (email) + select *").is_empty());
    }

    #[test]
    fn test_order_and_duplicates_preserved() {
        let text = "select * here\nuse a cache\nagain select *\nnothing to see";
        assert_eq!(
            sql_recommendations(text),
            vec![
                AVOID_SELECT_STAR.to_string(),
                CONSIDER_CACHING.to_string(),
                AVOID_SELECT_STAR.to_string(),
            ]
        );
    }

    #[test]
    fn test_bare_cr_separates_lines() {
        let recs = sql_recommendations("CREATE INDEX i ON t(a)\rselect * from t");
        assert_eq!(
            recs,
            vec!["CREATE INDEX i ON t(a)".to_string(), AVOID_SELECT_STAR.to_string()]
        );
    }

    #[test]
    fn test_empty_suggestion() {
        assert!(sql_recommendations("").is_empty());
    }
}
