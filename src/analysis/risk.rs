//! Keyword risk scoring for issue descriptions
//!
//! Each rule contributes independently; overlapping phrases compound.
//! The table is a best-effort heuristic and is kept exactly as tuned.

/// Upper bound of a risk score
pub const MAX_RISK_SCORE: u8 = 100;

/// A keyword rule: any phrase present adds `weight`
struct RiskRule {
    phrases: &'static [&'static str],
    weight: u32,
}

const RISK_RULES: &[RiskRule] = &[
    RiskRule {
        phrases: &["full table scan", "no index"],
        weight: 40,
    },
    RiskRule {
        phrases: &["repeated query", "duplicate query"],
        weight: 20,
    },
    RiskRule {
        phrases: &["select *"],
        weight: 10,
    },
    RiskRule {
        phrases: &["like '%", "leading wildcard"],
        weight: 15,
    },
    RiskRule {
        phrases: &["missing index"],
        weight: 30,
    },
    RiskRule {
        phrases: &["inefficient"],
        weight: 10,
    },
];

/// Score an issue description in `[0, 100]`
pub fn risk_score(issue_text: &str) -> u8 {
    let issue = issue_text.to_lowercase();

    let total: u32 = RISK_RULES
        .iter()
        .filter(|rule| rule.phrases.iter().any(|phrase| issue.contains(phrase)))
        .map(|rule| rule.weight)
        .sum();

    total.min(u32::from(MAX_RISK_SCORE)) as u8
}
