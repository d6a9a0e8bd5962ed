//! Labeled-section parser for model replies
//!
//! Deterministic line-based scanner, no grammar. The model is asked to answer
//! as `Summary: ... / Issue: ... / Suggestion: ...` but is free to ignore it,
//! so anything unrecognized is either folded into the open section or dropped.

use crate::analysis::chunker::split_lines;

/// Section currently receiving continuation lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    /// No label seen yet; lines are discarded
    #[default]
    None,
    Summary,
    Issue,
    Suggestion,
}

impl Section {
    /// Label prefix that opens this section (lowercase, with colon)
    fn label(self) -> Option<&'static str> {
        match self {
            Section::None => None,
            Section::Summary => Some("summary:"),
            Section::Issue => Some("issue:"),
            Section::Suggestion => Some("suggestion:"),
        }
    }
}

/// Labeled sections to try, in match priority
const LABELED: [Section; 3] = [Section::Summary, Section::Issue, Section::Suggestion];

/// The three labeled fields extracted from one reply
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedSections {
    pub summary: String,
    pub issue: String,
    pub suggestion: String,
}

impl ParsedSections {
    fn field_mut(&mut self, section: Section) -> Option<&mut String> {
        match section {
            Section::None => None,
            Section::Summary => Some(&mut self.summary),
            Section::Issue => Some(&mut self.issue),
            Section::Suggestion => Some(&mut self.suggestion),
        }
    }

    /// True when no labeled content was found
    pub fn is_empty(&self) -> bool {
        self.summary.is_empty() && self.issue.is_empty() && self.suggestion.is_empty()
    }
}

/// Scanner state for one parse call
#[derive(Debug, Default)]
struct SectionScanner {
    current: Section,
    sections: ParsedSections,
}

impl SectionScanner {
    /// Feed one trimmed, non-blank line
    fn feed(&mut self, line: &str) {
        if let Some((section, rest)) = match_label(line) {
            self.current = section;
            if let Some(field) = self.sections.field_mut(section) {
                *field = rest.trim().to_string();
            }
            return;
        }

        // Continuation of a multi-line value
        if let Some(field) = self.sections.field_mut(self.current) {
            field.push('\n');
            field.push_str(line);
        }
    }

    fn finish(self) -> ParsedSections {
        self.sections
    }
}

/// Match a case-insensitive label at the start of the line
///
/// Returns the section and the text after the label.
fn match_label(line: &str) -> Option<(Section, &str)> {
    LABELED.iter().find_map(|&section| {
        let label = section.label()?;
        let head = line.get(..label.len())?;
        if head.eq_ignore_ascii_case(label) {
            Some((section, &line[label.len()..]))
        } else {
            None
        }
    })
}

/// Parse a model reply into summary, issue and suggestion
///
/// Blank lines are skipped without closing the open section. A reply with no
/// recognized label yields three empty fields; that is not an error.
pub fn parse_response(content: &str) -> ParsedSections {
    let mut scanner = SectionScanner::default();

    for line in split_lines(content) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        scanner.feed(line);
    }

    scanner.finish()
}
