//! # SafeSpace FAQ Responder
//!
//! File: lib/src/faq.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module implements the support bot behind the "Chat with Our Support
//! Bot" section. It maps free-text questions to canned answers using an
//! ordered table of pattern rules plus a default answer.
//!
//! ## Architecture
//!
//! - `FaqRule`: one `(pattern, answer)` pair as written in configuration.
//! - `RuleTable`: the serialized form of a whole table (`default_answer` plus
//!   an ordered `rules` array), loaded from TOML.
//! - `FaqResponder`: the compiled, immutable responder. Each pattern is
//!   compiled once, case-insensitively, when the responder is built.
//!
//! Matching policy:
//! 1. The query is lowercased; no other normalization is applied.
//! 2. Rules are scanned in table order.
//! 3. A rule matches when its pattern is found anywhere in the query
//!    (search semantics, not anchored).
//! 4. The first matching rule's answer is returned, otherwise the default.
//!
//! Invalid tables (uncompilable pattern, blank pattern, blank answer) are
//! rejected when the responder is built, so `respond` itself cannot fail and
//! always returns a non-empty answer.
//!
//! ## Examples
//!
//! ```rust
//! use safespace_core::faq::{FaqResponder, FaqRule, RuleTable};
//!
//! let table = RuleTable {
//!     default_answer: "Please ask about our hours.".into(),
//!     rules: vec![FaqRule::new(r"what are your hours\??", "9-5 weekdays")],
//! };
//! let bot = FaqResponder::new(table)?;
//! assert_eq!(bot.respond("What Are Your Hours?"), "9-5 weekdays");
//! assert_eq!(bot.respond("asdkjfh"), "Please ask about our hours.");
//! # Ok::<(), safespace_core::error::SafespaceError>(())
//! ```
//!
use crate::error::{Result, SafespaceError};
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// The rule table shipped with the crate.
const BUILTIN_RULE_TABLE: &str = include_str!("../data/faq_rules.toml");

/// A single FAQ rule: a case-insensitive search pattern and its canned answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FaqRule {
    /// Regular expression searched for anywhere in the lowercased query.
    pub pattern: String,
    /// Answer returned when this is the first rule to match.
    pub answer: String,
}

impl FaqRule {
    pub fn new(pattern: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            answer: answer.into(),
        }
    }
}

/// # FAQ Rule Table (`RuleTable`)
///
/// The configuration form of a responder. Kept as plain data so the wording
/// and the rules themselves can be edited without touching matching code.
///
/// ```toml
/// default_answer = "Sorry, I didn't catch that."
///
/// [[rules]]
/// pattern = 'what are your hours\??'
/// answer = "Open Monday to Friday 9 AM - 5 PM."
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleTable {
    /// Answer used when no rule matches.
    pub default_answer: String,
    /// Rules in precedence order (first match wins).
    #[serde(default)]
    pub rules: Vec<FaqRule>,
}

impl RuleTable {
    /// Parses a rule table from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| SafespaceError::Config(format!("Failed to parse FAQ rule table: {e}")))
    }

    /// # Load Rule Table From File (`from_path`)
    ///
    /// Reads and parses a TOML rule table.
    ///
    /// ## Errors
    ///
    /// * `SafespaceError::Io` if the file cannot be read.
    /// * `SafespaceError::Config` if the content is not a valid rule table.
    pub fn from_path(path: &Path) -> Result<Self> {
        debug!("Reading FAQ rule table from {}", path.display());
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// The built-in SafeSpace Organisation table: ten domain rules plus the
    /// default answer.
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_RULE_TABLE)
    }
}

#[derive(Debug)]
struct CompiledRule {
    rule: FaqRule,
    matcher: Regex,
}

/// # FAQ Responder (`FaqResponder`)
///
/// Immutable once built. A single responder can be shared (for example behind
/// an `Arc`) by any number of sessions since answering a query never mutates it.
#[derive(Debug)]
pub struct FaqResponder {
    rules: Vec<CompiledRule>,
    default_answer: String,
}

impl FaqResponder {
    /// # Build Responder (`new`)
    ///
    /// Validates and compiles a rule table.
    ///
    /// ## Arguments
    ///
    /// * `table` - The rule table, in precedence order.
    ///
    /// ## Returns
    ///
    /// * `Result<Self>` - The compiled responder.
    ///
    /// ## Errors
    ///
    /// * `SafespaceError::Config` if the default answer, any pattern, or any
    ///   answer is blank. A blank pattern would match every query and shadow
    ///   every rule after it.
    /// * `SafespaceError::RulePattern` if a pattern is not a valid regular expression.
    pub fn new(table: RuleTable) -> Result<Self> {
        if table.default_answer.trim().is_empty() {
            return Err(SafespaceError::Config(
                "FAQ default answer cannot be empty".to_string(),
            ));
        }

        let mut rules = Vec::with_capacity(table.rules.len());
        for (index, rule) in table.rules.into_iter().enumerate() {
            if rule.pattern.trim().is_empty() {
                return Err(SafespaceError::Config(format!(
                    "FAQ rule #{} has an empty pattern",
                    index + 1
                )));
            }
            if rule.answer.trim().is_empty() {
                return Err(SafespaceError::Config(format!(
                    "FAQ rule #{} ('{}') has an empty answer",
                    index + 1,
                    rule.pattern
                )));
            }
            let matcher = RegexBuilder::new(&rule.pattern)
                .case_insensitive(true)
                .build()
                .map_err(|source| SafespaceError::RulePattern {
                    pattern: rule.pattern.clone(),
                    source,
                })?;
            rules.push(CompiledRule { rule, matcher });
        }

        info!("Loaded FAQ responder with {} rule(s)", rules.len());
        Ok(Self {
            rules,
            default_answer: table.default_answer,
        })
    }

    /// Builds the responder from the built-in rule table.
    pub fn builtin() -> Result<Self> {
        Self::new(RuleTable::builtin()?)
    }

    /// Builds the responder from a TOML rule table on disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        Self::new(RuleTable::from_path(path)?)
    }

    /// # Answer a Query (`respond`)
    ///
    /// Returns the answer of the first rule whose pattern occurs in the
    /// lowercased query, or the default answer. Never fails; the empty string
    /// is answered like any other unmatched query.
    pub fn respond(&self, query: &str) -> &str {
        match self.matching_rule(query) {
            Some(rule) => &rule.answer,
            None => &self.default_answer,
        }
    }

    /// The first rule matching `query`, if any.
    pub fn matching_rule(&self, query: &str) -> Option<&FaqRule> {
        let normalized = query.to_lowercase();
        let hit = self
            .rules
            .iter()
            .find(|compiled| compiled.matcher.is_match(&normalized))
            .map(|compiled| &compiled.rule);
        match hit {
            Some(rule) => debug!("Query matched FAQ pattern '{}'", rule.pattern),
            None => debug!("Query matched no FAQ rule; using default answer"),
        }
        hit
    }

    /// Rules in precedence order.
    pub fn rules(&self) -> impl Iterator<Item = &FaqRule> {
        self.rules.iter().map(|compiled| &compiled.rule)
    }

    pub fn default_answer(&self) -> &str {
        &self.default_answer
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const DEFAULT: &str = "Sorry, I didn't catch that.";

    fn responder(rules: &[(&str, &str)]) -> FaqResponder {
        let table = RuleTable {
            default_answer: DEFAULT.to_string(),
            rules: rules.iter().map(|(p, a)| FaqRule::new(*p, *a)).collect(),
        };
        FaqResponder::new(table).expect("valid rule table")
    }

    #[test]
    fn test_first_matching_rule_wins() {
        let bot = responder(&[("hello", "A"), ("lo", "B")]);
        assert_eq!(bot.respond("hello there"), "A");
        // Only the later rule matches here.
        assert_eq!(bot.respond("slow"), "B");
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let bot = responder(&[(r"what are your hours\??", "9-5 weekdays")]);
        assert_eq!(bot.respond("What Are Your Hours?"), "9-5 weekdays");
        assert_eq!(bot.respond("WHAT ARE YOUR HOURS"), "9-5 weekdays");
    }

    #[test]
    fn test_uppercase_pattern_still_matches() {
        let bot = responder(&[("SafeSpace", "That's us!")]);
        assert_eq!(bot.respond("tell me about safespace"), "That's us!");
    }

    #[test]
    fn test_pattern_found_anywhere_in_query() {
        let bot = responder(&[("crisis line", "Call now.")]);
        assert_eq!(
            bot.respond("Hi, please tell me: what is the crisis line number?"),
            "Call now."
        );
    }

    #[test]
    fn test_unmatched_query_gets_default() {
        let bot = responder(&[("hours", "9-5")]);
        assert_eq!(bot.respond("asdkjfh"), DEFAULT);
        assert!(bot.matching_rule("asdkjfh").is_none());
    }

    #[test]
    fn test_empty_query_gets_default() {
        let bot = responder(&[("hours", "9-5")]);
        assert_eq!(bot.respond(""), DEFAULT);
    }

    #[test]
    fn test_empty_rule_list_always_defaults() {
        let bot = responder(&[]);
        assert!(bot.is_empty());
        assert_eq!(bot.respond("what are your hours?"), DEFAULT);
    }

    #[test]
    fn test_respond_is_deterministic() {
        let bot = FaqResponder::builtin().unwrap();
        for query in ["How can I volunteer?", "random words", "", "COST??"] {
            assert_eq!(bot.respond(query), bot.respond(query));
            assert!(!bot.respond(query).is_empty());
        }
    }

    #[test]
    fn test_builtin_table_has_ten_rules_in_order() {
        let bot = FaqResponder::builtin().unwrap();
        assert_eq!(bot.len(), 10);
        let first = bot.rules().next().unwrap();
        assert!(first.pattern.starts_with("what is safespace organisation"));
        assert!(bot.default_answer().starts_with("Sorry, I didn't catch that."));
    }

    #[test]
    fn test_builtin_answers_canonical_questions() {
        let bot = FaqResponder::builtin().unwrap();
        assert_eq!(
            bot.respond("What are your hours?"),
            "Open Monday to Friday 9 AM - 5 PM, and Saturdays 10 AM - 2 PM."
        );
        assert!(bot.respond("How can I contact you?").contains("+254 781 095 919"));
        assert!(bot.respond("Who are the founders?").contains("Jerim Owino"));
        assert!(bot.respond("how much does it cost").contains("KSh 500"));
        assert!(bot
            .respond("How can I partner with you?")
            .contains("Partnership form"));
        assert_eq!(bot.respond("tell me a joke"), bot.default_answer());
    }

    #[test]
    fn test_invalid_pattern_is_rejected() {
        let table = RuleTable {
            default_answer: DEFAULT.into(),
            rules: vec![FaqRule::new("(unclosed", "never")],
        };
        let err = FaqResponder::new(table).unwrap_err();
        assert!(matches!(
            err,
            SafespaceError::RulePattern { ref pattern, .. } if pattern == "(unclosed"
        ));
    }

    #[test]
    fn test_blank_default_is_rejected() {
        let table = RuleTable {
            default_answer: "   ".into(),
            rules: vec![],
        };
        assert!(matches!(
            FaqResponder::new(table),
            Err(SafespaceError::Config(_))
        ));
    }

    #[test]
    fn test_blank_answer_and_pattern_are_rejected() {
        let blank_answer = RuleTable {
            default_answer: DEFAULT.into(),
            rules: vec![FaqRule::new("hours", "")],
        };
        let err = FaqResponder::new(blank_answer).unwrap_err();
        assert!(err.to_string().contains("rule #1 ('hours') has an empty answer"));

        let blank_pattern = RuleTable {
            default_answer: DEFAULT.into(),
            rules: vec![FaqRule::new("hours", "9-5"), FaqRule::new("", "anything")],
        };
        let err = FaqResponder::new(blank_pattern).unwrap_err();
        assert!(err.to_string().contains("rule #2 has an empty pattern"));
    }

    #[test]
    fn test_rule_table_from_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            default_answer = "Ask me something else."

            [[rules]]
            pattern = 'donat(e|ion)'
            answer = "Use the donation form."
            "#
        )
        .unwrap();

        let bot = FaqResponder::from_path(file.path()).unwrap();
        assert_eq!(bot.respond("How do I DONATE?"), "Use the donation form.");
        assert_eq!(bot.respond("hello"), "Ask me something else.");
    }

    #[test]
    fn test_rule_table_rejects_unknown_fields() {
        let result = RuleTable::from_toml_str(
            r#"
            default_answer = "x"
            [[rules]]
            pattern = "a"
            answer = "b"
            priority = 3
            "#,
        );
        assert!(matches!(result, Err(SafespaceError::Config(_))));
    }

    #[test]
    fn test_missing_rule_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = RuleTable::from_path(&dir.path().join("nope.toml"));
        assert!(matches!(result, Err(SafespaceError::Io { .. })));
    }
}
