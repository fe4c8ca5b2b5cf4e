use std::sync::LazyLock;

use regex::Regex;

/// Literal sentinel for any field whose pattern matches nothing.
pub const NOT_FOUND: &str = "Not Found";

/// One label-anchored extraction rule: a pattern, the capture group to
/// keep (0 = whole match), and the fallback when nothing matches.
pub struct FieldRule {
    pattern: Regex,
    group: usize,
    fallback: &'static str,
}

impl FieldRule {
    fn new(pattern: &str, group: usize) -> Self {
        FieldRule {
            pattern: Regex::new(pattern).unwrap(),
            group,
            fallback: NOT_FOUND,
        }
    }

    /// Leftmost match's capture, or the rule's fallback.
    pub fn apply(&self, text: &str) -> String {
        self.pattern
            .captures(text)
            .and_then(|caps| caps.get(self.group))
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| self.fallback.to_string())
    }
}

pub static NAME_RULE: LazyLock<FieldRule> =
    LazyLock::new(|| FieldRule::new(r"(Name|Full Name):?\s*([A-Z][a-z]+\s[A-Z][a-z]+)", 2));
pub static EMAIL_RULE: LazyLock<FieldRule> =
    LazyLock::new(|| FieldRule::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}\b", 0));
pub static PHONE_RULE: LazyLock<FieldRule> = LazyLock::new(|| {
    FieldRule::new(
        r"\b(\+?\d{1,4}?[-.\s]?\(?\d{1,3}?\)?[-.\s]?\d{1,4}[-.\s]?\d{1,4}[-.\s]?\d{1,9})\b",
        0,
    )
});
pub static JOB_STATUS_RULE: LazyLock<FieldRule> = LazyLock::new(|| {
    FieldRule::new(
        r"(Job Status|Employment Status):?\s*(Employed|Unemployed|Freelancing)",
        2,
    )
});
pub static DESCRIPTION_RULE: LazyLock<FieldRule> =
    LazyLock::new(|| FieldRule::new(r"(Description|About Me|Summary):?\s*(.*)", 2));
