//! Moderation rule table and pure classifier.
//!
//! # Responsibility
//! - Ship the built-in pattern table and compile deployment-specific ones.
//! - Screen submitter-controlled text against the table.
//!
//! # Invariants
//! - Rules are evaluated in table order; the first match decides.
//! - The outcome is binary: a submission is stored whole or refused whole.

use crate::model::quote::QuoteDraft;
use once_cell::sync::Lazy;
use regex::Regex;

/// Category attached to every moderation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleCategory {
    /// Word-boundary matched profanity and slurs.
    Profanity,
    /// Self-harm encouragement phrases.
    SelfHarm,
    /// Hate-speech variants, including leetspeak substitutions.
    HateSpeech,
    /// Explicit-content keywords.
    Explicit,
}

impl RuleCategory {
    /// Stable lowercase label used in log lines.
    pub fn label(self) -> &'static str {
        match self {
            Self::Profanity => "profanity",
            Self::SelfHarm => "self_harm",
            Self::HateSpeech => "hate_speech",
            Self::Explicit => "explicit",
        }
    }
}

/// One case-insensitive pattern bound to a category.
#[derive(Debug, Clone)]
pub struct ModerationRule {
    /// Category reported when this rule matches.
    pub category: RuleCategory,
    /// Compiled case-insensitive pattern.
    pub pattern: Regex,
}

impl ModerationRule {
    /// Compiles one rule; case-insensitivity is applied here, patterns stay
    /// plain.
    ///
    /// # Errors
    /// - Returns the underlying compile error for malformed patterns.
    pub fn new(category: RuleCategory, pattern: &str) -> Result<Self, regex::Error> {
        let pattern = Regex::new(&format!("(?i){pattern}"))?;
        Ok(Self { category, pattern })
    }
}

static DEFAULT_RULES: Lazy<Vec<ModerationRule>> = Lazy::new(|| {
    [
        (
            RuleCategory::Profanity,
            r"\b(fuck|shit|ass|bitch|damn|hell|crap|piss|cock|dick|pussy|cunt|bastard|whore|slut)\b",
        ),
        (RuleCategory::SelfHarm, r"\b(kill yourself|kys|suicide|die)\b"),
        (
            RuleCategory::HateSpeech,
            r"\b(n[i1]gg[ae]r|f[a4]gg[o0]t|r[e3]t[a4]rd)\b",
        ),
        (RuleCategory::Explicit, r"(xxx|porn|sex|nude)"),
    ]
    .into_iter()
    .map(|(category, pattern)| {
        ModerationRule::new(category, pattern).expect("valid built-in moderation pattern")
    })
    .collect()
});

/// Returns a copy of the built-in rule table.
///
/// Deployments tune moderation by building a [`Moderator`] over their own
/// table instead of editing this one.
pub fn default_rules() -> Vec<ModerationRule> {
    DEFAULT_RULES.clone()
}

/// Screening outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screening {
    /// No rule matched.
    Accepted,
    /// A rule matched; the whole submission is refused.
    Rejected {
        /// Category of the first matching rule.
        category: RuleCategory,
    },
}

/// Pure text classifier over an ordered rule table.
#[derive(Debug, Clone)]
pub struct Moderator {
    rules: Vec<ModerationRule>,
}

impl Default for Moderator {
    fn default() -> Self {
        Self::new(default_rules())
    }
}

impl Moderator {
    /// Creates a moderator over the given rule table.
    pub fn new(rules: Vec<ModerationRule>) -> Self {
        Self { rules }
    }

    /// Classifies free text. The first matching rule decides.
    pub fn screen(&self, text: &str) -> Screening {
        for rule in &self.rules {
            if rule.pattern.is_match(text) {
                return Screening::Rejected {
                    category: rule.category,
                };
            }
        }
        Screening::Accepted
    }

    /// Screens every submitter-controlled text field of a draft, joined with
    /// single spaces, so a violation in any one field refuses the whole
    /// submission. The origin URL is not screened.
    pub fn screen_draft(&self, draft: &QuoteDraft) -> Screening {
        let combined = format!("{} {} {}", draft.quote, draft.context, draft.extra_info);
        self.screen(&combined)
    }
}
