//! Whole-word matching of vocabulary entries against text

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use super::gap::SkillGap;
use super::types::Vocabulary;
use crate::error::ScanError;

/// Anything but a Unicode letter, number or underscore
const NON_WORD: &str = r"[^\p{Alphabetic}\p{N}_]";

static BUILTIN_EXTRACTOR: LazyLock<SkillExtractor> = LazyLock::new(|| {
    SkillExtractor::new(Vocabulary::builtin()).expect("Invalid builtin vocabulary")
});

/// A vocabulary entry paired with its compiled matcher
#[derive(Debug, Clone)]
struct SkillPattern {
    skill: String,
    regex: Regex,
}

impl SkillPattern {
    /// Compile a matcher for `skill`.
    ///
    /// The entry is escaped so `.` and `+` match literally. Instead of `\b`,
    /// which depends on whether the entry's own first and last characters are
    /// word characters, the neighbours of the match must be non-word
    /// characters or the ends of the text. Word characters are the same
    /// set as `char::is_alphanumeric` plus `_`; combining marks and other
    /// connector punctuation count as boundaries.
    fn compile(skill: &str) -> Result<Self, ScanError> {
        let pattern = format!(
            "(?:^|{NON_WORD}){}(?:{NON_WORD}|$)",
            regex::escape(skill)
        );
        let regex = Regex::new(&pattern).map_err(|source| ScanError::InvalidPattern {
            skill: skill.to_string(),
            source,
        })?;

        Ok(Self {
            skill: skill.to_string(),
            regex,
        })
    }

    fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

/// Extracts vocabulary entries that appear as whole words in text
#[derive(Debug, Clone)]
pub struct SkillExtractor {
    vocabulary: Vocabulary,
    patterns: Vec<SkillPattern>,
}

impl SkillExtractor {
    /// Compile one matcher per vocabulary entry
    pub fn new(vocabulary: Vocabulary) -> Result<Self, ScanError> {
        let patterns = vocabulary
            .entries()
            .iter()
            .map(|skill| SkillPattern::compile(skill))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            vocabulary,
            patterns,
        })
    }

    /// Shared extractor over the built-in vocabulary
    pub fn builtin() -> &'static Self {
        &BUILTIN_EXTRACTOR
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Return the vocabulary entries found in `text`.
    ///
    /// Matching is case-insensitive. Results follow vocabulary order, not
    /// the order in which skills appear in the text.
    pub fn extract(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }

        let normalized = text.to_lowercase();
        let found: Vec<String> = self
            .patterns
            .iter()
            .filter(|pattern| pattern.is_match(&normalized))
            .map(|pattern| pattern.skill.clone())
            .collect();

        debug!(
            text_len = text.len(),
            vocabulary = self.vocabulary.len(),
            matched = found.len(),
            "extracted skills"
        );
        found
    }

    /// Extract skills from both texts and compare them
    pub fn compare(&self, resume: &str, job: &str) -> SkillGap {
        SkillGap::compare(self.extract(resume), self.extract(job))
    }
}

/// Extract skills from `text` using the built-in vocabulary
pub fn extract_skills(text: &str) -> Vec<String> {
    SkillExtractor::builtin().extract(text)
}
