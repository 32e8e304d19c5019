//! Vocabulary of recognized skill keywords

use crate::error::ScanError;

/// Skills recognized when no vocabulary file is given, in output order
pub const BUILTIN_SKILLS: &[&str] = &[
    "python",
    "java",
    "c++",
    "sql",
    "mysql",
    "html",
    "css",
    "javascript",
    "flask",
    "django",
    "spring",
    "react",
    "node.js",
    "docker",
    "aws",
    "rest apis",
    "tensorflow",
    "pytorch",
];

/// Ordered, duplicate-free list of lowercase skill literals
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    entries: Vec<String>,
}

impl Vocabulary {
    /// Build a vocabulary from raw entries.
    ///
    /// Entries are trimmed and lowercased. Blank entries are dropped, and
    /// a repeated entry keeps the position of its first occurrence.
    pub fn new<I, S>(entries: I) -> Result<Self, ScanError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for entry in entries {
            let skill = entry.as_ref().trim().to_lowercase();
            if skill.is_empty() || normalized.contains(&skill) {
                continue;
            }
            normalized.push(skill);
        }

        if normalized.is_empty() {
            return Err(ScanError::EmptyVocabulary);
        }

        Ok(Self {
            entries: normalized,
        })
    }

    /// The built-in vocabulary
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN_SKILLS.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, skill: &str) -> bool {
        self.entries.iter().any(|entry| entry == skill)
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::builtin()
    }
}
