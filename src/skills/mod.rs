//! Skill keyword extraction
//!
//! This module provides:
//! - A fixed, ordered vocabulary of skill keywords (languages, frameworks, tools)
//! - Whole-word, case-insensitive matching of that vocabulary against free text
//! - Resume versus job description comparison (matched, missing, score)
//!
//! # Example
//!
//! ```
//! use skillscan::skills::extract_skills;
//!
//! let skills = extract_skills("Shipped Docker images for a Flask service");
//! assert_eq!(skills, vec!["flask", "docker"]);
//! ```

mod gap;
mod matcher;
mod types;

pub use gap::SkillGap;
pub use matcher::{extract_skills, SkillExtractor};
pub use types::{Vocabulary, BUILTIN_SKILLS};
