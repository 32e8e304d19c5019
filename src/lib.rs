//! Scan text for a vocabulary of skill keywords.
//!
//! The library exposes the extractor ([`skills`]) and the pieces the
//! `skillscan` binary is assembled from.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod skills;

pub use error::ScanError;
pub use skills::{extract_skills, SkillExtractor, SkillGap, Vocabulary};
