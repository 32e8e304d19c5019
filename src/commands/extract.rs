use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::config::VocabularyFile;
use crate::error::ScanError;
use crate::output::{self, OutputFormat, Report};
use crate::skills::SkillExtractor;

/// Inputs for one `skillscan` run
#[derive(Debug, Clone, Copy)]
pub struct ScanRequest<'a> {
    /// Resume or other text to scan
    pub file_path: &'a Path,
    /// TOML vocabulary replacing the built-in list
    pub vocabulary: Option<&'a Path>,
    /// Job description to compare the file against
    pub job: Option<&'a Path>,
    pub format: OutputFormat,
}

impl<'a> ScanRequest<'a> {
    /// Plain text scan of `file_path` with the built-in vocabulary
    pub fn new(file_path: &'a Path) -> Self {
        Self {
            file_path,
            vocabulary: None,
            job: None,
            format: OutputFormat::Text,
        }
    }
}

/// Read `path` as UTF-8 text. The handle is closed before returning.
pub fn read_text(path: &Path) -> Result<String, ScanError> {
    fs::read_to_string(path).map_err(|source| ScanError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Scan the requested file and return the rendered result.
///
/// Uses the vocabulary file when given, otherwise the built-in vocabulary.
/// With a job description, reports matched and missing job skills instead
/// of the plain skill list. Nothing is rendered if any step fails.
pub fn execute(request: &ScanRequest<'_>) -> Result<String, ScanError> {
    let custom = match request.vocabulary {
        Some(path) => Some(SkillExtractor::new(VocabularyFile::load(path)?)?),
        None => None,
    };
    let extractor = custom.as_ref().unwrap_or_else(|| SkillExtractor::builtin());

    let text = read_text(request.file_path)?;
    debug!(path = %request.file_path.display(), bytes = text.len(), "read input");

    let Some(job_path) = request.job else {
        let skills = extractor.extract(&text);
        info!(path = %request.file_path.display(), matched = skills.len(), "scan complete");

        let report = Report::Skills {
            file: request.file_path,
            skills: &skills,
        };
        return output::render(request.format, &report);
    };

    let job_text = read_text(job_path)?;
    debug!(path = %job_path.display(), bytes = job_text.len(), "read job description");

    let gap = extractor.compare(&text, &job_text);
    info!(
        resume = %request.file_path.display(),
        job = %job_path.display(),
        matched = gap.matched_skills.len(),
        missing = gap.missing_skills.len(),
        score = gap.match_score,
        "comparison complete"
    );

    let report = Report::Gap {
        resume: request.file_path,
        job: job_path,
        gap: &gap,
    };
    output::render(request.format, &report)
}
