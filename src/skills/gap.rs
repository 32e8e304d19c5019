//! Comparison of resume skills against job description skills

use serde::Serialize;

/// Skills a job asks for, split into those the resume covers and those it lacks
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillGap {
    /// Skills found in the resume
    pub resume_skills: Vec<String>,
    /// Skills found in the job description
    pub job_skills: Vec<String>,
    /// Job skills also present in the resume
    pub matched_skills: Vec<String>,
    /// Job skills absent from the resume
    pub missing_skills: Vec<String>,
    /// Percentage of job skills covered, rounded; 0 when the job lists none
    pub match_score: u8,
}

impl SkillGap {
    /// Compare two skill lists taken from the same extractor.
    ///
    /// Both inputs are in vocabulary order, so the matched and missing
    /// lists are too.
    pub fn compare(resume_skills: Vec<String>, job_skills: Vec<String>) -> Self {
        let (matched_skills, missing_skills): (Vec<String>, Vec<String>) = job_skills
            .iter()
            .cloned()
            .partition(|skill| resume_skills.contains(skill));

        let match_score = score(matched_skills.len(), job_skills.len());

        Self {
            resume_skills,
            job_skills,
            matched_skills,
            missing_skills,
            match_score,
        }
    }
}

fn score(matched: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    (matched as f64 * 100.0 / total as f64).round() as u8
}
