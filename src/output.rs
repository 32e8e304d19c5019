//! Rendering of extraction results

use clap::ValueEnum;
use serde::Serialize;
use std::path::Path;

use crate::error::ScanError;
use crate::skills::SkillGap;

/// How results are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Comma-separated skills on one line
    #[default]
    Text,
    /// Single-line JSON object
    Json,
    /// `Field,Value` rows
    Csv,
}

/// What a scan produced
#[derive(Debug, Clone, Copy)]
pub enum Report<'a> {
    /// Skills found in one file
    Skills { file: &'a Path, skills: &'a [String] },
    /// A resume compared against a job description
    Gap {
        resume: &'a Path,
        job: &'a Path,
        gap: &'a SkillGap,
    },
}

#[derive(Debug, Serialize)]
struct JsonSkills<'a> {
    file: String,
    skills: &'a [String],
}

#[derive(Debug, Serialize)]
struct JsonGap<'a> {
    resume: String,
    job: String,
    #[serde(flatten)]
    gap: &'a SkillGap,
}

/// Render `report` without a trailing newline
pub fn render(format: OutputFormat, report: &Report<'_>) -> Result<String, ScanError> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => render_json(report),
        OutputFormat::Csv => render_csv(report),
    }
}

fn render_text(report: &Report<'_>) -> String {
    match report {
        Report::Skills { skills, .. } => skills.join(","),
        Report::Gap { gap, .. } => format!(
            "matched: {}\nmissing: {}\nscore: {}%",
            gap.matched_skills.join(","),
            gap.missing_skills.join(","),
            gap.match_score
        ),
    }
}

fn render_json(report: &Report<'_>) -> Result<String, ScanError> {
    let line = match report {
        Report::Skills { file, skills } => serde_json::to_string(&JsonSkills {
            file: file.display().to_string(),
            skills,
        })?,
        Report::Gap { resume, job, gap } => serde_json::to_string(&JsonGap {
            resume: resume.display().to_string(),
            job: job.display().to_string(),
            gap,
        })?,
    };
    Ok(line)
}

fn render_csv(report: &Report<'_>) -> Result<String, ScanError> {
    let rows: Vec<[String; 2]> = match report {
        Report::Skills { file, skills } => vec![
            ["File".to_string(), file.display().to_string()],
            ["Skills".to_string(), skills.join(", ")],
        ],
        Report::Gap { resume, job, gap } => vec![
            ["Resume File".to_string(), resume.display().to_string()],
            ["Job File".to_string(), job.display().to_string()],
            ["Match Score".to_string(), format!("{}%", gap.match_score)],
            ["Matched Skills".to_string(), gap.matched_skills.join(", ")],
            ["Missing Skills".to_string(), gap.missing_skills.join(", ")],
        ],
    };

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["Field", "Value"])?;
    for row in &rows {
        writer.write_record(row)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|err| csv::Error::from(err.into_error()))?;

    Ok(String::from_utf8_lossy(&bytes).trim_end().to_string())
}
