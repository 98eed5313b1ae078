//! Axum route handlers for the resume conversion API.

use axum::Json;
use serde::Deserialize;
use tracing::debug;

use crate::models::builder::BuilderResumeData;
use crate::models::lenient::null_as_default;
use crate::models::resume::ParsedResume;
use crate::resume::converter::{from_builder_format, to_builder_format};
use crate::resume::differ::{diff_enhancement, EnhancementDiff};

#[derive(Debug, Deserialize)]
pub struct EnhancementDiffRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub original: BuilderResumeData,
    #[serde(default, deserialize_with = "null_as_default")]
    pub enhanced: BuilderResumeData,
}

/// POST /api/v1/resumes/builder
pub async fn handle_to_builder(Json(parsed): Json<ParsedResume>) -> Json<BuilderResumeData> {
    debug!(
        work_entries = parsed.work_experience.len(),
        education_entries = parsed.education.len(),
        "Converting parsed resume to builder format"
    );
    Json(to_builder_format(&parsed))
}

/// POST /api/v1/resumes/parsed
pub async fn handle_from_builder(Json(builder): Json<BuilderResumeData>) -> Json<ParsedResume> {
    debug!(
        work_entries = builder.work_experience.len(),
        "Converting builder data to parsed resume"
    );
    Json(from_builder_format(&builder))
}

/// POST /api/v1/resumes/diff
pub async fn handle_enhancement_diff(
    Json(request): Json<EnhancementDiffRequest>,
) -> Json<EnhancementDiff> {
    let diff = diff_enhancement(&request.original, &request.enhanced);
    debug!(
        added_skills = diff.added_skills.len(),
        added_achievements = diff.added_achievements.len(),
        changed = diff.has_changes(),
        "Computed enhancement diff"
    );
    Json(diff)
}
