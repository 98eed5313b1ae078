//! Conversion between the parser's `ParsedResume` and the flat form data the
//! resume builder edits.
//!
//! The mapping is lossy in both directions: structured dates collapse into
//! free-text year fields and responsibilities collapse into one description.
//! Neither direction fails; absent values become empty strings or `None`.

use crate::models::builder::{
    BuilderAchievement, BuilderEducation, BuilderResumeData, BuilderWorkExperience, PersonalInfo,
};
use crate::models::resume::{ContactInfo, EducationEntry, ParsedResume, WorkExperienceEntry};

/// Separator placed between responsibilities in a builder description.
/// The first responsibility carries no bullet.
pub const BULLET_SEPARATOR: &str = "\n• ";

// ────────────────────────────────────────────────────────────────────────────
// Parsed → Builder
// ────────────────────────────────────────────────────────────────────────────

/// Projects a parsed resume into the builder's editable shape.
pub fn to_builder_format(parsed: &ParsedResume) -> BuilderResumeData {
    let contact = &parsed.contact_info;

    BuilderResumeData {
        personal_info: PersonalInfo {
            name: or_empty(&contact.name),
            email: or_empty(&contact.email),
            phone: or_empty(&contact.phone),
            location: or_empty(&contact.address),
        },
        summary: or_empty(&parsed.professional_summary),
        work_experience: parsed.work_experience.iter().map(to_builder_work).collect(),
        skills: non_blank(&parsed.skills).cloned().collect(),
        education: parsed.education.iter().map(to_builder_education).collect(),
        achievements: non_blank(&parsed.achievements)
            .map(|a| BuilderAchievement::untitled(a.as_str()))
            .collect(),
    }
}

fn to_builder_work(entry: &WorkExperienceEntry) -> BuilderWorkExperience {
    BuilderWorkExperience {
        company: entry.company.clone(),
        position: entry.position.clone(),
        start_year: or_empty(&entry.start_date),
        end_year: or_empty(&entry.end_date),
        location: or_empty(&entry.location),
        description: entry.responsibilities.join(BULLET_SEPARATOR),
    }
}

fn to_builder_education(entry: &EducationEntry) -> BuilderEducation {
    BuilderEducation {
        institution: entry.institution.clone(),
        degree: entry.degree.clone(),
        field: or_empty(&entry.field),
        year: or_empty(&entry.graduation_date),
        gpa: or_empty(&entry.gpa),
        location: or_empty(&entry.location),
    }
}

fn or_empty(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

/// Skips empty and whitespace-only strings. Does not deduplicate.
fn non_blank(items: &[String]) -> impl Iterator<Item = &String> {
    items.iter().filter(|item| !item.trim().is_empty())
}

// ────────────────────────────────────────────────────────────────────────────
// Builder → Parsed
// ────────────────────────────────────────────────────────────────────────────

/// Rebuilds a canonical resume from builder form data.
///
/// Fields the builder does not carry (projects, certifications, languages,
/// volunteer work, extra sections, linkedin/website) come back empty.
pub fn from_builder_format(builder: &BuilderResumeData) -> ParsedResume {
    let info = &builder.personal_info;

    ParsedResume {
        contact_info: ContactInfo {
            name: none_if_blank(&info.name),
            email: none_if_blank(&info.email),
            phone: none_if_blank(&info.phone),
            address: none_if_blank(&info.location),
            linkedin: None,
            website: None,
        },
        professional_summary: none_if_blank(&builder.summary),
        work_experience: builder.work_experience.iter().map(from_builder_work).collect(),
        education: builder
            .education
            .iter()
            .map(from_builder_education)
            .collect(),
        skills: non_blank(&builder.skills).cloned().collect(),
        achievements: builder
            .achievements
            .iter()
            .filter(|a| !a.description.trim().is_empty())
            .map(|a| a.description.clone())
            .collect(),
        ..Default::default()
    }
}

fn from_builder_work(entry: &BuilderWorkExperience) -> WorkExperienceEntry {
    WorkExperienceEntry {
        company: entry.company.clone(),
        position: entry.position.clone(),
        start_date: none_if_blank(&entry.start_year),
        end_date: none_if_blank(&entry.end_year),
        location: none_if_blank(&entry.location),
        responsibilities: split_description(&entry.description),
    }
}

fn from_builder_education(entry: &BuilderEducation) -> EducationEntry {
    EducationEntry {
        institution: entry.institution.clone(),
        degree: entry.degree.clone(),
        field: none_if_blank(&entry.field),
        graduation_date: none_if_blank(&entry.year),
        gpa: none_if_blank(&entry.gpa),
        location: none_if_blank(&entry.location),
    }
}

/// Splits a free-text description into responsibilities, one per line.
///
/// Leading `•` markers are removed, as are `-`/`*` markers followed by a
/// space. Blank lines are dropped.
pub fn split_description(description: &str) -> Vec<String> {
    description
        .lines()
        .map(strip_bullet)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn strip_bullet(line: &str) -> &str {
    let line = line.trim();
    if let Some(rest) = line.strip_prefix('•') {
        return rest.trim_start();
    }
    for marker in ["- ", "* "] {
        if let Some(rest) = line.strip_prefix(marker) {
            return rest.trim_start();
        }
    }
    line
}

fn none_if_blank(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
