//! Reports which skills and achievements an optimization pass added to a
//! builder resume.
//!
//! Comparison is on trimmed, lower-cased text with exact matching. Achievements
//! compare by description only; titles are ignored. Output order follows the
//! enhanced resume.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::models::builder::{BuilderAchievement, BuilderResumeData};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancementDiff {
    pub added_skills: Vec<String>,
    pub added_achievements: Vec<BuilderAchievement>,
    /// Passed through from the original resume.
    pub original_skills: Vec<String>,
    /// Passed through from the original resume.
    pub original_achievements: Vec<BuilderAchievement>,
}

impl EnhancementDiff {
    pub fn has_changes(&self) -> bool {
        !self.added_skills.is_empty() || !self.added_achievements.is_empty()
    }
}

pub fn diff_enhancement(original: &BuilderResumeData, enhanced: &BuilderResumeData) -> EnhancementDiff {
    let known_skills: HashSet<String> = original.skills.iter().map(|s| normalize(s)).collect();
    let known_achievements: HashSet<String> = original
        .achievements
        .iter()
        .map(|a| normalize(&a.description))
        .collect();

    let added_skills = enhanced
        .skills
        .iter()
        .filter(|s| !known_skills.contains(&normalize(s)))
        .cloned()
        .collect();

    let added_achievements = enhanced
        .achievements
        .iter()
        .filter(|a| !known_achievements.contains(&normalize(&a.description)))
        .cloned()
        .collect();

    EnhancementDiff {
        added_skills,
        added_achievements,
        original_skills: original.skills.clone(),
        original_achievements: original.achievements.clone(),
    }
}

fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_skills(skills: &[&str]) -> BuilderResumeData {
        BuilderResumeData {
            skills: skills.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    fn achievement(title: &str, description: &str) -> BuilderAchievement {
        BuilderAchievement {
            title: title.to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn test_new_skill_is_added() {
        let diff = diff_enhancement(&with_skills(&["Python"]), &with_skills(&["Python", "Go"]));
        assert_eq!(diff.added_skills, vec!["Go"]);
        assert!(diff.has_changes());
    }

    #[test]
    fn test_skill_match_ignores_case() {
        let diff = diff_enhancement(&with_skills(&["Python"]), &with_skills(&["python"]));
        assert!(diff.added_skills.is_empty());
        assert!(!diff.has_changes());
    }

    #[test]
    fn test_skill_match_ignores_surrounding_whitespace() {
        let diff = diff_enhancement(&with_skills(&["  Rust "]), &with_skills(&["rust"]));
        assert!(diff.added_skills.is_empty());
    }

    #[test]
    fn test_no_partial_matching() {
        let diff = diff_enhancement(&with_skills(&["Java"]), &with_skills(&["JavaScript"]));
        assert_eq!(diff.added_skills, vec!["JavaScript"]);
    }

    #[test]
    fn test_added_skills_keep_enhanced_order() {
        let diff = diff_enhancement(
            &with_skills(&["SQL"]),
            &with_skills(&["Terraform", "SQL", "AWS", "Docker"]),
        );
        assert_eq!(diff.added_skills, vec!["Terraform", "AWS", "Docker"]);
    }

    #[test]
    fn test_achievement_title_is_irrelevant() {
        let original = BuilderResumeData {
            achievements: vec![achievement("A", "Led team")],
            ..Default::default()
        };
        let enhanced = BuilderResumeData {
            achievements: vec![achievement("B", "Led team")],
            ..Default::default()
        };
        let diff = diff_enhancement(&original, &enhanced);
        assert!(diff.added_achievements.is_empty());
    }

    #[test]
    fn test_new_achievement_is_added() {
        let original = BuilderResumeData {
            achievements: vec![achievement("Achievement", "Led team")],
            ..Default::default()
        };
        let enhanced = BuilderResumeData {
            achievements: vec![
                achievement("Achievement", "LED TEAM "),
                achievement("Achievement", "Reduced p99 latency by 30%"),
            ],
            ..Default::default()
        };
        let diff = diff_enhancement(&original, &enhanced);
        assert_eq!(
            diff.added_achievements,
            vec![achievement("Achievement", "Reduced p99 latency by 30%")]
        );
    }

    #[test]
    fn test_originals_passed_through() {
        let original = BuilderResumeData {
            skills: vec!["Rust".to_string(), "rust".to_string()],
            achievements: vec![achievement("A", "Led team")],
            ..Default::default()
        };
        let diff = diff_enhancement(&original, &BuilderResumeData::default());
        assert_eq!(diff.original_skills, original.skills);
        assert_eq!(diff.original_achievements, original.achievements);
        assert!(diff.added_skills.is_empty());
    }

    #[test]
    fn test_diff_is_deterministic() {
        let original = with_skills(&["Python"]);
        let enhanced = with_skills(&["Go", "Python", "Kotlin"]);
        assert_eq!(
            diff_enhancement(&original, &enhanced),
            diff_enhancement(&original, &enhanced)
        );
    }
}
