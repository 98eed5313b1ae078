//! Resume template catalog.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::lenient::blank_as_none;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateCategory {
    Professional,
    Modern,
    Creative,
    Minimal,
    Executive,
    Technical,
    Academic,
}

impl FromStr for TemplateCategory {
    type Err = String;

    /// Case-insensitive, matching the lowercase wire names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "professional" => Ok(Self::Professional),
            "modern" => Ok(Self::Modern),
            "creative" => Ok(Self::Creative),
            "minimal" => Ok(Self::Minimal),
            "executive" => Ok(Self::Executive),
            "technical" => Ok(Self::Technical),
            "academic" => Ok(Self::Academic),
            other => Err(format!("unknown template category '{other}'")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplateMetadata {
    pub id: &'static str,
    pub name: &'static str,
    pub category: TemplateCategory,
    pub description: &'static str,
    pub features: &'static [&'static str],
    /// `None` means the template suits any industry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industries: Option<&'static [&'static str]>,
    pub recommended: bool,
}

impl TemplateMetadata {
    /// Case-insensitive industry match.
    pub fn applies_to_industry(&self, industry: &str) -> bool {
        match self.industries {
            None => true,
            Some(list) => list.iter().any(|i| i.eq_ignore_ascii_case(industry.trim())),
        }
    }
}

/// The first entry is the default template.
pub static TEMPLATES: &[TemplateMetadata] = &[
    TemplateMetadata {
        id: "modern-professional",
        name: "Modern Professional",
        category: TemplateCategory::Professional,
        description: "Balanced single-column layout with a colored header band.",
        features: &["ATS-friendly", "Single column", "Color accents", "Skills grid"],
        industries: None,
        recommended: true,
    },
    TemplateMetadata {
        id: "classic-executive",
        name: "Classic Executive",
        category: TemplateCategory::Executive,
        description: "Conservative serif layout that leads with a leadership summary.",
        features: &["Serif typography", "Summary first", "Two-page friendly"],
        industries: Some(&["Finance", "Consulting", "Legal", "Management"]),
        recommended: false,
    },
    TemplateMetadata {
        id: "creative-portfolio",
        name: "Creative Portfolio",
        category: TemplateCategory::Creative,
        description: "Two-column layout with a sidebar for links and project highlights.",
        features: &["Two columns", "Sidebar", "Project highlights", "Bold headings"],
        industries: Some(&["Design", "Marketing", "Media", "Advertising"]),
        recommended: false,
    },
    TemplateMetadata {
        id: "minimal-clean",
        name: "Minimal Clean",
        category: TemplateCategory::Minimal,
        description: "Whitespace-heavy layout with hairline section dividers.",
        features: &["ATS-friendly", "Single column", "Monochrome"],
        industries: None,
        recommended: false,
    },
    TemplateMetadata {
        id: "tech-developer",
        name: "Tech Developer",
        category: TemplateCategory::Technical,
        description: "Skills and projects up front, compact experience bullets.",
        features: &["Skills first", "Projects section", "Monospace accents", "ATS-friendly"],
        industries: Some(&["Technology", "Software", "Data", "Engineering"]),
        recommended: true,
    },
    TemplateMetadata {
        id: "academic-research",
        name: "Academic Research",
        category: TemplateCategory::Academic,
        description: "CV-style layout with publications and teaching sections.",
        features: &["Publications", "Multi-page", "Education first"],
        industries: Some(&["Education", "Research", "Healthcare"]),
        recommended: false,
    },
    TemplateMetadata {
        id: "modern-gradient",
        name: "Modern Gradient",
        category: TemplateCategory::Modern,
        description: "Contemporary layout with a gradient header and timeline experience.",
        features: &["Timeline", "Gradient header", "Icons"],
        industries: Some(&["Technology", "Startups", "Marketing"]),
        recommended: false,
    },
];

pub fn default_template() -> &'static TemplateMetadata {
    &TEMPLATES[0]
}

/// Exact-match lookup. `None` when the id is unknown.
pub fn find_template(id: &str) -> Option<&'static TemplateMetadata> {
    TEMPLATES.iter().find(|template| template.id == id)
}

/// Lookup that falls back to the default template for unknown ids.
/// Use `find_template` to tell the two cases apart.
pub fn get_template_by_id(id: &str) -> &'static TemplateMetadata {
    find_template(id).unwrap_or_else(default_template)
}

/// Catalog filter; every set field must match. Catalog order is preserved.
/// Blank query values count as unset.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TemplateFilter {
    #[serde(default, deserialize_with = "blank_as_none")]
    pub category: Option<TemplateCategory>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub industry: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub recommended: Option<bool>,
}

impl TemplateFilter {
    pub fn matches(&self, template: &TemplateMetadata) -> bool {
        self.category.map_or(true, |c| template.category == c)
            && self
                .industry
                .as_deref()
                .map_or(true, |i| template.applies_to_industry(i))
            && self.recommended.map_or(true, |r| template.recommended == r)
    }

    pub fn apply(&self) -> Vec<&'static TemplateMetadata> {
        TEMPLATES.iter().filter(|t| self.matches(t)).collect()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_catalog_ids_are_unique() {
        assert!(!TEMPLATES.is_empty());
        let ids: HashSet<&str> = TEMPLATES.iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), TEMPLATES.len());
    }

    #[test]
    fn test_valid_id_returns_matching_template() {
        for template in TEMPLATES {
            assert_eq!(get_template_by_id(template.id).id, template.id);
        }
    }

    #[test]
    fn test_unknown_id_falls_back_to_first_entry() {
        assert_eq!(get_template_by_id("nope"), &TEMPLATES[0]);
        assert!(find_template("nope").is_none());
    }

    fn ids(filter: TemplateFilter) -> Vec<&'static str> {
        filter.apply().iter().map(|t| t.id).collect()
    }

    #[test]
    fn test_filter_by_category() {
        let technical = ids(TemplateFilter {
            category: Some(TemplateCategory::Technical),
            ..Default::default()
        });
        assert_eq!(technical, vec!["tech-developer"]);
    }

    #[test]
    fn test_filter_recommended() {
        let recommended = ids(TemplateFilter {
            recommended: Some(true),
            ..Default::default()
        });
        assert_eq!(recommended, vec!["modern-professional", "tech-developer"]);
    }

    #[test]
    fn test_industry_match_is_case_insensitive() {
        let finance = ids(TemplateFilter {
            industry: Some("finance".to_string()),
            ..Default::default()
        });
        assert!(finance.contains(&"classic-executive"));
        // templates without an industry list apply everywhere
        assert!(finance.contains(&"modern-professional"));
        assert!(finance.contains(&"minimal-clean"));
        assert!(!finance.contains(&"tech-developer"));
    }

    #[test]
    fn test_filter_combines_fields() {
        let filter = TemplateFilter {
            category: None,
            industry: Some("Technology".to_string()),
            recommended: Some(true),
        };
        assert_eq!(ids(filter), vec!["modern-professional", "tech-developer"]);
    }

    #[test]
    fn test_empty_filter_returns_whole_catalog() {
        assert_eq!(TemplateFilter::default().apply().len(), TEMPLATES.len());
    }

    #[test]
    fn test_blank_filter_values_are_unset() {
        let filter: TemplateFilter = serde_json::from_value(serde_json::json!({
            "category": "",
            "industry": " ",
            "recommended": ""
        }))
        .unwrap();
        assert_eq!(filter.apply().len(), TEMPLATES.len());
    }

    #[test]
    fn test_category_parses_case_insensitively() {
        assert_eq!("Academic".parse::<TemplateCategory>(), Ok(TemplateCategory::Academic));
        assert!("retro".parse::<TemplateCategory>().is_err());
    }

    #[test]
    fn test_category_serializes_lowercase() {
        let value = serde_json::to_value(TemplateCategory::Academic).unwrap();
        assert_eq!(value, "academic");
        let parsed: TemplateCategory = serde_json::from_str(r#""creative""#).unwrap();
        assert_eq!(parsed, TemplateCategory::Creative);
    }
}
