//! Resolves a template + color scheme choice into the configuration a
//! renderer consumes.
//!
//! Unknown ids fall back to the catalog defaults; the `*_fallback` flags
//! report when that happened so callers can reject or surface it.

use serde::{Deserialize, Serialize};

use crate::models::lenient::null_as_default;
use crate::templates::catalog::{default_template, find_template, TemplateMetadata};
use crate::templates::colors::{
    apply_color_scheme, default_color_scheme, find_color_scheme, AppliedColors, ColorScheme,
};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomizationRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub template_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub color_scheme_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedCustomization {
    pub template: &'static TemplateMetadata,
    pub color_scheme: &'static ColorScheme,
    pub colors: AppliedColors,
    pub template_fallback: bool,
    pub color_scheme_fallback: bool,
}

impl ResolvedCustomization {
    pub fn used_fallback(&self) -> bool {
        self.template_fallback || self.color_scheme_fallback
    }
}

pub fn resolve_customization(request: &CustomizationRequest) -> ResolvedCustomization {
    let template = find_template(&request.template_id);
    let color_scheme = find_color_scheme(&request.color_scheme_id);
    let resolved_scheme = color_scheme.unwrap_or_else(default_color_scheme);

    ResolvedCustomization {
        template: template.unwrap_or_else(default_template),
        color_scheme: resolved_scheme,
        colors: apply_color_scheme(resolved_scheme),
        template_fallback: template.is_none(),
        color_scheme_fallback: color_scheme.is_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(template_id: &str, color_scheme_id: &str) -> CustomizationRequest {
        CustomizationRequest {
            template_id: template_id.to_string(),
            color_scheme_id: color_scheme_id.to_string(),
        }
    }

    #[test]
    fn test_known_ids_resolve_without_fallback() {
        let resolved = resolve_customization(&request("tech-developer", "modern-teal"));
        assert_eq!(resolved.template.id, "tech-developer");
        assert_eq!(resolved.color_scheme.id, "modern-teal");
        assert_eq!(resolved.colors, apply_color_scheme(resolved.color_scheme));
        assert!(!resolved.used_fallback());
    }

    #[test]
    fn test_unknown_template_is_flagged() {
        let resolved = resolve_customization(&request("retro-90s", "modern-teal"));
        assert_eq!(resolved.template, default_template());
        assert!(resolved.template_fallback);
        assert!(!resolved.color_scheme_fallback);
        assert!(resolved.used_fallback());
    }

    #[test]
    fn test_requesting_default_ids_is_not_a_fallback() {
        let resolved = resolve_customization(&request(
            default_template().id,
            default_color_scheme().id,
        ));
        assert!(!resolved.used_fallback());
    }

    #[test]
    fn test_empty_request_falls_back_on_both() {
        let resolved = resolve_customization(&CustomizationRequest::default());
        assert_eq!(resolved.template, default_template());
        assert_eq!(resolved.color_scheme, default_color_scheme());
        assert!(resolved.template_fallback && resolved.color_scheme_fallback);
    }

    #[test]
    fn test_serializes_camel_case_flags() {
        let value = serde_json::to_value(resolve_customization(&request("minimal-clean", "x")))
            .unwrap();
        assert_eq!(value["templateFallback"], false);
        assert_eq!(value["colorSchemeFallback"], true);
        assert_eq!(value["colorScheme"]["id"], "professional-blue");
        assert_eq!(value["template"]["id"], "minimal-clean");
    }
}
