//! Axum route handlers for the template & color registry.

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use serde::Serialize;
use tracing::{debug, warn};

use crate::errors::AppError;
use crate::state::AppState;
use crate::templates::catalog::{
    find_template, get_template_by_id, TemplateFilter, TemplateMetadata,
};
use crate::templates::colors::{
    apply_color_scheme, find_color_scheme, get_color_scheme, AppliedColors, ColorScheme,
    COLOR_SCHEMES,
};
use crate::templates::customization::{
    resolve_customization, CustomizationRequest, ResolvedCustomization,
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorSchemeResponse {
    pub scheme: &'static ColorScheme,
    pub colors: AppliedColors,
}

/// Applies the configured lookup policy to a catalog lookup result.
///
/// Strict: blank ids are a validation error and unknown ids are 404.
/// Lenient: unknown ids resolve through `fallback` and a warning is logged.
fn resolve_lookup<T>(
    kind: &str,
    id: &str,
    found: Option<T>,
    fallback: impl FnOnce() -> T,
    strict: bool,
) -> Result<T, AppError> {
    if strict && id.trim().is_empty() {
        return Err(AppError::Validation(format!("{kind} id cannot be empty")));
    }
    match found {
        Some(entry) => Ok(entry),
        None if strict => Err(AppError::NotFound(format!("{kind} '{id}' not found"))),
        None => {
            warn!(kind, id, "Unknown catalog id, using default entry");
            Ok(fallback())
        }
    }
}

/// GET /api/v1/templates
pub async fn handle_list_templates(
    query: Result<Query<TemplateFilter>, QueryRejection>,
) -> Result<Json<Vec<&'static TemplateMetadata>>, AppError> {
    let Query(filter) = query.map_err(|e| AppError::Validation(e.body_text()))?;
    debug!(?filter, "Listing templates");
    Ok(Json(filter.apply()))
}

/// GET /api/v1/templates/:id
pub async fn handle_get_template(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<&'static TemplateMetadata>, AppError> {
    let template = resolve_lookup(
        "Template",
        &id,
        find_template(&id),
        || get_template_by_id(&id),
        state.config.strict_catalog_lookups,
    )?;
    Ok(Json(template))
}

/// GET /api/v1/color-schemes
pub async fn handle_list_color_schemes() -> Json<&'static [ColorScheme]> {
    Json(COLOR_SCHEMES)
}

/// GET /api/v1/color-schemes/:id
pub async fn handle_get_color_scheme(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ColorSchemeResponse>, AppError> {
    let scheme = resolve_lookup(
        "Color scheme",
        &id,
        find_color_scheme(&id),
        || get_color_scheme(&id),
        state.config.strict_catalog_lookups,
    )?;
    Ok(Json(ColorSchemeResponse {
        scheme,
        colors: apply_color_scheme(scheme),
    }))
}

/// POST /api/v1/templates/customize
pub async fn handle_customize(
    State(state): State<AppState>,
    Json(request): Json<CustomizationRequest>,
) -> Result<Json<ResolvedCustomization>, AppError> {
    let resolved = resolve_customization(&request);
    let strict = state.config.strict_catalog_lookups;

    // Strict mode rejects unknown ids; lenient mode only logs them.
    resolve_lookup(
        "Template",
        &request.template_id,
        find_template(&request.template_id),
        || resolved.template,
        strict,
    )?;
    resolve_lookup(
        "Color scheme",
        &request.color_scheme_id,
        find_color_scheme(&request.color_scheme_id),
        || resolved.color_scheme,
        strict,
    )?;

    debug!(
        template = resolved.template.id,
        color_scheme = resolved.color_scheme.id,
        fallback = resolved.used_fallback(),
        "Resolved template customization"
    );
    Ok(Json(resolved))
}
