//! Axum route handlers for the Visa API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::catalog::{CountryRequirement, RequirementCategory};
use crate::errors::AppError;
use crate::scoring::engine::VisaScorer;
use crate::scoring::models::{lenient_or_default, Profile, ScoreResult};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRequest {
    pub country_id: String,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub profile: Profile,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountrySummary {
    pub id: String,
    pub flag: String,
    pub visa_type: String,
    pub processing_time: String,
    pub success_rate: u8,
    pub requirements: Vec<RequirementSummary>,
}

#[derive(Debug, Serialize)]
pub struct RequirementSummary {
    pub id: String,
    pub label: String,
    pub category: RequirementCategory,
    pub weight: u8,
}

impl From<&CountryRequirement> for RequirementSummary {
    fn from(req: &CountryRequirement) -> Self {
        Self {
            id: req.id.clone(),
            label: req.label.clone(),
            category: req.category,
            weight: req.weight,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CountriesResponse {
    pub countries: Vec<CountrySummary>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/visa/countries
pub async fn handle_list_countries(State(state): State<AppState>) -> Json<CountriesResponse> {
    let countries = state
        .catalog
        .visa
        .countries
        .iter()
        .map(|c| CountrySummary {
            id: c.id.clone(),
            flag: c.flag.clone(),
            visa_type: c.visa_type.clone(),
            processing_time: c.processing_time.clone(),
            success_rate: c.success_rate,
            requirements: c.requirements.iter().map(RequirementSummary::from).collect(),
        })
        .collect();

    Json(CountriesResponse { countries })
}

/// POST /api/v1/visa/score
///
/// Scores a self-reported profile against one destination. Pure computation,
/// no collaborators involved.
pub async fn handle_score(
    State(state): State<AppState>,
    Json(request): Json<ScoreRequest>,
) -> Result<Json<ScoreResult>, AppError> {
    if request.country_id.trim().is_empty() {
        return Err(AppError::Validation("countryId cannot be empty".to_string()));
    }

    let result = VisaScorer::new(&state.catalog.visa).score(&request.profile, &request.country_id)?;

    info!(
        "Visa score for {}: {} ({:?})",
        result.country, result.score, result.competitive_level
    );

    Ok(Json(result))
}
