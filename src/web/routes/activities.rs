use std::collections::BTreeMap;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::Activity;
use crate::services::{activities_service, signup_service};
use crate::web::error::ApiError;
use crate::web::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SignupQuery {
    pub email: Option<String>,
}

impl SignupQuery {
    fn require_email(self) -> Result<String, ApiError> {
        self.email
            .ok_or_else(|| ApiError::Validation("Missing required query parameter: email".into()))
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

pub async fn activities_handler(State(state): State<AppState>) -> Json<BTreeMap<String, Activity>> {
    Json(activities_service::load_activities(&state.store).await)
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<SignupQuery>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, ApiError> {
    let email = query.require_email()?;
    match signup_service::signup(&state.store, &activity_name, &email).await {
        Ok(message) => Ok(Json(MessageResponse { message })),
        Err(e) => {
            warn!("Signup for {} rejected ({}): {}", activity_name, email, e);
            Err(e.into())
        }
    }
}

pub async fn unregister_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<SignupQuery>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, ApiError> {
    let email = query.require_email()?;
    match signup_service::unregister(&state.store, &activity_name, &email).await {
        Ok(message) => Ok(Json(MessageResponse { message })),
        Err(e) => {
            warn!("Unregister from {} rejected ({}): {}", activity_name, email, e);
            Err(e.into())
        }
    }
}
