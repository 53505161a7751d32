use axum::{
    extract::{Query, State},
    Json,
};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::models::check_in::{
    CheckInListResponse, CheckInResponse, DateRangeQuery, SaveCheckInResponse,
    UpsertCheckInRequest,
};
use crate::AppState;

pub async fn create_or_update(
    State(state): State<AppState>,
    Json(body): Json<UpsertCheckInRequest>,
) -> AppResult<Json<SaveCheckInResponse>> {
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let check_in = state.service.create_or_update(body).await?;

    Ok(Json(SaveCheckInResponse {
        success: true,
        message: "Check-in saved successfully".into(),
        data: check_in,
    }))
}

pub async fn get_today(State(state): State<AppState>) -> AppResult<Json<CheckInResponse>> {
    let check_in = state
        .service
        .get_today()
        .await?
        .ok_or_else(|| AppError::NotFound("No check-in found for today".into()))?;

    Ok(Json(CheckInResponse {
        success: true,
        data: check_in,
    }))
}

pub async fn list_by_range(
    State(state): State<AppState>,
    Query(query): Query<DateRangeQuery>,
) -> AppResult<Json<CheckInListResponse>> {
    let (Some(start_date), Some(end_date)) = (query.start_date, query.end_date) else {
        return Err(AppError::Validation(
            "Both startDate and endDate query parameters are required".into(),
        ));
    };

    let check_ins = state.service.list_by_range(start_date, end_date).await?;

    Ok(Json(CheckInListResponse {
        success: true,
        total: check_ins.len(),
        check_ins,
    }))
}
