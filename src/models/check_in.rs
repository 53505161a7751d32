use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// One wellbeing entry per calendar day. Wire JSON is camelCase to match
/// the mobile client's contract.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CheckIn {
    pub id: Uuid,
    pub day: NaiveDate,
    pub mood: Option<Mood>,
    pub energy_level: Option<i32>,
    pub daily_note: String,
    pub suggestions: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq)]
#[sqlx(type_name = "mood", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Amazing,
    Happy,
    Neutral,
    Down,
    Stressed,
}

impl Mood {
    /// Lowercase wire form, used when embedding the mood in a prompt.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Amazing => "amazing",
            Mood::Happy => "happy",
            Mood::Neutral => "neutral",
            Mood::Down => "down",
            Mood::Stressed => "stressed",
        }
    }
}

/// POST /api/check-in. No field is individually required; an absent field
/// means "leave unchanged".
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpsertCheckInRequest {
    pub mood: Option<Mood>,

    #[validate(range(min = 1, max = 10, message = "energyLevel must be between 1 and 10"))]
    pub energy_level: Option<i32>,

    #[validate(length(max = 500, message = "dailyNote must be at most 500 characters"))]
    pub daily_note: Option<String>,
}

/// GET /api/check-in query params. Both are required by the handler; they
/// are optional here so a missing one reports 400 rather than a rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRangeQuery {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// Field subset handed to the repository's upsert. `None` means "keep the
/// stored value". `suggestions` is the one field the service sets
/// explicitly: `Some(vec![])` clears, `None` preserves.
#[derive(Debug, Clone, Default)]
pub struct CheckInPatch {
    pub mood: Option<Mood>,
    pub energy_level: Option<i32>,
    pub daily_note: Option<String>,
    pub suggestions: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct SaveCheckInResponse {
    pub success: bool,
    pub message: String,
    pub data: CheckIn,
}

#[derive(Debug, Serialize)]
pub struct CheckInResponse {
    pub success: bool,
    pub data: CheckIn,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInListResponse {
    pub success: bool,
    pub check_ins: Vec<CheckIn>,
    pub total: usize,
}
