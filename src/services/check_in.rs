use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;

use crate::clock;
use crate::error::{AppError, AppResult};
use crate::models::check_in::{CheckIn, CheckInPatch, UpsertCheckInRequest};
use crate::repo::CheckInRepository;
use crate::suggestions::SuggestionSource;

/// Orchestrates the daily check-in flow: day bucketing, optional enrichment,
/// persistence. Holds only immutable collaborators, shared across handlers.
pub struct CheckInService {
    repo: Arc<dyn CheckInRepository>,
    suggester: Arc<dyn SuggestionSource>,
    tz: Tz,
}

impl CheckInService {
    pub fn new(repo: Arc<dyn CheckInRepository>, suggester: Arc<dyn SuggestionSource>, tz: Tz) -> Self {
        Self { repo, suggester, tz }
    }

    /// Idempotent per calendar day: the first call creates today's row, every
    /// later call updates it in place. Enrichment runs only when the request
    /// carries both mood and energy; its failure never fails the save.
    pub async fn create_or_update(&self, input: UpsertCheckInRequest) -> AppResult<CheckIn> {
        let window = clock::window_for(Utc::now(), self.tz);

        let suggestions = match (input.mood, input.energy_level) {
            (Some(mood), Some(energy_level)) => {
                match self.suggester.suggest(mood, energy_level).await {
                    Ok(suggestions) => Some(suggestions),
                    Err(e) => {
                        tracing::warn!(error = %e, "Suggestion provider failed, saving without suggestions");
                        Some(Vec::new())
                    }
                }
            }
            // Note-only update: omit the field so the stored value survives.
            _ => None,
        };

        self.repo
            .upsert_day(
                &window,
                CheckInPatch {
                    mood: input.mood,
                    energy_level: input.energy_level,
                    daily_note: input.daily_note,
                    suggestions,
                },
            )
            .await
    }

    pub async fn get_today(&self) -> AppResult<Option<CheckIn>> {
        let window = clock::window_for(Utc::now(), self.tz);
        self.repo.find_day(&window).await
    }

    /// Entries with `start_date <= day <= end_date`, newest first. Both ends
    /// are widened through the same boundary math used for day bucketing.
    pub async fn list_by_range(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> AppResult<Vec<CheckIn>> {
        if start_date > end_date {
            return Err(AppError::Validation(
                "Start date cannot be later than end date".into(),
            ));
        }

        let start = clock::window_for_date(start_date, self.tz);
        let end = clock::window_for_date(end_date, self.tz);
        self.repo.find_range(&start, &end).await
    }
}
