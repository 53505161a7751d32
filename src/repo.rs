use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::clock::DayWindow;
use crate::error::AppResult;
use crate::models::check_in::{CheckIn, CheckInPatch};

/// Persistence contract for check-ins. Keyed by the day window, one row per
/// calendar day; identity comes from the upsert itself, not a separate
/// existence check.
#[async_trait]
pub trait CheckInRepository: Send + Sync {
    /// Create-or-update the row for `window.day` in one atomic statement.
    /// Patch fields set to `None` keep their stored value; `suggestions` is
    /// written verbatim whenever the patch carries one, `[]` included.
    async fn upsert_day(&self, window: &DayWindow, patch: CheckInPatch) -> AppResult<CheckIn>;

    async fn find_day(&self, window: &DayWindow) -> AppResult<Option<CheckIn>>;

    /// Rows with `start.day <= day <= end.day`, newest first.
    async fn find_range(&self, start: &DayWindow, end: &DayWindow) -> AppResult<Vec<CheckIn>>;
}

pub struct PgCheckInRepository {
    db: PgPool,
}

impl PgCheckInRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CheckInRepository for PgCheckInRepository {
    async fn upsert_day(&self, window: &DayWindow, patch: CheckInPatch) -> AppResult<CheckIn> {
        let check_in = sqlx::query_as::<_, CheckIn>(
            r#"
            INSERT INTO check_ins (id, day, mood, energy_level, daily_note, suggestions)
            VALUES ($1, $2, $3, $4, COALESCE($5, ''), COALESCE($6, '{}'))
            ON CONFLICT (day) DO UPDATE SET
                mood = COALESCE($3, check_ins.mood),
                energy_level = COALESCE($4, check_ins.energy_level),
                daily_note = COALESCE($5, check_ins.daily_note),
                suggestions = COALESCE($6, check_ins.suggestions),
                updated_at = NOW()
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(window.day)
        .bind(patch.mood)
        .bind(patch.energy_level)
        .bind(&patch.daily_note)
        .bind(&patch.suggestions)
        .fetch_one(&self.db)
        .await?;

        Ok(check_in)
    }

    async fn find_day(&self, window: &DayWindow) -> AppResult<Option<CheckIn>> {
        let check_in = sqlx::query_as::<_, CheckIn>("SELECT * FROM check_ins WHERE day = $1")
            .bind(window.day)
            .fetch_optional(&self.db)
            .await?;

        Ok(check_in)
    }

    async fn find_range(&self, start: &DayWindow, end: &DayWindow) -> AppResult<Vec<CheckIn>> {
        let check_ins = sqlx::query_as::<_, CheckIn>(
            r#"
            SELECT * FROM check_ins
            WHERE day BETWEEN $1 AND $2
            ORDER BY day DESC
            "#,
        )
        .bind(start.day)
        .bind(end.day)
        .fetch_all(&self.db)
        .await?;

        Ok(check_ins)
    }
}
