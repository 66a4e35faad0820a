//! Calendar month arithmetic and run-outcome computation.
//!
//! Pure helpers shared by the pipeline and the storage layer: month naming,
//! the deterministic artifact key, the start-month rule, and the mapping
//! from per-month success counts to a terminal outcome.

use crate::error::CoreError;
use crate::types::DbId;

/// A calendar always has twelve months.
pub const MONTHS_PER_CALENDAR: u32 = 12;

/// Lowercase month names used in artifact storage keys, January first.
pub const MONTH_NAMES: [&str; MONTHS_PER_CALENDAR as usize] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Terminal outcome of a full calendar run, computed from how many months
/// ended up with a stored artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// All twelve months have an artifact.
    Completed,
    /// At least one month succeeded, at least one failed.
    Partial,
    /// No month produced an artifact.
    Failed,
}

/// Validate that a month index is within `1..=12`.
pub fn validate_month(month: u32) -> Result<(), CoreError> {
    if (1..=MONTHS_PER_CALENDAR).contains(&month) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Month must be between 1 and {MONTHS_PER_CALENDAR}, got {month}"
        )))
    }
}

/// Lowercase name for a month index.
///
/// Callers must pass a validated month; an out-of-range index is a
/// programmer error and panics via the slice bound.
pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES[(month - 1) as usize]
}

/// Deterministic storage key for one month's image.
///
/// Stable across retries so re-storing the same month overwrites instead of
/// accumulating duplicates.
pub fn artifact_key(generation_id: DbId, month: u32) -> String {
    format!("calendar_{generation_id}_{}.png", month_name(month))
}

/// First month the full run needs to generate.
///
/// When the preview already produced month 1, the paid run starts at month 2
/// rather than regenerating it.
pub fn start_month(has_preview_artifact: bool) -> u32 {
    if has_preview_artifact {
        2
    } else {
        1
    }
}

/// Join per-dog descriptions into the prompt form.
pub fn join_descriptions(descriptions: &[String]) -> String {
    descriptions.join(" and ")
}

/// Map a final artifact count to the terminal outcome.
///
/// `Completed` iff all twelve months have an artifact, `Failed` iff none do,
/// `Partial` otherwise.
pub fn final_outcome(success_count: u32) -> RunOutcome {
    if success_count >= MONTHS_PER_CALENDAR {
        RunOutcome::Completed
    } else if success_count == 0 {
        RunOutcome::Failed
    } else {
        RunOutcome::Partial
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
