//! Description resolution across all uploaded photos.
//!
//! One vision call per photo, in upload order. A single bad photo must not
//! block the rest of the run, so each failure substitutes a fixed fallback
//! phrase; the call as a whole only fails when not one photo could be
//! described.

use crate::error::PipelineError;
use crate::ports::SubjectDescriber;

/// Stand-in description when a photo cannot be analysed.
pub const FALLBACK_DESCRIPTION: &str = "a dog with distinctive features";

/// Resolve one description per photo, same order as the input.
///
/// Returns `Err(DescriptionFailed)` only when every photo failed — with zero
/// real descriptions there is nothing worth generating from.
pub async fn resolve_descriptions(
    describer: &dyn SubjectDescriber,
    photo_urls: &[String],
) -> Result<Vec<String>, PipelineError> {
    let mut descriptions = Vec::with_capacity(photo_urls.len());
    let mut successes = 0usize;

    for photo_url in photo_urls {
        match describer.describe(photo_url).await {
            Ok(description) => {
                tracing::debug!(photo_url, description = %description, "Photo described");
                successes += 1;
                descriptions.push(description);
            }
            Err(e) => {
                tracing::warn!(photo_url, error = %e, "Photo description failed, using fallback");
                descriptions.push(FALLBACK_DESCRIPTION.to_string());
            }
        }
    }

    if successes == 0 {
        return Err(PipelineError::DescriptionFailed);
    }
    Ok(descriptions)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
