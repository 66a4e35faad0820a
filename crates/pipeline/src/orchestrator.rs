//! The generation orchestrator: preview and full-run state machines.
//!
//! The preview phase is synchronous and interactive — its caller gets the
//! result or the error. The full run is a detached background task observable
//! only through the generation's status; within one run the twelve months
//! are strictly serialized with fixed waits, which is the simplest construct
//! that provably stays under the image service's rate ceiling.

use std::sync::Arc;

use pawprints_core::calendar::{
    final_outcome, join_descriptions, start_month, RunOutcome, MONTHS_PER_CALENDAR,
};
use pawprints_core::prompts::render_month;
use pawprints_core::types::DbId;
use pawprints_db::models::generation::Generation;
use pawprints_db::models::status::GenerationStatus;

use crate::config::PipelineConfig;
use crate::describer::resolve_descriptions;
use crate::error::PipelineError;
use crate::ports::{
    CompletionNotifier, GenerationStore, ImageSynthesizer, MonthArtifactStore, SubjectDescriber,
};

/// Result of a successful preview phase.
#[derive(Debug, Clone)]
pub struct PreviewOutcome {
    pub generation_id: DbId,
    /// Public URL of the month-1 image.
    pub image_url: String,
}

/// Summary of a finished full run.
#[derive(Debug, Clone)]
pub struct FullRunReport {
    pub generation_id: DbId,
    /// Months with a stored artifact, preview month included.
    pub months_succeeded: u32,
    /// Months whose retry was also exhausted this run.
    pub failed_months: Vec<u32>,
    /// Terminal status written to the generation.
    pub status: GenerationStatus,
}

/// Drives one calendar generation through its lifecycle.
///
/// All collaborators are injected; the orchestrator owns only the sequencing,
/// retry, and pacing policy.
pub struct Orchestrator {
    store: Arc<dyn GenerationStore>,
    describer: Arc<dyn SubjectDescriber>,
    synthesizer: Arc<dyn ImageSynthesizer>,
    artifacts: Arc<dyn MonthArtifactStore>,
    notifier: Arc<dyn CompletionNotifier>,
    config: PipelineConfig,
}

impl Orchestrator {
    /// Create an orchestrator from its collaborators.
    pub fn new(
        store: Arc<dyn GenerationStore>,
        describer: Arc<dyn SubjectDescriber>,
        synthesizer: Arc<dyn ImageSynthesizer>,
        artifacts: Arc<dyn MonthArtifactStore>,
        notifier: Arc<dyn CompletionNotifier>,
        config: PipelineConfig,
    ) -> Self {
        Self {
            store,
            describer,
            synthesizer,
            artifacts,
            notifier,
            config,
        }
    }

    // -----------------------------------------------------------------------
    // Preview phase
    // -----------------------------------------------------------------------

    /// Run the preview phase: resolve descriptions (once), generate and store
    /// month 1, and move the generation to `awaiting_purchase`.
    ///
    /// Any failure leaves the generation in its prior state; the status is
    /// only promoted after the artifact is stored. Re-running a preview
    /// reuses the cached descriptions and overwrites the month-1 artifact.
    pub async fn run_preview(&self, generation_id: DbId) -> Result<PreviewOutcome, PipelineError> {
        let generation = self.load(generation_id).await?;
        ensure_runnable(&generation, "Preview")?;

        let descriptions = self.ensure_descriptions(&generation).await?;
        let joined = join_descriptions(&descriptions);
        let prompt = render_month(1, descriptions.len() > 1, &generation.artist_style, &joined)?;

        let bytes = self.synthesizer.synthesize(&prompt).await?;
        let image_url = self.artifacts.store_month(generation_id, 1, bytes).await?;

        self.store
            .set_status(generation_id, GenerationStatus::AwaitingPurchase)
            .await?;

        tracing::info!(generation_id, image_url = %image_url, "Preview month generated");
        Ok(PreviewOutcome {
            generation_id,
            image_url,
        })
    }

    // -----------------------------------------------------------------------
    // Full-run phase
    // -----------------------------------------------------------------------

    /// Start the full run as a detached background task.
    ///
    /// The handle is returned so a caller may await the run (tests do); the
    /// HTTP layer drops it and lets the task outlive the request.
    pub fn spawn_full_run(
        self: Arc<Self>,
        generation_id: DbId,
    ) -> tokio::task::JoinHandle<Result<FullRunReport, PipelineError>> {
        let orchestrator = self;
        tokio::spawn(async move {
            let result = orchestrator.run_full(generation_id).await;
            match &result {
                Ok(report) => tracing::info!(
                    generation_id,
                    months_succeeded = report.months_succeeded,
                    status = report.status.as_str(),
                    "Full run finished",
                ),
                Err(e) => tracing::error!(generation_id, error = %e, "Full run aborted"),
            }
            result
        })
    }

    /// Run the remaining months sequentially with pacing and retry, then
    /// write the terminal status and (best-effort) notify the owner.
    pub async fn run_full(&self, generation_id: DbId) -> Result<FullRunReport, PipelineError> {
        let generation = self.load(generation_id).await?;
        ensure_runnable(&generation, "Full run")?;

        // Visible to polling clients before the first synthesis call.
        self.store
            .set_status(generation_id, GenerationStatus::ProcessingFull)
            .await?;

        let descriptions = self.ensure_descriptions(&generation).await?;
        let joined = join_descriptions(&descriptions);
        let multi_dog = descriptions.len() > 1;

        let first = start_month(self.store.month_exists(generation_id, 1).await?);
        let mut failed_months = Vec::new();

        for month in first..=MONTHS_PER_CALENDAR {
            let prompt = render_month(month, multi_dog, &generation.artist_style, &joined)?;

            match self.attempt_month(generation_id, month, &prompt).await {
                Ok(image_url) => {
                    tracing::info!(generation_id, month, image_url = %image_url, "Month generated");
                }
                Err(e) => {
                    tracing::error!(generation_id, month, error = %e, "Month failed after retry");
                    failed_months.push(month);
                }
            }

            // Pacing applies on success and failure alike; skipping it after
            // an error could burst past the image service's rate limit.
            if month < MONTHS_PER_CALENDAR {
                tokio::time::sleep(self.config.month_pacing).await;
            }
        }

        let months_succeeded = self.store.month_count(generation_id).await?;
        let status = terminal_status(final_outcome(months_succeeded));
        self.store.finalize(generation_id, status).await?;

        if months_succeeded > 0 {
            if let Err(e) = self
                .notifier
                .deliver(
                    &generation.owner_email,
                    &generation.title,
                    status.as_str(),
                    months_succeeded,
                )
                .await
            {
                // The run itself already finished; notification is best-effort.
                tracing::warn!(generation_id, error = %e, "Completion notification failed");
            }
        }

        Ok(FullRunReport {
            generation_id,
            months_succeeded,
            failed_months,
            status,
        })
    }

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    async fn load(&self, generation_id: DbId) -> Result<Generation, PipelineError> {
        self.store
            .load(generation_id)
            .await?
            .ok_or(PipelineError::NotFound(generation_id))
    }

    /// Return the cached descriptions, resolving and persisting them first
    /// if this generation has never been described.
    ///
    /// The persistence layer rejects a second write, so descriptions are
    /// resolved exactly once per generation even across repeated previews.
    async fn ensure_descriptions(
        &self,
        generation: &Generation,
    ) -> Result<Vec<String>, PipelineError> {
        if let Some(cached) = generation.descriptions() {
            return Ok(cached.to_vec());
        }

        let resolved =
            resolve_descriptions(self.describer.as_ref(), &generation.photo_urls.0).await?;

        let wrote = self
            .store
            .cache_descriptions(generation.id, &resolved)
            .await?;
        if !wrote {
            // A concurrent resolution won the write; use its cached values.
            if let Some(generation) = self.store.load(generation.id).await? {
                if let Some(cached) = generation.descriptions() {
                    return Ok(cached.to_vec());
                }
            }
        }
        Ok(resolved)
    }

    /// Generate and store one month, retrying exactly once after a cooldown.
    async fn attempt_month(
        &self,
        generation_id: DbId,
        month: u32,
        prompt: &str,
    ) -> Result<String, PipelineError> {
        match self.try_month(generation_id, month, prompt).await {
            Ok(url) => Ok(url),
            Err(first) => {
                tracing::warn!(
                    generation_id,
                    month,
                    error = %first,
                    cooldown_secs = self.config.retry_cooldown.as_secs(),
                    "Month attempt failed, retrying once",
                );
                tokio::time::sleep(self.config.retry_cooldown).await;
                self.try_month(generation_id, month, prompt).await
            }
        }
    }

    /// One synthesis + store attempt for one month.
    async fn try_month(
        &self,
        generation_id: DbId,
        month: u32,
        prompt: &str,
    ) -> Result<String, PipelineError> {
        let bytes = self.synthesizer.synthesize(prompt).await?;
        let url = self.artifacts.store_month(generation_id, month, bytes).await?;
        Ok(url)
    }
}

/// Reject phases that cannot run from the generation's current state.
fn ensure_runnable(generation: &Generation, phase: &str) -> Result<(), PipelineError> {
    match generation.status() {
        Some(GenerationStatus::ProcessingFull) => Err(PipelineError::InvalidState(format!(
            "{phase} cannot start while a full run is in progress"
        ))),
        Some(status) if status.is_terminal() => Err(PipelineError::InvalidState(format!(
            "{phase} cannot start on a {} generation",
            status.as_str()
        ))),
        _ => Ok(()),
    }
}

/// Map a run outcome to the status written to the generation record.
fn terminal_status(outcome: RunOutcome) -> GenerationStatus {
    match outcome {
        RunOutcome::Completed => GenerationStatus::Completed,
        RunOutcome::Partial => GenerationStatus::Partial,
        RunOutcome::Failed => GenerationStatus::Failed,
    }
}
