//! Submission pipeline and form reset.

use super::Controller;
use checklist_channels::split_message;
use checklist_core::{error::ChecklistError, traits::Courier};
use tracing::{debug, info, warn};

/// Outcome of a fully delivered submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitReport {
    pub messages: usize,
    pub chunks: usize,
    /// `false` when everything went out but the store could not be wiped.
    /// The form then keeps its values; sending again would duplicate the checklist.
    pub cleared: bool,
}

/// Deliver `text` in consecutive chunks of at most `max_chars` characters,
/// one at a time. Stops at the first failed acknowledgment.
pub async fn send_all_parts(
    courier: &dyn Courier,
    text: &str,
    max_chars: usize,
) -> Result<usize, ChecklistError> {
    let chunks = split_message(text, max_chars);
    let total = chunks.len();
    for (i, chunk) in chunks.into_iter().enumerate() {
        debug!(
            "[{}] sending part {}/{total} ({} chars)",
            courier.name(),
            i + 1,
            chunk.chars().count()
        );
        courier.deliver(chunk).await?;
    }
    Ok(total)
}

impl Controller {
    /// Build every language's message, deliver them in order, then reset.
    ///
    /// On a delivery error nothing is reset: the form and the store stay as
    /// they were, and a retry sends everything again. Once every part is
    /// delivered the call succeeds; a failed reset only shows up as
    /// `cleared: false` in the report.
    pub async fn submit(&mut self, courier: &dyn Courier) -> Result<SubmitReport, ChecklistError> {
        let messages = self.build_all();
        let mut chunks = 0;

        for (lang, text) in &messages {
            info!("[{}] sending {lang} checklist", courier.name());
            match send_all_parts(courier, text, self.session.max_chunk_chars).await {
                Ok(sent) => chunks += sent,
                Err(e) => {
                    warn!("[{}] {lang} checklist not delivered: {e}", courier.name());
                    return Err(e);
                }
            }
        }

        let cleared = match self.reset().await {
            Ok(()) => true,
            Err(e) => {
                warn!("checklist delivered but form not cleared: {e}");
                false
            }
        };

        let report = SubmitReport {
            messages: messages.len(),
            chunks,
            cleared,
        };
        info!(
            "checklist delivered: {} messages, {} parts",
            report.messages, report.chunks
        );
        Ok(report)
    }

    /// Wipe the local store, then empty every field.
    pub async fn reset(&mut self) -> Result<(), ChecklistError> {
        self.store.clear().await?;
        self.form.clear();
        Ok(())
    }
}
