//! Form snapshot persistence.

use super::Controller;
use checklist_core::{error::ChecklistError, form::Snapshot};
use tracing::{debug, warn};

impl Controller {
    /// Write every field value as one JSON object under the session key.
    pub async fn save(&self) -> Result<(), ChecklistError> {
        let snapshot = self.form.snapshot();
        let blob = serde_json::to_string(&snapshot)?;
        self.store.set(&self.session.storage_key, &blob).await?;
        debug!("saved {} fields", snapshot.len());
        Ok(())
    }

    /// Best-effort restore of the stored snapshot. Returns the number of
    /// fields set; a missing or broken record restores nothing.
    pub async fn restore(&mut self) -> usize {
        let blob = match self.store.get(&self.session.storage_key).await {
            Ok(Some(blob)) => blob,
            Ok(None) => return 0,
            Err(e) => {
                warn!("restore skipped, store unreadable: {e}");
                return 0;
            }
        };

        match serde_json::from_str::<Snapshot>(&blob) {
            Ok(snapshot) => self.form.apply_snapshot(&snapshot),
            Err(e) => {
                warn!("restore skipped, stored form is malformed: {e}");
                0
            }
        }
    }
}
