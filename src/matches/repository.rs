use tracing::{debug, info, instrument, warn};

use super::{MatchRecord, MatchSubmission, ValidationError};

/// Append-only store of the session's match records.
///
/// Writes go through `&mut self`, so only the owner of the store (the session)
/// can add records; everyone else gets a shared slice.
pub trait MatchRepository {
    /// Validates the submission and appends the resulting record.
    /// On error the stored sequence is left untouched.
    fn append(&mut self, submission: &MatchSubmission) -> Result<MatchRecord, ValidationError>;

    /// All records in insertion order
    fn all_records(&self) -> &[MatchRecord];

    fn len(&self) -> usize {
        self.all_records().len()
    }

    fn is_empty(&self) -> bool {
        self.all_records().is_empty()
    }
}

/// In-memory implementation, lives as long as the session that owns it
#[derive(Debug, Default)]
pub struct InMemoryMatchRepository {
    records: Vec<MatchRecord>,
}

impl InMemoryMatchRepository {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl MatchRepository for InMemoryMatchRepository {
    #[instrument(skip(self, submission))]
    fn append(&mut self, submission: &MatchSubmission) -> Result<MatchRecord, ValidationError> {
        debug!(date = %submission.date, winner = %submission.winner, "Validating match submission");

        let record = submission.validate().inspect_err(|err| {
            warn!(%err, "Rejected match submission");
        })?;

        self.records.push(record.clone());

        info!(
            match_id = %record.id,
            winner = %record.winner_label(),
            total_matches = self.records.len(),
            "Match recorded"
        );
        Ok(record)
    }

    fn all_records(&self) -> &[MatchRecord] {
        &self.records
    }
}
