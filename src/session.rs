use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use tracing::{debug, info, instrument};

use crate::matches::{
    InMemoryMatchRepository, MatchDraft, MatchRecord, MatchRepository, MatchSubmission,
    ValidationError,
};
use crate::stats::Leaderboard;

/// Which surface the tracker is currently showing
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum View {
    #[default]
    Form,
    History,
    Stats,
}

/// State of one signed-in tracker session.
///
/// Owns the match store; records are dropped with the session.
pub struct TrackerSession {
    matches: Box<dyn MatchRepository>,
    view: View,
    draft: MatchDraft,
}

impl Default for TrackerSession {
    fn default() -> Self {
        Self::new()
    }
}

impl TrackerSession {
    pub fn new() -> Self {
        Self::with_repository(Box::new(InMemoryMatchRepository::new()))
    }

    pub fn with_repository(matches: Box<dyn MatchRepository>) -> Self {
        Self {
            matches,
            view: View::default(),
            draft: MatchDraft::new(),
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn set_view(&mut self, view: View) {
        debug!(from = %self.view, to = %view, "Switching view");
        self.view = view;
    }

    pub fn draft(&self) -> &MatchDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut MatchDraft {
        &mut self.draft
    }

    /// Records a match and moves to the history view. On a validation error
    /// nothing changes and the error is handed back for the form to display.
    #[instrument(skip(self, submission))]
    pub fn submit(&mut self, submission: &MatchSubmission) -> Result<MatchRecord, ValidationError> {
        let record = self.matches.append(submission)?;
        self.set_view(View::History);
        Ok(record)
    }

    /// Submits the current draft and clears the form on success
    pub fn submit_draft(&mut self) -> Result<MatchRecord, ValidationError> {
        let submission = self.draft.to_submission();
        let record = self.submit(&submission)?;
        self.draft.reset();
        info!(match_id = %record.id, "Draft submitted");
        Ok(record)
    }

    /// Chronological match history, oldest first
    pub fn history(&self) -> &[MatchRecord] {
        self.matches.all_records()
    }

    pub fn leaderboard(&self) -> Leaderboard {
        Leaderboard::from_records(self.matches.all_records())
    }
}
