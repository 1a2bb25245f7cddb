pub mod draft;
mod errors;
pub mod models;
pub mod repository;
pub mod submission;

pub use draft::MatchDraft;
pub use errors::ValidationError;
pub use models::*;
pub use repository::{InMemoryMatchRepository, MatchRepository};
pub use submission::{MatchSubmission, PlayerSubmission, TeamSubmission};
