pub mod prompt;
pub mod similarity;
pub mod vector;
pub mod volunteer;

mod error;

pub use error::{Error, Result};
pub use similarity::{MatchScore, cosine_similarity, similarity};
pub use vector::TextVector;
pub use volunteer::{EventListing, TaskSuggestion, VolunteerProfile};
