pub mod language;
pub mod response;

pub use language::Language;
pub use response::{CanonicalResponse, StudyPlanItem};
