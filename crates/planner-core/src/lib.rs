//! Core domain for the monthly content planner.
//!
//! Everything here is synchronous, pure, and free of I/O apart from reading
//! and writing the presets file. The HTTP-facing crates (`gemini-client`,
//! `trello-client`) and the CLI build on these types.

pub mod cards;
pub mod error;
pub mod export;
pub mod hashtags;
pub mod presets;
pub mod prompt;
pub mod types;

pub use cards::{card_draft, CardDraft};
pub use error::{PlannerError, Result};
pub use presets::Presets;
pub use types::{ContentCalendar, ContentItem, PlanningRequest, PostFormat};
