pub mod engine;
pub mod extract;
pub mod session;

pub use engine::{highlight, search, HIGHLIGHT_CLOSE, HIGHLIGHT_OPEN};
pub use extract::{extract_display_text, ExtractedText};
pub use session::SearchSession;
