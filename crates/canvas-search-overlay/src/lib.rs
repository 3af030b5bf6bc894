pub mod camera;
pub mod host;
pub mod overlay;
pub mod search;
pub mod util;

pub use camera::{CubicBezier, ViewportAnimator};
pub use host::{Selection, ViewportHandle};
pub use overlay::{OverlayController, SearchOverlay};
pub use search::{extract_display_text, highlight, search, ExtractedText, SearchSession};
pub use util::config::OverlayConfig;
