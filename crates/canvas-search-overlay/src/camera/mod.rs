pub mod animator;
pub mod ease;

pub use animator::ViewportAnimator;
pub use ease::CubicBezier;
