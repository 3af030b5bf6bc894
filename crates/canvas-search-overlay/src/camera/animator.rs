use std::time::{Duration, Instant};

use canvas_search_core::{CameraPose, CanvasSnapshot, MatchResult, NodeId};
use smallvec::smallvec;

use crate::camera::ease::CubicBezier;
use crate::host::ViewportHandle;

/// The camera lands at node position + viewport/10 on each axis.
const FOCUS_OFFSET_DIVISOR: f64 = 10.0;

pub const DEFAULT_FOCUS_DURATION: Duration = Duration::from_millis(600);
pub const DEFAULT_FOCUS_ZOOM: f64 = 0.5;

#[derive(Debug, Clone)]
struct FocusAnimation {
    node: NodeId,
    start: CameraPose,
    target: CameraPose,
    started_at: Instant,
}

/// Eased camera transition onto a focused node.
///
/// At most one animation is in flight: a new `focus` replaces the previous
/// one, which never writes the camera again. The host's frame loop drives the
/// interpolation by calling `tick` once per scheduled frame for as long as
/// `tick` returns true.
#[derive(Debug)]
pub struct ViewportAnimator {
    duration: Duration,
    focus_zoom: f64,
    ease: CubicBezier,
    active: Option<FocusAnimation>,
    generation: u64,
}

impl Default for ViewportAnimator {
    fn default() -> Self {
        Self::new(
            DEFAULT_FOCUS_DURATION,
            DEFAULT_FOCUS_ZOOM,
            CubicBezier::focus_default(),
        )
    }
}

impl ViewportAnimator {
    pub fn new(duration: Duration, focus_zoom: f64, ease: CubicBezier) -> Self {
        Self {
            duration,
            focus_zoom,
            ease,
            active: None,
            generation: 0,
        }
    }

    /// Starts an eased transition onto the result's node, reading the node's
    /// current position from the snapshot (a remembered result may be stale).
    ///
    /// Returns false without touching the camera when the node is gone from
    /// the snapshot. Supersedes any animation already in flight.
    pub fn focus(
        &mut self,
        result: &MatchResult,
        snapshot: &CanvasSnapshot,
        host: &mut dyn ViewportHandle,
    ) -> bool {
        self.focus_at(result, snapshot, host, Instant::now())
    }

    pub fn focus_at(
        &mut self,
        result: &MatchResult,
        snapshot: &CanvasSnapshot,
        host: &mut dyn ViewportHandle,
        now: Instant,
    ) -> bool {
        let Some(node) = snapshot.get(&result.id) else {
            tracing::debug!(id = %result.id.0, "focus target missing from snapshot, skipping");
            return false;
        };

        let viewport = host.viewport_size();
        let target = CameraPose {
            x: node.x + viewport.width / FOCUS_OFFSET_DIVISOR,
            y: node.y + viewport.height / FOCUS_OFFSET_DIVISOR,
            zoom: self.focus_zoom,
        };

        self.generation = self.generation.wrapping_add(1);
        self.active = Some(FocusAnimation {
            node: result.id.clone(),
            start: host.pose(),
            target,
            started_at: now,
        });
        host.request_frame();
        true
    }

    /// Advances the active animation to `now`, writing the interpolated pose,
    /// the selection and a redraw request into the host. Returns whether
    /// another frame should be scheduled.
    pub fn tick(&mut self, now: Instant, host: &mut dyn ViewportHandle) -> bool {
        let Some(anim) = self.active.as_ref() else {
            return false;
        };

        let elapsed = now.saturating_duration_since(anim.started_at);
        let progress = if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
        };
        let eased = self.ease.eval(progress);

        // the terminal frame lands exactly on the target
        let pose = if progress >= 1.0 {
            anim.target
        } else {
            CameraPose {
                x: lerp(anim.start.x, anim.target.x, eased),
                y: lerp(anim.start.y, anim.target.y, eased),
                zoom: lerp(anim.start.zoom, anim.target.zoom, eased),
            }
        };
        host.propose_pose(pose);
        host.set_selection(smallvec![anim.node.clone()]);
        host.request_frame();

        if progress >= 1.0 {
            self.active = None;
            false
        } else {
            true
        }
    }

    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    /// Bumped on every `focus`; an externally scheduled frame callback can
    /// compare generations to detect that it has been superseded.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

fn lerp(from: f64, to: f64, blend: f64) -> f64 {
    from + (to - from) * blend
}
