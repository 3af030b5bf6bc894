use canvas_search_core::{CameraPose, NodeId, ViewportSize};
use smallvec::SmallVec;

/// Node ids the host should mark selected; almost always exactly one.
pub type Selection = SmallVec<[NodeId; 1]>;

/// Write capability onto the host canvas viewport.
///
/// The host keeps a live camera value and its own settle target;
/// `propose_pose` must apply the pose to both so host-side smoothing does
/// not fight an animation in flight. `request_frame` asks the host for a
/// redraw; it does not schedule animation ticks (the host's frame loop calls
/// back into the animator for that).
pub trait ViewportHandle {
    fn pose(&self) -> CameraPose;
    fn viewport_size(&self) -> ViewportSize;
    fn propose_pose(&mut self, pose: CameraPose);
    fn set_selection(&mut self, ids: Selection);
    fn request_frame(&mut self);
}

/// Minimal in-memory host for exercising the animator and controller.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingViewport {
    pub pose: CameraPose,
    pub size: ViewportSize,
    pub selection: Selection,
    pub poses_proposed: usize,
    pub frames_requested: usize,
}

#[cfg(test)]
impl ViewportHandle for RecordingViewport {
    fn pose(&self) -> CameraPose {
        self.pose
    }

    fn viewport_size(&self) -> ViewportSize {
        self.size
    }

    fn propose_pose(&mut self, pose: CameraPose) {
        self.pose = pose;
        self.poses_proposed += 1;
    }

    fn set_selection(&mut self, ids: Selection) {
        self.selection = ids;
    }

    fn request_frame(&mut self) {
        self.frames_requested += 1;
    }
}
