use std::time::Instant;

use canvas_search_core::{CanvasSnapshot, MatchResult};

use crate::camera::ViewportAnimator;
use crate::host::ViewportHandle;
use crate::search::{engine, SearchSession};
use crate::util::config::OverlayConfig;

/// Per-attachment visual state. The host UI tears this down and rebuilds it
/// every time the view for a canvas activates; anything that must outlive a
/// rebuild belongs in the session instead.
#[derive(Debug, Clone, Default)]
pub struct SearchOverlay {
    pub query: String,
    pub results: Vec<MatchResult>,
}

/// Long-lived owner of the search session, the viewport animator and the
/// overlay attachment state.
///
/// View activation and deactivation only show and hide the overlay; the
/// remembered query and results survive until `end_session`.
#[derive(Debug)]
pub struct OverlayController {
    session: SearchSession,
    animator: ViewportAnimator,
    overlay: Option<SearchOverlay>,
}

impl Default for OverlayController {
    fn default() -> Self {
        Self::new(&OverlayConfig::default())
    }
}

impl OverlayController {
    pub fn new(cfg: &OverlayConfig) -> Self {
        Self {
            session: SearchSession::new(),
            animator: ViewportAnimator::new(cfg.duration(), cfg.focus_zoom, cfg.ease()),
            overlay: None,
        }
    }

    /// The host view for a canvas became active: rebuild the overlay and, if
    /// the session holds a prior query with hits, redisplay them verbatim
    /// without re-searching.
    pub fn on_view_activated(&mut self) {
        let mut overlay = SearchOverlay::default();
        if self.session.has_results() {
            let (query, results) = self.session.recall();
            overlay.query = query.to_string();
            overlay.results = results.to_vec();
        }
        self.overlay = Some(overlay);
    }

    /// The host view deactivated: drop the overlay, keep the session.
    pub fn on_view_deactivated(&mut self) {
        self.overlay = None;
    }

    /// Runs a search over the snapshot, remembers it in the session and
    /// updates the displayed list. A detached overlay makes this a no-op.
    pub fn run_search(&mut self, snapshot: &CanvasSnapshot, query: &str) -> &[MatchResult] {
        if self.overlay.is_none() {
            tracing::debug!("search requested with no overlay attached");
            return &[];
        }

        let results = engine::search(snapshot, query);
        self.session.remember(query, results.clone());

        let Some(overlay) = self.overlay.as_mut() else {
            return &[];
        };
        overlay.query = query.to_string();
        overlay.results = results;
        &overlay.results
    }

    /// Empties the displayed list only (e.g. the user clicked past the
    /// overlay); the session keeps the results for the next reopen.
    pub fn dismiss_results(&mut self) {
        if let Some(overlay) = self.overlay.as_mut() {
            overlay.results.clear();
        }
    }

    /// The explicit end-of-session action: forget the remembered query and
    /// results and empty the overlay.
    pub fn end_session(&mut self) {
        self.session.clear();
        if let Some(overlay) = self.overlay.as_mut() {
            overlay.query.clear();
            overlay.results.clear();
        }
    }

    /// Starts the eased camera transition onto a picked result.
    pub fn focus(
        &mut self,
        result: &MatchResult,
        snapshot: &CanvasSnapshot,
        host: &mut dyn ViewportHandle,
    ) -> bool {
        self.animator.focus(result, snapshot, host)
    }

    /// One animation frame; the host calls this while it returns true.
    pub fn on_frame(&mut self, now: Instant, host: &mut dyn ViewportHandle) -> bool {
        self.animator.tick(now, host)
    }

    pub fn overlay(&self) -> Option<&SearchOverlay> {
        self.overlay.as_ref()
    }

    pub fn session(&self) -> &SearchSession {
        &self.session
    }

    pub fn animator(&self) -> &ViewportAnimator {
        &self.animator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use canvas_search_core::{NodeId, NodeRecord};

    fn snapshot() -> CanvasSnapshot {
        let mut snap = CanvasSnapshot::new();
        snap.insert(
            NodeId("n1".into()),
            NodeRecord {
                x: 100.0,
                y: 200.0,
                text: Some("**[[Title]]** body text".into()),
                ..NodeRecord::default()
            },
        );
        snap.insert(
            NodeId("n2".into()),
            NodeRecord {
                text: Some("unrelated".into()),
                ..NodeRecord::default()
            },
        );
        snap
    }

    #[test]
    fn results_survive_view_teardown_and_rebuild() {
        let mut ctl = OverlayController::default();
        ctl.on_view_activated();
        let hits = ctl.run_search(&snapshot(), "body").to_vec();
        assert_eq!(hits.len(), 1);

        ctl.on_view_deactivated();
        assert!(ctl.overlay().is_none());

        ctl.on_view_activated();
        let overlay = ctl.overlay().unwrap();
        assert_eq!(overlay.query, "body");
        assert_eq!(overlay.results, hits);
    }

    #[test]
    fn rebuild_with_empty_session_shows_nothing() {
        let mut ctl = OverlayController::default();
        ctl.on_view_activated();
        let overlay = ctl.overlay().unwrap();
        assert_eq!(overlay.query, "");
        assert!(overlay.results.is_empty());
    }

    #[test]
    fn end_session_clears_session_and_overlay() {
        let mut ctl = OverlayController::default();
        ctl.on_view_activated();
        ctl.run_search(&snapshot(), "body");

        ctl.end_session();
        let (query, results) = ctl.session().recall();
        assert_eq!(query, "");
        assert!(results.is_empty());
        assert!(ctl.overlay().unwrap().results.is_empty());

        // reopening after the explicit clear restores nothing
        ctl.on_view_deactivated();
        ctl.on_view_activated();
        assert_eq!(ctl.overlay().unwrap().query, "");
    }

    #[test]
    fn dismiss_keeps_session_for_reopen() {
        let mut ctl = OverlayController::default();
        ctl.on_view_activated();
        ctl.run_search(&snapshot(), "body");

        ctl.dismiss_results();
        assert!(ctl.overlay().unwrap().results.is_empty());
        assert!(ctl.session().has_results());

        ctl.on_view_deactivated();
        ctl.on_view_activated();
        assert_eq!(ctl.overlay().unwrap().results.len(), 1);
    }

    #[test]
    fn search_without_overlay_is_a_noop() {
        let mut ctl = OverlayController::default();
        assert!(ctl.run_search(&snapshot(), "body").is_empty());
        assert!(!ctl.session().has_results());
    }

    #[test]
    fn every_search_overwrites_the_session() {
        let mut ctl = OverlayController::default();
        ctl.on_view_activated();
        ctl.run_search(&snapshot(), "body");
        ctl.run_search(&snapshot(), "no such thing");

        let (query, results) = ctl.session().recall();
        assert_eq!(query, "no such thing");
        assert!(results.is_empty());
    }

    #[test]
    fn searches_a_snapshot_built_from_host_json() {
        let snap = CanvasSnapshot::from_json(&serde_json::json!({
            "nodes": {
                "n1": { "x": 1.0, "y": 2.0, "text": "alpha body" },
                "n2": { "x": 3.0, "y": 4.0, "url": "https://example.org" }
            }
        }));

        let mut ctl = OverlayController::default();
        ctl.on_view_activated();
        let hits = ctl.run_search(&snap, "example");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, NodeId("n2".into()));
        assert_eq!(hits[0].title, "https://example.org");
    }

    #[test]
    fn scenario_search_yields_expected_match() {
        let mut ctl = OverlayController::default();
        ctl.on_view_activated();
        let hits = ctl.run_search(&snapshot(), "body");

        assert_eq!(hits.len(), 1);
        let hit = &hits[0];
        assert_eq!(hit.id, NodeId("n1".into()));
        assert_eq!(hit.title, "Title");
        assert_eq!(hit.text, "body text");
        assert_eq!((hit.position.x, hit.position.y), (100.0, 200.0));
    }
}
