use canvas_search_core::MatchResult;

/// Last query and hit list, overwritten on every search.
///
/// Owned by the long-lived controller rather than the overlay itself, so it
/// survives overlay teardown when the host view deactivates; only the
/// explicit clear action empties it.
#[derive(Debug, Clone, Default)]
pub struct SearchSession {
    last_query: String,
    last_results: Vec<MatchResult>,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn remember(&mut self, query: impl Into<String>, results: Vec<MatchResult>) {
        self.last_query = query.into();
        self.last_results = results;
    }

    pub fn recall(&self) -> (&str, &[MatchResult]) {
        (&self.last_query, &self.last_results)
    }

    pub fn clear(&mut self) {
        self.last_query.clear();
        self.last_results.clear();
    }

    /// True when reopening the overlay should redisplay prior results.
    pub fn has_results(&self) -> bool {
        !self.last_query.is_empty() && !self.last_results.is_empty()
    }
}
