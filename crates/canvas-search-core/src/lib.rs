use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct NodeId(pub String);

/// One node of a canvas snapshot, as handed over by the host application.
///
/// Which text source is present depends on the node's content type; none of
/// the fields is guaranteed, and unknown fields in the host data are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NodeRecord {
    pub x: f64,
    pub y: f64,
    pub text: Option<String>,
    pub file: Option<FileRef>,
    pub url: Option<String>,
    pub title: Option<String>,
}

/// A file reference is either a bare path string or an object carrying a
/// display name, depending on the host's node shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FileRef {
    Path(String),
    Meta(FileMeta),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FileMeta {
    pub basename: Option<String>,
    pub path: Option<String>,
}

impl FileRef {
    /// Name suitable as a result title; `None` when the reference carries no
    /// non-empty display name.
    pub fn display_name(&self) -> Option<&str> {
        let name = match self {
            FileRef::Path(p) => p.as_str(),
            FileRef::Meta(m) => m.basename.as_deref().unwrap_or(""),
        };
        (!name.is_empty()).then_some(name)
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Viewport position and zoom. Owned by the host canvas; the overlay reads
/// and proposes poses but never holds onto one.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct CameraPose {
    pub x: f64,
    pub y: f64,
    pub zoom: f64,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct ViewportSize {
    pub width: f64,
    pub height: f64,
}

/// One search hit. Carries an owned copy of the node record so a remembered
/// result list stays valid across overlay teardown.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchResult {
    pub id: NodeId,
    pub title: String,
    pub text: String,
    pub node: NodeRecord,
    pub position: Position,
}

/// Ordered id -> node mapping; iteration order is insertion order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CanvasSnapshot {
    nodes: Vec<(NodeId, NodeRecord)>,
}

impl CanvasSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: NodeId, node: NodeRecord) {
        match self.nodes.iter_mut().find(|(existing, _)| *existing == id) {
            Some((_, slot)) => *slot = node,
            None => self.nodes.push((id, node)),
        }
    }

    pub fn get(&self, id: &NodeId) -> Option<&NodeRecord> {
        self.nodes
            .iter()
            .find(|(existing, _)| existing == id)
            .map(|(_, node)| node)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NodeId, &NodeRecord)> {
        self.nodes.iter().map(|(id, node)| (id, node))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Builds a snapshot from host canvas data.
    ///
    /// Accepts either `{"nodes": {id: record, ...}}` or
    /// `{"nodes": [{"id": ..., ...}, ...]}`, as well as the bare nodes
    /// collection. A malformed node becomes an empty record rather than
    /// aborting the snapshot; nodes without an id are skipped.
    pub fn from_json(data: &Value) -> Self {
        let nodes = data.get("nodes").unwrap_or(data);
        let mut snap = Self::new();
        match nodes {
            Value::Object(map) => {
                for (id, raw) in map {
                    snap.insert(NodeId(id.clone()), record_from_value(id, raw));
                }
            }
            Value::Array(items) => {
                for raw in items {
                    let Some(id) = raw.get("id").and_then(Value::as_str) else {
                        tracing::warn!("canvas node without id, skipping");
                        continue;
                    };
                    snap.insert(NodeId(id.to_string()), record_from_value(id, raw));
                }
            }
            _ => tracing::warn!("canvas data has no nodes collection"),
        }
        snap
    }
}

fn record_from_value(id: &str, raw: &Value) -> NodeRecord {
    match NodeRecord::deserialize(raw) {
        Ok(node) => node,
        Err(err) => {
            tracing::warn!(%id, %err, "malformed canvas node, treating as empty");
            NodeRecord::default()
        }
    }
}

impl FromIterator<(NodeId, NodeRecord)> for CanvasSnapshot {
    fn from_iter<T: IntoIterator<Item = (NodeId, NodeRecord)>>(iter: T) -> Self {
        let mut snap = Self::new();
        for (id, node) in iter {
            snap.insert(id, node);
        }
        snap
    }
}
