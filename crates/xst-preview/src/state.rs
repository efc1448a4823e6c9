//! Expanded-node state for tree previews.

use std::collections::BTreeSet;

use serde_json::Value;

use crate::tree::{child_path, is_composite};

/// The set of expanded tree-node paths.
///
/// Paths are stable identifiers built from structural position (see
/// [`crate::tree::child_path`]), so expand/collapse state survives
/// re-renders of the same document. One state belongs to exactly one
/// rendered tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviewState {
    expanded: BTreeSet<String>,
}

impl PreviewState {
    /// Fresh state with every node collapsed.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, path: &str) -> bool {
        self.expanded.contains(path)
    }

    /// Flip membership of one path.
    pub fn toggle(&mut self, path: &str) {
        if !self.expanded.remove(path) {
            self.expanded.insert(path.to_string());
        }
    }

    pub fn expand(&mut self, path: &str) {
        self.expanded.insert(path.to_string());
    }

    pub fn collapse(&mut self, path: &str) {
        self.expanded.remove(path);
    }

    /// Walk the whole value and expand every composite node, root included.
    pub fn expand_all(&mut self, value: &Value) {
        fn walk(value: &Value, path: &str, expanded: &mut BTreeSet<String>) {
            if !is_composite(value) {
                return;
            }
            expanded.insert(path.to_string());
            match value {
                Value::Object(map) => {
                    for (key, child) in map {
                        walk(child, &child_path(path, key), expanded);
                    }
                }
                Value::Array(items) => {
                    for (index, child) in items.iter().enumerate() {
                        walk(child, &child_path(path, &index.to_string()), expanded);
                    }
                }
                _ => {}
            }
        }
        walk(value, "", &mut self.expanded);
    }

    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }

    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }
}
