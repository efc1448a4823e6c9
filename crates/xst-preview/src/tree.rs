//! Lazy tree rendering over parsed values and line-wrapped markup.

use serde_json::Value;

use crate::state::PreviewState;

/// Separator between path segments.
pub const PATH_SEPARATOR: char = '.';

/// Build a child path from a parent path and a key or index segment.
pub fn child_path(parent: &str, segment: &str) -> String {
    format!("{parent}{PATH_SEPARATOR}{segment}")
}

/// True for nodes that can hold children.
pub fn is_composite(value: &Value) -> bool {
    matches!(value, Value::Object(_) | Value::Array(_))
}

/// What a rendered node holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// Object node with its property count.
    Object { properties: usize },
    /// Array node with its item count.
    Array { items: usize },
    /// Scalar in its literal textual form.
    Scalar(String),
}

/// One rendered tree node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewNode {
    pub path: String,
    /// Display label: `"key"` for object members, `[index]` for array
    /// elements, empty for the root.
    pub label: String,
    pub kind: NodeKind,
    pub expanded: bool,
    /// Children of expanded composites; collapsed composites render the
    /// count summary instead and keep this empty.
    pub children: Vec<PreviewNode>,
}

impl PreviewNode {
    pub fn is_composite(&self) -> bool {
        !matches!(self.kind, NodeKind::Scalar(_))
    }

    /// Count of collapsed composite nodes in this subtree.
    pub fn collapsed_count(&self) -> usize {
        let own = usize::from(self.is_composite() && !self.expanded);
        own + self.children.iter().map(Self::collapsed_count).sum::<usize>()
    }

    /// Count of expanded composite nodes in this subtree.
    pub fn expanded_count(&self) -> usize {
        let own = usize::from(self.is_composite() && self.expanded);
        own + self.children.iter().map(Self::expanded_count).sum::<usize>()
    }
}

/// A rendered preview: structural tree for parsed values, plain lines for
/// markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Preview {
    Tree(PreviewNode),
    Lines(Vec<String>),
}

/// Render a parsed value against an expanded-path set.
///
/// Pure: identical (value, state) inputs produce identical trees. Children
/// are materialized only under expanded composites.
pub fn render_value(value: &Value, state: &PreviewState) -> PreviewNode {
    render_node(value, state, String::new(), String::new())
}

fn render_node(value: &Value, state: &PreviewState, path: String, label: String) -> PreviewNode {
    match value {
        Value::Object(map) => {
            let expanded = state.is_expanded(&path);
            let children = if expanded {
                map.iter()
                    .map(|(key, child)| {
                        render_node(
                            child,
                            state,
                            child_path(&path, key),
                            format!("\"{key}\""),
                        )
                    })
                    .collect()
            } else {
                Vec::new()
            };
            PreviewNode {
                path,
                label,
                kind: NodeKind::Object {
                    properties: map.len(),
                },
                expanded,
                children,
            }
        }
        Value::Array(items) => {
            let expanded = state.is_expanded(&path);
            let children = if expanded {
                items
                    .iter()
                    .enumerate()
                    .map(|(index, child)| {
                        render_node(
                            child,
                            state,
                            child_path(&path, &index.to_string()),
                            format!("[{index}]"),
                        )
                    })
                    .collect()
            } else {
                Vec::new()
            };
            PreviewNode {
                path,
                label,
                kind: NodeKind::Array { items: items.len() },
                expanded,
                children,
            }
        }
        scalar => PreviewNode {
            path,
            label,
            // Literal textual form, no coercion.
            kind: NodeKind::Scalar(scalar.to_string()),
            expanded: false,
            children: Vec::new(),
        },
    }
}

/// Render a raw document.
///
/// Markup input (leading `<`) degenerates to one entry per line of the
/// naively re-wrapped string; this is a display approximation with no
/// well-formedness guarantee. JSON-parseable input renders structurally;
/// anything else falls back to its raw lines.
pub fn render_document(raw: &str, state: &PreviewState) -> Preview {
    if raw.trim_start().starts_with('<') {
        return Preview::Lines(wrap_markup_lines(raw));
    }
    match serde_json::from_str::<Value>(raw) {
        Ok(value) => Preview::Tree(render_value(&value, state)),
        Err(_) => Preview::Lines(raw.lines().map(str::to_string).collect()),
    }
}

/// Force every `><` boundary onto its own line.
fn wrap_markup_lines(raw: &str) -> Vec<String> {
    raw.replace("><", ">\n<")
        .lines()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn collapsed_root_has_summary_only() {
        let value = json!({"a": 1, "b": 2});
        let node = render_value(&value, &PreviewState::new());
        assert_eq!(node.kind, NodeKind::Object { properties: 2 });
        assert!(!node.expanded);
        assert!(node.children.is_empty());
    }

    #[test]
    fn expanded_paths_are_stable_across_renders() {
        let value = json!({"users": [{"name": "x"}]});
        let mut state = PreviewState::new();
        state.expand_all(&value);
        let first = render_value(&value, &state);
        let second = render_value(&value, &state);
        assert_eq!(first, second);
        assert_eq!(first.children[0].path, ".users");
        assert_eq!(first.children[0].children[0].path, ".users.0");
    }

    #[test]
    fn expand_all_renders_zero_collapsed_nodes() {
        let value = json!({"users": [{"profile": {"age": 30}}], "tags": ["a", "b"]});
        let mut state = PreviewState::new();
        state.expand_all(&value);
        let tree = render_value(&value, &state);
        assert_eq!(tree.collapsed_count(), 0);
        state.collapse_all();
        let tree = render_value(&value, &state);
        assert_eq!(tree.expanded_count(), 0);
    }

    #[test]
    fn scalars_render_literally() {
        let value = json!({"s": "text", "n": 42, "b": true, "z": null});
        let mut state = PreviewState::new();
        state.expand("");
        let tree = render_value(&value, &state);
        let scalar = |label: &str| -> String {
            tree.children
                .iter()
                .find(|c| c.label == format!("\"{label}\""))
                .map(|c| match &c.kind {
                    NodeKind::Scalar(text) => text.clone(),
                    other => panic!("expected scalar, got {other:?}"),
                })
                .unwrap()
        };
        assert_eq!(scalar("s"), "\"text\"");
        assert_eq!(scalar("n"), "42");
        assert_eq!(scalar("b"), "true");
        assert_eq!(scalar("z"), "null");
    }

    #[test]
    fn markup_input_degenerates_to_lines() {
        let preview = render_document("<root><a>1</a></root>", &PreviewState::new());
        match preview {
            Preview::Lines(lines) => {
                assert_eq!(lines[0], "<root>");
                assert_eq!(lines[1], "<a>1</a>");
                assert_eq!(lines[2], "</root>");
            }
            Preview::Tree(_) => panic!("markup should render as lines"),
        }
    }

    #[test]
    fn empty_array_member_has_no_children_to_expand() {
        let value = json!({"data": []});
        let mut state = PreviewState::new();
        state.expand_all(&value);
        let tree = render_value(&value, &state);
        let data = &tree.children[0];
        assert_eq!(data.kind, NodeKind::Array { items: 0 });
        assert!(data.children.is_empty());
        assert_eq!(tree.collapsed_count(), 0);
    }

    #[test]
    fn unparseable_text_falls_back_to_raw_lines() {
        let preview = render_document("plain\ntext", &PreviewState::new());
        assert_eq!(
            preview,
            Preview::Lines(vec!["plain".to_string(), "text".to_string()])
        );
    }
}
