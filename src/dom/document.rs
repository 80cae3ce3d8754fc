use std::collections::BTreeMap;

/// Stable handle into a [`Document`] arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub usize);

/// Content flavour of a document, auto-detected at parse time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    /// Slide markup (headings, lists, word spans).
    Html,
    /// Exported vector graphics (groups, layers).
    Svg,
}

/// Layout-removing display state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Display {
    /// `display: none` — node removed from flow.
    None,
    /// `display: block` — node participates in flow.
    Block,
}

/// Space-preserving visibility state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    /// `visibility: hidden` — invisible but still occupying space.
    Hidden,
    /// `visibility: visible`.
    Visible,
}

/// Text decoration state, used by heading step hooks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextDecoration {
    /// `text-decoration: none`.
    None,
    /// `text-decoration: underline`.
    Underline,
}

/// The presentation-layer state the engine is allowed to mutate.
///
/// `None` fields mean "not set by the engine"; the host's stylesheet rules
/// apply. Hosts read this record when painting a node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Style {
    /// Layout-removing toggle used by vanishing steps.
    pub display: Option<Display>,
    /// Space-preserving toggle used by non-vanishing steps.
    pub visibility: Option<Visibility>,
    /// Underline decoration driven by heading step hooks.
    pub text_decoration: Option<TextDecoration>,
}

/// Payload of a node: an element with attributes, or a text run.
#[derive(Clone, Debug)]
pub enum NodeData {
    /// Element node with a (lowercased) tag name and attribute map.
    Element {
        /// Tag name, lowercased at parse time.
        tag: String,
        /// Attributes in stable order.
        attrs: BTreeMap<String, String>,
    },
    /// Text run, entities already unescaped.
    Text(String),
}

/// One node of the arena.
#[derive(Clone, Debug)]
pub struct Node {
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) data: NodeData,
    pub(crate) style: Style,
}

impl Node {
    /// Node payload.
    pub fn data(&self) -> &NodeData {
        &self.data
    }

    /// Presentation style set on this node so far.
    pub fn style(&self) -> &Style {
        &self.style
    }
}

/// Index arena holding one slide's rendered content tree.
///
/// A document always has a synthetic root element (tag `#root`) so that
/// fragments with several top-level children stay a single tree. Hosts either
/// build a document programmatically via [`Document::push_element`] /
/// [`Document::push_text`] or obtain one from [`crate::parse_markup`].
///
/// Selectors never mutate structure; the only presentation mutation goes
/// through [`crate::StepElement::set_visibility_status`].
#[derive(Clone, Debug)]
pub struct Document {
    nodes: Vec<Node>,
    root: NodeId,
    content_type: ContentType,
}

/// Tag name of the synthetic root element.
pub const ROOT_TAG: &str = "#root";

impl Document {
    /// Create an empty document with a synthetic root element.
    pub fn new(content_type: ContentType) -> Self {
        let root_node = Node {
            parent: None,
            children: Vec::new(),
            data: NodeData::Element {
                tag: ROOT_TAG.to_string(),
                attrs: BTreeMap::new(),
            },
            style: Style::default(),
        };
        Self {
            nodes: vec![root_node],
            root: NodeId(0),
            content_type,
        }
    }

    /// Synthetic root element id.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Content flavour this document was built as.
    pub fn content_type(&self) -> ContentType {
        self.content_type
    }

    /// Total node count including the synthetic root.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when the document holds nothing beyond the synthetic root.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Append an element node under `parent`.
    pub fn push_element(
        &mut self,
        parent: NodeId,
        tag: impl Into<String>,
        attrs: BTreeMap<String, String>,
    ) -> NodeId {
        self.push_node(
            parent,
            NodeData::Element {
                tag: tag.into(),
                attrs,
            },
        )
    }

    /// Append a text node under `parent`.
    pub fn push_text(&mut self, parent: NodeId, text: impl Into<String>) -> NodeId {
        self.push_node(parent, NodeData::Text(text.into()))
    }

    fn push_node(&mut self, parent: NodeId, data: NodeData) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            parent: Some(parent),
            children: Vec::new(),
            data,
            style: Style::default(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Borrow a node.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Mutable style access for a node.
    pub fn style_mut(&mut self, id: NodeId) -> &mut Style {
        &mut self.nodes[id.0].style
    }

    /// Parent of a node, `None` for the root.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    /// Children of a node in document order.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// Element children of a node, text runs filtered out.
    pub fn element_children(&self, id: NodeId) -> Vec<NodeId> {
        self.children(id)
            .iter()
            .copied()
            .filter(|&c| self.is_element(c))
            .collect()
    }

    /// True when the node is an element.
    pub fn is_element(&self, id: NodeId) -> bool {
        matches!(self.nodes[id.0].data, NodeData::Element { .. })
    }

    /// Tag name of an element node.
    pub fn tag(&self, id: NodeId) -> Option<&str> {
        match &self.nodes[id.0].data {
            NodeData::Element { tag, .. } => Some(tag),
            NodeData::Text(_) => None,
        }
    }

    /// Attribute value of an element node.
    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        match &self.nodes[id.0].data {
            NodeData::Element { attrs, .. } => attrs.get(name).map(String::as_str),
            NodeData::Text(_) => None,
        }
    }

    /// True when the element carries `class` in its class attribute.
    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.attr(id, "class")
            .is_some_and(|v| v.split_whitespace().any(|c| c == class))
    }

    /// All descendants of `from` in document (preorder) order, `from` excluded.
    pub fn descendants(&self, from: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(from).iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.children(id).iter().rev());
        }
        out
    }

    /// Concatenated text content of a node and its descendants.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        if let NodeData::Text(t) = &self.nodes[id.0].data {
            out.push_str(t);
        }
        for d in self.descendants(id) {
            if let NodeData::Text(t) = &self.nodes[d.0].data {
                out.push_str(t);
            }
        }
        out
    }

    /// True when `id` is the first content of its parent, ignoring
    /// whitespace-only text runs.
    pub fn is_first_content(&self, id: NodeId) -> bool {
        let Some(parent) = self.parent(id) else {
            return false;
        };
        for &child in self.children(parent) {
            match &self.nodes[child.0].data {
                NodeData::Text(t) if t.trim().is_empty() => continue,
                _ => return child == id,
            }
        }
        false
    }
}

#[cfg(test)]
#[path = "../../tests/unit/dom/document.rs"]
mod tests;
