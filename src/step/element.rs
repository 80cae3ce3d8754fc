use crate::{
    dom::document::{Display, Document, NodeId, TextDecoration, Visibility},
    foundation::error::{StepdeckError, StepdeckResult},
};

/// Which classification rule produced a step.
///
/// Kinds are tagged variants rather than subtypes: the only behavioural
/// difference between them is which nodes they own and which hooks fire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepKind {
    /// Ordinary step over the node(s) a selector picked.
    Plain,
    /// Word inside a list item; may bundle the list chrome with the first word.
    List,
    /// Word inside a heading; drives the heading's underline decoration.
    Heading,
}

/// A side effect fired when a step genuinely changes visibility.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HookAction {
    /// Set the text decoration of a node.
    SetTextDecoration {
        /// Target node (a heading element).
        node: NodeId,
        /// Decoration to apply.
        value: TextDecoration,
    },
}

impl HookAction {
    fn apply(&self, doc: &mut Document) {
        match self {
            HookAction::SetTextDecoration { node, value } => {
                doc.style_mut(*node).text_decoration = Some(*value);
            }
        }
    }
}

/// Show/hide hook lists attached to a step.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepHooks {
    /// Fired once when the step transitions to visible.
    pub on_show: Vec<HookAction>,
    /// Fired once when the step transitions to hidden.
    pub on_hide: Vec<HookAction>,
}

impl StepHooks {
    fn is_empty(&self) -> bool {
        self.on_show.is_empty() && self.on_hide.is_empty()
    }
}

/// One reveal step: an ordered, non-empty set of content nodes whose
/// visibility is toggled together.
///
/// The last owned node is *primary* and used for text extraction. Vanishing
/// steps toggle layout-removing `display`; non-vanishing steps toggle
/// space-preserving `visibility`. A step starts out considered visible; the
/// controller forces the initial hidden state before a slide is shown.
#[derive(Clone, Debug)]
pub struct StepElement {
    nodes: Vec<NodeId>,
    kind: StepKind,
    vanishing: bool,
    is_visible: bool,
    hooks: StepHooks,
}

impl StepElement {
    /// Build a plain step over one or more nodes.
    pub fn new(nodes: Vec<NodeId>, vanishing: bool) -> StepdeckResult<Self> {
        if nodes.is_empty() {
            return Err(StepdeckError::structure(
                "step element requires at least one node",
            ));
        }
        Ok(Self {
            nodes,
            kind: StepKind::Plain,
            vanishing,
            is_visible: true,
            hooks: StepHooks::default(),
        })
    }

    fn with_kind(mut self, kind: StepKind) -> Self {
        self.kind = kind;
        self
    }

    fn with_hooks(mut self, hooks: StepHooks) -> Self {
        self.hooks = hooks;
        self
    }

    /// Classification kind of this step.
    pub fn kind(&self) -> StepKind {
        self.kind
    }

    /// True when this step removes its nodes from layout while hidden.
    pub fn vanishing(&self) -> bool {
        self.vanishing
    }

    /// Current visibility state.
    pub fn is_visible(&self) -> bool {
        self.is_visible
    }

    /// Nodes owned by this step, primary last.
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Primary node, used for text extraction.
    pub fn primary(&self) -> NodeId {
        *self.nodes.last().expect("step nodes are non-empty")
    }

    /// True when this step carries show/hide hooks.
    pub fn has_hooks(&self) -> bool {
        !self.hooks.is_empty()
    }

    /// Text content of the primary node, `None` when blank.
    pub fn text(&self, doc: &Document) -> Option<String> {
        let text = doc.text_content(self.primary());
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    /// Convenience wrapper over [`StepElement::set_visibility_status`].
    pub fn show(&mut self, doc: &mut Document) {
        self.set_visibility_status(doc, true);
    }

    /// Convenience wrapper over [`StepElement::set_visibility_status`].
    pub fn hide(&mut self, doc: &mut Document) {
        self.set_visibility_status(doc, false);
    }

    /// Toggle visibility of every owned node.
    ///
    /// No-op when the requested state equals the current one, so repeated
    /// navigation events never fire hooks twice.
    pub fn set_visibility_status(&mut self, doc: &mut Document, visible: bool) {
        if visible == self.is_visible {
            return;
        }
        self.is_visible = visible;

        for &node in &self.nodes {
            let style = doc.style_mut(node);
            if self.vanishing {
                style.display = Some(if visible { Display::Block } else { Display::None });
            } else {
                style.visibility = Some(if visible {
                    Visibility::Visible
                } else {
                    Visibility::Hidden
                });
            }
        }

        let actions = if visible {
            &self.hooks.on_show
        } else {
            &self.hooks.on_hide
        };
        for action in actions {
            action.apply(doc);
        }
    }
}

/// Build a list step for a word node.
///
/// The word's parent must be a list item and its grandparent an ordered or
/// unordered list. The first content word of an item bundles the list
/// container and the item with itself so numbering/bullet appears together
/// with the first word; every other word owns only itself.
pub fn list_step(doc: &Document, word: NodeId, vanishing: bool) -> StepdeckResult<StepElement> {
    let item = doc
        .parent(word)
        .filter(|&p| doc.tag(p) == Some("li"))
        .ok_or_else(|| StepdeckError::structure("list step word must sit inside a list item"))?;
    let list = doc
        .parent(item)
        .filter(|&p| matches!(doc.tag(p), Some("ul" | "ol")))
        .ok_or_else(|| StepdeckError::structure("list step item must sit inside ul or ol"))?;

    let nodes = if doc.is_first_content(word) {
        vec![list, item, word]
    } else {
        vec![word]
    };
    Ok(StepElement::new(nodes, vanishing)?.with_kind(StepKind::List))
}

/// Build a heading step for a word node.
///
/// The word's parent must be a heading (`h1`–`h6`). Showing the first word
/// clears any decoration on the heading; showing the last word underlines
/// it, hiding the last word clears it again.
pub fn heading_step(
    doc: &Document,
    word: NodeId,
    vanishing: bool,
    first: bool,
    last: bool,
) -> StepdeckResult<StepElement> {
    let heading = doc
        .parent(word)
        .filter(|&p| is_heading_tag(doc.tag(p)))
        .ok_or_else(|| StepdeckError::structure("heading step word must sit inside h1-h6"))?;

    let mut hooks = StepHooks::default();
    if first {
        hooks.on_show.push(HookAction::SetTextDecoration {
            node: heading,
            value: TextDecoration::None,
        });
    }
    if last {
        hooks.on_show.push(HookAction::SetTextDecoration {
            node: heading,
            value: TextDecoration::Underline,
        });
        hooks.on_hide.push(HookAction::SetTextDecoration {
            node: heading,
            value: TextDecoration::None,
        });
    }

    Ok(StepElement::new(vec![word], vanishing)?
        .with_kind(StepKind::Heading)
        .with_hooks(hooks))
}

/// True when the tag names a heading element.
pub(crate) fn is_heading_tag(tag: Option<&str>) -> bool {
    matches!(tag, Some("h1" | "h2" | "h3" | "h4" | "h5" | "h6"))
}

#[cfg(test)]
#[path = "../../tests/unit/step/element.rs"]
mod tests;
