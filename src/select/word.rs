use crate::{
    dom::document::{Document, NodeId},
    foundation::error::StepdeckResult,
    select::Selector,
    step::element::{StepElement, heading_step, is_heading_tag, list_step},
};

/// Class that marks a tokenized word in rendered slide markup.
const WORD_CLASS: &str = "word";

/// One step per recognized word node.
///
/// Words are classified per node: a word whose parent is a list item inside
/// `ul`/`ol` becomes a list step, a word whose parent is a heading becomes a
/// heading step (with underline hooks on the heading's first and last word),
/// everything else a plain step.
#[derive(Clone, Copy, Debug, Default)]
pub struct WordSelector;

impl WordSelector {
    /// Build a word selector.
    pub fn new() -> Self {
        Self
    }

    fn word_children(doc: &Document, parent: NodeId) -> Vec<NodeId> {
        doc.element_children(parent)
            .into_iter()
            .filter(|&c| doc.has_class(c, WORD_CLASS))
            .collect()
    }
}

impl Selector for WordSelector {
    fn select(&self, doc: &Document) -> StepdeckResult<Vec<StepElement>> {
        let mut steps = Vec::new();
        for word in doc.descendants(doc.root()) {
            if !doc.has_class(word, WORD_CLASS) {
                continue;
            }
            let parent = doc.parent(word);
            let parent_tag = parent.and_then(|p| doc.tag(p));

            let in_list = parent_tag == Some("li")
                && parent
                    .and_then(|p| doc.parent(p))
                    .is_some_and(|gp| matches!(doc.tag(gp), Some("ul" | "ol")));

            let step = match parent {
                _ if in_list => list_step(doc, word, false)?,
                Some(heading) if is_heading_tag(parent_tag) => {
                    let siblings = Self::word_children(doc, heading);
                    let first = siblings.first() == Some(&word);
                    let last = siblings.last() == Some(&word);
                    heading_step(doc, word, false, first, last)?
                }
                _ => StepElement::new(vec![word], false)?,
            };
            steps.push(step);
        }
        Ok(steps)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/select/word.rs"]
mod tests;
