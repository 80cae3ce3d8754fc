use crate::{
    dom::document::Document, foundation::error::StepdeckResult, select::Selector,
    step::element::StepElement,
};

/// One step per top-level child of the root.
///
/// A list container at the top level contributes one step per list item
/// instead of a single step for the whole list.
#[derive(Clone, Copy, Debug, Default)]
pub struct SentenceSelector;

impl SentenceSelector {
    /// Build a sentence selector.
    pub fn new() -> Self {
        Self
    }
}

impl Selector for SentenceSelector {
    fn select(&self, doc: &Document) -> StepdeckResult<Vec<StepElement>> {
        let mut steps = Vec::new();
        for child in doc.element_children(doc.root()) {
            if matches!(doc.tag(child), Some("ul" | "ol")) {
                for item in doc.element_children(child) {
                    if doc.tag(item) == Some("li") {
                        steps.push(StepElement::new(vec![item], false)?);
                    }
                }
            } else {
                steps.push(StepElement::new(vec![child], false)?);
            }
        }
        Ok(steps)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/select/sentence.rs"]
mod tests;
