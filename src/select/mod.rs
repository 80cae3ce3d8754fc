pub mod cloze;
pub mod element;
pub mod inkscape;
pub mod mode;
pub mod sentence;
pub mod word;

use crate::{dom::document::Document, foundation::error::StepdeckResult, step::element::StepElement};

/// Capability shared by all step selectors: walk a rendered document and
/// return the reveal steps it contains, in document order.
///
/// Selection is a read-only traversal; a selector wraps nodes into
/// [`StepElement`]s but never moves, clones or restyles them.
pub trait Selector {
    /// Collect step elements in document order.
    fn select(&self, doc: &Document) -> StepdeckResult<Vec<StepElement>>;

    /// Number of navigation steps.
    ///
    /// One more than the number of elements: step 1 is the initial
    /// nothing-revealed state.
    fn count(&self, doc: &Document) -> StepdeckResult<usize> {
        Ok(self.select(doc)?.len() + 1)
    }
}
