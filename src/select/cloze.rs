use crate::{
    dom::document::{Document, NodeId},
    foundation::error::StepdeckResult,
    select::Selector,
    step::element::StepElement,
};

/// One step per SVG group filled with the exact cloze blue.
///
/// Blanked answer overlays are exported from the SVG editor as groups whose
/// fill is pure blue; everything else in the diagram stays permanently
/// visible.
#[derive(Clone, Copy, Debug, Default)]
pub struct ClozeSelector;

impl ClozeSelector {
    /// Build a cloze selector.
    pub fn new() -> Self {
        Self
    }

    fn fill_of(doc: &Document, id: NodeId) -> Option<String> {
        if let Some(fill) = doc.attr(id, "fill") {
            return Some(fill.to_string());
        }
        // Inkscape exports put the fill into the style attribute.
        let style = doc.attr(id, "style")?;
        style.split(';').find_map(|decl| {
            let (name, value) = decl.split_once(':')?;
            if name.trim().eq_ignore_ascii_case("fill") {
                Some(value.trim().to_string())
            } else {
                None
            }
        })
    }
}

/// True for pure blue in direct or percentage color notation.
fn is_cloze_blue(fill: &str) -> bool {
    let normalized: String = fill
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_lowercase())
        .collect();
    matches!(
        normalized.as_str(),
        "#0000ff" | "blue" | "rgb(0,0,255)" | "rgb(0%,0%,100%)"
    )
}

impl Selector for ClozeSelector {
    fn select(&self, doc: &Document) -> StepdeckResult<Vec<StepElement>> {
        doc.descendants(doc.root())
            .into_iter()
            .filter(|&id| {
                doc.tag(id) == Some("g")
                    && Self::fill_of(doc, id).is_some_and(|f| is_cloze_blue(&f))
            })
            .map(|id| StepElement::new(vec![id], false))
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/select/cloze.rs"]
mod tests;
