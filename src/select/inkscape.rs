use crate::{
    dom::document::{Document, NodeId},
    foundation::error::{StepdeckError, StepdeckResult},
    select::Selector,
    step::element::StepElement,
};

/// Inkscape layer attribute: `inkscape:groupmode="layer"` flags a `g` element
/// as an authored layer rather than an ordinary group.
const GROUPMODE_ATTR: &str = "inkscape:groupmode";

/// Which SVG groups become steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum InkscapeMode {
    /// One step per authored layer.
    #[serde(rename = "layer")]
    Layer,
    /// One step per child of each layer; a layer's first child is bundled
    /// with the layer itself into a single compound step.
    #[serde(rename = "layer+")]
    LayerPlus,
    /// One step per group, layers or not.
    #[serde(rename = "group")]
    Group,
}

/// Parse an Inkscape mode string (`layer`, `layer+`, `group`).
pub fn parse_inkscape_mode(mode: &str) -> StepdeckResult<InkscapeMode> {
    match mode.trim() {
        "layer" => Ok(InkscapeMode::Layer),
        "layer+" => Ok(InkscapeMode::LayerPlus),
        "group" => Ok(InkscapeMode::Group),
        other => Err(StepdeckError::unsupported_mode(format!(
            "unknown inkscape mode '{other}'"
        ))),
    }
}

/// Enumerates SVG group nodes according to an [`InkscapeMode`].
#[derive(Clone, Copy, Debug)]
pub struct InkscapeSelector {
    mode: InkscapeMode,
}

impl InkscapeSelector {
    /// Build for a mode.
    pub fn new(mode: InkscapeMode) -> Self {
        Self { mode }
    }

    fn groups(doc: &Document) -> Vec<NodeId> {
        doc.descendants(doc.root())
            .into_iter()
            .filter(|&id| doc.tag(id) == Some("g"))
            .collect()
    }

    fn is_layer(doc: &Document, id: NodeId) -> bool {
        doc.attr(id, GROUPMODE_ATTR) == Some("layer")
    }
}

impl Selector for InkscapeSelector {
    fn select(&self, doc: &Document) -> StepdeckResult<Vec<StepElement>> {
        let mut steps = Vec::new();
        match self.mode {
            InkscapeMode::Group => {
                for id in Self::groups(doc) {
                    steps.push(StepElement::new(vec![id], false)?);
                }
            }
            InkscapeMode::Layer => {
                for id in Self::groups(doc) {
                    if Self::is_layer(doc, id) {
                        steps.push(StepElement::new(vec![id], false)?);
                    }
                }
            }
            InkscapeMode::LayerPlus => {
                for layer in Self::groups(doc) {
                    if !Self::is_layer(doc, layer) {
                        continue;
                    }
                    for (i, child) in doc.element_children(layer).into_iter().enumerate() {
                        // Revealing the first child must bring the layer
                        // background along with it.
                        let nodes = if i == 0 {
                            vec![layer, child]
                        } else {
                            vec![child]
                        };
                        steps.push(StepElement::new(nodes, false)?);
                    }
                }
            }
        }
        Ok(steps)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/select/inkscape.rs"]
mod tests;
