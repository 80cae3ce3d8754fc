use crate::{
    dom::document::Document,
    dom::query::{Query, query_all},
    foundation::error::StepdeckResult,
    select::Selector,
    step::element::StepElement,
};

/// One step per node matched by a query string.
#[derive(Clone, Debug)]
pub struct ElementSelector {
    query: Query,
    vanishing: bool,
}

impl ElementSelector {
    /// Build from a query string; fails on unsupported query syntax.
    pub fn new(query: &str, vanishing: bool) -> StepdeckResult<Self> {
        Ok(Self {
            query: Query::parse(query)?,
            vanishing,
        })
    }
}

impl Selector for ElementSelector {
    fn select(&self, doc: &Document) -> StepdeckResult<Vec<StepElement>> {
        query_all(doc, &self.query)
            .into_iter()
            .map(|id| StepElement::new(vec![id], self.vanishing))
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/select/element.rs"]
mod tests;
