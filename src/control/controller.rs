use crate::{
    dom::document::Document,
    foundation::error::StepdeckResult,
    select::mode::{StepConfig, selector_for_mode},
    step::element::StepElement,
    subset::parser::{SubsetOptions, select_subset_positions},
};

/// Owns the ordered steps of one slide and an optional subset restriction.
///
/// The subset is computed once, at construction, by running the range parser
/// against the raw step positions. `show_up_to` is idempotent: rapid repeated
/// navigation events simply re-evaluate against the latest step number with
/// no queued intermediate states.
#[derive(Clone, Debug)]
pub struct StepController {
    steps: Vec<StepElement>,
    subset: Option<Vec<usize>>,
}

impl StepController {
    /// Wrap the full step list with no subset restriction.
    pub fn new(steps: Vec<StepElement>) -> Self {
        Self {
            steps,
            subset: None,
        }
    }

    /// Wrap a step list restricted/reordered by a subset specifier.
    ///
    /// A blank specifier means no restriction.
    pub fn with_subset(
        steps: Vec<StepElement>,
        spec: &str,
        opts: &SubsetOptions,
    ) -> StepdeckResult<Self> {
        let subset = if spec.trim().is_empty() {
            None
        } else {
            Some(select_subset_positions(spec, steps.len(), opts)?)
        };
        Ok(Self { steps, subset })
    }

    /// Build a controller for a slide from its authored configuration.
    ///
    /// This is the host boundary: mode picks the selector variant, the
    /// selector walks the document, the optional subset restricts the result.
    #[tracing::instrument(skip(doc, config), fields(mode = ?config.mode))]
    pub fn from_config(
        doc: &Document,
        config: &StepConfig,
        opts: &SubsetOptions,
    ) -> StepdeckResult<Self> {
        let selector = selector_for_mode(&config.mode)?;
        let steps = selector.select(doc)?;
        tracing::debug!(steps = steps.len(), "selected steps");
        match &config.subset {
            Some(spec) => Self::with_subset(steps, spec, opts),
            None => Ok(Self::new(steps)),
        }
    }

    /// All steps the selector produced, in document order.
    pub fn steps(&self) -> &[StepElement] {
        &self.steps
    }

    /// Raw positions of the active subset, if one is set.
    pub fn subset_positions(&self) -> Option<&[usize]> {
        self.subset.as_deref()
    }

    /// Number of navigation steps: participating elements plus the initial
    /// nothing-revealed state.
    pub fn step_count(&self) -> usize {
        self.subset.as_ref().map_or(self.steps.len(), Vec::len) + 1
    }

    fn participating(&self) -> Vec<usize> {
        match &self.subset {
            Some(subset) => subset.clone(),
            None => (0..self.steps.len()).collect(),
        }
    }

    /// Reveal every participating step up to (excluding) `step_number`.
    ///
    /// Step 1 reveals nothing. Returns the step that became newly visible at
    /// exactly this call, or `None` when `step_number` is 1 or past the last
    /// transition.
    pub fn show_up_to(
        &mut self,
        doc: &mut Document,
        step_number: usize,
    ) -> Option<&StepElement> {
        let mut revealed = None;
        for (i, raw) in self.participating().into_iter().enumerate() {
            self.steps[raw].set_visibility_status(doc, step_number > i + 1);
            if step_number == i + 2 {
                revealed = Some(raw);
            }
        }
        revealed.map(|raw| &self.steps[raw])
    }

    /// Reset every step to hidden, used on first slide activation.
    pub fn hide_all(&mut self, doc: &mut Document) {
        for step in &mut self.steps {
            step.set_visibility_status(doc, false);
        }
    }

    /// Reset in-subset steps to hidden while leaving steps positioned before
    /// the subset's start permanently visible.
    ///
    /// Used when re-entering a slide whose subset does not start at position
    /// 1: the leading steps are scenery, not part of the reveal sequence.
    /// Without a subset this is the same as [`StepController::hide_all`].
    pub fn hide_from_subset_begin(&mut self, doc: &mut Document) {
        let Some(subset) = self.subset.clone() else {
            self.hide_all(doc);
            return;
        };
        if let Some(&first) = subset.first() {
            for raw in 0..first {
                if !subset.contains(&raw) {
                    self.steps[raw].set_visibility_status(doc, true);
                }
            }
        }
        for raw in subset {
            self.steps[raw].set_visibility_status(doc, false);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/control/controller.rs"]
mod tests;
