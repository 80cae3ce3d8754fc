use crate::{
    control::controller::StepController, dom::document::Document, step::element::StepElement,
};

/// Presentation-facing navigation driver for one slide instance.
///
/// Holds the 1-based current step number and a `visited` flag. Navigation
/// wraps around at both ends and delegates every visibility change to the
/// owned [`StepController`]. Cross-slide persistence of the step number is
/// the host's responsibility.
#[derive(Clone, Debug)]
pub struct Navigator {
    controller: StepController,
    step_no: usize,
    visited: bool,
}

impl Navigator {
    /// Wrap a controller; the slide counts as not yet visited.
    pub fn new(controller: StepController) -> Self {
        Self {
            controller,
            step_no: 1,
            visited: false,
        }
    }

    /// Current 1-based step number.
    pub fn step_no(&self) -> usize {
        self.step_no
    }

    /// True once the slide has been activated at least once.
    pub fn visited(&self) -> bool {
        self.visited
    }

    /// Total step count, delegated to the controller.
    pub fn step_count(&self) -> usize {
        self.controller.step_count()
    }

    /// The wrapped controller.
    pub fn controller(&self) -> &StepController {
        &self.controller
    }

    /// Advance one step, wrapping from the last step back to 1.
    ///
    /// Returns the step revealed by this move, if any.
    pub fn next(&mut self, doc: &mut Document) -> Option<&StepElement> {
        self.step_no = if self.step_no >= self.controller.step_count() {
            1
        } else {
            self.step_no + 1
        };
        self.controller.show_up_to(doc, self.step_no)
    }

    /// Go back one step, wrapping from 1 to the last step.
    ///
    /// Returns the step revealed by this move, if any.
    pub fn prev(&mut self, doc: &mut Document) -> Option<&StepElement> {
        self.step_no = if self.step_no <= 1 {
            self.controller.step_count()
        } else {
            self.step_no - 1
        };
        self.controller.show_up_to(doc, self.step_no)
    }

    /// Bring the slide's steps into the state this navigator expects.
    ///
    /// First activation starts at step 1 with everything hidden. Re-entering
    /// keeps the previously left position: pre-subset scenery is restored and
    /// `show_up_to` is re-applied without resetting navigation state.
    pub fn activate(&mut self, doc: &mut Document) -> Option<&StepElement> {
        if !self.visited {
            self.step_no = 1;
            self.controller.hide_all(doc);
            self.visited = true;
            return None;
        }
        self.controller.hide_from_subset_begin(doc);
        self.controller.show_up_to(doc, self.step_no)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/control/navigator.rs"]
mod tests;
