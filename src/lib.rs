//! Stepdeck is a step-reveal engine for slide presentations.
//!
//! A slide's rendered content is progressively revealed on user command. The
//! engine decides which sub-elements of the slide constitute discrete reveal
//! steps and drives an ordered, wraparound navigation state machine over
//! them.
//!
//! # Pipeline overview
//!
//! 1. **Parse**: markup string -> [`Document`] (HTML vs. SVG auto-detected),
//!    or the host builds the arena directly
//! 2. **Select**: a [`StepMode`] picks one [`Selector`] variant which walks
//!    the document and returns ordered [`StepElement`]s
//! 3. **Subset**: an optional range specifier restricts/reorders the steps
//! 4. **Control**: [`StepController`] applies visibility, [`Navigator`]
//!    drives `show_up_to` on every navigation event and slide activation
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Synchronous**: selection, subset parsing and visibility toggling run
//!   to completion inside one input handler; nothing suspends.
//! - **Read-only selection**: selectors wrap nodes, they never move or clone
//!   them; the only mutation is presentation style on visibility changes,
//!   and it is idempotent.
#![forbid(unsafe_code)]

mod control;
mod dom;
mod foundation;
mod select;
mod step;
mod subset;

pub use control::controller::StepController;
pub use control::navigator::Navigator;
pub use dom::document::{
    ContentType, Display, Document, Node, NodeData, NodeId, ROOT_TAG, Style, TextDecoration,
    Visibility,
};
pub use dom::parse::{detect_content_type, parse_markup};
pub use dom::query::{Query, query_all};
pub use foundation::error::{StepdeckError, StepdeckResult};
pub use select::Selector;
pub use select::cloze::ClozeSelector;
pub use select::element::ElementSelector;
pub use select::inkscape::{InkscapeMode, InkscapeSelector, parse_inkscape_mode};
pub use select::mode::{StepConfig, StepMode, TextMode, parse_text_mode, selector_for_mode};
pub use select::sentence::SentenceSelector;
pub use select::word::WordSelector;
pub use step::element::{
    HookAction, StepElement, StepHooks, StepKind, heading_step, list_step,
};
pub use subset::parser::{SubsetOptions, SubsetSort, select_subset, select_subset_positions};
