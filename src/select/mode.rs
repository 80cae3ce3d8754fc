use crate::{
    foundation::error::{StepdeckError, StepdeckResult},
    select::{
        Selector, cloze::ClozeSelector, element::ElementSelector, inkscape::InkscapeMode,
        inkscape::InkscapeSelector, sentence::SentenceSelector, word::WordSelector,
    },
};

/// Text step granularity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextMode {
    /// One step per tokenized word.
    Words,
    /// One step per top-level block (list items individually).
    Sentences,
}

/// Parse a text mode string (`words`, `sentences`).
pub fn parse_text_mode(mode: &str) -> StepdeckResult<TextMode> {
    match mode.trim() {
        "words" => Ok(TextMode::Words),
        "sentences" => Ok(TextMode::Sentences),
        other => Err(StepdeckError::unsupported_mode(format!(
            "unknown text mode '{other}'"
        ))),
    }
}

/// Step-mode configuration of one slide, as authored in a presentation file.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepMode {
    /// One step per node matching a query string.
    Query {
        /// Query string (see [`crate::Query`]).
        query: String,
        /// Hide via layout-removing display instead of visibility.
        #[serde(default)]
        vanishing: bool,
    },
    /// Steps over SVG groups exported from Inkscape.
    Inkscape(InkscapeMode),
    /// Steps over rendered slide text.
    Text(TextMode),
    /// Steps over blue cloze overlays in an exported diagram.
    Cloze,
}

/// Full authored step behaviour of a slide: mode plus optional subset range.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StepConfig {
    /// Which selector variant runs over the slide content.
    pub mode: StepMode,
    /// Optional subset specifier, e.g. `"2-4,7"`.
    #[serde(default)]
    pub subset: Option<String>,
}

/// Instantiate the selector variant a mode calls for.
pub fn selector_for_mode(mode: &StepMode) -> StepdeckResult<Box<dyn Selector>> {
    Ok(match mode {
        StepMode::Query { query, vanishing } => Box::new(ElementSelector::new(query, *vanishing)?),
        StepMode::Inkscape(mode) => Box::new(InkscapeSelector::new(*mode)),
        StepMode::Text(TextMode::Words) => Box::new(WordSelector::new()),
        StepMode::Text(TextMode::Sentences) => Box::new(SentenceSelector::new()),
        StepMode::Cloze => Box::new(ClozeSelector::new()),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/select/mode.rs"]
mod tests;
