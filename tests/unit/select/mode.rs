use super::*;
use crate::dom::parse::parse_markup;

#[test]
fn text_mode_strings_parse() {
    assert_eq!(parse_text_mode("words").unwrap(), TextMode::Words);
    assert_eq!(parse_text_mode("sentences").unwrap(), TextMode::Sentences);
    assert!(matches!(
        parse_text_mode("paragraphs"),
        Err(StepdeckError::UnsupportedMode(_))
    ));
}

#[test]
fn every_mode_yields_a_selector() {
    let doc = parse_markup("<p><span class=\"word\">a</span></p>").unwrap();
    let modes = [
        StepMode::Query {
            query: "p".to_string(),
            vanishing: false,
        },
        StepMode::Inkscape(InkscapeMode::Layer),
        StepMode::Text(TextMode::Words),
        StepMode::Text(TextMode::Sentences),
        StepMode::Cloze,
    ];
    for mode in modes {
        let selector = selector_for_mode(&mode).unwrap();
        selector.select(&doc).unwrap();
    }
}

#[test]
fn config_round_trips_through_json() {
    let config = StepConfig {
        mode: StepMode::Text(TextMode::Sentences),
        subset: Some("2-4,7".to_string()),
    };
    let json = serde_json::to_string(&config).unwrap();
    let back: StepConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}

#[test]
fn config_deserializes_from_authored_json() {
    let config: StepConfig =
        serde_json::from_str(r#"{"mode": {"inkscape": "layer+"}}"#).unwrap();
    assert_eq!(config.mode, StepMode::Inkscape(InkscapeMode::LayerPlus));
    assert_eq!(config.subset, None);

    let config: StepConfig =
        serde_json::from_str(r#"{"mode": "cloze", "subset": "-3"}"#).unwrap();
    assert_eq!(config.mode, StepMode::Cloze);
    assert_eq!(config.subset.as_deref(), Some("-3"));

    let config: StepConfig =
        serde_json::from_str(r#"{"mode": {"query": {"query": "li", "vanishing": true}}}"#)
            .unwrap();
    assert_eq!(
        config.mode,
        StepMode::Query {
            query: "li".to_string(),
            vanishing: true
        }
    );
}
