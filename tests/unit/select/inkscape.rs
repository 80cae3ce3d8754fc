use super::*;
use crate::dom::parse::parse_markup;

fn layered_svg() -> Document {
    parse_markup(
        "<?xml version=\"1.0\"?>\
         <svg>\
           <g inkscape:groupmode=\"layer\" id=\"l1\">\
             <rect id=\"bg1\"/><circle id=\"c1\"/>\
           </g>\
           <g id=\"plain\"><path id=\"p1\"/></g>\
           <g inkscape:groupmode=\"layer\" id=\"l2\"><rect id=\"bg2\"/></g>\
         </svg>",
    )
    .unwrap()
}

#[test]
fn mode_strings_parse() {
    assert_eq!(parse_inkscape_mode("layer").unwrap(), InkscapeMode::Layer);
    assert_eq!(
        parse_inkscape_mode("layer+").unwrap(),
        InkscapeMode::LayerPlus
    );
    assert_eq!(parse_inkscape_mode("group").unwrap(), InkscapeMode::Group);
    assert!(matches!(
        parse_inkscape_mode("slice"),
        Err(StepdeckError::UnsupportedMode(_))
    ));
}

#[test]
fn group_mode_takes_every_group() {
    let doc = layered_svg();
    let steps = InkscapeSelector::new(InkscapeMode::Group).select(&doc).unwrap();
    assert_eq!(steps.len(), 3);
}

#[test]
fn layer_mode_takes_only_flagged_groups() {
    let doc = layered_svg();
    let sel = InkscapeSelector::new(InkscapeMode::Layer);
    let steps = sel.select(&doc).unwrap();
    assert_eq!(steps.len(), 2);
    assert_eq!(sel.count(&doc).unwrap(), 3);
    assert_eq!(doc.attr(steps[0].nodes()[0], "id"), Some("l1"));
}

#[test]
fn layer_plus_bundles_layer_with_its_first_child() {
    let doc = layered_svg();
    let steps = InkscapeSelector::new(InkscapeMode::LayerPlus)
        .select(&doc)
        .unwrap();
    // l1 has two children, l2 one; the plain group contributes nothing.
    assert_eq!(steps.len(), 3);

    assert_eq!(steps[0].nodes().len(), 2);
    assert_eq!(doc.attr(steps[0].nodes()[0], "id"), Some("l1"));
    assert_eq!(doc.attr(steps[0].nodes()[1], "id"), Some("bg1"));

    assert_eq!(steps[1].nodes().len(), 1);
    assert_eq!(doc.attr(steps[1].nodes()[0], "id"), Some("c1"));

    assert_eq!(steps[2].nodes().len(), 2);
    assert_eq!(doc.attr(steps[2].nodes()[0], "id"), Some("l2"));
}
