use super::*;
use crate::dom::parse::parse_markup;

#[test]
fn one_step_per_top_level_child() {
    let doc = parse_markup("<h1>t</h1><p>a</p><p>b</p>").unwrap();
    let steps = SentenceSelector::new().select(&doc).unwrap();
    assert_eq!(steps.len(), 3);
    assert_eq!(steps[1].text(&doc).as_deref(), Some("a"));
}

#[test]
fn lists_expand_to_their_items() {
    let doc = parse_markup("<p>intro</p><ol><li>one</li><li>two</li></ol><p>outro</p>").unwrap();
    let sel = SentenceSelector::new();
    let steps = sel.select(&doc).unwrap();
    assert_eq!(steps.len(), 4);
    assert_eq!(steps[1].text(&doc).as_deref(), Some("one"));
    assert_eq!(steps[2].text(&doc).as_deref(), Some("two"));
    assert_eq!(steps[3].text(&doc).as_deref(), Some("outro"));
    assert_eq!(sel.count(&doc).unwrap(), 5);
}

#[test]
fn top_level_text_runs_are_ignored() {
    let doc = parse_markup("leading text<p>a</p>").unwrap();
    let steps = SentenceSelector::new().select(&doc).unwrap();
    assert_eq!(steps.len(), 1);
}
