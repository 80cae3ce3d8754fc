use super::*;
use crate::dom::parse::parse_markup;

#[test]
fn one_step_per_match_in_document_order() {
    let doc = parse_markup("<p class=\"place\">a</p><h1>t</h1><p class=\"place\">b</p>").unwrap();
    let sel = ElementSelector::new(".place", false).unwrap();
    let steps = sel.select(&doc).unwrap();
    assert_eq!(steps.len(), 2);
    assert_eq!(steps[0].text(&doc).as_deref(), Some("a"));
    assert_eq!(steps[1].text(&doc).as_deref(), Some("b"));
    assert!(!steps[0].vanishing());
}

#[test]
fn count_reserves_the_initial_hidden_state() {
    let doc = parse_markup("<p>a</p><p>b</p><p>c</p>").unwrap();
    let sel = ElementSelector::new("p", true).unwrap();
    assert_eq!(sel.select(&doc).unwrap().len() + 1, sel.count(&doc).unwrap());
    assert_eq!(sel.count(&doc).unwrap(), 4);
    assert!(sel.select(&doc).unwrap()[0].vanishing());
}

#[test]
fn bad_query_fails_at_construction() {
    assert!(ElementSelector::new("p q", false).is_err());
}
