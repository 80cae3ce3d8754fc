use super::*;
use crate::dom::document::ContentType;
use crate::dom::parse::parse_markup;

fn word_ids(doc: &Document) -> Vec<NodeId> {
    doc.descendants(doc.root())
        .into_iter()
        .filter(|&id| doc.has_class(id, "word"))
        .collect()
}

#[test]
fn empty_node_set_is_a_structure_error() {
    let err = StepElement::new(vec![], false).unwrap_err();
    assert!(matches!(err, StepdeckError::Structure(_)));
}

#[test]
fn non_vanishing_steps_toggle_visibility() {
    let mut doc = parse_markup("<p>x</p>").unwrap();
    let p = doc.element_children(doc.root())[0];
    let mut step = StepElement::new(vec![p], false).unwrap();

    step.hide(&mut doc);
    assert!(!step.is_visible());
    assert_eq!(doc.node(p).style().visibility, Some(Visibility::Hidden));
    assert_eq!(doc.node(p).style().display, None);

    step.show(&mut doc);
    assert_eq!(doc.node(p).style().visibility, Some(Visibility::Visible));
}

#[test]
fn vanishing_steps_toggle_display() {
    let mut doc = parse_markup("<p>x</p>").unwrap();
    let p = doc.element_children(doc.root())[0];
    let mut step = StepElement::new(vec![p], true).unwrap();

    step.hide(&mut doc);
    assert_eq!(doc.node(p).style().display, Some(Display::None));
    assert_eq!(doc.node(p).style().visibility, None);

    step.show(&mut doc);
    assert_eq!(doc.node(p).style().display, Some(Display::Block));
}

#[test]
fn set_visibility_is_idempotent() {
    let mut doc = parse_markup("<h2><span class=\"word\">A</span></h2>").unwrap();
    let word = word_ids(&doc)[0];
    let h2 = doc.parent(word).unwrap();
    let mut step = heading_step(&doc, word, false, true, true).unwrap();

    step.hide(&mut doc);
    // Sole word: hiding fires the on-hide hook once.
    assert_eq!(
        doc.node(h2).style().text_decoration,
        Some(TextDecoration::None)
    );

    // Force a marker state; a repeated hide must not fire hooks again.
    doc.style_mut(h2).text_decoration = Some(TextDecoration::Underline);
    step.hide(&mut doc);
    assert_eq!(
        doc.node(h2).style().text_decoration,
        Some(TextDecoration::Underline)
    );
}

#[test]
fn text_comes_from_the_primary_node() {
    let mut doc = Document::new(ContentType::Html);
    let a = doc.push_element(doc.root(), "p", Default::default());
    doc.push_text(a, "alpha");
    let b = doc.push_element(doc.root(), "p", Default::default());
    doc.push_text(b, "beta");
    let step = StepElement::new(vec![a, b], false).unwrap();
    assert_eq!(step.primary(), b);
    assert_eq!(step.text(&doc).as_deref(), Some("beta"));

    let empty = doc.push_element(doc.root(), "p", Default::default());
    let step = StepElement::new(vec![empty], false).unwrap();
    assert_eq!(step.text(&doc), None);
}

#[test]
fn first_list_word_bundles_list_chrome() {
    let doc = parse_markup(
        "<ul><li><span class=\"word\">First</span> <span class=\"word\">Second</span></li></ul>",
    )
    .unwrap();
    let words = word_ids(&doc);
    let ul = doc.element_children(doc.root())[0];
    let li = doc.element_children(ul)[0];

    let first = list_step(&doc, words[0], false).unwrap();
    assert_eq!(first.kind(), StepKind::List);
    assert_eq!(first.nodes(), &[ul, li, words[0]]);

    let second = list_step(&doc, words[1], false).unwrap();
    assert_eq!(second.nodes(), &[words[1]]);
}

#[test]
fn list_step_requires_list_ancestry() {
    let doc = parse_markup("<p><span class=\"word\">x</span></p>").unwrap();
    let word = word_ids(&doc)[0];
    let err = list_step(&doc, word, false).unwrap_err();
    assert!(matches!(err, StepdeckError::Structure(_)));
}

#[test]
fn heading_underline_follows_first_and_last_word() {
    let mut doc =
        parse_markup("<h2><span class=\"word\">A</span> <span class=\"word\">B</span></h2>")
            .unwrap();
    let words = word_ids(&doc);
    let h2 = doc.parent(words[0]).unwrap();

    let mut a = heading_step(&doc, words[0], false, true, false).unwrap();
    let mut b = heading_step(&doc, words[1], false, false, true).unwrap();
    assert_eq!(a.kind(), StepKind::Heading);
    a.hide(&mut doc);
    b.hide(&mut doc);

    a.show(&mut doc);
    assert_eq!(
        doc.node(h2).style().text_decoration,
        Some(TextDecoration::None)
    );

    b.show(&mut doc);
    assert_eq!(
        doc.node(h2).style().text_decoration,
        Some(TextDecoration::Underline)
    );

    b.hide(&mut doc);
    assert_eq!(
        doc.node(h2).style().text_decoration,
        Some(TextDecoration::None)
    );
}

#[test]
fn heading_step_requires_heading_parent() {
    let doc = parse_markup("<p><span class=\"word\">x</span></p>").unwrap();
    let word = word_ids(&doc)[0];
    let err = heading_step(&doc, word, false, true, false).unwrap_err();
    assert!(matches!(err, StepdeckError::Structure(_)));
}
