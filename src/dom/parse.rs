use std::collections::BTreeMap;

use quick_xml::Reader;
use quick_xml::events::Event;

use crate::{
    dom::document::{ContentType, Document, NodeId},
    foundation::error::{StepdeckError, StepdeckResult},
};

/// HTML elements without content that never see an end tag.
const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Detect the content flavour of a markup string.
///
/// Exported SVG carries an XML prolog; everything else is treated as slide
/// HTML.
pub fn detect_content_type(markup: &str) -> ContentType {
    if markup.trim_start().starts_with("<?xml") {
        ContentType::Svg
    } else {
        ContentType::Html
    }
}

/// Parse a markup string into a [`Document`], auto-detecting HTML vs. SVG.
#[tracing::instrument(skip(markup), fields(len = markup.len()))]
pub fn parse_markup(markup: &str) -> StepdeckResult<Document> {
    let content_type = detect_content_type(markup);
    let mut doc = Document::new(content_type);

    let mut reader = Reader::from_str(markup);
    // Slide markup is host-rendered and well-formed in practice, but HTML is
    // not XML: relax end-tag checks and close void elements ourselves.
    reader.config_mut().check_end_names = false;

    let mut stack: Vec<NodeId> = Vec::new();
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let tag = tag_name(e.name().as_ref());
                let attrs = collect_attrs(&e)?;
                let parent = *stack.last().unwrap_or(&doc.root());
                let id = doc.push_element(parent, tag.clone(), attrs);
                if !(content_type == ContentType::Html && VOID_TAGS.contains(&tag.as_str())) {
                    stack.push(id);
                }
            }
            Ok(Event::Empty(e)) => {
                let tag = tag_name(e.name().as_ref());
                let attrs = collect_attrs(&e)?;
                let parent = *stack.last().unwrap_or(&doc.root());
                doc.push_element(parent, tag, attrs);
            }
            Ok(Event::End(e)) => {
                let tag = tag_name(e.name().as_ref());
                // Stray end tags (e.g. `</br>`) must not unwind real elements.
                if stack
                    .last()
                    .is_some_and(|&id| doc.tag(id) == Some(tag.as_str()))
                {
                    stack.pop();
                }
            }
            Ok(Event::Text(t)) => {
                let text = t
                    .decode()
                    .map_err(|e| StepdeckError::markup(format!("unescape text: {e}")))?;
                if !text.is_empty() {
                    let parent = *stack.last().unwrap_or(&doc.root());
                    doc.push_text(parent, text.into_owned());
                }
            }
            Ok(Event::CData(c)) => {
                let text = String::from_utf8_lossy(&c).into_owned();
                if !text.is_empty() {
                    let parent = *stack.last().unwrap_or(&doc.root());
                    doc.push_text(parent, text);
                }
            }
            Ok(Event::GeneralRef(r)) => {
                let name = String::from_utf8_lossy(&r).into_owned();
                let text = resolve_reference(&name).ok_or_else(|| {
                    StepdeckError::markup(format!("unknown entity reference '&{name};'"))
                })?;
                let parent = *stack.last().unwrap_or(&doc.root());
                doc.push_text(parent, text);
            }
            Ok(Event::Decl(_) | Event::Comment(_) | Event::PI(_) | Event::DocType(_)) => {}
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(StepdeckError::markup(format!(
                    "parse markup at byte {}: {e}",
                    reader.buffer_position()
                )));
            }
        }
    }

    tracing::debug!(nodes = doc.len(), ?content_type, "parsed markup");
    Ok(doc)
}

/// Resolve a predefined or numeric character reference.
fn resolve_reference(name: &str) -> Option<String> {
    match name {
        "amp" => return Some("&".to_string()),
        "lt" => return Some("<".to_string()),
        "gt" => return Some(">".to_string()),
        "quot" => return Some("\"".to_string()),
        "apos" => return Some("'".to_string()),
        "nbsp" => return Some("\u{a0}".to_string()),
        _ => {}
    }
    let digits = name.strip_prefix('#')?;
    let code = if let Some(hex) = digits.strip_prefix('x').or_else(|| digits.strip_prefix('X')) {
        u32::from_str_radix(hex, 16).ok()?
    } else {
        digits.parse::<u32>().ok()?
    };
    char::from_u32(code).map(|c| c.to_string())
}

fn tag_name(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).to_ascii_lowercase()
}

fn collect_attrs(e: &quick_xml::events::BytesStart<'_>) -> StepdeckResult<BTreeMap<String, String>> {
    let mut attrs = BTreeMap::new();
    for attr in e.attributes().with_checks(false) {
        let attr = attr.map_err(|e| StepdeckError::markup(format!("bad attribute: {e}")))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|e| StepdeckError::markup(format!("unescape attribute: {e}")))?
            .into_owned();
        attrs.insert(key, value);
    }
    Ok(attrs)
}

#[cfg(test)]
#[path = "../../tests/unit/dom/parse.rs"]
mod tests;
