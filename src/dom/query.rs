use crate::{
    dom::document::{Document, NodeId},
    foundation::error::{StepdeckError, StepdeckResult},
};

/// One attribute test inside a compound selector.
#[derive(Clone, Debug, PartialEq, Eq)]
struct AttrTest {
    name: String,
    value: Option<String>,
}

/// A compound selector: optional tag plus id/class/attribute tests.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<AttrTest>,
}

/// Parsed node query.
///
/// Supports the selector subset slide authoring actually uses: comma-separated
/// compounds of `tag`, `#id`, `.class`, `[attr]` and `[attr="value"]`.
/// Combinators are not supported and fail at parse time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Query {
    groups: Vec<Compound>,
}

impl Query {
    /// Parse a query string.
    pub fn parse(query: &str) -> StepdeckResult<Self> {
        if query.trim().is_empty() {
            return Err(StepdeckError::markup("query must be non-empty"));
        }
        let groups = query
            .split(',')
            .map(parse_compound)
            .collect::<StepdeckResult<Vec<_>>>()?;
        Ok(Self { groups })
    }

    /// True when any compound of the query matches the node.
    pub fn matches(&self, doc: &Document, id: NodeId) -> bool {
        if !doc.is_element(id) {
            return false;
        }
        self.groups.iter().any(|c| compound_matches(c, doc, id))
    }
}

/// Collect all matching nodes in document order.
pub fn query_all(doc: &Document, query: &Query) -> Vec<NodeId> {
    doc.descendants(doc.root())
        .into_iter()
        .filter(|&id| query.matches(doc, id))
        .collect()
}

fn compound_matches(c: &Compound, doc: &Document, id: NodeId) -> bool {
    if let Some(tag) = &c.tag
        && doc.tag(id) != Some(tag.as_str())
    {
        return false;
    }
    if let Some(want) = &c.id
        && doc.attr(id, "id") != Some(want.as_str())
    {
        return false;
    }
    if !c.classes.iter().all(|class| doc.has_class(id, class)) {
        return false;
    }
    c.attrs.iter().all(|t| match &t.value {
        Some(v) => doc.attr(id, &t.name) == Some(v.as_str()),
        None => doc.attr(id, &t.name).is_some(),
    })
}

fn parse_compound(part: &str) -> StepdeckResult<Compound> {
    let part = part.trim();
    if part.is_empty() {
        return Err(StepdeckError::markup("empty selector in query"));
    }
    if part.contains(char::is_whitespace) {
        return Err(StepdeckError::markup(format!(
            "combinators are not supported in query '{part}'"
        )));
    }

    let mut compound = Compound::default();
    let mut chars = part.char_indices().peekable();

    if let Some(&(_, c)) = chars.peek()
        && is_ident_char(c)
    {
        compound.tag = Some(take_ident(part, &mut chars)?.to_ascii_lowercase());
    }

    while let Some((i, c)) = chars.next() {
        match c {
            '#' => {
                let id = take_ident(part, &mut chars)?;
                compound.id = Some(id);
            }
            '.' => {
                let class = take_ident(part, &mut chars)?;
                compound.classes.push(class);
            }
            '[' => {
                let test = take_attr_test(part, &mut chars)?;
                compound.attrs.push(test);
            }
            _ => {
                return Err(StepdeckError::markup(format!(
                    "unexpected '{c}' at offset {i} in query '{part}'"
                )));
            }
        }
    }
    Ok(compound)
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == ':'
}

fn take_ident(
    part: &str,
    chars: &mut std::iter::Peekable<std::str::CharIndices<'_>>,
) -> StepdeckResult<String> {
    let mut ident = String::new();
    while let Some(&(_, c)) = chars.peek() {
        if !is_ident_char(c) {
            break;
        }
        ident.push(c);
        chars.next();
    }
    if ident.is_empty() {
        return Err(StepdeckError::markup(format!(
            "expected identifier in query '{part}'"
        )));
    }
    Ok(ident)
}

fn take_attr_test(
    part: &str,
    chars: &mut std::iter::Peekable<std::str::CharIndices<'_>>,
) -> StepdeckResult<AttrTest> {
    let name = take_ident(part, chars)?;
    match chars.next() {
        Some((_, ']')) => Ok(AttrTest { name, value: None }),
        Some((_, '=')) => {
            if !matches!(chars.next(), Some((_, '"'))) {
                return Err(StepdeckError::markup(format!(
                    "attribute value must be double-quoted in query '{part}'"
                )));
            }
            let mut value = String::new();
            for (_, c) in chars.by_ref() {
                if c == '"' {
                    break;
                }
                value.push(c);
            }
            if !matches!(chars.next(), Some((_, ']'))) {
                return Err(StepdeckError::markup(format!(
                    "unterminated attribute test in query '{part}'"
                )));
            }
            Ok(AttrTest {
                name,
                value: Some(value),
            })
        }
        _ => Err(StepdeckError::markup(format!(
            "unterminated attribute test in query '{part}'"
        ))),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/dom/query.rs"]
mod tests;
