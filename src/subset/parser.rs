//! Subset range grammar over ordered collections.
//!
//! The grammar is independent of any document concept and operates on plain
//! positions: a spec like `"1-3,5,7-"` restricts and reorders which elements
//! of an ordered collection participate, in the order the terms are written.

use crate::foundation::error::{StepdeckError, StepdeckResult};

/// Ordering applied to the expanded position list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubsetSort {
    /// Preserve expansion order (the order terms are written).
    #[default]
    None,
    /// Ascending numeric order.
    Numeric,
    /// Positions ordered by their decimal string representation.
    Lexicographic,
}

/// Options for subset selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SubsetOptions {
    /// Result ordering; defaults to expansion order.
    pub sort: SubsetSort,
    /// Offset added to every resolved endpoint.
    ///
    /// Lets callers with a different internal base (e.g. logical position 1
    /// sitting before the collection) reuse the grammar without
    /// pre-transforming their input.
    pub shift_selector: i64,
}

/// Select 0-based indices into a collection of length `len`.
///
/// Grammar: the empty spec is the identity. Otherwise a comma-separated list
/// of terms, each one of
///
/// - `N` — the element at 1-based position `N`,
/// - `A-B` — inclusive range,
/// - `-B` — shorthand for `1-B`,
/// - `B-` — shorthand for `B-<collection end>`.
///
/// Every endpoint, explicit or synthesized, is adjusted by
/// [`SubsetOptions::shift_selector`]. A range whose resolved end is not past
/// its resolved begin is malformed. Duplicated positions stay duplicated;
/// resolved positions outside the collection are skipped.
pub fn select_subset_positions(
    spec: &str,
    len: usize,
    opts: &SubsetOptions,
) -> StepdeckResult<Vec<usize>> {
    if spec.trim().is_empty() {
        return Ok((0..len).collect());
    }

    let shift = opts.shift_selector;
    let mut positions: Vec<usize> = Vec::new();

    for term in spec.split(',') {
        let term = term.trim();
        if term.is_empty() {
            continue;
        }

        if let Some(rest) = term.strip_prefix('-') {
            // "-B" is "1-B".
            push_range(&mut positions, term, 1 + shift, parse_num(term, rest)? + shift, len)?;
        } else if let Some(rest) = term.strip_suffix('-') {
            // "B-" runs through the shift-adjusted end of the collection.
            push_range(
                &mut positions,
                term,
                parse_num(term, rest)? + shift,
                len as i64 + shift,
                len,
            )?;
        } else if let Some((a, b)) = term.split_once('-') {
            push_range(
                &mut positions,
                term,
                parse_num(term, a)? + shift,
                parse_num(term, b)? + shift,
                len,
            )?;
        } else {
            push_position(&mut positions, parse_num(term, term)? + shift, len);
        }
    }

    match opts.sort {
        SubsetSort::None => {}
        SubsetSort::Numeric => positions.sort_unstable(),
        SubsetSort::Lexicographic => positions.sort_by_key(|&i| (i + 1).to_string()),
    }
    Ok(positions)
}

/// Select elements of `elements` according to `spec`; see
/// [`select_subset_positions`] for the grammar.
pub fn select_subset<T: Clone>(
    spec: &str,
    elements: &[T],
    opts: &SubsetOptions,
) -> StepdeckResult<Vec<T>> {
    let positions = select_subset_positions(spec, elements.len(), opts)?;
    Ok(positions.into_iter().map(|i| elements[i].clone()).collect())
}

fn parse_num(term: &str, digits: &str) -> StepdeckResult<i64> {
    digits.trim().parse::<i64>().map_err(|_| {
        StepdeckError::malformed_range(format!("'{term}' is not a valid range term"))
    })
}

fn push_range(
    positions: &mut Vec<usize>,
    term: &str,
    begin: i64,
    end: i64,
    len: usize,
) -> StepdeckResult<()> {
    if end <= begin {
        return Err(StepdeckError::malformed_range(format!(
            "range '{term}' resolves to end <= begin ({end} <= {begin})"
        )));
    }
    for pos in begin..=end {
        push_position(positions, pos, len);
    }
    Ok(())
}

fn push_position(positions: &mut Vec<usize>, pos: i64, len: usize) {
    if pos >= 1 && pos <= len as i64 {
        positions.push((pos - 1) as usize);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/subset/parser.rs"]
mod tests;
