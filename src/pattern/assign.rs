/*
 * ==========================================================================
 * SIGSCOPE - Signatures from Source
 * ==========================================================================
 * 
 * Author:   Sam Wilcox
 * Email:    sam@pawx-lang.com
 * Website:  https://www.pawx-lang.com
 * Github:   https://github.com/samwilcox/pawx
 * 
 * License:
 * This file is part of the PAWX tooling project (sigscope).
 * 
 * Sigscope is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 * 
 * You may choose either license to govern your use of this software.
 * Full license text available at:
 *    https://license.pawx-lang.com
 * 
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * 
 * ==========================================================================
 */

use std::ops::ControlFlow;

use crate::error::Result;
use crate::lexer::scan_code;
use crate::pattern::segment::Segment;

/// Byte offsets of every top-level assignment `=` in `text`.
///
/// Comparison operators (`==`, `===`, `!=`, `<=`, `>=`) never count. An `=`
/// whose continuation starts with `>` is the first half of an arrow marker
/// and is rejoined with its left-hand piece instead of splitting.
fn assignment_cuts(text: &str) -> Result<Vec<usize>> {
    let mut cuts = Vec::new();

    scan_code(text, |offset, ch, depth| {
        if ch == '=' && depth == 0 && is_assignment(text, offset) {
            cuts.push(offset);
        }
        ControlFlow::Continue(())
    })?;

    Ok(cuts)
}

fn is_assignment(text: &str, offset: usize) -> bool {
    let before = text[..offset].chars().next_back();
    let after = &text[offset + 1..];

    if matches!(before, Some('=' | '!' | '<' | '>')) {
        return false;
    }
    if after.starts_with('=') {
        return false;
    }

    // `=>` continues an arrow-form value on the left piece.
    !after.starts_with('>')
}

/// Splits a segment at its top-level assignment separators.
///
/// One piece means the segment carries no default; two or more mean the
/// first piece is the binding and the rest, rejoined, is the default text.
pub fn split_pieces(segment: Segment<'_>) -> Result<Vec<Segment<'_>>> {
    let cuts = assignment_cuts(segment.text).map_err(|err| err.shifted(segment.offset))?;

    let mut pieces = Vec::with_capacity(cuts.len() + 1);
    let mut start = 0;
    for cut in cuts {
        pieces.push(segment.slice(start, cut));
        start = cut + 1;
    }
    pieces.push(segment.slice(start, segment.text.len()));

    Ok(pieces)
}

/// Separates the binding from its default value text, if any.
///
/// The default is everything after the first separator, verbatim, so a
/// chained `a = b = 1` reports `b = 1` as the default of `a`.
pub fn split_default(segment: Segment<'_>) -> Result<(Segment<'_>, Option<Segment<'_>>)> {
    let cuts = assignment_cuts(segment.text).map_err(|err| err.shifted(segment.offset))?;

    Ok(match cuts.first() {
        Some(&cut) => (
            segment.slice(0, cut),
            Some(segment.slice(cut + 1, segment.text.len())),
        ),
        None => (segment, None),
    })
}

/// The first top-level `:` or assignment `=` of an object-pattern entry,
/// returned as `(offset, separator)`.
pub fn entry_separator(entry: Segment<'_>) -> Result<Option<(usize, char)>> {
    let text = entry.text;
    let mut found = None;

    scan_code(text, |offset, ch, depth| {
        let separator = depth == 0
            && (ch == ':' || (ch == '=' && is_assignment(text, offset)));
        if separator {
            found = Some((offset, ch));
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    })
    .map_err(|err| err.shifted(entry.offset))?;

    Ok(found)
}

/// String form of [`split_pieces`] for callers holding plain text.
pub fn split_assignment(text: &str) -> Result<Vec<String>> {
    Ok(split_pieces(Segment::trimmed(text, 0))?
        .into_iter()
        .map(|piece| piece.text.to_string())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_name_is_one_piece() {
        assert_eq!(split_assignment("name").unwrap(), vec!["name"]);
    }

    #[test]
    fn default_is_split_once_per_separator() {
        assert_eq!(split_assignment("a = 1").unwrap(), vec!["a", "1"]);
        assert_eq!(split_assignment("a = b = 1").unwrap(), vec!["a", "b", "1"]);
    }

    #[test]
    fn arrow_values_are_not_separators() {
        let pieces = split_assignment("filter = user => user").unwrap();
        assert_eq!(pieces, vec!["filter", "user => user"]);
    }

    #[test]
    fn comparisons_are_not_separators() {
        let pieces = split_assignment("ok = a == b && c !== d || e >= f").unwrap();
        assert_eq!(pieces, vec!["ok", "a == b && c !== d || e >= f"]);
    }

    #[test]
    fn nested_equals_belong_to_the_pattern() {
        let pieces = split_assignment("{x, y = 1} = {}").unwrap();
        assert_eq!(pieces, vec!["{x, y = 1}", "{}"]);
    }

    #[test]
    fn quoted_equals_are_ignored() {
        assert_eq!(split_assignment("q = 'a=b'").unwrap(), vec!["q", "'a=b'"]);
    }

    #[test]
    fn default_text_keeps_chained_assignments() {
        let (binding, default) = split_default(Segment::trimmed("a = b = 1", 0)).unwrap();
        assert_eq!(binding.text, "a");
        assert_eq!(default.unwrap().text, "b = 1");
    }

    #[test]
    fn entry_separator_prefers_the_first_one() {
        let rename = entry_separator(Segment::trimmed("a: b = 1", 0)).unwrap();
        assert_eq!(rename, Some((1, ':')));

        let with_default = entry_separator(Segment::trimmed("a = b ? c : d", 0)).unwrap();
        assert_eq!(with_default, Some((2, '=')));

        let shorthand = entry_separator(Segment::trimmed("a", 0)).unwrap();
        assert_eq!(shorthand, None);
    }
}
