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

use tracing::trace;

use crate::error::Result;
use crate::lexer::scan_code;

/// A trimmed slice of the analysed text, remembering where it started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,

    /// Byte offset of `text` within the analysed input.
    pub offset: usize,
}

impl<'a> Segment<'a> {
    /// Wraps `text` found at `offset`, trimming surrounding whitespace.
    pub fn trimmed(text: &'a str, offset: usize) -> Self {
        let lead = text.len() - text.trim_start().len();
        Self {
            text: text.trim(),
            offset: offset + lead,
        }
    }

    /// Trimmed sub-slice by local byte range.
    pub fn slice(&self, start: usize, end: usize) -> Self {
        Self::trimmed(&self.text[start..end], self.offset + start)
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Splits `text` on top-level commas.
///
/// Whitespace-only input yields no segments. A trailing comma after at least
/// one segment is tolerated and does not add an empty segment; any other
/// empty segment (`a, , b`) is kept so that callers decide what it means.
pub fn segment_spans(list: Segment<'_>) -> Result<Vec<Segment<'_>>> {
    let text = list.text;
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut cuts = Vec::new();
    scan_code(text, |offset, ch, depth| {
        if ch == ',' && depth == 0 {
            cuts.push(offset);
        }
        ControlFlow::Continue(())
    })
    .map_err(|err| err.shifted(list.offset))?;

    let mut segments = Vec::with_capacity(cuts.len() + 1);
    let mut start = 0;
    for &cut in &cuts {
        segments.push(list.slice(start, cut));
        start = cut + 1;
    }

    let tail = list.slice(start, text.len());
    if !(tail.is_empty() && !cuts.is_empty()) {
        segments.push(tail);
    }

    trace!(segments = segments.len(), "segmented list");
    Ok(segments)
}

/// String form of [`segment_spans`] for callers holding plain text.
pub fn segment(text: &str) -> Result<Vec<String>> {
    Ok(segment_spans(Segment::trimmed(text, 0))?
        .into_iter()
        .map(|segment| segment.text.to_string())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn splits_flat_list() {
        assert_eq!(segment("a, b, c").unwrap(), vec!["a", "b", "c"]);
    }

    #[test]
    fn empty_input_has_no_segments() {
        assert!(segment("").unwrap().is_empty());
        assert!(segment("  \n\t ").unwrap().is_empty());
    }

    #[test]
    fn nested_commas_stay_in_their_segment() {
        let segments = segment("{a, b} = {}, [c, [d, e]], f = g(1, 2)").unwrap();
        assert_eq!(segments, vec!["{a, b} = {}", "[c, [d, e]]", "f = g(1, 2)"]);
    }

    #[test]
    fn quoted_commas_and_brackets_are_ignored() {
        let segments = segment(r#"a = 'x, y', b = "[", c"#).unwrap();
        assert_eq!(segments, vec!["a = 'x, y'", "b = \"[\"", "c"]);
    }

    #[test]
    fn trailing_comma_is_tolerated() {
        assert_eq!(segment("a, b,").unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn interior_empty_segment_is_kept() {
        assert_eq!(segment("a, , b").unwrap(), vec!["a", "", "b"]);
    }

    #[test]
    fn offsets_point_into_the_input() {
        let spans = segment_spans(Segment::trimmed("  a,   bb", 10)).unwrap();
        assert_eq!(spans[0], Segment { text: "a", offset: 12 });
        assert_eq!(spans[1], Segment { text: "bb", offset: 17 });
    }

    #[test]
    fn mismatch_is_a_decomposition_failure() {
        let err = segment("a, [b)").unwrap_err();
        assert_eq!(err.kind, ErrorKind::DecompositionFailure);
        assert_eq!(err.offset, Some(5));
    }
}
