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

use crate::config::DescribeOptions;
use crate::error::{Result, SigError};
use crate::lexer::{is_identifier, literal_end, scan_code};
use crate::pattern::assign::entry_separator;
use crate::pattern::segment::{segment_spans, Segment};
use crate::pattern::shape::{DestructureKind, Leaf, Shape};

/// Marker that turns an operand into a rest/spread element.
const SPREAD: &str = "...";

/// Result of classifying a trimmed token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeClass {
    /// The whole token is one balanced `{…}` group.
    Object,
    /// The whole token is one balanced `[…]` group.
    Array,
    /// The token starts with `...`.
    Spread,
    Leaf,
}

/// Classifies `token`, validating its bracket structure on the way.
///
/// A bracket-delimited token always wins over the leaf fallback; a token
/// that merely starts with a bracket (`{}.x`) is a leaf.
pub fn classify(token: Segment<'_>) -> Result<ShapeClass> {
    let text = token.text;
    let mut first_close = None;

    scan_code(text, |offset, ch, depth| {
        if first_close.is_none() && depth == 0 && matches!(ch, '}' | ']' | ')') {
            first_close = Some(offset);
        }
        ControlFlow::Continue(())
    })
    .map_err(|err| err.shifted(token.offset))?;

    let whole_group = first_close.is_some_and(|end| end + 1 == text.len());

    Ok(match text.chars().next() {
        Some('{') if whole_group => ShapeClass::Object,
        Some('[') if whole_group => ShapeClass::Array,
        _ if text.starts_with(SPREAD) => ShapeClass::Spread,
        _ => ShapeClass::Leaf,
    })
}

/// Recursive pattern decomposer with an explicit nesting limit.
#[derive(Debug, Clone, Copy)]
pub struct Decomposer {
    max_depth: usize,
}

impl Default for Decomposer {
    fn default() -> Self {
        Self::new(&DescribeOptions::default())
    }
}

impl Decomposer {
    pub fn new(options: &DescribeOptions) -> Self {
        Self {
            max_depth: options.max_depth,
        }
    }

    pub fn decompose(&self, token: Segment<'_>) -> Result<Shape> {
        self.shape_at(token, 0)
    }

    fn shape_at(&self, token: Segment<'_>, depth: usize) -> Result<Shape> {
        if depth > self.max_depth {
            return Err(SigError::decomposition_failure(format!(
                "pattern nesting exceeds the limit of {}",
                self.max_depth
            ))
            .at(token.offset)
            .with_help("raise `max_depth` in the describe options"));
        }

        match classify(token)? {
            ShapeClass::Object => self.mapping(token, depth),
            ShapeClass::Array => self.sequence(token, depth),
            ShapeClass::Spread => {
                let operand = token.slice(SPREAD.len(), token.text.len());
                if operand.is_empty() {
                    return Err(SigError::unknown_shape("spread marker without an operand")
                        .at(token.offset));
                }
                Ok(Shape::Spread(Box::new(self.shape_at(operand, depth + 1)?)))
            }
            ShapeClass::Leaf => Ok(Shape::Leaf(leaf(token.text))),
        }
    }

    fn sequence(&self, token: Segment<'_>, depth: usize) -> Result<Shape> {
        let inner = token.slice(1, token.text.len() - 1);
        let mut items = Vec::new();

        for element in segment_spans(inner)? {
            if element.is_empty() {
                items.push(Shape::text(""));
            } else {
                items.push(self.shape_at(element, depth + 1)?);
            }
        }

        Ok(Shape::Sequence(items))
    }

    fn mapping(&self, token: Segment<'_>, depth: usize) -> Result<Shape> {
        let inner = token.slice(1, token.text.len() - 1);
        let mut entries = Vec::new();

        for entry in segment_spans(inner)? {
            if entry.is_empty() {
                return Err(SigError::unknown_shape("empty entry in object pattern").at(entry.offset));
            }

            if entry.text.starts_with(SPREAD) {
                let key = entry.text[SPREAD.len()..].trim();
                if !is_identifier(key) {
                    return Err(SigError::unknown_shape(format!(
                        "'{}' cannot collect the rest of an object pattern",
                        key
                    ))
                    .at(entry.offset)
                    .with_help("an object rest entry must be a plain identifier"));
                }
                let value = self.shape_at(entry, depth + 1)?;
                entries.push((key.to_string(), Some(value)));
                continue;
            }

            let (key, value) = match entry_separator(entry)? {
                None => (entry.text, None),
                Some((at, separator)) => {
                    let value = entry.slice(at + 1, entry.text.len());
                    if value.is_empty() {
                        return Err(SigError::unknown_shape(format!(
                            "object entry has '{}' but no value",
                            separator
                        ))
                        .at(entry.offset + at));
                    }
                    (entry.text[..at].trim(), Some(self.shape_at(value, depth + 1)?))
                }
            };

            if key.is_empty() {
                return Err(SigError::unknown_shape("object entry without a key").at(entry.offset));
            }
            entries.push((key.to_string(), value));
        }

        Ok(Shape::Mapping(entries))
    }
}

/// Builds a leaf from a token that is not a pattern.
fn leaf(text: &str) -> Leaf {
    match text {
        "true" => Leaf::Bool(true),
        "false" => Leaf::Bool(false),
        _ => match quoted_literal(text) {
            Some((quote, inner)) => Leaf::Text {
                text: inner.to_string(),
                quote: Some(quote),
            },
            None => Leaf::Text {
                text: text.to_string(),
                quote: None,
            },
        },
    }
}

/// Returns the interior of `text` when the whole of it is one quoted literal.
/// `'a' + 'b'` starts and ends with a quote but is not one literal.
fn quoted_literal(text: &str) -> Option<(char, &str)> {
    let quote = text.chars().next()?;
    let end = literal_end(text)?;
    (end + 1 == text.len()).then(|| (quote, &text[1..end]))
}

/// String form of [`Decomposer::decompose`] with default options.
pub fn decompose(token: &str) -> Result<(Shape, DestructureKind)> {
    let shape = Decomposer::default().decompose(Segment::trimmed(token, 0))?;
    let kind = shape.kind();
    Ok((shape, kind))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn quoted(text: &str, quote: char) -> Shape {
        Shape::Leaf(Leaf::Text {
            text: text.to_string(),
            quote: Some(quote),
        })
    }

    #[test]
    fn classification_order() {
        let class = |text| classify(Segment::trimmed(text, 0)).unwrap();
        assert_eq!(class("{a, b}"), ShapeClass::Object);
        assert_eq!(class("[a, b]"), ShapeClass::Array);
        assert_eq!(class("...rest"), ShapeClass::Spread);
        assert_eq!(class("name"), ShapeClass::Leaf);
        assert_eq!(class("{}.toString()"), ShapeClass::Leaf);
        assert_eq!(class("[a][0]"), ShapeClass::Leaf);
    }

    #[test]
    fn nested_arrays() {
        let (shape, kind) = decompose("[a, [b, c]]").unwrap();
        assert_eq!(kind, DestructureKind::Array);
        assert_eq!(
            shape,
            Shape::Sequence(vec![
                Shape::text("a"),
                Shape::Sequence(vec![Shape::text("b"), Shape::text("c")]),
            ])
        );
        assert_eq!(shape.depth(), 2);
    }

    #[test]
    fn object_entries_keep_defaults_and_renames() {
        let (shape, kind) = decompose("{x, y = 1, z: w, f = user => user, o = {p: true}}").unwrap();
        assert_eq!(kind, DestructureKind::Object);
        assert_eq!(
            shape,
            Shape::Mapping(vec![
                ("x".to_string(), None),
                ("y".to_string(), Some(Shape::text("1"))),
                ("z".to_string(), Some(Shape::text("w"))),
                ("f".to_string(), Some(Shape::text("user => user"))),
                (
                    "o".to_string(),
                    Some(Shape::Mapping(vec![(
                        "p".to_string(),
                        Some(Shape::Leaf(Leaf::Bool(true)))
                    )]))
                ),
            ])
        );
    }

    #[test]
    fn empty_containers() {
        assert_eq!(decompose("{}").unwrap().0, Shape::Mapping(vec![]));
        assert_eq!(decompose("[ ]").unwrap().0, Shape::Sequence(vec![]));
    }

    #[test]
    fn quotes_are_stripped_but_remembered() {
        let (shape, _) = decompose(r#"['what\'s up', "]", `t`, 'true']"#).unwrap();
        assert_eq!(
            shape,
            Shape::Sequence(vec![
                quoted(r"what\'s up", '\''),
                quoted("]", '"'),
                quoted("t", '`'),
                quoted("true", '\''),
            ])
        );
    }

    #[test]
    fn concatenation_is_not_a_single_literal() {
        let (shape, _) = decompose("'a' + 'b'").unwrap();
        assert_eq!(shape, Shape::text("'a' + 'b'"));
    }

    #[test]
    fn spread_wraps_its_operand() {
        let (shape, kind) = decompose("...[a, b]").unwrap();
        assert_eq!(kind, DestructureKind::Spread);
        assert_eq!(
            shape,
            Shape::Spread(Box::new(Shape::Sequence(vec![Shape::text("a"), Shape::text("b")])))
        );
    }

    #[test]
    fn object_rest_entry_maps_to_spread() {
        let (shape, _) = decompose("{a, ...others}").unwrap();
        assert_eq!(
            shape,
            Shape::Mapping(vec![
                ("a".to_string(), None),
                (
                    "others".to_string(),
                    Some(Shape::Spread(Box::new(Shape::text("others"))))
                ),
            ])
        );
    }

    #[test]
    fn object_rest_entry_must_be_an_identifier() {
        for source in ["{...rest = 1}", "{a, ...[b]}", "{...}", "{...class}"] {
            let err = decompose(source).unwrap_err();
            assert_eq!(err.kind, ErrorKind::UnknownShape, "{source}");
        }
    }

    #[test]
    fn array_holes_are_empty_leaves() {
        let (shape, _) = decompose("[, b]").unwrap();
        assert_eq!(shape, Shape::Sequence(vec![Shape::text(""), Shape::text("b")]));
    }

    #[test]
    fn mismatched_brackets_fail() {
        let err = decompose("{a, [b}").unwrap_err();
        assert_eq!(err.kind, ErrorKind::DecompositionFailure);
    }

    #[test]
    fn unterminated_quote_fails() {
        let err = decompose("['abc]").unwrap_err();
        assert_eq!(err.kind, ErrorKind::DecompositionFailure);
        assert_eq!(err.offset, Some(1));
    }

    #[test]
    fn empty_object_entry_is_unknown() {
        let err = decompose("{a, , b}").unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnknownShape);

        let err = decompose("{: b}").unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnknownShape);
    }

    #[test]
    fn nesting_limit_is_enforced() {
        let deep = format!("{}x{}", "[".repeat(10), "]".repeat(10));
        let shallow = Decomposer::new(&DescribeOptions::default().with_max_depth(4));

        let err = shallow.decompose(Segment::trimmed(&deep, 0)).unwrap_err();
        assert_eq!(err.kind, ErrorKind::DecompositionFailure);
        assert!(Decomposer::default().decompose(Segment::trimmed(&deep, 0)).is_ok());
    }

    #[test]
    fn rendering_round_trips() {
        for source in [
            "{x, y = 1, z: [a, , b], ...rest}",
            "[a, [b, c], 'q, r', true]",
            "{f = user => user, s = 'x'}",
        ] {
            let (shape, _) = decompose(source).unwrap();
            let (again, _) = decompose(&shape.to_string()).unwrap();
            assert_eq!(shape, again, "{source}");
        }
    }
}
