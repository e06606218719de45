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

use std::fmt;

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

/// How a parameter binds its argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DestructureKind {
    /// A bare identifier.
    None,
    Array,
    Object,
    /// A rest parameter collecting the remaining arguments.
    Spread,
}

/// A terminal token of a decomposed pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Leaf {
    /// Unquoted `true` / `false`, the only coercion performed.
    Bool(bool),

    /// Any other text, verbatim. A single surrounding quote pair is stripped
    /// and remembered so the leaf renders back to its source form.
    Text { text: String, quote: Option<char> },
}

/// The decomposed structure of a parameter pattern or default value.
///
/// Shapes are plain owned trees; nothing is shared between parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    Leaf(Leaf),

    /// `[a, [b, c]]`; elisions are empty text leaves.
    Sequence(Vec<Shape>),

    /// `{key: value, shorthand}` in declaration order. Shorthand entries
    /// carry no value; rest entries map their name to a spread.
    Mapping(Vec<(String, Option<Shape>)>),

    /// `...operand`
    Spread(Box<Shape>),
}

impl Shape {
    /// An unquoted text leaf.
    pub fn text(text: impl Into<String>) -> Self {
        Shape::Leaf(Leaf::Text {
            text: text.into(),
            quote: None,
        })
    }

    pub fn kind(&self) -> DestructureKind {
        match self {
            Shape::Leaf(_) => DestructureKind::None,
            Shape::Sequence(_) => DestructureKind::Array,
            Shape::Mapping(_) => DestructureKind::Object,
            Shape::Spread(_) => DestructureKind::Spread,
        }
    }

    /// The text of an unquoted text leaf.
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Shape::Leaf(Leaf::Text { text, quote: None }) => Some(text),
            _ => None,
        }
    }

    pub fn is_hole(&self) -> bool {
        matches!(self, Shape::Leaf(Leaf::Text { text, quote: None }) if text.is_empty())
    }

    /// Nesting depth of sequences and mappings; leaves are depth zero.
    pub fn depth(&self) -> usize {
        match self {
            Shape::Leaf(_) => 0,
            Shape::Sequence(items) => 1 + items.iter().map(Shape::depth).max().unwrap_or(0),
            Shape::Mapping(entries) => {
                1 + entries
                    .iter()
                    .filter_map(|(_, value)| value.as_ref().map(Shape::depth))
                    .max()
                    .unwrap_or(0)
            }
            Shape::Spread(inner) => inner.depth(),
        }
    }
}

impl fmt::Display for Leaf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Leaf::Bool(value) => write!(f, "{}", value),
            Leaf::Text { text, quote: Some(q) } => write!(f, "{q}{text}{q}"),
            Leaf::Text { text, quote: None } => f.write_str(text),
        }
    }
}

/// Renders the shape as pattern source. Decomposing the rendering yields an
/// equal shape.
impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Leaf(leaf) => fmt::Display::fmt(leaf, f),

            Shape::Sequence(items) => {
                f.write_str("[")?;
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    fmt::Display::fmt(item, f)?;
                }
                // `[a, ]` would lose a trailing elision
                if items.last().is_some_and(Shape::is_hole) {
                    f.write_str(",")?;
                }
                f.write_str("]")
            }

            Shape::Mapping(entries) => {
                f.write_str("{")?;
                for (idx, (key, value)) in entries.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    match value {
                        None => f.write_str(key)?,
                        Some(Shape::Spread(inner)) if inner.as_name() == Some(key.as_str()) => {
                            write!(f, "...{}", key)?
                        }
                        Some(value) => write!(f, "{}: {}", key, value)?,
                    }
                }
                f.write_str("}")
            }

            Shape::Spread(inner) => write!(f, "...{}", inner),
        }
    }
}

impl Serialize for Shape {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Shape::Leaf(Leaf::Bool(value)) => serializer.serialize_bool(*value),
            Shape::Leaf(Leaf::Text { text, .. }) => serializer.serialize_str(text),

            Shape::Sequence(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }

            Shape::Mapping(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }

            Shape::Spread(_) => serializer.collect_str(self),
        }
    }
}
