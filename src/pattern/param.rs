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

use serde::Serialize;

use crate::config::DescribeOptions;
use crate::error::{Result, SigError};
use crate::lexer::{is_identifier, strip_comments};
use crate::pattern::assign::split_default;
use crate::pattern::decompose::Decomposer;
use crate::pattern::segment::Segment;
use crate::pattern::shape::{DestructureKind, Shape};

/// Represents **one declared parameter** of a callable.
///
/// ```text
/// name            -> { name: "name", kind: none }
/// {x, y = 1} = {} -> { name: "",     kind: object, has_default }
/// ...rest         -> { name: "rest", kind: spread }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterDescriptor {
    /// Bound identifier; empty for array/object patterns and for a spread
    /// over a pattern.
    pub name: String,

    /// Full decomposition of the binding.
    pub raw_shape: Shape,

    pub destructure_kind: DestructureKind,

    pub has_default: bool,

    /// Verbatim text of the default expression. Never evaluated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_source: Option<String>,
}

impl ParameterDescriptor {
    pub fn is_spread(&self) -> bool {
        self.destructure_kind == DestructureKind::Spread
    }

    /// Neither defaulted nor rest.
    pub fn is_required(&self) -> bool {
        !self.has_default && !self.is_spread()
    }
}

/// Builds a descriptor from one comment-free parameter segment.
pub fn build_segment(segment: Segment<'_>, decomposer: &Decomposer) -> Result<ParameterDescriptor> {
    let (binding, default) = split_default(segment)?;

    if binding.is_empty() {
        return Err(SigError::unknown_shape("parameter has no name or pattern")
            .at(binding.offset)
            .with_help("remove the stray ',' or '=' from the parameter list"));
    }

    if let Some(default) = default.filter(|default| default.is_empty()) {
        return Err(SigError::unknown_shape("default value is missing after '='")
            .at(default.offset)
            .with_help("give the parameter a default expression or drop the '='"));
    }

    let raw_shape = decomposer.decompose(binding)?;
    let destructure_kind = raw_shape.kind();

    let name = match &raw_shape {
        Shape::Leaf(_) => bindable_name(&raw_shape, binding)?,
        Shape::Spread(inner) => match inner.as_ref() {
            Shape::Sequence(_) | Shape::Mapping(_) => String::new(),
            other => bindable_name(other, binding)?,
        },
        Shape::Sequence(_) | Shape::Mapping(_) => String::new(),
    };

    if destructure_kind == DestructureKind::Spread {
        if let Some(default) = default {
            return Err(SigError::decomposition_failure("a rest parameter cannot have a default")
                .at(default.offset));
        }
    }

    Ok(ParameterDescriptor {
        name,
        raw_shape,
        destructure_kind,
        has_default: default.is_some(),
        default_source: default.map(|text| text.text.to_string()),
    })
}

fn bindable_name(shape: &Shape, binding: Segment<'_>) -> Result<String> {
    match shape.as_name() {
        Some(name) if is_identifier(name) => Ok(name.to_string()),
        _ => Err(SigError::unknown_shape(format!(
            "'{}' is not a bindable parameter name",
            binding.text
        ))
        .at(binding.offset)),
    }
}

/// Builds a descriptor from a raw parameter clause, comments included.
pub fn build(raw: &str) -> Result<ParameterDescriptor> {
    let clean = strip_comments(raw)?;
    build_segment(
        Segment::trimmed(&clean, 0),
        &Decomposer::new(&DescribeOptions::default()),
    )
}
