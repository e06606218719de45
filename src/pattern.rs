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

/// Top-level comma segmentation:
/// - bracket and quote aware
/// - offset-carrying `Segment` slices
pub mod segment;

/// Assignment splitting:
/// - default separators vs. arrow markers and comparisons
/// - object-entry key separators
pub mod assign;

/// The decomposed value tree (`Shape`) and its rendering.
pub mod shape;

/// Shape classification and recursive decomposition.
pub mod decompose;

/// Per-parameter descriptors.
pub mod param;

pub use assign::split_assignment;
pub use decompose::{classify, decompose, Decomposer, ShapeClass};
pub use param::{build, ParameterDescriptor};
pub use segment::{segment, Segment};
pub use shape::{DestructureKind, Leaf, Shape};

use crate::config::DescribeOptions;
use crate::error::Result;
use crate::lexer::strip_comments;

/// Decomposes a whole parameter list into descriptors, one per top-level
/// segment. Error offsets are relative to `list`.
pub fn parse_parameters(list: &str, options: &DescribeOptions) -> Result<Vec<ParameterDescriptor>> {
    let clean = strip_comments(list)?;
    let decomposer = Decomposer::new(options);

    segment::segment_spans(Segment::trimmed(&clean, 0))?
        .into_iter()
        .map(|segment| param::build_segment(segment, &decomposer))
        .collect()
}
