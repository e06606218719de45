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

use serde::{Serialize, Serializer};

use crate::error::{Result, SigError};
use crate::pattern::ParameterDescriptor;
use crate::signature::extract::Extraction;

/// Upper bound on accepted arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaxArity {
    Bounded(usize),
    /// A rest parameter accepts any number of trailing arguments.
    Unbounded,
}

impl MaxArity {
    pub fn admits(self, count: usize) -> bool {
        match self {
            MaxArity::Bounded(max) => count <= max,
            MaxArity::Unbounded => true,
        }
    }
}

impl fmt::Display for MaxArity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaxArity::Bounded(max) => write!(f, "{}", max),
            MaxArity::Unbounded => f.write_str("unbounded"),
        }
    }
}

impl Serialize for MaxArity {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            MaxArity::Bounded(max) => serializer.serialize_u64(*max as u64),
            MaxArity::Unbounded => serializer.serialize_str("unbounded"),
        }
    }
}

/// The full description of one callable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureDescriptor {
    pub name: String,
    pub is_async: bool,
    pub is_arrow_form: bool,
    pub is_generator_form: bool,
    pub is_class_form: bool,
    pub parameters: Vec<ParameterDescriptor>,
    pub min_arity: usize,
    pub max_arity: MaxArity,
}

impl SignatureDescriptor {
    /// Whether a call with `count` arguments satisfies the arity bounds.
    pub fn accepts(&self, count: usize) -> bool {
        count >= self.min_arity && self.max_arity.admits(count)
    }

    pub fn has_spread(&self) -> bool {
        self.parameters.iter().any(ParameterDescriptor::is_spread)
    }

    /// Pretty-printed JSON, keys in declaration order.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Leading parameters that are neither defaulted nor rest. Counting stops at
/// the first one that is, even if required-looking parameters follow.
pub fn min_arity(parameters: &[ParameterDescriptor]) -> usize {
    parameters
        .iter()
        .take_while(|param| param.is_required())
        .count()
}

pub fn max_arity(parameters: &[ParameterDescriptor]) -> MaxArity {
    if parameters.iter().any(ParameterDescriptor::is_spread) {
        MaxArity::Unbounded
    } else {
        MaxArity::Bounded(parameters.len())
    }
}

/// Combines the extractor's flags with the built parameters.
pub fn assemble(extraction: Extraction, parameters: Vec<ParameterDescriptor>) -> Result<SignatureDescriptor> {
    if let Some(position) = parameters.iter().position(ParameterDescriptor::is_spread) {
        if position + 1 != parameters.len() {
            return Err(SigError::decomposition_failure(format!(
                "rest parameter '{}' must be the last parameter",
                parameters[position].name
            ))
            .with_help("move the rest parameter to the end of the list"));
        }
    }

    Ok(SignatureDescriptor {
        min_arity: min_arity(&parameters),
        max_arity: max_arity(&parameters),
        name: extraction.name,
        is_async: extraction.is_async,
        is_arrow_form: extraction.is_arrow_form,
        is_generator_form: extraction.is_generator_form,
        is_class_form: extraction.is_class_form,
        parameters,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DescribeOptions;
    use crate::error::ErrorKind;
    use crate::pattern::parse_parameters;

    fn params(list: &str) -> Vec<ParameterDescriptor> {
        parse_parameters(list, &DescribeOptions::default()).unwrap()
    }

    #[test]
    fn arity_of_plain_list() {
        let list = params("a, b, c");
        assert_eq!(min_arity(&list), 3);
        assert_eq!(max_arity(&list), MaxArity::Bounded(3));
    }

    #[test]
    fn min_arity_stops_at_first_default() {
        let list = params("a, b = 1, c");
        assert_eq!(min_arity(&list), 1);
        assert_eq!(max_arity(&list), MaxArity::Bounded(3));
    }

    #[test]
    fn spread_is_unbounded() {
        let descriptor = assemble(Extraction::default(), params("name, ...rest")).unwrap();
        assert_eq!(descriptor.min_arity, 1);
        assert_eq!(descriptor.max_arity, MaxArity::Unbounded);
        assert!(descriptor.accepts(1));
        assert!(descriptor.accepts(40));
        assert!(!descriptor.accepts(0));
    }

    #[test]
    fn spread_must_be_last() {
        let err = assemble(Extraction::default(), params("...rest, last")).unwrap_err();
        assert_eq!(err.kind, ErrorKind::DecompositionFailure);
    }

    #[test]
    fn max_arity_serializes_as_number_or_marker() {
        assert_eq!(serde_json::to_string(&MaxArity::Bounded(2)).unwrap(), "2");
        assert_eq!(serde_json::to_string(&MaxArity::Unbounded).unwrap(), "\"unbounded\"");
        assert_eq!(MaxArity::Unbounded.to_string(), "unbounded");
    }

    #[test]
    fn json_uses_camel_case_keys() {
        let descriptor = assemble(Extraction::default(), params("a = 1")).unwrap();
        let json = descriptor.to_json().unwrap();
        assert!(json.contains("\"minArity\": 0"));
        assert!(json.contains("\"maxArity\": 1"));
        assert!(json.contains("\"defaultSource\": \"1\""));
        assert!(json.contains("\"destructureKind\": \"none\""));
    }
}
