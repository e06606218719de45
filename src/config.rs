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

use serde::Deserialize;

/// Tunables for a describe call.
///
/// All fields have defaults, so a TOML document only needs to name the
/// values it changes:
///
/// ```toml
/// max_depth = 16
/// trust_declared_length = false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DescribeOptions {
    /// Deepest pattern nesting the decomposer will follow before failing.
    pub max_depth: usize,

    /// Longest superclass chain walked when a class declares no constructor.
    pub max_supertype_hops: usize,

    /// Whether the callable's externally reported declared length overrides a
    /// disagreeing computed `min_arity`.
    pub trust_declared_length: bool,
}

impl Default for DescribeOptions {
    fn default() -> Self {
        Self {
            max_depth: 64,
            max_supertype_hops: 32,
            trust_declared_length: true,
        }
    }
}

impl DescribeOptions {
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_max_supertype_hops(mut self, hops: usize) -> Self {
        self.max_supertype_hops = hops;
        self
    }

    pub fn with_trust_declared_length(mut self, trust: bool) -> Self {
        self.trust_declared_length = trust;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let options = DescribeOptions::from_toml_str("").unwrap();
        assert_eq!(options, DescribeOptions::default());
    }

    #[test]
    fn partial_document_overrides_named_fields() {
        let options = DescribeOptions::from_toml_str("max_depth = 8").unwrap();
        assert_eq!(options.max_depth, 8);
        assert_eq!(options.max_supertype_hops, 32);
        assert!(options.trust_declared_length);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(DescribeOptions::from_toml_str("max_dept = 8").is_err());
    }
}
