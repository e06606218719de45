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

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};

/// Anything whose serialized source text can be described.
///
/// Implementors stand in for the host's "stringify callable" facility. The
/// optional hooks mirror what hosts commonly report alongside the text.
pub trait Callable {
    /// Serialized source, or `None` for opaque/native callables.
    fn source_text(&self) -> Option<Cow<'_, str>>;

    /// Externally reported name, used when the source carries none
    /// (arrow functions, anonymous classes).
    fn name(&self) -> Option<&str> {
        None
    }

    /// Externally reported count of leading required parameters.
    fn declared_length(&self) -> Option<usize> {
        None
    }
}

impl Callable for str {
    fn source_text(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self))
    }
}

impl Callable for String {
    fn source_text(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self.as_str()))
    }
}

impl<T: Callable + ?Sized> Callable for &T {
    fn source_text(&self) -> Option<Cow<'_, str>> {
        (**self).source_text()
    }

    fn name(&self) -> Option<&str> {
        (**self).name()
    }

    fn declared_length(&self) -> Option<usize> {
        (**self).declared_length()
    }
}

/// An owned callable record: source text plus the optional host metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceCallable {
    source: Option<String>,
    name: Option<String>,
    declared_length: Option<usize>,
}

impl SourceCallable {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: Some(source.into()),
            ..Self::default()
        }
    }

    /// A callable without inspectable source (host-native code).
    pub fn opaque() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_declared_length(mut self, length: usize) -> Self {
        self.declared_length = Some(length);
        self
    }
}

impl Callable for SourceCallable {
    fn source_text(&self) -> Option<Cow<'_, str>> {
        self.source.as_deref().map(Cow::Borrowed)
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn declared_length(&self) -> Option<usize> {
        self.declared_length
    }
}

/// Resolves a declared supertype reference (the text after `extends`) to
/// that type's source.
///
/// Lookups are by reference only; the registry owns nothing the describer
/// keeps.
pub trait SupertypeRegistry {
    fn source_of(&self, name: &str) -> Option<Cow<'_, str>>;
}

/// A registry that knows no types.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSupertypes;

impl SupertypeRegistry for NoSupertypes {
    fn source_of(&self, _name: &str) -> Option<Cow<'_, str>> {
        None
    }
}

impl SupertypeRegistry for HashMap<String, String> {
    fn source_of(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).map(|source| Cow::Borrowed(source.as_str()))
    }
}

impl SupertypeRegistry for BTreeMap<String, String> {
    fn source_of(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).map(|source| Cow::Borrowed(source.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_a_callable() {
        let source = "function f(a) {}";
        assert_eq!(source.source_text().as_deref(), Some(source));
        assert_eq!(source.name(), None);
    }

    #[test]
    fn opaque_callable_has_no_source() {
        let callable = SourceCallable::opaque().with_name("push");
        assert!(callable.source_text().is_none());
        assert_eq!(callable.name(), Some("push"));
    }

    #[test]
    fn map_registries_resolve_by_name() {
        let mut registry = HashMap::new();
        registry.insert("Base".to_string(), "class Base {}".to_string());
        assert_eq!(registry.source_of("Base").as_deref(), Some("class Base {}"));
        assert!(registry.source_of("Other").is_none());
        assert!(NoSupertypes.source_of("Base").is_none());
    }
}
