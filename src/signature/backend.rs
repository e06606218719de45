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

use tracing::{debug, warn};

use crate::config::DescribeOptions;
use crate::error::{Result, SigError};
use crate::pattern::parse_parameters;
use crate::signature::assemble::{assemble, SignatureDescriptor};
use crate::signature::class::{extract, inherited_error};
use crate::signature::extract::Extraction;
use crate::source::{Callable, NoSupertypes, SupertypeRegistry};

/// Anything that can turn a callable into a [`SignatureDescriptor`].
///
/// Backends must agree structurally on every input they both accept, so
/// callers can swap one for another.
pub trait SignatureBackend {
    fn describe(
        &self,
        callable: &dyn Callable,
        registry: &dyn SupertypeRegistry,
    ) -> Result<SignatureDescriptor>;
}

/// Describes callables from their serialized source text.
#[derive(Debug, Clone, Default)]
pub struct TextBackend {
    options: DescribeOptions,
}

impl TextBackend {
    pub fn new(options: DescribeOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &DescribeOptions {
        &self.options
    }
}

impl SignatureBackend for TextBackend {
    fn describe(
        &self,
        callable: &dyn Callable,
        registry: &dyn SupertypeRegistry,
    ) -> Result<SignatureDescriptor> {
        let source = callable.source_text().ok_or_else(|| {
            SigError::not_inspectable("callable has no inspectable source text")
                .with_help("native and host-provided callables cannot be described")
        })?;

        let extraction = extract(&source, registry, &self.options)?;

        let parameters = parse_parameters(&extraction.parameters.text, &self.options).map_err(|err| {
            let err = err.shifted(extraction.parameters.offset);
            match &extraction.inherited_from {
                Some(supertype) => inherited_error(err, supertype),
                None => err,
            }
        })?;

        let name = match (extraction.name.is_empty(), callable.name()) {
            (true, Some(reported)) => reported.to_string(),
            _ => extraction.name.clone(),
        };

        let descriptor = assemble(Extraction { name, ..extraction }, parameters)?;

        debug!(
            name = %descriptor.name,
            form = form_label(&descriptor),
            parameters = descriptor.parameters.len(),
            "described callable"
        );

        Ok(reconcile(descriptor, callable.declared_length(), &self.options))
    }
}

/// Cross-checks the computed minimum arity against the host-reported
/// declared length. Rest parameters make the hint meaningless, so it is
/// ignored when one is present.
fn reconcile(
    descriptor: SignatureDescriptor,
    declared: Option<usize>,
    options: &DescribeOptions,
) -> SignatureDescriptor {
    let Some(declared) = declared else {
        return descriptor;
    };
    if descriptor.has_spread() || declared == descriptor.min_arity {
        return descriptor;
    }

    warn!(
        name = %descriptor.name,
        declared,
        computed = descriptor.min_arity,
        "declared length disagrees with computed minimum arity"
    );

    if options.trust_declared_length && declared <= descriptor.parameters.len() {
        SignatureDescriptor {
            min_arity: declared,
            ..descriptor
        }
    } else {
        descriptor
    }
}

fn form_label(descriptor: &SignatureDescriptor) -> &'static str {
    if descriptor.is_class_form {
        "class"
    } else if descriptor.is_arrow_form {
        "arrow"
    } else if descriptor.is_generator_form {
        "generator"
    } else {
        "function"
    }
}

/// Describes `callable` with default options.
pub fn describe_signature(
    callable: &dyn Callable,
    registry: &dyn SupertypeRegistry,
) -> Result<SignatureDescriptor> {
    TextBackend::default().describe(callable, registry)
}

pub fn describe_signature_with(
    callable: &dyn Callable,
    registry: &dyn SupertypeRegistry,
    options: &DescribeOptions,
) -> Result<SignatureDescriptor> {
    TextBackend::new(options.clone()).describe(callable, registry)
}

/// Describes plain source text that needs no supertype lookups.
pub fn describe_source(text: &str) -> Result<SignatureDescriptor> {
    describe_signature(&text, &NoSupertypes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::signature::assemble::MaxArity;
    use crate::source::SourceCallable;

    #[test]
    fn arrow_takes_the_reported_name() {
        let callable = SourceCallable::new("(a, b) => a + b").with_name("add");
        let descriptor = describe_signature(&callable, &NoSupertypes).unwrap();
        assert_eq!(descriptor.name, "add");
        assert!(descriptor.is_arrow_form);
        assert_eq!(descriptor.max_arity, MaxArity::Bounded(2));
    }

    #[test]
    fn source_name_beats_reported_name() {
        let callable = SourceCallable::new("function real(a) {}").with_name("alias");
        let descriptor = describe_signature(&callable, &NoSupertypes).unwrap();
        assert_eq!(descriptor.name, "real");
    }

    #[test]
    fn opaque_callables_are_not_inspectable() {
        let err = describe_signature(&SourceCallable::opaque(), &NoSupertypes).unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotInspectable);
    }

    #[test]
    fn parameter_errors_point_into_the_source() {
        let source = "function f(a, b c) {}";
        let err = describe_source(source).unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnknownShape);
        assert_eq!(err.offset, Some(14));
    }

    #[test]
    fn inherited_parameter_errors_name_the_supertype() {
        let mut types = std::collections::HashMap::new();
        types.insert("Base".to_string(), "class Base { constructor(a, b c) {} }".to_string());

        let err = describe_signature(&"class Child extends Base {}", &types).unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnknownShape);
        assert_eq!(err.offset, None);
        assert_eq!(
            err.help.as_deref(),
            Some("raised in the source of supertype 'Base' at offset 28")
        );
    }

    #[test]
    fn trusted_declared_length_overrides() {
        let callable = SourceCallable::new("function f(a, b, c) {}").with_declared_length(2);
        let descriptor = describe_signature(&callable, &NoSupertypes).unwrap();
        assert_eq!(descriptor.min_arity, 2);

        let options = DescribeOptions::default().with_trust_declared_length(false);
        let descriptor = describe_signature_with(&callable, &NoSupertypes, &options).unwrap();
        assert_eq!(descriptor.min_arity, 3);
    }

    #[test]
    fn declared_length_is_ignored_with_rest() {
        let callable = SourceCallable::new("function f(a, ...b) {}").with_declared_length(0);
        let descriptor = describe_signature(&callable, &NoSupertypes).unwrap();
        assert_eq!(descriptor.min_arity, 1);
    }

    #[test]
    fn oversized_declared_length_is_not_trusted() {
        let callable = SourceCallable::new("function f(a) {}").with_declared_length(5);
        let descriptor = describe_signature(&callable, &NoSupertypes).unwrap();
        assert_eq!(descriptor.min_arity, 1);
    }

    #[test]
    fn backend_is_object_safe() {
        let backend: Box<dyn SignatureBackend> = Box::new(TextBackend::default());
        let descriptor = backend.describe(&"x => x", &NoSupertypes).unwrap();
        assert_eq!(descriptor.parameters.len(), 1);
    }
}
