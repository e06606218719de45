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

//! Sigscope describes JavaScript-style callables from their source text.
//!
//! Given the serialized text of a function, arrow function, method or class,
//! it recovers the parameter list as structured descriptors (names,
//! destructuring patterns, defaults, rest markers) together with the
//! callable's form flags and arity bounds.
//!
//! ```
//! use sigscope::{describe_source, MaxArity};
//!
//! let descriptor = describe_source("function greet(name, {loud = false} = {}, ...rest) {}").unwrap();
//! assert_eq!(descriptor.name, "greet");
//! assert_eq!(descriptor.min_arity, 1);
//! assert_eq!(descriptor.max_arity, MaxArity::Unbounded);
//! ```
//!
//! Nothing is evaluated: defaults are reported verbatim and every malformed
//! input ends in a [`SigError`] rather than a partial result.

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod lexer;
pub mod pattern;
pub mod signature;
pub mod source;
pub mod span;

pub use config::DescribeOptions;
pub use diagnostics::DiagnosticPrinter;
pub use error::{ErrorKind, Result, SigError};
pub use pattern::{
    build, decompose, parse_parameters, segment, split_assignment, DestructureKind, Leaf,
    ParameterDescriptor, Shape,
};
pub use signature::{
    describe_signature, describe_signature_with, describe_source, MaxArity, SignatureBackend,
    SignatureDescriptor, TextBackend,
};
pub use source::{Callable, NoSupertypes, SourceCallable, SupertypeRegistry};
pub use span::Span;
