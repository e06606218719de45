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

/// Callable head recognition:
/// - function, arrow and method shorthand forms
/// - class bodies and their constructor member
pub mod extract;

/// Supertype resolution for classes without a constructor.
pub mod class;

/// Arity computation and the final descriptor.
pub mod assemble;

/// The describe entry points.
pub mod backend;

pub use assemble::{assemble, max_arity, min_arity, MaxArity, SignatureDescriptor};
pub use backend::{describe_signature, describe_signature_with, describe_source, SignatureBackend, TextBackend};
pub use class::extract;
pub use extract::{inspect, ClassShape, Extraction, Inspected, ParameterList};
