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

use thiserror::Error;

use crate::span::Span;

/// Broad failure categories. Every error is terminal for the call that
/// raised it; no partial descriptor is ever returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The callable has no inspectable source text (native, empty, or an
    /// unresolvable supertype).
    NotInspectable,

    /// No balanced parameter-list boundary, or an unrecognised callable head.
    ExtractionFailure,

    /// Bracket mismatch, unterminated quote/comment, or nesting too deep.
    DecompositionFailure,

    /// A classified token matches no recognised pattern grammar.
    UnknownShape,
}

impl ErrorKind {
    /// Stable error code (S0001, S0002, …)
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::NotInspectable => "S0001",
            ErrorKind::ExtractionFailure => "S0002",
            ErrorKind::DecompositionFailure => "S0003",
            ErrorKind::UnknownShape => "S0004",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ErrorKind::NotInspectable => "not inspectable",
            ErrorKind::ExtractionFailure => "extraction failure",
            ErrorKind::DecompositionFailure => "decomposition failure",
            ErrorKind::UnknownShape => "unknown shape",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("error[{code}]: {message}")]
pub struct SigError {
    /// Stable error code, derived from `kind`
    pub code: &'static str,

    pub kind: ErrorKind,

    /// Human-readable error message
    pub message: String,

    /// Byte offset into the text the error was raised against
    pub offset: Option<usize>,

    /// Optional note / help text
    pub help: Option<String>,
}

pub type Result<T> = std::result::Result<T, SigError>;

impl SigError {
    /// Generic constructor
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            code: kind.code(),
            kind,
            message: message.into(),
            offset: None,
            help: None,
        }
    }

    /// No source text could be obtained for the callable.
    pub fn not_inspectable(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotInspectable, message)
    }

    /// The callable head or its parameter-list boundary could not be located.
    pub fn extraction_failure(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ExtractionFailure, message)
    }

    /// Structural breakage inside the parameter text.
    pub fn decomposition_failure(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::DecompositionFailure, message)
    }

    pub fn unknown_shape(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownShape, message)
    }

    /// Attach the byte offset the error points at (builder-style).
    pub fn at(mut self, offset: usize) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Attach a help message to the error (builder-style).
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Moves the offset of an error raised against a sub-slice so that it
    /// points into the enclosing text.
    pub fn shifted(mut self, base: usize) -> Self {
        self.offset = self.offset.map(|offset| offset + base);
        self
    }

    /// Resolves the offset to a line/column pair within `source`.
    pub fn span(&self, source: &str) -> Option<Span> {
        self.offset.map(|offset| Span::locate(source, offset))
    }
}
