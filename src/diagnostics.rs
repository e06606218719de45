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

use std::fmt::Write as _;

use crate::error::SigError;
use crate::span::Span;

/// Responsible for rendering human-friendly, compiler-style diagnostics
/// for signature errors.
///
/// This printer:
/// - Formats errors with name/line/column information
/// - Displays the offending source line
/// - Highlights the exact error position using a caret (`^`)
/// - Optionally shows a helpful follow-up hint
///
/// Errors without an offset render the header and help only.
pub struct DiagnosticPrinter {
    /// Full source text the error was raised against.
    source: String,

    /// Display name for the callable (e.g. `UserService.constructor`).
    name: String,
}

impl DiagnosticPrinter {
    /// Creates a new diagnostic printer for a given callable's source.
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }

    /// Renders the diagnostic into a string.
    ///
    /// # Output Example
    /// ```text
    /// error[S0003]: unmatched ']'
    ///   --> handler:1:12
    ///    |
    ///  1 | function f(a]) {}
    ///    |             ^
    /// help: check the brackets in the parameter list
    /// ```
    pub fn render(&self, error: &SigError) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "error[{}]: {}", error.code, error.message);

        if let Some(Span { line, column }) = error.span(&self.source) {
            let src_line = self
                .source
                .lines()
                .nth(line.saturating_sub(1))
                .unwrap_or("");

            let _ = writeln!(out, "  --> {}:{}:{}", self.name, line, column + 1);
            let _ = writeln!(out, "   |");
            let _ = writeln!(out, "{:>2} | {}", line, src_line);
            let _ = writeln!(out, "   | {}^", " ".repeat(column));
        } else {
            let _ = writeln!(out, "  --> {}", self.name);
        }

        if let Some(help) = &error.help {
            let _ = writeln!(out, "help: {}", help);
        }

        out
    }

    /// Prints the rendered diagnostic to stderr.
    pub fn print(&self, error: &SigError) {
        eprint!("{}", self.render(error));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caret_points_at_the_offset() {
        let source = "function f(a]) {}";
        let err = SigError::decomposition_failure("unmatched ']'")
            .at(12)
            .with_help("check the brackets in the parameter list");

        let rendered = DiagnosticPrinter::new("handler", source).render(&err);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "error[S0003]: unmatched ']'");
        assert_eq!(lines[1], "  --> handler:1:13");
        assert_eq!(lines[3], " 1 | function f(a]) {}");
        assert_eq!(lines[4], "   |             ^");
        assert_eq!(lines[5], "help: check the brackets in the parameter list");
    }

    #[test]
    fn errors_without_offset_skip_the_snippet() {
        let err = SigError::not_inspectable("no source");
        let rendered = DiagnosticPrinter::new("native", "").render(&err);
        assert_eq!(rendered, "error[S0001]: no source\n  --> native\n");
    }
}
