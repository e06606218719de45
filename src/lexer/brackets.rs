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

use std::ops::ControlFlow;

use crate::error::{Result, SigError};

/// What the tracker saw at one character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    /// Structural code. Openers and closers report the depth of the level
    /// they bound, so a top-level `(` and its `)` both report `0`.
    Code(usize),

    /// Inside a quoted literal, quote characters included.
    Quoted,
}

/// Quote state shared by every scanner that must treat literals as opaque.
///
/// Recognises `'…'`, `"…"` and `` `…` `` with backslash escapes. Delimiters
/// count as part of the literal.
#[derive(Debug, Default, Clone, Copy)]
pub struct QuoteScanner {
    open: Option<(char, usize)>,
    escaped: bool,
}

impl QuoteScanner {
    /// Feeds the character at byte `offset`; returns whether it belongs to a
    /// quoted literal.
    pub fn feed(&mut self, offset: usize, ch: char) -> bool {
        if let Some((delimiter, _)) = self.open {
            if self.escaped {
                self.escaped = false;
            } else if ch == '\\' {
                self.escaped = true;
            } else if ch == delimiter {
                self.open = None;
            }
            return true;
        }

        if matches!(ch, '\'' | '"' | '`') {
            self.open = Some((ch, offset));
            return true;
        }
        false
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Delimiter and offset of the literal still open, if any.
    pub fn unterminated(&self) -> Option<(char, usize)> {
        self.open
    }
}

/// Given `text` whose first character opens a quoted literal, returns the
/// byte offset of its closing delimiter.
pub fn literal_end(text: &str) -> Option<usize> {
    let mut quotes = QuoteScanner::default();

    for (offset, ch) in text.char_indices() {
        if !quotes.feed(offset, ch) {
            return None;
        }
        if offset > 0 && !quotes.is_open() {
            return Some(offset);
        }
    }
    None
}

/// Iterative nesting tracker for `()`, `[]` and `{}`.
///
/// Every closer must match the most recent opener. Quoted literals are
/// opaque.
#[derive(Debug, Default)]
pub struct BracketTracker {
    /// Pending closers with the offset of their opener.
    stack: Vec<(char, usize)>,
    quotes: QuoteScanner,
}

impl BracketTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds the character found at byte `offset`.
    pub fn feed(&mut self, offset: usize, ch: char) -> Result<Visit> {
        if self.quotes.feed(offset, ch) {
            return Ok(Visit::Quoted);
        }

        match ch {
            '(' | '[' | '{' => {
                let depth = self.stack.len();
                self.stack.push((closer_for(ch), offset));
                Ok(Visit::Code(depth))
            }

            ')' | ']' | '}' => match self.stack.pop() {
                Some((expected, _)) if expected == ch => Ok(Visit::Code(self.stack.len())),
                Some((expected, opened_at)) => Err(SigError::decomposition_failure(format!(
                    "expected '{}' but found '{}'",
                    expected, ch
                ))
                .at(offset)
                .with_help(format!("the group opened at offset {} is never closed", opened_at))),
                None => Err(SigError::decomposition_failure(format!("unmatched '{}'", ch))
                    .at(offset)
                    .with_help("check the brackets in the parameter list")),
            },

            _ => Ok(Visit::Code(self.stack.len())),
        }
    }

    /// Verifies that every quote and group opened so far has been closed.
    pub fn finish(&self) -> Result<()> {
        if let Some((delimiter, offset)) = self.quotes.unterminated() {
            return Err(
                SigError::decomposition_failure(format!("unterminated {} literal", delimiter))
                    .at(offset),
            );
        }
        if let Some(&(closer, offset)) = self.stack.last() {
            return Err(
                SigError::decomposition_failure(format!("unclosed group, expected '{}'", closer))
                    .at(offset),
            );
        }
        Ok(())
    }
}

fn closer_for(opener: char) -> char {
    match opener {
        '(' => ')',
        '[' => ']',
        _ => '}',
    }
}

/// Calls `visit` with every character outside quoted literals together with
/// its nesting depth.
///
/// A walk that runs to the end of `text` must leave every group and quote
/// closed. A walk stopped early by `visit` only fails on structure it has
/// already seen to be broken.
pub fn scan_code<F>(text: &str, mut visit: F) -> Result<()>
where
    F: FnMut(usize, char, usize) -> ControlFlow<()>,
{
    let mut tracker = BracketTracker::new();

    for (offset, ch) in text.char_indices() {
        if let Visit::Code(depth) = tracker.feed(offset, ch)? {
            if visit(offset, ch, depth).is_break() {
                return Ok(());
            }
        }
    }

    tracker.finish()
}

/// Given `text` whose first character is an opener, returns the byte offset
/// of its matching closer.
pub fn group_end(text: &str) -> Result<usize> {
    let mut end = None;

    scan_code(text, |offset, ch, depth| {
        if offset > 0 && depth == 0 && matches!(ch, ')' | ']' | '}') {
            end = Some(offset);
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    })?;

    end.ok_or_else(|| SigError::decomposition_failure("expected a bracketed group").at(0))
}
