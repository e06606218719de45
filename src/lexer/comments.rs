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

use crate::error::{Result, SigError};
use crate::lexer::brackets::QuoteScanner;
use crate::lexer::cursor::Cursor;

/// Removes `//` line comments and `/* */` block comments from `source`.
///
/// Comment characters are overwritten with spaces (newlines are kept), so the
/// result has exactly the same byte length and line structure as the input
/// and every offset computed on it is valid against the original text.
///
/// Comment markers inside `'…'`, `"…"` and `` `…` `` literals are left alone.
///
/// # Errors
/// `DecompositionFailure` for an unterminated block comment.
pub fn strip_comments(source: &str) -> Result<String> {
    let mut out = String::with_capacity(source.len());
    let mut cursor = Cursor::new(source);
    let mut quotes = QuoteScanner::default();

    while !cursor.is_at_end() {
        let offset = cursor.offset();
        let ch = cursor.advance();

        if quotes.feed(offset, ch) {
            out.push(ch);
            continue;
        }

        match ch {
            '/' if cursor.peek() == '/' => {
                blank(&mut out, ch);
                while !cursor.is_at_end() && cursor.peek() != '\n' {
                    blank(&mut out, cursor.advance());
                }
            }

            '/' if cursor.peek() == '*' => {
                let start = cursor.offset() - 1;
                blank(&mut out, ch);
                blank(&mut out, cursor.advance());

                loop {
                    if cursor.is_at_end() {
                        return Err(SigError::decomposition_failure("unterminated block comment")
                            .at(start)
                            .with_help("close the comment with '*/'"));
                    }
                    if cursor.peek() == '*' && cursor.peek_next() == '/' {
                        blank(&mut out, cursor.advance());
                        blank(&mut out, cursor.advance());
                        break;
                    }
                    blank(&mut out, cursor.advance());
                }
            }

            _ => out.push(ch),
        }
    }

    Ok(out)
}

/// Pushes the same number of bytes as `ch` occupies, keeping line breaks.
fn blank(out: &mut String, ch: char) {
    match ch {
        '\n' | '\r' => out.push(ch),
        _ => out.extend(std::iter::repeat(' ').take(ch.len_utf8())),
    }
}
