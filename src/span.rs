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

/// A human-facing source position.
///
/// `line` is 1-based, `column` is 0-based and counted in characters, which is
/// what the diagnostic printer needs to place its caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub line: usize,
    pub column: usize,
}

impl Span {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Converts a byte offset into `source` to a line/column pair.
    ///
    /// Offsets past the end clamp to the end of the text; offsets that fall
    /// inside a multi-byte character resolve to that character.
    pub fn locate(source: &str, offset: usize) -> Self {
        let mut line = 1;
        let mut column = 0;

        for (idx, ch) in source.char_indices() {
            if idx >= offset {
                break;
            }
            if ch == '\n' {
                line += 1;
                column = 0;
            } else {
                column += 1;
            }
        }

        Self { line, column }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_character_is_line_one_column_zero() {
        assert_eq!(Span::locate("abc", 0), Span::new(1, 0));
    }

    #[test]
    fn newlines_reset_the_column() {
        assert_eq!(Span::locate("a\nbcd", 4), Span::new(2, 2));
    }

    #[test]
    fn offsets_past_the_end_clamp() {
        assert_eq!(Span::locate("ab", 40), Span::new(1, 2));
    }
}
