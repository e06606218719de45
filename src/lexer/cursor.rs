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

/// A forward-only character cursor over borrowed source text.
///
/// Positions are tracked per character but reported as byte offsets, so
/// callers can slice the original `&str` directly.
pub struct Cursor<'a> {
    source: &'a str,
    chars: Vec<(usize, char)>,
    current: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().collect(),
            current: 0,
        }
    }

    /// Byte offset of the next unread character (or the text length at EOF).
    pub fn offset(&self) -> usize {
        self.chars
            .get(self.current)
            .map(|&(idx, _)| idx)
            .unwrap_or(self.source.len())
    }

    /// Repositions the cursor at the character starting at `offset`.
    pub fn seek(&mut self, offset: usize) {
        self.current = self
            .chars
            .iter()
            .position(|&(idx, _)| idx >= offset)
            .unwrap_or(self.chars.len());
    }

    /// Unread remainder of the text.
    pub fn rest(&self) -> &'a str {
        &self.source[self.offset()..]
    }

    pub fn advance(&mut self) -> char {
        let ch = self.peek();
        if !self.is_at_end() {
            self.current += 1;
        }
        ch
    }

    pub fn peek(&self) -> char {
        self.chars.get(self.current).map(|&(_, ch)| ch).unwrap_or('\0')
    }

    pub fn peek_next(&self) -> char {
        self.chars
            .get(self.current + 1)
            .map(|&(_, ch)| ch)
            .unwrap_or('\0')
    }

    pub fn match_char(&mut self, expected: char) -> bool {
        if self.is_at_end() || self.peek() != expected {
            return false;
        }
        self.current += 1;
        true
    }

    /// Consumes `text` if the unread input starts with it.
    pub fn match_str(&mut self, text: &str) -> bool {
        if self.rest().starts_with(text) {
            self.current += text.chars().count();
            true
        } else {
            false
        }
    }

    pub fn skip_whitespace(&mut self) {
        while self.peek().is_whitespace() {
            self.advance();
        }
    }

    /// Consumes an identifier-like word (`name`, `$el`, `#secret`).
    pub fn identifier(&mut self) -> Option<&'a str> {
        let start = self.offset();
        let first = self.peek();
        if !(is_ident_start(first) || (first == '#' && is_ident_start(self.peek_next()))) {
            return None;
        }
        self.advance();
        while is_ident_continue(self.peek()) {
            self.advance();
        }
        Some(&self.source[start..self.offset()])
    }

    /// Checks for a whole word without consuming it.
    pub fn check_word(&self, word: &str) -> bool {
        let rest = self.rest();
        rest.starts_with(word)
            && !rest[word.len()..]
                .chars()
                .next()
                .is_some_and(is_ident_continue)
    }

    /// Consumes a whole word (not a prefix of a longer identifier).
    pub fn match_word(&mut self, word: &str) -> bool {
        if self.check_word(word) {
            self.current += word.chars().count();
            true
        } else {
            false
        }
    }

    pub fn is_at_end(&self) -> bool {
        self.current >= self.chars.len()
    }
}

pub fn is_ident_start(ch: char) -> bool {
    ch.is_alphabetic() || ch == '_' || ch == '$'
}

pub fn is_ident_continue(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_' || ch == '$'
}
