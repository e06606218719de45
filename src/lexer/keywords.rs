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

use once_cell::sync::Lazy;
use regex::Regex;

static IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\p{XID_Start}_$][\p{XID_Continue}$\x{200C}\x{200D}]*$").unwrap());

/// Determines whether a word is **reserved** and therefore cannot name a
/// parameter binding.
///
/// Contextual words (`async`, `get`, `set`, `static`, `of`, `let`, `yield`,
/// `await`) stay legal binding names in sloppy-mode sources and are not
/// listed.
pub fn is_reserved(word: &str) -> bool {
    matches!(
        word,
        "break" |
        "case" |
        "catch" |
        "class" |
        "const" |
        "continue" |
        "debugger" |
        "default" |
        "delete" |
        "do" |
        "else" |
        "enum" |
        "export" |
        "extends" |
        "false" |
        "finally" |
        "for" |
        "function" |
        "if" |
        "import" |
        "in" |
        "instanceof" |
        "new" |
        "null" |
        "return" |
        "super" |
        "switch" |
        "this" |
        "throw" |
        "true" |
        "try" |
        "typeof" |
        "var" |
        "void" |
        "while" |
        "with"
    )
}

/// A word that can be bound as a parameter name.
pub fn is_identifier(word: &str) -> bool {
    IDENTIFIER.is_match(word) && !is_reserved(word)
}

/// Modifiers that may precede a method name in a printed class member.
pub fn is_method_modifier(word: &str) -> bool {
    matches!(word, "static" | "async" | "get" | "set")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_names_are_identifiers() {
        for word in ["a", "_private", "$el", "camelCase9", "ñandú", "async", "of"] {
            assert!(is_identifier(word), "{word}");
        }
    }

    #[test]
    fn reserved_and_malformed_words_are_not() {
        for word in ["class", "true", "9lives", "a-b", "", "a b", "'a'"] {
            assert!(!is_identifier(word), "{word}");
        }
    }
}
