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

/// Character cursor shared by the comment stripper and the head scanner.
pub mod cursor;

/// Quote-aware, length-preserving comment removal.
pub mod comments;

/// Nesting tracker for `()[]{}` with quote awareness:
/// - closer/opener matching
/// - depth reporting per character
/// - matching-group lookup
pub mod brackets;

/// Reserved words and identifier validation.
pub mod keywords;

pub use brackets::{group_end, literal_end, scan_code, BracketTracker, QuoteScanner, Visit};
pub use comments::strip_comments;
pub use cursor::Cursor;
pub use keywords::{is_identifier, is_reserved};
