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

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{ErrorKind, Result, SigError};
use crate::lexer::cursor::is_ident_continue;
use crate::lexer::keywords::is_method_modifier;
use crate::lexer::{group_end, literal_end, scan_code, strip_comments, Cursor};

static NATIVE_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\s*\[native code\]\s*\}\s*$").unwrap());

static CONSTRUCTOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:^|[^\p{XID_Continue}$#.*])(constructor)\s*\(").unwrap());

/// The interior of a parameter-list group, comments blanked out.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParameterList {
    pub text: String,

    /// Byte offset of `text` within the source it was taken from.
    pub offset: usize,
}

/// Everything the extractor learns about a callable before its parameters
/// are decomposed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Extraction {
    /// Name bound in the source; empty when the source carries none.
    pub name: String,
    pub is_async: bool,
    pub is_arrow_form: bool,
    pub is_generator_form: bool,
    pub is_class_form: bool,
    pub parameters: ParameterList,

    /// Supertype whose constructor supplied `parameters`. When set, the
    /// parameter offset refers to that supertype's source.
    pub inherited_from: Option<String>,
}

/// A class declaration: own name, `extends` reference and own constructor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassShape {
    pub name: String,
    pub superclass: Option<String>,
    pub constructor: Option<ParameterList>,
}

/// What a piece of source text turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inspected {
    Callable(Extraction),
    Class(ClassShape),
}

/// Classifies `source` and locates its parameter list (or, for a class,
/// its constructor's).
pub fn inspect(source: &str) -> Result<Inspected> {
    if source.trim().is_empty() {
        return Err(SigError::not_inspectable("callable has no source text"));
    }
    if NATIVE_CODE.is_match(source) {
        return Err(SigError::not_inspectable(format!(
            "native callables cannot be described: {}",
            source.trim()
        )));
    }

    let text = strip_comments(source)?;
    let mut cursor = Cursor::new(&text);
    cursor.skip_whitespace();

    let start = cursor.offset();
    if cursor.match_word("class") {
        let after = cursor.offset();
        cursor.skip_whitespace();

        // `class(…) {}` is a method named `class`
        if cursor.peek() != '(' {
            cursor.seek(after);
            return class_head(&text, cursor).map(Inspected::Class);
        }
        cursor.seek(start);
    }

    callable_head(&text, cursor).map(Inspected::Callable)
}

fn callable_head(text: &str, mut cursor: Cursor<'_>) -> Result<Extraction> {
    let start = cursor.offset();

    if let Some(arrow) = arrow_head(text, &mut cursor, false)? {
        return Ok(arrow);
    }

    cursor.seek(start);
    if cursor.match_word("async") {
        cursor.skip_whitespace();
        if let Some(arrow) = arrow_head(text, &mut cursor, true)? {
            return Ok(arrow);
        }
    }

    cursor.seek(start);
    keyword_or_method_head(text, cursor)
}

/// `(…) =>` or `ident =>`. Leaves the cursor untouched when the head is
/// something else.
fn arrow_head(text: &str, cursor: &mut Cursor<'_>, is_async: bool) -> Result<Option<Extraction>> {
    let save = cursor.offset();

    let parameters = if cursor.peek() == '(' {
        let parameters = parameter_group(text, cursor)?;
        cursor.skip_whitespace();
        parameters
    } else if let Some(ident) = cursor.identifier() {
        let offset = cursor.offset() - ident.len();
        cursor.skip_whitespace();
        ParameterList {
            text: ident.to_string(),
            offset,
        }
    } else {
        return Ok(None);
    };

    if !cursor.match_str("=>") {
        cursor.seek(save);
        return Ok(None);
    }

    Ok(Some(Extraction {
        is_async,
        is_arrow_form: true,
        parameters,
        ..Extraction::default()
    }))
}

/// `function name(…)` and the method shorthand printed for class members.
fn keyword_or_method_head(text: &str, mut cursor: Cursor<'_>) -> Result<Extraction> {
    let mut is_async = false;
    let mut is_generator = false;

    loop {
        let save = cursor.offset();
        let Some(word) = cursor.identifier() else {
            break;
        };
        cursor.skip_whitespace();

        // `get(…) {}` is a method named `get`, not a modifier
        if !is_method_modifier(word) || matches!(cursor.peek(), '(' | '=' | '{' | '\0') {
            cursor.seek(save);
            break;
        }
        is_async |= word == "async";
    }

    let is_keyword_form = cursor.match_word("function");
    if is_keyword_form {
        cursor.skip_whitespace();
    }

    if cursor.match_char('*') {
        is_generator = true;
        cursor.skip_whitespace();
    }

    let name = if is_keyword_form {
        cursor.identifier().unwrap_or_default().to_string()
    } else {
        method_name(text, &mut cursor)?
    };
    cursor.skip_whitespace();

    let parameters = parameter_group(text, &mut cursor)?;

    if !is_keyword_form {
        cursor.skip_whitespace();
        if cursor.peek() != '{' {
            return Err(unrecognised(text).at(cursor.offset()));
        }
    }

    Ok(Extraction {
        name,
        is_async,
        is_generator_form: is_generator,
        parameters,
        ..Extraction::default()
    })
}

fn method_name(text: &str, cursor: &mut Cursor<'_>) -> Result<String> {
    if let Some(name) = cursor.identifier() {
        return Ok(name.to_string());
    }

    let start = cursor.offset();
    match cursor.peek() {
        '[' | '\'' | '"' => {
            let end = if cursor.peek() == '[' {
                boundary(text, start)?
            } else {
                literal_end(&text[start..])
                    .map(|end| start + end)
                    .ok_or_else(|| unrecognised(text).at(start))?
            };
            cursor.seek(end + 1);

            let raw = &text[start..=end];
            Ok(match raw.chars().next() {
                Some('[') => raw.to_string(),
                _ => raw[1..raw.len() - 1].to_string(),
            })
        }
        _ => Err(unrecognised(text).at(start)),
    }
}

/// Consumes `(…)` at the cursor and returns its interior.
fn parameter_group(text: &str, cursor: &mut Cursor<'_>) -> Result<ParameterList> {
    let open = cursor.offset();
    if cursor.peek() != '(' {
        return Err(SigError::extraction_failure("expected '(' to open the parameter list")
            .at(open)
            .with_help(unrecognised_help()));
    }

    let close = boundary(text, open)?;
    cursor.seek(close + 1);

    Ok(ParameterList {
        text: text[open + 1..close].to_string(),
        offset: open + 1,
    })
}

/// Matching closer for the opener at `open`; structural breakage here means
/// there is no usable parameter-list boundary.
fn boundary(text: &str, open: usize) -> Result<usize> {
    group_end(&text[open..])
        .map(|end| open + end)
        .map_err(|err| {
            let err = err.shifted(open);
            SigError {
                code: ErrorKind::ExtractionFailure.code(),
                kind: ErrorKind::ExtractionFailure,
                message: format!("no balanced parameter-list boundary: {}", err.message),
                ..err
            }
        })
}

fn class_head(text: &str, mut cursor: Cursor<'_>) -> Result<ClassShape> {
    cursor.skip_whitespace();

    let name = if cursor.check_word("extends") {
        String::new()
    } else {
        cursor.identifier().unwrap_or_default().to_string()
    };
    cursor.skip_whitespace();

    let mut superclass = None;
    if cursor.match_word("extends") {
        let from = cursor.offset();
        let body = body_open(text, from)?;
        let reference = text[from..body].trim();
        if reference.is_empty() {
            return Err(SigError::extraction_failure("'extends' without a superclass").at(from));
        }
        superclass = Some(reference.to_string());
        cursor.seek(body);
    }

    cursor.skip_whitespace();
    if cursor.peek() != '{' {
        return Err(SigError::extraction_failure("expected '{' to open the class body")
            .at(cursor.offset()));
    }

    let open = cursor.offset();
    let close = boundary(text, open)?;
    let constructor = find_constructor(text, open + 1, close)?;

    Ok(ClassShape {
        name,
        superclass,
        constructor,
    })
}

/// First top-level `{` at or after `from`.
fn body_open(text: &str, from: usize) -> Result<usize> {
    let mut found = None;

    scan_code(&text[from..], |offset, ch, depth| {
        if ch == '{' && depth == 0 {
            found = Some(from + offset);
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    })
    .map_err(|err| err.shifted(from))?;

    found.ok_or_else(|| SigError::extraction_failure("class has no body").at(from))
}

/// Locates the class's own `constructor(…)` member in the body spanning
/// `start..end`. Static and accessor members named `constructor` are not
/// constructors.
fn find_constructor(text: &str, start: usize, end: usize) -> Result<Option<ParameterList>> {
    let body = &text[start..end];

    let mut top_level = vec![false; body.len()];
    scan_code(body, |offset, _, depth| {
        top_level[offset] = depth == 0;
        ControlFlow::Continue(())
    })
    .map_err(|err| err.shifted(start))?;

    for caps in CONSTRUCTOR.captures_iter(body) {
        let (Some(word), Some(whole)) = (caps.get(1), caps.get(0)) else {
            continue;
        };
        if !top_level[word.start()] {
            continue;
        }

        let preceding = body[..word.start()].trim_end();
        let previous_word = preceding
            .rsplit(|ch: char| !is_ident_continue(ch))
            .next()
            .unwrap_or("");
        if matches!(previous_word, "static" | "get" | "set" | "async") {
            continue;
        }

        // a call inside a field initializer, not a member head
        if preceding.ends_with(|ch: char| "=([,:?!&|+-*/%<>~^".contains(ch)) {
            continue;
        }

        let open = start + whole.end() - 1;
        let close = boundary(text, open)?;
        if !text[close + 1..].trim_start().starts_with('{') {
            continue;
        }

        return Ok(Some(ParameterList {
            text: text[open + 1..close].to_string(),
            offset: open + 1,
        }));
    }

    Ok(None)
}

fn unrecognised(text: &str) -> SigError {
    let head: String = text.trim().chars().take(60).collect();
    SigError::extraction_failure(format!("unrecognised callable shape: {}", head))
        .with_help(unrecognised_help())
}

fn unrecognised_help() -> &'static str {
    "expected a function, arrow function, method or class declaration"
}

#[cfg(test)]
mod tests {
    use super::*;

    fn callable(source: &str) -> Extraction {
        match inspect(source).unwrap() {
            Inspected::Callable(extraction) => extraction,
            other => panic!("expected a callable, got {other:?}"),
        }
    }

    fn class(source: &str) -> ClassShape {
        match inspect(source).unwrap() {
            Inspected::Class(shape) => shape,
            other => panic!("expected a class, got {other:?}"),
        }
    }

    #[test]
    fn keyword_function() {
        let ext = callable("function f0(self, meme, init) { return [self, meme, init]; }");
        assert_eq!(ext.name, "f0");
        assert_eq!(ext.parameters.text, "self, meme, init");
        assert_eq!(ext.parameters.offset, 12);
        assert!(!ext.is_async && !ext.is_arrow_form && !ext.is_generator_form);
    }

    #[test]
    fn async_generator_function() {
        let ext = callable("async function* pages(url) {}");
        assert_eq!(ext.name, "pages");
        assert!(ext.is_async);
        assert!(ext.is_generator_form);
        assert_eq!(ext.parameters.text, "url");
    }

    #[test]
    fn anonymous_function() {
        let ext = callable("function() {}");
        assert_eq!(ext.name, "");
        assert_eq!(ext.parameters.text, "");
    }

    #[test]
    fn arrow_forms() {
        let parens = callable("(meme, param) => [meme, param]");
        assert!(parens.is_arrow_form);
        assert_eq!(parens.parameters.text, "meme, param");

        let bare = callable("nothing => [nothing]");
        assert!(bare.is_arrow_form);
        assert_eq!(bare.parameters.text, "nothing");
        assert_eq!(bare.parameters.offset, 0);

        let async_arrow = callable("async (a) => a");
        assert!(async_arrow.is_async && async_arrow.is_arrow_form);

        let async_bare = callable("async x => x");
        assert!(async_bare.is_async);
        assert_eq!(async_bare.parameters.text, "x");

        let named_async = callable("async => 1");
        assert!(!named_async.is_async);
        assert_eq!(named_async.parameters.text, "async");
    }

    #[test]
    fn comment_only_arrow() {
        let ext = callable("(/* Nothing! */) => 'nothing'");
        assert!(ext.is_arrow_form);
        assert_eq!(ext.parameters.text.trim(), "");
    }

    #[test]
    fn method_shorthand() {
        let instance = callable("instanceFn(a, b) {\n\t\treturn a + b;\n\t}");
        assert_eq!(instance.name, "instanceFn");
        assert_eq!(instance.parameters.text, "a, b");

        let stat = callable("static staticFn(a, b) { return a + b; }");
        assert_eq!(stat.name, "staticFn");

        let gen = callable("async *stream(source) {}");
        assert_eq!(gen.name, "stream");
        assert!(gen.is_async && gen.is_generator_form);

        let named_get = callable("get(key) { return key; }");
        assert_eq!(named_get.name, "get");

        let computed = callable("[Symbol.iterator]() {}");
        assert_eq!(computed.name, "[Symbol.iterator]");

        let quoted = callable("'with space'(a) {}");
        assert_eq!(quoted.name, "with space");
    }

    #[test]
    fn call_expression_is_not_a_callable() {
        let err = inspect("foo(a, b)").unwrap_err();
        assert_eq!(err.kind, ErrorKind::ExtractionFailure);
    }

    #[test]
    fn native_code_is_not_inspectable() {
        let err = inspect("function push() { [native code] }").unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotInspectable);

        let err = inspect("   ").unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotInspectable);
    }

    #[test]
    fn unbalanced_list_is_an_extraction_failure() {
        let err = inspect("function f(a, [b) {}").unwrap_err();
        assert_eq!(err.kind, ErrorKind::ExtractionFailure);
        assert_eq!(err.offset, Some(16));
    }

    #[test]
    fn class_with_constructor() {
        let shape = class(
            "class Service extends Base {\n  static create() {}\n  constructor(a, b = 1) { super(a); }\n  run() { this.constructor(1); }\n}",
        );
        assert_eq!(shape.name, "Service");
        assert_eq!(shape.superclass.as_deref(), Some("Base"));
        assert_eq!(shape.constructor.unwrap().text, "a, b = 1");
    }

    #[test]
    fn class_without_constructor() {
        let shape = class("class f9 extends f5 { }");
        assert_eq!(shape.name, "f9");
        assert_eq!(shape.superclass.as_deref(), Some("f5"));
        assert_eq!(shape.constructor, None);

        let plain = class("class superClassNoConstructor {}");
        assert_eq!(plain.superclass, None);
    }

    #[test]
    fn static_constructor_method_is_ignored() {
        let shape = class("class A { static constructor(x) {} }");
        assert_eq!(shape.constructor, None);
    }

    #[test]
    fn field_initializer_calls_are_not_constructors() {
        let shape = class("class A { x = constructor(1); y = [constructor(2)] }");
        assert_eq!(shape.constructor, None);

        let shape = class("class A {\n  x = 1\n  constructor(a) {}\n}");
        assert_eq!(shape.constructor.unwrap().text, "a");

        let shape = class("class A { y = wrap(constructor(3)); constructor(b) {} }");
        assert_eq!(shape.constructor.unwrap().text, "b");
    }

    #[test]
    fn method_named_class() {
        let ext = callable("class(a, b) { return a; }");
        assert_eq!(ext.name, "class");
        assert_eq!(ext.parameters.text, "a, b");
        assert!(!ext.is_class_form);

        let shape = class("class Named { constructor(x) {} }");
        assert_eq!(shape.name, "Named");
    }

    #[test]
    fn anonymous_class_with_call_in_extends() {
        let shape = class("class extends mixin(A, B) { constructor(x) {} }");
        assert_eq!(shape.name, "");
        assert_eq!(shape.superclass.as_deref(), Some("mixin(A, B)"));
        assert_eq!(shape.constructor.unwrap().text, "x");
    }
}
