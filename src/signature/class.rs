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

use std::collections::HashSet;

use tracing::debug;

use crate::config::DescribeOptions;
use crate::error::{Result, SigError};
use crate::signature::extract::{inspect, ClassShape, Extraction, Inspected, ParameterList};
use crate::source::SupertypeRegistry;

/// Runs the extractor over `source`, resolving a class's parameters through
/// its superclass chain when it declares no constructor of its own.
pub fn extract<R>(source: &str, registry: &R, options: &DescribeOptions) -> Result<Extraction>
where
    R: SupertypeRegistry + ?Sized,
{
    match inspect(source)? {
        Inspected::Callable(extraction) => Ok(extraction),
        Inspected::Class(shape) => resolve_class(shape, registry, options),
    }
}

/// Walks `extends` references until a constructor (or a plain function
/// supertype) supplies the parameter list.
///
/// The result keeps the starting class's own name and is always a class
/// form, whichever supertype ended the walk.
pub fn resolve_class<R>(shape: ClassShape, registry: &R, options: &DescribeOptions) -> Result<Extraction>
where
    R: SupertypeRegistry + ?Sized,
{
    let name = shape.name.clone();

    let mut visited = HashSet::new();
    if !name.is_empty() {
        visited.insert(name.clone());
    }

    let mut current = shape;
    let mut inherited_from = None;
    let mut hops = 0;

    loop {
        let superclass = match (current.constructor, current.superclass) {
            (Some(parameters), _) => {
                return Ok(class_form(name, parameters, inherited_from));
            }
            (None, None) => {
                return Ok(class_form(name, ParameterList::default(), inherited_from));
            }
            (None, Some(superclass)) => superclass,
        };

        if !visited.insert(superclass.clone()) {
            return Err(SigError::extraction_failure(format!(
                "supertype chain of '{}' is cyclic at '{}'",
                name, superclass
            )));
        }

        hops += 1;
        if hops > options.max_supertype_hops {
            return Err(SigError::extraction_failure(format!(
                "supertype chain of '{}' is longer than {} hops",
                name, options.max_supertype_hops
            ))
            .with_help("raise `max_supertype_hops` in the describe options"));
        }

        let source = registry.source_of(&superclass).ok_or_else(|| {
            SigError::not_inspectable(format!("supertype '{}' has no registered source", superclass))
                .with_help("register the supertype's source text before describing subclasses")
        })?;

        debug!(class = %name, supertype = %superclass, hops, "walking to supertype");

        let inspected = inspect(&source).map_err(|err| inherited_error(err, &superclass))?;

        match inspected {
            Inspected::Class(next) => {
                inherited_from = Some(superclass);
                current = next;
            }
            // only the parameters carry over; a class is never async or a generator
            Inspected::Callable(function) => {
                return Ok(class_form(name, function.parameters, Some(superclass)));
            }
        }
    }
}

/// Errors raised against a supertype's source carry offsets into that
/// source, not the subclass being described, so the offset is dropped and the
/// location moves into the help text.
pub(crate) fn inherited_error(err: SigError, supertype: &str) -> SigError {
    let location = match err.offset {
        Some(offset) => format!(" at offset {}", offset),
        None => String::new(),
    };
    let help = format!("raised in the source of supertype '{}'{}", supertype, location);
    SigError { offset: None, ..err }.with_help(help)
}

fn class_form(name: String, parameters: ParameterList, inherited_from: Option<String>) -> Extraction {
    Extraction {
        name,
        is_class_form: true,
        parameters,
        inherited_from,
        ..Extraction::default()
    }
}
