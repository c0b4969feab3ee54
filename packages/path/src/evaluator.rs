//! Segment evaluator
//!
//! Walks a parsed segment list over a JSON tree. Every failure mode
//! (non-object parent, missing property, non-array indexing, out-of-range
//! index, malformed indexer) ends the walk with `None`; nothing panics and
//! nothing is reported as an error.

use serde_json::Value;

use crate::ast::{Indexer, PathSegment, Predicate};
use crate::value::render;

/// Walk `segments` starting at `node`.
///
/// When `trace` is provided, the canonical path of the resolved node is
/// appended to it: property names joined by `.` and every indexer rendered
/// as the concrete array index it selected.
pub(crate) fn walk<'v>(
    node: &'v Value,
    segments: &[PathSegment],
    mut trace: Option<&mut String>,
) -> Option<&'v Value> {
    let mut current = node;

    for segment in segments {
        if !segment.property.is_empty() {
            current = dereference(current, &segment.property)?;
            if let Some(path) = trace.as_deref_mut() {
                push_property(path, &segment.property);
            }
        }

        let Some(indexer) = &segment.indexer else {
            continue;
        };

        match indexer {
            Indexer::Predicate(predicate) => {
                let Value::Array(items) = current else {
                    log::trace!("predicate {indexer} applied to a non-array node");
                    return None;
                };
                match items.iter().position(|item| predicate_matches(predicate, item)) {
                    Some(index) => {
                        current = &items[index];
                        if let Some(path) = trace.as_deref_mut() {
                            push_index(path, index);
                        }
                    }
                    None => {
                        // No element matched: the array itself stays bound.
                        log::trace!("predicate {indexer} matched no element");
                    }
                }
            }
            Indexer::Index(index) => {
                let Some(item) = current.as_array().and_then(|items| items.get(*index)) else {
                    log::trace!("index [{index}] is not addressable on this node");
                    return None;
                };
                current = item;
                if let Some(path) = trace.as_deref_mut() {
                    push_index(path, *index);
                }
            }
            Indexer::Malformed(raw) => {
                log::trace!("malformed indexer [{raw}] in segment '{segment}'");
                return None;
            }
        }
    }

    Some(current)
}

fn dereference<'v>(node: &'v Value, property: &str) -> Option<&'v Value> {
    match node {
        Value::Object(map) => {
            let found = map.get(property);
            if found.is_none() {
                log::trace!("property '{property}' not present");
            }
            found
        }
        _ => {
            log::trace!("property '{property}' requested on a non-object node");
            None
        }
    }
}

/// Absent and null nested values never match, whichever the operator.
fn predicate_matches(predicate: &Predicate, item: &Value) -> bool {
    match walk(item, &predicate.segments, None) {
        None | Some(Value::Null) => false,
        Some(value) => predicate.operator.matches(&render(value), &predicate.literal),
    }
}

fn push_property(path: &mut String, property: &str) {
    if !path.is_empty() {
        path.push('.');
    }
    path.push_str(property);
}

fn push_index(path: &mut String, index: usize) {
    path.push('[');
    path.push_str(&index.to_string());
    path.push(']');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::PathParser;
    use serde_json::json;

    fn traced(doc: &Value, path: &str) -> Option<(String, Value)> {
        let segments = PathParser::new(path).parse();
        let mut canonical = String::new();
        walk(doc, &segments, Some(&mut canonical)).map(|v| (canonical, v.clone()))
    }

    #[test]
    fn canonical_path_uses_matched_index() {
        let doc = json!({"a": {"b": [{"id": 1}, {"id": 2, "name": "y"}]}});
        assert_eq!(
            traced(&doc, "a.b[@.id==2].name"),
            Some(("a.b[1].name".to_string(), json!("y")))
        );
    }

    #[test]
    fn unmatched_predicate_keeps_array_path() {
        let doc = json!({"a": [{"id": 1}]});
        assert_eq!(
            traced(&doc, "a[@.id==9]"),
            Some(("a".to_string(), json!([{"id": 1}])))
        );
    }

    #[test]
    fn null_nested_values_never_match() {
        let doc = json!({"a": [{"id": null}, {"id": 3}]});
        assert_eq!(
            traced(&doc, "a[@.id!=null]"),
            Some(("a[1]".to_string(), json!({"id": 3})))
        );
    }

    #[test]
    fn property_on_array_is_absent() {
        let doc = json!({"a": [1, 2]});
        assert_eq!(traced(&doc, "a.length"), None);
    }
}
