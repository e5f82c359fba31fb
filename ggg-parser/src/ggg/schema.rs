//! Document shape checking
//!
//! The YAML container is checked key-by-key against a schema tree before
//! typed decoding. A key the schema does not know, or a leaf whose runtime
//! type does not match, short-circuits with a [`StructureError`] naming the
//! offending path. Keys *missing* from the document are not a shape error;
//! they surface through the typed decode in [`crate::ggg::loader`].

use once_cell::sync::Lazy;
use serde_yaml::Value;

use crate::ggg::ast::error::StructureError;

/// Expected shape of a value in the document tree.
#[derive(Debug)]
pub enum Shape {
    Str,
    /// A YAML float. Integers do not satisfy this; `start: 0` is a type
    /// error where `start: 0.0` is not.
    Float,
    Int,
    Seq(Box<Shape>),
    Map(Vec<(&'static str, Shape)>),
}

/// The GGG document schema: language metadata plus utterance records.
pub static DOCUMENT_SHAPE: Lazy<Shape> = Lazy::new(|| {
    Shape::Map(vec![
        ("obj_lang", Shape::Str),
        ("meta_lang", Shape::Seq(Box::new(Shape::Str))),
        (
            "segs",
            Shape::Seq(Box::new(Shape::Map(vec![
                ("start", Shape::Float),
                ("end", Shape::Float),
                ("speaker", Shape::Int),
                ("ur", Shape::Str),
                ("sr", Shape::Str),
                ("gl", Shape::Str),
                ("tr", Shape::Str),
            ]))),
        ),
    ])
});

/// Check a loaded YAML value against the document schema.
pub fn check_document(value: &Value) -> Result<(), StructureError> {
    check(value, &DOCUMENT_SHAPE, "")
}

fn check(value: &Value, shape: &Shape, path: &str) -> Result<(), StructureError> {
    match shape {
        Shape::Str => match value {
            Value::String(_) => Ok(()),
            _ => Err(mismatch(path, "string", value)),
        },
        Shape::Float => match value {
            Value::Number(n) if n.is_f64() => Ok(()),
            _ => Err(mismatch(path, "float", value)),
        },
        Shape::Int => match value {
            Value::Number(n) if n.is_i64() || n.is_u64() => Ok(()),
            _ => Err(mismatch(path, "integer", value)),
        },
        Shape::Seq(inner) => match value {
            Value::Sequence(items) => {
                for (i, item) in items.iter().enumerate() {
                    check(item, inner, &format!("{}[{}]", display_path(path), i))?;
                }
                Ok(())
            }
            _ => Err(mismatch(path, "sequence", value)),
        },
        Shape::Map(fields) => match value {
            Value::Mapping(mapping) => {
                for (key, item) in mapping {
                    let name = match key.as_str() {
                        Some(name) => name,
                        None => {
                            return Err(StructureError::UnknownField {
                                path: join(path, "<non-string key>"),
                            })
                        }
                    };
                    let child_path = join(path, name);
                    match fields.iter().find(|(field, _)| *field == name) {
                        Some((_, field_shape)) => check(item, field_shape, &child_path)?,
                        None => {
                            return Err(StructureError::UnknownField { path: child_path })
                        }
                    }
                }
                Ok(())
            }
            _ => Err(mismatch(path, "mapping", value)),
        },
    }
}

fn join(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", path, key)
    }
}

fn display_path(path: &str) -> String {
    if path.is_empty() {
        "document".to_string()
    } else {
        path.to_string()
    }
}

fn mismatch(path: &str, expected: &'static str, value: &Value) -> StructureError {
    StructureError::TypeMismatch {
        path: display_path(path),
        expected,
        found: type_name(value),
    }
}

/// Human name for a YAML value's runtime type.
fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value(yaml: &str) -> Value {
        serde_yaml::from_str(yaml).unwrap()
    }

    const VALID: &str = "\
obj_lang: sjd
meta_lang:
  - eng
segs:
  - start: 0.0
    end: 1.5
    speaker: 1
    ur: cat
    sr: cat
    gl: cat
    tr: cat
";

    #[test]
    fn test_valid_document_shape() {
        assert!(check_document(&value(VALID)).is_ok());
    }

    #[test]
    fn test_unknown_top_level_field() {
        let doc = value("obj_lang: sjd\nbogus: 1\n");
        match check_document(&doc) {
            Err(StructureError::UnknownField { path }) => assert_eq!(path, "bogus"),
            other => panic!("expected unknown-field error, got {:?}", other),
        }
    }

    #[test]
    fn test_top_level_type_mismatch() {
        let doc = value("obj_lang: 3\n");
        match check_document(&doc) {
            Err(StructureError::TypeMismatch {
                path,
                expected,
                found,
            }) => {
                assert_eq!(path, "obj_lang");
                assert_eq!(expected, "string");
                assert_eq!(found, "integer");
            }
            other => panic!("expected type-mismatch error, got {:?}", other),
        }
    }

    #[test]
    fn test_times_must_be_floats() {
        let doc = value(&VALID.replace("start: 0.0", "start: 0"));
        match check_document(&doc) {
            Err(StructureError::TypeMismatch { path, expected, .. }) => {
                assert_eq!(path, "segs[0].start");
                assert_eq!(expected, "float");
            }
            other => panic!("expected type-mismatch error, got {:?}", other),
        }
    }

    #[test]
    fn test_nested_record_mismatch_names_full_path() {
        let doc = value(&VALID.replace("speaker: 1", "speaker: anna"));
        match check_document(&doc) {
            Err(StructureError::TypeMismatch { path, expected, .. }) => {
                assert_eq!(path, "segs[0].speaker");
                assert_eq!(expected, "integer");
            }
            other => panic!("expected type-mismatch error, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_record_field() {
        let doc = value(&VALID.replace("tr: cat", "tr: cat\n    notes: hm"));
        match check_document(&doc) {
            Err(StructureError::UnknownField { path }) => assert_eq!(path, "segs[0].notes"),
            other => panic!("expected unknown-field error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_keys_are_not_a_shape_error() {
        // The shape check only rejects what is present and wrong; absent
        // fields are the typed decoder's concern.
        assert!(check_document(&value("obj_lang: sjd\n")).is_ok());
    }

    #[test]
    fn test_meta_lang_entries_are_checked() {
        let doc = value("meta_lang:\n  - eng\n  - 3\n");
        match check_document(&doc) {
            Err(StructureError::TypeMismatch { path, .. }) => {
                assert_eq!(path, "meta_lang[1]");
            }
            other => panic!("expected type-mismatch error, got {:?}", other),
        }
    }
}
