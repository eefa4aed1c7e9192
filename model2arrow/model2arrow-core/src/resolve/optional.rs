use std::borrow::Cow;

use crate::model::TypeAnnotation;

/// A type with its outer null-union stripped.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized<'a> {
    pub annotation: Cow<'a, TypeAnnotation>,
    pub nullable: bool,
}

/// Strip `T or null` down to `T` and report whether null was allowed.
///
/// Nested optionals and unions are flattened first, so `optional[optional[T]]`
/// is the same shape as `optional[T]`. A union left with several non-null
/// arms is returned as a (deduplicated) union for dispatch to reject.
/// An annotated type is looked through, keeping its metadata on the inner type.
pub fn normalize(annotation: &TypeAnnotation) -> Normalized<'_> {
    match annotation {
        TypeAnnotation::Optional(_) | TypeAnnotation::Union(_) | TypeAnnotation::Null => {
            let mut arms = Vec::new();
            let mut nullable = false;
            collect_arms(annotation, &mut arms, &mut nullable);
            let annotation = match arms.as_slice() {
                [] => Cow::Owned(TypeAnnotation::Null),
                [single] => Cow::Borrowed(*single),
                _ => Cow::Owned(TypeAnnotation::Union(arms.into_iter().cloned().collect())),
            };
            Normalized {
                annotation,
                nullable,
            }
        }
        TypeAnnotation::Annotated { inner, metadata } => {
            let stripped = normalize(inner);
            if !stripped.nullable {
                return Normalized {
                    annotation: Cow::Borrowed(annotation),
                    nullable: false,
                };
            }
            Normalized {
                annotation: Cow::Owned(TypeAnnotation::Annotated {
                    inner: Box::new(stripped.annotation.into_owned()),
                    metadata: metadata.clone(),
                }),
                nullable: true,
            }
        }
        other => Normalized {
            annotation: Cow::Borrowed(other),
            nullable: false,
        },
    }
}

fn collect_arms<'a>(
    annotation: &'a TypeAnnotation,
    arms: &mut Vec<&'a TypeAnnotation>,
    nullable: &mut bool,
) {
    match annotation {
        TypeAnnotation::Null => *nullable = true,
        TypeAnnotation::Optional(inner) => {
            *nullable = true;
            collect_arms(inner, arms, nullable);
        }
        TypeAnnotation::Union(members) => {
            for member in members {
                collect_arms(member, arms, nullable);
            }
        }
        other => {
            if !arms.contains(&other) {
                arms.push(other);
            }
        }
    }
}
