// Type and reference list rendering

use super::FormatOptions;
use crate::model::{Substitution, TypeRef};

/// Render a type: substitute, optionally erase, then pick canonical or
/// presentable text.
pub fn format_type(ty: &TypeRef, options: FormatOptions, substitution: &Substitution) -> String {
    let mut ty = ty.substitute(substitution);
    if options.show_raw_type {
        ty = ty.erasure();
    }
    if options.show_fq_class_names {
        ty.canonical_text()
    } else {
        ty.presentable_text()
    }
}

pub fn format_reference(reference: &TypeRef, options: FormatOptions) -> String {
    if options.show_fq_class_names {
        reference.canonical_text()
    } else {
        reference.presentable_text()
    }
}

/// `A, B, C`; an empty list renders as an empty string
pub fn format_reference_list(references: &[TypeRef], options: FormatOptions) -> String {
    references
        .iter()
        .map(|reference| format_reference(reference, options))
        .collect::<Vec<_>>()
        .join(", ")
}
