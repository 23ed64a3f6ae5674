// Signature Formatter
//
// Turns code model elements into display strings: tooltips, completion
// items, structure views, documentation headers. Each assembler reads the
// element, consults `FormatOptions`, and joins the pieces it was asked for.
// The formatter only borrows the model and keeps no state between calls, so
// one instance can be shared across threads.

pub mod buffer;
mod class;
mod external_name;
mod method;
mod modifiers;
pub mod options;
mod types;
mod variable;

pub use buffer::PooledBuffer;
pub use options::{FormatOptions, ParseOptionsError, DEFAULT_MAX_PARAMS};
pub use types::{format_reference, format_reference_list, format_type};

use crate::messages::{self, Messages};
use crate::model::{ClassData, CodeModel, Element, ElementId, ElementKind, Substitution};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The element kind cannot be rendered by the requested operation
    #[error("Cannot {operation} a {kind} element ({element})")]
    InvalidArgument {
        operation: &'static str,
        kind: &'static str,
        element: ElementId,
    },

    /// A member has no enclosing class, so the model is incomplete
    #[error("{kind} element {element} has no enclosing class")]
    BrokenInvariant { kind: &'static str, element: ElementId },

    #[error("Unknown element {0}")]
    UnknownElement(ElementId),
}

pub type Result<T> = std::result::Result<T, FormatError>;

/// Renders signatures for elements of one code model
#[derive(Clone, Copy)]
pub struct SignatureFormatter<'a> {
    model: &'a CodeModel,
    messages: &'a dyn Messages,
    max_params: usize,
}

impl<'a> SignatureFormatter<'a> {
    /// Formatter with English phrases and the default parameter limit
    pub fn new(model: &'a CodeModel) -> Self {
        Self {
            model,
            messages: messages::english(),
            max_params: DEFAULT_MAX_PARAMS,
        }
    }

    pub fn with_messages(mut self, messages: &'a dyn Messages) -> Self {
        self.messages = messages;
        self
    }

    /// Parameters shown before a method's list is cut short
    pub fn with_max_params(mut self, max_params: usize) -> Self {
        self.max_params = max_params;
        self
    }

    pub fn model(&self) -> &'a CodeModel {
        self.model
    }

    pub fn max_params(&self) -> usize {
        self.max_params
    }

    /// Render any signature-bearing element with the matching assembler.
    ///
    /// `parameter_options` only applies to methods.
    pub fn format_element(
        &self,
        id: ElementId,
        options: FormatOptions,
        parameter_options: FormatOptions,
        substitution: &Substitution,
    ) -> Result<String> {
        let element = self.element(id)?;
        match &element.kind {
            ElementKind::Class(_) | ElementKind::AnonymousClass(_) => {
                self.format_class(id, options)
            }
            ElementKind::Method(_) => {
                self.format_method(id, substitution, options, parameter_options)
            }
            ElementKind::Field(_) | ElementKind::Parameter(_) | ElementKind::LocalVariable(_) => {
                self.format_variable(id, options, substitution)
            }
            ElementKind::ClassInitializer(_) => {
                if options.show_modifiers {
                    self.format_modifiers(id, options)
                } else {
                    Ok(String::new())
                }
            }
            _ => Err(invalid("format", element)),
        }
    }

    fn element(&self, id: ElementId) -> Result<&'a Element> {
        self.model.get(id).ok_or(FormatError::UnknownElement(id))
    }

    /// `Owner.` prefix for members, when the owner has a name to show
    fn containing_class_prefix(&self, member: ElementId, options: FormatOptions) -> Option<String> {
        let class = self.model.enclosing_class(member)?;
        let data = class.kind.as_class()?;
        class_display_name(data, options).map(|name| format!("{}.", name))
    }
}

/// Qualified name when asked for and known, otherwise the simple name
pub(crate) fn class_display_name(class: &ClassData, options: FormatOptions) -> Option<&str> {
    let simple = class.name.as_deref()?;
    if options.show_fq_name {
        Some(class.qualified_name.as_deref().unwrap_or(simple))
    } else {
        Some(simple)
    }
}

/// Append a segment, separated from earlier output by one space
pub(crate) fn push_segment(buffer: &mut String, segment: &str) {
    if segment.is_empty() {
        return;
    }
    if !buffer.is_empty() {
        buffer.push(' ');
    }
    buffer.push_str(segment);
}

pub(crate) fn invalid(operation: &'static str, element: &Element) -> FormatError {
    FormatError::InvalidArgument {
        operation,
        kind: element.kind_name(),
        element: element.id,
    }
}
