// Class signatures
//
//   [modifiers] name [modifiers] [extends A] [implements B, C]

use super::{
    class_display_name, format_reference_list, invalid, push_segment, FormatOptions, Result,
    SignatureFormatter,
};
use crate::model::{ElementId, ElementKind, TypeRef};
use tracing::debug;

impl<'a> SignatureFormatter<'a> {
    pub fn format_class(&self, id: ElementId, options: FormatOptions) -> Result<String> {
        let element = self.element(id)?;
        let modifiers = match &element.kind {
            ElementKind::Class(class) => &class.modifiers,
            ElementKind::AnonymousClass(anonymous) => &anonymous.modifiers,
            _ => return Err(invalid("format as class", element)),
        };

        let mut buffer = String::new();
        if options.modifiers_before() {
            buffer.push_str(&self.modifier_text(element, modifiers, options));
        }
        if options.show_name {
            match &element.kind {
                ElementKind::AnonymousClass(anonymous) if options.show_anonymous_class_verbose => {
                    let base = self.anonymous_base_text(&anonymous.base, options)?;
                    push_segment(&mut buffer, &self.messages.anonymous_class_derived(&base));
                }
                ElementKind::Class(class) => {
                    if let Some(name) = class_display_name(class, options) {
                        push_segment(&mut buffer, name);
                    }
                }
                _ => {}
            }
        }
        if options.modifiers_after() {
            push_segment(&mut buffer, &self.modifier_text(element, modifiers, options));
        }
        if options.show_extends_implements {
            if let ElementKind::Class(class) = &element.kind {
                let extends = format_reference_list(&class.extends, options);
                if !extends.is_empty() {
                    push_segment(&mut buffer, &format!("extends {}", extends));
                }
                let implements = format_reference_list(&class.implements, options);
                if !implements.is_empty() {
                    push_segment(&mut buffer, &format!("implements {}", implements));
                }
            }
        }
        Ok(buffer)
    }

    /// The base class rendered with the same options, or the reference's
    /// own text when it does not resolve inside the model.
    fn anonymous_base_text(&self, base: &TypeRef, options: FormatOptions) -> Result<String> {
        let resolved = match base {
            TypeRef::Class { qualified_name, .. } => self.model.resolve_class(qualified_name),
            _ => None,
        };
        match resolved {
            Some(class) => self.format_class(class.id, options),
            None => {
                debug!("Anonymous class base {} not in model", base.canonical_text());
                Ok(base.presentable_text())
            }
        }
    }
}
