// Variable signatures (fields, parameters, locals)
//
//   [modifiers] [Type] [Owner.]name[:Type] [modifiers] [= initializer]

use super::{format_type, invalid, push_segment, FormatOptions, Result, SignatureFormatter};
use crate::model::{Element, ElementId, ElementKind, Substitution, VariableData};

const TRUNCATION_MARKER: &str = " ...";

impl<'a> SignatureFormatter<'a> {
    pub fn format_variable(
        &self,
        id: ElementId,
        options: FormatOptions,
        substitution: &Substitution,
    ) -> Result<String> {
        let element = self.element(id)?;
        let variable = element
            .kind
            .as_variable()
            .ok_or_else(|| invalid("format as variable", element))?;
        Ok(self.variable_signature(element, variable, options, substitution))
    }

    pub(crate) fn variable_signature(
        &self,
        element: &Element,
        variable: &VariableData,
        options: FormatOptions,
        substitution: &Substitution,
    ) -> String {
        let mut buffer = String::new();
        if options.modifiers_before() {
            buffer.push_str(&self.modifier_text(element, &variable.modifiers, options));
        }
        if options.type_before() {
            push_segment(&mut buffer, &format_type(&variable.ty, options, substitution));
        }

        let name = variable.name.as_deref().filter(|_| options.show_name);
        let qualifier = match element.kind {
            ElementKind::Field(_) if options.show_containing_class => {
                self.containing_class_prefix(element.id, options)
            }
            _ => None,
        };
        let mut head = qualifier.unwrap_or_default();
        if let Some(name) = name {
            head.push_str(name);
        }
        push_segment(&mut buffer, &head);

        if options.type_after() {
            let ty = format_type(&variable.ty, options, substitution);
            if name.is_some() {
                buffer.push(':');
                buffer.push_str(&ty);
            } else {
                push_segment(&mut buffer, &ty);
            }
        }
        if options.modifiers_after() {
            push_segment(&mut buffer, &self.modifier_text(element, &variable.modifiers, options));
        }
        if options.show_initializer {
            if let Some(initializer) = &variable.initializer {
                push_segment(&mut buffer, "=");
                buffer.push(' ');
                buffer.push_str(&first_line(initializer));
            }
        }
        buffer
    }
}

/// Text up to the first line break, marked with ` ...` when cut
pub(crate) fn first_line(text: &str) -> String {
    match text.find(['\r', '\n']) {
        Some(index) => format!("{}{}", &text[..index], TRUNCATION_MARKER),
        None => text.to_string(),
    }
}
