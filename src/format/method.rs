// Method signatures
//
//   [modifiers] [ReturnType] [Owner.]name(params)[:ReturnType] [modifiers] [throws A, B]

use super::{
    format_reference_list, format_type, invalid, push_segment, FormatOptions, Result,
    SignatureFormatter,
};
use crate::model::{ElementId, ElementKind, Substitution};

impl<'a> SignatureFormatter<'a> {
    /// Render a method, showing at most the formatter's `max_params`
    /// parameters. Each parameter is rendered as a variable with
    /// `parameter_options`.
    pub fn format_method(
        &self,
        id: ElementId,
        substitution: &Substitution,
        options: FormatOptions,
        parameter_options: FormatOptions,
    ) -> Result<String> {
        self.format_method_with_limit(id, substitution, options, parameter_options, self.max_params)
    }

    pub fn format_method_with_limit(
        &self,
        id: ElementId,
        substitution: &Substitution,
        options: FormatOptions,
        parameter_options: FormatOptions,
        max_params: usize,
    ) -> Result<String> {
        let element = self.element(id)?;
        let method = element
            .kind
            .as_method()
            .ok_or_else(|| invalid("format as method", element))?;

        let mut buffer = String::new();
        if options.modifiers_before() {
            buffer.push_str(&self.modifier_text(element, &method.modifiers, options));
        }
        if options.type_before() {
            if let Some(return_type) = &method.return_type {
                push_segment(&mut buffer, &format_type(return_type, options, substitution));
            }
        }

        let mut head = if options.show_containing_class {
            self.containing_class_prefix(id, options).unwrap_or_default()
        } else {
            String::new()
        };
        if options.show_name {
            head.push_str(&method.name);
        }
        push_segment(&mut buffer, &head);

        if options.show_parameters {
            buffer.push('(');
            for (index, &parameter_id) in method.parameters.iter().take(max_params).enumerate() {
                let parameter = self.element(parameter_id)?;
                let ElementKind::Parameter(variable) = &parameter.kind else {
                    return Err(invalid("format as parameter", parameter));
                };
                if index > 0 {
                    buffer.push_str(", ");
                }
                buffer.push_str(&self.variable_signature(
                    parameter,
                    variable,
                    parameter_options,
                    substitution,
                ));
            }
            if method.parameters.len() > max_params {
                buffer.push_str(", ...");
            }
            buffer.push(')');
        }

        if options.type_after() {
            if let Some(return_type) = &method.return_type {
                if !buffer.is_empty() {
                    buffer.push(':');
                }
                buffer.push_str(&format_type(return_type, options, substitution));
            }
        }
        if options.modifiers_after() {
            push_segment(&mut buffer, &self.modifier_text(element, &method.modifiers, options));
        }
        if options.show_throws {
            let throws = format_reference_list(&method.throws, options);
            if !throws.is_empty() {
                push_segment(&mut buffer, &format!("throws {}", throws));
            }
        }
        Ok(buffer)
    }
}
