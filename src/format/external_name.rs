// External names
//
// Stable textual keys for classes and members, used to match metadata that
// lives outside the model (suppression markers, annotations files) against
// elements across separate runs.
//
//   class      a.b.Outer$Inner
//   method     a.b.Outer void run(java.lang.String, int)
//   field      a.b.Outer COUNT
//   parameter  a.b.Outer Outer(java.lang.String, int) 1

use super::{
    buffer::PooledBuffer, invalid, FormatError, FormatOptions, Result, SignatureFormatter,
    DEFAULT_MAX_PARAMS,
};
use crate::model::{modifiers_of, simple_name, Element, ElementId, ElementKind, Substitution};
use tracing::error;

const NESTED_SEPARATOR: char = '$';

const METHOD_KEY_OPTIONS: FormatOptions = FormatOptions::SHOW_NAME
    .union(FormatOptions::SHOW_FQ_NAME)
    .union(FormatOptions::SHOW_TYPE)
    .union(FormatOptions::SHOW_PARAMETERS)
    .union(FormatOptions::SHOW_FQ_CLASS_NAMES);

const PARAMETER_KEY_OPTIONS: FormatOptions =
    FormatOptions::SHOW_TYPE.union(FormatOptions::SHOW_FQ_CLASS_NAMES);

impl<'a> SignatureFormatter<'a> {
    /// Key for a class, method, field or method parameter.
    ///
    /// Returns `None` for parameters that are not declared by a method and
    /// for other members with no key format (locals, initializers).
    /// A member without an enclosing class is a `BrokenInvariant`.
    pub fn external_name(&self, id: ElementId, show_param_name: bool) -> Result<Option<String>> {
        let element = self.element(id)?;
        if modifiers_of(&element.kind).is_none() {
            return Err(invalid("name", element));
        }

        let mut buffer = PooledBuffer::acquire();
        if element.kind.is_class() {
            self.write_class_key(element, &mut buffer)?;
            return Ok(Some(buffer.as_str().to_owned()));
        }

        let class = self.model.enclosing_class(id).ok_or_else(|| {
            error!(
                "Cannot name {} {}: no enclosing class in the model",
                element.kind_name(),
                id
            );
            FormatError::BrokenInvariant {
                kind: element.kind_name(),
                element: id,
            }
        })?;
        self.write_class_key(class, &mut buffer)?;

        match &element.kind {
            ElementKind::Method(_) => {
                buffer.push(' ');
                buffer.push_str(&self.method_key(id, show_param_name)?);
            }
            ElementKind::Field(field) => {
                buffer.push(' ');
                buffer.push_str(field.name.as_deref().unwrap_or_default());
            }
            ElementKind::Parameter(parameter) => {
                let Some(scope) = self.model.parent(id) else {
                    return Ok(None);
                };
                let Some(method) = scope.kind.as_method() else {
                    return Ok(None);
                };
                buffer.push(' ');
                buffer.push_str(&self.method_key(scope.id, show_param_name)?);
                buffer.push(' ');
                if show_param_name {
                    buffer.push_str(parameter.name.as_deref().unwrap_or_default());
                } else {
                    let index = method.parameters.iter().position(|&p| p == id);
                    match index {
                        Some(index) => buffer.push_str(&index.to_string()),
                        None => return Ok(None),
                    }
                }
            }
            _ => return Ok(None),
        }
        Ok(Some(buffer.as_str().to_owned()))
    }

    /// Display name of the package a class lives in
    pub fn package_display_name(&self, id: ElementId) -> Result<String> {
        let element = self.element(id)?;
        let class = element
            .kind
            .as_class()
            .ok_or_else(|| invalid("find the package of", element))?;
        let package = class
            .qualified_name
            .as_deref()
            .and_then(|name| name.rsplit_once('.'))
            .map(|(package, _)| package)
            .filter(|package| !package.is_empty());
        Ok(package.unwrap_or("default package").to_string())
    }

    fn method_key(&self, method: ElementId, show_param_name: bool) -> Result<String> {
        let parameter_options = if show_param_name {
            PARAMETER_KEY_OPTIONS | FormatOptions::SHOW_NAME
        } else {
            PARAMETER_KEY_OPTIONS
        };
        // Keys use the default limit whatever this formatter was configured with
        self.format_method_with_limit(
            method,
            &Substitution::empty(),
            METHOD_KEY_OPTIONS,
            parameter_options,
            DEFAULT_MAX_PARAMS,
        )
    }

    /// Binary-style class name: nested classes joined with `$`, local and
    /// anonymous classes numbered within their top-level class.
    fn write_class_key(&self, class: &Element, buffer: &mut String) -> Result<()> {
        let data = class.kind.as_class();
        let qualified_name = data.and_then(|c| c.qualified_name.as_deref());
        let outer = self.model.enclosing_class(class.id);
        let is_member = outer.is_some() && self.model.parent(class.id).map(|p| p.id) == outer.map(|o| o.id);

        match (qualified_name, outer) {
            (Some(qualified_name), Some(outer)) if is_member => {
                self.write_class_key(outer, buffer)?;
                buffer.push(NESTED_SEPARATOR);
                buffer.push_str(simple_name(qualified_name));
            }
            (Some(qualified_name), _) => buffer.push_str(qualified_name),
            (None, Some(outer)) => {
                self.write_class_key(outer, buffer)?;
                buffer.push(NESTED_SEPARATOR);
                buffer.push_str(&self.local_class_index(class).to_string());
                if let Some(name) = data.and_then(|c| c.name.as_deref()) {
                    buffer.push_str(name);
                }
            }
            (None, None) => {
                error!("Cannot name local class {}: no enclosing class", class.id);
                return Err(FormatError::BrokenInvariant {
                    kind: class.kind_name(),
                    element: class.id,
                });
            }
        }
        Ok(())
    }

    /// 1-based position among the unqualified classes of the same top-level class
    fn local_class_index(&self, class: &Element) -> usize {
        let top = self.model.top_level_class(class.id).map(|e| e.id);
        self.model
            .elements()
            .filter(|e| e.kind.is_class())
            .filter(|e| e.kind.as_class().and_then(|c| c.qualified_name.as_ref()).is_none())
            .filter(|e| self.model.top_level_class(e.id).map(|t| t.id) == top)
            .position(|e| e.id == class.id)
            .map(|position| position + 1)
            .unwrap_or(1)
    }
}
