// Modifier rendering
//
// Keywords always come out in declaration-order (visibility, static,
// abstract, final, native, synchronized, strictfp, transient, volatile),
// regardless of how the source wrote them.

use super::{invalid, FormatOptions, Result, SignatureFormatter};
use crate::model::{modifiers_of, Element, ElementId, ElementKind, Modifier, ModifierSet};

impl<'a> SignatureFormatter<'a> {
    /// Space-separated modifier keywords of a variable, method, class or
    /// class initializer.
    ///
    /// Fails with `InvalidArgument` for any other element kind.
    pub fn format_modifiers(&self, id: ElementId, options: FormatOptions) -> Result<String> {
        let element = self.element(id)?;
        let modifiers = modifiers_of(&element.kind).ok_or_else(|| invalid("format modifiers of", element))?;
        Ok(self.modifier_text(element, modifiers, options))
    }

    pub(crate) fn modifier_text(
        &self,
        element: &Element,
        modifiers: &ModifierSet,
        options: FormatOptions,
    ) -> String {
        let redundant = options.show_redundant_modifiers;
        let is_interface = element
            .kind
            .as_class()
            .map(|class| class.is_interface())
            .unwrap_or(false);
        let is_variable = element.kind.as_variable().is_some();

        let mut tokens: Vec<&str> = Vec::new();
        for modifier in Modifier::ALL {
            let shown = match modifier {
                Modifier::Public | Modifier::Static | Modifier::Final => {
                    modifiers.has(modifier, redundant)
                }
                Modifier::PackageLocal => {
                    modifiers.has(modifier, redundant || options.show_package_local)
                }
                Modifier::Abstract => !is_interface && modifiers.has(modifier, redundant),
                Modifier::Protected | Modifier::Private | Modifier::Volatile => {
                    modifiers.has_effective(modifier)
                }
                Modifier::Native | Modifier::Synchronized | Modifier::Strictfp => {
                    !options.javadoc_modifiers_only && modifiers.has_effective(modifier)
                }
                // Class files record transient on varargs methods; only variables have it
                Modifier::Transient => is_variable && modifiers.has_effective(modifier),
            };
            if !shown {
                continue;
            }
            if modifier == Modifier::PackageLocal {
                tokens.push(self.package_local_token(element));
            } else {
                tokens.push(modifier.keyword());
            }
        }
        tokens.join(" ")
    }

    fn package_local_token(&self, element: &Element) -> &'a str {
        if matches!(element.kind, ElementKind::Class(_)) && self.model.is_local(element.id) {
            self.messages.local_class_preposition()
        } else {
            self.messages.package_local_presentation()
        }
    }
}
