// Modifier rendering tests
//
// Ordering, explicit-vs-effective handling and the per-kind suppression
// rules (interfaces, javadoc mode, transient on methods).

use crate::format::{FormatError, FormatOptions, SignatureFormatter};
use crate::messages::MessageBundle;
use crate::model::{ClassKind, Modifier, ModifierSet, VariableData};
use crate::tests::helpers::{explicit, int, void, ModelBuilder};

#[cfg(test)]
mod modifier_tests {
    use super::*;
    use Modifier::*;

    const SHOW: FormatOptions = FormatOptions::SHOW_MODIFIERS;

    #[test]
    fn test_modifiers_render_in_fixed_order() {
        let mut b = ModelBuilder::new("com.example");
        let class = b.class(None, "Widget", explicit(&[Public]));
        let field = b.field(
            class,
            VariableData::new("counter", int()).with_modifiers(explicit(&[Volatile, Final, Static, Private])),
        );
        let model = b.build();
        let formatter = SignatureFormatter::new(&model);

        assert_eq!(
            formatter.format_modifiers(field, SHOW).unwrap(),
            "private static final volatile"
        );
    }

    #[test]
    fn test_explicit_public_renders_without_redundant_flag() {
        let mut b = ModelBuilder::new("com.example");
        let class = b.class(None, "Widget", explicit(&[Public]));
        let model = b.build();
        let formatter = SignatureFormatter::new(&model);

        assert_eq!(formatter.format_modifiers(class, SHOW).unwrap(), "public");
        assert_eq!(
            formatter
                .format_modifiers(class, SHOW | FormatOptions::SHOW_REDUNDANT_MODIFIERS)
                .unwrap(),
            "public"
        );
    }

    #[test]
    fn test_implicit_public_needs_redundant_flag() {
        let mut b = ModelBuilder::new("com.example");
        let shape = b.interface(None, "Shape", explicit(&[Public]));
        let area = b.method(
            shape,
            "area",
            Some(int()),
            ModifierSet::new().with_implicit([Public, Abstract]),
        );
        let model = b.build();
        let formatter = SignatureFormatter::new(&model);

        assert_eq!(formatter.format_modifiers(area, SHOW).unwrap(), "");
        assert_eq!(
            formatter
                .format_modifiers(area, SHOW | FormatOptions::SHOW_REDUNDANT_MODIFIERS)
                .unwrap(),
            "public abstract"
        );
    }

    #[test]
    fn test_implicit_static_final_needs_redundant_flag() {
        let mut b = ModelBuilder::new("com.example");
        let limits = b.interface(None, "Limits", explicit(&[Public]));
        let max = b.field(
            limits,
            VariableData::new("MAX", int())
                .with_modifiers(ModifierSet::new().with_implicit([Public, Static, Final])),
        );
        let model = b.build();
        let formatter = SignatureFormatter::new(&model);

        assert_eq!(formatter.format_modifiers(max, SHOW).unwrap(), "");
        assert_eq!(
            formatter
                .format_modifiers(max, SHOW | FormatOptions::SHOW_REDUNDANT_MODIFIERS)
                .unwrap(),
            "public static final"
        );
    }

    #[test]
    fn test_abstract_suppressed_on_interfaces() {
        let mut b = ModelBuilder::new("com.example");
        let shape = b.declare(
            None,
            "Shape",
            ClassKind::Interface,
            explicit(&[Public, Abstract]),
        );
        let base = b.class(None, "Base", explicit(&[Public, Abstract]));
        let model = b.build();
        let formatter = SignatureFormatter::new(&model);

        assert_eq!(formatter.format_modifiers(shape, SHOW).unwrap(), "public");
        assert_eq!(formatter.format_modifiers(base, SHOW).unwrap(), "public abstract");
    }

    #[test]
    fn test_protected_and_private_render_when_only_implied() {
        let mut b = ModelBuilder::new("com.example");
        let class = b.declare(None, "Color", ClassKind::Enum, explicit(&[Public]));
        let constructor = b.method(class, "Color", None, ModifierSet::new().with_implicit([Private]));
        let model = b.build();
        let formatter = SignatureFormatter::new(&model);

        assert_eq!(formatter.format_modifiers(constructor, SHOW).unwrap(), "private");
    }

    #[test]
    fn test_javadoc_mode_drops_implementation_modifiers() {
        let mut b = ModelBuilder::new("com.example");
        let class = b.class(None, "Native", explicit(&[Public]));
        let method = b.method(
            class,
            "poll",
            Some(void()),
            explicit(&[Public, Synchronized, Native, Strictfp]),
        );
        let model = b.build();
        let formatter = SignatureFormatter::new(&model);

        assert_eq!(
            formatter.format_modifiers(method, SHOW).unwrap(),
            "public native synchronized strictfp"
        );
        assert_eq!(
            formatter
                .format_modifiers(method, SHOW | FormatOptions::JAVADOC_MODIFIERS_ONLY)
                .unwrap(),
            "public"
        );
    }

    #[test]
    fn test_transient_only_on_variables() {
        let mut b = ModelBuilder::new("com.example");
        let class = b.class(None, "Session", explicit(&[Public]));
        let field = b.field(
            class,
            VariableData::new("cache", int()).with_modifiers(explicit(&[Private, Transient])),
        );
        let varargs = b.method(
            class,
            "log",
            Some(void()),
            explicit(&[Public]).with_implicit([Transient]),
        );
        let model = b.build();
        let formatter = SignatureFormatter::new(&model);

        assert_eq!(formatter.format_modifiers(field, SHOW).unwrap(), "private transient");
        assert_eq!(formatter.format_modifiers(varargs, SHOW).unwrap(), "public");
    }

    #[test]
    fn test_package_local_presentation() {
        let mut b = ModelBuilder::new("com.example");
        let class = b.class(None, "Helper", ModifierSet::new());
        let outer = b.class(None, "Outer", explicit(&[Public]));
        let method = b.method(outer, "build", Some(void()), explicit(&[Public]));
        let statement = b.statement(method);
        let local = b.class(Some(statement), "Step", ModifierSet::new());
        let model = b.build();
        let formatter = SignatureFormatter::new(&model);

        assert_eq!(formatter.format_modifiers(class, SHOW).unwrap(), "");
        let redundant = SHOW | FormatOptions::SHOW_REDUNDANT_MODIFIERS;
        assert_eq!(formatter.format_modifiers(class, redundant).unwrap(), "package-private");
        assert_eq!(
            formatter
                .format_modifiers(class, SHOW | FormatOptions::SHOW_PACKAGE_LOCAL)
                .unwrap(),
            "package-private"
        );
        assert_eq!(formatter.format_modifiers(local, redundant).unwrap(), "local");
    }

    #[test]
    fn test_custom_phrases_replace_package_local_tokens() {
        let mut b = ModelBuilder::new("com.example");
        let class = b.class(None, "Helper", explicit(&[Static]));
        let model = b.build();
        let messages = MessageBundle {
            package_local: "package-local".to_string(),
            ..MessageBundle::default()
        };
        let formatter = SignatureFormatter::new(&model).with_messages(&messages);

        assert_eq!(
            formatter
                .format_modifiers(class, SHOW | FormatOptions::SHOW_REDUNDANT_MODIFIERS)
                .unwrap(),
            "package-local static"
        );
    }

    #[test]
    fn test_class_initializer_modifiers() {
        let mut b = ModelBuilder::new("com.example");
        let class = b.class(None, "Registry", explicit(&[Public]));
        let init = b.initializer(class, explicit(&[Static]));
        let model = b.build();
        let formatter = SignatureFormatter::new(&model);

        assert_eq!(formatter.format_modifiers(init, SHOW).unwrap(), "static");
    }

    #[test]
    fn test_unsupported_element_is_invalid_argument() {
        let mut b = ModelBuilder::new("com.example");
        let class = b.class(None, "Outer", explicit(&[Public]));
        let method = b.method(class, "run", Some(void()), ModifierSet::new());
        let statement = b.statement(method);
        let file = b.file;
        let model = b.build();
        let formatter = SignatureFormatter::new(&model);

        for id in [file, statement] {
            match formatter.format_modifiers(id, SHOW) {
                Err(FormatError::InvalidArgument { element, .. }) => assert_eq!(element, id),
                other => panic!("expected invalid argument, got {:?}", other),
            }
        }
    }
}
