// Method signature tests

use crate::format::{FormatError, FormatOptions, SignatureFormatter};
use crate::model::{
    CodeModel, ElementId, ElementKind, MethodData, Modifier, ModifierSet, Substitution, TypeRef,
    VariableData,
};
use crate::tests::helpers::{explicit, int, string, void, ModelBuilder};

/// `void run(String a, ..., String h)` with `count` parameters
fn method_with_params(count: usize) -> (CodeModel, ElementId) {
    let mut b = ModelBuilder::new("com.example");
    let class = b.class(None, "Task", explicit(&[Modifier::Public]));
    let run = b.method(class, "run", Some(void()), explicit(&[Modifier::Public]));
    for index in 0..count {
        let name = char::from(b'a' + index as u8).to_string();
        b.param(run, &name, string());
    }
    (b.build(), run)
}

#[cfg(test)]
mod method_tests {
    use super::*;
    use FormatOptions as F;

    #[test]
    fn test_parameter_list_cut_after_default_limit() {
        let (model, run) = method_with_params(8);
        let formatter = SignatureFormatter::new(&model);

        let text = formatter
            .format_method(run, &Substitution::empty(), F::SHOW_NAME | F::SHOW_PARAMETERS, F::SHOW_TYPE)
            .unwrap();
        assert_eq!(text, "run(String, String, String, String, String, String, String, ...)");
    }

    #[test]
    fn test_nine_parameters_show_exactly_seven() {
        let (model, run) = method_with_params(9);
        let formatter = SignatureFormatter::new(&model);

        let text = formatter
            .format_method_with_limit(
                run,
                &Substitution::empty(),
                F::SHOW_NAME | F::SHOW_PARAMETERS,
                F::SHOW_TYPE | F::SHOW_NAME,
                7,
            )
            .unwrap();
        assert_eq!(text.matches("String ").count(), 7);
        assert!(text.ends_with("String g, ...)"));
    }

    #[test]
    fn test_short_parameter_list_has_no_ellipsis() {
        let (model, run) = method_with_params(3);
        let formatter = SignatureFormatter::new(&model);

        let text = formatter
            .format_method(run, &Substitution::empty(), F::SHOW_NAME | F::SHOW_PARAMETERS, F::SHOW_TYPE | F::SHOW_NAME)
            .unwrap();
        assert_eq!(text, "run(String a, String b, String c)");
    }

    #[test]
    fn test_formatter_limit_override() {
        let (model, run) = method_with_params(4);
        let options = F::SHOW_NAME | F::SHOW_PARAMETERS;

        let two = SignatureFormatter::new(&model).with_max_params(2);
        assert_eq!(
            two.format_method(run, &Substitution::empty(), options, F::SHOW_NAME).unwrap(),
            "run(a, b, ...)"
        );

        let none = SignatureFormatter::new(&model).with_max_params(0);
        assert_eq!(
            none.format_method(run, &Substitution::empty(), options, F::SHOW_NAME).unwrap(),
            "run(, ...)"
        );
    }

    #[test]
    fn test_full_signature_with_modifiers_and_throws() {
        let mut b = ModelBuilder::new("com.example");
        let class = b.class(None, "Loader", explicit(&[Modifier::Public]));
        let load = b.method(
            class,
            "load",
            Some(TypeRef::generic("java.util.List", vec![string()])),
            explicit(&[Modifier::Public, Modifier::Static]),
        );
        b.param(load, "path", string());
        b.param(load, "retries", int());
        b.method_data(load).throws = vec![
            TypeRef::class("java.io.IOException"),
            TypeRef::class("java.lang.InterruptedException"),
        ];
        let model = b.build();
        let formatter = SignatureFormatter::new(&model);

        let options = F::SHOW_MODIFIERS | F::SHOW_TYPE | F::SHOW_NAME | F::SHOW_PARAMETERS | F::SHOW_THROWS;
        assert_eq!(
            formatter
                .format_method(load, &Substitution::empty(), options, F::SHOW_TYPE | F::SHOW_NAME)
                .unwrap(),
            "public static List<String> load(String path, int retries) throws IOException, InterruptedException"
        );
        assert_eq!(
            formatter
                .format_method(load, &Substitution::empty(), options | F::SHOW_FQ_CLASS_NAMES, F::SHOW_TYPE | F::SHOW_FQ_CLASS_NAMES)
                .unwrap(),
            "public static java.util.List<java.lang.String> load(java.lang.String, int) throws java.io.IOException, java.lang.InterruptedException"
        );
    }

    #[test]
    fn test_empty_throws_list_is_omitted() {
        let (model, run) = method_with_params(0);
        let formatter = SignatureFormatter::new(&model);

        let text = formatter
            .format_method(run, &Substitution::empty(), F::SHOW_NAME | F::SHOW_PARAMETERS | F::SHOW_THROWS, F::NONE)
            .unwrap();
        assert_eq!(text, "run()");
    }

    #[test]
    fn test_constructor_has_no_return_type() {
        let mut b = ModelBuilder::new("com.example");
        let class = b.class(None, "Widget", explicit(&[Modifier::Public]));
        let constructor = b.method(class, "Widget", None, explicit(&[Modifier::Public]));
        b.param(constructor, "name", string());
        let model = b.build();
        let formatter = SignatureFormatter::new(&model);

        let before = F::SHOW_TYPE | F::SHOW_NAME | F::SHOW_PARAMETERS;
        assert_eq!(
            formatter
                .format_method(constructor, &Substitution::empty(), before, F::SHOW_TYPE | F::SHOW_NAME)
                .unwrap(),
            "Widget(String name)"
        );
        assert_eq!(
            formatter
                .format_method(constructor, &Substitution::empty(), before | F::TYPE_AFTER, F::SHOW_TYPE)
                .unwrap(),
            "Widget(String)"
        );
    }

    #[test]
    fn test_return_type_after() {
        let mut b = ModelBuilder::new("com.example");
        let class = b.class(None, "Stack", explicit(&[Modifier::Public]));
        let size = b.method(class, "size", Some(int()), explicit(&[Modifier::Public]));
        let model = b.build();
        let formatter = SignatureFormatter::new(&model);

        let options = F::SHOW_NAME | F::SHOW_PARAMETERS | F::SHOW_TYPE | F::TYPE_AFTER;
        assert_eq!(
            formatter.format_method(size, &Substitution::empty(), options, F::SHOW_TYPE).unwrap(),
            "size():int"
        );
        assert_eq!(
            formatter
                .format_method(size, &Substitution::empty(), options | F::SHOW_MODIFIERS | F::MODIFIERS_AFTER, F::SHOW_TYPE)
                .unwrap(),
            "size():int public"
        );
    }

    #[test]
    fn test_containing_class_qualifier() {
        let mut b = ModelBuilder::new("com.example");
        let outer = b.class(None, "Outer", explicit(&[Modifier::Public]));
        let inner = b.class(Some(outer), "Inner", explicit(&[Modifier::Static]));
        let run = b.method(inner, "run", Some(void()), ModifierSet::new());
        let model = b.build();
        let formatter = SignatureFormatter::new(&model);

        let options = F::SHOW_NAME | F::SHOW_CONTAINING_CLASS | F::SHOW_PARAMETERS;
        assert_eq!(
            formatter.format_method(run, &Substitution::empty(), options, F::NONE).unwrap(),
            "Inner.run()"
        );
        assert_eq!(
            formatter
                .format_method(run, &Substitution::empty(), options | F::SHOW_FQ_NAME | F::SHOW_TYPE, F::NONE)
                .unwrap(),
            "void com.example.Outer.Inner.run()"
        );
    }

    #[test]
    fn test_generic_method_types_are_substituted() {
        let mut b = ModelBuilder::new("com.example");
        let class = b.class(None, "Box", explicit(&[Modifier::Public]));
        let put = b.method(class, "put", Some(TypeRef::type_parameter("T")), ModifierSet::new());
        b.param(put, "value", TypeRef::type_parameter("T"));
        let model = b.build();
        let formatter = SignatureFormatter::new(&model);
        let substitution = Substitution::empty().bind("T", TypeRef::class("java.lang.Long"));

        assert_eq!(
            formatter
                .format_method(put, &substitution, F::SHOW_TYPE | F::SHOW_NAME | F::SHOW_PARAMETERS, F::SHOW_TYPE | F::SHOW_NAME)
                .unwrap(),
            "Long put(Long value)"
        );
    }

    #[test]
    fn test_field_is_not_a_method() {
        let mut b = ModelBuilder::new("com.example");
        let class = b.class(None, "Widget", ModifierSet::new());
        let field = b.field(class, VariableData::new("size", int()));
        let model = b.build();
        let formatter = SignatureFormatter::new(&model);

        assert!(matches!(
            formatter.format_method(field, &Substitution::empty(), F::SHOW_NAME, F::NONE),
            Err(FormatError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_listed_field_is_not_a_parameter() {
        let mut model = CodeModel::new();
        let file = model.add(None, ElementKind::File { package: None });
        let field = model.add(Some(file), ElementKind::Field(VariableData::new("count", int())));
        let run = model.add(
            Some(file),
            ElementKind::Method(MethodData {
                name: "run".to_string(),
                parameters: vec![field],
                ..Default::default()
            }),
        );
        let formatter = SignatureFormatter::new(&model);

        let result = formatter.format_method(run, &Substitution::empty(), F::SHOW_PARAMETERS, F::SHOW_TYPE);
        assert_eq!(
            result,
            Err(FormatError::InvalidArgument {
                operation: "format as parameter",
                kind: "field",
                element: field,
            })
        );
    }
}
