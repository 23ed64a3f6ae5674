// Type references and generic substitution
//
// Types are already resolved: class types carry their fully qualified name,
// type parameters carry their declared bound. Two renderings exist, the
// presentable one (simple names, as a reader would write it) and the
// canonical one (fully qualified).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const OBJECT: &str = "java.lang.Object";

/// Direction of a wildcard bound
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundKind {
    Extends,
    Super,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WildcardBound {
    pub kind: BoundKind,
    pub bound: Box<TypeRef>,
}

/// A resolved reference to a type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TypeRef {
    /// `int`, `void`, ...
    Primitive { name: String },
    /// A class or interface type with optional generic arguments
    Class {
        qualified_name: String,
        #[serde(default)]
        args: Vec<TypeRef>,
    },
    /// A reference to a declared type parameter
    TypeParameter {
        name: String,
        #[serde(default)]
        bound: Option<Box<TypeRef>>,
    },
    Array { component: Box<TypeRef> },
    /// `?`, `? extends T`, `? super T`
    Wildcard {
        #[serde(default)]
        bound: Option<WildcardBound>,
    },
}

impl TypeRef {
    pub fn primitive(name: impl Into<String>) -> Self {
        TypeRef::Primitive { name: name.into() }
    }

    pub fn class(qualified_name: impl Into<String>) -> Self {
        TypeRef::Class {
            qualified_name: qualified_name.into(),
            args: Vec::new(),
        }
    }

    pub fn generic(qualified_name: impl Into<String>, args: Vec<TypeRef>) -> Self {
        TypeRef::Class {
            qualified_name: qualified_name.into(),
            args,
        }
    }

    pub fn type_parameter(name: impl Into<String>) -> Self {
        TypeRef::TypeParameter {
            name: name.into(),
            bound: None,
        }
    }

    pub fn bounded_type_parameter(name: impl Into<String>, bound: TypeRef) -> Self {
        TypeRef::TypeParameter {
            name: name.into(),
            bound: Some(Box::new(bound)),
        }
    }

    pub fn array(component: TypeRef) -> Self {
        TypeRef::Array {
            component: Box::new(component),
        }
    }

    pub fn wildcard(bound: Option<(BoundKind, TypeRef)>) -> Self {
        TypeRef::Wildcard {
            bound: bound.map(|(kind, ty)| WildcardBound {
                kind,
                bound: Box::new(ty),
            }),
        }
    }

    /// Replace bound type parameters. Unbound parameters are left untouched.
    pub fn substitute(&self, substitution: &Substitution) -> TypeRef {
        if substitution.is_empty() {
            return self.clone();
        }
        match self {
            TypeRef::Primitive { .. } => self.clone(),
            TypeRef::Class {
                qualified_name,
                args,
            } => TypeRef::Class {
                qualified_name: qualified_name.clone(),
                args: args.iter().map(|a| a.substitute(substitution)).collect(),
            },
            TypeRef::TypeParameter { name, .. } => substitution
                .get(name)
                .cloned()
                .unwrap_or_else(|| self.clone()),
            TypeRef::Array { component } => TypeRef::array(component.substitute(substitution)),
            TypeRef::Wildcard { bound } => TypeRef::Wildcard {
                bound: bound.as_ref().map(|b| WildcardBound {
                    kind: b.kind,
                    bound: Box::new(b.bound.substitute(substitution)),
                }),
            },
        }
    }

    /// Strip generic arguments; type variables erase to their bound.
    pub fn erasure(&self) -> TypeRef {
        match self {
            TypeRef::Primitive { .. } => self.clone(),
            TypeRef::Class { qualified_name, .. } => TypeRef::class(qualified_name.clone()),
            TypeRef::TypeParameter { bound, .. } => match bound {
                Some(bound) => bound.erasure(),
                None => TypeRef::class(OBJECT),
            },
            TypeRef::Array { component } => TypeRef::array(component.erasure()),
            TypeRef::Wildcard { bound } => match bound {
                Some(WildcardBound {
                    kind: BoundKind::Extends,
                    bound,
                }) => bound.erasure(),
                _ => TypeRef::class(OBJECT),
            },
        }
    }

    /// Short, source-like text: `Map<String,List<T>>`
    pub fn presentable_text(&self) -> String {
        self.render(false)
    }

    /// Fully qualified text: `java.util.Map<java.lang.String,java.util.List<T>>`
    pub fn canonical_text(&self) -> String {
        self.render(true)
    }

    fn render(&self, qualified: bool) -> String {
        match self {
            TypeRef::Primitive { name } => name.clone(),
            TypeRef::Class {
                qualified_name,
                args,
            } => {
                let mut text = if qualified {
                    qualified_name.clone()
                } else {
                    simple_name(qualified_name).to_string()
                };
                if !args.is_empty() {
                    let rendered: Vec<String> = args.iter().map(|a| a.render(qualified)).collect();
                    text.push('<');
                    text.push_str(&rendered.join(","));
                    text.push('>');
                }
                text
            }
            TypeRef::TypeParameter { name, .. } => name.clone(),
            TypeRef::Array { component } => format!("{}[]", component.render(qualified)),
            TypeRef::Wildcard { bound } => match bound {
                None => "?".to_string(),
                Some(WildcardBound { kind, bound }) => {
                    let keyword = match kind {
                        BoundKind::Extends => "extends",
                        BoundKind::Super => "super",
                    };
                    format!("? {} {}", keyword, bound.render(qualified))
                }
            },
        }
    }
}

/// Last segment of a dotted name
pub fn simple_name(qualified_name: &str) -> &str {
    qualified_name
        .rsplit_once('.')
        .map(|(_, name)| name)
        .unwrap_or(qualified_name)
}

/// Binding of type parameter names to types
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Substitution {
    bindings: BTreeMap<String, TypeRef>,
}

impl Substitution {
    /// The identity substitution
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn bind(mut self, parameter: impl Into<String>, ty: TypeRef) -> Self {
        self.bindings.insert(parameter.into(), ty);
        self
    }

    pub fn get(&self, parameter: &str) -> Option<&TypeRef> {
        self.bindings.get(parameter)
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
