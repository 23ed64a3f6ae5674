// Code Model
//
// Read-only arena over an already-resolved program structure. Every element
// knows its parent, which is how enclosing classes, parameter scopes and
// local-class contexts are found. Formatting never mutates the model.

pub mod modifiers;
pub mod types;

pub use modifiers::{Modifier, ModifierSet};
pub use types::{simple_name, BoundKind, Substitution, TypeRef, WildcardBound};

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Index of an element inside its `CodeModel`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(pub usize);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassKind {
    #[default]
    Class,
    Interface,
    Enum,
    Annotation,
    Record,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassData {
    #[serde(default)]
    pub name: Option<String>,
    /// Absent for local classes
    #[serde(default)]
    pub qualified_name: Option<String>,
    #[serde(default)]
    pub class_kind: ClassKind,
    #[serde(default)]
    pub modifiers: ModifierSet,
    #[serde(default)]
    pub extends: Vec<TypeRef>,
    #[serde(default)]
    pub implements: Vec<TypeRef>,
}

impl ClassData {
    /// Annotation types count as interfaces
    pub fn is_interface(&self) -> bool {
        matches!(self.class_kind, ClassKind::Interface | ClassKind::Annotation)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnonymousClassData {
    /// The type named after `new`
    pub base: TypeRef,
    #[serde(default)]
    pub modifiers: ModifierSet,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MethodData {
    pub name: String,
    #[serde(default)]
    pub modifiers: ModifierSet,
    /// `None` for constructors
    #[serde(default)]
    pub return_type: Option<TypeRef>,
    #[serde(default)]
    pub parameters: Vec<ElementId>,
    #[serde(default)]
    pub throws: Vec<TypeRef>,
}

impl MethodData {
    pub fn is_constructor(&self) -> bool {
        self.return_type.is_none()
    }
}

/// Fields, parameters and local variables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableData {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub modifiers: ModifierSet,
    #[serde(rename = "type")]
    pub ty: TypeRef,
    /// Initializer source text, verbatim
    #[serde(default)]
    pub initializer: Option<String>,
}

impl VariableData {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: Some(name.into()),
            modifiers: ModifierSet::new(),
            ty,
            initializer: None,
        }
    }

    pub fn with_modifiers(mut self, modifiers: ModifierSet) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn with_initializer(mut self, text: impl Into<String>) -> Self {
        self.initializer = Some(text.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InitializerData {
    #[serde(default)]
    pub modifiers: ModifierSet,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ElementKind {
    File {
        #[serde(default)]
        package: Option<String>,
    },
    Class(ClassData),
    AnonymousClass(AnonymousClassData),
    Method(MethodData),
    Field(VariableData),
    Parameter(VariableData),
    LocalVariable(VariableData),
    ClassInitializer(InitializerData),
    /// Statement declaring a local class or variable
    DeclarationStatement,
    Lambda {
        #[serde(default)]
        parameters: Vec<ElementId>,
    },
    CatchSection,
}

impl ElementKind {
    pub fn name(&self) -> &'static str {
        match self {
            ElementKind::File { .. } => "file",
            ElementKind::Class(_) => "class",
            ElementKind::AnonymousClass(_) => "anonymous_class",
            ElementKind::Method(_) => "method",
            ElementKind::Field(_) => "field",
            ElementKind::Parameter(_) => "parameter",
            ElementKind::LocalVariable(_) => "local_variable",
            ElementKind::ClassInitializer(_) => "class_initializer",
            ElementKind::DeclarationStatement => "declaration_statement",
            ElementKind::Lambda { .. } => "lambda",
            ElementKind::CatchSection => "catch_section",
        }
    }

    pub fn is_class(&self) -> bool {
        matches!(self, ElementKind::Class(_) | ElementKind::AnonymousClass(_))
    }

    pub fn as_variable(&self) -> Option<&VariableData> {
        match self {
            ElementKind::Field(v) | ElementKind::Parameter(v) | ElementKind::LocalVariable(v) => {
                Some(v)
            }
            _ => None,
        }
    }

    pub fn as_method(&self) -> Option<&MethodData> {
        match self {
            ElementKind::Method(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_class(&self) -> Option<&ClassData> {
        match self {
            ElementKind::Class(c) => Some(c),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub id: ElementId,
    #[serde(default)]
    pub parent: Option<ElementId>,
    #[serde(flatten)]
    pub kind: ElementKind,
}

impl Element {
    pub fn kind_name(&self) -> &'static str {
        self.kind.name()
    }
}

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Element at position {index} declares id {id}")]
    MisplacedId { index: usize, id: ElementId },

    #[error("Element {element} refers to missing element {missing}")]
    DanglingReference {
        element: ElementId,
        missing: ElementId,
    },

    #[error("Element {0} is its own ancestor")]
    ParentCycle(ElementId),

    #[error("{scope} lists parameter {parameter} declared elsewhere")]
    ForeignParameter {
        scope: ElementId,
        parameter: ElementId,
    },

    #[error("Element {element} has {count} visibility modifiers")]
    ConflictingVisibility { element: ElementId, count: usize },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The resolved program, as an arena of elements
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CodeModel {
    elements: Vec<Element>,
}

impl CodeModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON element array and validate it
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        let model: CodeModel = serde_json::from_str(json)?;
        model.validate()?;
        Ok(model)
    }

    /// Append an element and return its id
    pub fn add(&mut self, parent: Option<ElementId>, kind: ElementKind) -> ElementId {
        let id = ElementId(self.elements.len());
        self.elements.push(Element { id, parent, kind });
        id
    }

    /// Append a parameter and register it with its declaring method or lambda
    pub fn add_parameter(&mut self, scope: ElementId, data: VariableData) -> ElementId {
        let id = self.add(Some(scope), ElementKind::Parameter(data));
        if let Some(element) = self.elements.get_mut(scope.0) {
            match &mut element.kind {
                ElementKind::Method(method) => method.parameters.push(id),
                ElementKind::Lambda { parameters } => parameters.push(id),
                _ => {}
            }
        }
        id
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id.0)
    }

    /// Mutable access while a model is being built
    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.get_mut(id.0)
    }

    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn parent(&self, id: ElementId) -> Option<&Element> {
        self.get(id)?.parent.and_then(|p| self.get(p))
    }

    /// Strict ancestors, nearest first
    pub fn ancestors(&self, id: ElementId) -> Ancestors<'_> {
        Ancestors {
            model: self,
            next: self.get(id).and_then(|e| e.parent),
            remaining: self.elements.len(),
        }
    }

    /// Nearest class (named or anonymous) strictly above `id`
    pub fn enclosing_class(&self, id: ElementId) -> Option<&Element> {
        self.ancestors(id).find(|e| e.kind.is_class())
    }

    /// Outermost class containing `id`, or `id` itself when it is top-level
    pub fn top_level_class(&self, id: ElementId) -> Option<&Element> {
        let own = self.get(id).filter(|e| e.kind.is_class());
        self.ancestors(id).filter(|e| e.kind.is_class()).last().or(own)
    }

    /// Find a named class by its fully qualified name
    pub fn resolve_class(&self, qualified_name: &str) -> Option<&Element> {
        self.elements.iter().find(|e| {
            e.kind
                .as_class()
                .and_then(|c| c.qualified_name.as_deref())
                == Some(qualified_name)
        })
    }

    /// Whether `id` sits directly inside a declaration statement
    pub fn is_local(&self, id: ElementId) -> bool {
        matches!(
            self.parent(id).map(|p| &p.kind),
            Some(ElementKind::DeclarationStatement)
        )
    }

    /// Check structural consistency of a model built outside this crate
    pub fn validate(&self) -> Result<(), ModelError> {
        for (index, element) in self.elements.iter().enumerate() {
            if element.id.0 != index {
                return Err(ModelError::MisplacedId {
                    index,
                    id: element.id,
                });
            }
            if let Some(parent) = element.parent {
                if self.get(parent).is_none() {
                    return Err(ModelError::DanglingReference {
                        element: element.id,
                        missing: parent,
                    });
                }
            }
        }

        for element in &self.elements {
            self.check_acyclic(element.id)?;
            if let Some(modifiers) = modifiers_of(&element.kind) {
                let count = modifiers.listed_visibility_count();
                if count > 1 {
                    return Err(ModelError::ConflictingVisibility {
                        element: element.id,
                        count,
                    });
                }
            }
            let parameters = match &element.kind {
                ElementKind::Method(method) => method.parameters.as_slice(),
                ElementKind::Lambda { parameters } => parameters.as_slice(),
                _ => &[],
            };
            for &parameter in parameters {
                let declared = self.get(parameter).ok_or(ModelError::DanglingReference {
                    element: element.id,
                    missing: parameter,
                })?;
                if declared.parent != Some(element.id)
                    || !matches!(declared.kind, ElementKind::Parameter(_))
                {
                    return Err(ModelError::ForeignParameter {
                        scope: element.id,
                        parameter,
                    });
                }
            }
        }
        Ok(())
    }

    fn check_acyclic(&self, id: ElementId) -> Result<(), ModelError> {
        let mut current = self.get(id).and_then(|e| e.parent);
        let mut steps = 0;
        while let Some(parent) = current {
            if parent == id || steps > self.elements.len() {
                return Err(ModelError::ParentCycle(id));
            }
            steps += 1;
            current = self.get(parent).and_then(|e| e.parent);
        }
        Ok(())
    }
}

/// Modifier set of a modifier-list owner
pub(crate) fn modifiers_of(kind: &ElementKind) -> Option<&ModifierSet> {
    match kind {
        ElementKind::Class(c) => Some(&c.modifiers),
        ElementKind::AnonymousClass(a) => Some(&a.modifiers),
        ElementKind::Method(m) => Some(&m.modifiers),
        ElementKind::Field(v) | ElementKind::Parameter(v) | ElementKind::LocalVariable(v) => {
            Some(&v.modifiers)
        }
        ElementKind::ClassInitializer(i) => Some(&i.modifiers),
        _ => None,
    }
}

/// Iterator over strict ancestors
pub struct Ancestors<'a> {
    model: &'a CodeModel,
    next: Option<ElementId>,
    // Bounds the walk on unvalidated models with parent cycles
    remaining: usize,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let element = self.model.get(self.next?)?;
        self.next = element.parent;
        Some(element)
    }
}
