use serde::{Deserialize, Serialize};
use std::fmt;

/// Non-float primitive scalar kinds. These all compare by raw equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalarKind {
    Bool,
    Char,
    Int32,
    Int64,
    Text,
}

/// Static type of a declared field, as reported by the upstream validator.
///
/// The classifier never inspects runtime metadata; everything it needs is in
/// this tree, including, for declared types, the structural flags that mark
/// containers, component-like types, and callback handles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SemanticType {
    /// 32-bit floating point.
    Float32,
    /// 64-bit floating point.
    Float64,
    /// Any other primitive scalar.
    Scalar(ScalarKind),
    /// Fixed-size array of the given element type.
    Array(Box<SemanticType>),
    /// The designated lazily-resolved reference wrapper type.
    Reference,
    /// A named type, possibly parameterized, with structural flags.
    Declared(DeclaredType),
}

/// A named type with its relevant type arguments and structural flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclaredType {
    pub name: String,
    /// Type arguments, in declared order. Container descent follows the
    /// first declared (non-primitive) argument.
    #[serde(default)]
    pub args: Vec<SemanticType>,
    /// Subtype of the generic container abstraction.
    #[serde(default)]
    pub is_container: bool,
    /// Implements the structural-equivalence abstraction for nested
    /// components (the component type itself or a comparable sibling).
    #[serde(default)]
    pub is_component_like: bool,
    /// The callback-handle type, raw or parameterized.
    #[serde(default)]
    pub is_callback_handle: bool,
}

impl SemanticType {
    pub fn text() -> Self {
        SemanticType::Scalar(ScalarKind::Text)
    }

    /// A component-like declared type (e.g., a nested child component).
    pub fn component(name: impl Into<String>) -> Self {
        SemanticType::Declared(DeclaredType {
            name: name.into(),
            args: Vec::new(),
            is_container: false,
            is_component_like: true,
            is_callback_handle: false,
        })
    }

    /// A container parameterized over `element`.
    pub fn container_of(element: SemanticType) -> Self {
        SemanticType::Declared(DeclaredType {
            name: "Container".to_string(),
            args: vec![element],
            is_container: true,
            is_component_like: false,
            is_callback_handle: false,
        })
    }

    /// The raw callback-handle type.
    pub fn callback_handle() -> Self {
        SemanticType::Declared(DeclaredType {
            name: "Handle".to_string(),
            args: Vec::new(),
            is_container: false,
            is_component_like: false,
            is_callback_handle: true,
        })
    }

    /// A parameterized wrapper whose raw type is the callback handle.
    pub fn callback_handle_of(payload: SemanticType) -> Self {
        SemanticType::Declared(DeclaredType {
            name: "Handle".to_string(),
            args: vec![payload],
            is_container: false,
            is_component_like: false,
            is_callback_handle: true,
        })
    }

    /// A declared type the classifier knows nothing about.
    pub fn opaque(name: impl Into<String>) -> Self {
        SemanticType::Declared(DeclaredType {
            name: name.into(),
            args: Vec::new(),
            is_container: false,
            is_component_like: false,
            is_callback_handle: false,
        })
    }

    pub fn as_declared(&self) -> Option<&DeclaredType> {
        match self {
            SemanticType::Declared(decl) => Some(decl),
            _ => None,
        }
    }

    pub fn is_container(&self) -> bool {
        self.as_declared().is_some_and(|decl| decl.is_container)
    }
}

impl fmt::Display for SemanticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SemanticType::Float32 => write!(f, "f32"),
            SemanticType::Float64 => write!(f, "f64"),
            SemanticType::Scalar(kind) => write!(f, "{kind:?}"),
            SemanticType::Array(elem) => write!(f, "[{elem}]"),
            SemanticType::Reference => write!(f, "Reference"),
            SemanticType::Declared(decl) => {
                write!(f, "{}", decl.name)?;
                if !decl.args.is_empty() {
                    write!(f, "<")?;
                    for (index, arg) in decl.args.iter().enumerate() {
                        if index > 0 {
                            write!(f, ", ")?;
                        }
                        write!(f, "{arg}")?;
                    }
                    write!(f, ">")?;
                }
                Ok(())
            }
        }
    }
}
