//! Program definitions: the root of a resolved IDL document.

use serde::{Deserialize, Serialize};

use crate::Type;

/// A resolved IDL document.
///
/// Every collection keeps declaration order; generators rely on it for
/// deterministic output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Program {
    /// Program name (usually the file stem of the IDL document).
    pub name: String,
    /// Output path declared for this program.
    #[serde(default)]
    pub out_path: String,
    /// Whether `out_path` is absolute (used verbatim) or relative.
    #[serde(default)]
    pub out_path_is_absolute: bool,
    #[serde(default)]
    pub typedefs: Vec<Typedef>,
    #[serde(default)]
    pub enums: Vec<Enum>,
    /// Structs, unions and exceptions in declared order.
    #[serde(default)]
    pub structs: Vec<Struct>,
    #[serde(default)]
    pub services: Vec<Service>,
    #[serde(default)]
    pub consts: Vec<Const>,
}

impl Program {
    /// Create an empty program.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set a relative output path.
    pub fn out_path(mut self, path: impl Into<String>) -> Self {
        self.out_path = path.into();
        self.out_path_is_absolute = false;
        self
    }

    /// Set an absolute output path.
    pub fn absolute_out_path(mut self, path: impl Into<String>) -> Self {
        self.out_path = path.into();
        self.out_path_is_absolute = true;
        self
    }

    pub fn with_typedef(mut self, typedef: Typedef) -> Self {
        self.typedefs.push(typedef);
        self
    }

    pub fn with_enum(mut self, en: Enum) -> Self {
        self.enums.push(en);
        self
    }

    pub fn with_struct(mut self, st: Struct) -> Self {
        self.structs.push(st);
        self
    }

    pub fn with_service(mut self, service: Service) -> Self {
        self.services.push(service);
        self
    }

    pub fn with_const(mut self, constant: Const) -> Self {
        self.consts.push(constant);
        self
    }

    /// Iterate over the exceptions only.
    pub fn exceptions(&self) -> impl Iterator<Item = &Struct> {
        self.structs.iter().filter(|s| s.is_exception())
    }

    /// Look up a service by name.
    pub fn service(&self, name: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.name == name)
    }
}

/// A named alias for another type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Typedef {
    pub name: String,
    pub target: Type,
    #[serde(default)]
    pub doc: Option<String>,
}

impl Typedef {
    pub fn new(name: impl Into<String>, target: Type) -> Self {
        Self {
            name: name.into(),
            target,
            doc: None,
        }
    }
}

/// An enumeration of named integer constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enum {
    pub name: String,
    #[serde(default)]
    pub values: Vec<EnumValue>,
    #[serde(default)]
    pub doc: Option<String>,
}

impl Enum {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: Vec::new(),
            doc: None,
        }
    }

    pub fn value(mut self, name: impl Into<String>, value: i32) -> Self {
        self.values.push(EnumValue {
            name: name.into(),
            value,
        });
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumValue {
    pub name: String,
    pub value: i32,
}

/// What flavour of aggregate a [`Struct`] is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StructKind {
    #[default]
    Struct,
    Union,
    Exception,
}

/// A named aggregate of ordered fields.
///
/// Exceptions share the representation and differ only by `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Struct {
    pub name: String,
    #[serde(default)]
    pub kind: StructKind,
    #[serde(default)]
    pub fields: Vec<Field>,
    #[serde(default)]
    pub doc: Option<String>,
}

impl Struct {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: StructKind::Struct,
            fields: Vec::new(),
            doc: None,
        }
    }

    pub fn exception(name: impl Into<String>) -> Self {
        Self {
            kind: StructKind::Exception,
            ..Self::new(name)
        }
    }

    pub fn union(name: impl Into<String>) -> Self {
        Self {
            kind: StructKind::Union,
            ..Self::new(name)
        }
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn is_exception(&self) -> bool {
        self.kind == StructKind::Exception
    }

    pub fn is_union(&self) -> bool {
        self.kind == StructKind::Union
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Requiredness {
    Required,
    Optional,
    #[default]
    Default,
}

/// A struct member, function parameter or declared exception.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    /// Field id (wire tag).
    pub id: i32,
    pub name: String,
    #[serde(rename = "type")]
    pub ty: Type,
    #[serde(default)]
    pub requiredness: Requiredness,
    #[serde(default)]
    pub default: Option<ConstValue>,
    #[serde(default)]
    pub doc: Option<String>,
}

impl Field {
    pub fn new(id: i32, name: impl Into<String>, ty: Type) -> Self {
        Self {
            id,
            name: name.into(),
            ty,
            requiredness: Requiredness::Default,
            default: None,
            doc: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.requiredness = Requiredness::Required;
        self
    }

    pub fn optional(mut self) -> Self {
        self.requiredness = Requiredness::Optional;
        self
    }

    pub fn default_value(mut self, value: ConstValue) -> Self {
        self.default = Some(value);
        self
    }
}

/// A set of functions exposed together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub name: String,
    #[serde(default)]
    pub functions: Vec<Function>,
    /// Name of the service this one extends.
    #[serde(default)]
    pub extends: Option<String>,
    #[serde(default)]
    pub doc: Option<String>,
}

impl Service {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            functions: Vec::new(),
            extends: None,
            doc: None,
        }
    }

    pub fn extends(mut self, parent: impl Into<String>) -> Self {
        self.extends = Some(parent.into());
        self
    }

    pub fn function(mut self, function: Function) -> Self {
        self.functions.push(function);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Function {
    pub name: String,
    pub returns: Type,
    #[serde(default)]
    pub params: Vec<Field>,
    /// Declared exceptions (`throws (1: NotFound err)`).
    #[serde(default)]
    pub throws: Vec<Field>,
    #[serde(default)]
    pub oneway: bool,
    #[serde(default)]
    pub doc: Option<String>,
}

impl Function {
    pub fn new(name: impl Into<String>, returns: Type) -> Self {
        Self {
            name: name.into(),
            returns,
            params: Vec::new(),
            throws: Vec::new(),
            oneway: false,
            doc: None,
        }
    }

    pub fn param(mut self, field: Field) -> Self {
        self.params.push(field);
        self
    }

    pub fn throws(mut self, field: Field) -> Self {
        self.throws.push(field);
        self
    }

    pub fn oneway(mut self) -> Self {
        self.oneway = true;
        self
    }
}

/// A named constant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Const {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: Type,
    pub value: ConstValue,
}

impl Const {
    pub fn new(name: impl Into<String>, ty: Type, value: ConstValue) -> Self {
        Self {
            name: name.into(),
            ty,
            value,
        }
    }
}

/// A literal value as written in the IDL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstValue {
    Integer(i64),
    Double(f64),
    String(String),
    /// Reference to another constant or an enum value.
    Identifier(String),
    List(Vec<ConstValue>),
    Map(Vec<(ConstValue, ConstValue)>),
}
