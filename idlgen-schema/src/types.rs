//! Type references.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Built-in scalar types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BaseType {
    Void,
    Bool,
    Byte,
    I16,
    I32,
    I64,
    Double,
    String,
    Binary,
    Uuid,
}

impl BaseType {
    /// Get the IDL spelling of this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            BaseType::Void => "void",
            BaseType::Bool => "bool",
            BaseType::Byte => "byte",
            BaseType::I16 => "i16",
            BaseType::I32 => "i32",
            BaseType::I64 => "i64",
            BaseType::Double => "double",
            BaseType::String => "string",
            BaseType::Binary => "binary",
            BaseType::Uuid => "uuid",
        }
    }
}

/// A reference to a type, as resolved by the front end.
///
/// Typedefs own the type they alias, so following the chain with
/// [`Type::true_type`] always terminates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Type {
    /// A built-in scalar.
    Base(BaseType),
    /// A named alias for another type.
    Typedef { name: String, target: Box<Type> },
    /// A struct, union or exception, by name.
    Struct(String),
    /// An enum, by name.
    Enum(String),
    List(Box<Type>),
    Set(Box<Type>),
    Map { key: Box<Type>, value: Box<Type> },
    /// A service reference (used by `extends`).
    Service(String),
}

impl Type {
    /// Shorthand for a base type.
    pub fn base(base: BaseType) -> Self {
        Type::Base(base)
    }

    /// Create a typedef alias of `target`.
    pub fn typedef(name: impl Into<String>, target: Type) -> Self {
        Type::Typedef {
            name: name.into(),
            target: Box::new(target),
        }
    }

    /// Follow typedef aliases down to the first non-typedef type.
    pub fn true_type(&self) -> &Type {
        let mut ty = self;
        while let Type::Typedef { target, .. } = ty {
            ty = target;
        }
        ty
    }

    /// Returns true if this is (an alias of) the given base type.
    pub fn is_base(&self, base: BaseType) -> bool {
        matches!(self.true_type(), Type::Base(b) if *b == base)
    }

    /// Returns true for lists, sets and maps (after resolving aliases).
    pub fn is_container(&self) -> bool {
        matches!(
            self.true_type(),
            Type::List(_) | Type::Set(_) | Type::Map { .. }
        )
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Base(b) => f.write_str(b.as_str()),
            Type::Typedef { name, .. }
            | Type::Struct(name)
            | Type::Enum(name)
            | Type::Service(name) => f.write_str(name),
            Type::List(elem) => write!(f, "list<{}>", elem),
            Type::Set(elem) => write!(f, "set<{}>", elem),
            Type::Map { key, value } => write!(f, "map<{},{}>", key, value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_true_type_follows_chain() {
        let inner = Type::typedef("UserId", Type::base(BaseType::I64));
        let outer = Type::typedef("AccountId", inner);

        assert_eq!(outer.true_type(), &Type::Base(BaseType::I64));
        assert!(outer.is_base(BaseType::I64));
    }

    #[test]
    fn test_true_type_of_terminal_is_itself() {
        let ty = Type::Struct("Point".into());
        assert_eq!(ty.true_type(), &ty);
    }

    #[test]
    fn test_is_container_through_alias() {
        let ty = Type::typedef("Names", Type::List(Box::new(Type::base(BaseType::String))));
        assert!(ty.is_container());
        assert!(!Type::base(BaseType::String).is_container());
    }

    #[test]
    fn test_display() {
        let map = Type::Map {
            key: Box::new(Type::base(BaseType::String)),
            value: Box::new(Type::List(Box::new(Type::Struct("Point".into())))),
        };
        assert_eq!(map.to_string(), "map<string,list<Point>>");
        assert_eq!(Type::typedef("Id", Type::base(BaseType::I32)).to_string(), "Id");
    }

    #[test]
    fn test_deserialize() {
        let ty: Type = serde_json::from_str(r#"{"list": {"base": "i32"}}"#).unwrap();
        assert_eq!(ty, Type::List(Box::new(Type::Base(BaseType::I32))));

        let ty: Type =
            serde_json::from_str(r#"{"typedef": {"name": "Id", "target": {"base": "i64"}}}"#)
                .unwrap();
        assert!(ty.is_base(BaseType::I64));
    }
}
