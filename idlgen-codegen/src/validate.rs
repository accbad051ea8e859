//! Reserved-word validation of schema identifiers.

use idlgen_core::{Error, IdentKind, Result};
use idlgen_schema::{Field, Program};

use crate::ReservedWords;

/// A user-chosen name found in a program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier<'a> {
    pub name: &'a str,
    pub kind: IdentKind,
    /// Dotted path to the item (e.g. "Calculator.add.lhs").
    pub location: String,
}

impl<'a> Identifier<'a> {
    fn new(name: &'a str, kind: IdentKind, location: String) -> Self {
        Self {
            name,
            kind,
            location,
        }
    }

    fn conflict(&self) -> Box<Error> {
        Error::naming_conflict(self.name, self.kind, self.location.clone())
    }
}

/// Every identifier in `program`, each exactly once.
///
/// Order: enums (then their values), typedefs, structs and exceptions (then
/// their fields), consts, services (then functions, parameters and declared
/// exceptions).
pub fn identifiers(program: &Program) -> Vec<Identifier<'_>> {
    let mut ids = Vec::new();

    for en in &program.enums {
        ids.push(Identifier::new(&en.name, IdentKind::Enum, en.name.clone()));
        for value in &en.values {
            ids.push(Identifier::new(
                &value.name,
                IdentKind::EnumValue,
                format!("{}.{}", en.name, value.name),
            ));
        }
    }

    for typedef in &program.typedefs {
        ids.push(Identifier::new(
            &typedef.name,
            IdentKind::Typedef,
            typedef.name.clone(),
        ));
    }

    for st in &program.structs {
        let kind = if st.is_exception() {
            IdentKind::Exception
        } else {
            IdentKind::Struct
        };
        ids.push(Identifier::new(&st.name, kind, st.name.clone()));
        push_fields(&mut ids, &st.fields, IdentKind::Field, &st.name);
    }

    for constant in &program.consts {
        ids.push(Identifier::new(
            &constant.name,
            IdentKind::Const,
            constant.name.clone(),
        ));
    }

    for service in &program.services {
        ids.push(Identifier::new(
            &service.name,
            IdentKind::Service,
            service.name.clone(),
        ));
        for function in &service.functions {
            let path = format!("{}.{}", service.name, function.name);
            ids.push(Identifier::new(
                &function.name,
                IdentKind::Function,
                path.clone(),
            ));
            push_fields(&mut ids, &function.params, IdentKind::Parameter, &path);
            push_fields(&mut ids, &function.throws, IdentKind::Throws, &path);
        }
    }

    ids
}

fn push_fields<'a>(
    ids: &mut Vec<Identifier<'a>>,
    fields: &'a [Field],
    kind: IdentKind,
    parent: &str,
) {
    for field in fields {
        ids.push(Identifier::new(
            &field.name,
            kind,
            format!("{}.{}", parent, field.name),
        ));
    }
}

/// Checks schema identifiers against one target's reserved words.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    reserved: ReservedWords,
}

impl Validator {
    pub fn new(reserved: ReservedWords) -> Self {
        Self { reserved }
    }

    /// Get the reserved words this validator checks against.
    pub fn reserved_words(&self) -> &ReservedWords {
        &self.reserved
    }

    /// Fail on the first identifier that is a reserved word.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NamingConflict`] naming the identifier, its kind and
    /// where it was declared.
    pub fn validate(&self, program: &Program) -> Result<()> {
        match identifiers(program)
            .iter()
            .find(|id| self.reserved.contains(id.name))
        {
            Some(id) => Err(id.conflict()),
            None => Ok(()),
        }
    }

    /// Collect every reserved-word conflict, in validation order.
    pub fn conflicts(&self, program: &Program) -> Vec<Error> {
        identifiers(program)
            .iter()
            .filter(|id| self.reserved.contains(id.name))
            .map(|id| *id.conflict())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use idlgen_schema::{
        BaseType, Const, ConstValue, Enum, Field, Function, Service, Struct, Type, Typedef,
    };

    use super::*;

    fn i32_field(id: i32, name: &str) -> Field {
        Field::new(id, name, Type::base(BaseType::I32))
    }

    fn sample_program() -> Program {
        Program::new("sample")
            .with_enum(Enum::new("Color").value("RED", 1))
            .with_typedef(Typedef::new("Id", Type::base(BaseType::I64)))
            .with_struct(Struct::new("Point").field(i32_field(1, "x")))
            .with_struct(Struct::exception("Oops").field(i32_field(1, "code")))
            .with_const(Const::new(
                "ORIGIN",
                Type::base(BaseType::I32),
                ConstValue::Integer(0),
            ))
            .with_service(
                Service::new("Calc").function(
                    Function::new("add", Type::base(BaseType::I32))
                        .param(i32_field(1, "lhs"))
                        .throws(Field::new(1, "err", Type::Struct("Oops".into()))),
                ),
            )
    }

    #[test]
    fn test_identifiers_order_and_kinds() {
        let program = sample_program();
        let ids: Vec<_> = identifiers(&program)
            .into_iter()
            .map(|id| (id.name, id.kind))
            .collect();

        assert_eq!(
            ids,
            [
                ("Color", IdentKind::Enum),
                ("RED", IdentKind::EnumValue),
                ("Id", IdentKind::Typedef),
                ("Point", IdentKind::Struct),
                ("x", IdentKind::Field),
                ("Oops", IdentKind::Exception),
                ("code", IdentKind::Field),
                ("ORIGIN", IdentKind::Const),
                ("Calc", IdentKind::Service),
                ("add", IdentKind::Function),
                ("lhs", IdentKind::Parameter),
                ("err", IdentKind::Throws),
            ]
        );
    }

    #[test]
    fn test_locations() {
        let program = sample_program();
        let ids = identifiers(&program);
        let lhs = ids.iter().find(|id| id.name == "lhs").unwrap();
        assert_eq!(lhs.location, "Calc.add.lhs");
        let red = ids.iter().find(|id| id.name == "RED").unwrap();
        assert_eq!(red.location, "Color.RED");
    }

    #[test]
    fn test_validate_passes_without_conflicts() {
        let validator = Validator::new(ReservedWords::new(["class"]));
        assert!(validator.validate(&sample_program()).is_ok());
    }

    #[test]
    fn test_validate_reports_field_conflict() {
        let program = Program::new("shapes")
            .with_struct(Struct::new("Point").field(i32_field(1, "class")));
        let validator = Validator::new(ReservedWords::new(["class"]));

        let err = validator.validate(&program).unwrap_err();
        match *err {
            Error::NamingConflict {
                ref name,
                kind,
                ref location,
            } => {
                assert_eq!(name, "class");
                assert_eq!(kind, IdentKind::Field);
                assert_eq!(location, "Point.class");
            }
            ref other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_validate_stops_at_first_conflict() {
        let validator = Validator::new(ReservedWords::new(["Color", "lhs"]));
        let err = validator.validate(&sample_program()).unwrap_err();
        assert!(matches!(*err, Error::NamingConflict { ref name, .. } if name == "Color"));
    }

    #[test]
    fn test_conflicts_collects_all() {
        let validator = Validator::new(ReservedWords::new(["Color", "lhs", "err"]));
        let names: Vec<_> = validator
            .conflicts(&sample_program())
            .into_iter()
            .map(|e| match e {
                Error::NamingConflict { name, kind, .. } => (name, kind),
                other => panic!("unexpected error: {other}"),
            })
            .collect();

        assert_eq!(
            names,
            [
                ("Color".to_string(), IdentKind::Enum),
                ("lhs".to_string(), IdentKind::Parameter),
                ("err".to_string(), IdentKind::Throws),
            ]
        );
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let validator = Validator::new(ReservedWords::new(["class"]));
        let program = Program::new("p").with_struct(Struct::new("Class"));
        assert!(validator.validate(&program).is_ok());
    }
}
