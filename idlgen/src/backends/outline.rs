//! Plain-text outline backend.
//!
//! Writes `<program>.outline`, one line per entity and member:
//!
//! ```text
//! program shapes
//! enum Color
//!   RED = 1
//! struct Point
//!   1: required i32 x
//! service Canvas
//!   void draw(1: Point point) throws (1: NotFound err)
//! ```

use std::fmt::Write as _;

use eyre::{Result, bail};
use idlgen_codegen::{Backend, GenerationContext, GeneratorOptions, ReservedWords};
use idlgen_core::{camelcase, format_double, underscore};
use idlgen_schema::{
    Const, ConstValue, Enum, Field, Function, Requiredness, Service, Struct, StructKind, Typedef,
};

/// Words that start an outline line and cannot be used as names.
const KEYWORDS: &[&str] = &[
    "const",
    "enum",
    "exception",
    "extends",
    "oneway",
    "program",
    "service",
    "struct",
    "throws",
    "typedef",
    "union",
];

const OPTIONS: &[&str] = &["snake", "camel"];

/// How member names (fields, parameters, functions) are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NameStyle {
    Declared,
    Snake,
    Camel,
}

#[derive(Debug)]
pub struct OutlineBackend {
    style: NameStyle,
    text: String,
}

impl OutlineBackend {
    /// Build from `outline[:snake|camel]`.
    pub fn new(options: &GeneratorOptions) -> Result<Self> {
        if let Some(unknown) = options.first_unknown(OPTIONS) {
            bail!(
                "unknown option '{}' for the outline generator (expected one of: {})",
                unknown,
                OPTIONS.join(", ")
            );
        }

        let style = match (options.has("snake"), options.has("camel")) {
            (true, true) => bail!("options 'snake' and 'camel' cannot be combined"),
            (true, false) => NameStyle::Snake,
            (false, true) => NameStyle::Camel,
            (false, false) => NameStyle::Declared,
        };

        Ok(Self {
            style,
            text: String::new(),
        })
    }

    pub fn create(options: &GeneratorOptions) -> Result<Box<dyn Backend>> {
        Ok(Box::new(Self::new(options)?))
    }

    fn member(&self, name: &str) -> String {
        match self.style {
            NameStyle::Declared => name.to_string(),
            NameStyle::Snake => underscore(name),
            NameStyle::Camel => camelcase(name),
        }
    }

    fn doc(&mut self, ctx: &GenerationContext, doc: Option<&str>) {
        if let Some(doc) = doc {
            self.text.push_str(&ctx.docstring_comment("", "# ", doc, ""));
        }
    }

    fn field(&self, field: &Field) -> String {
        let requiredness = match field.requiredness {
            Requiredness::Required => "required ",
            Requiredness::Optional => "optional ",
            Requiredness::Default => "",
        };
        let mut line = format!(
            "{}: {}{} {}",
            field.id,
            requiredness,
            field.ty,
            self.member(&field.name)
        );
        if let Some(default) = &field.default {
            line.push_str(" = ");
            line.push_str(&self.value(default));
        }
        line
    }

    fn function(&self, function: &Function) -> String {
        let params: Vec<String> = function.params.iter().map(|p| self.field(p)).collect();
        let mut line = format!(
            "{}{} {}({})",
            if function.oneway { "oneway " } else { "" },
            function.returns,
            self.member(&function.name),
            params.join(", ")
        );
        if !function.throws.is_empty() {
            let throws: Vec<String> = function.throws.iter().map(|t| self.field(t)).collect();
            line.push_str(&format!(" throws ({})", throws.join(", ")));
        }
        line
    }

    fn value(&self, value: &ConstValue) -> String {
        match value {
            ConstValue::Integer(i) => i.to_string(),
            ConstValue::Double(d) => format_double(*d),
            ConstValue::String(s) => format!("\"{}\"", self.escape(s)),
            ConstValue::Identifier(name) => name.clone(),
            ConstValue::List(items) => {
                let items: Vec<String> = items.iter().map(|v| self.value(v)).collect();
                format!("[{}]", items.join(", "))
            }
            ConstValue::Map(entries) => {
                let entries: Vec<String> = entries
                    .iter()
                    .map(|(k, v)| format!("{}: {}", self.value(k), self.value(v)))
                    .collect();
                format!("{{{}}}", entries.join(", "))
            }
        }
    }

    /// Write `header` followed by `members`, one level deeper.
    fn block(
        &mut self,
        ctx: &mut GenerationContext,
        header: &str,
        members: &[String],
    ) -> Result<()> {
        writeln!(self.text, "{}{}", ctx.indent(), header)?;
        ctx.indented(|ctx| -> Result<()> {
            for member in members {
                writeln!(self.text, "{}{}", ctx.indent(), member)?;
            }
            Ok(())
        })
    }
}

impl Backend for OutlineBackend {
    fn language(&self) -> &'static str {
        "outline"
    }

    fn reserved_words(&self) -> ReservedWords {
        ReservedWords::new(KEYWORDS.iter().copied())
    }

    fn init(&mut self, ctx: &mut GenerationContext) -> Result<()> {
        self.text = self.autogen_comment();
        writeln!(self.text, "program {}", ctx.program_name())?;
        Ok(())
    }

    fn typedef(&mut self, ctx: &mut GenerationContext, typedef: &Typedef) -> Result<()> {
        self.doc(ctx, typedef.doc.as_deref());
        writeln!(
            self.text,
            "{}typedef {} = {}",
            ctx.indent(),
            typedef.name,
            typedef.target
        )?;
        Ok(())
    }

    fn enumeration(&mut self, ctx: &mut GenerationContext, en: &Enum) -> Result<()> {
        self.doc(ctx, en.doc.as_deref());
        let values: Vec<String> = en
            .values
            .iter()
            .map(|v| format!("{} = {}", v.name, v.value))
            .collect();
        self.block(ctx, &format!("enum {}", en.name), &values)
    }

    fn constant(&mut self, ctx: &mut GenerationContext, constant: &Const) -> Result<()> {
        let value = self.value(&constant.value);
        writeln!(
            self.text,
            "{}const {}: {} = {}",
            ctx.indent(),
            constant.name,
            constant.ty,
            value
        )?;
        Ok(())
    }

    fn structure(&mut self, ctx: &mut GenerationContext, st: &Struct) -> Result<()> {
        let keyword = match st.kind {
            StructKind::Struct => "struct",
            StructKind::Union => "union",
            StructKind::Exception => "exception",
        };
        self.doc(ctx, st.doc.as_deref());
        let fields: Vec<String> = st.fields.iter().map(|f| self.field(f)).collect();
        self.block(ctx, &format!("{} {}", keyword, st.name), &fields)
    }

    fn service(&mut self, ctx: &mut GenerationContext, service: &Service) -> Result<()> {
        self.doc(ctx, service.doc.as_deref());
        let mut header = format!("service {}", service.name);
        if let Some(parent) = &service.extends {
            write!(header, " extends {}", parent)?;
        }
        let functions: Vec<String> = service.functions.iter().map(|f| self.function(f)).collect();
        self.block(ctx, &header, &functions)
    }

    fn finish(&mut self, ctx: &mut GenerationContext) -> Result<()> {
        let path = ctx.out_path(&format!("{}.outline", ctx.program_name()));
        let text = std::mem::take(&mut self.text);
        ctx.write_file(path, |_, out| {
            out.push_str(&text);
            Ok(())
        })?;
        Ok(())
    }
}
