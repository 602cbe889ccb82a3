//! Field descriptor tables.
//!
//! Every model type carries a static slice of [`FieldDescriptor`]s describing
//! how each attribute travels on the wire: its direction ([`Tag`]), where it is
//! placed on the request or response ([`Position`]), the wire-level key
//! (`rename`), and a structured [`TypeSpec`].
//!
//! Type specifications are built with `const` constructors so that tables are
//! plain statics. [`TypeSpec::parse`] accepts the string tags used by the
//! service's API definitions (`"[Grant]"`, `"datetime,httptime"`,
//! `"PublicAccessBlockConfiguration,xml"`) and produces the same value.

use std::fmt;

use osskit_core::{SerdeError, SerdeResult};

/// Direction marker of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// Carried on the request only.
    Input,
    /// Carried on the response only.
    Output,
    /// Element of an XML document, both directions.
    Xml,
    /// Member of a JSON document, both directions.
    Json,
}

/// Where a field is placed on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    /// Part of the endpoint host (the bucket).
    Host,
    /// Part of the request path (the object key).
    Path,
    /// Query parameter.
    Query,
    /// HTTP header.
    Header,
    /// HTTP body.
    Body,
}

/// Scalar wire kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    /// `str`, also used for string-valued enums.
    Str,
    /// `int`.
    Int,
    /// `float`.
    Float,
    /// `bool`.
    Bool,
    /// `datetime`, encoding selected by hints.
    DateTime,
    /// `bytes`, raw payloads.
    Bytes,
}

impl ScalarKind {
    /// Parse a lowercase scalar keyword.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "str" => Some(Self::Str),
            "int" => Some(Self::Int),
            "float" => Some(Self::Float),
            "bool" => Some(Self::Bool),
            "datetime" => Some(Self::DateTime),
            "bytes" => Some(Self::Bytes),
            _ => None,
        }
    }

    /// The keyword of this kind.
    #[must_use]
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Str => "str",
            Self::Int => "int",
            Self::Float => "float",
            Self::Bool => "bool",
            Self::DateTime => "datetime",
            Self::Bytes => "bytes",
        }
    }
}

/// Element type of a list field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementType {
    /// List of scalars.
    Scalar(ScalarKind),
    /// List of nested models, by type name.
    Object(&'static str),
}

/// Shape of a field's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// A single scalar.
    Scalar(ScalarKind),
    /// A nested model, by type name.
    Object(&'static str),
    /// A repeated value.
    List(ElementType),
    /// A string-to-string map, carried as prefixed headers.
    Dict,
}

/// Encoding hints attached to a type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Hints(u8);

impl Hints {
    /// No hints.
    pub const NONE: Self = Self(0);
    /// Value is an XML document.
    pub const XML: Self = Self(1);
    /// Value is a JSON document.
    pub const JSON: Self = Self(1 << 1);
    /// Datetime uses the RFC 1123 HTTP-date encoding.
    pub const HTTPTIME: Self = Self(1 << 2);
    /// Datetime uses decimal Unix seconds.
    pub const UNIXTIME: Self = Self(1 << 3);

    /// Union of two hint sets.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Whether every hint in `other` is present.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "xml" => Some(Self::XML),
            "json" => Some(Self::JSON),
            "httptime" => Some(Self::HTTPTIME),
            "unixtime" => Some(Self::UNIXTIME),
            _ => None,
        }
    }
}

/// Wire encoding of a datetime value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DateEncoding {
    /// `2023-12-17T00:20:57Z`, optionally with microseconds.
    #[default]
    Iso8601,
    /// `Sun, 17 Dec 2023 00:20:57 GMT`.
    HttpDate,
    /// `1702772457`.
    UnixTime,
}

/// Structured type of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeSpec {
    /// Value shape.
    pub kind: TypeKind,
    /// Encoding hints.
    pub hints: Hints,
}

impl TypeSpec {
    /// `str`.
    pub const STR: Self = Self::scalar(ScalarKind::Str);
    /// `int`.
    pub const INT: Self = Self::scalar(ScalarKind::Int);
    /// `float`.
    pub const FLOAT: Self = Self::scalar(ScalarKind::Float);
    /// `bool`.
    pub const BOOL: Self = Self::scalar(ScalarKind::Bool);
    /// `datetime` in ISO-8601.
    pub const DATETIME: Self = Self::scalar(ScalarKind::DateTime);
    /// `bytes`.
    pub const BYTES: Self = Self::scalar(ScalarKind::Bytes);
    /// `dict`.
    pub const DICT: Self = Self {
        kind: TypeKind::Dict,
        hints: Hints::NONE,
    };

    /// A scalar type.
    #[must_use]
    pub const fn scalar(kind: ScalarKind) -> Self {
        Self {
            kind: TypeKind::Scalar(kind),
            hints: Hints::NONE,
        }
    }

    /// A nested model type.
    #[must_use]
    pub const fn object(type_name: &'static str) -> Self {
        Self {
            kind: TypeKind::Object(type_name),
            hints: Hints::NONE,
        }
    }

    /// A list of nested models, `[T]`.
    #[must_use]
    pub const fn list_of(type_name: &'static str) -> Self {
        Self {
            kind: TypeKind::List(ElementType::Object(type_name)),
            hints: Hints::NONE,
        }
    }

    /// A list of scalars, `[str]`.
    #[must_use]
    pub const fn list_of_scalar(kind: ScalarKind) -> Self {
        Self {
            kind: TypeKind::List(ElementType::Scalar(kind)),
            hints: Hints::NONE,
        }
    }

    /// Add encoding hints.
    #[must_use]
    pub const fn with(self, hints: Hints) -> Self {
        Self {
            kind: self.kind,
            hints: self.hints.union(hints),
        }
    }

    /// Add the `xml` hint.
    #[must_use]
    pub const fn xml(self) -> Self {
        self.with(Hints::XML)
    }

    /// Add the `json` hint.
    #[must_use]
    pub const fn json(self) -> Self {
        self.with(Hints::JSON)
    }

    /// Add the `httptime` hint.
    #[must_use]
    pub const fn httptime(self) -> Self {
        self.with(Hints::HTTPTIME)
    }

    /// Add the `unixtime` hint.
    #[must_use]
    pub const fn unixtime(self) -> Self {
        self.with(Hints::UNIXTIME)
    }

    /// Whether the `xml` hint is set.
    #[must_use]
    pub const fn is_xml(&self) -> bool {
        self.hints.contains(Hints::XML)
    }

    /// Whether the `json` hint is set.
    #[must_use]
    pub const fn is_json(&self) -> bool {
        self.hints.contains(Hints::JSON)
    }

    /// Whether this is a `dict`.
    #[must_use]
    pub const fn is_dict(&self) -> bool {
        matches!(self.kind, TypeKind::Dict)
    }

    /// Whether this is a list form `[T]`.
    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self.kind, TypeKind::List(_))
    }

    /// Datetime encoding selected by hints, `httptime` winning over `unixtime`.
    #[must_use]
    pub const fn date_encoding(&self) -> DateEncoding {
        if self.hints.contains(Hints::HTTPTIME) {
            DateEncoding::HttpDate
        } else if self.hints.contains(Hints::UNIXTIME) {
            DateEncoding::UnixTime
        } else {
            DateEncoding::Iso8601
        }
    }

    /// The type of one list element, or `self` for non-list types.
    #[must_use]
    pub const fn element(&self) -> Self {
        let kind = match self.kind {
            TypeKind::List(ElementType::Scalar(s)) => TypeKind::Scalar(s),
            TypeKind::List(ElementType::Object(name)) => TypeKind::Object(name),
            other => other,
        };
        Self {
            kind,
            hints: self.hints,
        }
    }

    /// Parse a string type tag such as `"[ObjectProperties]"` or `"datetime,unixtime"`.
    ///
    /// The first comma-separated item names the type; the rest are hints.
    /// Lowercase names must be a known scalar keyword or `dict`; any other
    /// name is taken as a nested model type.
    pub fn parse(tag: &'static str) -> SerdeResult<Self> {
        let mut items = tag.split(',').map(str::trim);
        let head = items.next().unwrap_or_default();

        let kind = if let Some(inner) = head.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
            match parse_base(inner)? {
                TypeKind::Scalar(s) => TypeKind::List(ElementType::Scalar(s)),
                TypeKind::Object(name) => TypeKind::List(ElementType::Object(name)),
                _ => {
                    return Err(SerdeError::deserialization(format!(
                        "unsupported list element type {inner}"
                    )));
                }
            }
        } else {
            parse_base(head)?
        };

        let mut hints = Hints::NONE;
        for item in items.filter(|s| !s.is_empty()) {
            let hint = Hints::from_keyword(item).ok_or_else(|| {
                SerdeError::deserialization(format!("unsupported type hint {item} in {tag}"))
            })?;
            hints = hints.union(hint);
        }

        Ok(Self { kind, hints })
    }
}

fn parse_base(name: &'static str) -> SerdeResult<TypeKind> {
    if name == "dict" {
        return Ok(TypeKind::Dict);
    }
    if let Some(kind) = ScalarKind::from_keyword(name) {
        return Ok(TypeKind::Scalar(kind));
    }
    match name.chars().next() {
        Some(c) if c.is_ascii_uppercase() => Ok(TypeKind::Object(name)),
        _ => Err(SerdeError::deserialization(format!(
            "unsupported type {name}"
        ))),
    }
}

impl fmt::Display for TypeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TypeKind::Scalar(s) => f.write_str(s.keyword())?,
            TypeKind::Object(name) => f.write_str(name)?,
            TypeKind::List(ElementType::Scalar(s)) => write!(f, "[{}]", s.keyword())?,
            TypeKind::List(ElementType::Object(name)) => write!(f, "[{name}]")?,
            TypeKind::Dict => f.write_str("dict")?,
        }
        for (hint, keyword) in [
            (Hints::XML, "xml"),
            (Hints::JSON, "json"),
            (Hints::HTTPTIME, "httptime"),
            (Hints::UNIXTIME, "unixtime"),
        ] {
            if self.hints.contains(hint) {
                write!(f, ",{keyword}")?;
            }
        }
        Ok(())
    }
}

/// Wire mapping of one model attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Rust attribute name.
    pub attr: &'static str,
    /// Direction marker.
    pub tag: Tag,
    /// Placement, for `input`/`output` fields.
    pub position: Option<Position>,
    /// Wire key. May be a `/`-delimited path for XML fields.
    pub rename: &'static str,
    /// Value type.
    pub ty: TypeSpec,
    /// Must be set when the request is serialized.
    pub required: bool,
}

impl FieldDescriptor {
    const fn new(tag: Tag, position: Option<Position>, rename: &'static str, ty: TypeSpec) -> Self {
        Self {
            attr: "",
            tag,
            position,
            rename,
            ty,
            required: false,
        }
    }

    /// An XML document field.
    #[must_use]
    pub const fn xml(rename: &'static str, ty: TypeSpec) -> Self {
        Self::new(Tag::Xml, None, rename, ty)
    }

    /// A JSON document field.
    #[must_use]
    pub const fn json(rename: &'static str, ty: TypeSpec) -> Self {
        Self::new(Tag::Json, None, rename, ty)
    }

    /// A request-only field.
    #[must_use]
    pub const fn input(position: Position, rename: &'static str, ty: TypeSpec) -> Self {
        Self::new(Tag::Input, Some(position), rename, ty)
    }

    /// A response-only field.
    #[must_use]
    pub const fn output(position: Position, rename: &'static str, ty: TypeSpec) -> Self {
        Self::new(Tag::Output, Some(position), rename, ty)
    }

    /// Mark the field as required.
    #[must_use]
    pub const fn required(self) -> Self {
        Self {
            required: true,
            ..self
        }
    }

    /// Bind the descriptor to an attribute name.
    #[must_use]
    pub const fn with_attr(self, attr: &'static str) -> Self {
        Self { attr, ..self }
    }

    /// The wire key, falling back to the attribute name when no rename is set.
    #[must_use]
    pub fn wire_name(&self) -> &'static str {
        if self.rename.is_empty() {
            self.attr
        } else {
            self.rename
        }
    }
}
