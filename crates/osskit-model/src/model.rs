//! The model abstraction and the dynamic values that flow through it.
//!
//! Serializers never see concrete model types. They walk a model's static
//! [`FieldDescriptor`] table, read attributes as borrowed [`FieldRef`]s, and
//! write attributes back as owned [`Value`]s. Nested models are constructed
//! through each parent's [`Dependency`] table, so a model only knows how to
//! build its direct children.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;

use bytes::Bytes;
use chrono::{DateTime, Utc};
use osskit_core::{SerdeError, SerdeResult};

use crate::descriptor::FieldDescriptor;
use crate::operation::{RequestCommon, ResultMeta};

/// A serializable and/or deserializable entity.
///
/// Implementations are generated by [`oss_model!`](crate::oss_model).
pub trait Model: Any + fmt::Debug + Send + Sync {
    /// The type name used in dependency tables and as the default XML tag.
    fn type_name(&self) -> &'static str;

    /// Explicit XML element name, if the model overrides its type name.
    fn xml_root(&self) -> Option<&'static str> {
        None
    }

    /// The field descriptor table.
    fn fields(&self) -> &'static [FieldDescriptor];

    /// Factories for the nested types this model references.
    fn dependencies(&self) -> &'static [Dependency] {
        &[]
    }

    /// Borrow an attribute, `None` when unset or unknown.
    fn field(&self, attr: &str) -> Option<FieldRef<'_>>;

    /// Assign an attribute from a dynamic value.
    fn set_field(&mut self, attr: &str, value: Value) -> SerdeResult<()>;

    /// Upcast for downcasting by reference.
    fn as_any(&self) -> &dyn Any;

    /// Upcast for downcasting by value.
    fn into_any(self: Box<Self>) -> Box<dyn Any>;

    /// The XML element name: the explicit root if set, else the type name.
    fn xml_name(&self) -> &'static str {
        self.xml_root().unwrap_or_else(|| self.type_name())
    }

    /// Look up the descriptor of `attr`.
    fn descriptor(&self, attr: &str) -> Option<&'static FieldDescriptor> {
        self.fields().iter().find(|d| d.attr == attr)
    }
}

/// A model that is only ever serialized toward the wire.
pub trait RequestModel: Model {
    /// Bulk headers, parameters and payload that bypass the descriptor table.
    fn common(&self) -> &RequestCommon;
}

/// A model that is only ever populated from the wire.
pub trait ResultModel: Model {
    /// Transport outcome fields.
    fn meta(&self) -> &ResultMeta;

    /// Mutable transport outcome fields.
    fn meta_mut(&mut self) -> &mut ResultMeta;
}

/// One entry of a dependency table: a type name and its zero-argument factory.
#[derive(Clone, Copy)]
pub struct Dependency {
    /// Type name as referenced by field descriptors.
    pub name: &'static str,
    /// Creates an empty instance.
    pub factory: fn() -> Box<dyn Model>,
}

impl Dependency {
    /// Entry constructing `T::default()`.
    #[must_use]
    pub const fn of<T: Model + Default>(name: &'static str) -> Self {
        Self {
            name,
            factory: new_boxed::<T>,
        }
    }
}

impl fmt::Debug for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dependency").field("name", &self.name).finish()
    }
}

fn new_boxed<T: Model + Default>() -> Box<dyn Model> {
    Box::new(T::default())
}

/// Create an empty instance of `type_name` from `parent`'s dependency table.
///
/// Every composite model declares all of its direct children. An unresolved
/// name is a deserialization error.
pub fn build_dependency(parent: &dyn Model, type_name: &str) -> SerdeResult<Box<dyn Model>> {
    parent
        .dependencies()
        .iter()
        .find(|d| d.name == type_name)
        .map(|d| (d.factory)())
        .ok_or_else(|| {
            SerdeError::deserialization(format!(
                "unable to resolve type {type_name} referenced by {}",
                parent.type_name()
            ))
        })
}

/// An owned attribute value produced by a deserializer.
#[derive(Debug)]
pub enum Value {
    /// String or string-valued enum.
    Str(String),
    /// Integer.
    Int(i64),
    /// Floating point number.
    Float(f64),
    /// Boolean.
    Bool(bool),
    /// Point in time, always UTC.
    DateTime(DateTime<Utc>),
    /// Raw bytes.
    Bytes(Bytes),
    /// Header dictionary.
    Dict(HashMap<String, String>),
    /// Repeated value.
    List(Vec<Value>),
    /// Nested model.
    Object(Box<dyn Model>),
}

impl Value {
    /// Short name of the variant, for error messages.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Str(_) => "str",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Bool(_) => "bool",
            Self::DateTime(_) => "datetime",
            Self::Bytes(_) => "bytes",
            Self::Dict(_) => "dict",
            Self::List(_) => "list",
            Self::Object(_) => "object",
        }
    }
}

/// A borrowed view of an attribute value, read by serializers.
#[derive(Debug, Clone)]
pub enum FieldRef<'a> {
    /// String or string-valued enum.
    Str(&'a str),
    /// Integer.
    Int(i64),
    /// Floating point number.
    Float(f64),
    /// Boolean.
    Bool(bool),
    /// Point in time.
    DateTime(DateTime<Utc>),
    /// Raw bytes.
    Bytes(&'a Bytes),
    /// Header dictionary.
    Dict(&'a HashMap<String, String>),
    /// Repeated value.
    List(Vec<FieldRef<'a>>),
    /// Nested model.
    Object(&'a dyn Model),
}

impl FieldRef<'_> {
    /// Short name of the variant, for error messages.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Str(_) => "str",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Bool(_) => "bool",
            Self::DateTime(_) => "datetime",
            Self::Bytes(_) => "bytes",
            Self::Dict(_) => "dict",
            Self::List(_) => "list",
            Self::Object(_) => "object",
        }
    }
}

/// Conversion between a typed attribute and the dynamic representation.
pub trait FieldValue: Sized {
    /// Borrow as a [`FieldRef`].
    fn field_ref(&self) -> FieldRef<'_>;

    /// Convert from a [`Value`], failing on a kind mismatch.
    fn from_value(value: Value) -> SerdeResult<Self>;
}

fn mismatch(expected: &str, value: &Value) -> SerdeError {
    SerdeError::deserialization(format!("expected {expected}, found {}", value.kind()))
}

impl FieldValue for String {
    fn field_ref(&self) -> FieldRef<'_> {
        FieldRef::Str(self)
    }

    fn from_value(value: Value) -> SerdeResult<Self> {
        match value {
            Value::Str(s) => Ok(s),
            other => Err(mismatch("str", &other)),
        }
    }
}

impl FieldValue for i64 {
    fn field_ref(&self) -> FieldRef<'_> {
        FieldRef::Int(*self)
    }

    fn from_value(value: Value) -> SerdeResult<Self> {
        match value {
            Value::Int(i) => Ok(i),
            other => Err(mismatch("int", &other)),
        }
    }
}

impl FieldValue for i32 {
    fn field_ref(&self) -> FieldRef<'_> {
        FieldRef::Int(i64::from(*self))
    }

    fn from_value(value: Value) -> SerdeResult<Self> {
        match value {
            Value::Int(i) => i32::try_from(i)
                .map_err(|_| SerdeError::deserialization(format!("integer {i} out of range"))),
            other => Err(mismatch("int", &other)),
        }
    }
}

impl FieldValue for f64 {
    fn field_ref(&self) -> FieldRef<'_> {
        FieldRef::Float(*self)
    }

    #[allow(clippy::cast_precision_loss)]
    fn from_value(value: Value) -> SerdeResult<Self> {
        match value {
            Value::Float(f) => Ok(f),
            Value::Int(i) => Ok(i as f64),
            other => Err(mismatch("float", &other)),
        }
    }
}

impl FieldValue for bool {
    fn field_ref(&self) -> FieldRef<'_> {
        FieldRef::Bool(*self)
    }

    fn from_value(value: Value) -> SerdeResult<Self> {
        match value {
            Value::Bool(b) => Ok(b),
            other => Err(mismatch("bool", &other)),
        }
    }
}

impl FieldValue for DateTime<Utc> {
    fn field_ref(&self) -> FieldRef<'_> {
        FieldRef::DateTime(*self)
    }

    fn from_value(value: Value) -> SerdeResult<Self> {
        match value {
            Value::DateTime(dt) => Ok(dt),
            other => Err(mismatch("datetime", &other)),
        }
    }
}

impl FieldValue for Bytes {
    fn field_ref(&self) -> FieldRef<'_> {
        FieldRef::Bytes(self)
    }

    fn from_value(value: Value) -> SerdeResult<Self> {
        match value {
            Value::Bytes(b) => Ok(b),
            Value::Str(s) => Ok(Bytes::from(s)),
            other => Err(mismatch("bytes", &other)),
        }
    }
}

impl FieldValue for HashMap<String, String> {
    fn field_ref(&self) -> FieldRef<'_> {
        FieldRef::Dict(self)
    }

    fn from_value(value: Value) -> SerdeResult<Self> {
        match value {
            Value::Dict(d) => Ok(d),
            other => Err(mismatch("dict", &other)),
        }
    }
}

impl<T: FieldValue> FieldValue for Vec<T> {
    fn field_ref(&self) -> FieldRef<'_> {
        FieldRef::List(self.iter().map(FieldValue::field_ref).collect())
    }

    fn from_value(value: Value) -> SerdeResult<Self> {
        match value {
            Value::List(items) => items.into_iter().map(T::from_value).collect(),
            other => Err(mismatch("list", &other)),
        }
    }
}

/// Downcast a boxed model produced by a dependency factory.
pub fn downcast_model<T: Model>(model: Box<dyn Model>) -> SerdeResult<T> {
    let name = model.type_name();
    model.into_any().downcast::<T>().map(|b| *b).map_err(|_| {
        SerdeError::deserialization(format!(
            "expected {}, found {name}",
            std::any::type_name::<T>()
        ))
    })
}

/// Declare a model struct together with its descriptor and dependency tables.
///
/// Every attribute is stored as `Option<T>`. `as "Name"` overrides the XML
/// element name. `: request` models gain a
/// `common: RequestCommon` field and implement [`RequestModel`]; `: result`
/// models gain a `meta: ResultMeta` field and implement [`ResultModel`].
///
/// ```
/// use osskit_model::descriptor::{FieldDescriptor, TypeSpec};
/// use osskit_model::oss_model;
///
/// oss_model! {
///     /// A key/value pair.
///     pub struct Label as "Label" {
///         key: String => FieldDescriptor::xml("Key", TypeSpec::STR),
///         value: String => FieldDescriptor::xml("Value", TypeSpec::STR),
///     }
/// }
///
/// let label = Label { key: Some("k".into()), ..Default::default() };
/// assert_eq!(osskit_model::Model::xml_name(&label), "Label");
/// ```
#[macro_export]
macro_rules! oss_model {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident : request $(as $root:literal)? {
            $( $(#[$fmeta:meta])* $field:ident : $fty:ty => $desc:expr ),* $(,)?
        }
        $(depends [ $($dep:ident),* $(,)? ])?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        $vis struct $name {
            $( $(#[$fmeta])* pub $field: Option<$fty>, )*
            /// Bulk headers, parameters and payload.
            pub common: $crate::operation::RequestCommon,
        }

        impl $crate::model::RequestModel for $name {
            fn common(&self) -> &$crate::operation::RequestCommon {
                &self.common
            }
        }

        $crate::oss_model!(@impl $name, [$($root)?], [$($field => $desc),*], [$($($dep),*)?]);
    };
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident : result $(as $root:literal)? {
            $( $(#[$fmeta:meta])* $field:ident : $fty:ty => $desc:expr ),* $(,)?
        }
        $(depends [ $($dep:ident),* $(,)? ])?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        $vis struct $name {
            $( $(#[$fmeta])* pub $field: Option<$fty>, )*
            /// Transport outcome.
            pub meta: $crate::operation::ResultMeta,
        }

        impl $crate::model::ResultModel for $name {
            fn meta(&self) -> &$crate::operation::ResultMeta {
                &self.meta
            }

            fn meta_mut(&mut self) -> &mut $crate::operation::ResultMeta {
                &mut self.meta
            }
        }

        $crate::oss_model!(@impl $name, [$($root)?], [$($field => $desc),*], [$($($dep),*)?]);
    };
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident $(as $root:literal)? {
            $( $(#[$fmeta:meta])* $field:ident : $fty:ty => $desc:expr ),* $(,)?
        }
        $(depends [ $($dep:ident),* $(,)? ])?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        $vis struct $name {
            $( $(#[$fmeta])* pub $field: Option<$fty>, )*
        }

        $crate::oss_model!(@impl $name, [$($root)?], [$($field => $desc),*], [$($($dep),*)?]);
    };
    (@root) => { None };
    (@root $root:literal) => { Some($root) };
    (@impl $name:ident, [$($root:literal)?], [$($field:ident => $desc:expr),*], [$($dep:ident),*]) => {
        impl $crate::model::Model for $name {
            fn type_name(&self) -> &'static str {
                stringify!($name)
            }

            fn xml_root(&self) -> Option<&'static str> {
                $crate::oss_model!(@root $($root)?)
            }

            fn fields(&self) -> &'static [$crate::descriptor::FieldDescriptor] {
                static FIELDS: &[$crate::descriptor::FieldDescriptor] =
                    &[$( ($desc).with_attr(stringify!($field)) ),*];
                FIELDS
            }

            fn dependencies(&self) -> &'static [$crate::model::Dependency] {
                static DEPENDENCIES: &[$crate::model::Dependency] =
                    &[$( $crate::model::Dependency::of::<$dep>(stringify!($dep)) ),*];
                DEPENDENCIES
            }

            fn field(&self, attr: &str) -> Option<$crate::model::FieldRef<'_>> {
                match attr {
                    $( stringify!($field) => self.$field.as_ref().map($crate::model::FieldValue::field_ref), )*
                    _ => None,
                }
            }

            fn set_field(&mut self, attr: &str, value: $crate::model::Value) -> $crate::SerdeResult<()> {
                match attr {
                    $(
                        stringify!($field) => {
                            self.$field = Some($crate::model::FieldValue::from_value(value).map_err(|e| {
                                $crate::SerdeError::deserialization(format!(
                                    "{}.{}: {e}",
                                    stringify!($name),
                                    attr
                                ))
                            })?);
                            Ok(())
                        }
                    )*
                    _ => Err($crate::SerdeError::deserialization(format!(
                        "{} has no attribute {attr} (got {})",
                        stringify!($name),
                        value.kind()
                    ))),
                }
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            fn into_any(self: Box<Self>) -> Box<dyn ::std::any::Any> {
                self
            }
        }

        impl $crate::model::FieldValue for $name {
            fn field_ref(&self) -> $crate::model::FieldRef<'_> {
                $crate::model::FieldRef::Object(self)
            }

            fn from_value(value: $crate::model::Value) -> $crate::SerdeResult<Self> {
                match value {
                    $crate::model::Value::Object(model) => $crate::model::downcast_model(model),
                    other => Err($crate::SerdeError::deserialization(format!(
                        "expected {}, found {}",
                        stringify!($name),
                        other.kind()
                    ))),
                }
            }
        }
    };
}

/// Declare a string-valued enum with `as_str`, `Display`, `From<&str>` and
/// [`FieldValue`] support. Values the SDK does not know are kept verbatim in
/// an `Unknown` variant.
#[macro_export]
macro_rules! oss_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $first:ident => $first_str:literal
            $(, $variant:ident => $str:literal)* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
        $vis enum $name {
            #[default]
            #[doc = concat!("`", $first_str, "`")]
            $first,
            $(
                #[doc = concat!("`", $str, "`")]
                $variant,
            )*
            /// A value not known to this SDK version.
            Unknown(String),
        }

        impl $name {
            /// Returns the wire value of this variant.
            #[must_use]
            pub fn as_str(&self) -> &str {
                match self {
                    Self::$first => $first_str,
                    $( Self::$variant => $str, )*
                    Self::Unknown(s) => s,
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                match s {
                    $first_str => Self::$first,
                    $( $str => Self::$variant, )*
                    other => Self::Unknown(other.to_owned()),
                }
            }
        }

        impl $crate::model::FieldValue for $name {
            fn field_ref(&self) -> $crate::model::FieldRef<'_> {
                $crate::model::FieldRef::Str(self.as_str())
            }

            fn from_value(value: $crate::model::Value) -> $crate::SerdeResult<Self> {
                match value {
                    $crate::model::Value::Str(s) => Ok(Self::from(s.as_str())),
                    other => Err($crate::SerdeError::deserialization(format!(
                        "expected {}, found {}",
                        stringify!($name),
                        other.kind()
                    ))),
                }
            }
        }
    };
}
