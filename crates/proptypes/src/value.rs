//! Dynamic values that validators inspect.
//!
//! Property tables describe loosely-typed data: a subject can be a scalar, a
//! sequence, a mapping, a callable, an instance of some class, or a UI
//! element. [`Value`] is the closed set of those shapes.
//!
//! JSON documents convert directly:
//!
//! ```rust,ignore
//! use proptypes::value::Value;
//! use serde_json::json;
//!
//! let value = Value::from(json!({"name": "Bob", "tags": ["a", "b"]}));
//! assert_eq!(value.type_name(), "object");
//! ```

use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

/// Insertion-ordered string-keyed map used for objects, instance fields and
/// element props.
pub type Map = IndexMap<String, Value>;

// ============================================================================
// VALUE
// ============================================================================

/// A dynamically-typed subject.
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// An absent value.
    #[default]
    Undefined,
    /// An explicit null.
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Value>),
    Object(Map),
    Function(Function),
    Instance(Instance),
    Element(Element),
}

impl Value {
    /// Returns true for `Undefined` and `Null`.
    #[must_use]
    pub fn is_nullish(&self) -> bool {
        matches!(self, Self::Undefined | Self::Null)
    }

    /// Runtime type name as reported in diagnostics.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Object(_) | Self::Instance(_) | Self::Element(_) => "object",
            Self::Function(_) => "function",
        }
    }

    /// Name of the constructor that produced this value.
    #[must_use]
    pub fn constructor_name(&self) -> &str {
        match self {
            Self::Undefined | Self::Null => "<<anonymous>>",
            Self::Bool(_) => "Boolean",
            Self::Number(_) => "Number",
            Self::String(_) => "String",
            Self::Array(_) => "Array",
            Self::Object(_) | Self::Element(_) => "Object",
            Self::Function(_) => "Function",
            Self::Instance(instance) => instance.class().name(),
        }
    }

    /// Own entries of object-like values.
    ///
    /// Objects expose their entries, instances their fields and elements
    /// their props. Every other value has no own keys.
    #[must_use]
    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Self::Object(map) => Some(map),
            Self::Instance(instance) => Some(instance.fields()),
            Self::Element(element) => Some(element.props()),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Builds an object value from key/value pairs.
    pub fn object<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self::Object(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

// SameValue semantics: NaN equals NaN, callables and classes compare by identity.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Undefined, Self::Undefined) | (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => a == b,
            (Self::Object(a), Self::Object(b)) => a == b,
            (Self::Function(a), Self::Function(b)) => a == b,
            (Self::Instance(a), Self::Instance(b)) => a == b,
            (Self::Element(a), Self::Element(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => f.write_str("undefined"),
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write_number(f, *n),
            Self::String(s) => write_quoted(f, s),
            Self::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Object(map) => write_map(f, map),
            Self::Function(func) => write!(f, "[Function {}]", func.name()),
            Self::Instance(instance) => write!(f, "[object {}]", instance.class().name()),
            Self::Element(element) => write!(f, "<{} />", element.element_type()),
        }
    }
}

fn write_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.is_nan() {
        f.write_str("NaN")
    } else if n.is_infinite() {
        f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" })
    } else if n.fract() == 0.0 && n.abs() < 1e15 {
        write!(f, "{}", n as i64)
    } else {
        write!(f, "{n}")
    }
}

fn write_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    match serde_json::to_string(s) {
        Ok(quoted) => f.write_str(&quoted),
        Err(_) => write!(f, "\"{s}\""),
    }
}

fn write_map(f: &mut fmt::Formatter<'_>, map: &Map) -> fmt::Result {
    f.write_str("{")?;
    for (i, (key, value)) in map.iter().enumerate() {
        if i > 0 {
            f.write_str(",")?;
        }
        write_quoted(f, key)?;
        write!(f, ":{value}")?;
    }
    f.write_str("}")
}

// ============================================================================
// CALLABLES
// ============================================================================

type Body = dyn Fn(&[Value]) -> Value + Send + Sync;

/// A named callable value.
#[derive(Clone)]
pub struct Function {
    name: String,
    body: Arc<Body>,
}

impl Function {
    pub fn new<F>(name: impl Into<String>, body: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            body: Arc::new(body),
        }
    }

    /// A callable without a name, returning `undefined`.
    #[must_use]
    pub fn noop() -> Self {
        Self::new("", |_| Value::Undefined)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        if self.name.is_empty() {
            "anonymous"
        } else {
            &self.name
        }
    }

    pub fn call(&self, args: &[Value]) -> Value {
        (self.body)(args)
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.body, &other.body)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("name", &self.name)
            .field("body", &"<function>")
            .finish()
    }
}

// ============================================================================
// CLASSES AND INSTANCES
// ============================================================================

#[derive(Debug)]
struct ClassInner {
    name: String,
    parent: Option<Class>,
}

/// A named constructor. Identity is reference identity, so two classes with
/// the same name are still distinct.
#[derive(Debug, Clone)]
pub struct Class(Arc<ClassInner>);

impl Class {
    pub fn new(name: impl Into<String>) -> Self {
        Self(Arc::new(ClassInner {
            name: name.into(),
            parent: None,
        }))
    }

    /// Declares a subclass of `self`.
    #[must_use]
    pub fn extend(&self, name: impl Into<String>) -> Self {
        Self(Arc::new(ClassInner {
            name: name.into(),
            parent: Some(self.clone()),
        }))
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.0.name
    }

    #[must_use]
    pub fn parent(&self) -> Option<&Class> {
        self.0.parent.as_ref()
    }

    /// True when `self` is `ancestor` or inherits from it.
    #[must_use]
    pub fn is_subclass_of(&self, ancestor: &Class) -> bool {
        let mut current = Some(self);
        while let Some(class) = current {
            if class == ancestor {
                return true;
            }
            current = class.parent();
        }
        false
    }

    /// Creates an instance value carrying the given fields.
    pub fn instantiate<K, V, I>(&self, fields: I) -> Value
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Value::Instance(Instance {
            class: self.clone(),
            fields: fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        })
    }
}

impl PartialEq for Class {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Class {}

/// An object created by a [`Class`].
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    class: Class,
    fields: Map,
}

impl Instance {
    #[must_use]
    pub fn class(&self) -> &Class {
        &self.class
    }

    #[must_use]
    pub fn fields(&self) -> &Map {
        &self.fields
    }

    #[must_use]
    pub fn is_instance_of(&self, class: &Class) -> bool {
        self.class.is_subclass_of(class)
    }
}

// ============================================================================
// ELEMENTS
// ============================================================================

/// A UI element: a type tag plus its props.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    element_type: String,
    props: Map,
}

impl Element {
    pub fn new(element_type: impl Into<String>) -> Self {
        Self {
            element_type: element_type.into(),
            props: Map::new(),
        }
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_prop(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.props.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn element_type(&self) -> &str {
        &self.element_type
    }

    #[must_use]
    pub fn props(&self) -> &Map {
        &self.props
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => Self::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) => {
                Self::Array(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(map) => {
                Self::Object(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::Array(items.into_iter().map(Into::into).collect())
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Self::Object(map)
    }
}

impl From<Function> for Value {
    fn from(func: Function) -> Self {
        Self::Function(func)
    }
}

impl From<Element> for Value {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Undefined, Into::into)
    }
}
