use crate::remote::RemoteCallback;
use image::RgbaImage;
use std::collections::HashMap;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

/// A value stored in a [`Bundle`].
///
/// `Image` and `Callback` carry references to live objects; how the host
/// marshals them across a process boundary is the host's concern.
#[derive(Clone)]
pub enum Value {
    Str(String),
    Int(i32),
    Image(Arc<RgbaImage>),
    Callback(Option<Arc<dyn RemoteCallback>>),
}

impl Debug for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Str(v) => write!(f, "Str({:?})", v),
            Value::Int(v) => write!(f, "Int({})", v),
            Value::Image(v) => write!(f, "Image({}x{})", v.width(), v.height()),
            Value::Callback(Some(_)) => f.write_str("Callback"),
            Value::Callback(None) => f.write_str("Callback(empty)"),
        }
    }
}

/// A generic string-keyed container used to carry options across an API
/// boundary.
///
/// Reads are total: a missing or differently-typed entry resolves to the
/// caller's default instead of an error.
#[derive(Debug, Clone, Default)]
pub struct Bundle {
    values: HashMap<String, Value>,
}

impl Bundle {
    pub fn new() -> Bundle {
        Bundle {
            values: HashMap::new(),
        }
    }

    pub fn put_str(&mut self, key: &str, value: &str) {
        self.values
            .insert(key.to_string(), Value::Str(value.to_string()));
    }

    pub fn put_int(&mut self, key: &str, value: i32) {
        self.values.insert(key.to_string(), Value::Int(value));
    }

    pub fn put_image(&mut self, key: &str, value: Arc<RgbaImage>) {
        self.values.insert(key.to_string(), Value::Image(value));
    }

    /// Stores a callback slot. `None` records an explicitly empty reference.
    pub fn put_callback(&mut self, key: &str, value: Option<Arc<dyn RemoteCallback>>) {
        self.values.insert(key.to_string(), Value::Callback(value));
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        match self.values.get(key) {
            Some(Value::Str(v)) => Some(v.as_str()),
            _ => None,
        }
    }

    pub fn get_int(&self, key: &str, default: i32) -> i32 {
        match self.values.get(key) {
            Some(Value::Int(v)) => *v,
            _ => default,
        }
    }

    pub fn get_image(&self, key: &str) -> Option<Arc<RgbaImage>> {
        match self.values.get(key) {
            Some(Value::Image(v)) => Some(v.clone()),
            _ => None,
        }
    }

    /// An empty slot and a missing key both read back as `None`.
    pub fn get_callback(&self, key: &str) -> Option<Arc<dyn RemoteCallback>> {
        match self.values.get(key) {
            Some(Value::Callback(v)) => v.clone(),
            _ => None,
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
