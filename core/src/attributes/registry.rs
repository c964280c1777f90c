//! attributes/registry.rs
//! Type-name registry and factory for attributes.
//!
//! The header framing looks a decoded type name up here to get an empty
//! attribute of the matching concrete type, then lets that attribute decode
//! its own payload. New types plug in with `register::<T>()`; there is no
//! central match over type names.

use std::collections::BTreeMap;

use tracing::debug;

use crate::attributes::basic::Box2i;
use crate::attributes::compression::Compression;
use crate::attributes::envmap::Envmap;
use crate::attributes::line_order::LineOrder;
use crate::attributes::types::{Attribute, AttributeValue, TypedAttribute};
use crate::exceptions::{ExcResult, Exception};

/// Produces a default-valued attribute ready to `read_value_from`.
pub type AttributeFactory = fn() -> Box<dyn Attribute>;

#[derive(Debug, Clone)]
pub struct AttributeRegistry {
    factories: BTreeMap<&'static str, AttributeFactory>,
}

impl AttributeRegistry {
    /// A registry with no types at all.
    pub fn empty() -> Self {
        Self { factories: BTreeMap::new() }
    }

    /// A registry with every built-in attribute type.
    pub fn with_defaults() -> Self {
        let mut reg = Self::empty();
        reg.insert::<i32>();
        reg.insert::<f32>();
        reg.insert::<f64>();
        reg.insert::<String>();
        reg.insert::<Box2i>();
        reg.insert::<Compression>();
        reg.insert::<LineOrder>();
        reg.insert::<Envmap>();
        reg
    }

    fn insert<T: AttributeValue>(&mut self) {
        self.factories.insert(T::TYPE_NAME, TypedAttribute::<T>::make_new);
    }

    /// Register `T` under its type name. Registering a name twice is an
    /// argument error.
    pub fn register<T: AttributeValue>(&mut self) -> ExcResult<()> {
        if self.is_known(T::TYPE_NAME) {
            return Err(Exception::arg(format!(
                "Cannot register image file attribute type \"{}\". \
                 The type has already been registered.",
                T::TYPE_NAME
            )));
        }
        self.insert::<T>();
        debug!(type_name = T::TYPE_NAME, "attribute type registered");
        Ok(())
    }

    /// Remove a type; returns whether it was registered.
    pub fn unregister(&mut self, type_name: &str) -> bool {
        self.factories.remove(type_name).is_some()
    }

    pub fn is_known(&self, type_name: &str) -> bool {
        self.factories.contains_key(type_name)
    }

    /// New default-valued attribute of the named type.
    pub fn new_attribute(&self, type_name: &str) -> ExcResult<Box<dyn Attribute>> {
        let factory = self.factories.get(type_name).ok_or_else(|| {
            Exception::arg(format!(
                "Cannot create image file attribute of unknown type \"{}\".",
                type_name
            ))
        })?;
        Ok(factory())
    }

    /// Registered type names in sorted order.
    pub fn type_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.factories.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl Default for AttributeRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
