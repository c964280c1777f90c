//! header/types.rs
//! Attribute map of an image header and its deferred consistency check.

use std::collections::BTreeMap;

use crate::attributes::{
    Attribute, AttributeValue, Box2i, ClosedEnum, Compression, Envmap, LineOrder, TypedAttribute,
};
use crate::constants::{attribute_names, max_name_length};
use crate::exceptions::{ExcResult, Exception};

/// Named attributes, kept sorted by name.
#[derive(Debug, Clone)]
pub struct Header {
    attributes: BTreeMap<String, Box<dyn Attribute>>,
}

impl Default for Header {
    /// Provides a header with sane values:
    /// - compression: ZIP
    /// - lineOrder: increasing y
    fn default() -> Self {
        let mut attributes: BTreeMap<String, Box<dyn Attribute>> = BTreeMap::new();
        attributes.insert(
            attribute_names::COMPRESSION.to_owned(),
            Box::new(TypedAttribute::new(Compression::Zip)),
        );
        attributes.insert(
            attribute_names::LINE_ORDER.to_owned(),
            Box::new(TypedAttribute::new(LineOrder::IncreasingY)),
        );
        Self { attributes }
    }
}

impl Header {
    /// A header with no attributes at all.
    pub fn empty() -> Self {
        Self { attributes: BTreeMap::new() }
    }

    /// Set `name` to `value`, creating the attribute if needed.
    ///
    /// Changing the type of an existing attribute is an argument error.
    pub fn insert<T: AttributeValue>(&mut self, name: &str, value: T) -> ExcResult<()> {
        check_name(name)?;
        match self.attributes.get_mut(name) {
            Some(existing) => {
                if existing.type_name() != T::TYPE_NAME {
                    return Err(type_change(name, T::TYPE_NAME, existing.type_name()));
                }
                TypedAttribute::<T>::cast_mut(&mut **existing)?.set_value(value);
            }
            None => {
                self.attributes.insert(name.to_owned(), Box::new(TypedAttribute::new(value)));
            }
        }
        Ok(())
    }

    /// Store an already-built attribute under `name`, same type rule as
    /// `insert`.
    pub fn insert_attribute(&mut self, name: &str, attr: Box<dyn Attribute>) -> ExcResult<()> {
        check_name(name)?;
        if let Some(existing) = self.attributes.get(name) {
            if existing.type_name() != attr.type_name() {
                return Err(type_change(name, attr.type_name(), existing.type_name()));
            }
        }
        self.attributes.insert(name.to_owned(), attr);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&dyn Attribute> {
        self.attributes.get(name).map(|a| &**a)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut (dyn Attribute + 'static)> {
        self.attributes.get_mut(name).map(|a| &mut **a)
    }

    /// Typed value of `name`: argument error if missing, type error if the
    /// attribute has another type.
    pub fn typed<T: AttributeValue>(&self, name: &str) -> ExcResult<&T> {
        let attr = self.get(name).ok_or_else(|| missing(name))?;
        Ok(TypedAttribute::<T>::cast(attr)?.value())
    }

    pub fn typed_mut<T: AttributeValue>(&mut self, name: &str) -> ExcResult<&mut T> {
        let attr = self.get_mut(name).ok_or_else(|| missing(name))?;
        Ok(TypedAttribute::<T>::cast_mut(attr)?.value_mut())
    }

    /// Typed value of `name`, or `None` if missing or of another type.
    pub fn find_typed<T: AttributeValue>(&self, name: &str) -> Option<&T> {
        self.get(name)
            .and_then(|a| a.as_any().downcast_ref::<TypedAttribute<T>>())
            .map(|a| a.value())
    }

    pub fn remove(&mut self, name: &str) -> Option<Box<dyn Attribute>> {
        self.attributes.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Attributes in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &dyn Attribute)> + '_ {
        self.attributes.iter().map(|(k, v)| (k.as_str(), &**v))
    }

    pub fn compression(&self) -> ExcResult<Compression> {
        self.typed::<Compression>(attribute_names::COMPRESSION).copied()
    }

    pub fn set_compression(&mut self, compression: Compression) -> ExcResult<()> {
        self.insert(attribute_names::COMPRESSION, compression)
    }

    pub fn line_order(&self) -> ExcResult<LineOrder> {
        self.typed::<LineOrder>(attribute_names::LINE_ORDER).copied()
    }

    pub fn set_line_order(&mut self, line_order: LineOrder) -> ExcResult<()> {
        self.insert(attribute_names::LINE_ORDER, line_order)
    }

    /// Consistency check run after a header has been fully decoded (or
    /// before it is written).
    ///
    /// This is where unrecognized enum tags, stored as sentinels during
    /// decoding, become input errors.
    pub fn sanity_check(&self, version: i32) -> ExcResult<()> {
        let max = max_name_length(version);
        for (name, attr) in self.iter() {
            if name.len() > max {
                return Err(Exception::input(format!(
                    "Image attribute name \"{}\" is longer than {} characters.",
                    name, max
                )));
            }
            check_closed::<Compression>(name, attr, "compression type")?;
            check_closed::<LineOrder>(name, attr, "line order")?;
            check_closed::<Envmap>(name, attr, "environment map type")?;
        }

        if let Some(window) = self.find_typed::<Box2i>(attribute_names::DATA_WINDOW) {
            if window.is_empty() {
                return Err(Exception::input("Invalid data window in image header."));
            }
        }
        Ok(())
    }
}

fn check_closed<E>(name: &str, attr: &dyn Attribute, what: &str) -> ExcResult<()>
where
    E: ClosedEnum + AttributeValue,
{
    match attr.as_any().downcast_ref::<TypedAttribute<E>>() {
        Some(a) if !a.value().is_valid() => Err(Exception::input(format!(
            "Unknown {} in image attribute \"{}\".",
            what, name
        ))),
        _ => Ok(()),
    }
}

fn check_name(name: &str) -> ExcResult<()> {
    if name.is_empty() {
        return Err(Exception::arg("Image attribute name cannot be an empty string."));
    }
    Ok(())
}

fn missing(name: &str) -> Exception {
    Exception::arg(format!("Cannot find image attribute \"{}\".", name))
}

fn type_change(name: &str, new_type: &str, old_type: &str) -> Exception {
    Exception::arg(format!(
        "Cannot assign a value of type \"{}\" to image attribute \"{}\" of type \"{}\".",
        new_type, name, old_type
    ))
}
