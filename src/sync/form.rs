use crate::models::{Property, PropertyDraft, PropertyId};
use anyhow::{bail, Context, Result};

/// Whether a submit will create a new record or update an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

/// The form buffer. Fields are raw strings, form-field style; numbers are
/// parsed on submit. The hidden identifier distinguishes create from edit.
#[derive(Debug, Default, Clone)]
pub struct FormState {
    property_id: Option<PropertyId>,
    pub address: String,
    pub price: String,
    pub size: String,
    pub description: String,
}

impl FormState {
    pub fn property_id(&self) -> Option<PropertyId> {
        self.property_id
    }

    pub fn mode(&self) -> FormMode {
        if self.property_id.is_some() {
            FormMode::Edit
        } else {
            FormMode::Create
        }
    }

    /// Populate every field from an existing record and switch to edit mode.
    pub fn fill(&mut self, property: &Property) {
        self.property_id = Some(property.id);
        self.address = property.address.clone();
        self.price = property.price.to_string();
        self.size = property.size.to_string();
        self.description = property.description.clone();
    }

    /// Assign one field by name. Used by the console `set` command.
    pub fn set_field(&mut self, name: &str, value: &str) -> Result<()> {
        match name {
            "address" => self.address = value.to_string(),
            "price" => self.price = value.to_string(),
            "size" => self.size = value.to_string(),
            "description" => self.description = value.to_string(),
            other => bail!(
                "Unknown field '{}' (expected address, price, size or description)",
                other
            ),
        }
        Ok(())
    }

    /// Parse the buffer into a request body. Numeric fields are validated
    /// here, before anything goes on the wire.
    pub fn form_data(&self) -> Result<PropertyDraft> {
        let price: f64 = self
            .price
            .trim()
            .parse()
            .with_context(|| format!("price is not a number: '{}'", self.price))?;

        let size: i32 = self
            .size
            .trim()
            .parse()
            .with_context(|| format!("size is not a whole number: '{}'", self.size))?;

        Ok(PropertyDraft {
            address: self.address.trim().to_string(),
            price,
            size,
            description: self.description.trim().to_string(),
        })
    }

    /// Clear every field, identifier included. Back to create mode.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
