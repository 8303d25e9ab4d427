use serde::{Deserialize, Serialize};

/// Server-assigned identifier for a property
pub type PropertyId = i64;

/// Core property data model, mirroring the server's JSON shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: PropertyId,
    pub address: String,
    pub price: f64,
    pub size: i32,
    pub description: String,
}

/// A property without an identifier: the create request body.
/// The server assigns the id; the client never generates one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyDraft {
    pub address: String,
    pub price: f64,
    pub size: i32,
    pub description: String,
}

impl PropertyDraft {
    /// Attach an identifier to build an update request body.
    /// The body's id must match the path parameter of the PUT.
    pub fn with_id(self, id: PropertyId) -> Property {
        Property {
            id,
            address: self.address,
            price: self.price,
            size: self.size,
            description: self.description,
        }
    }
}
