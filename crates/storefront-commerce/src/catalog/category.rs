//! Category types for product organization.

use crate::ids::CategoryId;
use serde::{Deserialize, Serialize};

/// A product category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    /// Unique category identifier, also the key products refer to.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
    /// Category image URL.
    pub image: String,
}

impl Category {
    pub fn new(id: impl Into<CategoryId>, name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image: image.into(),
        }
    }
}
