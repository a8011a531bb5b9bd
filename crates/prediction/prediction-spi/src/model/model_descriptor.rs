//! Model catalog entry

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Descriptive metadata for one entry of the model catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDescriptor {
    /// Identifier accepted in prediction requests
    pub id: Cow<'static, str>,
    /// Display name
    pub name: Cow<'static, str>,
    /// One-line description
    pub description: Cow<'static, str>,
}

impl ModelDescriptor {
    /// Build a descriptor from static strings (usable in `const` tables)
    pub const fn new(id: &'static str, name: &'static str, description: &'static str) -> Self {
        Self {
            id: Cow::Borrowed(id),
            name: Cow::Borrowed(name),
            description: Cow::Borrowed(description),
        }
    }
}
