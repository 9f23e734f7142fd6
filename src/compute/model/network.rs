//! Network resource and operation data models
//!
//! Wire shapes for the compute networks API: the insert request body and
//! the long-running operation the API answers with.

use serde::{Deserialize, Serialize};

/// VPC network resource body.
///
/// Only the name is sent; every other attribute is left to the provider's
/// defaults. Uniqueness scope of the name is the owning project, which
/// travels in the request path rather than the body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Network {
    pub name: String,
}

impl Network {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Long-running operation returned by mutating compute calls.
///
/// Deserialized leniently: the API may answer with as little as `{}`, so
/// every field is optional. This program never polls the operation to
/// completion.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Operation {
    pub id: Option<String>,
    pub name: Option<String>,
    pub operation_type: Option<String>,
    pub status: Option<String>,
    pub target_link: Option<String>,
}
