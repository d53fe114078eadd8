//! Person record and the create/update payload.

use serde::{Deserialize, Deserializer, Serialize};

/// A stored person. Same shape for rows, the service layer and JSON output.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Person {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[sqlx(rename = "firstName")]
    pub first_name: String,
    #[sqlx(rename = "lastName")]
    pub last_name: String,
}

/// Body of create and update requests. There is no `id` field: identifiers
/// are assigned by the store, so a client-supplied `id` is ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct PersonInput {
    #[serde(default, deserialize_with = "non_empty")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "non_empty")]
    pub phone: Option<String>,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

/// Empty strings are treated the same as an absent field.
fn non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}
