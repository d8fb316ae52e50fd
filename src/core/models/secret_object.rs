use std::collections::BTreeMap;

use serde::Deserialize;

/// A named bundle of fields held by the remote secret store.
///
/// Field values are still transport-encoded (base64); decoding happens
/// in the resolver so a single bad field cannot fail the whole fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretObject {
    pub name: String,
    pub data: BTreeMap<String, String>,
}

impl SecretObject {
    /// Encoded value of `field`, or `""` when the object has no such field.
    pub fn field(&self, field: &str) -> &str {
        self.data.get(field).map(|v| v.as_str()).unwrap_or("")
    }
}

/// Partial structure of the secret list returned by
/// `GET /api/v1/namespaces/{ns}/secrets`.
#[derive(Debug, Deserialize)]
pub struct SecretList {
    #[serde(default)]
    pub items: Option<Vec<SecretItem>>,
}

/// One entry of `items` in a secret list.
#[derive(Debug, Deserialize)]
pub struct SecretItem {
    pub metadata: SecretMetadata,
    /// Omitted (or `null`) by the API for secrets with no data.
    #[serde(default)]
    pub data: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Deserialize)]
pub struct SecretMetadata {
    pub name: String,
}

impl SecretList {
    pub fn into_objects(self) -> Vec<SecretObject> {
        self.items
            .unwrap_or_default()
            .into_iter()
            .map(|item| SecretObject {
                name: item.metadata.name,
                data: item.data.unwrap_or_default(),
            })
            .collect()
    }
}
