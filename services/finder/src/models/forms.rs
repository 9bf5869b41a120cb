//! Form payloads accepted by the request handlers
//!
//! Absent fields deserialize as empty values so that an incomplete form
//! reaches validation instead of being rejected by the extractor.

use serde::Deserialize;

/// Name and enrollment pair, used both to register and to sign in
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub enrollment: String,
}

/// Found-item entry form
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EntryForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub stream: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub contact_no: String,
    #[serde(default)]
    pub item_name: String,
    #[serde(default)]
    pub date: String,
}

/// Item search form
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FindForm {
    pub item_name: Option<String>,
}

impl FindForm {
    /// The searched name, with an empty submission treated as absent
    pub fn item_name(&self) -> Option<&str> {
        self.item_name.as_deref().filter(|name| !name.is_empty())
    }
}
