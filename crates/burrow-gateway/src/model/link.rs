use burrow_core::LinkEntry;
use serde::{Deserialize, Serialize};

/// Submitted creation form: `link` is the key, `dest` the raw
/// destination (field names are part of the form contract).
#[derive(Deserialize)]
pub struct CreateLinkForm {
    pub link: String,
    pub dest: String,
}

#[derive(Serialize)]
pub struct LinkListResponse {
    pub links: Vec<LinkEntry>,
}

impl From<Vec<LinkEntry>> for LinkListResponse {
    fn from(links: Vec<LinkEntry>) -> Self {
        Self { links }
    }
}
