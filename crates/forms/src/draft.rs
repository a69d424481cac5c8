//! Draft autosave
//!
//! An in-memory key-value cache of serialized form drafts, the headless
//! stand-in for the browser-local storage the site saves partially filled
//! forms to. Drafts are saved on every input, reloaded on the next visit
//! within the session, and cleared after a successful submission.

use crate::error::FormResult;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;

/// Session-scoped store of serialized form drafts keyed by form id
#[derive(Debug, Clone, Default)]
pub struct DraftStore {
    entries: HashMap<String, String>,
}

impl DraftStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serialize and store a draft under `form_id`, replacing any previous
    /// draft
    pub fn save<T: Serialize>(&mut self, form_id: &str, draft: &T) -> FormResult<()> {
        let json = serde_json::to_string(draft)?;
        self.entries.insert(form_id.to_string(), json);
        Ok(())
    }

    /// Load the draft saved under `form_id`, if any
    pub fn load<T: DeserializeOwned>(&self, form_id: &str) -> FormResult<Option<T>> {
        match self.entries.get(form_id) {
            Some(json) => Ok(Some(serde_json::from_str(json)?)),
            None => Ok(None),
        }
    }

    /// Drop the draft under `form_id` (after a successful submission)
    pub fn clear(&mut self, form_id: &str) {
        self.entries.remove(form_id);
    }

    /// Whether a draft exists under `form_id`
    pub fn contains(&self, form_id: &str) -> bool {
        self.entries.contains_key(form_id)
    }
}
