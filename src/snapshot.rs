//! Session snapshot persistence.
//!
//! A snapshot is the whole document serialized as a single JSON object.
//! Loading migrates legacy shapes in place: snapshots written before
//! style presets existed carry a `font_size` enum instead of a preset
//! id, and very old ones may lack `sections` entirely.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::model::Document;
use crate::style::DEFAULT_PRESET_ID;

/// A persisted session snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// The document state.
    pub document: Document,

    /// When the snapshot was written.
    pub saved_at: DateTime<Utc>,
}

impl Snapshot {
    /// Wrap a document in a snapshot stamped with the current time.
    pub fn new(document: Document) -> Self {
        Self {
            document,
            saved_at: Utc::now(),
        }
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize from JSON, migrating legacy shapes.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut value: Value = serde_json::from_str(json)
            .map_err(|e| Error::Snapshot(format!("unparseable snapshot: {}", e)))?;

        migrate(&mut value);

        serde_json::from_value(value)
            .map_err(|e| Error::Snapshot(format!("invalid snapshot shape: {}", e)))
    }
}

/// Save a snapshot of a document to a file.
pub fn save_snapshot<P: AsRef<Path>>(document: &Document, path: P) -> Result<()> {
    let snapshot = Snapshot::new(document.clone());
    fs::write(path, snapshot.to_json()?)?;
    Ok(())
}

/// Load a snapshot from a file.
pub fn load_snapshot<P: AsRef<Path>>(path: P) -> Result<Snapshot> {
    let json = fs::read_to_string(path)?;
    Snapshot::from_json(&json)
}

fn migrate(value: &mut Value) {
    // Bare-document snapshots predate the envelope.
    if value.get("document").is_none() && value.get("title").is_some() {
        let document = value.take();
        *value = serde_json::json!({
            "document": document,
            "saved_at": Utc::now(),
        });
    }

    let Some(document) = value.get_mut("document").filter(|d| d.is_object()) else {
        return;
    };

    if document.get("sections").is_none() {
        document["sections"] = Value::Array(Vec::new());
    }

    let legacy_font_size = document
        .get("settings")
        .and_then(|s| s.get("font_size"))
        .and_then(Value::as_str)
        .map(str::to_owned);

    let settings = document
        .as_object_mut()
        .and_then(|d| d.get_mut("settings"))
        .and_then(Value::as_object_mut);

    let Some(settings) = settings else {
        document["settings"] = serde_json::to_value(crate::model::DocumentSettings::default())
            .unwrap_or(Value::Null);
        return;
    };

    if settings.get("selected_preset_id").is_none() {
        // Pre-preset snapshots stored a coarse font-size enum.
        let preset_id = match legacy_font_size.as_deref() {
            Some("small") => "compact",
            Some("large") => "readable",
            _ => DEFAULT_PRESET_ID,
        };
        settings.insert(
            "selected_preset_id".to_string(),
            Value::String(preset_id.to_string()),
        );
        log::info!("migrated legacy snapshot settings to preset {}", preset_id);
    }
    settings.remove("font_size");

    let defaults = [
        ("cover_page_enabled", Value::Bool(true)),
        ("show_section_titles", Value::Bool(true)),
        ("show_question_numbers", Value::Bool(true)),
        ("numbering_style", Value::String("continuous".to_string())),
        ("answer_key_mode", Value::String("appended".to_string())),
    ];
    for (key, default) in defaults {
        settings.entry(key.to_string()).or_insert(default);
    }
}
