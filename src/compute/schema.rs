use std::collections::HashMap;
use std::sync::LazyLock;

use serde_json::{Value, json};

use crate::{Error, Result};

/// Predefined output formats, keyed by the names callers pass to `analyze`.
/// The structures are part of the contract with the service: the remote side
/// expects these exact fields and required lists, so they must not drift.
static PREDEFINED_SCHEMAS: LazyLock<HashMap<&'static str, Value>> = LazyLock::new(|| {
    HashMap::from([
        (
            "basic_analysis",
            json!({
                "type": "object",
                "properties": {
                    "emotion": {"type": "string", "description": "Emotion analysis result"},
                    "theme": {"type": "string", "description": "Theme analysis"},
                    "analysis": {"type": "string", "description": "Detailed analysis"}
                },
                "required": ["emotion", "theme", "analysis"]
            }),
        ),
        (
            "poem_creation",
            json!({
                "type": "object",
                "properties": {
                    "poem": {"type": "string", "description": "Created poem"},
                    "creative_process": {"type": "string", "description": "Creative process"},
                    "style_notes": {"type": "string", "description": "Style notes"}
                },
                "required": ["poem"]
            }),
        ),
        (
            "scene_description",
            json!({
                "type": "object",
                "properties": {
                    "scene_description": {
                        "type": "object",
                        "properties": {
                            "main_subjects": {"type": "string", "description": "Main objects and spatial relationships"},
                            "lighting": {"type": "string", "description": "Lighting conditions and atmosphere"},
                            "composition": {"type": "string", "description": "Picture composition"},
                            "style": {"type": "string", "description": "Artistic style"}
                        },
                        "required": ["main_subjects", "lighting", "composition", "style"]
                    }
                },
                "required": ["scene_description"]
            }),
        ),
        (
            "translation",
            json!({
                "type": "object",
                "properties": {
                    "translation": {"type": "string", "description": "Translation result"},
                    "original_language": {"type": "string", "description": "Source language"},
                    "target_language": {"type": "string", "description": "Target language"},
                    "cultural_notes": {"type": "string", "description": "Cultural background notes"}
                },
                "required": ["translation"]
            }),
        ),
    ])
});

/// Returns a deep copy of a predefined schema. Callers may mutate the returned
/// value freely without affecting the registry or other copies.
pub fn predefined_schema(name: &str) -> Result<Value> {
    PREDEFINED_SCHEMAS
        .get(name)
        .cloned()
        .ok_or_else(|| Error::UnknownSchema(name.to_string()))
}
