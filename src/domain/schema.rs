//! JSON Schema definitions for single manifests and the bundled collection.

use std::fmt;

use jsonschema::{ValidationError, Validator};
use serde_json::{Value, json};

use crate::domain::AppError;

/// Which structural contract a document is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schema {
    /// One device manifest.
    Manifest,
    /// The bundled array of manifests.
    Collection,
}

impl Schema {
    pub fn label(&self) -> &'static str {
        match self {
            Schema::Manifest => "manifest",
            Schema::Collection => "manifest collection",
        }
    }

    /// Raw JSON Schema document.
    pub fn definition(&self) -> Value {
        match self {
            Schema::Manifest => manifest_schema(),
            Schema::Collection => collection_schema(),
        }
    }
}

/// A failed structural check: the violated constraint and where it sits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaViolation {
    pub message: String,
    pub path: Vec<String>,
}

impl SchemaViolation {
    /// `hardware -> specs`, or `Root of the document` for top-level violations.
    pub fn location(&self) -> String {
        if self.path.is_empty() {
            "Root of the document".to_string()
        } else {
            self.path.join(" -> ")
        }
    }

    fn from_error(error: &ValidationError<'_>) -> Self {
        Self { message: error.to_string(), path: pointer_segments(&error.instance_path.to_string()) }
    }
}

impl fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (at {})", self.message, self.location())
    }
}

/// Both schemas, compiled once per run.
pub struct SchemaSet {
    manifest: Validator,
    collection: Validator,
}

impl fmt::Debug for SchemaSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemaSet").finish_non_exhaustive()
    }
}

impl SchemaSet {
    pub fn compile() -> Result<Self, AppError> {
        Ok(Self { manifest: compile(Schema::Manifest)?, collection: compile(Schema::Collection)? })
    }

    /// Structural check only.
    ///
    /// When several constraints fail, the shallowest violation is reported; the
    /// first one found wins among equally deep violations.
    pub fn check(&self, value: &Value, schema: Schema) -> Result<(), SchemaViolation> {
        let validator = match schema {
            Schema::Manifest => &self.manifest,
            Schema::Collection => &self.collection,
        };

        match validator.validate(value) {
            Ok(()) => Ok(()),
            Err(errors) => {
                let violation = errors
                    .map(|error| SchemaViolation::from_error(&error))
                    .min_by_key(|violation| violation.path.len())
                    .unwrap_or_else(|| SchemaViolation {
                        message: format!("document does not match the {} schema", schema.label()),
                        path: Vec::new(),
                    });
                Err(violation)
            }
        }
    }
}

fn compile(schema: Schema) -> Result<Validator, AppError> {
    Validator::new(&schema.definition())
        .map_err(|e| AppError::Schema(format!("{} schema: {}", schema.label(), e)))
}

/// Split a JSON pointer (`/hardware/specs`) into unescaped segments.
fn pointer_segments(pointer: &str) -> Vec<String> {
    pointer
        .split('/')
        .skip(1)
        .map(|segment| segment.replace("~1", "/").replace("~0", "~"))
        .collect()
}

fn string_array() -> Value {
    json!({ "type": "array", "items": { "type": "string" } })
}

fn manifest_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "name": { "type": "string" },
            "maintainer": { "type": "string" },
            "hostOperatingsystem": string_array(),
            "environment": string_array(),
            "hardware": {
                "type": "object",
                "properties": {
                    "chipVendor": { "type": "string" },
                    "manufacturer": { "type": "string" },
                    "specs": {
                        "type": "object",
                        "properties": {
                            "MCU": { "type": "string" },
                            "RAM": { "type": "string" },
                            "Flash": { "type": "string" },
                            "GPU": { "type": ["string", "null"] },
                            "Resolution": { "type": "string" },
                            "Display Size": { "type": "string" },
                            "Interface": { "type": "string" },
                            "Color Depth": { "type": "string" },
                            "Technology": { "type": "string" },
                            "DPI": { "type": "string" },
                            "Touch Pad": { "type": "string" }
                        },
                        "required": ["RAM", "Flash"]
                    }
                },
                "required": ["chipVendor", "manufacturer", "specs"]
            },
            "description": { "type": "string" },
            "shortDescription": { "type": "string" },
            "urlToClone": { "type": "string" },
            "logos": string_array(),
            "image": { "type": "string" },
            "buy_now_links": string_array(),
            "branches": string_array(),
            "settings": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "type": { "type": "string" },
                        "label": { "type": "string" },
                        "options": {
                            "type": "array",
                            "items": {
                                "type": "object",
                                "properties": {
                                    "name": { "type": "string" },
                                    "value": { "type": "string" },
                                    "default": {
                                        "type": "string",
                                        "enum": ["true", "false"],
                                        "default": "false"
                                    }
                                },
                                "required": ["name", "value"]
                            }
                        },
                        "actions": {
                            "type": "array",
                            "items": {
                                "type": "object",
                                "properties": {
                                    "ifValue": { "type": "string" },
                                    "toAppend": { "type": "string" },
                                    "toReplace": { "type": "string" },
                                    "newContent": { "type": "string" },
                                    "filePath": { "type": "string" }
                                }
                            }
                        }
                    },
                    "required": ["type"]
                }
            }
        },
        "required": [
            "name",
            "maintainer",
            "hostOperatingsystem",
            "environment",
            "description",
            "shortDescription",
            "urlToClone",
            "logos",
            "image",
            "branches",
            "settings"
        ]
    })
}

fn collection_schema() -> Value {
    json!({ "type": "array", "items": manifest_schema() })
}
