use serde_json::{Map, Value};

/// One entry of a manifest's `icons` array. Fields are kept only when string-typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestIcon {
    pub src: Option<String>,
    pub kind: Option<String>,
    pub sizes: Option<String>,
    /// Parsed but not used for selection
    pub purpose: Option<String>,
}

/// The parts of a Web App Manifest we read.
///
/// Built from untrusted JSON: any field that is missing or of the wrong type is `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestDocument {
    pub name: Option<String>,
    pub short_name: Option<String>,
    pub description: Option<String>,
    /// `None` unless `icons` is an array
    pub icons: Option<Vec<ManifestIcon>>,
}

impl ManifestDocument {
    /// Returns `None` if `value` is not a JSON object.
    pub fn from_value(value: &Value) -> Option<Self> {
        let object = value.as_object()?;

        Some(Self {
            name: string_field(object, "name"),
            short_name: string_field(object, "short_name"),
            description: string_field(object, "description"),
            icons: object.get("icons").and_then(Value::as_array).map(|entries| {
                entries
                    .iter()
                    .filter_map(Value::as_object)
                    .map(|entry| ManifestIcon {
                        src: string_field(entry, "src"),
                        kind: string_field(entry, "type"),
                        sizes: string_field(entry, "sizes"),
                        purpose: string_field(entry, "purpose"),
                    })
                    .collect()
            }),
        })
    }
}

fn string_field(object: &Map<String, Value>, key: &str) -> Option<String> {
    object.get(key).and_then(Value::as_str).map(String::from)
}
