use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const NOT_AVAILABLE: &str = "N/A";

/// Generation metadata for one image.
///
/// Fields keep whatever JSON the server sent. Null, `false`, zero and
/// empty strings count as absent when rendered, the same as missing keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageInfo {
    #[serde(default)]
    pub seed: Option<Value>,
    #[serde(default)]
    pub steps: Option<Value>,
    #[serde(default)]
    pub sampler_name: Option<Value>,
    #[serde(default)]
    pub cfg_scale: Option<Value>,
    #[serde(default)]
    pub width: Option<Value>,
    #[serde(default)]
    pub height: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<Value>,
}

/// Text of a metadata value, or `None` when it counts as absent.
pub fn present(value: &Option<Value>) -> Option<String> {
    match value.as_ref()? {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => match (n.as_i64(), n.as_u64(), n.as_f64()) {
            (Some(0), _, _) => None,
            (Some(i), _, _) => Some(i.to_string()),
            (_, Some(u), _) => Some(u.to_string()),
            (_, _, Some(f)) if f == 0.0 => None,
            (_, _, Some(f)) => Some(f.to_string()),
            _ => Some(n.to_string()),
        },
        other => Some(other.to_string()),
    }
}

fn or_na(value: Option<String>) -> String {
    value.unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

impl ImageInfo {
    pub fn seed_value(&self) -> Option<String> {
        present(&self.seed)
    }

    pub fn seed_display(&self) -> String {
        or_na(self.seed_value())
    }

    pub fn steps_display(&self) -> String {
        or_na(present(&self.steps))
    }

    pub fn sampler_display(&self) -> String {
        or_na(present(&self.sampler_name))
    }

    pub fn cfg_scale_display(&self) -> String {
        or_na(present(&self.cfg_scale))
    }

    /// `WIDTHxHEIGHT`, each side independently "N/A".
    pub fn dimensions_display(&self) -> String {
        format!(
            "{}x{}",
            or_na(present(&self.width)),
            or_na(present(&self.height))
        )
    }
}

/// Success body of `POST /generate_images`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationResponse {
    #[serde(default)]
    pub expanded_prompt: Option<String>,
    /// Base64 PNG payloads.
    #[serde(default)]
    pub images: Option<Vec<String>>,
    #[serde(default)]
    pub image_info: Option<Vec<Option<ImageInfo>>>,
}

impl GenerationResponse {
    pub fn images(&self) -> &[String] {
        self.images.as_deref().unwrap_or(&[])
    }

    /// Metadata for the image at `index`; missing or null entries are empty.
    pub fn info_at(&self, index: usize) -> ImageInfo {
        self.image_info
            .as_ref()
            .and_then(|infos| infos.get(index))
            .and_then(|info| info.clone())
            .unwrap_or_default()
    }

    /// The expanded prompt, if the server sent a non-empty one.
    pub fn expanded_prompt(&self) -> Option<&str> {
        self.expanded_prompt.as_deref().filter(|p| !p.is_empty())
    }
}

/// Failure body of `POST /generate_images`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn info(value: Value) -> ImageInfo {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn missing_fields_render_as_not_available() {
        let info = ImageInfo::default();
        assert_eq!(info.seed_display(), "N/A");
        assert_eq!(info.steps_display(), "N/A");
        assert_eq!(info.sampler_display(), "N/A");
        assert_eq!(info.cfg_scale_display(), "N/A");
        assert_eq!(info.dimensions_display(), "N/AxN/A");
    }

    #[test]
    fn zero_and_empty_values_count_as_absent() {
        let info = info(json!({
            "seed": 0,
            "steps": null,
            "sampler_name": "",
            "cfg_scale": 0.0,
            "width": 512,
            "height": false
        }));
        assert_eq!(info.seed_value(), None);
        assert_eq!(info.steps_display(), "N/A");
        assert_eq!(info.sampler_display(), "N/A");
        assert_eq!(info.cfg_scale_display(), "N/A");
        assert_eq!(info.dimensions_display(), "512xN/A");
    }

    #[test]
    fn parses_server_payload() {
        let body = r#"{
            "expanded_prompt": "a vast castle, volumetric light",
            "images": ["AAA", "BBB"],
            "image_info": [
                {"seed": 1234, "steps": 20, "sampler_name": "Euler a", "cfg_scale": 7, "width": 512, "height": 512, "prompt": "x"},
                null
            ]
        }"#;
        let response: GenerationResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.images(), ["AAA".to_string(), "BBB".to_string()]);
        assert_eq!(response.expanded_prompt(), Some("a vast castle, volumetric light"));

        let first = response.info_at(0);
        assert_eq!(first.seed_display(), "1234");
        assert_eq!(first.cfg_scale_display(), "7");
        assert_eq!(first.dimensions_display(), "512x512");
        assert_eq!(response.info_at(1), ImageInfo::default());
        assert_eq!(response.info_at(7), ImageInfo::default());
    }

    #[test]
    fn off_type_metadata_keeps_the_response() {
        let body = r#"{
            "images": ["A", "B"],
            "image_info": [
                {"seed": 1234.0, "steps": -1, "sampler_name": 3, "cfg_scale": "7.5", "width": "512", "height": 512.0},
                {"seed": "98765", "steps": true, "sampler_name": ["Euler", "a"]}
            ]
        }"#;
        let response: GenerationResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.images().len(), 2);

        let first = response.info_at(0);
        assert_eq!(first.seed_display(), "1234");
        assert_eq!(first.steps_display(), "-1");
        assert_eq!(first.sampler_display(), "3");
        assert_eq!(first.cfg_scale_display(), "7.5");
        assert_eq!(first.dimensions_display(), "512x512");

        let second = response.info_at(1);
        assert_eq!(second.seed_value().as_deref(), Some("98765"));
        assert_eq!(second.steps_display(), "true");
        assert_eq!(second.sampler_display(), r#"["Euler","a"]"#);
    }

    #[test]
    fn absent_collections_are_empty() {
        let response: GenerationResponse = serde_json::from_str("{}").unwrap();
        assert!(response.images().is_empty());
        assert_eq!(response.expanded_prompt(), None);
        assert_eq!(response.info_at(0), ImageInfo::default());
    }

    #[test]
    fn fractional_values_keep_precision() {
        let info = info(json!({ "cfg_scale": 7.5, "seed": -42 }));
        assert_eq!(info.cfg_scale_display(), "7.5");
        assert_eq!(info.seed_display(), "-42");
    }
}
