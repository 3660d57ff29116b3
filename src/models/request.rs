use crate::error::{Result, WeaverError};
use serde::{Deserialize, Serialize};

pub const PROMPT_REQUIRED: &str = "Please enter a prompt.";
pub const PROMPT_OR_OPTION_REQUIRED: &str = "Please enter a prompt or select at least one option.";

/// Which trigger started a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitMode {
    Plain,
    WithOptions,
}

/// The five dropdown selectors of the options panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionField {
    GenreTheme,
    ArtStyle,
    SubjectCharacter,
    EnvironmentSetting,
    LightingAtmosphere,
}

impl OptionField {
    pub const ALL: [OptionField; 5] = [
        OptionField::GenreTheme,
        OptionField::ArtStyle,
        OptionField::SubjectCharacter,
        OptionField::EnvironmentSetting,
        OptionField::LightingAtmosphere,
    ];

    /// Key used in the JSON `options` object.
    pub fn key(&self) -> &'static str {
        match self {
            OptionField::GenreTheme => "genre_theme",
            OptionField::ArtStyle => "art_style",
            OptionField::SubjectCharacter => "subject_character",
            OptionField::EnvironmentSetting => "environment_setting",
            OptionField::LightingAtmosphere => "lighting_atmosphere",
        }
    }

    /// Element id of the matching `<select>` in the page markup.
    pub fn element_id(&self) -> &'static str {
        match self {
            OptionField::GenreTheme => "genreThemeSelect",
            OptionField::ArtStyle => "artStyleSelect",
            OptionField::SubjectCharacter => "subjectCharacterSelect",
            OptionField::EnvironmentSetting => "environmentSettingSelect",
            OptionField::LightingAtmosphere => "lightingAtmosphereSelect",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedOptions {
    #[serde(default)]
    pub genre_theme: String,
    #[serde(default)]
    pub art_style: String,
    #[serde(default)]
    pub subject_character: String,
    #[serde(default)]
    pub environment_setting: String,
    #[serde(default)]
    pub lighting_atmosphere: String,
}

impl SelectedOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: OptionField) -> &str {
        match field {
            OptionField::GenreTheme => &self.genre_theme,
            OptionField::ArtStyle => &self.art_style,
            OptionField::SubjectCharacter => &self.subject_character,
            OptionField::EnvironmentSetting => &self.environment_setting,
            OptionField::LightingAtmosphere => &self.lighting_atmosphere,
        }
    }

    pub fn set(&mut self, field: OptionField, value: impl Into<String>) {
        let value = value.into();
        match field {
            OptionField::GenreTheme => self.genre_theme = value,
            OptionField::ArtStyle => self.art_style = value,
            OptionField::SubjectCharacter => self.subject_character = value,
            OptionField::EnvironmentSetting => self.environment_setting = value,
            OptionField::LightingAtmosphere => self.lighting_atmosphere = value,
        }
    }

    pub fn with(mut self, field: OptionField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// True when no selector holds a value.
    pub fn is_empty(&self) -> bool {
        OptionField::ALL
            .iter()
            .all(|field| self.get(*field).is_empty())
    }
}

/// Body of `POST /generate_images`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<SelectedOptions>,
}

impl GenerationRequest {
    /// Validates raw page inputs and builds the request body.
    ///
    /// The prompt is trimmed. Plain submissions need a prompt; option
    /// submissions need a prompt or at least one selected option.
    pub fn from_inputs(mode: SubmitMode, prompt: &str, options: SelectedOptions) -> Result<Self> {
        let prompt = prompt.trim().to_string();

        match mode {
            SubmitMode::Plain => {
                if prompt.is_empty() {
                    return Err(WeaverError::ValidationError(PROMPT_REQUIRED.into()));
                }
                Ok(Self {
                    prompt,
                    options: None,
                })
            }
            SubmitMode::WithOptions => {
                if prompt.is_empty() && options.is_empty() {
                    return Err(WeaverError::ValidationError(
                        PROMPT_OR_OPTION_REQUIRED.into(),
                    ));
                }
                Ok(Self {
                    prompt,
                    options: Some(options),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn plain_mode_rejects_blank_prompt() {
        for prompt in ["", "   ", "\t\n"] {
            let err = GenerationRequest::from_inputs(SubmitMode::Plain, prompt, SelectedOptions::new())
                .unwrap_err();
            assert_eq!(err.user_message(), PROMPT_REQUIRED);
        }
    }

    #[test]
    fn plain_mode_ignores_selected_options() {
        let options = SelectedOptions::new().with(OptionField::ArtStyle, "Watercolor");
        let request =
            GenerationRequest::from_inputs(SubmitMode::Plain, "  a castle ", options).unwrap();
        assert_eq!(request.prompt, "a castle");
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "prompt": "a castle" })
        );
    }

    #[test]
    fn options_mode_needs_prompt_or_option() {
        let err =
            GenerationRequest::from_inputs(SubmitMode::WithOptions, " ", SelectedOptions::new())
                .unwrap_err();
        assert_eq!(err.user_message(), PROMPT_OR_OPTION_REQUIRED);
    }

    #[test]
    fn options_mode_accepts_single_option_without_prompt() {
        let options = SelectedOptions::new().with(OptionField::LightingAtmosphere, "Golden hour");
        let request =
            GenerationRequest::from_inputs(SubmitMode::WithOptions, "", options).unwrap();

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "prompt": "",
                "options": {
                    "genre_theme": "",
                    "art_style": "",
                    "subject_character": "",
                    "environment_setting": "",
                    "lighting_atmosphere": "Golden hour"
                }
            })
        );
    }

    #[test]
    fn option_fields_map_to_keys_and_elements() {
        assert_eq!(OptionField::from_key("art_style"), Some(OptionField::ArtStyle));
        assert_eq!(OptionField::from_key("mood"), None);
        assert_eq!(OptionField::GenreTheme.element_id(), "genreThemeSelect");
    }
}
