use crate::{
    models::{OptionField, SelectedOptions},
    ui::LightboxContent,
};
use std::collections::HashMap;

// Element ids and classes of the page markup.
pub const PROMPT_INPUT_ID: &str = "promptInput";
pub const GENERATE_BUTTON_ID: &str = "generateBtn";
pub const GENERATE_WITH_OPTIONS_BUTTON_ID: &str = "generateWithOptionsBtn";
pub const LOADING_CLASS: &str = "loading";
pub const ERROR_CLASS: &str = "error";
pub const GALLERY_CLASS: &str = "image-gallery";
pub const EXPANDED_PROMPT_CLASS: &str = "expanded-prompt-display";
pub const EXPANDED_PROMPT_TEXT_ID: &str = "expandedPromptText";
pub const LIGHTBOX_ID: &str = "lightbox";
pub const LIGHTBOX_IMAGE_ID: &str = "lightboxImage";
pub const LIGHTBOX_CAPTION_ID: &str = "lightboxCaption";
pub const LIGHTBOX_CLOSE_CLASS: &str = "close-button";
pub const LIGHTBOX_DOWNLOAD_ID: &str = "downloadLightboxBtn";

/// The named slots the controller reads from and writes to.
pub trait PageView {
    fn prompt_value(&self) -> String;

    fn option_value(&self, field: OptionField) -> String;

    fn selected_options(&self) -> SelectedOptions {
        OptionField::ALL
            .iter()
            .fold(SelectedOptions::new(), |options, field| {
                options.with(*field, self.option_value(*field))
            })
    }

    fn set_loading_visible(&mut self, visible: bool);

    /// `None` hides the error surface.
    fn set_error(&mut self, message: Option<&str>);

    /// `None` hides the expanded prompt block.
    fn set_expanded_prompt(&mut self, text: Option<&str>);

    /// Replaces the gallery contents.
    fn set_gallery_markup(&mut self, markup: &str);

    /// `None` hides the overlay.
    fn set_lightbox(&mut self, content: Option<&LightboxContent>);
}

/// In-memory page that keeps the last value written to every slot.
#[derive(Debug, Clone, Default)]
pub struct SlotPage {
    pub prompt: String,
    pub options: HashMap<OptionField, String>,
    pub loading_visible: bool,
    pub error: Option<String>,
    pub expanded_prompt: Option<String>,
    pub gallery_markup: String,
    pub lightbox: Option<LightboxContent>,
}

impl SlotPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn with_option(mut self, field: OptionField, value: impl Into<String>) -> Self {
        self.options.insert(field, value.into());
        self
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
    }

    pub fn select(&mut self, field: OptionField, value: impl Into<String>) {
        self.options.insert(field, value.into());
    }

    pub fn gallery_card_count(&self) -> usize {
        self.gallery_markup.matches("class=\"image-item\"").count()
    }
}

impl PageView for SlotPage {
    fn prompt_value(&self) -> String {
        self.prompt.clone()
    }

    fn option_value(&self, field: OptionField) -> String {
        self.options.get(&field).cloned().unwrap_or_default()
    }

    fn set_loading_visible(&mut self, visible: bool) {
        self.loading_visible = visible;
    }

    fn set_error(&mut self, message: Option<&str>) {
        self.error = message.map(str::to_string);
    }

    fn set_expanded_prompt(&mut self, text: Option<&str>) {
        self.expanded_prompt = text.map(str::to_string);
    }

    fn set_gallery_markup(&mut self, markup: &str) {
        self.gallery_markup = markup.to_string();
    }

    fn set_lightbox(&mut self, content: Option<&LightboxContent>) {
        self.lightbox = content.cloned();
    }
}
