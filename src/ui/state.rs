use crate::{
    models::{GalleryItem, GenerationResponse},
    ui::Lightbox,
};

pub const NO_IMAGES_MESSAGE: &str = "No images were generated. Please try a different prompt.";

/// Everything the page shows, in one place.
///
/// Once a request settles, either the error or the gallery with its
/// expanded prompt is visible, never both.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UiState {
    pub loading: bool,
    pub error_message: Option<String>,
    pub expanded_prompt: Option<String>,
    pub gallery: Vec<GalleryItem>,
    pub lightbox: Lightbox,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `message` without touching the gallery, prompt or loading state.
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.error_message = Some(message.into());
    }

    /// Clears the previous cycle and raises the loading indicator.
    ///
    /// The lightbox closes with the gallery it was showing.
    pub fn begin_request(&mut self) {
        self.gallery.clear();
        self.lightbox.close();
        self.error_message = None;
        self.expanded_prompt = None;
        self.loading = true;
    }

    /// Renders a successful response. Returns the number of gallery items.
    pub fn show_results(&mut self, response: &GenerationResponse) -> usize {
        let items = GalleryItem::from_response(response);

        if items.is_empty() {
            self.gallery.clear();
            self.expanded_prompt = None;
            self.error_message = Some(NO_IMAGES_MESSAGE.to_string());
            return 0;
        }

        self.error_message = None;
        self.expanded_prompt = response.expanded_prompt().map(str::to_string);
        self.gallery = items;
        self.gallery.len()
    }

    /// Shows a failed cycle's message in place of any results.
    pub fn show_failure(&mut self, message: impl Into<String>) {
        self.gallery.clear();
        self.lightbox.close();
        self.expanded_prompt = None;
        self.error_message = Some(message.into());
    }

    pub fn finish_request(&mut self) {
        self.loading = false;
    }

    /// Opens the lightbox on the gallery item at `index`.
    pub fn open_lightbox(&mut self, index: usize) -> bool {
        match self.gallery.get(index) {
            Some(item) => {
                self.lightbox.open(item.clone());
                true
            }
            None => false,
        }
    }
}
