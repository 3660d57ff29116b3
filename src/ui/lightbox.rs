use crate::models::GalleryItem;

/// Where a pointer activation landed inside the lightbox overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxTarget {
    /// The overlay background itself.
    Overlay,
    Image,
    Caption,
    CloseControl,
    DownloadControl,
}

/// What the overlay shows while open.
#[derive(Debug, Clone, PartialEq)]
pub struct LightboxContent {
    pub image_src: String,
    pub caption_markup: String,
    pub download_href: String,
    pub download_filename: String,
}

impl LightboxContent {
    pub fn for_item(item: &GalleryItem) -> Self {
        Self {
            image_src: item.image_data_url.clone(),
            caption_markup: item.parameters_markup(),
            download_href: item.image_data_url.clone(),
            download_filename: item.download_filename.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Lightbox {
    target: Option<GalleryItem>,
}

impl Lightbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `item`, replacing whatever was open before.
    pub fn open(&mut self, item: GalleryItem) {
        log::debug!("Opening lightbox for {}", item.download_filename);
        self.target = Some(item);
    }

    pub fn close(&mut self) {
        self.target = None;
    }

    pub fn is_open(&self) -> bool {
        self.target.is_some()
    }

    pub fn target(&self) -> Option<&GalleryItem> {
        self.target.as_ref()
    }

    pub fn content(&self) -> Option<LightboxContent> {
        self.target.as_ref().map(LightboxContent::for_item)
    }

    /// Handles a click inside the overlay. Returns true if it closed.
    pub fn click(&mut self, target: LightboxTarget) -> bool {
        match target {
            LightboxTarget::Overlay | LightboxTarget::CloseControl if self.is_open() => {
                self.close();
                true
            }
            _ => false,
        }
    }
}
