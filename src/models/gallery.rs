use crate::{
    error::{Result, WeaverError},
    models::{GenerationResponse, ImageInfo},
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::path::{Path, PathBuf};

pub const DATA_URL_PREFIX: &str = "data:image/png;base64,";
pub const DOWNLOAD_PREFIX: &str = "dream_weaver_image_";

/// One rendered image card.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryItem {
    pub index: usize,
    pub payload: String,
    pub image_data_url: String,
    pub info: ImageInfo,
    pub download_filename: String,
}

impl GalleryItem {
    pub fn new(index: usize, payload: impl Into<String>, info: ImageInfo) -> Self {
        let payload = payload.into();
        let download_filename = download_filename(&info, index);
        Self {
            index,
            image_data_url: format!("{}{}", DATA_URL_PREFIX, payload),
            payload,
            info,
            download_filename,
        }
    }

    /// Builds one item per image, in response order.
    pub fn from_response(response: &GenerationResponse) -> Vec<Self> {
        response
            .images()
            .iter()
            .enumerate()
            .map(|(index, payload)| Self::new(index, payload.clone(), response.info_at(index)))
            .collect()
    }

    pub fn alt_text(&self) -> String {
        format!("Generated Image {}", self.index + 1)
    }

    /// Parameter summary shared by the gallery card and the lightbox caption.
    pub fn parameters_markup(&self) -> String {
        let info = &self.info;
        [
            ("Seed", info.seed_display()),
            ("Steps", info.steps_display()),
            ("Sampler", info.sampler_display()),
            ("CFG Scale", info.cfg_scale_display()),
            ("Dimensions", info.dimensions_display()),
        ]
        .iter()
        .map(|(label, value)| format!("<p><strong>{}:</strong> {}</p>", label, escape_html(value)))
        .collect::<Vec<_>>()
        .join("\n")
    }

    pub fn card_markup(&self) -> String {
        format!(
            concat!(
                "<div class=\"image-item\" data-index=\"{index}\">",
                "<img src=\"{src}\" alt=\"{alt}\">",
                "<div class=\"parameters-display\">\n{params}\n</div>",
                "<a class=\"download-btn\" href=\"{src}\" download=\"{file}\">Download</a>",
                "</div>"
            ),
            index = self.index,
            src = self.image_data_url,
            alt = escape_html(&self.alt_text()),
            params = self.parameters_markup(),
            file = escape_html(&self.download_filename),
        )
    }

    pub fn decode_png(&self) -> Result<Vec<u8>> {
        STANDARD
            .decode(self.payload.as_bytes())
            .map_err(|e| WeaverError::DecodeError(e.to_string()))
    }

    /// Writes the decoded image to `dir` under its download filename.
    pub fn save_to(&self, dir: impl AsRef<Path>) -> Result<PathBuf> {
        let bytes = self.decode_png()?;
        let path = dir.as_ref().join(&self.download_filename);
        std::fs::write(&path, bytes)?;
        log::debug!("Saved {} ({})", path.display(), self.alt_text());
        Ok(path)
    }
}

/// `dream_weaver_image_{seed}.png`, or the zero-based index when the seed is absent.
///
/// Characters outside `[A-Za-z0-9._-]` in the seed become `_` so the name
/// never leaves the download directory.
pub fn download_filename(info: &ImageInfo, index: usize) -> String {
    let stem = match info.seed_value() {
        Some(seed) => seed
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                    c
                } else {
                    '_'
                }
            })
            .collect::<String>()
            .replace("..", "__"),
        None => index.to_string(),
    };
    format!("{}{}.png", DOWNLOAD_PREFIX, stem)
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
