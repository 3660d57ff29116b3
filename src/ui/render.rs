use crate::ui::{PageView, UiState};

/// Writes every slot of `view` from `state`.
pub fn render<V: PageView + ?Sized>(state: &UiState, view: &mut V) {
    view.set_loading_visible(state.loading);
    view.set_error(state.error_message.as_deref());
    view.set_expanded_prompt(state.expanded_prompt.as_deref());

    let markup = state
        .gallery
        .iter()
        .map(|item| item.card_markup())
        .collect::<Vec<_>>()
        .join("\n");
    view.set_gallery_markup(&markup);

    let lightbox = state.lightbox.content();
    view.set_lightbox(lightbox.as_ref());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{models::GenerationResponse, ui::SlotPage};

    #[test]
    fn renders_gallery_and_prompt() {
        let mut state = UiState::new();
        state.begin_request();
        state.show_results(&GenerationResponse {
            expanded_prompt: Some("misty forest, soft rim light".into()),
            images: Some(vec!["A".into(), "B".into(), "C".into()]),
            image_info: None,
        });
        state.finish_request();

        let mut page = SlotPage::new();
        render(&state, &mut page);

        assert!(!page.loading_visible);
        assert_eq!(page.error, None);
        assert_eq!(page.expanded_prompt.as_deref(), Some("misty forest, soft rim light"));
        assert_eq!(page.gallery_card_count(), 3);
        assert!(page.lightbox.is_none());
    }

    #[test]
    fn loading_state_hides_everything_else() {
        let mut state = UiState::new();
        state.begin_request();

        let mut page = SlotPage::new();
        page.set_gallery_markup("<div class=\"image-item\"></div>");
        page.set_error(Some("old"));
        render(&state, &mut page);

        assert!(page.loading_visible);
        assert_eq!(page.error, None);
        assert_eq!(page.expanded_prompt, None);
        assert_eq!(page.gallery_markup, "");
    }

    #[test]
    fn open_lightbox_is_rendered() {
        let mut state = UiState::new();
        state.show_results(&GenerationResponse {
            expanded_prompt: None,
            images: Some(vec!["A".into()]),
            image_info: None,
        });
        state.open_lightbox(0);

        let mut page = SlotPage::new();
        render(&state, &mut page);

        let lightbox = page.lightbox.unwrap();
        assert_eq!(lightbox.image_src, "data:image/png;base64,A");
        assert_eq!(lightbox.download_filename, "dream_weaver_image_0.png");
    }
}
