use crate::{
    client::ImageGenerator,
    error::Result,
    logger,
    models::{GenerationRequest, GenerationResponse, SelectedOptions, SubmitMode},
    ui::{render, LightboxTarget, PageView, UiState},
};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use uuid::Uuid;

/// A validated request that has been issued but not yet settled.
#[derive(Debug, Clone)]
pub struct PendingRequest {
    pub token: u64,
    pub request_id: Uuid,
    pub request: GenerationRequest,
}

/// How one submission ended, as seen by the page.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Input validation failed; nothing was sent.
    Rejected(String),
    Rendered { images: usize },
    NoImages,
    Failed(String),
    /// A newer submission was issued before this one settled.
    Superseded,
}

struct Shared<V> {
    view: V,
    state: UiState,
    latest_token: u64,
}

impl<V: PageView> Shared<V> {
    fn render(&mut self) {
        render(&self.state, &mut self.view);
    }
}

/// Drives the submit, render and lightbox cycle for one page.
///
/// Clones share the same page and state, so a submission can run on one
/// task while another handles clicks. Only the most recently issued
/// request may change the page when it settles.
pub struct RequestController<V> {
    generator: Arc<dyn ImageGenerator>,
    shared: Arc<Mutex<Shared<V>>>,
}

impl<V> Clone for RequestController<V> {
    fn clone(&self) -> Self {
        Self {
            generator: Arc::clone(&self.generator),
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<V: PageView> RequestController<V> {
    pub fn new(generator: Arc<dyn ImageGenerator>, view: V) -> Self {
        let mut shared = Shared {
            view,
            state: UiState::new(),
            latest_token: 0,
        };
        shared.render();

        Self {
            generator,
            shared: Arc::new(Mutex::new(shared)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Shared<V>> {
        self.shared.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Reads and validates the inputs, then resets the page for a new cycle.
    ///
    /// On a validation error only the error surface changes.
    pub fn begin(&self, mode: SubmitMode) -> Result<PendingRequest> {
        let mut shared = self.lock();

        let prompt = shared.view.prompt_value();
        let options = match mode {
            SubmitMode::WithOptions => shared.view.selected_options(),
            SubmitMode::Plain => SelectedOptions::new(),
        };

        let request = match GenerationRequest::from_inputs(mode, &prompt, options) {
            Ok(request) => request,
            Err(err) => {
                log::warn!("Submission rejected: {}", err);
                shared.state.show_error(err.user_message());
                shared.render();
                return Err(err);
            }
        };

        shared.latest_token += 1;
        let pending = PendingRequest {
            token: shared.latest_token,
            request_id: Uuid::new_v4(),
            request,
        };

        shared.state.begin_request();
        shared.render();

        log::info!(
            "🎨 Submitting request {} ({:?}, token {})",
            pending.request_id,
            mode,
            pending.token
        );
        Ok(pending)
    }

    /// Applies a settled result, unless a newer request has been issued since.
    pub fn complete(
        &self,
        pending: PendingRequest,
        result: Result<GenerationResponse>,
    ) -> SubmitOutcome {
        let mut shared = self.lock();

        if pending.token != shared.latest_token {
            log::warn!(
                "Discarding stale response for request {} (token {}, latest {})",
                pending.request_id,
                pending.token,
                shared.latest_token
            );
            return SubmitOutcome::Superseded;
        }

        let outcome = match result {
            Ok(response) => match shared.state.show_results(&response) {
                0 => {
                    log::warn!("Request {} returned no images", pending.request_id);
                    SubmitOutcome::NoImages
                }
                images => {
                    log::info!("✅ Request {} rendered {} image(s)", pending.request_id, images);
                    SubmitOutcome::Rendered { images }
                }
            },
            Err(err) => {
                log::error!("❌ Request {} failed: {}", pending.request_id, err);
                let message = err.user_message();
                shared.state.show_failure(message.clone());
                SubmitOutcome::Failed(message)
            }
        };

        shared.state.finish_request();
        shared.render();
        outcome
    }

    /// Full cycle: validate, send, render.
    pub async fn submit(&self, mode: SubmitMode) -> SubmitOutcome {
        let pending = match self.begin(mode) {
            Ok(pending) => pending,
            Err(err) => return SubmitOutcome::Rejected(err.user_message()),
        };

        let result = {
            let _timer = logger::timer("generate_images");
            self.generator.generate_images(&pending.request).await
        };

        self.complete(pending, result)
    }

    /// Opens the lightbox on the gallery image at `index`.
    pub fn open_lightbox(&self, index: usize) -> bool {
        let mut shared = self.lock();
        let opened = shared.state.open_lightbox(index);
        if opened {
            shared.render();
        }
        opened
    }

    /// Routes a click inside the lightbox. Returns true if it closed.
    pub fn lightbox_click(&self, target: LightboxTarget) -> bool {
        let mut shared = self.lock();
        let closed = shared.state.lightbox.click(target);
        if closed {
            shared.render();
        }
        closed
    }

    pub fn close_lightbox(&self) {
        self.lightbox_click(LightboxTarget::CloseControl);
    }

    /// Snapshot of the current UI state.
    pub fn state(&self) -> UiState {
        self.lock().state.clone()
    }

    pub fn with_view<R>(&self, f: impl FnOnce(&V) -> R) -> R {
        f(&self.lock().view)
    }

    /// Mutable access to the page, e.g. to change input values.
    pub fn with_view_mut<R>(&self, f: impl FnOnce(&mut V) -> R) -> R {
        f(&mut self.lock().view)
    }
}
