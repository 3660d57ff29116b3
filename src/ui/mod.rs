pub mod controller;
pub mod lightbox;
pub mod page;
pub mod render;
pub mod state;

pub use controller::{PendingRequest, RequestController, SubmitOutcome};
pub use lightbox::{Lightbox, LightboxContent, LightboxTarget};
pub use page::{PageView, SlotPage};
pub use render::render;
pub use state::{UiState, NO_IMAGES_MESSAGE};
