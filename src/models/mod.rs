pub mod gallery;
pub mod request;
pub mod response;

pub use gallery::*;
pub use request::*;
pub use response::*;
