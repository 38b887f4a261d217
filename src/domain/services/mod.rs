pub mod actions;
mod conversation;
pub mod events;
mod scroll;
mod session;
mod uploader;

pub use conversation::*;
pub use scroll::*;
pub use session::*;
pub use uploader::*;
