//! HTTP Handlers

mod article;
mod auth;
mod ping;
mod tag;
mod upload;

pub use article::*;
pub use auth::*;
pub use ping::*;
pub use tag::*;
pub use upload::*;
