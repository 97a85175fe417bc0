#[cfg(feature = "actix")]
mod actix_provider;

#[cfg(feature = "actix")]
pub mod actix {
    pub use super::actix_provider::facade::*;
    pub use super::actix_provider::headers;
    pub use super::actix_provider::middleware::{InertiaMiddleware, SharedPropsCallback};
}
