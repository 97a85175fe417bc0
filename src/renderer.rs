use crate::error::BoxError;
use crate::InertiaSession;
use async_trait::async_trait;
use serde_json::{Map, Value};

/// Key under which the page object is handed to the root view.
pub const PAGE_VIEW_DATA_KEY: &str = "page";

/// Renders the root view on full visits (the first request or any non-Inertia request).
///
/// Since Rust does not offer a standard template engine, it is not our goal to tie you to a
/// specific one. Implement this trait over the engine you are using and register it with
/// [`InertiaConfigBuilder::set_renderer`] or [`InertiaSession::set_renderer`].
///
/// # Arguments
/// Inertia will call `render` passing the following parameters to it:
/// * `view`        -   The root view name (see [`InertiaSession::root_view`]).
/// * `data`        -   The view data. It holds the configured view data, the view data given
///                     to the render call and the page object under [`PAGE_VIEW_DATA_KEY`].
/// * `session`     -   The request's Inertia session, e.g. to check whether SSR is enabled.
///
/// # Errors
/// Any error returned here aborts the response with [`InertiaError::RenderFailed`].
///
/// [`InertiaConfigBuilder::set_renderer`]: crate::InertiaConfigBuilder::set_renderer
/// [`InertiaError::RenderFailed`]: crate::InertiaError::RenderFailed
#[async_trait]
pub trait Renderer: Send + Sync {
    async fn render(
        &self,
        view: &str,
        data: Map<String, Value>,
        session: &InertiaSession,
    ) -> Result<Vec<u8>, BoxError>;
}
