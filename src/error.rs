use thiserror::Error;

/// Error type returned by user supplied callbacks (lazy props and renderers).
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum InertiaError {
    /// No [`InertiaSession`] was attached to the request. This means the Inertia middleware
    /// hasn't been registered for the route being handled.
    ///
    /// [`InertiaSession`]: crate::InertiaSession
    #[error("request does not have an Inertia session attached")]
    SessionNotFound,
    #[error("renderer not registered")]
    RendererNotConfigured,
    #[error("failed to evaluate lazy prop \"{prop}\": {source}")]
    LazyEvaluationFailed {
        prop: String,
        #[source]
        source: BoxError,
    },
    #[error("failed to render the root view: {0}")]
    RenderFailed(#[source] BoxError),
    #[error("{0}")]
    SerializationError(String),
    #[error("{0}")]
    HeaderError(String),
    #[error("{0}")]
    UrlGeneration(String),
}

impl InertiaError {
    pub fn get_cause(&self) -> String {
        self.to_string()
    }
}
