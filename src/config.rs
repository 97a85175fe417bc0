use crate::renderer::Renderer;
use serde_json::{Map, Value};
use std::sync::{Arc, OnceLock};
use std::time::{SystemTime, UNIX_EPOCH};

pub const DEFAULT_ROOT_VIEW: &str = "app";

pub type VersionResolver = Arc<dyn Fn() -> String + Send + Sync>;

/// The current assets version. See [Asset versioning](https://inertiajs.com/asset-versioning).
#[derive(Clone)]
pub enum InertiaVersion {
    Literal(String),
    /// Called every time the version is needed, so it can follow a build hash or any other
    /// source that changes while the application runs.
    Resolver(VersionResolver),
}

impl InertiaVersion {
    /// A literal version holding the unix timestamp of the first call in this process. Used
    /// when no version is configured, so that every deploy invalidates the clients' assets.
    ///
    /// Every config built in the same process shares it, so building one config per worker
    /// (e.g. inside the `HttpServer::new` factory) still yields a single version.
    pub fn timestamp() -> Self {
        static STARTED_AT: OnceLock<String> = OnceLock::new();

        let seconds = STARTED_AT.get_or_init(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|elapsed| elapsed.as_secs())
                .unwrap_or_default()
                .to_string()
        });

        InertiaVersion::Literal(seconds.clone())
    }

    pub fn resolve(&self) -> String {
        match self {
            InertiaVersion::Literal(version) => version.clone(),
            InertiaVersion::Resolver(resolver) => resolver(),
        }
    }

    pub(crate) fn into_resolver(self) -> VersionResolver {
        match self {
            InertiaVersion::Literal(version) => Arc::new(move || version.clone()),
            InertiaVersion::Resolver(resolver) => resolver,
        }
    }
}

/// A configuration struct for initializing every request's [`InertiaSession`]. You can directly
/// fill the struct or use the builder fluent syntax by calling `InertiaConfig::builder()`, and
/// finally `InertiaConfigBuilder::build()`.
///
/// * `root_view`   -   The name of the root view handed to the renderer on full visits.
///                     Defaults to [`DEFAULT_ROOT_VIEW`].
/// * `version`     -   The current asset version of the application. Defaults to
///                     [`InertiaVersion::timestamp`].
/// * `renderer`    -   The root view [`Renderer`]. Defaults to `None`, in which case full
///                     visits fail until a renderer is set in the session.
/// * `ssr_enabled` -   Whether renderers should server-side render the page. Defaults to
///                     `false`.
/// * `view_data`   -   View data handed to the renderer on every full visit. Defaults to an
///                     empty map.
///
/// [`InertiaSession`]: crate::InertiaSession
#[derive(Clone)]
pub struct InertiaConfig {
    pub root_view: String,
    pub version: InertiaVersion,
    pub renderer: Option<Arc<dyn Renderer>>,
    pub ssr_enabled: bool,
    pub view_data: Map<String, Value>,
}

impl Default for InertiaConfig {
    fn default() -> Self {
        InertiaConfigBuilder::new().build()
    }
}

impl InertiaConfig {
    /// Instatiates a new InertiaConfigBuilder instance. It must be configured using a fluent
    /// syntax.
    ///
    /// # Examples
    /// ```rust
    /// use inertia_pages::{InertiaConfig, InertiaVersion};
    ///
    /// let inertia_config = InertiaConfig::builder()
    ///     .set_root_view("layouts/app.html")
    ///     .set_version(InertiaVersion::Literal("v1".into()))
    ///     .build();
    ///
    /// assert_eq!(inertia_config.root_view, "layouts/app.html");
    /// ```
    pub fn builder() -> InertiaConfigBuilder {
        InertiaConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct InertiaConfigBuilder {
    root_view: Option<String>,
    version: Option<InertiaVersion>,
    renderer: Option<Arc<dyn Renderer>>,
    ssr_enabled: bool,
    view_data: Option<Map<String, Value>>,
}

impl InertiaConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_root_view(mut self, root_view: impl Into<String>) -> Self {
        self.root_view = Some(root_view.into());
        self
    }

    pub fn set_version(mut self, version: InertiaVersion) -> Self {
        self.version = Some(version);
        self
    }

    pub fn set_renderer(mut self, renderer: Arc<dyn Renderer>) -> Self {
        self.renderer = Some(renderer);
        self
    }

    pub fn set_view_data(mut self, view_data: Map<String, Value>) -> Self {
        self.view_data = Some(view_data);
        self
    }

    pub fn enable_ssr(mut self) -> Self {
        self.ssr_enabled = true;
        self
    }

    /// Compile the current `InertiaConfigBuilder` into a valid `InertiaConfig` struct, filling
    /// unset fields with their defaults.
    pub fn build(self) -> InertiaConfig {
        InertiaConfig {
            root_view: self
                .root_view
                .unwrap_or_else(|| DEFAULT_ROOT_VIEW.to_string()),
            version: self.version.unwrap_or_else(InertiaVersion::timestamp),
            renderer: self.renderer,
            ssr_enabled: self.ssr_enabled,
            view_data: self.view_data.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::{InertiaConfig, InertiaConfigBuilder, InertiaVersion, DEFAULT_ROOT_VIEW};
    use serde_json::{json, Map};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn builder_fills_defaults() {
        let config = InertiaConfigBuilder::new().build();

        assert_eq!(config.root_view, DEFAULT_ROOT_VIEW);
        assert!(config.renderer.is_none());
        assert!(!config.ssr_enabled);
        assert!(config.view_data.is_empty());
        assert!(config.version.resolve().parse::<u64>().is_ok());
    }

    #[test]
    fn default_version_is_shared_between_configs() {
        let first = InertiaConfigBuilder::new().build();
        std::thread::sleep(std::time::Duration::from_millis(1100));
        let second = InertiaConfigBuilder::new().build();

        assert_eq!(first.version.resolve(), second.version.resolve());
    }

    #[test]
    fn builder_builds_correctly() {
        let mut view_data = Map::new();
        view_data.insert("title".into(), json!("Inertia"));

        let config = InertiaConfig::builder()
            .set_root_view("root.html")
            .set_version(InertiaVersion::Literal("v1".into()))
            .set_view_data(view_data.clone())
            .enable_ssr()
            .build();

        assert_eq!(config.root_view, "root.html");
        assert_eq!(config.version.resolve(), "v1");
        assert_eq!(config.view_data, view_data);
        assert!(config.ssr_enabled);
    }

    #[test]
    fn resolver_version_is_called_on_every_resolution() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let version = InertiaVersion::Resolver(Arc::new(move || {
            format!("build-{}", counter.fetch_add(1, Ordering::SeqCst))
        }))
        .into_resolver();

        assert_eq!(version(), "build-0");
        assert_eq!(version(), "build-1");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
