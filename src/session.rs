use crate::config::{InertiaConfig, VersionResolver};
use crate::inertia::InertiaHttpRequest;
use crate::props::{merge_props, InertiaProp, InertiaProps};
use crate::renderer::Renderer;
use crate::{Component, InertiaError, InertiaPage};
use parking_lot::RwLock;
use serde_json::{Map, Value};
use std::sync::Arc;

struct SessionState {
    root_view: String,
    shared_props: InertiaProps,
    version: VersionResolver,
    renderer: Option<Arc<dyn Renderer>>,
    ssr_enabled: bool,
    view_data: Map<String, Value>,
}

/// Per-request Inertia state. It is created by the Inertia middleware for every incoming
/// request and dropped together with it, so nothing set here ever leaks into another request.
///
/// Cloning an `InertiaSession` is cheap and every clone refers to the same state.
#[derive(Clone)]
pub struct InertiaSession {
    state: Arc<RwLock<SessionState>>,
}

impl InertiaSession {
    pub fn from_config(config: &InertiaConfig) -> Self {
        let state = SessionState {
            root_view: config.root_view.clone(),
            shared_props: InertiaProps::new(),
            version: config.version.clone().into_resolver(),
            renderer: config.renderer.clone(),
            ssr_enabled: config.ssr_enabled,
            view_data: config.view_data.clone(),
        };

        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }

    pub fn set_root_view(&self, name: impl Into<String>) {
        self.state.write().root_view = name.into();
    }

    pub fn root_view(&self) -> String {
        self.state.read().root_view.clone()
    }

    /// Replaces the shared props. Props shared before are discarded, not merged.
    pub fn share(&self, props: InertiaProps) {
        self.state.write().shared_props = props;
    }

    pub fn shared(&self) -> InertiaProps {
        self.state.read().shared_props.clone()
    }

    pub fn flush_shared(&self) {
        self.state.write().shared_props.clear();
    }

    pub fn set_version<F>(&self, version: F)
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        self.state.write().version = Arc::new(version);
    }

    pub fn version(&self) -> String {
        // the resolver may be slow, don't hold the lock while calling it
        let resolver = self.state.read().version.clone();
        resolver()
    }

    pub fn set_renderer(&self, renderer: Arc<dyn Renderer>) {
        self.state.write().renderer = Some(renderer);
    }

    pub fn renderer(&self) -> Option<Arc<dyn Renderer>> {
        self.state.read().renderer.clone()
    }

    pub fn enable_ssr(&self) {
        self.state.write().ssr_enabled = true;
    }

    pub fn disable_ssr(&self) {
        self.state.write().ssr_enabled = false;
    }

    pub fn is_ssr_enabled(&self) -> bool {
        self.state.read().ssr_enabled
    }

    pub fn is_ssr_disabled(&self) -> bool {
        !self.is_ssr_enabled()
    }

    pub(crate) fn view_data(&self) -> Map<String, Value> {
        self.state.read().view_data.clone()
    }

    /// Builds the page object for `component`: merges the shared props with `props`, narrows
    /// them down according to the partial reload headers and evaluates the lazy props left.
    pub(crate) async fn build_page<R>(
        &self,
        req: &R,
        component: Component,
        props: InertiaProps,
    ) -> Result<InertiaPage, InertiaError>
    where
        R: InertiaHttpRequest,
    {
        let req_type = req.get_request_type(&component)?;

        let props = merge_props(self.shared(), props);
        let props = InertiaProp::filter_props(props, &req_type);
        let props = InertiaProp::resolve_props(props).await?;

        Ok(InertiaPage::new(
            component,
            req.absolute_url(),
            self.version(),
            props,
        ))
    }
}
