use crate::props::InertiaProps;
use crate::req_type::InertiaRequestType;
use crate::InertiaError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const X_INERTIA: &str = "x-inertia";
pub const X_INERTIA_LOCATION: &str = "x-inertia-location";
pub const X_INERTIA_VERSION: &str = "x-inertia-version";
pub const X_INERTIA_PARTIAL_COMPONENT: &str = "x-inertia-partial-component";
pub const X_INERTIA_PARTIAL_DATA: &str = "x-inertia-partial-data";

/// The javascript component name.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
#[serde(transparent)]
pub struct Component(pub String);

impl From<&str> for Component {
    fn from(value: &str) -> Self {
        Component(value.to_string())
    }
}

impl From<String> for Component {
    fn from(value: String) -> Self {
        Component(value)
    }
}

/// InertiaResponder trait defines the response side of the protocol. It is implemented by
/// [`InertiaSession`] for every http library enabled through cargo features. For instance,
/// with the "actix" feature, `THttpReq` is an actix-web `HttpRequest` and `Response` is an
/// `HttpResponse`.
///
/// [`InertiaSession`]: crate::InertiaSession
// `?Send` since some frameworks, like actix, don't require requests to be thread-safe
#[async_trait(?Send)]
pub trait InertiaResponder<THttpReq> {
    type Response;
    type Status;

    /// Renders an Inertia Page as an HTTP response.
    ///
    /// # Arguments
    /// * `req`         -   The HTTP request.
    /// * `status`      -   The response status code.
    /// * `component`   -   The page javascript component name to be rendered by the
    ///                     client-side adapter.
    /// * `props`       -   The page props. They are merged over the session shared props.
    ///
    /// # Errors
    /// Fails if any selected lazy prop fails, if the page can't be serialized or, on full
    /// visits, if there is no renderer or the renderer fails.
    async fn render(
        &self,
        req: &THttpReq,
        status: Self::Status,
        component: Component,
        props: InertiaProps,
    ) -> Result<Self::Response, InertiaError>;

    /// Same as [`InertiaResponder::render`], but `view_data` is also handed to the root view
    /// renderer on full visits. It is ignored on Inertia requests.
    async fn render_with_view_data(
        &self,
        req: &THttpReq,
        status: Self::Status,
        component: Component,
        props: InertiaProps,
        view_data: Map<String, Value>,
    ) -> Result<Self::Response, InertiaError>;

    /// Generates a response for [external redirects]. Inertia requests receive a
    /// `409 Conflict` with the `X-Inertia-Location` header so that the client performs a full
    /// browser visit; any other request is redirected with the given status.
    ///
    /// [external redirects]: https://inertiajs.com/redirects#external-redirects
    fn location(&self, req: &THttpReq, url: &str, status: Self::Status) -> Self::Response;

    /// A plain `302 Found` redirect.
    fn redirect(&self, req: &THttpReq, url: &str) -> Self::Response;
}

/// Defines some helper methods to be implemented to HttpRequests from the
/// library opted by the cargo feature.
pub(crate) trait InertiaHttpRequest {
    fn is_inertia_request(&self) -> bool;

    /// Classifies the request against the component that is about to be rendered.
    fn get_request_type(&self, component: &Component) -> Result<InertiaRequestType, InertiaError>;

    /// The absolute url (scheme, host, path and query) as observed by the server.
    fn absolute_url(&self) -> String;

    fn check_inertia_version(&self, current_version: &str) -> bool;
}
