//! Shorthands for the [`InertiaSession`] attached to the request by [`InertiaMiddleware`].
//!
//! Every function here panics if the request doesn't have a session, since that only happens
//! when the middleware hasn't been registered. Use [`get`] to handle it yourself.
//!
//! [`InertiaMiddleware`]: super::middleware::InertiaMiddleware

use crate::inertia::InertiaResponder;
use crate::utils::inertia_err_msg;
use crate::{Component, InertiaError, InertiaProps, InertiaSession};
use actix_web::http::StatusCode;
use actix_web::{HttpMessage, HttpRequest, HttpResponse};
use serde_json::{Map, Value};

/// Gets the request's Inertia session.
///
/// # Errors
/// Returns [`InertiaError::SessionNotFound`] if there is no session attached to the request.
pub fn get(req: &HttpRequest) -> Result<InertiaSession, InertiaError> {
    req.extensions()
        .get::<InertiaSession>()
        .cloned()
        .ok_or(InertiaError::SessionNotFound)
}

/// Gets the request's Inertia session.
///
/// # Panic
/// Panics if the Inertia middleware hasn't been configured.
pub fn must_get(req: &HttpRequest) -> InertiaSession {
    match get(req) {
        Ok(session) => session,
        Err(err) => panic!(
            "{}",
            inertia_err_msg(format!(
                "{}. Please, assure you have registered the Inertia middleware.",
                err
            ))
        ),
    }
}

/// Short for calling `render` on the request's session.
///
/// # Arguments
/// * `req`         -   A reference to the HttpRequest.
/// * `status`      -   The response status code.
/// * `component`   -   The name of the page javascript component.
/// * `props`       -   The page props.
pub async fn render(
    req: &HttpRequest,
    status: StatusCode,
    component: Component,
    props: InertiaProps,
) -> Result<HttpResponse, InertiaError> {
    must_get(req).render(req, status, component, props).await
}

/// Short for calling `render_with_view_data` on the request's session.
pub async fn render_with_view_data(
    req: &HttpRequest,
    status: StatusCode,
    component: Component,
    props: InertiaProps,
    view_data: Map<String, Value>,
) -> Result<HttpResponse, InertiaError> {
    must_get(req)
        .render_with_view_data(req, status, component, props, view_data)
        .await
}

pub fn location(req: &HttpRequest, url: &str, status: StatusCode) -> HttpResponse {
    must_get(req).location(req, url, status)
}

pub fn redirect(req: &HttpRequest, url: &str) -> HttpResponse {
    must_get(req).redirect(req, url)
}

pub fn redirect_to_route<U, I>(
    req: &HttpRequest,
    name: &str,
    elements: U,
) -> Result<HttpResponse, InertiaError>
where
    U: IntoIterator<Item = I>,
    I: AsRef<str>,
{
    must_get(req).redirect_to_route(req, name, elements)
}

pub fn share(req: &HttpRequest, props: InertiaProps) {
    must_get(req).share(props)
}

pub fn shared(req: &HttpRequest) -> InertiaProps {
    must_get(req).shared()
}

pub fn flush_shared(req: &HttpRequest) {
    must_get(req).flush_shared()
}

pub fn set_root_view(req: &HttpRequest, name: impl Into<String>) {
    must_get(req).set_root_view(name)
}

pub fn root_view(req: &HttpRequest) -> String {
    must_get(req).root_view()
}

pub fn set_version<F>(req: &HttpRequest, version: F)
where
    F: Fn() -> String + Send + Sync + 'static,
{
    must_get(req).set_version(version)
}

pub fn version(req: &HttpRequest) -> String {
    must_get(req).version()
}
