use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::{Method, StatusCode};
use actix_web::Error;
use actix_web::HttpMessage;
use futures_util::future::LocalBoxFuture;
use std::future::{ready, Ready};
use std::sync::Arc;

use crate::inertia::{InertiaHttpRequest, InertiaResponder};
use crate::utils::inertia_err_msg;
use crate::{InertiaConfig, InertiaProps, InertiaSession};

pub type SharedPropsCallback = dyn Fn(&ServiceRequest) -> InertiaProps;

/// Attaches a brand new [`InertiaSession`] to every request it wraps. Handlers reach it
/// through the [`facade`] functions or by extracting `InertiaSession` directly.
///
/// Besides that, it:
/// * answers Inertia `GET` requests carrying an outdated `X-Inertia-Version` with a
///   `409 Conflict`, so the client reloads the page with fresh assets;
/// * turns `301` and `302` redirects of `PUT`, `PATCH` and `DELETE` requests into
///   `303 See Other`, so the client follows them with a `GET`.
///
/// [`facade`]: crate::actix
pub struct InertiaMiddleware {
    config: Arc<InertiaConfig>,
    shared_props_cb: Arc<SharedPropsCallback>,
}

impl Default for InertiaMiddleware {
    fn default() -> Self {
        Self::new(InertiaConfig::default())
    }
}

impl InertiaMiddleware {
    pub fn new(config: InertiaConfig) -> Self {
        Self {
            config: Arc::new(config),
            shared_props_cb: Arc::new(|_req: &ServiceRequest| InertiaProps::new()),
        }
    }

    /// Sets a callback whose props are shared (see [`InertiaSession::share`]) as soon as
    /// the session is attached to the request.
    pub fn with_shared_props(mut self, props: Arc<SharedPropsCallback>) -> Self {
        self.shared_props_cb = props;
        self
    }
}

// Middleware factory is `Transform` trait
// `S` - type of the next service
// `B` - type of response's body
impl<S, B> Transform<S, ServiceRequest> for InertiaMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = InertiaMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(InertiaMiddlewareService {
            service,
            config: self.config.clone(),
            shared_props: self.shared_props_cb.clone(),
        }))
    }
}

pub struct InertiaMiddlewareService<S> {
    service: S,
    config: Arc<InertiaConfig>,
    shared_props: Arc<SharedPropsCallback>,
}

impl<S, B> Service<ServiceRequest> for InertiaMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let session = InertiaSession::from_config(&self.config);

        let shared_props = (self.shared_props)(&req);
        if !shared_props.is_empty() {
            session.share(shared_props);
        }

        req.extensions_mut().insert(session.clone());

        // check inertia version and force refresh if the client assets are outdated.
        // the request is only borrowed here: the router needs sole ownership of it later on
        let outdated = {
            let http_req = req.request();
            req.method() == Method::GET
                && http_req.is_inertia_request()
                && !http_req.check_inertia_version(&session.version())
        };

        if outdated {
            let http_req = req.request();
            let url = http_req.absolute_url();
            log::info!(
                "{}",
                inertia_err_msg(format!("Outdated assets version, forcing refresh of {}.", url))
            );

            let response = session.location(http_req, &url, StatusCode::CONFLICT);
            let res = req.into_response(response).map_into_right_body();

            return Box::pin(async move { Ok(res) });
        }

        let fut = self.service.call(req);

        Box::pin(async move {
            let mut res = fut.await?.map_into_left_body();

            let is_update_method =
                [Method::PATCH, Method::PUT, Method::DELETE].contains(res.request().method());
            let is_redirect =
                res.status() == StatusCode::MOVED_PERMANENTLY || res.status() == StatusCode::FOUND;

            if is_update_method && is_redirect {
                *res.response_mut().status_mut() = StatusCode::SEE_OTHER;
            }

            Ok(res)
        })
    }
}
