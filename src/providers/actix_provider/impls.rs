use super::headers::{self, InertiaHeader};

use crate::inertia::{InertiaHttpRequest, InertiaResponder};
use crate::props::InertiaProps;
use crate::renderer::PAGE_VIEW_DATA_KEY;
use crate::req_type::InertiaRequestType;
use crate::utils::inertia_err_msg;
use crate::{Component, InertiaError, InertiaSession};

use actix_web::body::BoxBody;
use actix_web::http::header::{self as http_header, ContentType, HeaderName};
use actix_web::http::StatusCode;
use actix_web::{
    FromRequest, HttpMessage, HttpRequest, HttpResponse, HttpResponseBuilder, ResponseError,
};
use async_trait::async_trait;
use serde_json::{json, Map, Value};

#[async_trait(?Send)]
impl InertiaResponder<HttpRequest> for InertiaSession {
    type Response = HttpResponse;
    type Status = StatusCode;

    #[inline]
    async fn render(
        &self,
        req: &HttpRequest,
        status: StatusCode,
        component: Component,
        props: InertiaProps,
    ) -> Result<HttpResponse, InertiaError> {
        self.render_with_view_data(req, status, component, props, Map::new())
            .await
    }

    async fn render_with_view_data(
        &self,
        req: &HttpRequest,
        status: StatusCode,
        component: Component,
        props: InertiaProps,
        view_data: Map<String, Value>,
    ) -> Result<HttpResponse, InertiaError> {
        let page = self.build_page(req, component, props).await?;

        // if it's an inertia request, returns an InertiaPage object
        if req.is_inertia_request() {
            let body = serde_json::to_string(&page).map_err(|err| {
                InertiaError::SerializationError(format!("Failed to serialize page: {}", err))
            })?;

            return Ok(HttpResponseBuilder::new(status)
                .insert_header(InertiaHeader::Vary.convert())
                .insert_header(InertiaHeader::Inertia.convert())
                .insert_header(ContentType::json())
                .body(body));
        }

        let renderer = self.renderer().ok_or(InertiaError::RendererNotConfigured)?;

        let page = serde_json::to_value(&page).map_err(|err| {
            InertiaError::SerializationError(format!("Failed to serialize page: {}", err))
        })?;

        let mut data = self.view_data();
        data.extend(view_data);
        data.insert(PAGE_VIEW_DATA_KEY.into(), page);

        let html = match renderer.render(&self.root_view(), data, self).await {
            Ok(html) => html,
            Err(err) => {
                log::warn!(
                    "{}",
                    inertia_err_msg(format!("Failed to render {}: {}", self.root_view(), err))
                );
                return Err(InertiaError::RenderFailed(err));
            }
        };

        Ok(HttpResponseBuilder::new(status)
            .insert_header(InertiaHeader::Vary.convert())
            .insert_header(ContentType::html())
            .body(html))
    }

    fn location(&self, req: &HttpRequest, url: &str, status: StatusCode) -> HttpResponse {
        if !req.is_inertia_request() {
            return HttpResponseBuilder::new(status)
                .insert_header((http_header::LOCATION, url))
                .finish();
        }

        HttpResponseBuilder::new(StatusCode::CONFLICT)
            .insert_header(InertiaHeader::InertiaLocation(url).convert())
            .finish()
    }

    #[inline]
    fn redirect(&self, _req: &HttpRequest, url: &str) -> HttpResponse {
        HttpResponse::Found()
            .insert_header((http_header::LOCATION, url))
            .finish()
    }
}

impl InertiaSession {
    /// Redirects (`302 Found`) to the url of an actix named resource.
    ///
    /// # Errors
    /// Returns [`InertiaError::UrlGeneration`] if there is no resource named `name` or if
    /// `elements` don't fill its dynamic segments.
    pub fn redirect_to_route<U, I>(
        &self,
        req: &HttpRequest,
        name: &str,
        elements: U,
    ) -> Result<HttpResponse, InertiaError>
    where
        U: IntoIterator<Item = I>,
        I: AsRef<str>,
    {
        let url = req.url_for(name, elements).map_err(|err| {
            InertiaError::UrlGeneration(format!(
                "Failed to generate url for route {}: {}",
                name, err
            ))
        })?;

        Ok(self.redirect(req, url.as_str()))
    }
}

impl ResponseError for InertiaError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        // user callbacks' errors were already logged and are kept out of the response
        let message = match self {
            InertiaError::LazyEvaluationFailed { prop, .. } => {
                format!("failed to evaluate lazy prop \"{}\"", prop)
            }
            InertiaError::RenderFailed(_) => "failed to render the root view".to_string(),
            _ => self.get_cause(),
        };

        HttpResponseBuilder::new(self.status_code())
            .insert_header(ContentType::json())
            .body(json!({ "message": inertia_err_msg(message) }).to_string())
    }
}

impl InertiaHttpRequest for HttpRequest {
    fn is_inertia_request(&self) -> bool {
        match self.headers().get(headers::X_INERTIA) {
            None => false,
            Some(v) => !v.is_empty(),
        }
    }

    fn get_request_type(&self, component: &Component) -> Result<InertiaRequestType, InertiaError> {
        let partial_data = header_as_str(self, &headers::X_INERTIA_PARTIAL_DATA)?;
        let partial_component = header_as_str(self, &headers::X_INERTIA_PARTIAL_COMPONENT)?;

        Ok(InertiaRequestType::from_headers(
            partial_data,
            partial_component,
            component,
        ))
    }

    fn absolute_url(&self) -> String {
        let connection_info = self.connection_info();
        let path = self
            .uri()
            .path_and_query()
            .map_or_else(|| self.path(), |path| path.as_str());

        format!(
            "{}://{}{}",
            connection_info.scheme(),
            connection_info.host(),
            path
        )
    }

    /// Checks if application assets version matches.
    /// If the request contains the inertia version header, it will be checked.
    /// Otherwise, it means it does not have outdated assets and can also pass.
    fn check_inertia_version(&self, current_version: &str) -> bool {
        self.headers()
            .get(headers::X_INERTIA_VERSION)
            .map_or(true, |version| {
                version
                    .to_str()
                    .map_or(false, |version| version == current_version)
            })
    }
}

fn header_as_str<'a>(
    req: &'a HttpRequest,
    header_name: &HeaderName,
) -> Result<Option<&'a str>, InertiaError> {
    match req.headers().get(header_name) {
        None => Ok(None),
        Some(value) => match value.to_str() {
            Ok(value) => Ok(Some(value)),
            Err(_err) => Err(InertiaError::HeaderError(format!(
                "Header {}'s value must contain only printable ASCII characters.",
                header_name,
            ))),
        },
    }
}

impl FromRequest for InertiaSession {
    type Error = InertiaError;
    type Future = std::future::Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let session = req
            .extensions()
            .get::<InertiaSession>()
            .cloned()
            .ok_or(InertiaError::SessionNotFound);

        std::future::ready(session)
    }
}
