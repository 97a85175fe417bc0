use crate::inertia;
use actix_web::http::header::{self, HeaderName};

pub const X_INERTIA: HeaderName = HeaderName::from_static(inertia::X_INERTIA);
pub const X_INERTIA_LOCATION: HeaderName = HeaderName::from_static(inertia::X_INERTIA_LOCATION);
pub const X_INERTIA_VERSION: HeaderName = HeaderName::from_static(inertia::X_INERTIA_VERSION);
pub const X_INERTIA_PARTIAL_COMPONENT: HeaderName =
    HeaderName::from_static(inertia::X_INERTIA_PARTIAL_COMPONENT);
pub const X_INERTIA_PARTIAL_DATA: HeaderName =
    HeaderName::from_static(inertia::X_INERTIA_PARTIAL_DATA);

pub enum InertiaHeader<'a> {
    Inertia,
    /// `Vary: X-Inertia`, so caches never serve a page object for an html visit (or the
    /// other way around).
    Vary,
    InertiaLocation(&'a str),
    InertiaPartialData(Vec<&'a str>),
    InertiaPartialComponent(&'a str),
    Version(&'a str),
}

impl InertiaHeader<'_> {
    pub fn convert(&self) -> (HeaderName, String) {
        match self {
            Self::Inertia => (X_INERTIA, "true".into()),
            Self::Vary => (header::VARY, "X-Inertia".into()),
            Self::Version(version) => (X_INERTIA_VERSION, version.to_string()),
            Self::InertiaLocation(path) => (X_INERTIA_LOCATION, path.to_string()),
            Self::InertiaPartialComponent(component) => {
                (X_INERTIA_PARTIAL_COMPONENT, component.to_string())
            }
            Self::InertiaPartialData(partials) => (X_INERTIA_PARTIAL_DATA, partials.join(",")),
        }
    }
}
