mod config;
mod error;
mod inertia;
mod page;
mod props;
mod providers;
mod renderer;
mod req_type;
mod session;
mod utils;

pub use config::{
    InertiaConfig, InertiaConfigBuilder, InertiaVersion, VersionResolver, DEFAULT_ROOT_VIEW,
};
pub use error::{BoxError, InertiaError};
pub use inertia::{
    Component, InertiaResponder, X_INERTIA, X_INERTIA_LOCATION, X_INERTIA_PARTIAL_COMPONENT,
    X_INERTIA_PARTIAL_DATA, X_INERTIA_VERSION,
};
pub use page::InertiaPage;
pub use props::{merge_props, InertiaProp, InertiaProps, LazyProp};
pub use renderer::{Renderer, PAGE_VIEW_DATA_KEY};
pub use session::InertiaSession;

#[cfg(feature = "actix")]
pub use providers::actix;
