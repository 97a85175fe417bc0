use crate::inertia::Component;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Response containing a valid Inertia Payload that will be used
/// by the Inertia client to render the components.
#[derive(Serialize, Deserialize, Debug, Eq, PartialEq, Clone)]
pub struct InertiaPage {
    /// The name of the JavaScript page component.
    pub(crate) component: Component,
    /// The page props (data). A merge of page props and shared props, already filtered and
    /// with every lazy prop resolved.
    pub(crate) props: Map<String, Value>,
    /// Page's URL. Must be a valid href.
    // this is not the application url, but the absolute url of the current request.
    pub(crate) url: String,
    /// Current assets version.
    pub(crate) version: String,
}

impl InertiaPage {
    /// Instantiates an Inertia Page object to sent as http response,
    /// according to [Inertia Protocol].
    ///
    /// [Inertia Protocol]: https://inertiajs.com/the-protocol
    ///
    /// # Arguments
    /// * `component`   -   The name of the javascript page component (e.g. "Users/Index").
    /// * `url`         -   The absolute url of the current request, including its query.
    /// * `version`     -   Current assets version. Used to assert assets are up-to-date. See
    ///                     [Inertia's assets versioning] page for more details.
    /// * `props`       -   A map of the page's props.
    ///
    /// [Inertia's assets versioning]: https://inertiajs.com/the-protocol#asset-versioning
    ///
    pub fn new(
        component: Component,
        url: String,
        version: String,
        props: Map<String, Value>,
    ) -> Self {
        InertiaPage {
            component,
            url,
            props,
            version,
        }
    }

    pub fn component(&self) -> &Component {
        &self.component
    }

    pub fn props(&self) -> &Map<String, Value> {
        &self.props
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn version(&self) -> &str {
        &self.version
    }
}
