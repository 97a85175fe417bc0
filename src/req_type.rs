use crate::utils::split_and_remove_empty;
use crate::Component;

#[derive(Eq, PartialEq, Debug, Clone)]
pub(crate) struct PartialComponent {
    pub component: Component,
    pub only: Vec<String>,
}

#[derive(Eq, PartialEq, Debug, Clone)]
pub(crate) enum InertiaRequestType {
    Standard,
    Partial(PartialComponent),
}

impl InertiaRequestType {
    /// Classifies a request from its raw partial reload headers.
    ///
    /// A request is only partial if it names at least one prop and claims to have `rendering`
    /// already mounted. A partial request for another component is a standard visit.
    pub fn from_headers(
        partial_data: Option<&str>,
        partial_component: Option<&str>,
        rendering: &Component,
    ) -> Self {
        let only = partial_data
            .map(|data| split_and_remove_empty(data, ','))
            .unwrap_or_default();

        match partial_component {
            Some(component) if !only.is_empty() && component == rendering.0 => {
                InertiaRequestType::Partial(PartialComponent {
                    component: rendering.clone(),
                    only,
                })
            }
            _ => InertiaRequestType::Standard,
        }
    }

    #[cfg(test)]
    pub fn is_standard(&self) -> bool {
        matches!(*self, InertiaRequestType::Standard)
    }

    #[inline]
    pub fn partials(&self) -> Option<&PartialComponent> {
        match self {
            InertiaRequestType::Partial(reqs) => Some(reqs),
            InertiaRequestType::Standard => None,
        }
    }
}
