use crate::error::BoxError;
use crate::req_type::InertiaRequestType;
use crate::utils::inertia_err_msg;
use crate::InertiaError;
use futures::future::{try_join_all, BoxFuture};
use futures::FutureExt;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

type LazyCallback = dyn Fn() -> BoxFuture<'static, Result<Value, BoxError>> + Send + Sync;

/// A prop whose value is only computed when the client asks for it by name in a
/// [partial reload]. Standard visits never evaluate it.
///
/// [partial reload]: https://inertiajs.com/partial-reloads#lazy-data-evaluation
#[derive(Clone)]
pub struct LazyProp {
    callback: Arc<LazyCallback>,
}

impl LazyProp {
    pub fn new<F, Fut, E>(callback: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Value, E>> + Send + 'static,
        E: Into<BoxError> + 'static,
    {
        let callback: Arc<LazyCallback> = Arc::new(move || {
            let evaluation = callback();
            async move { evaluation.await.map_err(Into::<BoxError>::into) }.boxed()
        });

        Self { callback }
    }

    async fn evaluate(&self) -> Result<Value, BoxError> {
        (self.callback)().await
    }
}

impl fmt::Debug for LazyProp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("LazyProp")
    }
}

#[derive(Clone, Debug)]
pub enum InertiaProp {
    /// - ALWAYS included on standard visits
    /// - OPTIONALLY included on partial reloads
    Data(Value),
    /// - NEVER included on standard visits
    /// - OPTIONALLY included on partial reloads
    /// - ONLY evaluated when included
    Lazy(LazyProp),
}

pub type InertiaProps = HashMap<String, InertiaProp>;

impl From<Value> for InertiaProp {
    fn from(value: Value) -> Self {
        InertiaProp::Data(value)
    }
}

impl InertiaProp {
    /// Shorthand for `InertiaProp::Lazy(LazyProp::new(callback))`.
    pub fn lazy<F, Fut, E>(callback: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Value, E>> + Send + 'static,
        E: Into<BoxError> + 'static,
    {
        InertiaProp::Lazy(LazyProp::new(callback))
    }

    #[inline]
    pub fn is_lazy(&self) -> bool {
        matches!(self, InertiaProp::Lazy(_))
    }

    /// Narrows the props down to the ones that will be sent for the given request.
    ///
    /// Partial reloads get exactly the requested props that exist, lazy ones included.
    /// Standard visits get everything but the lazy props.
    pub(crate) fn filter_props(props: InertiaProps, req_type: &InertiaRequestType) -> InertiaProps {
        match req_type.partials() {
            Some(partials) => {
                log::debug!(
                    "Partial reload of {} requesting {:?}.",
                    partials.component.0,
                    partials.only
                );

                props
                    .into_iter()
                    .filter(|(key, _)| partials.only.contains(key))
                    .collect()
            }
            None => props
                .into_iter()
                .filter(|(_, prop)| !prop.is_lazy())
                .collect(),
        }
    }

    /// Evaluates every lazy prop left in `props`, concurrently and exactly once each.
    ///
    /// # Errors
    /// Returns [`InertiaError::LazyEvaluationFailed`] for the first lazy prop that fails. No
    /// partially resolved map is ever returned.
    pub(crate) async fn resolve_props(
        props: InertiaProps,
    ) -> Result<Map<String, Value>, InertiaError> {
        let mut resolved = Map::new();
        let mut lazy_props = Vec::new();

        for (key, prop) in props.into_iter() {
            match prop {
                InertiaProp::Data(value) => {
                    resolved.insert(key, value);
                }
                InertiaProp::Lazy(lazy) => lazy_props.push((key, lazy)),
            }
        }

        let evaluations = lazy_props.into_iter().map(|(key, lazy)| async move {
            log::debug!("Evaluating lazy prop {}.", key);

            match lazy.evaluate().await {
                Ok(value) => Ok((key, value)),
                Err(source) => {
                    log::warn!(
                        "{}",
                        inertia_err_msg(format!("Lazy prop {} failed: {}", key, source))
                    );
                    Err(InertiaError::LazyEvaluationFailed { prop: key, source })
                }
            }
        });

        resolved.extend(try_join_all(evaluations).await?);

        Ok(resolved)
    }
}

/// Merges the session shared props with the props given to a render call. Explicit props take
/// precedence over shared ones holding the same key.
pub fn merge_props(shared: InertiaProps, explicit: InertiaProps) -> InertiaProps {
    if shared.is_empty() {
        return explicit;
    }

    let mut merged = shared;
    merged.extend(explicit);
    merged
}
