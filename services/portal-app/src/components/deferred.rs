//! Deferred loading of widget implementations

use std::sync::Arc;

use client_gate::{DeferredLoader, RenderPass};
use leptos::prelude::*;

/// A loaded widget: builds a fresh view each time it is rendered
pub type WidgetFactory = Arc<dyn Fn() -> AnyView + Send + Sync>;

/// Wrap a view constructor as a [`WidgetFactory`]
pub fn widget_factory<F, IV>(build: F) -> WidgetFactory
where
    F: Fn() -> IV + Send + Sync + 'static,
    IV: IntoView + 'static,
{
    Arc::new(move || build().into_any())
}

/// Acquires a widget with `load` on the first interactive pass.
///
/// `load` is never called on the server or during hydration; until it has
/// run, `fallback` is rendered.
#[component]
pub fn Deferred<F>(
    load: F,
    #[prop(optional, into)] fallback: ViewFn,
) -> impl IntoView
where
    F: FnOnce() -> WidgetFactory + Send + Sync + 'static,
{
    let pass = RwSignal::new(RenderPass::Initial);
    let loader = StoredValue::new(DeferredLoader::new(load));

    Effect::new(move |_| {
        pass.set(RenderPass::Interactive);
    });

    move || {
        let current = pass.get();
        let widget = loader
            .try_update_value(|loader| loader.render(current).cloned())
            .flatten();
        match widget {
            Some(build) => build(),
            None => fallback.run(),
        }
    }
}
