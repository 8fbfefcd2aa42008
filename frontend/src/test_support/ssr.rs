use leptos::*;

struct SuppressResources;

impl SuppressResources {
    fn enable() -> Self {
        leptos_reactive::suppress_resource_load(true);
        Self
    }
}

impl Drop for SuppressResources {
    fn drop(&mut self) {
        leptos_reactive::suppress_resource_load(false);
    }
}

/// Runs `f` inside a fresh reactive runtime that is disposed afterwards.
/// Resource fetchers never fire, so view models can be built without a
/// task executor.
pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let _guard = SuppressResources::enable();
    let runtime = create_runtime();
    let out = f();
    runtime.dispose();
    out
}

pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    with_runtime(|| view().into_view().render_to_string().to_string())
}
