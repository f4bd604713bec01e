//! API client context for the UI.

use api::{ApiClient, ApiConfig};
use dioxus::prelude::*;

/// Get the shared API client. Panics outside an [`ApiProvider`].
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

/// Provider component that owns the one [`ApiClient`] used by every list.
/// Wrap your app with this component before rendering any list.
#[component]
pub fn ApiProvider(
    /// Overrides the base URL resolved from the environment.
    #[props(default)]
    base_url: Option<String>,
    children: Element,
) -> Element {
    use_context_provider(move || {
        let config = base_url.map(ApiConfig::new).unwrap_or_else(ApiConfig::from_env);
        tracing::info!(base_url = %config.base_url(), "API client configured");
        ApiClient::new(&config)
    });

    rsx! {
        {children}
    }
}
