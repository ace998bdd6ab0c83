//! Server functions for contact submissions

use dioxus::prelude::*;

use super::form::FormState;

/// Forward a validated submission to the form backend
#[server]
pub async fn submit_contact(form: FormState) -> Result<(), ServerFnError> {
    let config =
        crate::config::get().ok_or_else(|| ServerFnError::new("Site configuration not loaded"))?;
    let client = super::ContactClient::new(&config.form_endpoint, config.form_timeout)
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    client.submit(&form).await.map_err(|e| {
        tracing::error!(error = %e, "Failed to forward contact submission");
        ServerFnError::new(e.to_string())
    })
}
