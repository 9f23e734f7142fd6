//! HTTP Client builder module

use reqwest::Client;

/// Build the HTTP client shared by the token exchange and the API call.
///
/// No client-level timeout is set: the one outbound call blocks until the
/// remote endpoint responds or the caller abandons it.
pub fn build_client() -> anyhow::Result<Client> {
    Ok(Client::builder().use_rustls_tls().build()?)
}
