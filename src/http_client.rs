use std::time::Duration;

use anyhow::{Context, Result};
use once_cell::sync::OnceCell;
use reqwest::blocking::Client;

static CLIENT: OnceCell<Client> = OnceCell::new();

/// Process-wide client. The first caller's timeout sticks; the cookie store
/// carries the backend session on every request.
pub fn http_client(timeout: Duration) -> Result<&'static Client> {
    CLIENT.get_or_try_init(|| {
        Client::builder()
            .timeout(timeout)
            .cookie_store(true)
            .build()
            .context("failed to build http client")
    })
}
