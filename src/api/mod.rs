pub(crate) mod game;
pub(crate) mod player;
pub(crate) mod schedule;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::error::{EtlError, Result};

/// Fetch a URL and decode the response body as JSON.
///
/// One GET per call, no retry. A non-2xx status or a malformed body is
/// fatal to the pull in progress.
pub(crate) async fn get_json<T: DeserializeOwned>(
    client: &reqwest::Client,
    url: &str,
) -> Result<T> {
    debug!(url, "fetching endpoint");

    let response = client.get(url).send().await.map_err(|e| EtlError::Http {
        url: url.to_owned(),
        source: e,
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(EtlError::UnexpectedStatus {
            url: url.to_owned(),
            status,
        });
    }

    response.json().await.map_err(|e| EtlError::Decode {
        url: url.to_owned(),
        source: e,
    })
}

/// A localized string as the API ships it (`{"default": "..."}`).
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Localized {
    pub default: String,
}
