//! This client fetches the source iCalendar feed.

use log::debug;
use reqwest::Response;

use crate::error::FetchError;

/// Get the iCalendar text served at `url`.
///
/// There is no timeout and no retry, a stalled server stalls the whole run.
pub async fn get(url: &str) -> Result<String, FetchError> {
    let response = get_response(url).await?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status,
        });
    }
    let body = response
        .bytes()
        .await
        .map_err(|source| FetchError::Request {
            url: url.to_string(),
            source,
        })?;
    debug!("Received {} bytes from {url}", body.len());
    String::from_utf8(body.to_vec()).map_err(|source| FetchError::Decode {
        url: url.to_string(),
        source,
    })
}

/// Send the GET request to the source server.
async fn get_response(url: &str) -> Result<Response, FetchError> {
    debug!("Sending GET request to {url}");
    let client = reqwest::Client::new();
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| FetchError::Request {
            url: url.to_string(),
            source,
        })?;
    debug!("{url} responded with status {}", response.status());
    Ok(response)
}
