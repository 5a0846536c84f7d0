use reqwest::Response;
use serde::de::DeserializeOwned;

use crate::application::ports::RemoteError;

/// Maps a failure to send a request (or to receive its answer) onto the taxonomy.
pub fn classify_send_error(service: &'static str, err: reqwest::Error) -> RemoteError {
    if err.is_builder() {
        RemoteError::InvalidRequest {
            service,
            reason: err.to_string(),
        }
    } else if let Some(status) = err.status() {
        RemoteError::Remote {
            service,
            status: status.as_u16(),
            message: err.to_string(),
        }
    } else {
        let reason = if err.is_timeout() {
            format!("timed out: {}", err)
        } else {
            err.to_string()
        };
        RemoteError::Unreachable { service, reason }
    }
}

/// Fails with [`RemoteError::Remote`] unless the status is 2xx.
pub async fn ensure_success(
    service: &'static str,
    response: Response,
) -> Result<Response, RemoteError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "unknown error".to_string());
    tracing::warn!(
        service,
        status = status.as_u16(),
        body = %body,
        "Collaborator returned error status"
    );

    Err(RemoteError::Remote {
        service,
        status: status.as_u16(),
        message: body,
    })
}

/// Checks the status, then decodes a JSON body. An undecodable 2xx body is reported as
/// a remote error carrying that status.
pub async fn read_json<T: DeserializeOwned>(
    service: &'static str,
    response: Response,
) -> Result<T, RemoteError> {
    let response = ensure_success(service, response).await?;
    let status = response.status();

    response.json::<T>().await.map_err(|e| {
        let e = e.without_url();
        if e.is_timeout() {
            classify_send_error(service, e)
        } else {
            RemoteError::Remote {
                service,
                status: status.as_u16(),
                message: format!("malformed response body: {}", e),
            }
        }
    })
}
