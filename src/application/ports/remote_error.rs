/// Uniform failure of a call to a remote collaborator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RemoteError {
    /// The collaborator answered, but with an error status or an unusable body.
    #[error("{service} responded with status {status}: {message}")]
    Remote {
        service: &'static str,
        status: u16,
        message: String,
    },
    /// No answer within the timeout, or the collaborator could not be reached.
    #[error("{service} unreachable: {reason}")]
    Unreachable {
        service: &'static str,
        reason: String,
    },
    /// The call could not be built from its input or configuration.
    #[error("invalid request to {service}: {reason}")]
    InvalidRequest {
        service: &'static str,
        reason: String,
    },
}

impl RemoteError {
    pub fn service(&self) -> &'static str {
        match self {
            RemoteError::Remote { service, .. }
            | RemoteError::Unreachable { service, .. }
            | RemoteError::InvalidRequest { service, .. } => service,
        }
    }
}
