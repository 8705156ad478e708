use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid backend url '{0}'")]
    InvalidUrl(String),

    #[error("credential is not a valid header value")]
    InvalidCredential,

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("backend returned {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("count response carried no usable Content-Range header")]
    BadCountHeader,

    #[error("refusing to issue an update without any filter")]
    UnfilteredUpdate,
}

pub type ClientResult<T> = Result<T, ClientError>;
