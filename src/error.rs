use thiserror::Error;

/// Configuration-related errors. The only fatal class in the system:
/// everything else is retried on the next poll cycle.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required environment variables: {}", .names.join(", "))]
    MissingEnv { names: Vec<&'static str> },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Errors from the homework status API.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("endpoint {endpoint} is unreachable: {source}")]
    EndpointUnreachable {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("endpoint {endpoint} answered {status} {reason}")]
    UnexpectedStatusCode {
        endpoint: String,
        status: u16,
        reason: String,
    },

    #[error("failed to decode response body: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Errors from validating the shape of an API payload.
#[derive(Error, Debug)]
pub enum ResponseError {
    #[error("malformed response: {reason}")]
    MalformedResponse { reason: String },

    #[error("response has no \"{field}\" key")]
    MissingField { field: &'static str },
}

/// Errors from interpreting a single submission record.
#[derive(Error, Debug)]
pub enum StatusError {
    #[error("submission record has no \"{field}\" field")]
    IncompleteRecord { field: &'static str },

    #[error("unknown review status {status:?} for homework {name:?}")]
    UnknownStatus { name: String, status: String },
}

/// Errors from the notification transport.
///
/// Expected API-level rejections are not errors at all: the notifier reports
/// them as an unsuccessful send instead (see [`crate::port::Notifier`]).
#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("failed to deliver notification: {0}")]
    Transport(#[source] teloxide::RequestError),

    #[error("notification rejected by the transport API")]
    Rejected,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Response(#[from] ResponseError),

    #[error(transparent)]
    Status(#[from] StatusError),

    #[error(transparent)]
    Notify(#[from] NotifyError),
}

pub type Result<T> = std::result::Result<T, Error>;
