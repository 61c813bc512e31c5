use thiserror::Error;

/// Infrastructure errors that can occur during startup.
#[derive(Error, Debug)]
pub enum InfraError {
    #[error("Log file could not be created. Check LOG_FILE.")]
    LogFile(#[source] std::io::Error),

    #[error("HTTP client could not be built")]
    HttpClient(#[source] reqwest::Error),

    #[error("Token file {path} could not be updated")]
    TokenFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
