use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server returned {status} for {url}")]
    Status { status: u16, url: String },

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("scratch file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF error: {0}")]
    Pdf(#[from] pdf_oxide::Error),

    #[error("extraction task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}
