use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("history store io: {0}")]
    HistoryIo(#[from] std::io::Error),
    #[error("history store format: {0}")]
    HistoryFormat(#[from] serde_json::Error),
    #[error("search url: {0}")]
    SearchUrl(#[from] url::ParseError),
}
