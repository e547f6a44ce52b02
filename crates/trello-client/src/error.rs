use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrelloError {
    #[error("TRELLO_KEY and TRELLO_TOKEN are required")]
    MissingCredentials,

    #[error("Trello returned {status} for {url}: {body}")]
    Api {
        status: u16,
        url: String,
        body: String,
    },

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, TrelloError>;
