use thiserror::Error;

#[derive(Error, Debug)]
pub enum WpbotError {
    #[error("Bot error: {0}")]
    Bot(String),

    #[error("Handler error: {0}")]
    Handler(#[from] HandlerError),

    #[error("Config error: {0}")]
    Config(String),
}

#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("Unauthorized access")]
    Unauthorized,

    #[error("State error: {0}")]
    State(String),
}

pub type Result<T> = std::result::Result<T, WpbotError>;
