pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Markup parse error: {message}")]
    Markup { message: String },

    #[error("Invalid extract options: {message}")]
    InvalidOptions { message: String },
}
