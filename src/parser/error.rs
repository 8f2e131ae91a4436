use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("input is not valid UTF-8 text: {0}")]
    Decode(#[from] std::str::Utf8Error),
}
