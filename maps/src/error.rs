use thiserror::Error;

pub type Result<T> = std::result::Result<T, DictionaryError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DictionaryError {
    #[error("could not find the word you were looking for")]
    NotFound,

    #[error("cannot add word because it already exists")]
    AlreadyExists,

    #[error("cannot update word because it does not exist")]
    DoesNotExist,
}
