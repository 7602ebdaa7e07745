//! A word -> definition dictionary with explicit error kinds.
//!
//! ```
//! use maps::{Dictionary, DictionaryError};
//!
//! let mut dictionary = Dictionary::from_iter([("test", "this is just a test")]);
//! assert_eq!(dictionary.search("test"), Ok("this is just a test"));
//! assert_eq!(dictionary.add("test", "x"), Err(DictionaryError::AlreadyExists));
//!
//! dictionary.delete("test");
//! assert_eq!(dictionary.search("test"), Err(DictionaryError::NotFound));
//! ```

mod dictionary;
mod error;

pub use dictionary::Dictionary;
pub use error::{DictionaryError, Result};
