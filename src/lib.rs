pub mod shared;
pub mod vocabulary;

pub use vocabulary::errors::VocabularyError;
pub use vocabulary::special::{Special, SPECIAL_HEADER};
pub use vocabulary::{TermID, Vocabulary};
