use miette::{Diagnostic, ErrReport};
use thiserror::Error;

#[derive(Error, Diagnostic, Debug, Clone)]
pub enum VocabularyError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    InvalidArgument(#[from] EmptyTerm),
    #[error(transparent)]
    #[diagnostic(transparent)]
    UnsupportedOperation(#[from] NewSpecialTerm),
}

impl VocabularyError {
    pub fn into_err_report(self) -> ErrReport {
        self.into()
    }
}

#[derive(Error, Debug, Diagnostic, Clone)]
#[error("empty-term")]
#[diagnostic(
    code(vocabulary::empty_term),
    help("[{}] Cannot {} an empty string", self.dbg_line, self.operation),
)]
pub struct EmptyTerm {
    pub dbg_line: String,
    pub operation: &'static str,
}

#[derive(Error, Debug, Diagnostic, Clone)]
#[error("new-special-term")]
#[diagnostic(
    code(vocabulary::new_special_term),
    help(
        "[{}] Cannot vivify a new special term {:?}, special terms are: unk, start, newline, indent, dedent",
        self.dbg_line, self.name
    ),
)]
pub struct NewSpecialTerm {
    pub dbg_line: String,
    pub name: String,
}
