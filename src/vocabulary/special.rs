use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

use super::TermID;

/// First character of every special term reference, e.g. `"\x17newline"`.
pub const SPECIAL_HEADER: char = '\x17';

/// Fixed identifiers living outside of the ordinary (positive) id space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Special {
    Unk = 0,
    Start = -1,
    Newline = -2,
    Indent = -3,
    Dedent = -4,
}

static SPECIALS_BY_NAME: Lazy<FxHashMap<&'static str, Special>> = Lazy::new(|| {
    Special::ALL
        .iter()
        .map(|special| (special.name(), *special))
        .collect()
});

impl Special {
    pub const ALL: [Special; 5] = [
        Special::Unk,
        Special::Start,
        Special::Newline,
        Special::Indent,
        Special::Dedent,
    ];

    pub fn id(self) -> TermID {
        self as TermID
    }

    pub fn name(self) -> &'static str {
        match self {
            Special::Unk => "unk",
            Special::Start => "start",
            Special::Newline => "newline",
            Special::Indent => "indent",
            Special::Dedent => "dedent",
        }
    }

    pub fn from_name(name: &str) -> Option<Special> {
        SPECIALS_BY_NAME.get(name).copied()
    }

    /// Term that refers to this special, suitable for `lookup` and `vivify`.
    pub fn term(self) -> String {
        format!("{SPECIAL_HEADER}{}", self.name())
    }
}

/// Name part of a special reference, `None` for ordinary terms.
pub(crate) fn special_name(term: &str) -> Option<&str> {
    term.strip_prefix(SPECIAL_HEADER)
}
