use miette::{bail, IntoDiagnostic, Result, WrapErr};
use vocab::{Special, TermID, Vocabulary, VocabularyError, SPECIAL_HEADER};

pub fn intern_file(file_path: &str, debug: bool) -> Result<(Vocabulary, Vec<TermID>)> {
    let text = std::fs::read_to_string(file_path)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to read {file_path}"))?;
    intern(&text, debug)
}

pub fn lookup_terms(file_path: &str, terms: &[&str], debug: bool) -> Result<Vec<Option<TermID>>> {
    let (vocabulary, _) = intern_file(file_path, debug)?;
    lookup(&vocabulary, terms)
}

/// Vivifies every word of `text`, line by line.
///
/// The stream opens with `start`, every non-blank line ends with `newline`
/// and changes of leading whitespace width produce `indent`/`dedent`.
pub fn intern(text: &str, debug: bool) -> Result<(Vocabulary, Vec<TermID>)> {
    let mut vocabulary = Vocabulary::new();
    let mut ids = vec![special(&mut vocabulary, Special::Start)?];
    let mut indents = vec![0];

    for line in text.lines() {
        let words = line.trim_start();
        if words.is_empty() {
            continue;
        }

        let width = line.len() - words.len();
        let current = indents.last().copied().unwrap_or(0);
        if width > current {
            indents.push(width);
            ids.push(special(&mut vocabulary, Special::Indent)?);
        } else {
            while width < indents.last().copied().unwrap_or(0) {
                indents.pop();
                ids.push(special(&mut vocabulary, Special::Dedent)?);
            }
            if width != indents.last().copied().unwrap_or(0) {
                bail!("Inconsistent indentation: {line:?}");
            }
        }

        for word in words.split_whitespace() {
            let id = vocabulary
                .vivify(word)
                .map_err(VocabularyError::into_err_report)?;
            if debug {
                println!("{word:?} -> {id}");
            }
            ids.push(id);
        }

        ids.push(special(&mut vocabulary, Special::Newline)?);
    }

    while indents.len() > 1 {
        indents.pop();
        ids.push(special(&mut vocabulary, Special::Dedent)?);
    }

    if debug {
        println!("Tokens:\n{ids:?}");
    }

    Ok((vocabulary, ids))
}

/// Looks up `terms`, where `@name` stands for the special term `name` and
/// `@@` for a literal `@`.
pub fn lookup(vocabulary: &Vocabulary, terms: &[&str]) -> Result<Vec<Option<TermID>>> {
    terms
        .iter()
        .map(|term| {
            vocabulary
                .lookup(&unescape_term(term))
                .map_err(VocabularyError::into_err_report)
        })
        .collect()
}

fn unescape_term(term: &str) -> String {
    if let Some(rest) = term.strip_prefix("@@") {
        format!("@{rest}")
    } else if let Some(name) = term.strip_prefix('@') {
        format!("{SPECIAL_HEADER}{name}")
    } else {
        term.to_string()
    }
}

fn special(vocabulary: &mut Vocabulary, special: Special) -> Result<TermID> {
    vocabulary
        .vivify(&special.term())
        .map_err(VocabularyError::into_err_report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const START: TermID = Special::Start as TermID;
    const NEWLINE: TermID = Special::Newline as TermID;
    const INDENT: TermID = Special::Indent as TermID;
    const DEDENT: TermID = Special::Dedent as TermID;

    #[test]
    fn intern_words() {
        let (vocabulary, ids) = intern("dog cat\ncat dog bird\n", false).unwrap();
        assert_eq!(ids, vec![START, 1, 2, NEWLINE, 2, 1, 3, NEWLINE]);
        assert_eq!(vocabulary.len(), 3);
    }

    #[test]
    fn intern_indentation() {
        let code = "if x\n    y\n        z\n\nw\n";
        let (vocabulary, ids) = intern(code, false).unwrap();
        assert_eq!(
            ids,
            vec![
                START, 1, 2, NEWLINE, INDENT, 3, NEWLINE, INDENT, 4, NEWLINE, DEDENT, DEDENT, 5,
                NEWLINE
            ]
        );
        assert_eq!(vocabulary.len(), 5);
    }

    #[test]
    fn intern_trailing_dedents() {
        let (_, ids) = intern("a\n  b", false).unwrap();
        assert_eq!(ids, vec![START, 1, NEWLINE, INDENT, 2, NEWLINE, DEDENT]);
    }

    #[test]
    fn intern_inconsistent_indentation() {
        assert!(intern("a\n    b\n  c\n", false).is_err());
    }

    #[test]
    fn intern_unknown_special() {
        assert!(intern("a \x17bogus\n", false).is_err());
    }

    #[test]
    fn lookup_mixed_terms() {
        let (vocabulary, _) = intern("red green blue\n", false).unwrap();
        let found = lookup(&vocabulary, &["green", "gre", "@dedent", "@bogus"]).unwrap();
        assert_eq!(found, vec![Some(2), None, Some(DEDENT), None]);
    }

    #[test]
    fn lookup_escaped_at() {
        let (vocabulary, _) = intern("@home mail\n", false).unwrap();
        let found = lookup(&vocabulary, &["@@home", "@home", "@@", "mail"]).unwrap();
        assert_eq!(found, vec![Some(1), None, None, Some(2)]);
    }

    #[test]
    fn unescape_terms() {
        assert_eq!(unescape_term("word"), "word");
        assert_eq!(unescape_term("@start"), "\x17start");
        assert_eq!(unescape_term("@@start"), "@start");
        assert_eq!(unescape_term("@@"), "@");
        assert_eq!(unescape_term("@"), "\x17");
    }

    #[test]
    fn lookup_empty_term() {
        let vocabulary = Vocabulary::new();
        assert!(lookup(&vocabulary, &[""]).is_err());
    }
}
