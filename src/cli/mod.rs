use std::process::ExitCode;

use clap::{arg, Command};

mod run;

use run::{intern_file, lookup_terms};

pub fn cli() -> Command {
    Command::new("vocab")
        .about("Maps words of a text file to unique integers")
        .version("0.1.0")
        .subcommand_required(true)
        .subcommand(
            Command::new("intern")
                .arg(arg!(<FILE_PATH> "File to intern"))
                .arg(arg!(-d --debug "Print debug information"))
                .arg_required_else_help(true)
                .about("Print the id stream of a file"),
        )
        .subcommand(
            Command::new("lookup")
                .arg(arg!(<FILE_PATH> "File to build the vocabulary from"))
                .arg(arg!(<TERM> ... "Terms to look up, @name refers to a special term, @@ escapes a literal @"))
                .arg(arg!(-d --debug "Print debug information"))
                .arg_required_else_help(true)
                .about("Look up terms in the vocabulary of a file"),
        )
}

pub fn parse_cli() -> ExitCode {
    let matches = cli().get_matches();

    let result = match matches.subcommand() {
        Some(("intern", args)) => {
            let file_path = args.get_one::<String>("FILE_PATH").expect("Required");
            let debug = args.get_flag("debug");
            intern_file(file_path, debug).map(|(vocabulary, ids)| {
                let ids: Vec<String> = ids.iter().map(ToString::to_string).collect();
                println!("{}", ids.join(" "));
                println!("Vocabulary size: {}", vocabulary.len());
            })
        }
        Some(("lookup", args)) => {
            let file_path = args.get_one::<String>("FILE_PATH").expect("Required");
            let terms: Vec<&str> = args
                .get_many::<String>("TERM")
                .expect("Required")
                .map(String::as_str)
                .collect();
            let debug = args.get_flag("debug");
            lookup_terms(file_path, &terms, debug).map(|found| {
                for (term, id) in terms.iter().zip(found) {
                    match id {
                        Some(id) => println!("{term}\t{id}"),
                        None => println!("{term}\tabsent"),
                    }
                }
            })
        }
        _ => return ExitCode::FAILURE,
    };

    if let Err(error) = result {
        eprintln!("Error: {error:?}");
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
