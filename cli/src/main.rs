use std::fs;

use clap::{Parser, Subcommand};

/// Command to work with template files
#[derive(Parser, Debug)]
#[command(name="blade", author, version, about, long_about = None, arg_required_else_help = true)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Produce a node tree for a template file
    Ast {
        /// Path to template file
        path: String,
    },
    /// Parse a template file and print the tree as JSON
    Parse {
        /// Path to template file
        path: String,
    },
    /// Check a template file for unterminated echo statements
    Check {
        /// Path to template file
        path: String,
    },
}

fn main() {
    let args = Args::parse();

    // arg_required_else_help means clap already exited when no subcommand was given
    let Some(command) = args.command else {
        return;
    };

    match command {
        Command::Ast { path } => {
            let contents = read(&path);
            let result = grammar::parse(&contents);

            println!("{:#?}", result.tree);
        }
        Command::Parse { path } => {
            let contents = read(&path);
            let result = grammar::parse(&contents);

            println!("{}", serde_json::to_string_pretty(&result.tree).unwrap());
        }
        Command::Check { path } => {
            let contents = read(&path);
            let result = grammar::parse(&contents);
            let diagnoses = diagnostics::get_diagnoses(&result.warnings, &contents);

            // Warnings are non-fatal, so `check` always exits 0
            println!("{}", serde_json::to_string_pretty(&diagnoses).unwrap());
        }
    }
}

fn read(path: &str) -> String {
    fs::read_to_string(path).expect("Should have been able to read the file")
}
