use atomsel::cli::{self, CheckOptions, CheckResult, CliError};
use clap::{Parser as ClapParser, Subcommand};
use std::io::{self, Read};

#[derive(ClapParser)]
#[command(name = "atomsel")]
#[command(about = "atomsel - Select atoms in simulation frames with a small query language")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a selection and evaluate it against a JSON frame
    Check {
        /// The selection to evaluate
        selection: String,

        /// JSON frame (reads from stdin if not provided)
        #[arg(short, long)]
        input: Option<String>,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,

        /// Only validate syntax, don't evaluate
        #[arg(long)]
        syntax_only: bool,

        /// Print the compiled selection tree
        #[arg(long)]
        tree: bool,
    },

    /// List documentation categories
    Docs,

    /// Show documentation for a specific category
    Doc {
        /// Category name (use 'atomsel docs' to list categories)
        category: String,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check {
            selection,
            input,
            pretty,
            syntax_only,
            tree,
        } => run_check(selection, input, pretty, syntax_only, tree),
        Commands::Docs => {
            print!("{}", cli::get_docs_overview());
            Ok(())
        }
        Commands::Doc { category } => cli::get_doc_category(&category).map(|content| {
            print!("{}", content);
        }),
    };

    if let Err(e) = result {
        log::debug!("command failed: {:?}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run_check(
    selection: String,
    input: Option<String>,
    pretty: bool,
    syntax_only: bool,
    tree: bool,
) -> Result<(), CliError> {
    let needs_input = !syntax_only && !tree;
    let input = match input {
        Some(s) => Some(s),
        None if needs_input && !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Some(buffer)
        }
        None => None,
    };

    let options = CheckOptions {
        selection,
        input,
        pretty,
        syntax_only,
        tree,
    };

    match cli::execute_check(&options)? {
        CheckResult::SyntaxValid => println!("Syntax is valid"),
        CheckResult::Tree(text) => println!("{}", text),
        CheckResult::Success(output) => {
            let json = if pretty {
                serde_json::to_string_pretty(&output)
            } else {
                serde_json::to_string(&output)
            }?;
            println!("{}", json);
        }
    }
    Ok(())
}
