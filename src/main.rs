use atomsel::cli::{self, CheckOptions, CheckResult, CliError};
use clap::Parser as ClapParser;
use std::io::{self, Read};

#[derive(ClapParser)]
#[command(name = "atomsel")]
#[command(about = "Atomsel - an atom selection language for molecular structures")]
#[command(version)]
struct Cli {
    /// The selection to compile
    selection: String,

    /// JSON frame input (reads from stdin if not provided)
    #[arg(short, long)]
    input: Option<String>,

    /// Pretty-print the output
    #[arg(short, long)]
    pretty: bool,

    /// Only validate syntax, don't evaluate
    #[arg(long)]
    syntax_only: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let input = match cli.input {
        Some(s) => Some(s),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(CliError::Io)?;
            Some(buffer)
        }
        None => None,
    };

    let options = CheckOptions {
        selection: cli.selection,
        input,
        pretty: cli.pretty,
        syntax_only: cli.syntax_only,
    };

    match cli::execute_check(&options)? {
        CheckResult::SyntaxValid => println!("Syntax is valid"),
        CheckResult::Success(output) => {
            let json = if options.pretty {
                serde_json::to_string_pretty(&output)
            } else {
                serde_json::to_string(&output)
            }
            .map_err(CliError::Json)?;
            println!("{}", json);
        }
    }
    Ok(())
}
