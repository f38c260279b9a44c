use std::process::ExitCode;

use booltable::{parse, table::check_variable_limit, Error, TruthTable};
use clap::{Parser, ValueEnum};
use colored::Colorize;

/// Prints the truth table of propositional formulas.
///
/// Formulas use single-letter variables, the constants 0 and 1, prefix
/// negation `-` and the connectives `*` (and), `+` (or) and `=>` (implies).
/// Connectives have no precedence: `1+a*b` is read as `(1+a)*b`.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    #[arg(required = true)]
    formulas: Vec<String>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = Format::Plain)]
    format: Format,

    /// Refuse formulas with more variables than this.
    #[arg(long, default_value_t = 16)]
    max_variables: usize,

    /// Print the parsed formula as a tree before its table.
    #[arg(long)]
    tree: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum, strum::Display)]
#[strum(serialize_all = "lowercase")]
enum Format {
    Plain,
    Markdown,
    Html,
}

fn run(formula: &str, args: &Args) -> Result<(), Error> {
    let formula = parse(formula)?;
    check_variable_limit(&formula, args.max_variables)?;

    if args.tree {
        println!("{}", formula.get_tree());
    }

    let table = TruthTable::new(&formula)?;
    log::debug!("Rendering {} rows as {}", table.rows.len(), args.format);

    match args.format {
        Format::Plain => {
            print!("{}", plain(&table));
            println!("{}", table.get_attributes().to_string().dimmed());
        }
        Format::Markdown => print!("{}", booltable::render::markdown(&table)),
        Format::Html => println!("{}", booltable::render::html(&table)),
    }

    Ok(())
}

fn plain(table: &TruthTable) -> String {
    let widths = table
        .header
        .iter()
        .map(|label| label.chars().count())
        .collect::<Vec<_>>();

    let mut output = table
        .header
        .iter()
        .map(|label| label.bold().to_string())
        .collect::<Vec<_>>()
        .join("  ");
    output.push('\n');

    for row in &table.rows {
        let cells = row
            .iter()
            .zip(&widths)
            .map(|(&value, &width)| {
                if value {
                    format!("{:^width$}", 1).green().to_string()
                } else {
                    format!("{:^width$}", 0).red().to_string()
                }
            })
            .collect::<Vec<_>>();

        output.push_str(&cells.join("  "));
        output.push('\n');
    }

    output
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    let mut status = ExitCode::SUCCESS;

    for (i, formula) in args.formulas.iter().enumerate() {
        if i > 0 {
            println!();
        }

        if let Err(e) = run(formula, &args) {
            eprintln!("{} {}: {e}", "error:".red().bold(), formula);
            status = ExitCode::FAILURE;
        }
    }

    status
}
