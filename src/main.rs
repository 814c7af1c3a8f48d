use clap::{Parser, Subcommand};
use tally::calc;
use tally::config::Config;
use tally::repl::{format_number, Repl};
use tally::units;

#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "Terminal calculator and unit converter", long_about = None)]
struct Cli {
    /// Configuration file (default: tally.toml if present)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate an arithmetic expression
    Eval {
        /// Expression, e.g. "(2 + 3) * 4"
        expression: String,
    },

    /// Convert a value between units
    Convert {
        /// Conversion expression, e.g. "100 ft to m"
        expression: String,
    },

    /// List supported units by category
    Units {
        /// Emit the listing as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    match cli.command {
        None => {
            let repl = Repl::new(config);
            if let Err(e) = repl.run() {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        Some(Commands::Eval { expression }) => match eval_expression(&expression, &config) {
            Ok(_) => {}
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        Some(Commands::Convert { expression }) => match convert_expression(&expression, &config) {
            Ok(_) => {}
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        Some(Commands::Units { json }) => match list_units(json) {
            Ok(_) => {}
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
    }
}

fn load_config(path: Option<&str>) -> Result<Config, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Config::load_from_file(path),
        None => {
            let default_path = std::path::Path::new("tally.toml");
            if default_path.exists() {
                Config::load_from_file(default_path)
            } else {
                Ok(Config::empty())
            }
        }
    }
}

fn eval_expression(expression: &str, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let result = calc::evaluate(expression)?;
    println!("= {}", format_number(result, config.display.precision));
    Ok(())
}

fn convert_expression(expression: &str, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let request = units::parse_conversion(expression)?;
    let result = units::convert(request.value, &request.from_unit, &request.to_unit)?;
    println!(
        "= {} {}",
        format_number(result, config.display.precision),
        request.to_unit.to_lowercase()
    );
    Ok(())
}

fn list_units(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let listing = units::supported_units();

    if json {
        println!("{}", serde_json::to_string_pretty(&listing)?);
    } else {
        for entry in &listing {
            println!("{}: {}", entry.category, entry.units.join(", "));
        }
    }

    Ok(())
}
