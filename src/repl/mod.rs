// Interactive read-eval-print loop. Lines shaped like "<value> <unit> to
// <unit>" are unit conversions; everything else is evaluated as an
// arithmetic expression.

use crate::calc;
use crate::config::Config;
use crate::units;
use std::io::{self, BufRead, Write};

pub struct Repl {
    config: Config,
}

impl Repl {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn run(&self) -> io::Result<()> {
        let stdin = io::stdin();
        let mut stdin = stdin.lock();
        let mut stdout = io::stdout();

        println!("Terminal Calculator");
        println!("Type 'help' for commands or 'quit' to exit");
        println!("{}", "-".repeat(40));

        let mut input = String::new();
        loop {
            write!(stdout, "{}", self.config.repl.prompt)?;
            stdout.flush()?;

            input.clear();
            if stdin.read_line(&mut input)? == 0 {
                // EOF
                println!("\nGoodbye!");
                break;
            }

            // The whole line is lowercased up front; unit symbols and the
            // "to" keyword are case-insensitive anyway.
            let line = input.trim().to_lowercase();
            if line.is_empty() {
                continue;
            }

            match line.as_str() {
                "quit" | "exit" => {
                    println!("Goodbye!");
                    break;
                }
                "help" => print_help(),
                "units" => print_units(),
                _ => println!("{}", self.eval_line(&line)),
            }
        }

        Ok(())
    }

    /// Evaluate one non-command input line and render the reply
    pub fn eval_line(&self, line: &str) -> String {
        let precision = self.config.display.precision;

        if units::looks_like_conversion(line) || line.contains(" to ") {
            match self.convert_line(line) {
                Ok(reply) => reply,
                Err(e) => format!("Conversion error: {}", e),
            }
        } else {
            match calc::evaluate(line) {
                Ok(result) => format!("= {}", format_number(result, precision)),
                Err(e) => format!("Error: {}", e),
            }
        }
    }

    fn convert_line(&self, line: &str) -> Result<String, units::UnitError> {
        let request = units::parse_conversion(line)?;
        let result = units::convert(request.value, &request.from_unit, &request.to_unit)?;
        Ok(format!(
            "= {} {}",
            format_number(result, self.config.display.precision),
            request.to_unit.to_lowercase()
        ))
    }
}

fn print_help() {
    println!(
        "
Terminal Calculator - Help

Supported operations:
    + : Addition
    - : Subtraction
    * : Multiplication
    / : Division
    ( ) : Parentheses for grouping

Examples:
    2 + 3
    (2 + 3) * 4
    3.14 * 2

Conversions:
    <value> <unit> to <unit>
    100 ft to m
    -40 c to f

Commands:
    help : Show this help message
    units : List supported units
    quit : Exit the calculator
    exit : Exit the calculator
"
    );
}

fn print_units() {
    for entry in units::supported_units() {
        println!("{}: {}", entry.category, entry.units.join(", "));
    }
}

/// Render a result, trimming to the configured number of decimal places.
/// Whole floats print without a trailing ".0" either way.
pub fn format_number(value: f64, precision: Option<usize>) -> String {
    match precision {
        Some(p) => {
            let rendered = format!("{:.*}", p, value);
            if rendered.contains('.') {
                let trimmed = rendered.trim_end_matches('0').trim_end_matches('.');
                trimmed.to_string()
            } else {
                rendered
            }
        }
        None => format!("{}", value),
    }
}
