//! Vector Inspection Tool
//!
//! This binary parses vector inputs given as JSON and prints the resulting
//! components, their validity and the outcome of an operation.
//!
//! Usage:
//!   cargo run --bin vecta -- '{"phi": 90, "degrees": true}'
//!   cargo run --bin vecta -- '[1, 2, 3]' --op cross --with '[0, 0, 1]'

use clap::{Parser, ValueEnum};
use vecta::parser::{self, VectorInput};
use vecta::{AngleUnit, ParserConfig, Vector};

/// Type alias for the error type used throughout this module
type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Operation applied to the parsed input
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Operation {
    /// Only print the parsed vector
    Show,
    Add,
    Sub,
    Dot,
    Cross,
    Angle,
    Distance,
    Lerp,
    Normalize,
    Reflect,
}

impl Operation {
    fn needs_operand(self) -> bool {
        !matches!(self, Operation::Show | Operation::Normalize)
    }
}

/// Vector inspection tool
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Parses vector inputs given as JSON and applies vector operations",
    long_about = None
)]
struct Args {
    /// Vector input as JSON: a number, an array or an object
    input: String,

    /// Operation to apply
    #[arg(short, long, value_enum, default_value_t = Operation::Show)]
    op: Operation,

    /// Second operand as JSON
    #[arg(short, long)]
    with: Option<String>,

    /// Interpolation factor for `lerp`
    #[arg(short, long, default_value_t = 1.0)]
    t: f64,

    /// Report angles in degrees
    #[arg(short, long)]
    degrees: bool,

    /// Keep raw trig results instead of rounding them
    #[arg(long)]
    no_rounding: bool,

    /// Print the result as a JSON array
    #[arg(long)]
    json: bool,
}

/// Prints a section header with a title and separator line
fn print_section_header(title: &str) {
    println!("\n{}:", title);
    println!("-------------------------------------------------------");
}

fn print_vector(name: &str, vector: &Vector, as_json: bool) -> Result<()> {
    if as_json {
        println!("{}: {}", name, serde_json::to_string(vector)?);
    } else {
        println!("{}: {} (valid: {})", name, vector, vector.valid());
    }
    Ok(())
}

fn parse_argument(json: &str, parser: &parser::Parser) -> Result<Vector> {
    let input = VectorInput::from_json_str(json)?;
    let result = parser.parse_input(&input);
    println!("Parsed {} as {:?}", json, result.variant);
    Ok(Vector::from_parse(result))
}

fn run(args: &Args) -> Result<()> {
    let precision = if args.no_rounding {
        None
    } else {
        ParserConfig::default().trig_precision
    };
    let parser = parser::Parser::new(ParserConfig::default().with_trig_precision(precision));
    let unit = AngleUnit::from_degrees_flag(args.degrees);

    print_section_header("Input");
    let first = parse_argument(&args.input, &parser)?;
    print_vector("Vector", &first, args.json)?;
    println!("Magnitude: {}", first.magnitude());
    println!("Phi: {}", first.get_phi(unit));
    println!("Theta: {}", first.get_theta(unit));

    if args.op == Operation::Show {
        return Ok(());
    }

    let second = match (&args.with, args.op.needs_operand()) {
        (Some(json), _) => parse_argument(json, &parser)?,
        (None, true) => return Err(format!("--with is required for {:?}", args.op).into()),
        (None, false) => Vector::zero(),
    };

    print_section_header(&format!("{:?}", args.op));
    match args.op {
        Operation::Show => {}
        Operation::Add => print_vector("Result", &first.add(second), args.json)?,
        Operation::Sub => print_vector("Result", &first.sub(second), args.json)?,
        Operation::Cross => print_vector("Result", &first.cross(second), args.json)?,
        Operation::Lerp => print_vector("Result", &first.lerp(second, args.t), args.json)?,
        Operation::Normalize => print_vector("Result", &first.normalize(), args.json)?,
        Operation::Reflect => print_vector("Result", &first.reflect(second), args.json)?,
        Operation::Dot => println!("Result: {}", first.dot(second)),
        Operation::Distance => println!("Result: {}", first.distance(second)),
        Operation::Angle => println!("Result: {}", first.angle(second, true, unit)),
    }

    Ok(())
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
