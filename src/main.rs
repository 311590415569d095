use clap::{Parser, ValueEnum};
use log::LevelFilter;
use pasc::{
    ast::Node, frontend::tokenize, frontend::ParseMode, read, semantic::AstPrinter, semantic::NodeCounter,
};
use pasc::errors::{PascalError, PascalResult};
use std::{path::PathBuf, time::Instant};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Pascal front-end that parses programs into an abstract syntax tree",
    long_about = "Pascal front-end that parses programs into an abstract syntax tree.\n\
                 It tokenizes the source, runs the recursive-descent parser and\n\
                 optionally prints the tokens or the resulting tree.\n\
                 \n\
                 Example usage:\n\
                 pasc input.pas                      # Parse a whole program\n\
                 pasc input.pas --show-ast           # Display abstract syntax tree\n\
                 pasc -c '3 + 4 * 2' --mode loose    # Parse an inline expression\n\
                 pasc input.pas --tokens             # Dump the token stream\n\
                 pasc input.pas --timing             # Show phase timing"
)]
struct Cli {
    // The path to the file to parse
    #[arg(required_unless_present = "source")]
    path: Option<PathBuf>,

    // Inline source text instead of a file
    #[arg(short = 'c', long, conflicts_with = "path")]
    source: Option<String>,

    // How much input the parse must account for
    #[arg(long, value_enum, default_value_t = Mode::WholeProgram)]
    mode: Mode,

    // Show AST after parsing
    #[arg(long)]
    show_ast: bool,

    // Print the token stream before parsing
    #[arg(long)]
    tokens: bool,

    // Show parsing timing
    #[arg(short, long)]
    timing: bool,

    // Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    Loose,
    WholeProgram,
}

impl From<Mode> for ParseMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Loose => ParseMode::Loose,
            Mode::WholeProgram => ParseMode::WholeProgram,
        }
    }
}

// Parse statistics for performance analysis
#[derive(Debug, Default)]
struct ParseStats {
    lexer_time: f64,
    parser_time: f64,
    total_time: f64,
    token_count: usize,
    ast_size: usize,
}

// Print error message and exit with error code
fn fatal(msg: &str) -> ! {
    eprintln!("Error: {}", msg);
    std::process::exit(1);
}

fn init_logging(verbose: bool) {
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn load_source(args: &Cli) -> PascalResult<String> {
    match (&args.source, &args.path) {
        (Some(source), _) => Ok(source.clone()),
        (None, Some(path)) => {
            if !path.exists() {
                return Err(PascalError::FileReadError(format!(
                    "Input file does not exist: {}",
                    path.display()
                )));
            }
            read(path)
        }
        (None, None) => Err(PascalError::FileReadError("No input given".to_string())),
    }
}

// Perform lexical analysis phase; the parser re-lexes lazily, this pass only reports
fn lexical_analysis(source: &str, args: &Cli, stats: &mut ParseStats) {
    let lexer_start = Instant::now();
    let tokens = tokenize(source);
    stats.lexer_time = lexer_start.elapsed().as_secs_f64();
    stats.token_count = tokens.len();

    if args.tokens {
        println!("\n Tokens:");
        for token in &tokens {
            println!("  {:>4}  {:<16} {}", token.line, format!("{:?}", token.kind), token.raw);
        }
    }

    if args.verbose {
        println!("Lexical analysis completed in {:.3}s", stats.lexer_time);
        println!("  Generated {} tokens", stats.token_count);
    }
}

// Perform parsing phase
fn parsing_phase(source: &str, mode: ParseMode, stats: &mut ParseStats, verbose: bool) -> PascalResult<Node> {
    let parser_start = Instant::now();
    let ast = pasc::parse_source(source, mode)?;
    stats.parser_time = parser_start.elapsed().as_secs_f64();
    stats.ast_size = ast.accept(&mut NodeCounter::new()).max(0) as usize;

    if verbose {
        println!("Parsing completed in {:.3}s", stats.parser_time);
    }

    Ok(ast)
}

fn run(args: &Cli) -> PascalResult<ParseStats> {
    let start_time = Instant::now();
    let mut stats = ParseStats::default();

    let source = load_source(args)?;
    if args.verbose {
        println!("Read {} bytes of source", source.len());
    }

    lexical_analysis(&source, args, &mut stats);
    let ast = parsing_phase(&source, args.mode.into(), &mut stats, args.verbose)?;

    if args.show_ast {
        println!("\n Abstract Syntax Tree:");
        println!("{}", AstPrinter::render(&ast));
    }

    stats.total_time = start_time.elapsed().as_secs_f64();
    Ok(stats)
}

// Print detailed parse statistics
fn print_stats(stats: &ParseStats) {
    println!("\n Parse Statistics:");
    println!("  Lexical Analysis   {:>8.3}s", stats.lexer_time);
    println!("  Parsing            {:>8.3}s", stats.parser_time);
    println!("  Total Time         {:>8.3}s", stats.total_time);
    println!("  Tokens             {:>8}", stats.token_count);
    println!("  AST Nodes          {:>8}", stats.ast_size);
}

fn main() {
    let args = Cli::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(stats) => {
            if args.timing {
                print_stats(&stats);
            }
            if args.verbose {
                println!("Parse successful!");
            }
        }
        Err(e) => fatal(&format!("{} ({})", e, e.get_error_name())),
    }
}
