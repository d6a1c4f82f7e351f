use clap::Parser;
use lispint::ast::{Ast, ProgramId};
use lispint::errors::{ErrorKind, LispError, LispResult};
use lispint::frontend::{lexer::scan, parser::parse_program, Token};
use lispint::read;
use lispint::semantic::{Evaluator, TreePrinter, VariableStore};
use lispint::utils::config::cli::SOURCE_EXTENSION;
use std::io;
use std::{path::PathBuf, time::Instant};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Interpreter for a fully parenthesized Lisp-syntax imperative language",
    long_about = "Interpreter for a fully parenthesized Lisp-syntax imperative language.\n\
                 The program is scanned, parsed into a syntax tree and executed directly.\n\
                 PRINT writes to standard output and INPUT reads from standard input;\n\
                 all diagnostics go to standard error.\n\
                 \n\
                 Example usage:\n\
                 lispint program.lisp                  # Run a program\n\
                 lispint program.lisp --show-ast       # Display the parsed tree before running\n\
                 lispint program.lisp --print-tokens   # Display the token stream\n\
                 lispint program.lisp --verbose        # Report phases and final variables\n\
                 lispint program.lisp --timing         # Show phase timing"
)]
struct Cli {
    // The path to the program to run
    path: PathBuf,

    // Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    // Show timing of each phase
    #[arg(short, long)]
    timing: bool,

    // Show AST after parsing
    #[arg(long)]
    show_ast: bool,

    // Show the token stream after scanning
    #[arg(long)]
    print_tokens: bool,
}

// Run statistics for the --timing report
#[derive(Debug, Default)]
struct RunStats {
    lexer_time: f64,
    parser_time: f64,
    eval_time: f64,
    total_time: f64,
    token_count: usize,
    ast_size: usize,
    variable_count: usize,
}

// Print error message and exit with error code
fn fatal(err: &LispError) -> ! {
    let header = match err.kind() {
        ErrorKind::Lexical => "Lexical error",
        ErrorKind::Parse => "Error in parsing",
        ErrorKind::Conversion => "Conversion error",
        ErrorKind::Semantic => "Error in semantic analysis",
        ErrorKind::Io => "I/O error",
    };
    eprintln!("{}", header);
    eprintln!("{}", err);
    std::process::exit(1);
}

// Perform lexical analysis phase
fn lexical_analysis(source: &str, stats: &mut RunStats, verbose: bool) -> LispResult<Vec<Token>> {
    let lexer_start = Instant::now();
    let mut state = lispint::LineNumber::default();
    let tokens = scan(&mut state, source)?;
    stats.lexer_time = lexer_start.elapsed().as_secs_f64();
    stats.token_count = tokens.len();

    if verbose {
        eprintln!("Lexical analysis completed in {:.3}s", stats.lexer_time);
        eprintln!("  Generated {} tokens", stats.token_count);
    }

    Ok(tokens)
}

// Perform parsing phase
fn parsing_phase(tokens: &[Token], ast: &mut Ast, stats: &mut RunStats, verbose: bool) -> LispResult<ProgramId> {
    let parser_start = Instant::now();
    let program = parse_program(tokens, ast)?;
    stats.parser_time = parser_start.elapsed().as_secs_f64();
    stats.ast_size = ast.node_count();

    if verbose {
        eprintln!("Parsing completed in {:.3}s", stats.parser_time);
        eprintln!("  Allocated {} tree nodes", stats.ast_size);
    }

    Ok(program)
}

// Perform evaluation phase against the real console
fn evaluation_phase(
    ast: &Ast,
    program: ProgramId,
    store: &mut VariableStore,
    stats: &mut RunStats,
    verbose: bool,
) -> LispResult<()> {
    let eval_start = Instant::now();
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut evaluator = Evaluator::new(ast, store, stdin.lock(), stdout.lock())?;
    evaluator.run(program)?;
    stats.eval_time = eval_start.elapsed().as_secs_f64();

    if verbose {
        eprintln!("Evaluation completed in {:.3}s", stats.eval_time);
    }

    Ok(())
}

fn run(args: &Cli) -> LispResult<RunStats> {
    let start_time = Instant::now();
    let mut stats = RunStats::default();

    if args.verbose {
        eprintln!("lispint {}", lispint::VERSION);
        eprintln!("Running: {}", args.path.display());
    }

    let source = read(&args.path)?;
    if args.verbose {
        eprintln!("Read {} bytes from input file", source.len());
    }

    let tokens = lexical_analysis(&source, &mut stats, args.verbose)?;

    if args.print_tokens {
        eprintln!("\nTokens:");
        for (index, token) in tokens.iter().enumerate() {
            eprintln!("  {:>4}  {}", index + 1, token);
        }
    }

    // All tree nodes live in these arenas until the end of this function.
    let mut ast = Ast::new();
    let program = parsing_phase(&tokens, &mut ast, &mut stats, args.verbose)?;

    if args.show_ast {
        eprintln!("\nAbstract Syntax Tree:");
        eprintln!("{}", TreePrinter::new(&ast).render(program)?);
    }

    let mut store = VariableStore::new();
    evaluation_phase(&ast, program, &mut store, &mut stats, args.verbose)?;
    stats.variable_count = store.len();

    if args.verbose {
        eprintln!("\nVariables:");
        for symbol in store.iter() {
            eprintln!("  {} = {}", symbol.name, symbol.value);
        }
    }

    stats.total_time = start_time.elapsed().as_secs_f64();
    Ok(stats)
}

// Print detailed run statistics
fn print_stats(stats: &RunStats) {
    eprintln!("\nRun Statistics:");
    eprintln!("+---------------------+-----------+");
    eprintln!("| Phase               | Time (s)  |");
    eprintln!("+---------------------+-----------+");
    eprintln!("| Lexical Analysis    | {:>9.3} |", stats.lexer_time);
    eprintln!("| Parsing             | {:>9.3} |", stats.parser_time);
    eprintln!("| Evaluation          | {:>9.3} |", stats.eval_time);
    eprintln!("+---------------------+-----------+");
    eprintln!("| Total Time          | {:>9.3} |", stats.total_time);
    eprintln!("+---------------------+-----------+");

    eprintln!("\nCode Metrics:");
    eprintln!("  - Tokens:     {}", stats.token_count);
    eprintln!("  - AST Nodes:  {}", stats.ast_size);
    eprintln!("  - Variables:  {}", stats.variable_count);
}

fn main() {
    let args = Cli::parse();

    // Validate input file extension
    let has_extension = args
        .path
        .extension()
        .map_or(false, |ext| ext == SOURCE_EXTENSION);
    if !has_extension {
        eprintln!("Warning: Input file does not have .{} extension", SOURCE_EXTENSION);
    }

    match run(&args) {
        Ok(stats) => {
            if args.timing {
                print_stats(&stats);
            }
        }
        Err(e) => fatal(&e),
    }
}
