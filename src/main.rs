// Boyo: translate Boyo programs to C++ and build them

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::Parser as _;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::info;
use ratatui::{backend::CrosstermBackend, Terminal};

use boyo::driver::{self, DriverError, Toolchain};
use boyo::printer::{render_program_tree, CodePrinter};
use boyo::ParseError;
use boyo::ui::App;

#[derive(clap::Parser, Debug)]
#[command(name = "boyo", version, about = "Boyo compiler")]
struct Cli {
    /// Boyo source file
    input: PathBuf,

    /// Output executable (required unless --print-code, --print-ast or --inspect is used)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the generated C++ code without compiling
    #[arg(long)]
    print_code: bool,

    /// Print the Abstract Syntax Tree
    #[arg(long)]
    print_ast: bool,

    /// Browse source, AST and generated code in a terminal UI
    #[arg(long)]
    inspect: bool,

    /// C++ compiler to invoke
    #[arg(long, env = "BOYO_CXX", default_value = driver::DEFAULT_COMPILER)]
    cxx: PathBuf,

    /// Keep the intermediate .cpp file next to the output
    #[arg(long)]
    keep_cpp: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            if let Some(snippet) = parse_error(&err).and_then(ParseError::snippet) {
                eprintln!("{}", snippet);
            }
            if let Some(DriverError::ToolchainFailed { diagnostics, .. }) =
                err.downcast_ref::<DriverError>()
            {
                if !diagnostics.is_empty() {
                    eprintln!("\nCompiler output:");
                    eprint!("{}", driver::format_diagnostics(diagnostics));
                }
            }
            ExitCode::FAILURE
        }
    }
}

fn parse_error(err: &anyhow::Error) -> Option<&ParseError> {
    match err.downcast_ref::<DriverError>() {
        Some(DriverError::Parse(e)) => Some(e),
        _ => err.downcast_ref::<ParseError>(),
    }
}

fn run(cli: &Cli) -> Result<()> {
    let lines = driver::read_source(&cli.input)?;
    info!("read {} lines from {}", lines.len(), cli.input.display());

    if cli.print_ast {
        let statements = boyo::parse(&lines)?;
        println!();
        print!("{}", render_program_tree(&statements));
        println!();
        return Ok(());
    }

    if cli.print_code {
        let source = driver::render_source(&lines)?;
        CodePrinter::new(!cli.no_color)
            .print(&source)
            .context("Failed to write generated code")?;
        return Ok(());
    }

    if cli.inspect {
        let statements = boyo::parse(&lines)?;
        let app = App::new(lines, statements)?;
        return run_inspector(app);
    }

    let Some(output) = &cli.output else {
        bail!("Output file not specified (use -o or --output)");
    };

    let toolchain = Toolchain {
        compiler: cli.cxx.clone(),
        keep_source: cli.keep_cpp,
        ..Toolchain::default()
    };
    driver::compile(&lines, output, &toolchain)?;
    println!(
        "Successfully compiled {} -> {}",
        cli.input.display(),
        output.display()
    );
    Ok(())
}

fn run_inspector(mut app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.context("Inspector failed")
}
