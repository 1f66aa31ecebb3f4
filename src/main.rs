//! CLI entry point for pyinit

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use pyinit::init::BUILTIN_EXCLUDE;
use pyinit::{
    ConsoleReporter, ExclusionSet, InitConfig, InitError, JsonReporter, OutputConfig,
    TreeInitializer, logging,
};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "pyinit")]
#[command(about = "Create __init__.py files in subdirectories")]
#[command(version)]
struct Args {
    /// Root directory to start from
    root_dir: PathBuf,

    /// Directory names to exclude (case-insensitive, __pycache__ is always excluded)
    #[arg(
        short = 'e',
        long = "exclude",
        value_name = "NAME",
        num_args = 0..,
        default_value = BUILTIN_EXCLUDE
    )]
    exclude: Vec<String>,

    /// Descend only N levels below the root
    #[arg(short = 'L', long = "level")]
    level: Option<usize>,

    /// Skip hidden directories and anything matched by .gitignore/.ignore
    #[arg(long = "respect-ignore")]
    respect_ignore: bool,

    /// Print a JSON report instead of per-directory lines
    #[arg(long = "json", conflicts_with = "quiet")]
    json: bool,

    /// Only print errors and the final summary
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

fn main() {
    logging::init();
    let args = Args::parse();

    let config = InitConfig {
        exclusions: ExclusionSet::new(&args.exclude),
        max_depth: args.level,
        respect_ignore: args.respect_ignore,
    };
    let initializer = TreeInitializer::new(config);

    let result = if args.json {
        let mut reporter = JsonReporter::stdout();
        initializer.run(&args.root_dir, &mut reporter)
    } else {
        let mut reporter = ConsoleReporter::new(OutputConfig {
            use_color: should_use_color(args.color),
            quiet: args.quiet,
        });
        initializer.run(&args.root_dir, &mut reporter)
    };

    // Per-directory errors are already reported; only pre-flight and
    // output failures change the exit status.
    match result {
        Ok(_) => {}
        Err(e @ InitError::Output(_)) => {
            eprintln!("pyinit: {}", e);
            process::exit(1);
        }
        Err(e) => {
            eprintln!("pyinit: error: {}", e);
            process::exit(1);
        }
    }
}
