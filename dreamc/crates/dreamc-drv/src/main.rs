//! dreamc - the DreamLang compiler command.
//!
//! Parses command-line arguments, loads configuration, selects the message
//! locale and runs the lexer over one source file.

use std::io::{IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use dreamc_drv::{
    apply_config_locale, default_locale_dir, resolve_source, startup_localizer, Config,
    DriverError, Result, RunOptions, Session,
};
use dreamc_i18n::Localizer;
use dreamc_lex::Format;
use tracing::{debug, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// dreamc - the DreamLang compiler
///
/// Runs lexical analysis over a DreamLang source file. A source name without
/// an extension gets `.zv` appended when that file exists.
#[derive(Parser, Debug)]
#[command(name = "dreamc")]
#[command(author = "DreamLang Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "The DreamLang compiler", long_about = None)]
struct Cli {
    /// Source file to compile
    source: Option<PathBuf>,

    /// Show tokenization result
    #[arg(short, long)]
    tokens: bool,

    /// Serialize the token stream
    #[arg(short, long, value_enum)]
    emit: Option<EmitFormat>,

    /// Write the serialized token stream to a file
    #[arg(short, long, requires = "emit")]
    output: Option<PathBuf>,

    /// Set locale (e.g., zh_CN, en_US)
    #[arg(short, long, env = "DREAMC_LOCALE")]
    locale: Option<String>,

    /// Set default config (without a source file) or use a config file for this run
    #[arg(short, long, env = "DREAMC_CONFIG")]
    config: Option<PathBuf>,

    /// Directory holding message catalogs
    #[arg(long, env = "DREAMC_LOCALE_DIR")]
    locale_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, env = "DREAMC_VERBOSE")]
    verbose: bool,

    /// Disable color output
    #[arg(long, env = "DREAMC_NO_COLOR")]
    no_color: bool,
}

/// Token stream export formats.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum EmitFormat {
    Json,
    Toml,
}

impl From<EmitFormat> for Format {
    fn from(format: EmitFormat) -> Self {
        match format {
            EmitFormat::Json => Format::Json,
            EmitFormat::Toml => Format::Toml,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let exe = std::env::current_exe().unwrap_or_else(|_| PathBuf::from("dreamc"));
    let startup = Config::load_default(Path::new("."), &exe);
    let config = startup
        .as_ref()
        .map(|startup| startup.config.clone())
        .unwrap_or_default();

    let verbose = cli.verbose || config.output.verbose;
    let no_color = cli.no_color || !config.output.colored_output;
    if let Err(err) = init_logging(verbose, no_color) {
        eprintln!("Warning: {err}");
    }
    match &startup {
        Ok(startup) if startup.created => {
            info!(path = %startup.path.display(), "created default configuration")
        },
        Ok(startup) => debug!(path = %startup.path.display(), "using configuration"),
        Err(err) => warn!(error = %err, "failed to load configuration file, using defaults"),
    }

    let locale_dir = cli.locale_dir.clone().unwrap_or_else(|| default_locale_dir(&exe));
    let localizer = startup_localizer(&locale_dir, &config);

    match &cli.source {
        None => match &cli.config {
            Some(path) => set_default_config(path, &localizer),
            None => {
                let session = Session::new(config, localizer);
                eprintln!("{}", session.describe_error(&DriverError::NoSource));
                eprintln!("Run 'dreamc --help' for usage.");
                ExitCode::FAILURE
            },
        },
        Some(source) => compile(&cli, source, config, localizer),
    }
}

/// Initialize the logging system.
///
/// Log lines go to stderr, colored only when stderr is a terminal. `RUST_LOG`
/// overrides the default `info` level unless `verbose` forces `debug`.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color && std::io::stderr().is_terminal())
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| DriverError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// `dreamc -c <file>` with no source: install `<file>` as the default config.
fn set_default_config(path: &Path, localizer: &Localizer) -> ExitCode {
    match Config::set_as_default(path, Path::new(".")) {
        Ok(_) => {
            println!(
                "{}: {}",
                localizer.gettext("Default config set successfully"),
                path.display()
            );
            ExitCode::SUCCESS
        },
        Err(err) => {
            eprintln!(
                "{}: {} '{}'",
                localizer.gettext("Error"),
                localizer.gettext("Failed to set default config"),
                path.display()
            );
            debug!(error = %err, "set default config failed");
            ExitCode::FAILURE
        },
    }
}

/// Lex `source` with an optional per-run config and locale override.
fn compile(cli: &Cli, source: &Path, config: Config, mut localizer: Localizer) -> ExitCode {
    let config = match &cli.config {
        Some(path) => match Config::load_from_path(path) {
            Ok(run_config) => {
                apply_config_locale(&mut localizer, &run_config);
                run_config
            },
            Err(err) => {
                eprintln!(
                    "{}: {} '{}'",
                    localizer.gettext("Warning"),
                    localizer.gettext("Failed to load config file"),
                    path.display()
                );
                warn!(error = %err, "keeping startup configuration");
                config
            },
        },
        None => config,
    };

    if let Some(locale) = &cli.locale {
        if !localizer.set_locale(locale) {
            eprintln!(
                "{}: {} '{}'",
                localizer.gettext("Warning"),
                localizer.gettext("Failed to set locale"),
                locale
            );
        }
    }

    let options = RunOptions {
        show_tokens: cli.tokens,
        emit: cli.emit.map(Format::from),
        output: cli.output.clone(),
    };
    let path = resolve_source(source);
    let session = Session::new(config, localizer);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let result = session
        .run(&path, &options, &mut out)
        .and_then(|()| out.flush().map_err(DriverError::from));
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", session.describe_error(&err));
            ExitCode::FAILURE
        },
    }
}
