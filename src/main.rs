//! dlrepro - Terminal browser for classic deep learning paper reproductions

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use dlrepro::config::Config;
use dlrepro::{App, Catalog, paths, report, tui};
use tracing_subscriber::EnvFilter;

/// Browse classic deep learning papers and their PyTorch reproductions
#[derive(Parser)]
#[command(name = "dlrepro")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Model to select on startup instead of the default
    #[arg(short, long, value_name = "KEY")]
    model: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every model in the catalog
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print one model's citation and code
    Show {
        /// Model key, e.g. `resnet`
        key: String,

        /// Print only the code sample
        #[arg(long, conflicts_with = "json")]
        code_only: bool,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    init_logging();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Let --help and --version exit normally
            if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion
            {
                e.exit();
            }
            eprintln!("error: {e}");
            Cli::command().print_help()?;
            std::process::exit(1);
        }
    };

    let catalog = Catalog::builtin();

    match cli.command {
        Some(Commands::List { json }) => cmd_list(&catalog, json),
        Some(Commands::Show {
            key,
            code_only,
            json,
        }) => cmd_show(&catalog, &key, code_only, json),
        None => {
            let config = Config::load();
            let app = match cli.model.as_deref() {
                Some(key) => App::with_initial_model(config, catalog, key)?,
                None => App::new(config, catalog),
            };
            tui::run(app)
        }
    }
}

/// Log to `$TMPDIR/dlrepro.log`; tail with `tail -f`.
/// `DEBUG=0-3` controls verbosity (0=off, 1=warn, 2=info, 3=debug).
fn init_logging() {
    let debug_level = std::env::var("DEBUG")
        .ok()
        .and_then(|v| v.parse::<u8>().ok())
        .unwrap_or(0);

    if debug_level == 0 {
        return;
    }

    let log_path = paths::log_path();
    if let Err(e) = std::fs::write(&log_path, "") {
        eprintln!("Warning: Failed to clear log file: {e}");
    }

    let level = match debug_level {
        1 => "warn",
        2 => "info",
        _ => "debug",
    };

    let (dir, file) = match (log_path.parent(), log_path.file_name()) {
        (Some(dir), Some(file)) => (dir.to_path_buf(), file.to_os_string()),
        _ => (std::env::temp_dir(), "dlrepro.log".into()),
    };
    let file_appender = tracing_appender::rolling::never(dir, file);

    tracing_subscriber::fmt()
        .with_writer(file_appender)
        .with_env_filter(EnvFilter::new(level))
        .with_ansi(false)
        .init();
}

fn cmd_list(catalog: &Catalog, json: bool) -> Result<()> {
    if json {
        println!("{}", report::catalog_json(catalog)?);
    } else {
        print!("{}", report::catalog_table(catalog));
    }
    Ok(())
}

fn cmd_show(catalog: &Catalog, key: &str, code_only: bool, json: bool) -> Result<()> {
    let entry = catalog
        .lookup(key)
        .with_context(|| format!("Cannot show `{key}`"))?;

    if json {
        println!("{}", report::entry_json(entry)?);
    } else if code_only {
        print!("{}", entry.code);
        if !entry.code.ends_with('\n') {
            println!();
        }
    } else {
        print!("{}", report::entry_report(entry));
    }
    Ok(())
}
