//! Supermind CLI entry point.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use supermind_content::{ContentHandle, ContentSource, JsonFileSource};
use supermind_runtime::{ConsoleMessenger, MemoryStore, Repl, RuntimeConfig, Session, logging};

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    content: Option<PathBuf>,
    config: Option<PathBuf>,
    seed: Option<u64>,
    check: bool,
    show_help: bool,
    show_version: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut args = args.into_iter().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "--check" => config.check = true,
            "--config" => {
                let path = args.next().ok_or("--config requires a value")?;
                config.config = Some(PathBuf::from(path));
            }
            "--seed" => {
                let value = args.next().ok_or("--seed requires a value")?;
                config.seed = Some(
                    value
                        .parse()
                        .map_err(|_| format!("invalid --seed value: {value}"))?,
                );
            }
            other if other.starts_with('-') => {
                return Err(format!("unknown option: {other}").into());
            }
            path => {
                if config.content.is_some() {
                    return Err("only one content file may be given".into());
                }
                config.content = Some(PathBuf::from(path));
            }
        }
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = parse_args(args)?;

    if cli.show_help {
        print_help();
        return Ok(ExitCode::SUCCESS);
    }

    if cli.show_version {
        println!("supermind {}", env!("CARGO_PKG_VERSION"));
        return Ok(ExitCode::SUCCESS);
    }

    let mut config = match &cli.config {
        Some(path) => RuntimeConfig::load(path)?,
        None => RuntimeConfig::default(),
    };
    if let Some(path) = cli.content {
        config = config.with_content_path(path);
    }
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    logging::init(&config.log_level)?;

    let path = config
        .content_path
        .clone()
        .ok_or("no content file given (pass CONTENT or set content_path in the config)")?;
    let source = JsonFileSource::new(&path);

    if cli.check {
        let model = source.load()?;
        let report = model.validate();
        println!("{}", model.status());
        println!("{report}");
        return Ok(if report.is_clean() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    let content = ContentHandle::load(&source)?;
    let session = Session::from_config(&config, content, MemoryStore::new(), ConsoleMessenger::stdout());
    let mut repl = Repl::new(session)?.with_source(source);
    repl.run()?;
    Ok(ExitCode::SUCCESS)
}

fn print_help() {
    println!(
        "\x1b[1mSupermind\x1b[0m - Chat-driven exploration game

\x1b[1mUSAGE:\x1b[0m
    supermind [OPTIONS] [CONTENT]

\x1b[1mARGUMENTS:\x1b[0m
    [CONTENT]          JSON content document (overrides content_path)

\x1b[1mOPTIONS:\x1b[0m
    -h, --help         Print help information
    -V, --version      Print version information
    --config FILE      Read settings from a TOML file
    --seed N           Fix the random seed
    --check            Load and validate content, then exit

\x1b[1mEXAMPLES:\x1b[0m
    supermind crates/supermind_runtime/data/demo.json
    supermind --seed 7 world.json
    supermind --check world.json
    supermind --config supermind.toml

\x1b[1mIN-GAME:\x1b[0m
    Type a button label exactly as shown in [brackets].
    :help, :status, :reload [path], :quit    Administrator commands
    Ctrl+D                                    Exit"
    );
}
