use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use templar::args::{compiler_flags, FlagSet};
use templar::config::{Config, OutputConfig};
use templar::logging::init_tracing;
use templar::pipeline::build_compile_request;
use templar::report::{exit_with_error, USAGE_PREFIX};

/// Batch template compiler front end.
///
/// Everything after the wrapper options is handed to the compiler flag
/// parser untouched.
#[derive(Debug, Parser)]
#[command(name = "templar", version)]
struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Compiler flags and legacy positional source files
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "ARGS")]
    args: Vec<String>,
}

/// Wrapper switches that take no value.
const WRAPPER_SWITCHES: &[&str] = &["-h", "--help", "-V", "--version"];

/// Split the process arguments into the leading wrapper options, which clap
/// parses, and the compiler arguments, which go to the flag engine as-is.
///
/// The split happens before clap sees anything so that tokens clap would
/// interpret itself, like a leading `--`, reach the flag engine intact.
fn split_wrapper_args<I>(args: I) -> (Vec<OsString>, Vec<String>)
where
    I: IntoIterator<Item = OsString>,
{
    let mut args = args.into_iter().peekable();
    let mut wrapper: Vec<OsString> = args.next().into_iter().collect();

    while let Some(arg) = args.peek().map(|arg| arg.to_string_lossy().into_owned()) {
        if arg == "--config" {
            wrapper.extend(args.next());
            wrapper.extend(args.next());
        } else if arg.starts_with("--config=") || WRAPPER_SWITCHES.contains(&arg.as_str()) {
            wrapper.extend(args.next());
        } else {
            break;
        }
    }

    let compiler = args
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    (wrapper, compiler)
}

/// First line of a clap error without its own `error: ` prefix.
fn clap_message(err: &clap::Error) -> String {
    let rendered = err.render().to_string();
    let first = rendered.lines().next().unwrap_or_default();
    first.trim_start_matches("error: ").to_string()
}

fn usage_failure(message: &str, flags: &FlagSet, width: usize) -> ExitCode {
    exit_with_error(message, USAGE_PREFIX, flags, width)
}

fn main() -> ExitCode {
    let (wrapper, compiler) = split_wrapper_args(std::env::args_os());
    let mut cli = match Cli::try_parse_from(wrapper) {
        Ok(cli) => cli,
        Err(err) if !err.use_stderr() => {
            // --help and --version
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            return usage_failure(
                &clap_message(&err),
                &compiler_flags(),
                OutputConfig::default().usage_width,
            )
        }
    };
    cli.args.extend(compiler);

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = match Config::load_from(cli.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            return Ok(usage_failure(
                &format!("failed to load config: {}", err),
                &compiler_flags(),
                OutputConfig::default().usage_width,
            ))
        }
    };
    init_tracing(&config.logging);

    let mut flags = compiler_flags();
    if let Err(err) = config.apply_flag_defaults(&mut flags) {
        return Ok(usage_failure(
            &format!("invalid config defaults: {}", err),
            &flags,
            config.output.usage_width,
        ));
    }

    match build_compile_request(&cli.args, &flags) {
        Ok(request) => {
            println!("{}", serde_json::to_string_pretty(&request)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(failure) => Ok(usage_failure(
            &failure.to_string(),
            &flags,
            config.output.usage_width,
        )),
    }
}
