mod debug_report;

use std::io::{self, IsTerminal, Read};
use std::process::ExitCode;
use thtag::{Options, default_dictionaries, parse_verbose_with};

/// Command line settings.
struct Cli {
    input: String,
    options: Options,
    color: bool,
}

enum Command {
    Tag(Cli),
    Help,
    Version,
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = match parse_args(std::env::args().skip(1)) {
        Ok(Command::Tag(cli)) => cli,
        Ok(Command::Help) => {
            println!("{}", help_text());
            return ExitCode::SUCCESS;
        }
        Ok(Command::Version) => {
            println!("thtag {}", env!("CARGO_PKG_VERSION"));
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::from(2);
        }
    };

    match parse_verbose_with(&cli.input, default_dictionaries(), &cli.options) {
        Ok(res) => {
            debug_report::print_run(&res, cli.color);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(1)
        }
    }
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Command, String> {
    let mut options = Options::default();
    let mut color = io::stdout().is_terminal();
    let mut words = Vec::new();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-V" | "--version" => return Ok(Command::Version),
            "--color" => color = true,
            "--no-color" => color = false,
            "--passes" => {
                let value = args.next().ok_or("--passes expects a value")?;
                options.pass_limit = value.parse().map_err(|_| format!("invalid --passes value {value:?}"))?;
            }
            "--" => {
                words.extend(args.by_ref());
                break;
            }
            flag if flag.starts_with("--") => return Err(format!("unknown option {flag:?}")),
            _ => words.push(arg),
        }
    }

    let input = if words.is_empty() { read_stdin()? } else { words.join(" ") };
    let input = input.trim_end_matches(['\n', '\r']).to_string();
    if input.trim().is_empty() {
        return Err(format!("no input provided\n\n{}", help_text()));
    }

    Ok(Command::Tag(Cli { input, options, color }))
}

fn read_stdin() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("failed to read stdin: {err}"))?;
    Ok(buffer)
}

fn help_text() -> String {
    format!(
        "thtag {version}
Tag Touhou score and replay descriptions.

Usage: thtag [OPTIONS] [--] [TEXT...]
       echo TEXT | thtag [OPTIONS]

Options:
  --passes <n>   Match attempts per bounded pass (default {passes})
  --color        Force ANSI colors
  --no-color     Disable ANSI colors
  -h, --help     Show this help
  -V, --version  Show the version

Set RUST_LOG=thtag=debug to trace matching.
Exit status: 0 ok, 1 parse error, 2 bad arguments.",
        version = env!("CARGO_PKG_VERSION"),
        passes = Options::default().pass_limit
    )
}
