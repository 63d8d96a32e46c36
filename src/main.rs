// SPDX-License-Identifier: AGPL-3.0-only

/// rovar command-line entry point and CLI orchestration.
///
/// The binary turns a byte stream into Rövarspråket: consonants are doubled
/// with an interposed `o`, everything else passes through, and transcoding
/// halts at the first `!`.  This file is intentionally light on transcoding
/// logic; it wires user input into the focused modules under `src/rovar`
/// and `src/transcoder`.  Stdout carries nothing but transcoded bytes so
/// the tool composes cleanly in pipelines; banners and diagnostics go to
/// stderr.
mod rovar;
mod transcoder;

use anyhow::{Context, Result, anyhow};
use atty::Stream;
use clap::error::ErrorKind;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::io::{self, BufWriter, Write};
use std::sync::OnceLock;
use transcoder::{TranscodeContext, disable_colours, transcode_files};

/// Build-time version information.  The CI pipeline bakes in the most recent
/// tag via `ROVAR_VERSION`; otherwise we fall back to Cargo's package
/// version which tracks the published crate.
const VERSION: &str = match option_env!("ROVAR_VERSION") {
    Some(tag) => tag,
    None => env!("CARGO_PKG_VERSION"),
};

/// Determine the current Git branch, defaulting to `main` when the metadata
/// was not injected during the build.
fn branch() -> &'static str {
    option_env!("ROVAR_BRANCH").unwrap_or("main")
}

/// Determine the short Git commit that went into the binary.  We rely on CI
/// to provide this, but fall back to a recognisable placeholder.
fn sha() -> &'static str {
    option_env!("ROVAR_COMMIT").unwrap_or("0000000")
}

/// Determine the rustc version baked in at build time.
fn rust_version() -> &'static str {
    option_env!("RUSTC_VERSION").unwrap_or("unknown")
}

/// Human-friendly version banner including branch and commit.
fn version_string() -> String {
    format!(
        "rovar {VERSION} (branch:{}, commit:{}) [rust:{}]",
        branch(),
        sha(),
        rust_version()
    )
}

/// Cached version string with a 'static lifetime for clap metadata.
fn version_str() -> &'static str {
    static VERSION_STR: OnceLock<String> = OnceLock::new();
    VERSION_STR.get_or_init(version_string).as_str()
}

/// Conventional `main` that defers to `run` so tests can call the logic
/// without having to spin up a separate process.
fn main() {
    std::process::exit(match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{err}");
            1
        }
    });
}

/// Parse CLI arguments, respond to informational flags and finally drive
/// the transcoder.  Everything user-facing goes through here, so the
/// structure favours clarity over cleverness.
fn run() -> Result<i32> {
    let cmd = build_cli();
    let matches = match cmd.try_get_matches() {
        Ok(m) => m,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                err.print()?;
                if err.kind() == ErrorKind::DisplayHelp {
                    print_usage();
                }
                return Ok(0);
            }
            _ => err.exit(),
        },
    };

    let opts = CliOptions::from_matches(&matches)?;

    if opts.show_version {
        println!("{}", version_string());
        return Ok(0);
    }

    if let Some(force_colour) = opts.colour {
        if !force_colour {
            disable_colours();
        }
    } else if !atty::is(Stream::Stderr) {
        disable_colours();
    }

    let files = if opts.files.is_empty() {
        vec!["-".to_string()]
    } else {
        opts.files.clone()
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut err_out = io::stderr();
    let mut ctx = TranscodeContext {
        out: &mut out,
        err_out: &mut err_out,
        terminator: opts.terminator,
    };
    let code = transcode_files(&files, &mut ctx);
    out.flush().context("failed to flush stdout")?;
    Ok(code)
}

/// Construct the `clap` command with all supported arguments.
fn build_cli() -> Command {
    Command::new("rovar")
        .about("Rövarspråket text transcoder - doubles consonants with an interposed 'o'")
        .disable_version_flag(true)
        .version(version_str())
        .arg(
            Arg::new("terminator")
                .long("terminator")
                .value_name("CHAR")
                .help("Stop byte that halts transcoding (default: !)"),
        )
        .arg(
            Arg::new("colour")
                .long("colour")
                .num_args(0..=1)
                .value_name("yes|no")
                .require_equals(false)
                .default_missing_value("true")
                .help("Force coloured diagnostics on stderr"),
        )
        .arg(
            Arg::new("version")
                .long("version")
                .action(ArgAction::SetTrue)
                .help("Print version information and exit"),
        )
        .arg(
            Arg::new("files")
                .value_name("FILE")
                .num_args(0..)
                .action(ArgAction::Append)
                .trailing_var_arg(true),
        )
}

/// Structured view of the CLI flags so downstream code gets type-safe access
/// to user intent.
struct CliOptions {
    terminator: u8,
    colour: Option<bool>,
    show_version: bool,
    files: Vec<String>,
}

impl CliOptions {
    /// Translate clap's `ArgMatches` into our strongly typed `CliOptions`.
    /// The function centralises validation so the rest of the code can assume
    /// sane defaults and bail out early when a user supplies nonsense.
    fn from_matches(matches: &ArgMatches) -> Result<Self> {
        let files: Vec<String> = matches
            .get_many::<String>("files")
            .map(|vals| vals.map(|v| v.to_string()).collect())
            .unwrap_or_default();

        Ok(Self {
            terminator: parse_terminator(matches.get_one::<String>("terminator"))?,
            colour: parse_colour(matches.get_one::<String>("colour"))?,
            show_version: matches.get_flag("version"),
            files,
        })
    }
}

/// Interpret command-line colour overrides, keeping support for human-friendly
/// words like "yes" and "no".  This is kept separate so unit tests can focus
/// on the parsing logic.
fn parse_colour(value: Option<&String>) -> Result<Option<bool>> {
    match value {
        None => Ok(None),
        Some(v) if v.is_empty() => Ok(None),
        Some(v) => match v.to_ascii_lowercase().as_str() {
            "true" | "yes" => Ok(Some(true)),
            "false" | "no" => Ok(Some(false)),
            other => {
                print_usage();
                Err(anyhow!("invalid value for --colour: {other}"))
            }
        },
    }
}

/// Parse the terminator override supplied on the CLI.  Users can pass a
/// literal character, "BANG", or a hex escape like `\x21`.  The parser errs
/// on the side of helpful messages whilst staying strict.
fn parse_terminator(value: Option<&String>) -> Result<u8> {
    const BANG: u8 = b'!';
    match value {
        None => Ok(BANG),
        Some(v) if v.is_empty() => Err(anyhow!("terminator cannot be empty")),
        Some(v) => {
            if v.eq_ignore_ascii_case("BANG") {
                return Ok(BANG);
            }
            if let Some(hex) = v.strip_prefix("\\x").or_else(|| v.strip_prefix("0x")) {
                return u8::from_str_radix(hex, 16)
                    .map_err(|_| anyhow!("invalid terminator hex value: {v}"));
            }
            let mut bytes = v.bytes();
            if let (Some(byte), None) = (bytes.next(), bytes.next()) {
                return Ok(byte);
            }
            Err(anyhow!(
                "terminator must be a single byte or hex code like \\x21"
            ))
        }
    }
}

/// Print the condensed usage guide.  Kept in one function so we can reuse it
/// whenever argument parsing fails.
fn print_usage() {
    static USAGE: &str = include_str!("../resources/messages/usage_en.txt");
    println!("\n{USAGE}");
}
