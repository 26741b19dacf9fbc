//! malpip-assistant - MALPIP and drug-drug interaction case assistant
//!
//! Matches a patient case against the rule tables and prints an explained
//! report.
//!
//! # Usage
//!
//! ```bash
//! # Case text on stdin
//! echo "82 y/o on diazepam, warfarin and aspirin" | malpip-assistant
//!
//! # Case text as an argument, JSON report
//! malpip-assistant --case "on warfarin and aspirin" --format=json
//!
//! # Show the prompt without calling the model
//! malpip-assistant --dry-run --file case.txt
//! ```

use std::env;
use std::io::{self, Read, Write};
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use malpip_assistant::{
    client::{ExplanationClient, OpenAiClient},
    config::{Config, OutputFormat},
    engine::CaseEngine,
    input::CaseInput,
    output::Explanation,
    rules::store,
};

/// Print version information
fn print_version() {
    println!("malpip-assistant {}", env!("CARGO_PKG_VERSION"));
}

/// Print help message
fn print_help() {
    println!(
        r#"malpip-assistant - MALPIP and drug-drug interaction case assistant

USAGE:
    malpip-assistant [OPTIONS]

OPTIONS:
    -h, --help              Print this help message
    -v, --version           Print version information
    -c, --config PATH       Path to config file
        --case TEXT         Case text (default: read from stdin)
    -f, --file PATH         Read case text from a file
        --json-input        Read stdin as {{"case_text": "..."}}
        --malpip PATH       MALPIP rule table (CSV)
        --ddi PATH          Drug-drug interaction rule table (CSV)
        --no-ddi            Use the MALPIP table only
        --format FORMAT     Report format: text, json (default: text)
    -d, --dry-run           Match and compose only; do not call the model
        --show-prompt       Include the composed prompt in the report

ENVIRONMENT:
    OPENAI_API_KEY          API key for the explanation model
                            (variable name set by [llm] api_key_env)
    RUST_LOG                Log filter (default: warn)

EXIT STATUS:
    0   report produced
    1   rules or input could not be loaded
    2   the explanation request failed
"#
    );
}

/// Parse command line arguments
struct Args {
    help: bool,
    version: bool,
    config_path: Option<String>,
    case_text: Option<String>,
    case_file: Option<String>,
    json_input: bool,
    malpip_path: Option<String>,
    ddi_path: Option<String>,
    no_ddi: bool,
    format: Option<OutputFormat>,
    dry_run: bool,
    show_prompt: bool,
}

/// Flags that take a value
const VALUE_FLAGS: &[&str] = &[
    "-c", "--config", "--case", "-f", "--file", "--malpip", "--ddi", "--format",
];

impl Args {
    fn parse() -> Result<Self, String> {
        let args: Vec<String> = env::args().collect();
        Self::parse_from(&args)
    }

    /// Parse arguments, program name first
    fn parse_from(args: &[String]) -> Result<Self, String> {
        let mut result = Args {
            help: false,
            version: false,
            config_path: None,
            case_text: None,
            case_file: None,
            json_input: false,
            malpip_path: None,
            ddi_path: None,
            no_ddi: false,
            format: None,
            dry_run: false,
            show_prompt: false,
        };

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "-h" | "--help" => result.help = true,
                "-v" | "--version" => result.version = true,
                "-d" | "--dry-run" => result.dry_run = true,
                "--json-input" => result.json_input = true,
                "--no-ddi" => result.no_ddi = true,
                "--show-prompt" => result.show_prompt = true,
                flag if VALUE_FLAGS.contains(&flag) => {
                    let value = args
                        .get(i + 1)
                        .ok_or_else(|| format!("{} requires a value", flag))?;
                    result.set_value(flag, value)?;
                    i += 1;
                }
                arg if arg.starts_with("--") && arg.contains('=') => {
                    if let Some((flag, value)) = arg.split_once('=') {
                        if !VALUE_FLAGS.contains(&flag) {
                            return Err(format!("unknown option {}", flag));
                        }
                        if value.is_empty() {
                            return Err(format!("{} requires a value", flag));
                        }
                        result.set_value(flag, value)?;
                    }
                }
                arg => tracing::warn!(argument = %arg, "ignoring unrecognized argument"),
            }
            i += 1;
        }

        Ok(result)
    }

    fn set_value(&mut self, flag: &str, value: &str) -> Result<(), String> {
        match flag {
            "-c" | "--config" => self.config_path = Some(value.to_string()),
            "--case" => self.case_text = Some(value.to_string()),
            "-f" | "--file" => self.case_file = Some(value.to_string()),
            "--malpip" => self.malpip_path = Some(value.to_string()),
            "--ddi" => self.ddi_path = Some(value.to_string()),
            "--format" => {
                let format = OutputFormat::from_str(value)
                    .ok_or_else(|| format!("unknown format '{}' (expected text or json)", value))?;
                self.format = Some(format);
            }
            _ => {}
        }
        Ok(())
    }
}

/// Collect the case from the argument, a file or stdin
fn read_case(args: &Args) -> Result<CaseInput, String> {
    if let Some(ref text) = args.case_text {
        return Ok(CaseInput::from_text(text));
    }

    if let Some(ref path) = args.case_file {
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read case file {}: {}", path, e))?;
        return Ok(CaseInput::from_text(&text));
    }

    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .map_err(|e| format!("cannot read stdin: {}", e))?;

    if args.json_input {
        CaseInput::from_json(&text).map_err(|e| format!("invalid JSON input: {}", e))
    } else {
        Ok(CaseInput::from_text(&text))
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = match Args::parse() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Try 'malpip-assistant --help' for usage.");
            return ExitCode::from(1);
        }
    };

    // Handle help and version
    if args.help {
        print_help();
        return ExitCode::SUCCESS;
    }

    if args.version {
        print_version();
        return ExitCode::SUCCESS;
    }

    // Load configuration
    let mut config = if let Some(ref path) = args.config_path {
        Config::load_from(std::path::Path::new(path)).unwrap_or_else(|e| {
            tracing::warn!(path = %path, error = %e, "failed to load config, using defaults");
            Config::default()
        })
    } else {
        Config::load()
    };

    // Command line overrides
    if let Some(ref path) = args.malpip_path {
        config.rules.malpip_path = path.clone();
    }
    if let Some(ref path) = args.ddi_path {
        config.rules.ddi_path = Some(path.clone());
        config.rules.ddi_enabled = true;
    }
    if args.no_ddi {
        config.rules.ddi_enabled = false;
    }
    if let Some(format) = args.format {
        config.output.format = format;
    }
    if args.show_prompt || args.dry_run {
        config.output.show_prompt = true;
    }

    // Rule tables are loaded once; any failure aborts
    let rules = match store::load(&config) {
        Ok(rules) => rules,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(1);
        }
    };
    let engine = CaseEngine::new(rules);

    let case = match read_case(&args) {
        Ok(case) => case,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(1);
        }
    };
    if case.is_blank() {
        tracing::info!("empty case text");
    }
    tracing::debug!(case = %case.summary(), "analyzing case");

    // Build the client unless this is a dry run. A client that cannot be
    // built is reported like any other explanation failure.
    let client = if args.dry_run {
        None
    } else {
        Some(OpenAiClient::from_config(&config.llm))
    };

    let mut analysis = match &client {
        Some(Ok(client)) => engine.analyze(&case.case_text, Some(client as &dyn ExplanationClient)),
        _ => engine.analyze(&case.case_text, None),
    };
    if let Some(Err(e)) = &client {
        analysis.explanation = Explanation::from_error(e);
    }

    let rendered = match config.output.format {
        OutputFormat::Text => analysis.to_text(config.output.show_prompt),
        OutputFormat::Json => analysis.to_json(config.output.show_prompt),
    };

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let _ = writeln!(handle, "{}", rendered.trim_end());
    let _ = handle.flush();

    ExitCode::from(analysis.exit_code() as u8)
}
