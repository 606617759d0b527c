use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use morfa_config::Config;
use morfa_config::analysis::OnUnrecognized;
use morfa_config::logging::{LogConfig, LogFormat};
use morfa_config::output::{CaseKeys, OutputEncoding};
use morfa_core::input::{self, InputShape};
use morfa_core::language::MorphAnalyzer;
use morfa_core::output;
use morfa_core::process::{self, ProcessOptions};
use morfa_core::report::ErrorReport;
use morfa_lang_ukrainian::UkrainianAnalyzer;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// JSON-encoded input
    #[arg(allow_hyphen_values = true)]
    pub input: Option<String>,

    /// What to print for unrecognized words (mark-error, pass-through)
    #[arg(long)]
    pub on_unrecognized: Option<OnUnrecognized>,

    /// Output text encoding (utf-8, ascii)
    #[arg(long)]
    pub encoding: Option<OutputEncoding>,

    /// Case table keys (codes, labels)
    #[arg(long)]
    pub case_keys: Option<CaseKeys>,

    /// Indentation width of the report
    #[arg(long)]
    pub indent: Option<usize>,

    /// Extra lexicon file, may be repeated
    #[arg(long = "lexicon", value_name = "PATH")]
    pub lexicons: Vec<String>,

    /// Extra arguments after the input are ignored
    #[arg(hide = true)]
    pub rest: Vec<String>,
}

impl Args {
    /// Flags win over environment and defaults
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(policy) = self.on_unrecognized {
            config.analysis.on_unrecognized = Some(policy);
        }
        if let Some(encoding) = self.encoding {
            config.output.encoding = encoding;
        }
        if let Some(case_keys) = self.case_keys {
            config.output.case_keys = case_keys;
        }
        if let Some(indent) = self.indent {
            config.output.indent = indent;
        }
        config
            .lexicon
            .additional_paths
            .extend(self.lexicons.iter().cloned());
        config
    }
}

/// Rendered document and whether the run succeeded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub output: String,
    pub success: bool,
}

/// Decode, analyze and encode one input. The analyzer is only built for valid input.
pub fn execute<A, F>(
    shape: InputShape,
    raw: Option<&str>,
    config: &Config,
    make_analyzer: F,
) -> anyhow::Result<Outcome>
where
    A: MorphAnalyzer,
    F: FnOnce(&Config) -> A,
{
    let input = match input::decode(raw, shape) {
        Ok(input) => input,
        Err(e) => {
            tracing::debug!("Rejected input: {e:?}");
            let output = output::to_line_string(&ErrorReport::new(&e), config.output.encoding)?;
            return Ok(Outcome {
                output,
                success: false,
            });
        }
    };

    let analyzer = make_analyzer(config);
    let options = ProcessOptions {
        on_unrecognized: config.analysis.policy_or(shape.default_policy()),
        case_keys: config.output.case_keys,
    };
    tracing::debug!(
        language = analyzer.language_code(),
        policy = %options.on_unrecognized,
        "Processing {:?} input",
        shape
    );

    let report = process::process(&input, &analyzer, options);
    let output = output::to_pretty_string(&report, &config.output)?;

    Ok(Outcome {
        output,
        success: true,
    })
}

/// Render a command-line error as the JSON error document
pub fn argument_error(e: &clap::Error, encoding: OutputEncoding) -> anyhow::Result<Outcome> {
    let rendered = e.to_string();
    let message = rendered.lines().next().unwrap_or_default();
    let message = message.strip_prefix("error: ").unwrap_or(message);

    Ok(Outcome {
        output: output::to_line_string(&ErrorReport::new(message), encoding)?,
        success: false,
    })
}

pub fn init_tracing(log: &LogConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);

    let result = match log.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.with_ansi(atty::is(atty::Stream::Stderr)).try_init(),
    };

    if let Err(e) = result {
        eprintln!("Failed to initialize logging: {e}");
    }
}

/// Entry point shared by the binaries
pub fn run(shape: InputShape) -> ExitCode {
    dotenvy::dotenv().ok();
    init_tracing(&LogConfig::from_env());
    let config = Config::new();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            tracing::debug!("Rejected arguments: {e}");
            return finish(argument_error(&e, config.output.encoding));
        }
    };
    if !args.rest.is_empty() {
        tracing::debug!("Ignoring extra arguments: {:?}", args.rest);
    }
    let config = args.apply(config);

    let outcome = execute(shape, args.input.as_deref(), &config, |config| {
        UkrainianAnalyzer::with_additional_lexicons(&config.lexicon.additional_paths)
    });
    finish(outcome)
}

fn finish(outcome: anyhow::Result<Outcome>) -> ExitCode {
    let outcome = match outcome {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::error!("Failed to render report: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let mut stdout = io::stdout().lock();
    if let Err(e) = writeln!(stdout, "{}", outcome.output).and_then(|_| stdout.flush()) {
        tracing::error!("Failed to write output: {e}");
        return ExitCode::FAILURE;
    }

    if outcome.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
