//! Cardinal ITN command-line front end
//!
//! Reads one phrase per line from stdin and writes the tagged token, or the
//! line unchanged when it is not a cardinal.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

use indic_itn_config::{load_settings_from, Settings};
use indic_itn_core::{Language, Tagger};
use indic_itn_text_processing::CardinalRegistry;

#[derive(Parser)]
#[command(name = "itn-cardinal")]
#[command(about = "Convert spoken cardinal numbers to digits", version)]
struct Cli {
    /// Language code or name (mr, tamil, ...)
    language: Language,

    /// Print `{"input": ..., "cardinal": ...}` objects instead of tokens
    #[arg(long)]
    json: bool,

    /// Directory holding default.yaml and {env}.yaml
    #[arg(long, default_value = "config")]
    config_dir: PathBuf,

    /// Configuration environment layered over default.yaml
    #[arg(long, env = "ITN_ENV")]
    env: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = load_settings_from(&cli.config_dir, cli.env.as_deref())
        .with_context(|| format!("loading settings from {}", cli.config_dir.display()))?;
    init_tracing(&settings);

    // Only the requested language is built.
    settings.lexicon.languages = vec![cli.language];
    let base = cli.config_dir.parent().unwrap_or(Path::new("."));
    let registry = CardinalRegistry::from_settings(&settings, base)
        .with_context(|| format!("building the {} tagger", cli.language))?;
    let tagger = registry
        .get(cli.language)
        .with_context(|| format!("no tagger for {}", cli.language))?;

    tracing::info!(language = %cli.language, json = cli.json, "Reading phrases from stdin");

    let stdin = io::stdin();
    let stdout = io::stdout();
    process(tagger.as_ref(), cli.json, stdin.lock(), stdout.lock())
}

/// Tag every input line and write one output line per input line
fn process<R: BufRead, W: Write>(
    tagger: &dyn Tagger,
    json: bool,
    input: R,
    mut output: W,
) -> Result<()> {
    let mut tagged = 0usize;
    let mut total = 0usize;

    for line in input.lines() {
        let line = line.context("reading stdin")?;
        let token = tagger.tag(&line);
        total += 1;
        if token.is_some() {
            tagged += 1;
        }

        if json {
            let record = serde_json::json!({ "input": line, "cardinal": token });
            writeln!(output, "{}", record)?;
        } else {
            match token {
                Some(token) => writeln!(output, "{}", token)?,
                None => writeln!(output, "{}", line)?,
            }
        }
    }

    output.flush()?;
    tracing::info!(total, tagged, "Done");
    Ok(())
}

/// Initialize tracing; logs go to stderr so stdout carries only results
fn init_tracing(config: &Settings) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = &config.observability.log_level;
        format!("indic_itn={level},itn_cardinal={level},warn").into()
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);
    let fmt_layer = if config.observability.log_json {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(io::stderr)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer().with_writer(io::stderr).boxed()
    };
    subscriber.with(fmt_layer).init();
}
