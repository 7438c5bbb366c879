mod logging;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, LogicalSize, WindowBuilder};
use quiz_core::catalog;
use quiz_core::config::{ChaosConfig, ChaosConfigDraft};
use quiz_core::model::{ContentBundle, Language, Viewport};
use services::{Clock, QuizLoopService};
use tokio::runtime::Handle;
use ui::{App, UiApp, build_app_context};

const DEFAULT_WIDTH: f64 = 1024.0;
const DEFAULT_HEIGHT: f64 = 768.0;

#[derive(Debug, PartialEq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidValue { flag: &'static str, raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidValue { flag, raw } => write!(f, "invalid {flag} value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn parse_value<T: FromStr>(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<T, ArgsError> {
    let raw = require_value(args, flag)?;
    raw.trim()
        .parse()
        .map_err(|_| ArgsError::InvalidValue { flag, raw })
}

fn parse_dimension(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<f64, ArgsError> {
    let value: f64 = parse_value(args, flag)?;
    if !value.is_finite() || value <= 0.0 {
        return Err(ArgsError::InvalidValue {
            flag,
            raw: value.to_string(),
        });
    }
    Ok(value)
}

struct DesktopApp {
    quiz_loop: QuizLoopService,
    content: Arc<ContentBundle>,
}

impl UiApp for DesktopApp {
    fn quiz_loop(&self) -> QuizLoopService {
        self.quiz_loop.clone()
    }

    fn content(&self) -> Arc<ContentBundle> {
        Arc::clone(&self.content)
    }
}

#[derive(Debug)]
struct Args {
    draft: ChaosConfigDraft,
    width: f64,
    height: f64,
}

#[derive(Debug)]
enum Command {
    Run(Args),
    Help,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --language <en|de>          start screen language (default de)");
    eprintln!("  --max-popups <n>            live popup cap (default 8)");
    eprintln!("  --spawn-ms <ms>             popup spawn period (default 800)");
    eprintln!("  --spawn-probability <p>     chance a tick spawns a popup (default 0.7)");
    eprintln!("  --inactivity-ms <ms>        idle time before the quiz resets (default 20000)");
    eprintln!("  --width <px>, --height <px> initial window size (default 1024x768)");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  CHAOS_QUIZ_LANGUAGE, CHAOS_QUIZ_MAX_POPUPS, CHAOS_QUIZ_SPAWN_MS,");
    eprintln!("  CHAOS_QUIZ_SPAWN_PROBABILITY, CHAOS_QUIZ_INACTIVITY_MS, RUST_LOG");
}

impl Args {
    /// Environment first, then flags; flags win.
    fn parse(
        args: impl IntoIterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Command, ArgsError> {
        let mut parsed = Self {
            draft: draft_from_env(env),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        };

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--language" => {
                    parsed.draft.default_language =
                        Some(parse_value::<Language>(&mut args, "--language")?);
                }
                "--max-popups" => {
                    parsed.draft.max_popups = Some(parse_value(&mut args, "--max-popups")?);
                }
                "--spawn-ms" => {
                    parsed.draft.spawn_period_ms = Some(parse_value(&mut args, "--spawn-ms")?);
                }
                "--spawn-probability" => {
                    parsed.draft.spawn_probability =
                        Some(parse_value(&mut args, "--spawn-probability")?);
                }
                "--inactivity-ms" => {
                    parsed.draft.inactivity_timeout_ms =
                        Some(parse_value(&mut args, "--inactivity-ms")?);
                }
                "--width" => parsed.width = parse_dimension(&mut args, "--width")?,
                "--height" => parsed.height = parse_dimension(&mut args, "--height")?,
                "--help" | "-h" => return Ok(Command::Help),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Command::Run(parsed))
    }
}

/// Unparseable environment values are skipped with a warning.
fn draft_from_env(env: impl Fn(&str) -> Option<String>) -> ChaosConfigDraft {
    fn read<T: FromStr>(env: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
        let raw = env(key)?;
        let parsed = raw.trim().parse().ok();
        if parsed.is_none() {
            tracing::warn!(key, raw = %raw, "ignoring unparseable environment value");
        }
        parsed
    }

    ChaosConfigDraft {
        default_language: read(&env, "CHAOS_QUIZ_LANGUAGE"),
        max_popups: read(&env, "CHAOS_QUIZ_MAX_POPUPS"),
        spawn_period_ms: read(&env, "CHAOS_QUIZ_SPAWN_MS"),
        spawn_probability: read(&env, "CHAOS_QUIZ_SPAWN_PROBABILITY"),
        inactivity_timeout_ms: read(&env, "CHAOS_QUIZ_INACTIVITY_MS"),
        ..ChaosConfigDraft::new()
    }
}

fn load_quiz(draft: ChaosConfigDraft) -> Result<(ChaosConfig, ContentBundle), quiz_core::Error> {
    Ok((draft.validate()?, catalog::bundled()?))
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let parsed = Args::parse(std::env::args().skip(1), |key| std::env::var(key).ok())
        .map_err(|e| {
            eprintln!("{e}");
            print_usage();
            e
        })?;
    let args = match parsed {
        Command::Help => {
            print_usage();
            return Ok(());
        }
        Command::Run(args) => args,
    };

    let (config, content) = load_quiz(args.draft)?;
    let content = Arc::new(content);
    tracing::info!(
        language = %config.quiz.default_language(),
        max_popups = config.spawn.max_popups(),
        "starting chaos quiz"
    );

    let quiz_loop = QuizLoopService::new(
        config,
        Arc::clone(&content),
        Clock::default_clock(),
        Handle::current(),
        Viewport::new(args.width, args.height),
    );
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { quiz_loop, content });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Chaos Quiz")
            .with_inner_size(LogicalSize::new(args.width, args.height))
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    logging::init();
    if let Err(err) = run() {
        // Printed once here; nothing below the binary writes to stderr.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
