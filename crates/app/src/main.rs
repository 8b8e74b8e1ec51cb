use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, LogicalSize, WindowBuilder};
use quiz_core::RandomSource;
use services::QuestionLoader;
use storage::{BUNDLED_RESOURCE, FileQuestionStore};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt as log_fmt, prelude::*};
use ui::{App, UiApp, build_app_context};

const QUESTIONS_ENV: &str = "QUIZ_QUESTIONS";
const SEED_ENV: &str = "QUIZ_SEED";

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidSeed { raw: String },
    InvalidQuestionsPath { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidSeed { raw } => write!(f, "invalid --seed value: {raw}"),
            ArgsError::InvalidQuestionsPath { raw } => {
                write!(f, "invalid --questions value: {raw:?}")
            }
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

struct DesktopApp {
    loader: QuestionLoader,
    random: RandomSource,
}

impl UiApp for DesktopApp {
    fn question_loader(&self) -> QuestionLoader {
        self.loader.clone()
    }

    fn random_source(&self) -> RandomSource {
        self.random.clone()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Args {
    questions: Option<PathBuf>,
    seed: Option<u64>,
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Run(Args),
    Help,
}

fn usage() -> String {
    format!(
        "Usage:\n  cargo run -p app -- [--questions <path>] [--seed <u64>]\n\n\
         Defaults:\n  --questions  bundled {BUNDLED_RESOURCE}\n  \
         --seed       none (random jumps use the thread RNG)\n\n\
         Environment:\n  {QUESTIONS_ENV}, {SEED_ENV}, RUST_LOG\n"
    )
}

/// Text printed when `run` fails. Argument errors get the usage appended.
fn failure_report(err: &(dyn std::error::Error + 'static)) -> String {
    if err.is::<ArgsError>() {
        format!("{err}\n{}", usage())
    } else {
        format!("{err}\n")
    }
}

impl Args {
    fn parse(
        args: impl IntoIterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Command, ArgsError> {
        let mut questions = env(QUESTIONS_ENV)
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);
        let mut seed = env(SEED_ENV).and_then(|value| match value.trim().parse::<u64>() {
            Ok(seed) => Some(seed),
            Err(_) => {
                warn!(value = %value, "ignoring unparsable {SEED_ENV}");
                None
            }
        });

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--questions" => {
                    let value = require_value(&mut args, "--questions")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidQuestionsPath { raw: value });
                    }
                    questions = Some(PathBuf::from(value));
                }
                "--seed" => {
                    let value = require_value(&mut args, "--seed")?;
                    let parsed: u64 = value
                        .trim()
                        .parse()
                        .map_err(|_| ArgsError::InvalidSeed { raw: value.clone() })?;
                    seed = Some(parsed);
                }
                "--help" | "-h" => return Ok(Command::Help),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Command::Run(Self { questions, seed }))
    }

    fn question_loader(&self) -> QuestionLoader {
        match &self.questions {
            Some(path) => QuestionLoader::new(Arc::new(FileQuestionStore::new(path))),
            None => QuestionLoader::bundled(),
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(log_fmt::layer().with_target(false))
        .with(filter)
        .init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let parsed = Args::parse(std::env::args().skip(1), |key| std::env::var(key).ok())?;

    let args = match parsed {
        Command::Help => {
            eprint!("{}", usage());
            return Ok(());
        }
        Command::Run(args) => args,
    };

    match &args.questions {
        Some(path) => info!(path = %path.display(), "using question file"),
        None => info!(resource = BUNDLED_RESOURCE, "using bundled questions"),
    }

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        loader: args.question_loader(),
        random: RandomSource::from_seed(args.seed),
    });
    let context = build_app_context(&app);

    // Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Truth or Bull")
            .with_inner_size(LogicalSize::new(420.0, 720.0))
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
    if let Err(err) = run() {
        eprint!("{}", failure_report(err.as_ref()));
        std::process::exit(2);
    }
}
