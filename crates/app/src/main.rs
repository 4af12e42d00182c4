use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{
    AppConfig, AppServices, AssessmentService, DEFAULT_LEARNER_NAME, DocumentLibrary, QuestionBank,
};
use study_core::model::{LearnerProfile, ParseTextMatchError, TextMatch};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidTextMatch(ParseTextMatchError),
    EmptyLearner,
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidTextMatch(err) => write!(f, "invalid --text-match value: {err}"),
            ArgsError::EmptyLearner => write!(f, "--learner must not be blank"),
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
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn learner(&self) -> LearnerProfile {
        self.services.learner().clone()
    }

    fn question_bank(&self) -> Arc<QuestionBank> {
        self.services.question_bank()
    }

    fn document_library(&self) -> DocumentLibrary {
        self.services.document_library()
    }

    fn assessment_service(&self) -> AssessmentService {
        self.services.assessment_service()
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Parsed {
    Run(Args),
    Help,
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    questions_path: Option<PathBuf>,
    text_match: TextMatch,
    learner_name: String,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--questions <path>] [--text-match exact|normalized] [--learner <name>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  built-in question set");
    eprintln!("  --text-match exact");
    eprintln!("  --learner \"{DEFAULT_LEARNER_NAME}\"");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  STUDY_QUESTIONS, STUDY_TEXT_MATCH, STUDY_LEARNER, RUST_LOG");
}

impl Args {
    /// Flags win over environment values; `env` looks up a variable by name.
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Parsed, ArgsError> {
        let mut questions_path = env("STUDY_QUESTIONS")
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);
        let mut text_match = match env("STUDY_TEXT_MATCH") {
            Some(raw) => raw.parse().map_err(ArgsError::InvalidTextMatch)?,
            None => TextMatch::default(),
        };
        let mut learner_name = env("STUDY_LEARNER")
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_LEARNER_NAME.to_string());

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--questions" => {
                    questions_path = Some(PathBuf::from(require_value(args, "--questions")?));
                }
                "--text-match" => {
                    let value = require_value(args, "--text-match")?;
                    text_match = value.parse().map_err(ArgsError::InvalidTextMatch)?;
                }
                "--learner" => {
                    let value = require_value(args, "--learner")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::EmptyLearner);
                    }
                    learner_name = value.trim().to_string();
                }
                "--help" | "-h" => return Ok(Parsed::Help),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Parsed::Run(Self {
            questions_path,
            text_match,
            learner_name,
        }))
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv, |name| std::env::var(name).ok()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    let args = match parsed {
        Parsed::Run(args) => args,
        Parsed::Help => {
            print_usage();
            return Ok(());
        }
    };

    init_tracing();
    tracing::info!(
        questions = ?args.questions_path,
        text_match = args.text_match.as_str(),
        "starting study hub"
    );

    let services = AppServices::new(AppConfig {
        text_match: args.text_match,
        learner_name: args.learner_name,
        questions_path: args.questions_path,
        ..AppConfig::default()
    })?;
    tracing::info!(
        questions = services.question_bank().questions().len(),
        documents = services.document_library().len(),
        "services ready"
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { services });
    let context = build_app_context(&app);

    // Some dev setups open tao windows always-on-top unless told otherwise.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Study Hub")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
