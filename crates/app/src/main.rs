mod seed;

use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use lingo_core::model::LessonId;
use services::{AdminService, IdentityProvider, LessonService, StaticIdentity};
use storage::repository::Storage;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

const DEFAULT_USER_ID: &str = "user_demo";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidLessonId { raw: String },
    InvalidUserId { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidLessonId { raw } => write!(f, "invalid --lesson-id value: {raw}"),
            ArgsError::InvalidUserId { raw } => write!(f, "invalid --user-id value: {raw:?}"),
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
    lesson_id: LessonId,
    identity: Arc<dyn IdentityProvider>,
    admin: Arc<AdminService>,
    lessons: Arc<LessonService>,
}

impl UiApp for DesktopApp {
    fn current_lesson_id(&self) -> LessonId {
        self.lesson_id
    }

    fn identity(&self) -> Arc<dyn IdentityProvider> {
        Arc::clone(&self.identity)
    }

    fn admin(&self) -> Arc<AdminService> {
        Arc::clone(&self.admin)
    }

    fn lessons(&self) -> Arc<LessonService> {
        Arc::clone(&self.lessons)
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    user_id: Option<String>,
    lesson_id: LessonId,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--user-id <id> | --signed-out] [--lesson-id <id>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --user-id {DEFAULT_USER_ID}");
    eprintln!("  --lesson-id 1");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  LINGO_USER_ID, LINGO_LESSON_ID, RUST_LOG");
}

impl Args {
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env_user_id: Option<String>,
        env_lesson_id: Option<String>,
    ) -> Result<Option<Self>, ArgsError> {
        let mut user_id = Some(
            env_user_id
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_USER_ID.to_string()),
        );
        let mut lesson_id = env_lesson_id
            .and_then(|value| value.parse::<LessonId>().ok())
            .unwrap_or(LessonId::new(1));

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--user-id" => {
                    let value = require_value(args, "--user-id")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidUserId { raw: value });
                    }
                    user_id = Some(value);
                }
                "--signed-out" => user_id = None,
                "--lesson-id" => {
                    let value = require_value(args, "--lesson-id")?;
                    lesson_id = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidLessonId { raw: value.clone() })?;
                }
                "--help" | "-h" => return Ok(None),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Some(Self { user_id, lesson_id }))
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(
        &mut argv,
        std::env::var("LINGO_USER_ID").ok(),
        std::env::var("LINGO_LESSON_ID").ok(),
    )
    .inspect_err(|_| print_usage())?;
    let Some(parsed) = parsed else {
        print_usage();
        return Ok(());
    };

    init_tracing();

    // Seed on a throwaway runtime; the desktop launcher drives its own event loop.
    let storage = Storage::in_memory();
    tokio::runtime::Builder::new_current_thread()
        .build()?
        .block_on(seed::seed_demo(
            &storage,
            parsed.lesson_id,
            parsed.user_id.as_deref(),
        ))?;

    let identity: Arc<dyn IdentityProvider> = Arc::new(match parsed.user_id {
        Some(user_id) => StaticIdentity::signed_in(user_id),
        None => StaticIdentity::signed_out(),
    });
    let admin = Arc::new(AdminService::new(Arc::clone(&identity)));
    tracing::info!(admin = admin.is_admin(), lesson = %parsed.lesson_id, "starting desktop shell");

    let lessons = Arc::new(LessonService::new(
        Arc::clone(&storage.lessons),
        Arc::clone(&storage.progress),
        Arc::clone(&storage.subscriptions),
    ));

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        lesson_id: parsed.lesson_id,
        identity,
        admin,
        lessons,
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Lingo")
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
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
