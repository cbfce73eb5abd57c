use anyhow::Result;
use clap::Parser;
use cwikli_acquire::fetch::{FetchConfig, Fetcher, DEFAULT_BASE_URL};
use cwikli_model::Session;
use std::io::Write;
use std::time::Duration;

mod shell;

#[derive(Parser)]
#[command(name = "cwikli")]
#[command(about = "cwikli, the command line Wiktionary scraper")]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("BUILD_HASH"), ")"))]
struct Cli {
    /// The two letter language code for modern languages, la for Latin, or grc for Greek
    #[arg(short, long, value_name = "lang")]
    lang: Option<String>,

    /// The word; inflected forms work often but not always. Input non-Roman characters
    /// by any native method (search works even if they do not display correctly).
    /// Accents are mandatory.
    #[arg(short, long, value_name = "word")]
    word: Option<String>,

    /// Page URL prefix the word is appended to
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Request timeout in milliseconds
    #[arg(long, default_value_t = 1000)]
    timeout_ms: u64,

    /// User-Agent header to send; none is sent by default
    #[arg(long)]
    user_agent: Option<String>,

    /// Log level: error, warn, info, debug, trace
    #[arg(long, default_value = "warn", value_enum)]
    log_level: LogLevel,

    /// Use UTC timestamps instead of local time
    #[arg(long)]
    utc: bool,
}

#[derive(Clone, clap::ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl Cli {
    fn fetch_config(&self) -> FetchConfig {
        FetchConfig {
            base_url: self.base_url.clone(),
            timeout: Duration::from_millis(self.timeout_ms),
            user_agent: self.user_agent.clone(),
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level, cli.utc);

    let fetcher = Fetcher::new(&cli.fetch_config())?;
    let session = Session {
        language_code: cli.lang,
        initial_word: cli.word,
    };

    let mut out = std::io::stdout();
    let mut prompt = shell::StdinPrompt::default();
    let exit = shell::run(&fetcher, &session, &mut out, &mut prompt).await?;
    out.flush()?;

    // Exit directly: a pending stdin read would otherwise hold up runtime shutdown.
    std::process::exit(exit.code())
}

/// Logs go to stderr so they never interleave with dictionary output.
fn init_tracing(level: &LogLevel, utc: bool) {
    // Suppress noisy HTML-parsing and connection-pool crates at debug/trace
    let level = match level {
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug,selectors=warn,html5ever=warn,hyper_util=warn",
        LogLevel::Trace => "trace,selectors=warn,html5ever=warn,hyper_util=warn",
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    // Timestamp format: 2026-02-14 19:44:09.123 -08:00
    let time_format = "%Y-%m-%d %H:%M:%S%.3f %:z";

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr);

    if utc {
        builder
            .with_timer(tracing_subscriber::fmt::time::ChronoUtc::new(time_format.to_string()))
            .init();
    } else {
        builder
            .with_timer(tracing_subscriber::fmt::time::ChronoLocal::new(time_format.to_string()))
            .init();
    }
}
