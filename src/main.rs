use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use concierge::error_fmt::{AppError, IoResultExt, SettingsResultExt};
use concierge::{
    repl, ApiClient, ApiKeys, ConciergeContext, ReqwestTransport, Settings, CONFIG_FILE,
};

const DATA_DIR: &str = ".concierge";
const LOG_ENV: &str = "CONCIERGE_LOG";

#[derive(Parser)]
#[command(name = "concierge")]
#[command(about = "Personal CLI helper: weather, jokes, news, currency conversion and tasks")]
struct Cli {
    /// Directory holding tasks.yml and config.yml
    #[arg(long, env = "CONCIERGE_DIR", default_value = DATA_DIR)]
    dir: PathBuf,
    /// Log debug output to stderr
    #[arg(long, short)]
    verbose: bool,
}

fn main() {
    // Real environment variables win over .env entries.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(&cli) {
        eprint!("{}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "concierge=debug"
    } else {
        "concierge=warn"
    };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<(), AppError> {
    let config_path = cli.dir.join(CONFIG_FILE);
    let settings = Settings::load(&config_path).with_path(&config_path.display().to_string())?;

    let keys = ApiKeys::from_env();
    debug!(dir = %cli.dir.display(), ?keys, "starting session");

    let transport = ReqwestTransport::new(settings.http.timeout())?;
    let api = ApiClient::new(Box::new(transport), keys, &settings);
    let mut ctx = ConciergeContext::new(cli.dir.clone(), settings, api);

    let stdin = io::stdin();
    repl::run(&mut ctx, stdin.lock(), io::stdout().lock()).with_context("terminal I/O failed")
}
