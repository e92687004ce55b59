use anyhow::Result;
use clap::Parser;
use locale_sync::config::{self, Config};
use locale_sync::locale;
use locale_sync::sync;
use locale_sync::translate::GoogleTranslator;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "locale-sync",
    version,
    about = "Keep per-locale YAML files in sync with a reference locale"
)]
struct Cli {
    /// Directory to search for locale files
    #[arg(short, long, default_value = ".")]
    path: PathBuf,

    /// BCP-47 identifier of the reference locale
    #[arg(short, long, default_value = config::DEFAULT_REFERENCE_LOCALE)]
    reference: String,

    /// Comma-separated list of BCP-47 target locales
    #[arg(
        short,
        long,
        value_delimiter = ',',
        default_value = config::DEFAULT_TARGET_LOCALE
    )]
    targets: Vec<String>,

    /// Glob used to find reference files (defaults to "**/<reference>.{yml,yaml}")
    #[arg(short, long)]
    glob: Option<String>,

    /// JSON file holding the translation API key
    #[arg(short, long, default_value = config::DEFAULT_KEY_FILE)]
    key_file: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (optional in any environment)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("locale_sync=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    // Setup validation: bad locale tags or credentials are the only failures
    // that affect the exit status. Everything later is recovered per key or
    // per locale pair.
    locale::language_subtag(&cli.reference)?;
    for target in &cli.targets {
        locale::language_subtag(target)?;
    }
    let api_key = config::load_api_key(&cli.key_file)?;

    let config = Config {
        glob: cli
            .glob
            .unwrap_or_else(|| Config::default_glob(&cli.reference)),
        root: cli.path,
        reference_locale: cli.reference,
        target_locales: cli.targets,
    };

    let translator = GoogleTranslator::new(api_key);
    let report = sync::run(&config, &translator).await?;

    info!(
        "Done: {} files written, {} leaves translated, {} failed, {} pairs skipped",
        report.files_written, report.leaves_translated, report.leaves_failed, report.pairs_skipped
    );
    Ok(())
}
