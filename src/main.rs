use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::{debug, info, warn};
use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use aquarhone::domain::ports::CredentialStorePort;
use aquarhone::infrastructure::{
    AppConfig, BookingClient, CliArgs, CredentialBackend, FileCredentialStore,
    KeyringCredentialStore, RequestGateway, ReqwestTransport, StorageManager,
};
use aquarhone::presentation::App;

/// Log layer used when no log file is configured.
fn console_layer<S, W>(writer: W) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    fmt::layer().with_writer(writer).with_ansi(false).with_target(false)
}

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_directive()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(console_layer(std::io::stderr))
            .init();
    }

    Ok(())
}

fn credential_store(config: &AppConfig, storage: &StorageManager) -> Arc<dyn CredentialStorePort> {
    match config.storage.backend {
        CredentialBackend::File => {
            let store = config
                .storage
                .credential_path
                .clone()
                .map_or_else(|| FileCredentialStore::in_dir(storage.data_dir()), FileCredentialStore::new);
            debug!(path = %store.path().display(), "Using file credential store");
            Arc::new(store)
        }
        CredentialBackend::Keyring => {
            debug!("Using keyring credential store");
            Arc::new(KeyringCredentialStore::new())
        }
    }
}

fn create_app(args: &CliArgs) -> Result<App> {
    let storage = StorageManager::new()?;
    let mut config = storage.load_config(args.config.as_deref())?;
    config.merge_with_args(args);

    init_logging(&config)?;

    info!(
        name = aquarhone::NAME,
        version = aquarhone::VERSION,
        api = %config.api.base_url,
        "Starting Aquarhone"
    );

    let transport = Arc::new(ReqwestTransport::new(config.api.request_timeout())?);
    let credentials = credential_store(&config, &storage);
    let gateway = RequestGateway::new(transport, credentials.clone(), config.api.base_url);
    let client = Arc::new(BookingClient::new(gateway));

    Ok(App::new(client.clone(), client, credentials))
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();
    color_eyre::install()?;

    let args = CliArgs::parse();
    let app = create_app(&args)?;

    match app.run(args.command, &mut std::io::stderr()).await {
        Ok(output) => {
            println!("{}", output.trim_end());
            if let Some(hint) = app.next_step() {
                println!("{hint}");
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            if e.is_local() {
                debug!(error = %e, "Command refused before reaching the API");
            } else {
                warn!(error = %e, "Command failed");
            }

            eprintln!("error: {e}");
            if let Some(hint) = app.next_step() {
                eprintln!("{hint}");
            }
            Ok(ExitCode::FAILURE)
        }
    }
}
