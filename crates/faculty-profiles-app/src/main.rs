use faculty_profiles_client::api::ProfileApi;
use faculty_profiles_core::config::load_config;
use faculty_profiles_core::constants::DEFAULT_PHOTO_PATH;
use faculty_profiles_ui::views::{CardGroup, CardGroupState};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    tracing::info!("Starting faculty-profiles frontpage fetch");

    let config = load_config()?;

    tracing::info!(config = ?config, "Configuration loaded");

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping debug");
    }

    let api = ProfileApi::new(&config.api.origin)?;

    let mut latest = CardGroup::new(
        "There are no new researcher profiles.",
        DEFAULT_PHOTO_PATH,
    );
    latest.fetch(&api).await;

    match latest.state() {
        CardGroupState::Loaded(cards) if cards.is_empty() => {
            tracing::info!(
                "{}",
                latest.empty_message().unwrap_or("No profiles found")
            );
        }
        CardGroupState::Loaded(cards) => {
            for card in cards {
                tracing::info!(id = %card.id, href = %card.href, "{}", card.header);
            }
        }
        CardGroupState::Loading => {
            tracing::warn!("Latest profiles could not be fetched");
        }
    }

    Ok(())
}
