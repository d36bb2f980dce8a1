use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;

use learnist::api::LmsApi;
use learnist::config::Config;
use learnist::constants::PREF_AUTH_TOKEN;
use learnist::logger::{init_file_logging, Logger};
use learnist::models::{Role, User};
use learnist::prefs::PrefsStore;
use learnist::service::DataService;
use learnist::ui::core::AppContext;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;

    // Check if API token is set
    let token = match std::env::var(&config.api.api_token_env) {
        Ok(token) if !token.is_empty() => token,
        _ => {
            eprintln!("❌ Error: {} environment variable not set", config.api.api_token_env);
            eprintln!("\n💡 To use this app:");
            eprintln!("1. Get your API token from your Learnist account settings");
            eprintln!(
                "2. Set it as environment variable: export {}=your_token_here",
                config.api.api_token_env
            );
            eprintln!("3. Run the app again to see your actual data!");
            return Ok(());
        }
    };

    if let Err(e) = init_file_logging(config.logging.enabled) {
        eprintln!("⚠️  File logging unavailable: {e}");
    }
    let logger = Logger::from_config(config.logging.enabled);

    let mut prefs_store = PrefsStore::load().unwrap_or_else(|e| {
        log::warn!("Preference store unavailable, using in-memory prefs: {e}");
        PrefsStore::in_memory()
    });
    // The export-download URL is built from this stored token
    if let Err(e) = prefs_store.set(PREF_AUTH_TOKEN, &token) {
        log::warn!("Failed to persist auth token: {e}");
    }

    let api = LmsApi::new(config.api.base_url.clone(), token);
    let mut service = DataService::new(Arc::new(api), Duration::from_secs(config.cache.stale_secs));
    service.set_logger(logger.clone());

    // A failed identity lookup degrades to the student experience rather
    // than refusing to start
    let user = match service.current_user().await {
        Ok(user) => user,
        Err(e) => {
            logger.log(format!("Could not fetch current user: {e}"));
            User {
                id: String::new(),
                name: "guest".to_string(),
                email: None,
                role: Role::Student,
            }
        }
    };

    let context = AppContext::new(service, user, prefs_store, config, logger);
    learnist::ui::run_app(context).await?;

    Ok(())
}
