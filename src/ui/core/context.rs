use crate::{config::Config, logger::Logger, models::User, prefs::PrefsStore, service::DataService};

/// Shared services handed to the composition root at startup.
pub struct AppContext {
    pub service: DataService,
    pub user: User,
    pub prefs_store: PrefsStore,
    pub config: Config,
    pub logger: Logger,
}

impl AppContext {
    pub fn new(service: DataService, user: User, prefs_store: PrefsStore, config: Config, logger: Logger) -> Self {
        Self {
            service,
            user,
            prefs_store,
            config,
            logger,
        }
    }
}
