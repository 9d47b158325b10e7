use crate::config::Config;
use crate::db::Database;

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            db: Database::new(config.database_url.clone()),
        }
    }
}
