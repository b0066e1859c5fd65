use railway_store::DbClient;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DbClient>,
}
