use sea_orm::DatabaseConnection;

use crate::server::cache::AppCache;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub cache: AppCache,
}
