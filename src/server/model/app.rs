use sea_orm::DatabaseConnection;

use crate::server::service::auth::provider::AuthProvider;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub auth: AuthProvider,
}
