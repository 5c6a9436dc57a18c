use sea_orm::DatabaseConnection;
use tower_sessions::SessionManagerLayer;
use tower_sessions_redis_store::RedisStore;

use crate::server::{
    cache::{AppCache, MemoryCache, RedisCache},
    config::{CacheBackend, Config},
    error::Error,
};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Connect to Valkey/Redis and configure session management
pub async fn connect_to_session(
    config: &Config,
) -> Result<SessionManagerLayer<RedisStore<tower_sessions_redis_store::fred::prelude::Pool>>, Error>
{
    use time::Duration;
    use tower_sessions::{cookie::SameSite, Expiry};
    use tower_sessions_redis_store::fred::prelude::*;

    let config = Config::from_url(&config.valkey_url)?;
    let pool = Pool::new(config, None, None, None, 6)?;

    pool.connect();
    pool.wait_for_connect().await?;

    let session_store = RedisStore::new(pool);

    // Set secure based on build mode: in development (debug) use false, otherwise true.
    let secure_cookies = !cfg!(debug_assertions);

    let session = SessionManagerLayer::new(session_store)
        .with_secure(secure_cookies)
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)));

    Ok(session)
}

/// Build the cache backend selected by configuration
pub async fn connect_to_cache(config: &Config) -> Result<AppCache, Error> {
    use fred::prelude::*;

    match config.cache_backend {
        CacheBackend::Memory => {
            tracing::info!("Using in-process cache");

            Ok(AppCache::Memory(MemoryCache::default()))
        }
        CacheBackend::Redis => {
            let redis_config = Config::from_url(&config.valkey_url)?;
            let pool = Pool::new(redis_config, None, None, None, 6)?;

            pool.connect();
            pool.wait_for_connect().await?;

            tracing::info!("Using Redis cache");

            Ok(AppCache::Redis(RedisCache::new(pool)))
        }
    }
}
