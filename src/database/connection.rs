use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::config::DatabaseConfig;
use crate::error::AppResult;

pub type DbConn = DatabaseConnection;

pub async fn create_connection(config: &DatabaseConfig) -> AppResult<DbConn> {
    let mut opts = ConnectOptions::new(config.url.clone());
    opts.max_connections(config.max_connections);

    let conn = Database::connect(opts).await?;
    Ok(conn)
}

pub async fn run_migrations(conn: &DbConn) -> AppResult<()> {
    Migrator::up(conn, None).await?;
    Ok(())
}
