use crate::domain::{collector::entity::collector, monitor::entity::monitor};
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, Schema, Statement,
};
use tracing::info;

/// Open the shared database connection and make sure the tables exist.
///
/// The pool is capped at a single connection: the whole server shares one
/// SQLite handle, and it also keeps `sqlite::memory:` databases alive
/// across statements in tests.
pub async fn establish_connection(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(database_url.to_owned());
    options.max_connections(1).sqlx_logging(false);

    let db = Database::connect(options).await?;
    info!("Successfully connected to the database.");

    create_tables(&db).await?;

    Ok(db)
}

/// `CREATE TABLE IF NOT EXISTS` for every entity, built from the entity
/// definitions themselves. The two tables are independent, so order does
/// not matter.
async fn create_tables(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    create_table_if_not_exists(db, &schema, collector::Entity).await?;
    create_table_if_not_exists(db, &schema, monitor::Entity).await?;

    info!("Database schema synchronization completed.");
    Ok(())
}

async fn create_table_if_not_exists<E>(
    db: &DatabaseConnection,
    schema: &Schema,
    entity: E,
) -> Result<(), DbErr>
where
    E: sea_orm::EntityTrait,
{
    let backend = db.get_database_backend();
    let create_stmt: Statement =
        backend.build(schema.create_table_from_entity(entity).if_not_exists());

    match db.execute(create_stmt).await {
        Ok(_) => Ok(()),
        Err(e) => {
            tracing::error!("Failed to create table: {}", e);
            Err(e)
        }
    }
}
