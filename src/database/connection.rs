use anyhow::Result;
use mongodb::bson::doc;
use mongodb::options::{ClientOptions, IndexOptions};
use mongodb::{Client, Collection, Database, IndexModel};
use tracing::info;

use crate::database::models::Training;

#[derive(Clone)]
pub struct DatabaseManager {
    pub db: Database,
    pub trainings: Collection<Training>,
}

impl DatabaseManager {
    /// Builds the client handle. The driver connects lazily, so this does
    /// not verify the server is reachable; `ping` does.
    pub async fn connect(uri: &str, db_name: &str) -> Result<Self> {
        let mut options = ClientOptions::parse(uri).await?;
        options.app_name = Some(env!("CARGO_PKG_NAME").to_string());

        let client = Client::with_options(options)?;
        let db = client.database(db_name);
        let trainings = db.collection::<Training>("trainings");

        Ok(Self { db, trainings })
    }

    /// Creates the compound ascending index on (user_id, date) that backs
    /// every per-user date-range query. Safe to call on every startup.
    pub async fn ensure_indexes(&self) -> Result<()> {
        info!("Ensuring index on trainings (user_id, date)");
        let index = IndexModel::builder()
            .keys(doc! { "user_id": 1, "date": 1 })
            .options(
                IndexOptions::builder()
                    .name("user_id_date_asc".to_string())
                    .build(),
            )
            .build();
        self.trainings.create_index(index, None).await?;
        Ok(())
    }

    pub async fn ping(&self) -> Result<()> {
        self.db.run_command(doc! { "ping": 1 }, None).await?;
        Ok(())
    }
}
