//! MongoDB implementation of the URL repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mongodb::bson::{Document, doc, oid::ObjectId};
use mongodb::options::{ClientOptions, IndexOptions};
use mongodb::{Client, Collection, Database, IndexModel};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::Config;
use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::repositories::{StorageError, UrlRepository};

/// Stored document layout, one per short URL.
#[derive(Debug, Serialize, Deserialize)]
struct UrlDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    original_url: String,
    short_code: String,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    created_at: DateTime<Utc>,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    expires_at: DateTime<Utc>,
    clicks: i64,
}

impl From<&NewUrlRecord> for UrlDocument {
    fn from(new_record: &NewUrlRecord) -> Self {
        Self {
            id: None,
            original_url: new_record.original_url.clone(),
            short_code: new_record.short_code.clone(),
            created_at: new_record.created_at,
            expires_at: new_record.expires_at,
            clicks: 0,
        }
    }
}

impl From<UrlDocument> for UrlRecord {
    fn from(document: UrlDocument) -> Self {
        Self {
            id: document.id.map(|id| id.to_hex()).unwrap_or_default(),
            original_url: document.original_url,
            short_code: document.short_code,
            created_at: document.created_at,
            expires_at: document.expires_at,
            clicks: u64::try_from(document.clicks).unwrap_or(0),
        }
    }
}

impl From<mongodb::error::Error> for StorageError {
    fn from(e: mongodb::error::Error) -> Self {
        Self::Backend(e.to_string())
    }
}

fn by_short_code(short_code: &str) -> Document {
    doc! { "short_code": short_code }
}

/// MongoDB repository for URL records.
///
/// The client is cheap to share: it pools connections internally.
pub struct MongoUrlRepository {
    client: Client,
    database: Database,
    collection: Collection<UrlDocument>,
}

impl MongoUrlRepository {
    /// Connects to MongoDB and verifies the server answers a ping.
    ///
    /// Both the connection and the ping are bounded by
    /// `config.store_connect_timeout()`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Backend`] if the URI is invalid or the server is
    /// unreachable, [`StorageError::Timeout`] if the ping does not answer in time.
    pub async fn connect(config: &Config) -> Result<Self, StorageError> {
        let connect_timeout = config.store_connect_timeout();

        let mut options = ClientOptions::parse(&config.mongo_uri).await?;
        options.app_name = Some(env!("CARGO_PKG_NAME").to_string());
        options.connect_timeout = Some(connect_timeout);
        options.server_selection_timeout = Some(connect_timeout);

        let client = Client::with_options(options)?;
        let repository = Self::from_client(client, &config.mongo_db, &config.mongo_collection);

        tokio::time::timeout(connect_timeout, repository.ping())
            .await
            .unwrap_or(Err(StorageError::Timeout {
                operation: "ping",
                after: connect_timeout,
            }))?;

        info!(
            database = %config.mongo_db,
            collection = %config.mongo_collection,
            "Connected to MongoDB"
        );

        Ok(repository)
    }

    /// Wraps an existing client.
    pub fn from_client(client: Client, database: &str, collection: &str) -> Self {
        let database = client.database(database);
        let collection = database.collection(collection);

        Self {
            client,
            database,
            collection,
        }
    }

    /// Sends a `ping` command to the server.
    pub async fn ping(&self) -> Result<(), StorageError> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    /// Creates the lookup index on `short_code`.
    ///
    /// The index is not unique; code uniqueness stays probabilistic.
    pub async fn ensure_indexes(&self) -> Result<(), StorageError> {
        let index = IndexModel::builder()
            .keys(doc! { "short_code": 1 })
            .options(
                IndexOptions::builder()
                    .name("short_code_lookup".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(index).await?;
        debug!("Index on short_code ensured");

        Ok(())
    }

    /// Closes the client, waiting for in-progress operations to finish.
    pub async fn close(&self) {
        self.client.clone().shutdown().await;
        info!("Disconnected from MongoDB");
    }
}

#[async_trait]
impl UrlRepository for MongoUrlRepository {
    async fn insert(&self, new_record: NewUrlRecord) -> Result<UrlRecord, StorageError> {
        let document = UrlDocument::from(&new_record);
        let result = self.collection.insert_one(&document).await?;

        let id = result
            .inserted_id
            .as_object_id()
            .map(|id| id.to_hex())
            .unwrap_or_else(|| result.inserted_id.to_string());

        Ok(UrlRecord::from_new(id, new_record))
    }

    async fn find_by_short_code(
        &self,
        short_code: &str,
    ) -> Result<Option<UrlRecord>, StorageError> {
        let document = self.collection.find_one(by_short_code(short_code)).await?;
        Ok(document.map(UrlRecord::from))
    }

    async fn increment_click_count(&self, short_code: &str) -> Result<(), StorageError> {
        self.collection
            .update_one(by_short_code(short_code), doc! { "$inc": { "clicks": 1_i64 } })
            .await?;
        Ok(())
    }
}
