//! Persistence layer over the `resource_prices` table.
//!
//! The table is append-only history: rows are batch-inserted by the fetcher
//! and never updated or deleted.

use chrono::{DateTime, Utc};
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, FromQueryResult, Order,
    QueryFilter, QueryOrder, QuerySelect, Set, Statement, TransactionTrait,
};

use crate::entities::{prelude::*, resource_prices};

/// One staged price row, produced by the fetcher before insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceObservation {
    pub resource: String,
    pub price: f64,
    pub timestamp: DateTime<Utc>,
}

/// Unweighted arithmetic mean over all stored prices of one resource.
#[derive(Debug, FromQueryResult)]
pub struct ResourceAverage {
    pub resource: String,
    pub average_price: f64,
}

#[derive(Clone)]
pub struct PriceStore {
    db: DatabaseConnection,
}

impl PriceStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert a batch of observations atomically: all rows visible or none.
    pub async fn insert_batch(&self, observations: &[PriceObservation]) -> Result<usize, DbErr> {
        if observations.is_empty() {
            return Ok(0);
        }

        let rows: Vec<resource_prices::ActiveModel> = observations
            .iter()
            .map(|obs| resource_prices::ActiveModel {
                resource: Set(obs.resource.clone()),
                price: Set(obs.price),
                timestamp: Set(obs.timestamp.fixed_offset()),
                ..Default::default()
            })
            .collect();

        let txn = self.db.begin().await?;
        ResourcePrices::insert_many(rows).exec(&txn).await?;
        txn.commit().await?;

        Ok(observations.len())
    }

    /// Every stored row, store default order.
    pub async fn all(&self) -> Result<Vec<resource_prices::Model>, DbErr> {
        ResourcePrices::find().all(&self.db).await
    }

    /// All rows for one resource, exact name match.
    pub async fn by_resource(&self, name: &str) -> Result<Vec<resource_prices::Model>, DbErr> {
        ResourcePrices::find()
            .filter(resource_prices::Column::Resource.eq(name))
            .all(&self.db)
            .await
    }

    /// The `limit` most recent rows for one resource, newest first.
    /// Callers reverse to oldest-first before serving.
    pub async fn trend(
        &self,
        name: &str,
        limit: u64,
    ) -> Result<Vec<resource_prices::Model>, DbErr> {
        ResourcePrices::find()
            .filter(resource_prices::Column::Resource.eq(name))
            .order_by(resource_prices::Column::Timestamp, Order::Desc)
            .limit(limit)
            .all(&self.db)
            .await
    }

    /// One row per distinct resource present in the table.
    pub async fn average_by_resource(&self) -> Result<Vec<ResourceAverage>, DbErr> {
        ResourceAverage::find_by_statement(Statement::from_string(
            self.db.get_database_backend(),
            "SELECT resource, AVG(price) AS average_price \
             FROM resource_prices GROUP BY resource ORDER BY resource",
        ))
        .all(&self.db)
        .await
    }

    /// Trivial connectivity probe for the health route.
    pub async fn ping(&self) -> Result<(), DbErr> {
        self.db.ping().await
    }
}
