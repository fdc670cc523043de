use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use rust_decimal::Decimal;

use stockfolio_core::portfolio::holdings::{
    rebuild_holding, Holding, HoldingProfileChange, HoldingRepositoryTrait,
};
use stockfolio_core::Result;

use super::model::{HoldingDB, HoldingProfileDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::{IntoCore, StorageError};
use crate::schema::holdings;
use crate::transactions::load_ledger;

pub struct HoldingRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl HoldingRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

fn find_holding(conn: &mut SqliteConnection, symbol: &str) -> Result<Option<Holding>> {
    holdings::table
        .find(symbol)
        .select(HoldingDB::as_select())
        .first::<HoldingDB>(conn)
        .optional()
        .into_core()?
        .map(Holding::try_from)
        .transpose()
        .into_core()
}

fn store_holding(conn: &mut SqliteConnection, holding: &Holding) -> Result<()> {
    let row = HoldingDB::from(holding);
    diesel::insert_into(holdings::table)
        .values(&row)
        .on_conflict(holdings::symbol)
        .do_update()
        .set(&row)
        .execute(conn)
        .map_err(StorageError::from)?;
    Ok(())
}

#[async_trait]
impl HoldingRepositoryTrait for HoldingRepository {
    fn get_holdings(&self) -> Result<Vec<Holding>> {
        let mut conn = get_connection(&self.pool)?;

        holdings::table
            .select(HoldingDB::as_select())
            .order(holdings::symbol.asc())
            .load::<HoldingDB>(&mut conn)
            .into_core()?
            .into_iter()
            .map(Holding::try_from)
            .collect::<std::result::Result<Vec<_>, StorageError>>()
            .into_core()
    }

    fn get_holding(&self, symbol: &str) -> Result<Option<Holding>> {
        let mut conn = get_connection(&self.pool)?;
        find_holding(&mut conn, symbol)
    }

    async fn sync_holding(&self, symbol: &str, at: DateTime<Utc>) -> Result<Option<Holding>> {
        let symbol = symbol.to_string();

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Option<Holding>> {
                let ledger = load_ledger(conn, Some(&symbol))?;
                let existing = find_holding(conn, &symbol)?;
                let had_holding = existing.is_some();

                match rebuild_holding(&symbol, &ledger, existing, at) {
                    Some(holding) => {
                        store_holding(conn, &holding)?;
                        Ok(Some(holding))
                    }
                    None => {
                        if had_holding {
                            diesel::delete(holdings::table.find(&symbol))
                                .execute(conn)
                                .map_err(StorageError::from)?;
                        }
                        Ok(None)
                    }
                }
            })
            .await
    }

    async fn update_holding_profile(
        &self,
        symbol: &str,
        change: HoldingProfileChange,
        at: DateTime<Utc>,
    ) -> Result<Option<Holding>> {
        let symbol = symbol.to_string();
        let changes = HoldingProfileDB::new(change, at);

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Option<Holding>> {
                let changed = diesel::update(holdings::table.find(&symbol))
                    .set(&changes)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                if changed == 0 {
                    return Ok(None);
                }
                find_holding(conn, &symbol)
            })
            .await
    }

    async fn update_holding_price(
        &self,
        symbol: &str,
        price: Decimal,
        at: DateTime<Utc>,
    ) -> Result<Option<Holding>> {
        let symbol = symbol.to_string();

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Option<Holding>> {
                let Some(existing) = find_holding(conn, &symbol)? else {
                    return Ok(None);
                };
                let priced = existing.with_price(price, at);
                let row = HoldingDB::from(&priced);
                diesel::update(holdings::table.find(&symbol))
                    .set(&row)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(Some(priced))
            })
            .await
    }
}
