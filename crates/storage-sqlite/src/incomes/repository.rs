use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use stockfolio_core::incomes::{Income, IncomeError, IncomeRepositoryTrait};
use stockfolio_core::{Error, Result};

use super::model::IncomeDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::{IntoCore, StorageError};
use crate::schema::incomes;

/// Repository for dividends and other distributions
pub struct IncomeRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl IncomeRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

fn find_income(conn: &mut SqliteConnection, income_id: &str) -> Result<Income> {
    let row = incomes::table
        .find(income_id)
        .select(IncomeDB::as_select())
        .first::<IncomeDB>(conn)
        .optional()
        .into_core()?
        .ok_or_else(|| Error::from(IncomeError::NotFound(income_id.to_string())))?;
    Income::try_from(row).map_err(Error::from)
}

#[async_trait]
impl IncomeRepositoryTrait for IncomeRepository {
    fn get_income(&self, income_id: &str) -> Result<Income> {
        let mut conn = get_connection(&self.pool)?;
        find_income(&mut conn, income_id)
    }

    fn get_incomes(&self, symbol: Option<&str>) -> Result<Vec<Income>> {
        let mut conn = get_connection(&self.pool)?;

        let mut query = incomes::table.select(IncomeDB::as_select()).into_boxed();
        if let Some(symbol) = symbol {
            query = query.filter(incomes::symbol.eq(symbol.to_string()));
        }

        query
            .order((
                incomes::payment_date.desc(),
                incomes::created_at.desc(),
                incomes::id.desc(),
            ))
            .load::<IncomeDB>(&mut conn)
            .into_core()?
            .into_iter()
            .map(Income::try_from)
            .collect::<std::result::Result<Vec<_>, StorageError>>()
            .into_core()
    }

    async fn create_income(&self, income: Income) -> Result<Income> {
        let row = IncomeDB::from(&income);

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Income> {
                diesel::insert_into(incomes::table)
                    .values(&row)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(income)
            })
            .await
    }

    async fn update_income(&self, income: Income) -> Result<Income> {
        let row = IncomeDB::from(&income);

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Income> {
                let changed = diesel::update(incomes::table.find(&row.id))
                    .set(&row)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                if changed == 0 {
                    return Err(IncomeError::NotFound(row.id).into());
                }
                Ok(income)
            })
            .await
    }

    async fn delete_income(&self, income_id: &str) -> Result<Income> {
        let income_id = income_id.to_string();

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Income> {
                let existing = find_income(conn, &income_id)?;
                diesel::delete(incomes::table.find(&income_id))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(existing)
            })
            .await
    }
}
