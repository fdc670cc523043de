use async_trait::async_trait;

use super::incomes_model::{Income, IncomeUpdate, NewIncome};
use crate::Result;

#[async_trait]
pub trait IncomeRepositoryTrait: Send + Sync {
    fn get_income(&self, income_id: &str) -> Result<Income>;
    /// Most recent payment first.
    fn get_incomes(&self, symbol: Option<&str>) -> Result<Vec<Income>>;
    async fn create_income(&self, income: Income) -> Result<Income>;
    async fn update_income(&self, income: Income) -> Result<Income>;
    async fn delete_income(&self, income_id: &str) -> Result<Income>;
}

#[async_trait]
pub trait IncomeServiceTrait: Send + Sync {
    fn get_income(&self, income_id: &str) -> Result<Income>;
    fn get_incomes(&self, symbol: Option<&str>) -> Result<Vec<Income>>;
    async fn create_income(&self, new_income: NewIncome) -> Result<Income>;
    async fn update_income(&self, update: IncomeUpdate) -> Result<Income>;
    async fn delete_income(&self, income_id: &str) -> Result<Income>;
}
