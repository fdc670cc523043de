//! In-memory repositories and a scripted price source shared by unit tests.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;
use stockfolio_market_data::{MarketDataError, PriceProvider, Quote, RateLimit};

use crate::errors::{DatabaseError, Error, Result};
use crate::incomes::{Income, IncomeError, IncomeKind, IncomeRepositoryTrait};
use crate::portfolio::holdings::{
    rebuild_holding, Holding, HoldingProfileChange, HoldingRepositoryTrait,
};
use crate::utils::Clock;
use crate::transactions::{
    Transaction, TransactionError, TransactionRepositoryTrait, TransactionType,
};

pub fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Ledger entries created one minute apart in argument order.
pub fn ledger(symbol: &str, entries: &[(TransactionType, i64, Decimal)]) -> Vec<Transaction> {
    entries
        .iter()
        .enumerate()
        .map(|(n, (kind, quantity, cost))| {
            let created = at(2024, 1, 2) + chrono::Duration::minutes(n as i64);
            Transaction {
                id: format!("{}-{:03}", symbol, n),
                transaction_type: *kind,
                symbol: symbol.to_string(),
                quantity: *quantity,
                cost: *cost,
                currency: "BRL".to_string(),
                created_at: created,
                updated_at: created,
            }
        })
        .collect()
}

pub fn holding(symbol: &str, quantity: i64, cost_basis: Decimal, market_value: Decimal) -> Holding {
    Holding {
        symbol: symbol.to_string(),
        quantity,
        cost_basis,
        market_value,
        sector: None,
        category: None,
        current_price: None,
        last_price_update: None,
        created_at: at(2024, 1, 2),
        updated_at: at(2024, 1, 2),
    }
}

pub fn income(id: &str, symbol: &str, kind: IncomeKind, amount: Decimal, paid: NaiveDate) -> Income {
    Income {
        id: id.to_string(),
        symbol: symbol.to_string(),
        income_type: kind,
        amount,
        payment_date: paid,
        quantity: None,
        tax_withheld: None,
        notes: None,
        created_at: at(2024, 1, 2),
        updated_at: at(2024, 1, 2),
    }
}

/// Advances one second on every read so successive records get distinct timestamps.
/// `set` moves it anywhere, including backwards.
pub struct SteppingClock {
    next: Mutex<DateTime<Utc>>,
}

impl SteppingClock {
    pub fn starting(start: DateTime<Utc>) -> Self {
        Self {
            next: Mutex::new(start),
        }
    }

    pub fn set(&self, to: DateTime<Utc>) {
        *self.next.lock().unwrap() = to;
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let mut next = self.next.lock().unwrap();
        let now = *next;
        *next = now + chrono::Duration::seconds(1);
        now
    }

    fn timezone(&self) -> chrono_tz::Tz {
        chrono_tz::UTC
    }
}

// --- Transactions ---

#[derive(Default)]
pub struct MockTransactionRepository {
    transactions: Mutex<Vec<Transaction>>,
}

impl MockTransactionRepository {
    pub fn with_transactions(transactions: Vec<Transaction>) -> Self {
        Self {
            transactions: Mutex::new(transactions),
        }
    }
}

#[async_trait]
impl TransactionRepositoryTrait for MockTransactionRepository {
    fn get_transaction(&self, transaction_id: &str) -> Result<Transaction> {
        self.transactions
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.id == transaction_id)
            .cloned()
            .ok_or_else(|| TransactionError::NotFound(transaction_id.to_string()).into())
    }

    // Vec order is recording order.
    fn get_transactions(&self, symbol: Option<&str>) -> Result<Vec<Transaction>> {
        Ok(self
            .transactions
            .lock()
            .unwrap()
            .iter()
            .filter(|t| symbol.map_or(true, |s| t.symbol == s))
            .cloned()
            .collect())
    }

    async fn create_transaction(&self, transaction: Transaction) -> Result<Transaction> {
        self.transactions.lock().unwrap().push(transaction.clone());
        Ok(transaction)
    }

    async fn update_transaction(&self, transaction: Transaction) -> Result<Transaction> {
        let mut transactions = self.transactions.lock().unwrap();
        let slot = transactions
            .iter_mut()
            .find(|t| t.id == transaction.id)
            .ok_or_else(|| Error::from(TransactionError::NotFound(transaction.id.clone())))?;
        *slot = transaction.clone();
        Ok(transaction)
    }

    async fn delete_transaction(&self, transaction_id: &str) -> Result<Transaction> {
        let mut transactions = self.transactions.lock().unwrap();
        let index = transactions
            .iter()
            .position(|t| t.id == transaction_id)
            .ok_or_else(|| Error::from(TransactionError::NotFound(transaction_id.to_string())))?;
        Ok(transactions.remove(index))
    }
}

// --- Holdings ---

#[derive(Default)]
pub struct MockHoldingRepository {
    holdings: Mutex<HashMap<String, Holding>>,
    ledger: Option<Arc<MockTransactionRepository>>,
    fail_writes: bool,
}

impl MockHoldingRepository {
    pub fn with_holdings(holdings: Vec<Holding>) -> Self {
        Self {
            holdings: Mutex::new(holdings.into_iter().map(|h| (h.symbol.clone(), h)).collect()),
            ..Self::default()
        }
    }

    /// Syncs replay this ledger; without one every ledger is empty.
    pub fn backed_by(mut self, ledger: Arc<MockTransactionRepository>) -> Self {
        self.ledger = Some(ledger);
        self
    }

    /// Every write fails with a database error.
    pub fn failing_writes(holdings: Vec<Holding>) -> Self {
        Self {
            fail_writes: true,
            ..Self::with_holdings(holdings)
        }
    }

    fn check_writable(&self) -> Result<()> {
        if self.fail_writes {
            return Err(DatabaseError::QueryFailed("disk I/O error".to_string()).into());
        }
        Ok(())
    }
}

#[async_trait]
impl HoldingRepositoryTrait for MockHoldingRepository {
    fn get_holdings(&self) -> Result<Vec<Holding>> {
        let mut holdings: Vec<Holding> = self.holdings.lock().unwrap().values().cloned().collect();
        holdings.sort_by(|a, b| a.symbol.cmp(&b.symbol));
        Ok(holdings)
    }

    fn get_holding(&self, symbol: &str) -> Result<Option<Holding>> {
        Ok(self.holdings.lock().unwrap().get(symbol).cloned())
    }

    async fn sync_holding(&self, symbol: &str, at: DateTime<Utc>) -> Result<Option<Holding>> {
        self.check_writable()?;
        let transactions = match &self.ledger {
            Some(ledger) => ledger.get_transactions(Some(symbol))?,
            None => Vec::new(),
        };
        let mut holdings = self.holdings.lock().unwrap();
        let existing = holdings.get(symbol).cloned();
        match rebuild_holding(symbol, &transactions, existing, at) {
            Some(holding) => {
                holdings.insert(symbol.to_string(), holding.clone());
                Ok(Some(holding))
            }
            None => {
                holdings.remove(symbol);
                Ok(None)
            }
        }
    }

    async fn update_holding_profile(
        &self,
        symbol: &str,
        change: HoldingProfileChange,
        at: DateTime<Utc>,
    ) -> Result<Option<Holding>> {
        self.check_writable()?;
        let mut holdings = self.holdings.lock().unwrap();
        let Some(holding) = holdings.get_mut(symbol) else {
            return Ok(None);
        };
        if let Some(sector) = change.sector {
            holding.sector = sector;
        }
        if let Some(category) = change.category {
            holding.category = category;
        }
        holding.updated_at = at;
        Ok(Some(holding.clone()))
    }

    async fn update_holding_price(
        &self,
        symbol: &str,
        price: Decimal,
        at: DateTime<Utc>,
    ) -> Result<Option<Holding>> {
        self.check_writable()?;
        let mut holdings = self.holdings.lock().unwrap();
        let Some(current) = holdings.get(symbol).cloned() else {
            return Ok(None);
        };
        let priced = current.with_price(price, at);
        holdings.insert(symbol.to_string(), priced.clone());
        Ok(Some(priced))
    }
}

// --- Incomes ---

#[derive(Default)]
pub struct MockIncomeRepository {
    incomes: Mutex<Vec<Income>>,
}

impl MockIncomeRepository {
    pub fn with_incomes(incomes: Vec<Income>) -> Self {
        Self {
            incomes: Mutex::new(incomes),
        }
    }
}

#[async_trait]
impl IncomeRepositoryTrait for MockIncomeRepository {
    fn get_income(&self, income_id: &str) -> Result<Income> {
        self.incomes
            .lock()
            .unwrap()
            .iter()
            .find(|i| i.id == income_id)
            .cloned()
            .ok_or_else(|| IncomeError::NotFound(income_id.to_string()).into())
    }

    fn get_incomes(&self, symbol: Option<&str>) -> Result<Vec<Income>> {
        let mut found: Vec<Income> = self
            .incomes
            .lock()
            .unwrap()
            .iter()
            .filter(|i| symbol.map_or(true, |s| i.symbol == s))
            .cloned()
            .collect();
        found.sort_by(|a, b| b.payment_date.cmp(&a.payment_date));
        Ok(found)
    }

    async fn create_income(&self, income: Income) -> Result<Income> {
        self.incomes.lock().unwrap().push(income.clone());
        Ok(income)
    }

    async fn update_income(&self, income: Income) -> Result<Income> {
        let mut incomes = self.incomes.lock().unwrap();
        let slot = incomes
            .iter_mut()
            .find(|i| i.id == income.id)
            .ok_or_else(|| Error::from(IncomeError::NotFound(income.id.clone())))?;
        *slot = income.clone();
        Ok(income)
    }

    async fn delete_income(&self, income_id: &str) -> Result<Income> {
        let mut incomes = self.incomes.lock().unwrap();
        let index = incomes
            .iter()
            .position(|i| i.id == income_id)
            .ok_or_else(|| Error::from(IncomeError::NotFound(income_id.to_string())))?;
        Ok(incomes.remove(index))
    }
}

// --- Price source ---

/// Scripted answers per symbol, recording the order of calls.
pub struct MockPriceProvider {
    answers: Mutex<HashMap<String, VecDeque<std::result::Result<Decimal, MarketDataError>>>>,
    pub calls: Arc<Mutex<Vec<String>>>,
    min_delay: Duration,
}

impl MockPriceProvider {
    pub fn new() -> Self {
        Self {
            answers: Mutex::new(HashMap::new()),
            calls: Arc::new(Mutex::new(Vec::new())),
            min_delay: Duration::ZERO,
        }
    }

    pub fn with_min_delay(mut self, min_delay: Duration) -> Self {
        self.min_delay = min_delay;
        self
    }

    pub fn answer(self, symbol: &str, answer: std::result::Result<Decimal, MarketDataError>) -> Self {
        self.answers
            .lock()
            .unwrap()
            .entry(symbol.to_string())
            .or_default()
            .push_back(answer);
        self
    }
}

#[async_trait]
impl PriceProvider for MockPriceProvider {
    fn id(&self) -> &'static str {
        "MOCK"
    }

    fn rate_limit(&self) -> RateLimit {
        RateLimit {
            requests_per_minute: 60,
            min_delay: self.min_delay,
        }
    }

    async fn get_latest_quote(&self, symbol: &str) -> std::result::Result<Quote, MarketDataError> {
        self.calls.lock().unwrap().push(symbol.to_string());
        let answer = self
            .answers
            .lock()
            .unwrap()
            .get_mut(symbol)
            .and_then(|queue| queue.pop_front())
            .unwrap_or_else(|| Err(MarketDataError::SymbolNotFound(symbol.to_string())));
        answer.map(|price| Quote::new(symbol, at(2025, 6, 1), price, "MOCK"))
    }
}
