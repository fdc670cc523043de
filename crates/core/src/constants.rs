/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Sector assigned to a holding that has none yet
pub const DEFAULT_SECTOR: &str = "Unknown";

/// Category assigned to a holding that has none yet
pub const DEFAULT_CATEGORY: &str = "Stock";

/// Group name used when a holding has no sector or category
pub const UNKNOWN_GROUP: &str = "Unknown";

/// Number of transactions listed in a portfolio summary
pub const RECENT_OPERATIONS_LIMIT: usize = 5;

/// Number of holdings listed as top performers
pub const TOP_PERFORMERS_LIMIT: usize = 5;

/// Number of income records listed in an income summary
pub const RECENT_INCOMES_LIMIT: usize = 10;

/// Days per month used by the monthly income average
pub const DAYS_PER_AVERAGE_MONTH: i64 = 30;

/// Default currency for new transactions
pub const DEFAULT_CURRENCY: &str = "BRL";
