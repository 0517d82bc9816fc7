use std::time::Duration;

/// Delay between the last keystroke and the directory lookup
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

/// Number of rows in the top performers / top losers rankings
pub const DEFAULT_RANKING_SIZE: usize = 5;

/// Sector assigned to instruments added without a known classification
pub const DEFAULT_SECTOR: &str = "Technology";

/// Decimal places kept for prices and percentage changes
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Decimal places kept for sector allocation shares
pub const ALLOCATION_DECIMAL_PRECISION: u32 = 1;

/// Wait before retrying a quote fetch that failed transiently
pub const QUOTE_RETRY_BACKOFF: Duration = Duration::from_secs(1);
