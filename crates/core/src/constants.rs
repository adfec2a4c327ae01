/// Streak record key for the rating-based "overall" streak
pub const OVERALL_STREAK_ID: &str = "overall";

/// Minimum daily rating that counts as a successful day for the overall streak
pub const OVERALL_SUCCESS_RATING: u8 = 3;

/// Allowed daily rating range
pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// Length of the trailing chart windows, in days
pub const TRAILING_WINDOW_DAYS: u32 = 7;

/// Logical length of a spend cycle, independent of the calendar month
pub const LOGICAL_CYCLE_DAYS: i64 = 30;

/// Number of days used for the flat monthly spend projection
pub const PROJECTION_DAYS: i64 = 30;

/// Number of most recent entries considered by the analytics overview
pub const ANALYTICS_ENTRY_LIMIT: usize = 90;

/// Default number of entries returned by entry listings
pub const DEFAULT_ENTRY_LIST_LIMIT: usize = 90;

/// Number of most recent entries averaged for quote statistics
pub const QUOTE_RATING_WINDOW: usize = 7;

/// Default currency symbol used in money insights
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";

/// Default timeout for the external quote generator
pub const DEFAULT_QUOTE_TIMEOUT_MS: u64 = 4_000;
