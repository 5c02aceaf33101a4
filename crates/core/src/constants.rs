use std::time::Duration;

/// Shown when the provider answers a company overview without a name.
pub const API_LIMIT_MESSAGE: &str = "API limit reached, please try again later.";

/// Delay between the last keystroke and the listings query it triggers.
pub const DEFAULT_SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

/// Timestamp layout of intraday CSV rows.
pub const INTRADAY_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Buffer of the channel backing a listings stream.
pub const RESOURCE_CHANNEL_CAPACITY: usize = 16;
