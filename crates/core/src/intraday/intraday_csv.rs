use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::constants::INTRADAY_DATETIME_FORMAT;
use crate::csv_parser::{field, parse_decimal, parse_volume, read_rows, CsvParser};
use crate::intraday::intraday_model::IntradayInfo;
use crate::Result;

/// Which bars of the intraday feed to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntradayWindow {
    /// Every valid row, in feed order.
    #[default]
    All,
    /// Only bars dated the day before `today`, ordered by hour of day.
    PreviousDay { today: NaiveDate },
}

impl IntradayWindow {
    fn apply(&self, mut bars: Vec<IntradayInfo>) -> Vec<IntradayInfo> {
        match self {
            IntradayWindow::All => bars,
            IntradayWindow::PreviousDay { today } => {
                let previous = *today - Duration::days(1);
                bars.retain(|bar| bar.datetime.date() == previous);
                bars.sort_by_key(IntradayInfo::hour);
                bars
            }
        }
    }
}

/// Parser for the TIME_SERIES_INTRADAY CSV feed.
///
/// Columns: `timestamp,open,high,low,close,volume`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntradayInfoParser {
    window: IntradayWindow,
}

impl IntradayInfoParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_window(window: IntradayWindow) -> Self {
        Self { window }
    }

    pub fn window(&self) -> IntradayWindow {
        self.window
    }
}

impl CsvParser<IntradayInfo> for IntradayInfoParser {
    fn parse(&self, content: &[u8]) -> Result<Vec<IntradayInfo>> {
        let bars = read_rows(content, "intraday", |record| {
            let datetime =
                NaiveDateTime::parse_from_str(field(record, 0)?, INTRADAY_DATETIME_FORMAT).ok()?;
            Some(IntradayInfo {
                datetime,
                open: parse_decimal(field(record, 1)?)?,
                high: parse_decimal(field(record, 2)?)?,
                low: parse_decimal(field(record, 3)?)?,
                close: parse_decimal(field(record, 4)?)?,
                volume: parse_volume(field(record, 5)?)?,
            })
        })?;

        Ok(self.window.apply(bars))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;
    use rust_decimal_macros::dec;

    const FEED: &str = "timestamp,open,high,low,close,volume\n\
2024-03-08 19:00:00,190.10,190.50,189.90,190.20,12000\n\
2024-03-08 18:00:00,189.50,190.20,189.40,190.10,8000\n\
2024-03-07 19:00:00,188.00,188.70,187.90,188.60,9100\n\
2024-03-07 09:00:00,186.00,186.40,185.80,186.20,4000\n\
2024-03-07 15:00:00,187.10,187.60,186.90,187.50,15000\n";

    #[test]
    fn parses_all_rows_in_feed_order() {
        let bars = IntradayInfoParser::new().parse(FEED.as_bytes()).unwrap();

        assert_eq!(bars.len(), 5);
        assert_eq!(bars[0].datetime.hour(), 19);
        assert_eq!(bars[0].open, dec!(190.10));
        assert_eq!(bars[0].high, dec!(190.50));
        assert_eq!(bars[0].low, dec!(189.90));
        assert_eq!(bars[0].close, dec!(190.20));
        assert_eq!(bars[0].volume, 12000);
        assert_eq!(bars[4].hour(), 15);
    }

    #[test]
    fn drops_rows_with_bad_fields() {
        let feed = "timestamp,open,high,low,close,volume\n\
2024-03-08 19:00:00,190.10,190.50,189.90,190.20,12000\n\
2024-03-08 18:00:00,abc,190.20,189.40,190.10,8000\n\
not-a-date,1,1,1,1,1\n\
2024-03-08 16:00:00,1,1,1,1,12.5\n\
2024-03-08 15:00:00,1,1,1\n\
2024-03-08 14:00:00,2,2,2,2,2\n";
        let bars = IntradayInfoParser::new().parse(feed.as_bytes()).unwrap();

        let hours: Vec<u32> = bars.iter().map(IntradayInfo::hour).collect();
        assert_eq!(hours, vec![19, 14]);
    }

    #[test]
    fn previous_day_window_filters_and_sorts_by_hour() {
        let parser = IntradayInfoParser::with_window(IntradayWindow::PreviousDay {
            today: NaiveDate::from_ymd_opt(2024, 3, 8).unwrap(),
        });
        let bars = parser.parse(FEED.as_bytes()).unwrap();

        let hours: Vec<u32> = bars.iter().map(IntradayInfo::hour).collect();
        assert_eq!(hours, vec![9, 15, 19]);
        assert!(bars
            .iter()
            .all(|b| b.datetime.date() == NaiveDate::from_ymd_opt(2024, 3, 7).unwrap()));
    }

    #[test]
    fn default_window_is_all() {
        assert_eq!(IntradayInfoParser::new().window(), IntradayWindow::All);
    }
}
