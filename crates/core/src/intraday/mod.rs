//! Intraday bars - domain model and CSV parser.

mod intraday_csv;
mod intraday_model;

pub use intraday_csv::{IntradayInfoParser, IntradayWindow};
pub use intraday_model::IntradayInfo;
