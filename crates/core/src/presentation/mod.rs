//! View-models projecting repository results into screen state.

mod company_info;
mod company_listings;
mod stock_chart;

pub use company_info::{CompanyInfoState, CompanyInfoViewModel};
pub use company_listings::{CompanyListingsEvent, CompanyListingsState, CompanyListingsViewModel};
pub use stock_chart::{AxisLabel, ChartPoint, StockChartLayout, DEFAULT_CHART_SPACING};
