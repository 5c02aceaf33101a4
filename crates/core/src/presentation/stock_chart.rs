//! Coordinate mapping for the intraday close-price chart.
//!
//! Pure geometry: the host UI draws a path through [`StockChartLayout::points`]
//! and the axis labels at the positions computed here. The y axis grows
//! downwards, as on every drawing surface.

use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::intraday::IntradayInfo;

/// Margin reserved left of and below the plot for labels.
pub const DEFAULT_CHART_SPACING: f64 = 100.0;

/// Number of intervals on the price axis (six labels).
const PRICE_STEPS: u32 = 5;

/// Distance of hour labels from the bottom edge.
const HOUR_LABEL_BASELINE: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisLabel {
    pub text: String,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockChartLayout {
    pub upper_price: f64,
    pub lower_price: f64,
    pub space_per_hour: f64,
    pub points: Vec<ChartPoint>,
    pub hour_labels: Vec<AxisLabel>,
    pub price_labels: Vec<AxisLabel>,
}

impl StockChartLayout {
    /// Maps `infos` onto a `width` x `height` surface.
    ///
    /// The upper bound is the highest close plus one half, rounded; the lower
    /// bound is the lowest close rounded. When both bounds coincide the
    /// series is drawn along the lower bound.
    pub fn compute(infos: &[IntradayInfo], width: f64, height: f64, spacing: f64) -> Self {
        let closes: Vec<f64> = infos
            .iter()
            .map(|info| info.close.to_f64().unwrap_or_default())
            .collect();

        let upper_price = closes
            .iter()
            .copied()
            .reduce(f64::max)
            .map(|max| (max + 0.5).round())
            .unwrap_or_default();
        let lower_price = closes
            .iter()
            .copied()
            .reduce(f64::min)
            .map(f64::round)
            .unwrap_or_default();
        let range = upper_price - lower_price;

        let space_per_hour = if closes.is_empty() {
            0.0
        } else {
            (width - spacing) / closes.len() as f64
        };

        let points = closes
            .iter()
            .enumerate()
            .map(|(i, close)| {
                let ratio = if range > 0.0 {
                    (close - lower_price) / range
                } else {
                    0.0
                };
                ChartPoint {
                    x: i as f64 * space_per_hour + spacing,
                    y: height - spacing - ratio * height,
                }
            })
            .collect();

        let hour_labels = infos
            .iter()
            .enumerate()
            .take(infos.len().saturating_sub(1))
            .step_by(2)
            .map(|(i, info)| AxisLabel {
                text: info.hour().to_string(),
                x: spacing + i as f64 * space_per_hour,
                y: height - HOUR_LABEL_BASELINE,
            })
            .collect();

        let price_step = range / f64::from(PRICE_STEPS);
        let price_labels = (0..=PRICE_STEPS)
            .map(|i| {
                let i = f64::from(i);
                AxisLabel {
                    text: format!("{:.1}", lower_price + price_step * i),
                    x: spacing * 0.3,
                    y: height - spacing - i * height / f64::from(PRICE_STEPS),
                }
            })
            .collect();

        Self {
            upper_price,
            lower_price,
            space_per_hour,
            points,
            hour_labels,
            price_labels,
        }
    }
}
