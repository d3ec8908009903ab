pub use super::value_objects::{OHLCV, Price, Timestamp, Volume};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Domain entity - Candle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub timestamp: Timestamp,
    pub ohlcv: OHLCV,
}

impl Candle {
    pub fn new(timestamp: Timestamp, ohlcv: OHLCV) -> Self {
        Self { timestamp, ohlcv }
    }

    pub fn is_bullish(&self) -> bool {
        self.ohlcv.close >= self.ohlcv.open
    }

    pub fn is_bearish(&self) -> bool {
        self.ohlcv.close < self.ohlcv.open
    }

    /// One-line readout shown near the cursor.
    pub fn readout(&self) -> String {
        format!(
            "O: {} H: {} L: {} C: {}",
            self.ohlcv.open.value(),
            self.ohlcv.high.value(),
            self.ohlcv.low.value(),
            self.ohlcv.close.value()
        )
    }
}

/// Domain entity - Candle series, bounded and time-ordered
#[derive(Debug, Clone)]
pub struct CandleSeries {
    candles: VecDeque<Candle>,
    max_size: usize,
}

impl CandleSeries {
    pub fn new(max_size: usize) -> Self {
        Self { candles: VecDeque::new(), max_size }
    }

    /// Replace the whole series with a fresh feed response.
    pub fn set_candles(&mut self, mut candles: Vec<Candle>) {
        candles.sort_by_key(|c| c.timestamp);
        self.candles.clear();
        for candle in candles {
            self.add_candle(candle);
        }
    }

    pub fn add_candle(&mut self, candle: Candle) {
        // Same-timestamp candle replaces the last one in place
        if let Some(last_candle) = self.candles.back_mut() {
            if last_candle.timestamp == candle.timestamp {
                *last_candle = candle;
                return;
            }
            if candle.timestamp < last_candle.timestamp {
                self.insert_candle_sorted(candle);
                return;
            }
        }

        self.candles.push_back(candle);

        if self.candles.len() > self.max_size {
            self.candles.pop_front();
        }
    }

    /// Insert a candle while keeping time order
    fn insert_candle_sorted(&mut self, candle: Candle) {
        let insert_pos = self
            .candles
            .iter()
            .position(|c| c.timestamp >= candle.timestamp)
            .unwrap_or(self.candles.len());

        if insert_pos < self.candles.len() && self.candles[insert_pos].timestamp == candle.timestamp
        {
            self.candles[insert_pos] = candle;
        } else {
            self.candles.insert(insert_pos, candle);
        }

        if self.candles.len() > self.max_size {
            self.candles.pop_front();
        }
    }

    pub fn get_candles(&self) -> &VecDeque<Candle> {
        &self.candles
    }

    pub fn get(&self, index: usize) -> Option<&Candle> {
        self.candles.get(index)
    }

    pub fn latest(&self) -> Option<&Candle> {
        self.candles.back()
    }

    pub fn count(&self) -> usize {
        self.candles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Time extent of the series, first to last open time.
    pub fn time_range(&self) -> Option<(Timestamp, Timestamp)> {
        match (self.candles.front(), self.candles.back()) {
            (Some(first), Some(last)) => Some((first.timestamp, last.timestamp)),
            _ => None,
        }
    }

    /// Get the price range of all candles
    pub fn price_range(&self) -> Option<(&Price, &Price)> {
        if self.candles.is_empty() {
            return None;
        }

        let mut min_price = &self.candles[0].ohlcv.low;
        let mut max_price = &self.candles[0].ohlcv.high;

        for candle in &self.candles {
            if candle.ohlcv.low.value() < min_price.value() {
                min_price = &candle.ohlcv.low;
            }
            if candle.ohlcv.high.value() > max_price.value() {
                max_price = &candle.ohlcv.high;
            }
        }

        Some((min_price, max_price))
    }
}
