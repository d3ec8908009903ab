use std::str::FromStr;

use trendline_chart_wasm::domain::market_data::{
    Candle, CandleSeries, OHLCV, Price, Symbol, TimeInterval, Timestamp, Volume,
};

fn candle(ts: u64, open: f64, high: f64, low: f64, close: f64) -> Candle {
    Candle::new(
        Timestamp::from_millis(ts),
        OHLCV::new(
            Price::from(open),
            Price::from(high),
            Price::from(low),
            Price::from(close),
            Volume::from(1.0),
        ),
    )
}

#[test]
fn candle_classifies_direction() {
    assert!(candle(0, 100.0, 110.0, 95.0, 105.0).is_bullish());
    assert!(candle(0, 100.0, 110.0, 95.0, 100.0).is_bullish()); // doji counts as bullish
    assert!(candle(0, 100.0, 110.0, 95.0, 98.0).is_bearish());
}

#[test]
fn candle_readout_lists_ohlc() {
    let readout = candle(0, 100.0, 110.5, 95.25, 105.0).readout();
    assert_eq!(readout, "O: 100 H: 110.5 L: 95.25 C: 105");
}

#[test]
fn set_candles_sorts_a_shuffled_feed_response() {
    let mut series = CandleSeries::new(100);
    series.set_candles(vec![
        candle(3_000, 1.0, 2.0, 0.5, 1.5),
        candle(1_000, 1.0, 2.0, 0.5, 1.5),
        candle(2_000, 1.0, 2.0, 0.5, 1.5),
    ]);

    let times: Vec<u64> = series.get_candles().iter().map(|c| c.timestamp.value()).collect();
    assert_eq!(times, vec![1_000, 2_000, 3_000]);
}

#[test]
fn series_stays_bounded_by_dropping_the_oldest() {
    let mut series = CandleSeries::new(3);
    for ts in [1_000, 2_000, 3_000, 4_000] {
        series.add_candle(candle(ts, 1.0, 2.0, 0.5, 1.5));
    }

    assert_eq!(series.count(), 3);
    let (first, last) = series.time_range().unwrap();
    assert_eq!(first.value(), 2_000);
    assert_eq!(last.value(), 4_000);
}

#[test]
fn same_timestamp_replaces_the_open_candle() {
    let mut series = CandleSeries::new(100);
    series.add_candle(candle(1_000, 100.0, 110.0, 95.0, 105.0));
    series.add_candle(candle(1_000, 100.0, 120.0, 95.0, 118.0));

    assert_eq!(series.count(), 1);
    assert_eq!(series.latest().unwrap().ohlcv.close.value(), 118.0);
}

#[test]
fn price_range_spans_lows_and_highs_across_the_series() {
    let mut series = CandleSeries::new(100);
    series.add_candle(candle(1_000, 100.0, 110.0, 90.0, 105.0));
    series.add_candle(candle(2_000, 105.0, 130.0, 102.0, 125.0));

    let (min, max) = series.price_range().unwrap();
    assert_eq!(min.value(), 90.0);
    assert_eq!(max.value(), 130.0);

    assert!(CandleSeries::new(100).price_range().is_none());
}

#[test]
fn ohlcv_validity_requires_high_and_low_to_bound_the_body() {
    let ohlcv = |o: f64, h: f64, l: f64, c: f64, v: f64| {
        OHLCV::new(Price::from(o), Price::from(h), Price::from(l), Price::from(c), Volume::from(v))
    };

    assert!(ohlcv(100.0, 110.0, 95.0, 105.0, 1.0).is_valid());
    // High below the open
    assert!(!ohlcv(100.0, 90.0, 95.0, 85.0, 1.0).is_valid());
    // Low above the close
    assert!(!ohlcv(100.0, 110.0, 106.0, 105.0, 1.0).is_valid());
    assert!(!ohlcv(100.0, 110.0, 95.0, 105.0, -1.0).is_valid());
}

#[test]
fn symbol_forms_the_quoted_pair() {
    assert_eq!(Symbol::from("btc").to_pair(), "BTCUSDT");
    assert!(Symbol::new(String::new()).is_err());
}

#[test]
fn interval_parses_from_its_wire_name() {
    assert_eq!(TimeInterval::from_str("1h"), Ok(TimeInterval::OneHour));
    assert_eq!(TimeInterval::OneDay.to_binance_str(), "1d");
    assert_eq!(TimeInterval::FiveMinutes.duration_ms(), 300_000);
}
