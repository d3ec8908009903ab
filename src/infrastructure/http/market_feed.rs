use crate::domain::errors::{ChartError, ChartResult};
use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::market_data::{
    Candle, TimeInterval,
    value_objects::{OHLCV, Price, Symbol, Timestamp, Volume},
};
use gloo_net::http::Request;

/// One kline row as Binance returns it: open time followed by stringified
/// prices, with fields we never read ignored.
#[derive(Debug, serde::Deserialize)]
struct BinanceKline(
    u64,
    String,
    String,
    String,
    String,
    String,
    serde::de::IgnoredAny,
    serde::de::IgnoredAny,
    serde::de::IgnoredAny,
    serde::de::IgnoredAny,
    serde::de::IgnoredAny,
    serde::de::IgnoredAny,
);

/// Number of candles requested per poll.
pub const CANDLE_LIMIT: u32 = 100;

/// Simple REST client for the Binance klines endpoint
pub struct MarketFeedClient {
    symbol: Symbol,
    interval: TimeInterval,
}

impl MarketFeedClient {
    pub fn new(symbol: Symbol, interval: TimeInterval) -> Self {
        Self { symbol, interval }
    }

    fn base_url(&self) -> String {
        "https://api.binance.com/api/v3".to_string()
    }

    pub fn klines_url(&self, limit: u32) -> String {
        format!(
            "{}/klines?symbol={}&interval={}&limit={}",
            self.base_url(),
            self.symbol.to_pair(),
            self.interval.to_binance_str(),
            limit
        )
    }

    /// Fetch the most recent candles for the configured symbol and interval.
    pub async fn fetch_recent(&self, limit: u32) -> ChartResult<Vec<Candle>> {
        let url = self.klines_url(limit);
        get_logger()
            .debug(LogComponent::Infrastructure("MarketFeed"), &format!("fetching {url}"));

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ChartError::FeedUnavailable(format!("request failed: {e:?}")))?;

        if !response.ok() {
            return Err(ChartError::FeedUnavailable(format!("HTTP {}", response.status())));
        }

        let klines: Vec<BinanceKline> = response
            .json()
            .await
            .map_err(|e| ChartError::FeedUnavailable(format!("bad JSON: {e:?}")))?;

        let mut candles = Vec::with_capacity(klines.len());
        for kline in klines {
            candles.push(parse_kline(kline)?);
        }

        get_logger().info(
            LogComponent::Infrastructure("MarketFeed"),
            &format!("📈 loaded {} candles for {}", candles.len(), self.symbol.to_pair()),
        );

        Ok(candles)
    }
}

fn parse_kline(kline: BinanceKline) -> ChartResult<Candle> {
    let parse = |field: &str, name: &str| {
        field
            .parse::<f64>()
            .map_err(|_| ChartError::FeedUnavailable(format!("invalid {name} value")))
    };

    let ohlcv = OHLCV::new(
        Price::new(parse(&kline.1, "open")?),
        Price::new(parse(&kline.2, "high")?),
        Price::new(parse(&kline.3, "low")?),
        Price::new(parse(&kline.4, "close")?),
        Volume::new(parse(&kline.5, "volume")?),
    );

    if !ohlcv.is_valid() {
        return Err(ChartError::FeedUnavailable("inconsistent candle row".to_string()));
    }

    Ok(Candle::new(Timestamp::new(kline.0), ohlcv))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::de::IgnoredAny;

    #[test]
    fn klines_url_includes_pair_and_interval() {
        let client = MarketFeedClient::new(Symbol::from("btc"), TimeInterval::OneHour);
        assert_eq!(
            client.klines_url(100),
            "https://api.binance.com/api/v3/klines?symbol=BTCUSDT&interval=1h&limit=100"
        );
    }

    fn kline(open: &str, high: &str, low: &str, close: &str) -> BinanceKline {
        BinanceKline(
            1_000,
            open.to_string(),
            high.to_string(),
            low.to_string(),
            close.to_string(),
            "1.0".to_string(),
            IgnoredAny,
            IgnoredAny,
            IgnoredAny,
            IgnoredAny,
            IgnoredAny,
            IgnoredAny,
        )
    }

    #[test]
    fn consistent_rows_parse_into_candles() {
        let candle = parse_kline(kline("100", "110", "95", "105")).unwrap();
        assert_eq!(candle.timestamp.value(), 1_000);
        assert_eq!(candle.ohlcv.close.value(), 105.0);
    }

    #[test]
    fn rows_with_inconsistent_prices_are_rejected() {
        // High below the open
        assert!(parse_kline(kline("100", "90", "80", "85")).is_err());
    }

    #[test]
    fn unparseable_price_fields_are_rejected() {
        assert!(parse_kline(kline("abc", "110", "95", "105")).is_err());
    }
}
