use crate::domain::annotations::Trendline;
use crate::domain::chart::ChartPoint;
use crate::domain::errors::{ChartError, ChartResult};
use crate::domain::logging::{LogComponent, get_logger};
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

pub const DEFAULT_SYNC_BASE_URL: &str = "http://127.0.0.1:5000";

/// One endpoint of a submitted trendline: pixel position plus the domain
/// values it translated to at submission time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointPayload {
    pub x: f64,
    pub y: f64,
    pub price: f64,
    pub time: f64,
}

/// Wire shape of `POST /trendline`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendlinePayload {
    pub id: u64,
    pub start: EndpointPayload,
    pub end: EndpointPayload,
    pub alert_name: String,
    pub expiry_date: String,
}

impl TrendlinePayload {
    /// Assemble the payload from a trendline and its translated endpoints.
    /// Translation must have succeeded before this is called.
    pub fn new(line: &Trendline, start: ChartPoint, end: ChartPoint) -> Self {
        Self {
            id: line.id,
            start: EndpointPayload {
                x: line.start_x,
                y: line.start_y,
                price: start.price,
                time: start.time,
            },
            end: EndpointPayload { x: line.end_x, y: line.end_y, price: end.price, time: end.time },
            alert_name: line.alert.alert_name.clone(),
            expiry_date: line.alert.expiry_date.clone(),
        }
    }
}

/// Acknowledgment body the companion service answers with.
#[derive(Debug, Clone, Deserialize)]
pub struct SyncAck {
    #[serde(default)]
    pub message: String,
}

/// Client for the companion annotation service
pub struct AnnotationSyncClient {
    base_url: String,
}

impl AnnotationSyncClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_SYNC_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    pub fn trendline_url(&self) -> String {
        format!("{}/trendline", self.base_url)
    }

    /// Submit a translated trendline. Non-2xx answers reject, transport
    /// failures surface as `SyncUnavailable`; the caller leaves local state
    /// untouched on either failure.
    pub async fn submit(&self, payload: &TrendlinePayload) -> ChartResult<SyncAck> {
        let url = self.trendline_url();
        get_logger().debug(
            LogComponent::Infrastructure("AnnotationSync"),
            &format!("submitting trendline {} to {url}", payload.id),
        );

        let request = Request::post(&url)
            .json(payload)
            .map_err(|e| ChartError::SyncUnavailable(format!("serialize failed: {e:?}")))?;

        let response = request
            .send()
            .await
            .map_err(|e| ChartError::SyncUnavailable(format!("request failed: {e:?}")))?;

        if !response.ok() {
            get_logger().warn(
                LogComponent::Infrastructure("AnnotationSync"),
                &format!("sync rejected with HTTP {}", response.status()),
            );
            return Err(ChartError::SyncRejected(response.status()));
        }

        let ack: SyncAck = response
            .json()
            .await
            .map_err(|e| ChartError::SyncUnavailable(format!("bad ack: {e:?}")))?;

        get_logger().info(
            LogComponent::Infrastructure("AnnotationSync"),
            &format!("✅ trendline {} acknowledged", payload.id),
        );

        Ok(ack)
    }
}

impl Default for AnnotationSyncClient {
    fn default() -> Self {
        Self::new()
    }
}
