use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use super::models::{
    ApiEnvelope, ApiError, ErrorBody, PurchaseRequest, TransferRequest, UploadRequest,
};
use crate::models::market::MarketTicker;
use crate::models::plan::Plan;
use crate::models::stats::AdminStats;
use crate::models::transaction::TransactionRecord;
use crate::models::wallet::UserInfo;

/// Royal Fx platform API client. One method per consumed endpoint; every
/// request carries the bearer token from the stored session.
pub struct PlatformClient {
    http_client: HttpClient,
    token: String,
    base_url: String,
    market_base_url: String,
}

impl PlatformClient {
    const DEFAULT_BASE_URL: &'static str = "https://api.royalfx.example.com/api";
    const DEFAULT_MARKET_BASE_URL: &'static str = "https://api.binance.com/api/v3";

    /// Create a new client, honoring `ROYALFX_API_BASE` and
    /// `ROYALFX_MARKET_API_BASE` overrides.
    pub fn new(token: String) -> Self {
        let base_url = std::env::var("ROYALFX_API_BASE")
            .unwrap_or_else(|_| Self::DEFAULT_BASE_URL.to_string());
        let market_base_url = std::env::var("ROYALFX_MARKET_API_BASE")
            .unwrap_or_else(|_| Self::DEFAULT_MARKET_BASE_URL.to_string());
        Self {
            http_client: HttpClient::new(),
            token,
            base_url,
            market_base_url,
        }
    }

    /// Create a client with explicit base URLs (for testing).
    pub fn with_base_url(token: String, base_url: String, market_base_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            token,
            base_url,
            market_base_url,
        }
    }

    /// Default headers with the bearer authorization attached.
    fn create_headers(&self) -> Result<HeaderMap, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let auth_value = HeaderValue::from_str(&format!("Bearer {}", self.token))
            .map_err(|e| ApiError::RequestError(format!("Failed to create auth header: {}", e)))?;
        headers.insert(AUTHORIZATION, auth_value);

        Ok(headers)
    }

    /// Map a non-success response onto the error taxonomy, pulling the
    /// backend's `message` out of the body when one is present.
    async fn handle_error_response(
        status: reqwest::StatusCode,
        response: reqwest::Response,
    ) -> ApiError {
        let status_code = status.as_u16();
        let body_text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body_text)
            .ok()
            .and_then(|body| body.message.or(body.error))
            .unwrap_or_else(|| body_text.clone());

        match status_code {
            400 => ApiError::BadRequest(message),
            401 => ApiError::Unauthorized(message),
            403 => ApiError::Forbidden(message),
            404 => ApiError::NotFound(message),
            500..=599 => {
                warn!("Server error {}: {}", status_code, message);
                ApiError::ServerError(status_code, message)
            }
            _ => ApiError::HttpError(status_code, message),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let headers = self.create_headers()?;

        let response = self
            .http_client
            .get(url)
            .headers(headers)
            .send()
            .await
            .map_err(|e| ApiError::RequestError(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(Self::handle_error_response(status, response).await);
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::DeserializationError(format!("Failed to parse response: {}", e)))
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let headers = self.create_headers()?;

        let response = self
            .http_client
            .post(url)
            .headers(headers)
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::RequestError(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(Self::handle_error_response(status, response).await);
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::DeserializationError(format!("Failed to parse response: {}", e)))
    }

    /// Unwrap the platform envelope: a `success: false` payload is a backend
    /// validation error even when the HTTP status is 200.
    fn unwrap_envelope<T>(envelope: ApiEnvelope<T>) -> Result<T, ApiError> {
        if envelope.success == Some(false) {
            let message = envelope
                .message
                .unwrap_or_else(|| "Request failed. Please try again.".to_string());
            return Err(ApiError::Backend(message));
        }
        envelope
            .data
            .ok_or_else(|| ApiError::DeserializationError("Response carried no data".to_string()))
    }

    /// GET /user/get-user-info — profile, referral code, wallet balances.
    pub async fn get_user_info(&self) -> Result<UserInfo, ApiError> {
        let url = format!("{}/user/get-user-info", self.base_url);
        let envelope = self.get_json::<ApiEnvelope<UserInfo>>(&url).await?;
        Self::unwrap_envelope(envelope)
    }

    /// GET /user/get-plans — available investment plans.
    pub async fn get_plans(&self) -> Result<Vec<Plan>, ApiError> {
        let url = format!("{}/user/get-plans", self.base_url);
        let envelope = self.get_json::<ApiEnvelope<Vec<Plan>>>(&url).await?;
        Self::unwrap_envelope(envelope)
    }

    /// POST /user/purchase-products — buy a plan with topup-wallet funds.
    /// Insufficient balance and duplicate-plan rules are enforced backend-side
    /// and surface through the error message path.
    pub async fn purchase_plan(&self, request: &PurchaseRequest) -> Result<String, ApiError> {
        let url = format!("{}/user/purchase-products", self.base_url);
        let envelope = self
            .post_json::<_, ApiEnvelope<serde_json::Value>>(&url, request)
            .await?;
        if envelope.success == Some(false) {
            let message = envelope
                .message
                .unwrap_or_else(|| "Purchase failed. Please try again.".to_string());
            return Err(ApiError::Backend(message));
        }
        Ok(envelope
            .message
            .unwrap_or_else(|| "Your plan has been purchased successfully.".to_string()))
    }

    /// POST /user/transfer-to-topup — move funds between wallet buckets.
    pub async fn transfer_to_topup(&self, request: &TransferRequest) -> Result<String, ApiError> {
        let url = format!("{}/user/transfer-to-topup", self.base_url);
        let envelope = self
            .post_json::<_, ApiEnvelope<serde_json::Value>>(&url, request)
            .await?;
        if envelope.success == Some(false) {
            let message = envelope
                .message
                .unwrap_or_else(|| "Transfer failed.".to_string());
            return Err(ApiError::Backend(message));
        }
        Ok(envelope
            .message
            .unwrap_or_else(|| "Transfer successful!".to_string()))
    }

    /// GET /admin/roi-history — full transaction history listing.
    pub async fn get_transaction_history(&self) -> Result<Vec<TransactionRecord>, ApiError> {
        let url = format!("{}/admin/roi-history", self.base_url);
        let envelope = self
            .get_json::<ApiEnvelope<Vec<TransactionRecord>>>(&url)
            .await?;
        Self::unwrap_envelope(envelope)
    }

    /// GET /admin/dashboard-stats — platform-wide aggregates.
    pub async fn get_admin_stats(&self) -> Result<AdminStats, ApiError> {
        let url = format!("{}/admin/dashboard-stats", self.base_url);
        let envelope = self.get_json::<ApiEnvelope<AdminStats>>(&url).await?;
        Self::unwrap_envelope(envelope)
    }

    /// POST /admin/upload-daily-profit — single-shot workbook upload. A
    /// failure means the whole file must be re-selected and re-sent.
    pub async fn upload_profit_sheet(&self, base64_payload: String) -> Result<String, ApiError> {
        let url = format!("{}/admin/upload-daily-profit", self.base_url);
        let request = UploadRequest {
            file: base64_payload,
        };
        let envelope = self
            .post_json::<_, ApiEnvelope<serde_json::Value>>(&url, &request)
            .await?;
        if envelope.success == Some(false) {
            let message = envelope
                .message
                .unwrap_or_else(|| "Upload failed. Please try again.".to_string());
            return Err(ApiError::Backend(message));
        }
        Ok(envelope
            .message
            .unwrap_or_else(|| "File uploaded successfully!".to_string()))
    }

    /// GET {market}/ticker/24hr — public market feed, no auth header. Returns
    /// the `limit` tickers with the highest quote volume.
    pub async fn get_top_market_data(&self, limit: usize) -> Result<Vec<MarketTicker>, ApiError> {
        let url = format!("{}/ticker/24hr", self.market_base_url);

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::RequestError(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(Self::handle_error_response(status, response).await);
        }

        let mut tickers = response
            .json::<Vec<MarketTicker>>()
            .await
            .map_err(|e| {
                ApiError::DeserializationError(format!("Failed to parse response: {}", e))
            })?;

        tickers.sort_by(|a, b| b.quote_volume().total_cmp(&a.quote_volume()));
        tickers.truncate(limit);
        Ok(tickers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client(server: &mockito::ServerGuard) -> PlatformClient {
        PlatformClient::with_base_url("test-token".to_string(), server.url(), server.url())
    }

    #[tokio::test]
    async fn history_listing_parses_and_sends_bearer() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/admin/roi-history")
            .match_header("authorization", "Bearer test-token")
            .with_status(200)
            .with_body(
                r#"{"success":true,"data":[{"_id":"t1","amount":100.0,"status":"completed"}]}"#,
            )
            .create_async()
            .await;

        let records = test_client(&server).get_transaction_history().await.unwrap();
        mock.assert_async().await;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].amount(), 100.0);
    }

    #[tokio::test]
    async fn backend_message_is_extracted_from_error_body() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/user/transfer-to-topup")
            .with_status(400)
            .with_body(r#"{"message":"Insufficient balance in selected wallet."}"#)
            .create_async()
            .await;

        let request = TransferRequest {
            from_wallet: "depositWallet".to_string(),
            to_wallet: "topupWallet".to_string(),
            amount: 50.0,
        };
        let err = test_client(&server)
            .transfer_to_topup(&request)
            .await
            .unwrap_err();
        match err {
            ApiError::BadRequest(msg) => {
                assert_eq!(msg, "Insufficient balance in selected wallet.")
            }
            other => panic!("expected BadRequest, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn success_false_envelope_is_a_backend_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/user/purchase-products")
            .with_status(200)
            .with_body(r#"{"success":false,"message":"You already have an active plan"}"#)
            .create_async()
            .await;

        let request = PurchaseRequest {
            product_id: "p1".to_string(),
            investment_amount: 200.0,
        };
        let err = test_client(&server).purchase_plan(&request).await.unwrap_err();
        assert_eq!(err.user_message(), "You already have an active plan");
    }

    #[tokio::test]
    async fn market_feed_ranks_by_quote_volume() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/ticker/24hr")
            .with_status(200)
            .with_body(
                r#"[
                    {"symbol":"AAAUSDT","lastPrice":"1.0","quoteVolume":"10"},
                    {"symbol":"BTCUSDT","lastPrice":"64000","quoteVolume":"9000"},
                    {"symbol":"ETHUSDT","lastPrice":"3000","quoteVolume":"4000"}
                ]"#,
            )
            .create_async()
            .await;

        let tickers = test_client(&server).get_top_market_data(2).await.unwrap();
        assert_eq!(tickers.len(), 2);
        assert_eq!(tickers[0].symbol(), "BTCUSDT");
        assert_eq!(tickers[1].symbol(), "ETHUSDT");
    }
}
