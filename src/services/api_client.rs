// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================

use futures::future::LocalBoxFuture;
use gloo_net::http::Request;

use crate::errors::ClientError;
use crate::utils::constants::{REQUESTED_WITH_HEADER, REQUESTED_WITH_VALUE};
use crate::viewmodels::LoanListSource;

/// Cliente API - la sesión viaja en las cookies del navegador
#[derive(Clone)]
pub struct ApiClient {
    latest_loans_url: String,
}

impl ApiClient {
    pub fn new(latest_loans_url: &str) -> Self {
        Self {
            latest_loans_url: latest_loans_url.to_string(),
        }
    }

    /// Fragmento HTML con los últimos préstamos; sólo falla si la petición o la lectura fallan
    pub async fn fetch_latest_loans(&self) -> Result<String, ClientError> {
        let response = Request::get(&self.latest_loans_url)
            .header(REQUESTED_WITH_HEADER, REQUESTED_WITH_VALUE)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        // El cuerpo se inyecta tal cual aunque el status no sea 2xx
        if !response.ok() {
            log::debug!("🔄 [API] {} respondió HTTP {}", self.latest_loans_url, response.status());
        }

        response
            .text()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))
    }
}

impl LoanListSource for ApiClient {
    fn fetch_latest(&self) -> LocalBoxFuture<'static, Result<String, ClientError>> {
        let client = self.clone();
        Box::pin(async move { client.fetch_latest_loans().await })
    }
}
