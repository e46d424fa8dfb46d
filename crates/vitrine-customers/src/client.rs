//! The pass-through client.

use tracing::{debug, warn};

use crate::address::{AddressUpsert, CustomerRecord, DeletedAddress};
use crate::error::CustomerServiceError;
use crate::graph::{GraphQuery, GraphResult};
use crate::http::{self, Method, Request};

/// Client for the external customer-record service.
///
/// Every operation forwards its payload verbatim and returns the service's
/// response as-is. There is no retry or caching here; the service owns the
/// data and its answers are authoritative.
pub struct CustomerServiceClient {
    base_url: String,
    api_key: Option<String>,
}

impl CustomerServiceClient {
    /// Create a client for the service at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
        }
    }

    /// Authenticate requests with a bearer API key.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Forward an address create/update for a customer.
    pub fn update_customer_addresses(
        &self,
        customer_id: &str,
        upsert: &AddressUpsert,
    ) -> Result<CustomerRecord, CustomerServiceError> {
        let url = self.addresses_url(customer_id, None);
        let body = serde_json::to_vec(upsert)?;
        let request = self.prepare(Request::new(Method::Post, url).json(body));
        self.dispatch(request)
    }

    /// Forward an address deletion for a customer.
    pub fn delete_customer_addresses(
        &self,
        customer_id: &str,
        address_id: &str,
    ) -> Result<DeletedAddress, CustomerServiceError> {
        let url = self.addresses_url(customer_id, Some(address_id));
        let request = self.prepare(Request::new(Method::Delete, url));
        self.dispatch(request)
    }

    /// Forward a graph read.
    pub fn query_graph(&self, query: &GraphQuery) -> Result<GraphResult, CustomerServiceError> {
        let url = self.graph_url();
        let body = serde_json::to_vec(query)?;
        let request = self.prepare(Request::new(Method::Post, url).json(body));
        self.dispatch(request)
    }

    fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    fn graph_url(&self) -> String {
        format!("{}/graph", self.base())
    }

    fn addresses_url(&self, customer_id: &str, address_id: Option<&str>) -> String {
        match address_id {
            Some(address_id) => format!(
                "{}/admin/customers/{}/addresses/{}",
                self.base(),
                customer_id,
                address_id
            ),
            None => format!("{}/admin/customers/{}/addresses", self.base(), customer_id),
        }
    }

    fn prepare(&self, request: Request) -> Request {
        match &self.api_key {
            Some(key) => request.header("Authorization", format!("Bearer {}", key)),
            None => request,
        }
    }

    fn dispatch<T: serde::de::DeserializeOwned>(
        &self,
        request: Request,
    ) -> Result<T, CustomerServiceError> {
        debug!(method = request.method.as_str(), url = %request.url, "forwarding to customer service");
        let response = http::send(request)?;
        if !response.is_success() {
            warn!(status = response.status, "customer service rejected request");
            return Err(CustomerServiceError::Http {
                status: response.status,
                message: response.text(),
            });
        }
        response.json()
    }
}
