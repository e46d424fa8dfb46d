//! Pass-through access to the external customer-record service.
//!
//! The commerce backend does not own customer data; address writes and graph
//! reads are forwarded verbatim to the customer-record service and its
//! responses returned as-is. No retry, no caching, no validation beyond URL
//! assembly lives here; failures are the caller's to surface.
//!
//! # Example
//!
//! ```rust,ignore
//! use vitrine_customers::{Address, AddressUpsert, CustomerServiceClient};
//!
//! let client = CustomerServiceClient::new("https://customers.internal")
//!     .with_api_key("svc_key");
//!
//! let upsert = AddressUpsert::new(vec![Address::new("Amy", "Chen", "1 Pike St", "Seattle", "US", "98101")]);
//! let record = client.update_customer_addresses("cus_123", &upsert)?;
//! ```

mod address;
mod client;
mod error;
mod graph;
mod http;

pub use address::{Address, AddressUpsert, CustomerRecord, DeletedAddress};
pub use client::CustomerServiceClient;
pub use error::CustomerServiceError;
pub use graph::{GraphQuery, GraphResult};
