//! Async client for the Tropicos name web service.
//!
//! Every operation maps to one GET request. The client injects its API key and
//! output format into each request and returns the response body untouched,
//! typed with the shape the endpoint documents.
//!
//! ```no_run
//! # async fn run() -> Result<(), tropicos_api::Error> {
//! use tropicos_api::{Client, SearchQuery};
//!
//! let client = Client::new("my-api-key")?;
//! let query = SearchQuery::default().with_name("Quercus alba");
//! let hits = client.search(&query).send().await?.data()?;
//! for hit in &hits {
//!     println!("{:?}", hit.scientific_name_with_authors);
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod endpoint;
mod errors;
mod format;
mod query;
mod response;
pub mod types;

pub use self::client::{merge_access_params, Client, ClientBuilder, PendingRequest, RequestOptions};
pub use self::endpoint::Endpoint;
pub use self::errors::Error;
pub use self::format::Format;
pub use self::query::{ListNamesQuery, Query, QueryCommon, SearchQuery, SearchType, SortOrder};
pub use self::response::ApiResponse;
pub use reqwest::header;
