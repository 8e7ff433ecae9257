use std::future::Future;

use storefront_core::RawProduct;

use crate::error::FetchError;

/// Where the catalog comes from. One call is one complete fetch.
pub trait ProductSource {
    fn fetch_products(&self) -> impl Future<Output = Result<Vec<RawProduct>, FetchError>> + Send;
}
