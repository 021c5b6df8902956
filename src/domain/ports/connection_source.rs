use crate::domain::errors::ApiResult;
use crate::domain::models::{ConnectionPage, Cursor, Session};
use async_trait::async_trait;

/// Port for fetching one page of a user's connections
///
/// Implemented by the signed HTTP client; the paginator only depends on this
/// trait so traversal behavior can be exercised without a network.
#[async_trait]
pub trait ConnectionPageSource: Send + Sync {
    /// Fetch the page identified by `cursor`, requesting `page_size` records
    async fn list_connections_page(
        &self,
        session: &Session,
        cursor: &Cursor,
        page_size: u32,
    ) -> ApiResult<ConnectionPage>;
}
