use std::collections::BTreeMap;

use tracing::{debug, info, warn};

use crate::domain::errors::{ApiResult, TwitterApiError};
use crate::domain::models::{Cursor, Session};
use crate::domain::ports::ConnectionPageSource;

/// Walks cursor pages sequentially into one `screen_name -> display_name` map
#[derive(Debug, Clone, Copy)]
pub struct ConnectionCollector {
    max_pages: u32,
}

impl ConnectionCollector {
    pub const fn new(max_pages: u32) -> Self {
        Self { max_pages }
    }

    /// Fetch pages from the first cursor until the end cursor.
    ///
    /// Duplicate screen names keep the last display name seen. Any page
    /// failure aborts the traversal and the records gathered so far are
    /// dropped. Running out of page budget before the end cursor yields
    /// [`TwitterApiError::PaginationLimitExceeded`].
    pub async fn collect<S>(
        &self,
        source: &S,
        session: &Session,
        page_size: u32,
    ) -> ApiResult<BTreeMap<String, String>>
    where
        S: ConnectionPageSource + ?Sized,
    {
        let mut connections = BTreeMap::new();
        let mut cursor = Cursor::first();

        for page_number in 1..=self.max_pages {
            let page = source
                .list_connections_page(session, &cursor, page_size)
                .await?;

            debug!(
                page = page_number,
                records = page.records.len(),
                next_cursor = %page.next_cursor,
                "fetched connections page"
            );

            for connection in page.records {
                connections.insert(connection.screen_name, connection.display_name);
            }

            if page.next_cursor.is_end() {
                info!(
                    pages = page_number,
                    total = connections.len(),
                    "collected all connections"
                );
                return Ok(connections);
            }
            cursor = page.next_cursor;
        }

        warn!(max_pages = self.max_pages, "pagination did not reach the end cursor");
        Err(TwitterApiError::PaginationLimitExceeded {
            max_pages: self.max_pages,
        })
    }
}
