//! Activity logs.

use crate::models::ActivityLog;
use crate::Result;
use solus_core::{ApiClient, Filter, Paginated, RequestOptions};

/// Filter for [`ActivityLogsService::list`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityLogsFilter {
    filter: Filter,
}

impl ActivityLogsFilter {
    /// Create an empty filter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Only events triggered by the user.
    #[must_use]
    pub fn by_user_id(self, id: u64) -> Self {
        Self {
            filter: self.filter.add("user_id", id.to_string()),
        }
    }

    /// Only events with the given name.
    #[must_use]
    pub fn by_event(self, event: &str) -> Self {
        Self {
            filter: self.filter.add("event", event),
        }
    }

    /// The underlying filter.
    #[must_use]
    pub const fn as_filter(&self) -> &Filter {
        &self.filter
    }
}

/// Read access to the activity log.
#[derive(Debug, Clone, Copy)]
pub struct ActivityLogsService<'a> {
    client: &'a ApiClient,
}

impl<'a> ActivityLogsService<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// List recorded events.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the page does not decode.
    pub async fn list(&self, filter: &ActivityLogsFilter) -> Result<Paginated<ActivityLog>> {
        self.client
            .list("activity_logs", RequestOptions::new().with_filter(filter.as_filter()))
            .await
    }
}
