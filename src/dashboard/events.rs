//! Event operations behind the gate

use chrono::{DateTime, Utc};

use crate::auth::gate::{Requirement, EVENT_AUTHORS};
use crate::auth::guarded;
use crate::error::{DashboardError, DashboardResult};
use crate::query::EventQuery;
use crate::stats::summarize;
use crate::types::{
    Action, DashboardSummary, EventPatch, InsightEvent, NewEvent, Page, Principal,
};

use super::Dashboard;

const READ: Requirement = Requirement::Permission(Action::Read);

impl Dashboard {
    /// Filtered, sorted, paginated event list (`read`)
    pub fn list_events(
        &self,
        principal: Option<&Principal>,
        query: &EventQuery,
    ) -> DashboardResult<Page<InsightEvent>> {
        guarded(principal, READ, |_| query.run(&self.events.all()))
    }

    /// Single event (`read`)
    pub fn get_event(&self, principal: Option<&Principal>, id: &str) -> DashboardResult<InsightEvent> {
        guarded(principal, READ, |_| {
            self.events
                .get_by_id(id)
                .ok_or_else(|| DashboardError::event_not_found(id))
        })
    }

    /// Create an event attributed to the caller (admin or analyst)
    pub fn create_event(
        &self,
        principal: Option<&Principal>,
        fields: NewEvent,
    ) -> DashboardResult<InsightEvent> {
        guarded(principal, Requirement::AnyRole(EVENT_AUTHORS), |author| {
            self.events.create(fields, Some(author.email.clone()))
        })
    }

    /// Merge a partial update (`edit`)
    pub fn update_event(
        &self,
        principal: Option<&Principal>,
        id: &str,
        patch: EventPatch,
    ) -> DashboardResult<InsightEvent> {
        guarded(principal, Requirement::Permission(Action::Edit), |_| {
            self.events.update(id, patch)
        })
    }

    /// Hard-delete an event (`delete`); an unknown id is `NotFound`
    pub fn delete_event(&self, principal: Option<&Principal>, id: &str) -> DashboardResult<()> {
        guarded(principal, Requirement::Permission(Action::Delete), |_| {
            if self.events.delete(id) {
                Ok(())
            } else {
                Err(DashboardError::event_not_found(id))
            }
        })
    }

    /// Stats, trend and insights as of `now` (`read`)
    pub fn summary(
        &self,
        principal: Option<&Principal>,
        now: DateTime<Utc>,
    ) -> DashboardResult<DashboardSummary> {
        guarded(principal, READ, |_| Ok(summarize(&self.events.all(), now)))
    }
}
