//! CRUD operations for the event store

use chrono::{DateTime, Utc};

use crate::error::{DashboardError, DashboardResult};
use crate::types::{EventPatch, InsightEvent, NewEvent};

use super::EventStore;

/// Create a new event (thread-safe: holds write lock during entire operation)
pub fn create(
    store: &EventStore,
    fields: NewEvent,
    created_by: Option<String>,
    created_at: DateTime<Utc>,
) -> DashboardResult<InsightEvent> {
    fields.validate()?;

    let mut table = store.table.write();
    let id = table.next_id.to_string();
    table.next_id += 1;

    let event = InsightEvent {
        id,
        title: fields.title,
        description: fields.description,
        category: fields.category,
        severity: fields.severity,
        created_at,
        updated_at: None,
        location: fields.location,
        metrics: fields.metrics,
        tags: fields.tags,
        created_by,
    };

    table.events.push(event.clone());
    tracing::info!(id = %event.id, category = %event.category, severity = %event.severity, "event created");
    Ok(event)
}

/// Merge a patch into an event (thread-safe: holds write lock during entire operation)
///
/// The merged record is validated before it replaces the stored one, so a
/// rejected patch leaves the event untouched.
pub fn update(
    store: &EventStore,
    id: &str,
    patch: EventPatch,
    now: DateTime<Utc>,
) -> DashboardResult<InsightEvent> {
    let mut table = store.table.write();
    let slot = table
        .events
        .iter_mut()
        .find(|e| e.id == id)
        .ok_or_else(|| DashboardError::event_not_found(id))?;

    let mut candidate = slot.clone();
    patch.apply_to(&mut candidate);
    candidate.validate()?;
    candidate.updated_at = Some(now.max(candidate.created_at));

    *slot = candidate.clone();
    tracing::info!(id = %id, "event updated");
    Ok(candidate)
}

/// Delete an event (thread-safe: holds write lock during entire operation)
pub fn delete(store: &EventStore, id: &str) -> bool {
    let mut table = store.table.write();
    let before = table.events.len();
    table.events.retain(|e| e.id != id);
    let removed = table.events.len() < before;
    if removed {
        tracing::info!(id = %id, "event deleted");
    }
    removed
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;
    use crate::types::{Category, Location, Severity};

    fn new_event(title: &str) -> NewEvent {
        NewEvent::new(
            title,
            "description",
            Category::Ops,
            Severity::Medium,
            Location::new(37.7749, -122.4194, None),
        )
    }

    #[test]
    fn test_create_assigns_sequential_ids() {
        let store = EventStore::new();
        let a = store.create(new_event("a"), None).unwrap();
        let b = store.create(new_event("b"), Some("admin@test.com".into())).unwrap();
        assert_eq!(a.id, "1");
        assert_eq!(b.id, "2");
        assert_eq!(b.created_by.as_deref(), Some("admin@test.com"));
        assert!(a.updated_at.is_none());
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let store = EventStore::new();
        store.create(new_event("a"), None).unwrap();
        let b = store.create(new_event("b"), None).unwrap();
        assert!(store.delete(&b.id));
        let c = store.create(new_event("c"), None).unwrap();
        assert_eq!(c.id, "3");
    }

    #[test]
    fn test_create_rejects_invalid_fields() {
        let store = EventStore::new();
        let err = store.create(new_event(""), None).unwrap_err();
        assert!(matches!(err, DashboardError::InvalidArgument(_)));
        assert!(store.is_empty());
    }

    #[test]
    fn test_update_preserves_identity() {
        let store = EventStore::new();
        let created_at = Utc::now() - Duration::days(3);
        let created = store
            .create_at(new_event("before"), None, created_at)
            .unwrap();

        let patch = EventPatch {
            title: Some("after".to_string()),
            severity: Some(Severity::High),
            ..Default::default()
        };
        let updated = store.update(&created.id, patch).unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created_at);
        assert_eq!(updated.title, "after");
        assert_eq!(updated.severity, Severity::High);
        assert_eq!(updated.category, Category::Ops);
        assert!(updated.updated_at.unwrap() >= updated.created_at);
        assert_eq!(store.get_by_id(&created.id).unwrap(), updated);
    }

    #[test]
    fn test_updated_at_never_precedes_created_at() {
        let store = EventStore::new();
        let future = Utc::now() + Duration::hours(1);
        let created = store.create_at(new_event("x"), None, future).unwrap();
        let updated = update(&store, &created.id, EventPatch::default(), Utc::now()).unwrap();
        assert_eq!(updated.updated_at, Some(future));
    }

    #[test]
    fn test_rejected_patch_leaves_event_untouched() {
        let store = EventStore::new();
        let created = store.create(new_event("keep"), None).unwrap();
        let patch = EventPatch {
            title: Some("changed".to_string()),
            description: Some(" ".to_string()),
            ..Default::default()
        };
        assert!(store.update(&created.id, patch).is_err());
        assert_eq!(store.get_by_id(&created.id).unwrap(), created);
    }

    #[test]
    fn test_update_unknown_id() {
        let store = EventStore::new();
        let err = store.update("404", EventPatch::default()).unwrap_err();
        assert_eq!(err, DashboardError::event_not_found("404"));
    }

    #[test]
    fn test_delete_is_idempotent_negative() {
        let store = EventStore::new();
        let created = store.create(new_event("gone"), None).unwrap();
        assert!(store.delete(&created.id));
        assert!(store.get_by_id(&created.id).is_none());
        assert!(!store.delete(&created.id));
        assert!(!store.delete("never-existed"));
    }

    #[test]
    fn test_snapshot_is_detached() {
        let store = EventStore::new();
        store.create(new_event("one"), None).unwrap();
        let snapshot = store.all();

        store.create(new_event("two"), None).unwrap();
        store
            .update(
                "1",
                EventPatch {
                    title: Some("renamed".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].title, "one");
    }
}
