//! Field-by-field comparison of a local event against its remote copy.
//!
//! The reconciliation job only syncs the three provider-authoritative
//! fields: title, start time, end time. Everything else (description,
//! commune, capacity, ...) is locally authoritative and never touched.
//! Comparison uses exact timestamp equality — every detected difference is
//! treated as real, with no debounce or threshold.

use serde::Serialize;

use crate::types::Timestamp;

/// An old/new pair for a single changed field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldChange<T> {
    pub old: T,
    pub new: T,
}

/// The provider-synced subset of an event's fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncedFields {
    pub title: String,
    pub start_at: Timestamp,
    pub end_at: Timestamp,
}

/// Structured diff between the local row and the remote record.
///
/// Serializes as `{"title": {"old": ..., "new": ...}, ...}` with unchanged
/// fields omitted, which is the shape embedded in the sync-update email.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EventDiff {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<FieldChange<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_at: Option<FieldChange<Timestamp>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_at: Option<FieldChange<Timestamp>>,
}

impl EventDiff {
    /// Compare local values against the remote record. Remote values win.
    pub fn between(local: &SyncedFields, remote: &SyncedFields) -> Self {
        let mut diff = Self::default();
        if local.title != remote.title {
            diff.title = Some(FieldChange {
                old: local.title.clone(),
                new: remote.title.clone(),
            });
        }
        if local.start_at != remote.start_at {
            diff.start_at = Some(FieldChange {
                old: local.start_at,
                new: remote.start_at,
            });
        }
        if local.end_at != remote.end_at {
            diff.end_at = Some(FieldChange {
                old: local.end_at,
                new: remote.end_at,
            });
        }
        diff
    }

    /// Returns `true` when no field differs.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.start_at.is_none() && self.end_at.is_none()
    }

    /// Names of the changed fields, for logging.
    pub fn changed_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.title.is_some() {
            fields.push("title");
        }
        if self.start_at.is_some() {
            fields.push("start_at");
        }
        if self.end_at.is_some() {
            fields.push("end_at");
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn fields(title: &str, start_h: u32, end_h: u32) -> SyncedFields {
        SyncedFields {
            title: title.to_string(),
            start_at: Utc.with_ymd_and_hms(2025, 11, 17, start_h, 0, 0).unwrap(),
            end_at: Utc.with_ymd_and_hms(2025, 11, 17, end_h, 0, 0).unwrap(),
        }
    }

    #[test]
    fn identical_fields_produce_empty_diff() {
        let local = fields("Rust Santiago", 18, 21);
        let diff = EventDiff::between(&local, &local.clone());
        assert!(diff.is_empty());
        assert!(diff.changed_fields().is_empty());
    }

    #[test]
    fn title_change_detected() {
        let local = fields("B", 18, 21);
        let remote = fields("A", 18, 21);
        let diff = EventDiff::between(&local, &remote);
        assert!(!diff.is_empty());
        let change = diff.title.unwrap();
        assert_eq!(change.old, "B");
        assert_eq!(change.new, "A");
        assert!(diff.start_at.is_none());
        assert!(diff.end_at.is_none());
    }

    #[test]
    fn time_changes_detected_independently() {
        let local = fields("Rust Santiago", 18, 21);
        let remote = fields("Rust Santiago", 19, 22);
        let diff = EventDiff::between(&local, &remote);
        assert_eq!(diff.changed_fields(), vec!["start_at", "end_at"]);
        assert!(diff.title.is_none());
    }

    #[test]
    fn serializes_with_old_new_shape() {
        let local = fields("B", 18, 21);
        let remote = fields("A", 18, 21);
        let diff = EventDiff::between(&local, &remote);
        let json = serde_json::to_value(&diff).unwrap();
        assert_eq!(json["title"]["old"], "B");
        assert_eq!(json["title"]["new"], "A");
        assert!(json.get("start_at").is_none());
    }

    #[test]
    fn sub_second_difference_counts_as_real() {
        let local = fields("Rust Santiago", 18, 21);
        let mut remote = local.clone();
        remote.start_at += chrono::Duration::milliseconds(1);
        let diff = EventDiff::between(&local, &remote);
        assert_eq!(diff.changed_fields(), vec!["start_at"]);
    }
}
