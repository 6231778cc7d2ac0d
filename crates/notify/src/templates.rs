//! Subject/body builders for the lifecycle notification emails.
//!
//! Each builder returns a [`CreateEmail`] ready for [`crate::EmailQueue`].
//! Bodies are plain text; the structured payload (rejection reason, sync
//! diff) also lands in the row's `data` column for auditing.

use techweek_core::diff::EventDiff;
use techweek_core::timefmt::format_date_range;
use techweek_db::models::email::CreateEmail;
use techweek_db::models::event::Event;

/// Sent at approval, pointing the organizer at the Luma edit page.
pub const TEMPLATE_READY_TO_EDIT: &str = "event-ready-to-edit";

/// Sent at rejection, carrying the reason verbatim.
pub const TEMPLATE_REJECTED: &str = "event-rejected";

/// Sent at publication, with the local-time date range.
pub const TEMPLATE_PUBLISHED: &str = "event-published";

/// Sent when reconciliation applies remote field changes.
pub const TEMPLATE_SYNC_UPDATE: &str = "event-sync-update";

/// Sent when reconciliation finds the remote copy cancelled.
pub const TEMPLATE_CANCELLED: &str = "event-cancelled";

/// "Your event was approved — finish setting it up on Luma."
pub fn ready_to_edit(event: &Event) -> CreateEmail {
    let luma_url = event.luma_url.as_deref().unwrap_or_default();
    CreateEmail {
        template: TEMPLATE_READY_TO_EDIT.to_string(),
        recipient: event.organizer_email.clone(),
        subject: format!("\"{}\" was approved — set up your Luma page", event.title),
        body: format!(
            "Hi {},\n\n\
             Good news: \"{}\" was approved for Tech Week.\n\n\
             We created your event page on Luma. Review the details and add a\n\
             cover image before we publish it:\n\n{}\n\n\
             — The Tech Week team",
            event.organizer_name, event.title, luma_url
        ),
        data: serde_json::json!({ "luma_url": luma_url }),
    }
}

/// "Your event was rejected", with the administrator's reason verbatim.
pub fn rejected(event: &Event, reason: &str) -> CreateEmail {
    CreateEmail {
        template: TEMPLATE_REJECTED.to_string(),
        recipient: event.organizer_email.clone(),
        subject: format!("\"{}\" was not accepted", event.title),
        body: format!(
            "Hi {},\n\n\
             Unfortunately \"{}\" was not accepted for Tech Week.\n\n\
             Reason:\n{}\n\n\
             You are welcome to address the above and resubmit.\n\n\
             — The Tech Week team",
            event.organizer_name, event.title, reason
        ),
        data: serde_json::json!({ "reason": reason }),
    }
}

/// "Your event is live", with a human-formatted local date range.
pub fn published(event: &Event) -> CreateEmail {
    let when = format_date_range(event.start_at, event.end_at);
    let luma_url = event.luma_url.as_deref().unwrap_or_default();
    CreateEmail {
        template: TEMPLATE_PUBLISHED.to_string(),
        recipient: event.organizer_email.clone(),
        subject: format!("\"{}\" is live", event.title),
        body: format!(
            "Hi {},\n\n\
             \"{}\" is now published and visible to attendees.\n\n\
             When: {}\n\
             Where: {}\n\
             Luma page: {}\n\n\
             — The Tech Week team",
            event.organizer_name, event.title, when, event.commune, luma_url
        ),
        data: serde_json::json!({ "date_range": when }),
    }
}

/// "We synced changes from Luma", embedding the structured diff.
pub fn sync_update(event: &Event, diff: &EventDiff) -> CreateEmail {
    let fields = diff.changed_fields().join(", ");
    CreateEmail {
        template: TEMPLATE_SYNC_UPDATE.to_string(),
        recipient: event.organizer_email.clone(),
        subject: format!("\"{}\" was updated from Luma", event.title),
        body: format!(
            "Hi {},\n\n\
             We noticed changes to \"{}\" on Luma and updated the Tech Week\n\
             listing to match. Changed: {}.\n\n\
             — The Tech Week team",
            event.organizer_name, event.title, fields
        ),
        data: serde_json::to_value(diff).unwrap_or_default(),
    }
}

/// "Your event was cancelled on Luma and removed from the listing."
pub fn cancelled(event: &Event) -> CreateEmail {
    CreateEmail {
        template: TEMPLATE_CANCELLED.to_string(),
        recipient: event.organizer_email.clone(),
        subject: format!("\"{}\" was cancelled", event.title),
        body: format!(
            "Hi {},\n\n\
             \"{}\" no longer exists on Luma, so we removed it from the\n\
             Tech Week listing. If this was a mistake, please contact us.\n\n\
             — The Tech Week team",
            event.organizer_name, event.title
        ),
        data: serde_json::json!({}),
    }
}
