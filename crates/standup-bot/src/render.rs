//! Chat response rendering.
//!
//! All command replies that show stored updates are built here, so the
//! report shape stays identical no matter which command asked for it.

use update_store::RoomRecord;

/// Render updates as a `- ` bulleted list, one per line.
pub fn bullet_list(updates: &[String]) -> String {
    updates
        .iter()
        .map(|update| format!("- {}", update))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Single-user report for one day: a header plus a fenced update list.
pub fn user_day_block(username: &str, date: &str, updates: &[String]) -> String {
    format!(
        "Daily update of {} for {}:\n```\n{}\n```",
        date,
        username,
        bullet_list(updates)
    )
}

/// All-users report for one day.
///
/// One section per recorded user, in username order. Users without updates
/// on that day still get a section, marked `- No updates yet`.
pub fn room_day_report(record: &RoomRecord, date: &str) -> String {
    if record.is_empty() {
        return format!("No updates for {} yet", date);
    }

    let mut output = String::new();
    for (username, user) in &record.users {
        output.push_str(&format!("Updates for {} on {}:\n", username, date));

        let updates = user.updates_on(date);
        if updates.is_empty() {
            output.push_str("- No updates yet");
        } else {
            output.push_str(&bullet_list(updates));
        }
        output.push('\n');
    }

    output
}

/// Day-by-day report over several dates, in the given order.
pub fn multi_day_report(record: &RoomRecord, dates: &[String]) -> String {
    dates
        .iter()
        .map(|date| room_day_report(record, date))
        .collect::<Vec<_>>()
        .join("\n")
}
