//! Shareable plain-text report.
//!
//! The output is pasted into a messaging app, so it carries nothing but
//! literal `*bold*` markers. Kept deliberately emoji-free: some handsets
//! in the group mangle anything fancier.

use serde::{Deserialize, Serialize};

use crate::partition::Partition;

/// Fixed facts about the session, shown in the report header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventInfo {
    pub title: String,
    /// Weekday tag shown next to the date ("Dom" for Sunday).
    pub weekday_label: String,
    pub time_window: String,
    pub venue: String,
    /// Where people go to confirm; appended as the call-to-action.
    pub confirm_url: String,
}

impl Default for EventInfo {
    fn default() -> Self {
        Self {
            title: "Chapa Torta".to_string(),
            weekday_label: "Dom".to_string(),
            time_window: "07 as 09".to_string(),
            venue: "JJ1".to_string(),
            confirm_url: "https://1horanl.github.io/chapa-torta/index3.html".to_string(),
        }
    }
}

/// Render the full confirmation report.
///
/// Section order is fixed: header, deadline notice (dropped once the
/// deadline has passed), Confirmados padded to `capacity` lines,
/// then Ausentes / Excedentes / Sem confirmacao only when non-empty,
/// and the call-to-action. `main` and `waitlist` stay in queue order;
/// the partition already sorted the other two groups.
pub fn format_report(
    groups: &Partition,
    event: &EventInfo,
    date_label: &str,
    deadline_passed: bool,
    capacity: usize,
) -> String {
    let mut message = String::new();

    message.push_str(&format!("*{} - Confirmacao*\n\n", event.title));
    message.push_str(&format!("Data: {} ({})\n", date_label, event.weekday_label));
    message.push_str(&format!("Horas: {}\n", event.time_window));
    message.push_str(&format!("Quadra: {}\n\n", event.venue));

    if !deadline_passed {
        message.push_str("Confirmar ate Sab. as 14h\n\n");
    }

    message.push_str("\n*Confirmados:*\n");
    for (index, name) in groups.main.iter().enumerate() {
        message.push_str(&numbered_line(index, Some(name)));
    }
    for index in groups.main.len()..capacity {
        message.push_str(&numbered_line(index, None));
    }

    if !groups.absent.is_empty() {
        message.push_str("\n*Ausentes:*\n");
        for (index, name) in groups.absent.iter().enumerate() {
            message.push_str(&numbered_line(index, Some(name)));
        }
    }

    if !groups.waitlist.is_empty() {
        message.push_str("\n*Excedentes:*\n");
        for (index, name) in groups.waitlist.iter().enumerate() {
            message.push_str(&numbered_line(index, Some(name)));
        }
    }

    if !groups.no_response.is_empty() {
        message.push_str("\n*Sem confirmacao:*\n");
        for (index, name) in groups.no_response.iter().enumerate() {
            message.push_str(&numbered_line(index, Some(name)));
        }
    }

    message.push_str("\n\n*Confirme sua presenca:*\n");
    message.push_str(&event.confirm_url);

    message
}

/// `01- Name` or a blank placeholder `01-`.
fn numbered_line(index: usize, name: Option<&str>) -> String {
    match name {
        Some(name) => format!("{:02}- {}\n", index + 1, name),
        None => format!("{:02}-\n", index + 1),
    }
}

/// Messaging deep-link with the report as its URL-encoded text payload.
pub fn share_url(text: &str) -> String {
    format!("https://wa.me/?text={}", urlencoding::encode(text))
}
