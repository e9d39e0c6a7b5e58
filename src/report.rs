//! Plain-text table of the coders that are active right now.

use tabled::builder::Builder;
use tabled::settings::object::Segment;
use tabled::settings::{Padding, Style};

use crate::activity::Activity;

const HEADER: [&str; 3] = ["Coder", "Current Project", "Last Seen"];
const SEPARATOR_WIDTH: usize = 15;
const COLUMN_GAP: usize = 8;

/// Human readable recency, truncated to whole seconds.
pub fn last_seen(seconds: f64) -> String {
    format!("{} seconds ago", seconds.trunc() as i64)
}

/// Render the active coders, skipping everyone else.
pub fn render(activities: &[Activity<'_>]) -> String {
    let separator = "-".repeat(SEPARATOR_WIDTH);

    let mut builder = Builder::default();
    builder.push_record(HEADER.iter().map(|title| title.to_string()));
    builder.push_record(vec![separator.clone(); HEADER.len()]);

    for activity in activities.iter().filter(|activity| activity.active) {
        let seconds = match activity.seconds_since_heartbeat {
            Some(seconds) => seconds,
            None => continue,
        };
        builder.push_record(vec![
            activity.coder.email.clone(),
            activity.coder.project().to_string(),
            last_seen(seconds),
        ]);
    }

    builder.push_record(vec![separator; HEADER.len()]);

    let mut table = builder.build();
    table
        .with(Style::empty())
        .modify(Segment::all(), Padding::new(0, COLUMN_GAP, 0, 0));
    table.to_string()
}
