//! Classification of coders as active or idle.
//!
//! A coder is active when their last heartbeat lies within
//! [`ACTIVITY_THRESHOLD_SECS`] of "now". Both instants are localised into the
//! coder's own timezone before being compared, which changes how they read
//! but never the distance between them.

use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::Tz;
use log::debug;

use crate::coder::Coder;
use crate::error::{Error, Result};
use crate::team::TeamSnapshot;

pub const ACTIVITY_THRESHOLD_SECS: f64 = 120.0;

/// Zone used for coders that have not set one.
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::America::Los_Angeles;

/// The derived, per-report view of a single coder.
#[derive(Debug, Clone)]
pub struct Activity<'a> {
    pub coder: &'a Coder,
    pub timezone: Tz,
    pub local_heartbeat: Option<DateTime<Tz>>,
    pub seconds_since_heartbeat: Option<f64>,
    pub active: bool,
}

pub fn resolve_timezone(name: Option<&str>) -> Result<Tz> {
    match name.map(str::trim) {
        None | Some("") => Ok(DEFAULT_TIMEZONE),
        Some(name) => name
            .parse::<Tz>()
            .map_err(|_| Error::Timezone(name.to_string())),
    }
}

/// Absolute number of seconds between two instants, measured on the wall
/// clock of `timezone`.
pub fn seconds_between(timezone: Tz, heartbeat: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    let local_heartbeat = heartbeat.with_timezone(&timezone);
    let local_now = now.with_timezone(&timezone);
    elapsed_seconds(&local_heartbeat, &local_now)
}

fn elapsed_seconds<Z: TimeZone>(from: &DateTime<Z>, to: &DateTime<Z>) -> f64 {
    let delta = to.clone() - from.clone();
    let seconds = match delta.num_microseconds() {
        Some(micros) => micros as f64 / 1_000_000.0,
        None => delta.num_seconds() as f64,
    };
    seconds.abs()
}

pub fn classify(coder: &Coder, now: DateTime<Utc>) -> Result<Activity<'_>> {
    let timezone = resolve_timezone(coder.timezone.as_deref())?;
    if coder.timezone.is_none() {
        debug!("{} has no timezone, using {}", coder.email, timezone);
    }

    let local_heartbeat = coder
        .last_heartbeat
        .map(|heartbeat| heartbeat.with_timezone(&timezone));
    let local_now = now.with_timezone(&timezone);
    let seconds_since_heartbeat = local_heartbeat
        .as_ref()
        .map(|heartbeat| elapsed_seconds(heartbeat, &local_now));
    let active = seconds_since_heartbeat
        .map(|seconds| seconds <= ACTIVITY_THRESHOLD_SECS)
        .unwrap_or(false);

    Ok(Activity {
        coder,
        timezone,
        local_heartbeat,
        seconds_since_heartbeat,
        active,
    })
}

/// Classify every coder in the snapshot, preserving order.
///
/// An unknown timezone on any coder fails the whole snapshot.
pub fn classify_snapshot(
    snapshot: &TeamSnapshot,
    now: DateTime<Utc>,
) -> Result<Vec<Activity<'_>>> {
    snapshot
        .coders
        .iter()
        .map(|coder| classify(coder, now))
        .collect()
}
