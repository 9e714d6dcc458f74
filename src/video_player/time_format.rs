// SPDX-License-Identifier: MPL-2.0
//! Elapsed/duration labels for the transport bar.

/// Seconds per minute as f64 for calculations.
pub const SECS_PER_MINUTE: f64 = 60.0;

/// Formats seconds as `m:ss`.
///
/// Minutes are unpadded, seconds are zero-padded to two digits, both by
/// floor division. Inputs are non-negative; anything else is out of contract.
///
/// # Examples
///
/// ```
/// use showreel::video_player::time_format::format_time;
///
/// assert_eq!(format_time(65.0), "1:05");
/// assert_eq!(format_time(5.0), "0:05");
/// ```
pub fn format_time(secs: f64) -> String {
    let minutes = (secs / SECS_PER_MINUTE).floor() as u64;
    let seconds = (secs % SECS_PER_MINUTE).floor() as u64;
    format!("{minutes}:{seconds:02}")
}
