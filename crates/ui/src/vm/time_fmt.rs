/// `m:ss`, minutes unpadded.
#[must_use]
pub fn format_countdown(secs: u64) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}
