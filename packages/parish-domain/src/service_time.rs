/// Converts a family group's `HH:MM` service time to minutes past midnight,
/// the sort key for the by-service-time metric.
pub fn service_time_minutes(raw: &str) -> Option<u32> {
	let (hours, minutes) = raw.trim().split_once(':')?;
	let hours: u32 = hours.parse().ok()?;
	let minutes: u32 = minutes.parse().ok()?;

	if hours > 23 || minutes > 59 {
		return None;
	}

	Some(hours * 60 + minutes)
}
