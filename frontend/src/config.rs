use std::time::Duration;

#[cfg(all(debug_assertions, not(feature = "simulated-intake")))]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001"  // Development URL when running locally
}

#[cfg(all(not(debug_assertions), not(feature = "simulated-intake")))]
pub fn get_backend_url() -> &'static str {
    ""  // Production URL
}

#[cfg(not(feature = "simulated-intake"))]
pub fn lead_intake_url() -> String {
    format!("{}/api/leads", get_backend_url())
}

/// Timers in gloo take milliseconds as u32.
pub fn millis(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
}
