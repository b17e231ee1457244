#[cfg(debug_assertions)]
pub fn booking_url() -> &'static str {
    "#contact" // Stay on the page when running locally
}

#[cfg(not(debug_assertions))]
pub fn booking_url() -> &'static str {
    "https://cal.com/convertic/strategy-call"
}
