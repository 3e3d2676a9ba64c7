//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Round seeds (OS/browser entropy with a clock fallback)
//! - The browser binding the page's frame loop drives

#[cfg(target_arch = "wasm32")]
pub mod web;

/// Seed for a new session
///
/// Entropy failures are not fatal: the clock stands in, and if even that is
/// unavailable a fixed seed is used.
pub fn entropy_seed() -> u64 {
    match getrandom::u64() {
        Ok(seed) => seed,
        Err(e) => {
            log::warn!("Entropy unavailable ({}), seeding from clock", e);
            clock_seed()
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn clock_seed() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn clock_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0x5EED)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeds_vary() {
        // Two draws colliding would mean entropy is broken or stubbed
        let seeds: Vec<u64> = (0..4).map(|_| entropy_seed()).collect();
        assert!(seeds.windows(2).any(|w| w[0] != w[1]));
    }
}
