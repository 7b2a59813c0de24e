use std::sync::OnceLock;
use std::time::Instant;

static START_TIME: OnceLock<Instant> = OnceLock::new();

/// Record the server start time. Call once from `main`; later calls are
/// no-ops.
pub fn init_start_time() {
    START_TIME.get_or_init(Instant::now);
}

pub fn uptime_secs() -> u64 {
    START_TIME.get_or_init(Instant::now).elapsed().as_secs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uptime_should_be_monotonic() {
        init_start_time();
        let first = uptime_secs();
        let second = uptime_secs();

        assert!(second >= first);
    }
}
