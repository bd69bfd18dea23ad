/// Wall clock, in milliseconds since the Unix epoch.
///
/// Upload keys, link expiry and notice dismissal all read time through this
/// port so tests can pin it.
pub trait ClockPort: Send + Sync {
    fn now_ms(&self) -> i64;
}
