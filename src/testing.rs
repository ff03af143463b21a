//! Deterministic random sources for unit tests.

use mockall::mock;
use rand::RngCore;

mock! {
    pub Source {}
    impl RngCore for Source {
        fn next_u32(&mut self) -> u32;
        fn next_u64(&mut self) -> u64;
        fn fill_bytes(&mut self, dst: &mut [u8]);
    }
}

/// Every `f64` draw is 0.0, so every decay attempt succeeds.
pub(crate) fn always_decay() -> MockSource {
    let mut source = MockSource::new();
    source.expect_next_u64().return_const(0u64);
    source.expect_next_u32().return_const(0u32);
    source
}

/// Every `f64` draw is just below 1.0, so no decay attempt succeeds.
pub(crate) fn never_decay() -> MockSource {
    let mut source = MockSource::new();
    source.expect_next_u64().return_const(u64::MAX);
    source.expect_next_u32().return_const(u32::MAX);
    source
}

/// Panics if a draw is ever made.
pub(crate) fn untouched() -> MockSource {
    let mut source = MockSource::new();
    source.expect_next_u64().never();
    source.expect_next_u32().never();
    source
}
