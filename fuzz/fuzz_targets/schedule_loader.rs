//! Fuzz the fee schedule loader with arbitrary bytes.
//!
//! Goals:
//! - Loading never panics, whatever the input.
//! - Any document that loads also prepares and prices without panicking.

#![no_main]

use {
    libfuzzer_sys::fuzz_target,
    trv1_simple_fees::{compute, prepare, Api, ExtrasCount, RawSchedule},
};

fuzz_target!(|data: &[u8]| {
    let Ok(raw) = RawSchedule::from_slice(data) else {
        return;
    };
    let prepared = prepare(&raw);

    let counts = ExtrasCount::new().signatures(u64::MAX).bytes(1).keys(0);
    for api in [Api::CryptoCreate, Api::CryptoTransfer, Api::ConsensusSubmitMessage] {
        let fees = compute(&prepared, api, &counts);
        assert!(fees.total >= fees.node);
        assert!(fees.total >= fees.service);
    }
});
