//! Fuzz the simple fee calculator with random and extreme inputs.
//!
//! Goals:
//! - Find panics, overflows or underflows.
//! - Verify every component equals its saturating formula.
//! - Verify the charge policies never owe more than the total.

#![no_main]

use {
    arbitrary::{Arbitrary, Unstructured},
    libfuzzer_sys::fuzz_target,
    trv1_simple_fees::{
        compute, prepare, resolve,
        schedule::{ApiFee, ExtraPrice, IncludedExtra, NetworkFees, NodeFees, RawSchedule, ServiceFees},
        Api, ChargePolicy, Extra, ExtrasCount,
    },
};

/// Fuzz input: one schedule entry per priced extra plus observed counts.
#[derive(Debug)]
struct FuzzInput {
    node_base: u64,
    multiplier: u64,
    service_base: u64,
    // (name selector, price, node allowance, service allowance, observed count)
    extras: Vec<(u8, u64, u64, u64, u64)>,
}

impl<'a> Arbitrary<'a> for FuzzInput {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let len = u.int_in_range(0..=8)?;
        let mut extras = Vec::with_capacity(len);
        for _ in 0..len {
            extras.push((
                u.arbitrary()?,
                u.arbitrary()?,
                u.arbitrary()?,
                u.arbitrary()?,
                u.arbitrary()?,
            ));
        }
        Ok(FuzzInput {
            node_base: u.arbitrary()?,
            multiplier: u.arbitrary()?,
            service_base: u.arbitrary()?,
            extras,
        })
    }
}

const REGISTRY: [Extra; 6] = [
    Extra::Signatures,
    Extra::Bytes,
    Extra::Keys,
    Extra::Accounts,
    Extra::ProcessingBytes,
    Extra::StateBytes,
];

fuzz_target!(|data: &[u8]| {
    let mut u = Unstructured::new(data);
    let input: FuzzInput = match u.arbitrary() {
        Ok(i) => i,
        Err(_) => return,
    };

    let mut raw = RawSchedule {
        node: NodeFees {
            base_fee: input.node_base,
            extras: Vec::new(),
        },
        network: NetworkFees {
            multiplier: input.multiplier,
        },
        ..Default::default()
    };
    let mut service_extras = Vec::new();
    let mut counts = ExtrasCount::new();
    for &(selector, price, node_included, service_included, observed) in &input.extras {
        // Odd selectors fall outside the registry and must be ignored.
        let name = match REGISTRY.get(usize::from(selector / 2)) {
            Some(extra) if selector % 2 == 0 => extra.name().to_string(),
            _ => format!("UNKNOWN_{selector}"),
        };
        raw.extras.push(ExtraPrice { name: name.clone(), fee: price });
        raw.node.extras.push(IncludedExtra {
            name: name.clone(),
            included_count: node_included,
        });
        service_extras.push(IncludedExtra {
            name: name.clone(),
            included_count: service_included,
        });
        if let Some(extra) = Extra::from_name(&name) {
            counts.set(extra, observed);
        }
    }
    raw.services.push(ServiceFees {
        name: "Crypto".to_string(),
        schedule: vec![ApiFee {
            name: "CryptoCreate".to_string(),
            base_fee: input.service_base,
            extras: service_extras,
        }],
    });

    let prepared = prepare(&raw);

    // ── Test 1: compute must not panic and must follow the formula ──
    let fees = compute(&prepared, Api::CryptoCreate, &counts);
    assert_eq!(fees.node, input.node_base.saturating_add(fees.node_extras));
    assert_eq!(fees.network, input.multiplier.saturating_mul(fees.node));
    assert_eq!(fees.service, input.service_base.saturating_add(fees.service_extras));
    assert_eq!(
        fees.total,
        fees.node.saturating_add(fees.network).saturating_add(fees.service)
    );

    // ── Test 2: an unlisted operation has no base fee ──
    let unlisted = compute(&prepared, Api::TokenMint, &counts);
    assert_eq!(unlisted.node, fees.node);
    assert_eq!(unlisted.service, unlisted.service_extras);

    // ── Test 3: no policy owes more than the total ──
    for policy in [
        ChargePolicy::FullCharge,
        ChargePolicy::ZeroPayer,
        ChargePolicy::NodeAndNetworkOnly,
    ] {
        assert!(resolve(&fees, policy) <= fees.total);
    }
});
