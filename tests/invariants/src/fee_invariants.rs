//! Property-based tests for the simple fee engine.
//!
//! Properties tested:
//! 1. Each extra unit beyond the allowance costs exactly its price
//! 2. Counts at or below the allowance cost nothing
//! 3. Network fee == multiplier × node fee
//! 4. Saturating results equal the exact result clamped to u64::MAX
//! 5. Unknown extra and operation names are dropped without error
//! 6. Charge policies select the documented components

#[cfg(test)]
mod tests {
    use {
        proptest::prelude::*,
        trv1_simple_fees::{
            calculator::compute,
            policy::resolve,
            prepare,
            schedule::{ApiFee, ExtraPrice, IncludedExtra, NetworkFees, NodeFees, RawSchedule, ServiceFees},
            Api, ChargePolicy, Extra, ExtrasCount, FeeBreakdown, PreparedSchedule,
        },
    };

    const PRICED: [Extra; 4] = [Extra::Signatures, Extra::Bytes, Extra::Keys, Extra::Accounts];

    /// Schedule parameters for the four priced extras.
    #[derive(Debug, Clone)]
    struct Params {
        node_base: u64,
        multiplier: u64,
        prices: [u64; 4],
        node_included: [u64; 4],
        service_base: u64,
        service_included: [u64; 4],
    }

    fn included(extras: [u64; 4]) -> Vec<IncludedExtra> {
        PRICED
            .iter()
            .zip(extras)
            .map(|(extra, count)| IncludedExtra {
                name: extra.name().to_string(),
                included_count: count,
            })
            .collect()
    }

    fn schedule(params: &Params) -> PreparedSchedule {
        prepare(&RawSchedule {
            node: NodeFees {
                base_fee: params.node_base,
                extras: included(params.node_included),
            },
            network: NetworkFees {
                multiplier: params.multiplier,
            },
            extras: PRICED
                .iter()
                .zip(params.prices)
                .map(|(extra, fee)| ExtraPrice {
                    name: extra.name().to_string(),
                    fee,
                })
                .collect(),
            services: vec![ServiceFees {
                name: "Crypto".to_string(),
                schedule: vec![ApiFee {
                    name: "CryptoCreate".to_string(),
                    base_fee: params.service_base,
                    extras: included(params.service_included),
                }],
            }],
        })
    }

    fn counts(values: [u64; 4]) -> ExtrasCount {
        PRICED.iter().copied().zip(values).collect()
    }

    /// Values small enough that no intermediate result overflows.
    fn small_params() -> impl Strategy<Value = Params> {
        (
            0..=1_000_000_000_000u64,
            0..=20u64,
            prop::array::uniform4(0..=1_000_000u64),
            prop::array::uniform4(0..=5u64),
            0..=1_000_000_000_000u64,
            prop::array::uniform4(0..=5u64),
        )
            .prop_map(
                |(node_base, multiplier, prices, node_included, service_base, service_included)| {
                    Params {
                        node_base,
                        multiplier,
                        prices,
                        node_included,
                        service_base,
                        service_included,
                    }
                },
            )
    }

    fn any_params() -> impl Strategy<Value = Params> {
        (
            any::<u64>(),
            any::<u64>(),
            prop::array::uniform4(any::<u64>()),
            prop::array::uniform4(any::<u64>()),
            any::<u64>(),
            prop::array::uniform4(any::<u64>()),
        )
            .prop_map(
                |(node_base, multiplier, prices, node_included, service_base, service_included)| {
                    Params {
                        node_base,
                        multiplier,
                        prices,
                        node_included,
                        service_base,
                        service_included,
                    }
                },
            )
    }

    fn clamp(value: u128) -> u64 {
        u64::try_from(value).unwrap_or(u64::MAX)
    }

    /// Exact extras fee in wide arithmetic.
    fn exact_extras(prices: [u64; 4], allowance: [u64; 4], observed: [u64; 4]) -> u128 {
        (0..4).fold(0u128, |sum, i| {
            let chargeable = observed[i].saturating_sub(allowance[i]) as u128;
            sum.saturating_add((prices[i] as u128).saturating_mul(chargeable))
        })
    }

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // 1. Extras are linear beyond the allowance
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn one_more_unit_costs_its_price(
            params in small_params(),
            observed in prop::array::uniform4(0..=1_000u64),
            index in 0..4usize,
        ) {
            let prepared = schedule(&params);
            let mut observed = observed;
            // Start at or above both allowances so the extra unit is chargeable.
            observed[index] = observed[index]
                .max(params.node_included[index])
                .max(params.service_included[index]);
            let before = compute(&prepared, Api::CryptoCreate, &counts(observed));
            observed[index] += 1;
            let after = compute(&prepared, Api::CryptoCreate, &counts(observed));

            prop_assert_eq!(after.service_extras - before.service_extras, params.prices[index]);
            prop_assert_eq!(after.node_extras - before.node_extras, params.prices[index]);
        }
    }

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // 2. Allowance floor
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn counts_within_allowance_are_free(
            params in small_params(),
            observed in prop::array::uniform4(0..=1_000u64),
            index in 0..4usize,
            within in 0..=5u64,
        ) {
            let prepared = schedule(&params);
            let allowance = params.node_included[index].min(params.service_included[index]);
            let mut with_extra = observed;
            with_extra[index] = within.min(allowance);
            let mut without_extra = observed;
            without_extra[index] = 0;

            let charged = compute(&prepared, Api::CryptoCreate, &counts(with_extra));
            let free = compute(&prepared, Api::CryptoCreate, &counts(without_extra));
            prop_assert_eq!(charged, free);
        }
    }

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // 3. Exact composition below the overflow threshold
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn components_compose_exactly(
            params in small_params(),
            observed in prop::array::uniform4(0..=1_000u64),
        ) {
            let fees = compute(&schedule(&params), Api::CryptoCreate, &counts(observed));

            prop_assert_eq!(fees.node, params.node_base + fees.node_extras);
            prop_assert_eq!(fees.network, params.multiplier * fees.node);
            prop_assert_eq!(fees.service, params.service_base + fees.service_extras);
            prop_assert_eq!(fees.total, fees.node + fees.network + fees.service);
        }
    }

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // 4. Saturation
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        #[test]
        fn saturation_is_a_clamp_of_the_exact_value(
            params in any_params(),
            observed in prop::array::uniform4(any::<u64>()),
        ) {
            let fees = compute(&schedule(&params), Api::CryptoCreate, &counts(observed));

            let node_extras = exact_extras(params.prices, params.node_included, observed);
            let node = (params.node_base as u128).saturating_add(node_extras);
            let network = (params.multiplier as u128).saturating_mul(node);
            let service_extras = exact_extras(params.prices, params.service_included, observed);
            let service = (params.service_base as u128).saturating_add(service_extras);
            let total = node.saturating_add(network).saturating_add(service);

            prop_assert_eq!(fees.node_extras, clamp(node_extras));
            prop_assert_eq!(fees.node, clamp(node));
            prop_assert_eq!(fees.network, clamp(network));
            prop_assert_eq!(fees.service_extras, clamp(service_extras));
            prop_assert_eq!(fees.service, clamp(service));
            prop_assert_eq!(fees.total, clamp(total));

            // Never below any of its operands.
            prop_assert!(fees.node >= params.node_base);
            prop_assert!(fees.service >= params.service_base);
            prop_assert!(fees.total >= fees.node);
            prop_assert!(fees.total >= fees.network);
            prop_assert!(fees.total >= fees.service);
        }
    }

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // 5. Unknown names
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn unknown_names_are_dropped(
            extra_name in "[A-Z][A-Z_]{0,24}",
            api_name in "[A-Z][A-Za-z]{0,24}",
            fee in any::<u64>(),
        ) {
            prop_assume!(Extra::from_name(&extra_name).is_none());
            prop_assume!(api_name.parse::<Api>().is_err());

            let prepared = prepare(&RawSchedule {
                node: NodeFees {
                    base_fee: 1,
                    extras: vec![IncludedExtra { name: extra_name.clone(), included_count: 3 }],
                },
                extras: vec![ExtraPrice { name: extra_name.clone(), fee }],
                services: vec![ServiceFees {
                    name: "Future".to_string(),
                    schedule: vec![ApiFee { name: api_name, base_fee: fee, extras: Vec::new() }],
                }],
                ..Default::default()
            });

            prop_assert_eq!(prepared.node_base(), 1);
            prop_assert!(prepared.node_included_by_extra().is_empty());
            prop_assert!(prepared.price_by_extra().is_empty());
            prop_assert!(prepared.service_base_by_api().is_empty());
            prop_assert!(prepared.service_included_by_api_and_extra().is_empty());
        }
    }

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // 6. Charge policies
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    fn any_breakdown() -> impl Strategy<Value = FeeBreakdown> {
        prop::array::uniform6(any::<u64>()).prop_map(
            |[node, node_extras, network, service, service_extras, total]| FeeBreakdown {
                node,
                node_extras,
                network,
                service,
                service_extras,
                total,
            },
        )
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        #[test]
        fn policies_select_documented_components(breakdown in any_breakdown()) {
            prop_assert_eq!(resolve(&breakdown, ChargePolicy::FullCharge), breakdown.total);
            prop_assert_eq!(resolve(&breakdown, ChargePolicy::ZeroPayer), 0);
            prop_assert_eq!(
                resolve(&breakdown, ChargePolicy::NodeAndNetworkOnly),
                breakdown.node.saturating_add(breakdown.network)
            );
        }

        #[test]
        fn node_and_network_charge_never_exceeds_full_charge(
            params in any_params(),
            observed in prop::array::uniform4(any::<u64>()),
        ) {
            let fees = compute(&schedule(&params), Api::CryptoCreate, &counts(observed));
            prop_assert!(
                resolve(&fees, ChargePolicy::NodeAndNetworkOnly)
                    <= resolve(&fees, ChargePolicy::FullCharge)
            );
        }
    }
}
