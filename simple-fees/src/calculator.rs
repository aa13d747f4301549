use {
    crate::{
        api::Operation, breakdown::FeeBreakdown, extra::Extra, params::ExtrasCount,
        prepared::PreparedSchedule,
    },
    log::trace,
    std::collections::HashMap,
};

/// Compute the fee breakdown of one transaction.
///
/// # Formula
///
/// ```text
/// extras(side) = Σ price[extra] × max(0, count[extra] - included(side, extra))
///
/// node    = node_base + extras(node)
/// network = network_multiplier × node
/// service = service_base(api) + extras(api)
/// total   = node + network + service
/// ```
///
/// The network fee scales the node fee *including* its extras. Every sum and
/// product saturates at `u64::MAX`, so an oversized transaction is charged
/// the maximum instead of a wrapped-around fee. Lookups that miss are zero,
/// which makes this total over all inputs.
pub fn compute<Op: Operation>(
    prepared: &PreparedSchedule<Op>,
    api: Op,
    extras_count: &ExtrasCount,
) -> FeeBreakdown {
    let node_extras = extras_fee(
        prepared.price_by_extra(),
        prepared.node_included_by_extra(),
        extras_count,
    );
    let node = prepared.node_base().saturating_add(node_extras);

    let network = prepared.network_multiplier().saturating_mul(node);

    let service_extras = match prepared.service_included(api) {
        Some(included) => extras_fee(prepared.price_by_extra(), included, extras_count),
        None => extras_fee(prepared.price_by_extra(), &HashMap::new(), extras_count),
    };
    let service = prepared.service_base(api).saturating_add(service_extras);

    let total = node.saturating_add(network).saturating_add(service);

    let breakdown = FeeBreakdown {
        node,
        node_extras,
        network,
        service,
        service_extras,
        total,
    };
    trace!("computed fees for {api:?}: {breakdown:?}");
    breakdown
}

/// Charge for the extras that exceed a component's free allowance.
///
/// An extra with no price contributes nothing whatever its count, and a count
/// at or below the allowance contributes exactly zero.
pub fn extras_fee(
    price_by_extra: &HashMap<Extra, u64>,
    included_by_extra: &HashMap<Extra, u64>,
    extras_count: &ExtrasCount,
) -> u64 {
    extras_count
        .iter()
        .fold(0u64, |fee, (extra, count)| {
            let Some(price) = price_by_extra.get(&extra) else {
                return fee;
            };
            let included = included_by_extra.get(&extra).copied().unwrap_or(0);
            let chargeable = count.saturating_sub(included);
            fee.saturating_add(price.saturating_mul(chargeable))
        })
}
