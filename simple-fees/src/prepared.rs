//! Resolution of a loaded schedule into lookup tables.

use {
    crate::{
        api::{Api, Operation},
        extra::Extra,
        schedule::{IncludedExtra, RawSchedule},
    },
    log::debug,
    std::collections::HashMap,
};

/// Immutable lookup tables derived once per schedule version.
///
/// Missing entries mean zero: no base fee, no free allowance, or (for
/// `price_by_extra`) an extra this schedule does not charge for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedSchedule<Op: Operation = Api> {
    node_base: u64,
    node_included_by_extra: HashMap<Extra, u64>,
    network_multiplier: u64,
    price_by_extra: HashMap<Extra, u64>,
    service_base_by_api: HashMap<Op, u64>,
    service_included_by_api_and_extra: HashMap<Op, HashMap<Extra, u64>>,
}

/// Prepare a schedule keyed by the node's own [`Api`] names.
pub fn prepare(raw: &RawSchedule) -> PreparedSchedule {
    prepare_for(raw)
}

/// Prepare a schedule for an arbitrary operation type.
///
/// Extras outside the registry and operations `Op` does not recognize are
/// skipped. An unrecognized operation is dropped with all of its included
/// extras. When a name appears twice the later entry wins.
pub fn prepare_for<Op: Operation>(raw: &RawSchedule) -> PreparedSchedule<Op> {
    let node_included_by_extra = included_by_extra(&raw.node.extras, "node");

    let mut price_by_extra = HashMap::with_capacity(raw.extras.len());
    for price in &raw.extras {
        match Extra::from_name(&price.name) {
            Some(extra) => {
                price_by_extra.insert(extra, price.fee);
            }
            None => debug!("skipping price for unknown extra {:?}", price.name),
        }
    }

    let mut service_base_by_api = HashMap::new();
    let mut service_included_by_api_and_extra = HashMap::new();
    for service in &raw.services {
        for api_fee in &service.schedule {
            let Some(api) = Op::from_name(&api_fee.name) else {
                debug!(
                    "skipping unknown operation {:?} in service {:?}",
                    api_fee.name, service.name
                );
                continue;
            };
            service_base_by_api.insert(api, api_fee.base_fee);
            service_included_by_api_and_extra
                .insert(api, included_by_extra(&api_fee.extras, &api_fee.name));
        }
    }

    let prepared = PreparedSchedule {
        node_base: raw.node.base_fee,
        node_included_by_extra,
        network_multiplier: raw.network.multiplier,
        price_by_extra,
        service_base_by_api,
        service_included_by_api_and_extra,
    };
    debug!(
        "prepared fee schedule: node_base={} network_multiplier={} priced_extras={} apis={}",
        prepared.node_base,
        prepared.network_multiplier,
        prepared.price_by_extra.len(),
        prepared.service_base_by_api.len(),
    );
    prepared
}

fn included_by_extra(entries: &[IncludedExtra], component: &str) -> HashMap<Extra, u64> {
    let mut included = HashMap::with_capacity(entries.len());
    for entry in entries {
        match Extra::from_name(&entry.name) {
            Some(extra) => {
                included.insert(extra, entry.included_count);
            }
            None => debug!(
                "skipping {component} allowance for unknown extra {:?}",
                entry.name
            ),
        }
    }
    included
}

impl<Op: Operation> PreparedSchedule<Op> {
    pub fn node_base(&self) -> u64 {
        self.node_base
    }

    pub fn node_included_by_extra(&self) -> &HashMap<Extra, u64> {
        &self.node_included_by_extra
    }

    pub fn network_multiplier(&self) -> u64 {
        self.network_multiplier
    }

    pub fn price_by_extra(&self) -> &HashMap<Extra, u64> {
        &self.price_by_extra
    }

    pub fn service_base_by_api(&self) -> &HashMap<Op, u64> {
        &self.service_base_by_api
    }

    pub fn service_included_by_api_and_extra(&self) -> &HashMap<Op, HashMap<Extra, u64>> {
        &self.service_included_by_api_and_extra
    }

    /// Base fee of `api`, zero when the schedule does not list it.
    pub fn service_base(&self, api: Op) -> u64 {
        self.service_base_by_api.get(&api).copied().unwrap_or(0)
    }

    /// Service allowances of `api`, `None` when the schedule does not list it.
    pub fn service_included(&self, api: Op) -> Option<&HashMap<Extra, u64>> {
        self.service_included_by_api_and_extra.get(&api)
    }
}

impl From<&RawSchedule> for PreparedSchedule {
    fn from(raw: &RawSchedule) -> Self {
        prepare(raw)
    }
}
