//! Loading of fee schedule documents.
//!
//! A schedule is a JSON document of the shape
//!
//! ```json
//! {
//!   "node":     { "baseFee": 100000, "extras": [ { "name": "SIGNATURES", "includedCount": 1 } ] },
//!   "network":  { "multiplier": 9 },
//!   "extras":   [ { "name": "SIGNATURES", "fee": 100000 } ],
//!   "services": [ { "name": "Crypto", "schedule": [ { "name": "CryptoCreate", "baseFee": 499000000, "extras": [] } ] } ]
//! }
//! ```
//!
//! Every section is optional. Loading applies the defaults (absent numbers are
//! zero, absent lists are empty) and checks primitive types, but leaves extra
//! and operation names unresolved so that documents written for a newer
//! registry still load. Name resolution happens in [`crate::prepared`].
//!
//! `null` is read as an absent value everywhere. `null` list elements are
//! skipped.

use {
    crate::error::ScheduleFormatError,
    log::debug,
    serde::{
        de::{self, value::MapAccessDeserializer, MapAccess, Visitor},
        Deserialize, Deserializer, Serialize,
    },
    serde_json::Value,
    std::{fmt, fs, marker::PhantomData, path::Path, str::FromStr},
};

/// A fee schedule document with defaults applied and names still unresolved.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawSchedule {
    #[serde(deserialize_with = "object_or_default")]
    pub node: NodeFees,
    #[serde(deserialize_with = "object_or_default")]
    pub network: NetworkFees,
    /// Global unit price of each extra, shared by the node and service components.
    #[serde(deserialize_with = "objects")]
    pub extras: Vec<ExtraPrice>,
    #[serde(deserialize_with = "objects")]
    pub services: Vec<ServiceFees>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NodeFees {
    #[serde(deserialize_with = "or_default")]
    pub base_fee: u64,
    #[serde(deserialize_with = "objects")]
    pub extras: Vec<IncludedExtra>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkFees {
    #[serde(deserialize_with = "or_default")]
    pub multiplier: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtraPrice {
    #[serde(deserialize_with = "or_default")]
    pub name: String,
    #[serde(deserialize_with = "or_default")]
    pub fee: u64,
}

/// Free allowance of one extra granted by a fee component.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IncludedExtra {
    #[serde(deserialize_with = "or_default")]
    pub name: String,
    #[serde(deserialize_with = "or_default")]
    pub included_count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceFees {
    #[serde(deserialize_with = "or_default")]
    pub name: String,
    #[serde(deserialize_with = "objects")]
    pub schedule: Vec<ApiFee>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiFee {
    #[serde(deserialize_with = "or_default")]
    pub name: String,
    #[serde(deserialize_with = "or_default")]
    pub base_fee: u64,
    #[serde(deserialize_with = "objects")]
    pub extras: Vec<IncludedExtra>,
}

type Result<T> = std::result::Result<T, ScheduleFormatError>;

impl RawSchedule {
    pub fn from_json_str(text: &str) -> Result<Self> {
        let mut deserializer = serde_json::Deserializer::from_str(text);
        let schedule = Self::load(&mut deserializer)?;
        deserializer.end()?;
        Ok(schedule)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let mut deserializer = serde_json::Deserializer::from_slice(bytes);
        let schedule = Self::load(&mut deserializer)?;
        deserializer.end()?;
        Ok(schedule)
    }

    /// Read and load a schedule file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|err| ScheduleFormatError::Unreadable {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        let schedule = Self::from_slice(&bytes)?;
        debug!("loaded fee schedule from {}", path.display());
        Ok(schedule)
    }

    /// Load a schedule from an already parsed document tree.
    pub fn from_value(document: &Value) -> Result<Self> {
        Self::load(document)
    }

    fn load<'de, D>(deserializer: D) -> Result<Self>
    where
        D: Deserializer<'de, Error = serde_json::Error>,
    {
        let Object(schedule): Object<Self> = serde_path_to_error::deserialize(deserializer)?;
        let schedule = schedule.unwrap_or_default();
        debug!(
            "fee schedule document: {} extra prices, {} services, {} operations",
            schedule.extras.len(),
            schedule.services.len(),
            schedule.operation_count(),
        );
        Ok(schedule)
    }

    /// Number of operation entries across all services, recognized or not.
    pub fn operation_count(&self) -> usize {
        self.services.iter().map(|service| service.schedule.len()).sum()
    }
}

impl FromStr for RawSchedule {
    type Err = ScheduleFormatError;

    fn from_str(text: &str) -> Result<Self> {
        Self::from_json_str(text)
    }
}

/// A JSON object or `null`. Derived struct impls also accept arrays, which a
/// schedule never uses, so only maps are forwarded to `T`.
struct Object<T>(Option<T>);

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Object<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer
            .deserialize_any(ObjectVisitor(PhantomData))
            .map(Object)
    }
}

struct ObjectVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for ObjectVisitor<T> {
    type Value = Option<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an object or null")
    }

    fn visit_unit<E: de::Error>(self) -> std::result::Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_none<E: de::Error>(self) -> std::result::Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> std::result::Result<Self::Value, A::Error> {
        T::deserialize(MapAccessDeserializer::new(map)).map(Some)
    }
}

fn or_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn object_or_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let Object(value) = Object::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

fn objects<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let elements: Option<Vec<Object<T>>> = Option::deserialize(deserializer)?;
    Ok(elements
        .into_iter()
        .flatten()
        .filter_map(|Object(element)| element)
        .collect())
}
