// src/config/decode.rs

//! HCL document → [`RawConfig`].
//!
//! Both HCL syntaxes are accepted. A document whose first non-whitespace
//! character is `{` is read as HCL-JSON, anything else as native HCL. Native
//! HCL is converted into the same JSON shape (`service "api" {}` becomes
//! `{"service": {"api": {}}}`), so `RawConfig` only has one serde mapping.
//!
//! Unknown keys are ignored. Known keys with the wrong type or shape fail
//! with [`ConfigError::Decode`] naming the dotted field path.

use std::fmt;
use std::marker::PhantomData;

use serde::de::value::MapAccessDeserializer;
use serde::de::{MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer};
use serde_json::Value as JsonValue;

use crate::config::model::{HandlerConfig, RawConfig, RawServiceConfig};
use crate::errors::{ConfigError, Result};

/// Decode a configuration document. Pure: no defaults, no validation.
pub fn decode(input: &str) -> Result<RawConfig> {
    let document: JsonValue = if is_json(input) {
        serde_json::from_str(input)?
    } else {
        hcl::from_str(input)?
    };

    serde_path_to_error::deserialize(document).map_err(|err| {
        let field = err.path().to_string();
        ConfigError::decode(field, err.into_inner().to_string())
    })
}

fn is_json(input: &str) -> bool {
    input.trim_start().starts_with('{')
}

/// A block that may appear once (an object) or repeatedly (a list).
pub(crate) fn one_or_many<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    deserializer.deserialize_any(OneOrMany(PhantomData))
}

/// `service "<name>"` blocks as an ordered list with the label in `name`.
///
/// Accepts the label map (`{"api": {...}, "web": {...}}`) and the JSON list
/// form (`[{"api": {...}}, {"web": {...}}]`).
pub(crate) fn labelled_services<'de, D>(
    deserializer: D,
) -> std::result::Result<Vec<RawServiceConfig>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(LabelledServices)
}

/// Repeated `handlers` blocks are appended in document order.
pub(crate) fn merged_handlers<'de, D>(
    deserializer: D,
) -> std::result::Result<HandlerConfig, D::Error>
where
    D: Deserializer<'de>,
{
    let blocks: Vec<HandlerConfig> = one_or_many(deserializer)?;
    Ok(blocks
        .into_iter()
        .fold(HandlerConfig::default(), |mut merged, block| {
            merged.stdout.extend(block.stdout);
            merged.email.extend(block.email);
            merged.pagerduty.extend(block.pagerduty);
            merged
        }))
}

struct OneOrMany<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for OneOrMany<T> {
    type Value = Vec<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a block or a list of blocks")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> std::result::Result<Vec<T>, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(items)
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> std::result::Result<Vec<T>, A::Error> {
        T::deserialize(MapAccessDeserializer::new(map)).map(|item| vec![item])
    }
}

struct Blocks<T>(Vec<T>);

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Blocks<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        one_or_many(deserializer).map(Blocks)
    }
}

struct ServiceGroup(Vec<RawServiceConfig>);

impl<'de> Deserialize<'de> for ServiceGroup {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        labelled_services(deserializer).map(ServiceGroup)
    }
}

struct LabelledServices;

impl<'de> Visitor<'de> for LabelledServices {
    type Value = Vec<RawServiceConfig>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("service blocks keyed by name")
    }

    fn visit_map<A: MapAccess<'de>>(
        self,
        mut map: A,
    ) -> std::result::Result<Self::Value, A::Error> {
        let mut services = Vec::new();
        while let Some(name) = map.next_key::<String>()? {
            let Blocks(blocks) = map.next_value::<Blocks<RawServiceConfig>>()?;
            services.extend(blocks.into_iter().map(|service| RawServiceConfig {
                name: name.clone(),
                ..service
            }));
        }
        Ok(services)
    }

    fn visit_seq<A: SeqAccess<'de>>(
        self,
        mut seq: A,
    ) -> std::result::Result<Self::Value, A::Error> {
        let mut services = Vec::new();
        while let Some(ServiceGroup(group)) = seq.next_element()? {
            services.extend(group);
        }
        Ok(services)
    }
}
