// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Validated entity identifiers of the `domain.object` form.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// An automation API entity identifier, such as `sensor.kitchen_temperature`.
///
/// Identifiers consist of a domain and an object id separated by a single
/// dot. Both halves must be non-empty; validation happens at construction
/// time.
///
/// # Examples
///
/// ```
/// use hausboard::types::EntityId;
///
/// let id: EntityId = "light.ceiling".parse().unwrap();
/// assert_eq!(id.domain(), "light");
/// assert_eq!(id.object_id(), "ceiling");
///
/// let sensor = EntityId::sensor("kitchen_temperature");
/// assert_eq!(sensor.as_str(), "sensor.kitchen_temperature");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EntityId {
    raw: String,
    dot: usize,
}

impl EntityId {
    /// Parses an entity id from a `domain.object` string.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidEntityId` if the string lacks a dot or
    /// either half is empty.
    pub fn parse(raw: impl Into<String>) -> Result<Self, ValueError> {
        let raw = raw.into();
        match raw.find('.') {
            Some(dot) if dot > 0 && dot + 1 < raw.len() => Ok(Self { raw, dot }),
            _ => Err(ValueError::InvalidEntityId(raw)),
        }
    }

    /// Creates a `sensor.` entity id from a bare object id.
    ///
    /// # Panics
    ///
    /// Panics if `object_id` is empty.
    #[must_use]
    pub fn sensor(object_id: &str) -> Self {
        assert!(!object_id.is_empty(), "sensor object id must be non-empty");
        Self {
            raw: format!("sensor.{object_id}"),
            dot: "sensor".len(),
        }
    }

    /// Returns the full `domain.object` string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns the domain half.
    #[must_use]
    pub fn domain(&self) -> &str {
        &self.raw[..self.dot]
    }

    /// Returns the object id half, the part after the dot.
    ///
    /// Area targets are configured with their owning entity's id; the domain
    /// prefix is stripped before the id is used in a service payload.
    #[must_use]
    pub fn object_id(&self) -> &str {
        &self.raw[self.dot + 1..]
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl FromStr for EntityId {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for EntityId {
    type Error = ValueError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<EntityId> for String {
    fn from(id: EntityId) -> Self {
        id.raw
    }
}
