// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Declarative action cases bound to a dashboard control.

use serde::{Deserialize, Serialize};

/// What an action case does when executed.
///
/// Unknown kinds in a configuration document fold to
/// [`ActionKind::Unsupported`] so one unrecognized case never rejects the
/// whole document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActionKind {
    /// Flip the device to the opposite of its displayed state.
    Toggle,
    /// Switch the device on, optionally with a brightness.
    TurnOn,
    /// Switch the device off.
    TurnOff,
    /// Hand a URL to the embedding UI instead of calling a device.
    OpenLink,
    /// Run a script entity.
    Script,
    /// Anything this build does not know how to execute.
    #[serde(other)]
    Unsupported,
}

impl ActionKind {
    /// Returns the kind as its configuration spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Toggle => "toggle",
            Self::TurnOn => "turnOn",
            Self::TurnOff => "turnOff",
            Self::OpenLink => "openLink",
            Self::Script => "script",
            Self::Unsupported => "unsupported",
        }
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a service call addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    /// A single entity, addressed by its full `domain.object` id.
    Entity,
    /// Every matching device in an area.
    Area,
    /// A device registry entry, addressed by an opaque id.
    Device,
}

impl TargetKind {
    /// Returns the payload key the service call uses for this kind.
    #[must_use]
    pub const fn payload_key(self) -> &'static str {
        match self {
            Self::Entity => "entity_id",
            Self::Area => "area_id",
            Self::Device => "device_id",
        }
    }
}

/// Addressee of a service call.
///
/// # Examples
///
/// ```
/// use hausboard::control::{TargetDescriptor, TargetKind};
///
/// let target: TargetDescriptor =
///     serde_json::from_str(r#"{"type": "area", "id": "light.bedroom"}"#).unwrap();
/// assert_eq!(target.service_domain(), Some("light"));
/// assert_eq!(target.service_id(), "bedroom");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetDescriptor {
    /// Service domain. Falls back to the prefix of a dotted `id`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    /// What the `id` names.
    #[serde(rename = "type")]
    pub kind: TargetKind,
    /// Entity id, area id, or device id.
    pub id: String,
}

impl TargetDescriptor {
    /// Returns the domain the service call goes to, if one can be derived.
    #[must_use]
    pub fn service_domain(&self) -> Option<&str> {
        self.domain
            .as_deref()
            .or_else(|| self.id.split_once('.').map(|(domain, _)| domain))
    }

    /// Returns the id as it appears in the service payload.
    ///
    /// Area targets are configured with `domain.name` ids; the service wants
    /// the bare area name, so the prefix is stripped. Entity and device ids
    /// pass through unchanged.
    #[must_use]
    pub fn service_id(&self) -> &str {
        match self.kind {
            TargetKind::Area => self
                .id
                .split_once('.')
                .map_or(self.id.as_str(), |(_, name)| name),
            TargetKind::Entity | TargetKind::Device => &self.id,
        }
    }
}

/// One executable case of a dashboard action.
///
/// A control carries an ordered list of cases. The first two map to the
/// off/on short-press behavior; the full list appears in the long-press
/// menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionCase {
    /// Menu label.
    pub name: String,
    /// What executing the case does.
    #[serde(rename = "type")]
    pub kind: ActionKind,
    /// Service call addressee. Required for every kind that talks to a
    /// device.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<TargetDescriptor>,
    /// URL for [`ActionKind::OpenLink`] cases.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Brightness forwarded on [`ActionKind::TurnOn`] for the light domain.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brightness: Option<u16>,
}
