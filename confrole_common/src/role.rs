//! Configuration roles.
//!
//! A [`Role`] classifies a dependency configuration by what it may be used
//! for during resolution. The set is closed: every role and its capability
//! flags are compile-time constants, so lookups are pure and never fail.

use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Deserializer, Serialize, de};
use static_assertions::{assert_impl_all, const_assert_eq};

use crate::error::RoleError;

// ─── Capabilities ───────────────────────────────────────────────────

/// Operations a configuration may take part in, as granted by its role.
///
/// One named field per operation category. Values only exist as the
/// per-role constants below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Capabilities {
    /// May be chosen as a selection target during graph resolution,
    /// rather than only being resolved directly.
    pub can_be_used_in_selection: bool,
}

const FOR_SELECTION_CAPS: Capabilities = Capabilities {
    can_be_used_in_selection: true,
};

const FOR_RESOLUTION_CAPS: Capabilities = Capabilities {
    can_be_used_in_selection: false,
};

// ─── Role ───────────────────────────────────────────────────────────

/// Role of a configuration during dependency resolution.
///
/// Provisional API. Matching on `Role` is always exhaustive inside this
/// workspace so a new variant shows up at every call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[repr(u8)]
pub enum Role {
    /// Can be picked as a target when resolving a dependency graph.
    ForSelection = 0,
    /// Resolved directly; never offered for selection.
    ForResolution = 1,
}

const_assert_eq!(core::mem::size_of::<Role>(), 1);
const_assert_eq!(Role::ALL.len(), 2);
assert_impl_all!(Role: Copy, Send, Sync, Eq, core::hash::Hash);
assert_impl_all!(Capabilities: Copy, Send, Sync);

impl Role {
    /// Every role, in declaration order.
    pub const ALL: [Role; 2] = [Role::ForSelection, Role::ForResolution];

    /// All roles as a restartable `'static` sequence.
    #[inline]
    pub const fn all() -> &'static [Role] {
        &Self::ALL
    }

    /// Human-readable description. Diagnostics only.
    pub const fn description(self) -> &'static str {
        match self {
            Self::ForSelection => "For selection in dependency resolution",
            Self::ForResolution => "For resolution",
        }
    }

    /// Capability flags granted by this role.
    pub const fn capabilities(self) -> Capabilities {
        match self {
            Self::ForSelection => FOR_SELECTION_CAPS,
            Self::ForResolution => FOR_RESOLUTION_CAPS,
        }
    }

    /// Whether a configuration with this role may be a selection target.
    #[inline]
    pub const fn can_be_used_in_selection(self) -> bool {
        self.capabilities().can_be_used_in_selection
    }

    /// Canonical name, as accepted by [`FromStr`] and used by serde.
    pub const fn name(self) -> &'static str {
        match self {
            Self::ForSelection => "ForSelection",
            Self::ForResolution => "ForResolution",
        }
    }

    /// Position in [`Role::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Roles that permit selection.
    pub fn selectable() -> impl Iterator<Item = Role> + Clone {
        Self::ALL
            .into_iter()
            .filter(|role| role.can_be_used_in_selection())
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Role {
    type Err = RoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ForSelection" | "FOR_SELECTION" => Ok(Self::ForSelection),
            "ForResolution" | "FOR_RESOLUTION" => Ok(Self::ForResolution),
            _ => Err(RoleError::UnknownRole(s.to_string())),
        }
    }
}

// Names go through `FromStr` so serde and CLI input accept the same set.
impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptions() {
        assert_eq!(
            Role::ForSelection.description(),
            "For selection in dependency resolution"
        );
        assert_eq!(Role::ForResolution.description(), "For resolution");
        for role in Role::all() {
            assert!(!role.description().is_empty());
        }
    }

    #[test]
    fn selection_capability() {
        assert!(Role::ForSelection.can_be_used_in_selection());
        assert!(!Role::ForResolution.can_be_used_in_selection());
        assert_eq!(
            Role::ForResolution.capabilities(),
            Capabilities {
                can_be_used_in_selection: false
            }
        );
    }

    #[test]
    fn all_roles_in_declaration_order() {
        assert_eq!(Role::all(), &[Role::ForSelection, Role::ForResolution]);
        for (i, role) in Role::all().iter().enumerate() {
            assert_eq!(role.index(), i);
        }
        assert!(Role::ForSelection < Role::ForResolution);
    }

    #[test]
    fn selectable_roles() {
        let selectable: Vec<Role> = Role::selectable().collect();
        assert_eq!(selectable, vec![Role::ForSelection]);
    }

    #[test]
    fn parse_canonical_and_constant_names() {
        assert_eq!("ForSelection".parse::<Role>().unwrap(), Role::ForSelection);
        assert_eq!("FOR_SELECTION".parse::<Role>().unwrap(), Role::ForSelection);
        assert_eq!(
            "ForResolution".parse::<Role>().unwrap(),
            Role::ForResolution
        );
        assert_eq!(
            "FOR_RESOLUTION".parse::<Role>().unwrap(),
            Role::ForResolution
        );
    }

    #[test]
    fn roundtrip_display_parse() {
        for role in Role::all() {
            let s = role.to_string();
            let parsed: Role = s.parse().unwrap();
            assert_eq!(&parsed, role, "roundtrip failed for {s}");
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert_eq!(
            "forselection".parse::<Role>(),
            Err(RoleError::UnknownRole("forselection".to_string()))
        );
        assert!("".parse::<Role>().is_err());
        assert!("ForConsumption".parse::<Role>().is_err());
    }
}
