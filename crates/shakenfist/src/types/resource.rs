//! Resource kinds that carry metadata.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// A resource family addressable by metadata calls.
///
/// Each kind maps to a fixed path prefix under the API root.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Namespace = 0,
    Instance = 1,
    Network = 2,
}

/// Indexed by discriminant.
const PATH_PREFIXES: [&str; ResourceKind::ALL.len()] = ["auth/namespaces", "instances", "networks"];

impl ResourceKind {
    /// All kinds, in declaration order.
    pub const ALL: [ResourceKind; 3] = [
        ResourceKind::Namespace,
        ResourceKind::Instance,
        ResourceKind::Network,
    ];

    /// Path prefix for this kind, e.g. `auth/namespaces`.
    pub fn path_prefix(self) -> &'static str {
        PATH_PREFIXES[self as usize]
    }

    /// Short lowercase name used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            ResourceKind::Namespace => "namespace",
            ResourceKind::Instance => "instance",
            ResourceKind::Network => "network",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ResourceKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResourceKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| {
                InvalidInputError::ResourceKind {
                    value: s.to_string(),
                }
                .into()
            })
    }
}
