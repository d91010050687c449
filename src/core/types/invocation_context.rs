use cosmwasm_std::Timestamp;

use crate::core::error::ContractError;
use crate::util::aliases::AssetResult;
use crate::util::constants::{DISPLAY_NAME_END, DISPLAY_NAME_START};
use crate::util::traits::ResultExtensions;

/// The opaque credential of a caller, as issued by the platform's identity provider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallerIdentity {
    /// The full identity string.  Ownership is always checked against this value.
    pub id: String,
    /// The organization (membership service provider) that issued the identity.
    pub org: String,
}
impl CallerIdentity {
    pub fn new<S1: Into<String>, S2: Into<String>>(id: S1, org: S2) -> Self {
        Self {
            id: id.into(),
            org: org.into(),
        }
    }

    /// The human-readable name embedded in this identity.
    pub fn display_name(&self) -> AssetResult<String> {
        display_name_from_identity(&self.id)
    }
}

/// Everything the ledger platform tells the contract about the invocation being executed.  This is
/// the only legitimate source of time and transaction identity: registry code must never consult
/// the wall clock.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvocationContext {
    /// Ledger-assigned, globally unique id of this invocation.
    pub tx_id: String,
    /// Logical ledger time of the invocation.
    pub timestamp: Timestamp,
    pub channel_id: String,
    pub caller: CallerIdentity,
}
impl InvocationContext {
    pub fn new<S1: Into<String>, S2: Into<String>>(
        tx_id: S1,
        timestamp: Timestamp,
        channel_id: S2,
        caller: CallerIdentity,
    ) -> Self {
        Self {
            tx_id: tx_id.into(),
            timestamp,
            channel_id: channel_id.into(),
            caller,
        }
    }
}

/// Extracts the display name from an identity string by locating the first `CN=<name>::` segment.
///
/// # Parameters
///
/// * `identity` A full caller identity, for instance
/// `x509::/OU=client/OU=org1/CN=David::/C=US/O=org1.example.com/CN=ca.org1.example.com`.
///
/// # Examples
/// ```
/// use asset_registry_chaincode::core::types::invocation_context::display_name_from_identity;
///
/// let identity = "x509::/OU=client/CN=David::/C=US/CN=ca.org1.example.com";
/// assert_eq!("David", display_name_from_identity(identity).unwrap());
/// ```
pub fn display_name_from_identity(identity: &str) -> AssetResult<String> {
    let malformed = || {
        ContractError::malformed(
            "CallerIdentity",
            format!("identity [{identity}] does not contain a {DISPLAY_NAME_START}<name>{DISPLAY_NAME_END} segment"),
        )
    };
    let start = identity.find(DISPLAY_NAME_START).ok_or_else(malformed)? + DISPLAY_NAME_START.len();
    let length = identity[start..]
        .find(DISPLAY_NAME_END)
        .ok_or_else(malformed)?;
    let name = identity[start..start + length].trim();
    if name.is_empty() {
        return malformed().to_err();
    }
    name.to_string().to_ok()
}
