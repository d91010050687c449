//! Store key layout.
//!
//! Every record kind lives under its own namespace.  A key is built from the namespace followed by
//! its segments, where the namespace and all segments but the last carry a two-byte big-endian
//! length prefix.  The last segment is appended raw so that a range scan over a namespace prefix
//! sees exactly the records of that namespace.  Values containing any byte (including the
//! characters a delimiter-joined scheme would use) can never be confused with one another.
//!
//! Keys written outside of these namespaces (the [State](crate::core::state::StateV1) item and
//! the cw2 version info) are plain ascii and cannot begin with a length prefix byte.

use crate::core::error::ContractError;
use crate::util::aliases::AssetResult;
use crate::util::traits::ResultExtensions;

/// Namespace holding the current encoded state of each asset, keyed by asset id.
pub const ASSET_NAMESPACE: &str = "asset";
/// Namespace holding one transaction record per mutating invocation, keyed by tx id.
pub const TRANSACTION_NAMESPACE: &str = "tx";

/// Builds a full store key.
///
/// # Parameters
///
/// * `namespace` The record namespace.  Length prefixed.
/// * `segments` The ordered key segments.  All but the last are length prefixed.
///
/// # Examples
/// ```
/// use asset_registry_chaincode::core::keys::composite_key;
///
/// let key = composite_key("tx", &["abc"]).unwrap();
/// assert_eq!(b"\x00\x02txabc".to_vec(), key);
/// ```
pub fn composite_key(namespace: &str, segments: &[&str]) -> AssetResult<Vec<u8>> {
    let mut key = Vec::with_capacity(
        namespace.len() + 2 + segments.iter().map(|s| s.len() + 2).sum::<usize>(),
    );
    push_length_prefixed(&mut key, namespace)?;
    if let Some((last, nested)) = segments.split_last() {
        for segment in nested {
            push_length_prefixed(&mut key, segment)?;
        }
        key.extend_from_slice(last.as_bytes());
    }
    key.to_ok()
}

/// The key under which the current state of an asset is stored.
pub fn asset_key(id: &str) -> AssetResult<Vec<u8>> {
    composite_key(ASSET_NAMESPACE, &[id])
}

/// The key under which the journal record for an invocation is stored.
pub fn transaction_key(tx_id: &str) -> AssetResult<Vec<u8>> {
    composite_key(TRANSACTION_NAMESPACE, &[tx_id])
}

/// Returns the `[start, end)` bounds that cover every key in the given namespace and nothing else.
pub fn namespace_bounds(namespace: &str) -> AssetResult<(Vec<u8>, Vec<u8>)> {
    let start = composite_key(namespace, &[])?;
    let end = upper_bound(&start);
    (start, end).to_ok()
}

fn push_length_prefixed(key: &mut Vec<u8>, segment: &str) -> AssetResult<()> {
    let length = u16::try_from(segment.len()).map_err(|_| {
        ContractError::malformed(
            "StoreKey",
            format!(
                "key segment of {} bytes exceeds the maximum of {}",
                segment.len(),
                u16::MAX
            ),
        )
    })?;
    key.extend_from_slice(&length.to_be_bytes());
    key.extend_from_slice(segment.as_bytes());
    Ok(())
}

/// The smallest key that is greater than every key starting with `prefix`.
fn upper_bound(prefix: &[u8]) -> Vec<u8> {
    let mut end = prefix.to_vec();
    while let Some(last) = end.pop() {
        if last < u8::MAX {
            end.push(last + 1);
            return end;
        }
    }
    // Only reachable for an all-0xff prefix, which a length-prefixed namespace never produces
    vec![u8::MAX; prefix.len() + 1]
}
