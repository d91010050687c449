//! Deterministic JSON encoding for every value the contract persists.
//!
//! Replicas executing the same invocation must write byte-identical values, so the output here is
//! a pure function of logical content. Everything is lifted into a [serde_json::Value] first, whose
//! object map is a `BTreeMap`, so keys come out sorted by their UTF-8 bytes at every depth. The
//! compact writer adds no whitespace. Floats are printed in shortest round-trip form and, with the
//! `float_roundtrip` feature, parsed back to the exact same `f64`, so decoding and re-encoding a
//! stored record never drifts.
//!
//! serde_json's `preserve_order` feature must stay off for this crate.

use cosmwasm_std::Binary;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::util::aliases::AssetResult;
use crate::util::traits::ResultExtensions;

/// Serializes any value into its canonical byte form, wrapped in a [Binary] for storage.
///
/// # Parameters
///
/// * `value` Any serializable value.  It is first lifted into a [serde_json::Value], so struct
/// field declaration order has no effect on the result.
///
/// # Examples
/// ```
/// use asset_registry_chaincode::util::canonical_json::to_canonical_binary;
/// use serde_json::json;
///
/// let bytes = to_canonical_binary(&json!({ "price": "100", "name": "Chair" })).unwrap();
/// assert_eq!(br#"{"name":"Chair","price":"100"}"#, bytes.as_slice());
/// ```
pub fn to_canonical_binary<T: Serialize + ?Sized>(value: &T) -> AssetResult<Binary> {
    let value = serde_json::to_value(value)?;
    Binary::from(canonical_json_bytes(&value)?).to_ok()
}

/// Writes a [serde_json::Value] in canonical form.
pub fn canonical_json_bytes(value: &Value) -> AssetResult<Vec<u8>> {
    serde_json::to_vec(value)?.to_ok()
}

/// Decodes canonically-encoded bytes back into a typed value.
pub fn from_canonical_slice<T: DeserializeOwned>(bytes: &[u8]) -> AssetResult<T> {
    Ok(serde_json::from_slice(bytes)?)
}
