use cosmwasm_std::Binary;
use serde::Serialize;

use crate::util::aliases::AssetResult;
use crate::util::traits::ResultExtensions;

/// Serializes a value as the plain JSON body of a response.  Stored values go through the
/// [canonical encoder](crate::util::canonical_json) instead, because only they must be identical
/// across replicas.
///
/// # Parameters
///
/// * `value` Any serializable value.
///
/// # Examples
/// ```
/// use asset_registry_chaincode::util::functions::to_json_response;
///
/// let body = to_json_response(&vec!["asset1", "asset2"]).unwrap();
/// assert_eq!(br#"["asset1","asset2"]"#.to_vec(), body.to_vec());
/// ```
pub fn to_json_response<T: Serialize + ?Sized>(value: &T) -> AssetResult<Binary> {
    Binary::from(serde_json::to_vec(value)?).to_ok()
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::to_json_response;

    #[test]
    fn test_to_json_response_keeps_nested_values() {
        let value = json!({ "txId": "abc", "nested": { "price": 1.5, "tags": ["a"] } });
        let body = to_json_response(&value).expect("serialization should succeed");
        let decoded: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value, decoded);
    }
}
