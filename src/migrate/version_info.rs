use cosmwasm_std::Storage;
use schemars::JsonSchema;
use semver::Version;
use serde::{Deserialize, Serialize};

use crate::util::aliases::AssetResult;
use crate::util::traits::ResultExtensions;

pub const CONTRACT_NAME: &str = env!("CARGO_PKG_NAME");
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// The name and version of the code that last instantiated or migrated the contract.  Persisted
/// through the cw2 contract info item.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct VersionInfoV1 {
    pub contract: String,
    pub version: String,
}
impl VersionInfoV1 {
    pub fn parse_sem_ver(&self) -> AssetResult<Version> {
        self.version.parse::<Version>()?.to_ok()
    }
}

pub fn set_version_info(storage: &mut dyn Storage, version_info: &VersionInfoV1) -> AssetResult<()> {
    cw2::set_contract_version(storage, &version_info.contract, &version_info.version)?.to_ok()
}

pub fn get_version_info(storage: &dyn Storage) -> AssetResult<VersionInfoV1> {
    let stored = cw2::get_contract_version(storage)?;
    VersionInfoV1 {
        contract: stored.contract,
        version: stored.version,
    }
    .to_ok()
}

/// Stamps the running code's name and version into storage.
pub fn migrate_version_info(storage: &mut dyn Storage) -> AssetResult<VersionInfoV1> {
    let version_info = VersionInfoV1 {
        contract: CONTRACT_NAME.to_string(),
        version: CONTRACT_VERSION.to_string(),
    };
    set_version_info(storage, &version_info)?;
    version_info.to_ok()
}

#[cfg(test)]
mod tests {
    use cosmwasm_std::testing::MockStorage;

    use super::{
        get_version_info, migrate_version_info, set_version_info, VersionInfoV1, CONTRACT_NAME,
        CONTRACT_VERSION,
    };

    #[test]
    fn test_set_and_get_version_info() {
        let mut storage = MockStorage::new();
        let version_info = VersionInfoV1 {
            contract: "some-contract".to_string(),
            version: "1.2.3".to_string(),
        };
        set_version_info(&mut storage, &version_info).expect("setting version info should succeed");
        assert_eq!(version_info, get_version_info(&storage).unwrap());
        assert_eq!(
            semver::Version::new(1, 2, 3),
            version_info.parse_sem_ver().unwrap(),
        );
    }

    #[test]
    fn test_migrate_version_info_uses_package_values() {
        let mut storage = MockStorage::new();
        let stored = migrate_version_info(&mut storage).unwrap();
        assert_eq!(CONTRACT_NAME, stored.contract);
        assert_eq!(CONTRACT_VERSION, stored.version);
        assert_eq!(stored, get_version_info(&storage).unwrap());
    }

    #[test]
    fn test_missing_version_info_is_an_error() {
        let storage = MockStorage::new();
        assert!(get_version_info(&storage).is_err());
    }
}
