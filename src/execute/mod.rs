//! Contains all execution routes used by the [contract file](crate::contract).

/// Contains the functionality used by the [CreateAsset](crate::core::msg::ExecuteMsg::CreateAsset)
/// [ExecuteMsg](crate::core::msg::ExecuteMsg) variant when invoked via the [execute](crate::contract::execute)
/// function.
pub mod create_asset;
/// Contains the functionality used by the [DeleteAsset](crate::core::msg::ExecuteMsg::DeleteAsset)
/// [ExecuteMsg](crate::core::msg::ExecuteMsg) variant when invoked via the [execute](crate::contract::execute)
/// function.
pub mod delete_asset;
/// Contains the functionality used by the [TransferAsset](crate::core::msg::ExecuteMsg::TransferAsset)
/// [ExecuteMsg](crate::core::msg::ExecuteMsg) variant when invoked via the [execute](crate::contract::execute)
/// function.
pub mod transfer_asset;
/// Contains the functionality used by the [UpdateAsset](crate::core::msg::ExecuteMsg::UpdateAsset)
/// [ExecuteMsg](crate::core::msg::ExecuteMsg) variant when invoked via the [execute](crate::contract::execute)
/// function.
pub mod update_asset;
