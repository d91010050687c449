// Execution output attributes.  All should be prefixed with "asset_" to make them easy to
// discern when observed in the event stream

//////////////////////////////
// Shared output attributes //
//////////////////////////////

/// Value = Event Type correlating to EventType enum into String values (String)
pub const ASSET_EVENT_TYPE_KEY: &str = "asset_event_type";
/// Value = The id of the asset targeted by the invocation (String)
pub const ASSET_ID_KEY: &str = "asset_id";
/// Value = The ledger-assigned id of the invocation that produced the event (String)
pub const ASSET_TX_ID_KEY: &str = "asset_tx_id";
/// Value = The full identity of the asset's owner after the invocation (String)
pub const ASSET_OWNER_ID_KEY: &str = "asset_owner_id";
/// Value = Any new value being changed that can be coerced to a string target. Dynamic to be used on various routes (String)
pub const NEW_VALUE_KEY: &str = "asset_new_value";

///////////////////////
// Reserved fields   //
///////////////////////

/// The asset's unique identifier.  Immutable after creation.
pub const ASSET_ID_FIELD: &str = "id";
/// The display name of the asset's owner, derived from the owner's identity.
pub const ASSET_OWNER_FIELD: &str = "owner";
/// The full identity string of the asset's owner.  All ownership checks compare this value.
pub const ASSET_OWNER_ID_FIELD: &str = "ownerId";

//////////////////////
// Global Constants //
//////////////////////

/// Prefix used for generated asset ids when the instantiation message does not provide one.
pub const DEFAULT_ID_PREFIX: &str = "asset";
/// The first counter value handed out by the id allocator.
pub const FIRST_ASSET_NUMBER: u64 = 1;
/// Identity strings embed the holder's display name as `CN=<name>::`.
pub const DISPLAY_NAME_START: &str = "CN=";
pub const DISPLAY_NAME_END: &str = "::";
