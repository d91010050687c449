use cosmwasm_std::Timestamp;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::core::types::invocation_context::InvocationContext;

/// Provenance of a single mutating invocation.  Written once into the journal and never changed.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    pub tx_id: String,
    /// Logical ledger time, serialized as a decimal string of nanoseconds.
    pub tx_timestamp: Timestamp,
    pub channel_id: String,
    pub creator_id: String,
    pub creator_org: String,
    /// Marks the record of an invocation that deleted an asset.
    pub deleted: bool,
}
impl TransactionRecord {
    pub fn from_context(ctx: &InvocationContext, deleted: bool) -> Self {
        Self {
            tx_id: ctx.tx_id.clone(),
            tx_timestamp: ctx.timestamp,
            channel_id: ctx.channel_id.clone(),
            creator_id: ctx.caller.id.clone(),
            creator_org: ctx.caller.org.clone(),
            deleted,
        }
    }
}
