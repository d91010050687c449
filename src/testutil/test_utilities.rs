use cosmwasm_std::{Binary, Response, Timestamp};
use serde::de::DeserializeOwned;

use crate::contract::{execute, instantiate, migrate, query};
use crate::core::msg::{ExecuteMsg, InitMsg, MigrateMsg, QueryMsg};
use crate::core::types::asset::Asset;
use crate::core::types::invocation_context::{CallerIdentity, InvocationContext};
use crate::ledger::ledger_store::LedgerDepsMut;
use crate::ledger::memory_ledger::MemoryLedger;
use crate::util::aliases::{AssetResult, EntryPointResponse};

use super::test_constants::{
    DEFAULT_ASSET_PAYLOAD, DEFAULT_CHANNEL_ID, DEFAULT_OWNER_IDENTITY, DEFAULT_OWNER_ORG,
    OTHER_IDENTITY, OTHER_ORG,
};

/// The default caller in tests
pub fn david() -> CallerIdentity {
    CallerIdentity::new(DEFAULT_OWNER_IDENTITY, DEFAULT_OWNER_ORG)
}

/// A second caller, from another organization
pub fn max() -> CallerIdentity {
    CallerIdentity::new(OTHER_IDENTITY, OTHER_ORG)
}

pub fn context_at<S: Into<String>>(
    tx_id: S,
    seconds: u64,
    caller: CallerIdentity,
) -> InvocationContext {
    InvocationContext::new(
        tx_id,
        Timestamp::from_seconds(seconds),
        DEFAULT_CHANNEL_ID,
        caller,
    )
}

pub fn default_init_msg() -> InitMsg {
    InitMsg {
        id_prefix: None,
        assets: vec![],
    }
}

pub fn single_attribute_for_key<'a>(response: &'a Response, key: &'a str) -> &'a str {
    response
        .attributes
        .iter()
        .find(|attr| attr.key.as_str() == key)
        .unwrap()
        .value
        .as_str()
}

/// Decodes the JSON data attached to a response, panicking if none was set.
pub fn response_data<T: DeserializeOwned>(response: &Response) -> T {
    let data = response
        .data
        .as_ref()
        .expect("expected the response to carry data");
    serde_json::from_slice(data).expect("expected the response data to be valid JSON")
}

/// Wraps a [MemoryLedger] and hands out invocation contexts with increasing tx ids and ledger
/// times, so tests only have to name the caller.
#[derive(Default)]
pub struct TestLedger {
    pub ledger: MemoryLedger,
    tx_count: u64,
}
impl TestLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// A ledger on which the contract was instantiated by [david] with the default init msg.
    pub fn instantiated() -> Self {
        let mut ledger = Self::new();
        ledger
            .instantiate_as(david(), default_init_msg())
            .expect("instantiation with the default init msg should succeed");
        ledger
    }

    /// Each context is ten seconds after the previous one.
    pub fn next_context(&mut self, caller: CallerIdentity) -> InvocationContext {
        self.tx_count += 1;
        context_at(format!("tx-{}", self.tx_count), self.tx_count * 10, caller)
    }

    pub fn last_tx_id(&self) -> String {
        format!("tx-{}", self.tx_count)
    }

    pub fn run_as<T, F>(&mut self, caller: CallerIdentity, operation: F) -> AssetResult<T>
    where
        F: FnOnce(LedgerDepsMut<'_>, &InvocationContext) -> AssetResult<T>,
    {
        let ctx = self.next_context(caller);
        self.ledger.submit(&ctx, |deps| operation(deps, &ctx))
    }

    pub fn instantiate_as(&mut self, caller: CallerIdentity, msg: InitMsg) -> EntryPointResponse {
        self.run_as(caller, |deps, ctx| instantiate(deps, ctx, msg))
    }

    pub fn execute_as(&mut self, caller: CallerIdentity, msg: ExecuteMsg) -> EntryPointResponse {
        self.run_as(caller, |deps, ctx| execute(deps, ctx, msg))
    }

    pub fn migrate(&mut self, msg: MigrateMsg) -> EntryPointResponse {
        self.run_as(david(), |deps, _| migrate(deps, msg))
    }

    pub fn query(&self, msg: QueryMsg) -> AssetResult<Binary> {
        self.ledger.evaluate(|deps| query(deps, msg))
    }

    pub fn query_json<T: DeserializeOwned>(&self, msg: QueryMsg) -> AssetResult<T> {
        let body = self.query(msg)?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Creates an asset from [DEFAULT_ASSET_PAYLOAD] owned by [david].
    pub fn create_default_asset(&mut self) -> Asset {
        let response = self
            .execute_as(
                david(),
                ExecuteMsg::CreateAsset {
                    asset: DEFAULT_ASSET_PAYLOAD.to_string(),
                },
            )
            .expect("creating the default asset should succeed");
        response_data(&response)
    }
}
