use std::fmt;

use cosmwasm_std::StdError;
use thiserror::Error;

/// Names the kind of record a [ContractError::NotFound] refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordKind {
    Asset,
    Transaction,
}
impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Asset => write!(f, "asset"),
            RecordKind::Transaction => write!(f, "transaction"),
        }
    }
}

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Stored value could not be processed as JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Semver parsing error: {0}")]
    SemVer(#[from] semver::Error),

    #[error("The {kind} {id} does not exist")]
    NotFound { kind: RecordKind, id: String },

    #[error("The asset {id} already exists")]
    AlreadyExists { id: String },

    #[error("Unauthorized: caller [{caller}] does not own asset {id}")]
    Unauthorized { id: String, caller: String },

    #[error("Invalid message type provided. Expected message type {expected_message_type}")]
    InvalidMessageType { expected_message_type: String },

    #[error("Message of type [{message_type}] was malformed: {explanation}")]
    MalformedInput {
        message_type: String,
        explanation: String,
    },

    #[error("Current contract name [{current_contract}] does not match provided migration name [{migration_contract}]")]
    InvalidContractName {
        current_contract: String,
        migration_contract: String,
    },

    #[error("Current contract version [{current_version}] is higher than provided migration version [{migration_version}]")]
    InvalidContractVersion {
        current_version: String,
        migration_version: String,
    },
}
impl ContractError {
    pub fn asset_not_found<S: Into<String>>(id: S) -> ContractError {
        ContractError::NotFound {
            kind: RecordKind::Asset,
            id: id.into(),
        }
    }

    pub fn transaction_not_found<S: Into<String>>(tx_id: S) -> ContractError {
        ContractError::NotFound {
            kind: RecordKind::Transaction,
            id: tx_id.into(),
        }
    }

    pub fn malformed<S1: Into<String>, S2: Into<String>>(
        message_type: S1,
        explanation: S2,
    ) -> ContractError {
        ContractError::MalformedInput {
            message_type: message_type.into(),
            explanation: explanation.into(),
        }
    }
}
