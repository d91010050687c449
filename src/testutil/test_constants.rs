/// The identity that owns everything created by default in tests
pub const DEFAULT_OWNER_IDENTITY: &str = "x509::/OU=client/OU=org1/OU=department1/CN=David::/C=US/ST=North Carolina/O=org1.example.com/CN=ca.org1.example.com";
pub const DEFAULT_OWNER_ORG: &str = "Org1MSP";
/// The display name embedded in DEFAULT_OWNER_IDENTITY
pub const DEFAULT_OWNER_NAME: &str = "David";
/// Use this identity when a second caller is needed, for example a non-owner or a transfer target
pub const OTHER_IDENTITY: &str = "x509::/OU=client/OU=org2/OU=department1/CN=Max::/C=UK/ST=Hampshire/O=org2.example.com/CN=ca.org2.example.com";
pub const OTHER_ORG: &str = "Org2MSP";
/// The display name embedded in OTHER_IDENTITY
pub const OTHER_NAME: &str = "Max";
pub const DEFAULT_CHANNEL_ID: &str = "mychannel";
/// The payload used when a test only needs some asset to exist
pub const DEFAULT_ASSET_PAYLOAD: &str = r#"{"name":"Chair","color":"blue","price":100}"#;
/// The id handed out to the first generated asset of a fresh ledger
pub const DEFAULT_ASSET_ID: &str = "asset1";
