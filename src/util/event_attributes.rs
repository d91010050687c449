use super::constants::{
    ASSET_EVENT_TYPE_KEY, ASSET_ID_KEY, ASSET_OWNER_ID_KEY, ASSET_TX_ID_KEY, NEW_VALUE_KEY,
};

pub enum EventType {
    InstantiateContract,
    MigrateContract,
    CreateAsset,
    UpdateAsset,
    DeleteAsset,
    TransferAsset,
}
#[allow(clippy::from_over_into)]
impl Into<String> for EventType {
    fn into(self) -> String {
        match self {
            EventType::InstantiateContract => "instantiate_contract",
            EventType::MigrateContract => "migrate_contract",
            EventType::CreateAsset => "create_asset",
            EventType::UpdateAsset => "update_asset",
            EventType::DeleteAsset => "delete_asset",
            EventType::TransferAsset => "transfer_asset",
        }
        .into()
    }
}
impl EventType {
    pub fn event_name(self) -> String {
        self.into()
    }
}

pub struct EventAttributes {
    attributes: Vec<(String, String)>,
}
impl EventAttributes {
    pub fn new(event_type: EventType) -> Self {
        EventAttributes {
            attributes: vec![(ASSET_EVENT_TYPE_KEY.into(), event_type.into())],
        }
    }

    /// Every registry mutation reports the asset it touched and the invocation that touched it.
    pub fn for_asset_event<T1: Into<String>, T2: Into<String>>(
        event_type: EventType,
        asset_id: T1,
        tx_id: T2,
    ) -> Self {
        Self::new(event_type).set_asset_id(asset_id).set_tx_id(tx_id)
    }

    pub fn set_asset_id<T: Into<String>>(mut self, asset_id: T) -> Self {
        self.attributes.push((ASSET_ID_KEY.into(), asset_id.into()));
        self
    }

    pub fn set_tx_id<T: Into<String>>(mut self, tx_id: T) -> Self {
        self.attributes.push((ASSET_TX_ID_KEY.into(), tx_id.into()));
        self
    }

    pub fn set_owner_id<T: Into<String>>(mut self, owner_id: T) -> Self {
        self.attributes
            .push((ASSET_OWNER_ID_KEY.into(), owner_id.into()));
        self
    }

    pub fn set_new_value<T: ToString>(mut self, new_value: T) -> Self {
        self.attributes
            .push((NEW_VALUE_KEY.into(), new_value.to_string()));
        self
    }
}

impl IntoIterator for EventAttributes {
    type Item = (String, String);

    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.attributes.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use cosmwasm_std::Response;

    use crate::{
        testutil::test_utilities::single_attribute_for_key,
        util::constants::{
            ASSET_EVENT_TYPE_KEY, ASSET_ID_KEY, ASSET_OWNER_ID_KEY, ASSET_TX_ID_KEY, NEW_VALUE_KEY,
        },
    };

    use super::{EventAttributes, EventType};

    #[test]
    fn test_response_consumption() {
        let attributes = EventAttributes::for_asset_event(EventType::TransferAsset, "asset1", "tx1")
            .set_owner_id("owner identity")
            .set_new_value("new value");
        let response: Response = Response::new().add_attributes(attributes);
        assert_eq!(
            "transfer_asset",
            single_attribute_for_key(&response, ASSET_EVENT_TYPE_KEY),
            "the event type attribute should be added correctly",
        );
        assert_eq!(
            "asset1",
            single_attribute_for_key(&response, ASSET_ID_KEY),
            "the asset id attribute should be added correctly",
        );
        assert_eq!(
            "tx1",
            single_attribute_for_key(&response, ASSET_TX_ID_KEY),
            "the tx id attribute should be added correctly",
        );
        assert_eq!(
            "owner identity",
            single_attribute_for_key(&response, ASSET_OWNER_ID_KEY),
            "the owner id attribute should be added correctly",
        );
        assert_eq!(
            "new value",
            single_attribute_for_key(&response, NEW_VALUE_KEY),
            "the new value attribute should be added correctly",
        );
    }
}
