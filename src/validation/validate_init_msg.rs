use crate::core::error::ContractError;
use crate::core::msg::InitMsg;
use crate::util::aliases::AssetResult;
use crate::util::traits::ResultExtensions;

pub fn validate_init_msg(msg: &InitMsg) -> AssetResult<()> {
    let mut invalid_fields: Vec<String> = vec![];
    if let Some(prefix) = &msg.id_prefix {
        if prefix.trim().is_empty() {
            invalid_fields.push("id_prefix: must not be blank when provided".to_string());
        }
    }
    msg.assets
        .iter()
        .enumerate()
        .filter(|(_, asset)| asset.trim().is_empty())
        .for_each(|(index, _)| invalid_fields.push(format!("assets[{index}]: must not be blank")));
    if !invalid_fields.is_empty() {
        ContractError::malformed("Instantiate", invalid_fields.join(", ")).to_err()
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::core::error::ContractError;
    use crate::core::msg::InitMsg;

    use super::validate_init_msg;

    #[test]
    fn test_valid_init_msg() {
        validate_init_msg(&InitMsg {
            id_prefix: Some("item".to_string()),
            assets: vec![r#"{"name":"Chair"}"#.to_string()],
        })
        .expect("expected the init msg to be valid");
        validate_init_msg(&InitMsg {
            id_prefix: None,
            assets: vec![],
        })
        .expect("expected an empty init msg to be valid");
    }

    #[test]
    fn test_invalid_init_msg() {
        let err = validate_init_msg(&InitMsg {
            id_prefix: Some(" ".to_string()),
            assets: vec!["{}".to_string(), String::new()],
        })
        .unwrap_err();
        match err {
            ContractError::MalformedInput {
                message_type,
                explanation,
            } => {
                assert_eq!("Instantiate", message_type);
                assert!(explanation.contains("id_prefix"));
                assert!(explanation.contains("assets[1]"));
                assert!(!explanation.contains("assets[0]"));
            }
            _ => panic!("unexpected error: {:?}", err),
        }
    }
}
