use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::error::DeleteError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteRequest {
    pub public_id: String,
}

impl DeleteRequest {
    /// Extrai o `publicId` do campo `data` sem confiar no formato enviado.
    /// Ausente, nulo, vazio ou de outro tipo vira `InvalidArgument`.
    pub fn from_data(data: &Value) -> Result<Self, DeleteError> {
        match data.get("publicId") {
            Some(Value::String(public_id)) if !public_id.is_empty() => Ok(DeleteRequest {
                public_id: public_id.clone(),
            }),
            _ => Err(DeleteError::InvalidArgument),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResult {
    pub success: bool,
    pub message: String,
}

impl DeleteResult {
    pub fn deleted_or_not_found(public_id: &str) -> Self {
        DeleteResult {
            success: true,
            message: format!("{} deleted or not found", public_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_string_public_id() {
        let request = DeleteRequest::from_data(&json!({ "publicId": "folder/abc123" })).unwrap();
        assert_eq!(request.public_id, "folder/abc123");
    }

    #[test]
    fn rejects_missing_or_mistyped_public_id() {
        let invalid = [
            Value::Null,
            json!({}),
            json!({ "publicId": null }),
            json!({ "publicId": 42 }),
            json!({ "publicId": true }),
            json!({ "publicId": ["abc"] }),
            json!({ "publicId": { "id": "abc" } }),
            json!({ "publicId": "" }),
            json!("abc123"),
        ];

        for data in invalid {
            assert!(
                matches!(DeleteRequest::from_data(&data), Err(DeleteError::InvalidArgument)),
                "esperava InvalidArgument para {}",
                data
            );
        }
    }

    #[test]
    fn success_message_names_the_asset() {
        let result = DeleteResult::deleted_or_not_found("abc123");
        assert!(result.success);
        assert_eq!(result.message, "abc123 deleted or not found");
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({ "success": true, "message": "abc123 deleted or not found" })
        );
    }
}
