use std::sync::Arc;
use crate::error::DeleteError;
use crate::models::callable::CallableRequest;
use crate::models::delete::{DeleteRequest, DeleteResult};
use crate::provider::MediaProvider;
use crate::utils::logging::{log_delete_erro_provedor, log_delete_status_rejeitado};

/// Exclui um asset no provedor de mídia em nome de um chamador autenticado.
///
/// "not found" também é sucesso: excluir um asset que já não existe não falha.
#[derive(Clone)]
pub struct DeleteMediaAsset {
    provider: Arc<dyn MediaProvider>,
}

impl DeleteMediaAsset {
    pub fn new(provider: Arc<dyn MediaProvider>) -> Self {
        DeleteMediaAsset { provider }
    }

    pub async fn handle(&self, request: CallableRequest) -> Result<DeleteResult, DeleteError> {
        // 1. Verificar autenticação
        if request.auth.is_none() {
            return Err(DeleteError::Unauthenticated);
        }

        // 2. Validar publicId
        let DeleteRequest { public_id } = DeleteRequest::from_data(&request.data)?;

        // 3. Excluir no provedor
        match self.provider.destroy(&public_id).await {
            Ok(status) if status.is_success() => Ok(DeleteResult::deleted_or_not_found(&public_id)),
            Ok(status) => {
                log_delete_status_rejeitado(&public_id, status.as_str());
                Err(DeleteError::Internal {
                    status: status.as_str().to_string(),
                })
            }
            Err(e) => {
                log_delete_erro_provedor(&public_id, &e);
                Err(DeleteError::Unknown)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::callable::AuthContext;
    use crate::provider::fake::{FakeProvider, Reply, PROVIDER_FAILURE};
    use log::{Level, LevelFilter, Log, Metadata, Record};
    use serde_json::{json, Value};
    use std::cell::RefCell;
    use std::sync::Once;

    // Captura os registros por thread; #[tokio::test] roda tudo na thread do teste.
    struct CaptureLogger;

    thread_local! {
        static RECORDS: RefCell<Vec<(Level, String)>> = RefCell::new(Vec::new());
    }

    impl Log for CaptureLogger {
        fn enabled(&self, _: &Metadata) -> bool {
            true
        }

        fn log(&self, record: &Record) {
            RECORDS.with(|r| r.borrow_mut().push((record.level(), record.args().to_string())));
        }

        fn flush(&self) {}
    }

    static LOGGER: CaptureLogger = CaptureLogger;
    static INIT: Once = Once::new();

    fn capture_logs() {
        INIT.call_once(|| {
            log::set_logger(&LOGGER).unwrap();
            log::set_max_level(LevelFilter::Trace);
        });
        RECORDS.with(|r| r.borrow_mut().clear());
    }

    fn error_logs() -> Vec<String> {
        RECORDS.with(|r| {
            r.borrow()
                .iter()
                .filter(|(level, _)| *level == Level::Error)
                .map(|(_, message)| message.clone())
                .collect()
        })
    }

    fn handler(reply: Reply) -> (DeleteMediaAsset, Arc<FakeProvider>) {
        let provider = Arc::new(FakeProvider::new(reply));
        (DeleteMediaAsset::new(provider.clone()), provider)
    }

    fn authed(data: Value) -> CallableRequest {
        CallableRequest::new(data, Some(AuthContext::new("token#0")))
    }

    #[tokio::test]
    async fn missing_auth_is_unauthenticated_regardless_of_payload() {
        capture_logs();
        let (handler, provider) = handler(Reply::Status("ok"));

        for data in [json!({ "publicId": "abc123" }), json!({ "publicId": 7 }), Value::Null] {
            let result = handler.handle(CallableRequest::new(data, None)).await;
            assert_eq!(result, Err(DeleteError::Unauthenticated));
        }
        assert_eq!(provider.calls(), 0);
        assert!(error_logs().is_empty());
    }

    #[tokio::test]
    async fn invalid_public_id_is_invalid_argument() {
        capture_logs();
        let (handler, provider) = handler(Reply::Status("ok"));

        for data in [
            json!({}),
            json!({ "publicId": null }),
            json!({ "publicId": 123 }),
            json!({ "publicId": { "id": "abc123" } }),
        ] {
            let result = handler.handle(authed(data)).await;
            assert_eq!(result, Err(DeleteError::InvalidArgument));
        }
        assert_eq!(provider.calls(), 0);
        assert!(error_logs().is_empty());
    }

    #[tokio::test]
    async fn ok_status_deletes() {
        let (handler, provider) = handler(Reply::Status("ok"));

        let result = handler.handle(authed(json!({ "publicId": "abc123" }))).await.unwrap();
        assert_eq!(
            result,
            DeleteResult {
                success: true,
                message: "abc123 deleted or not found".to_string(),
            }
        );
        assert_eq!(provider.ids(), vec!["abc123"]);
    }

    #[tokio::test]
    async fn not_found_is_success_on_every_call() {
        capture_logs();
        let (handler, provider) = handler(Reply::Status("not found"));

        for _ in 0..2 {
            let result = handler
                .handle(authed(json!({ "publicId": "missing-id" })))
                .await
                .unwrap();
            assert!(result.success);
            assert_eq!(result.message, "missing-id deleted or not found");
        }
        assert_eq!(provider.calls(), 2);
        assert!(error_logs().is_empty());
    }

    #[tokio::test]
    async fn unexpected_status_is_internal_and_logged_once() {
        capture_logs();
        let (handler, _) = handler(Reply::Status("error"));

        let result = handler.handle(authed(json!({ "publicId": "abc123" }))).await;
        assert_eq!(
            result,
            Err(DeleteError::Internal {
                status: "error".to_string()
            })
        );

        let logs = error_logs();
        assert_eq!(logs.len(), 1);
        assert!(logs[0].contains("abc123"));
        assert!(logs[0].contains("error"));
    }

    #[tokio::test]
    async fn provider_failure_is_unknown_and_logged_once() {
        capture_logs();
        let (handler, _) = handler(Reply::ProviderFailure);

        let err = handler
            .handle(authed(json!({ "publicId": "abc123" })))
            .await
            .unwrap_err();
        assert_eq!(err, DeleteError::Unknown);
        assert!(!err.to_string().contains(PROVIDER_FAILURE));

        let logs = error_logs();
        assert_eq!(logs.len(), 1);
        assert!(logs[0].contains("abc123"));
        assert!(logs[0].contains(PROVIDER_FAILURE));
    }
}
