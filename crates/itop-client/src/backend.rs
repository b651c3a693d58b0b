//! Backend abstraction: anything that can answer iTop REST operations.

use async_trait::async_trait;
use itop_protocol::{OperationDescriptor, OperationRequest};

use crate::error::{ClientError, ClientResult};

/// The request/response surface of an iTop instance.
///
/// Implemented by `ITopClient` (HTTP) and `MockBackend` (tests). Each call is
/// a single stateless round trip; there is no retry at this layer.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Submit one operation and return the decoded envelope.
    async fn submit(&self, request: &OperationRequest) -> ClientResult<itop_protocol::RawResult>;

    /// List the operations the backend supports.
    async fn list_operations(&self) -> ClientResult<Vec<OperationDescriptor>> {
        let result = self.submit(&OperationRequest::list_operations()).await?;
        if !result.is_success() {
            return Err(ClientError::Backend {
                code: result.code,
                message: result
                    .message
                    .unwrap_or_else(|| format!("list_operations failed with code {}", result.code)),
            });
        }
        Ok(result.operations)
    }
}
