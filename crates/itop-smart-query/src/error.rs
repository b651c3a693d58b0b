//! Query processor error types.

use itop_client::ClientError;
use thiserror::Error;

/// Errors surfaced to the caller of the query processor.
///
/// Ambiguity (class ties, unknown vocabulary, unmatched names) never ends up
/// here; it is resolved with a default during parsing.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    #[error("{class} query failed: {message}")]
    Backend { class: String, message: String },

    #[error("transport error: {0}")]
    Transport(String),
}

/// Convenience alias for query processor results.
pub type QueryResult<T> = Result<T, QueryError>;

impl From<ClientError> for QueryError {
    fn from(e: ClientError) -> Self {
        match e {
            ClientError::Backend { message, .. } => QueryError::Backend {
                class: "iTop".to_string(),
                message,
            },
            other => QueryError::Transport(other.to_string()),
        }
    }
}

impl QueryError {
    /// Human-readable text returned in place of a report.
    pub fn render(&self) -> String {
        match self {
            QueryError::InvalidQuery(reason) => format!(
                "❌ **Invalid Query**: {reason}\n\n\
                 Try something like:\n\
                 • \"Show all production servers\"\n\
                 • \"How many open incidents this week\"\n\
                 • \"User requests by team\""
            ),
            QueryError::Backend { class, message } if is_unknown_class(message) => format!(
                "⚠️ **{class} Class Not Available**: The {class} class may not be configured \
                 in your iTop instance.\n\n**Error**: {message}\n\n**Suggestion**: Search for \
                 'tickets' to use the generic Ticket class, or ask your iTop administrator."
            ),
            QueryError::Backend { class, message } => {
                format!("❌ **{class} Query Error**: {message}")
            }
            QueryError::Transport(message) => format!("❌ **Connection Error**: {message}"),
        }
    }
}

fn is_unknown_class(message: &str) -> bool {
    let lower = message.to_lowercase();
    lower.contains("unknown class") || lower.contains("class not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_backend_code_stays_a_backend_error() {
        let e = QueryError::from(ClientError::Backend {
            code: 1,
            message: "Error: Invalid login".into(),
        });
        assert_eq!(e.render(), "❌ **iTop Query Error**: Error: Invalid login");

        let e = QueryError::from(ClientError::Transport("connection refused".into()));
        assert!(e.render().starts_with("❌ **Connection Error**"));
    }

    #[test]
    fn render_backend_error() {
        let e = QueryError::Backend {
            class: "Server".into(),
            message: "Invalid OQL".into(),
        };
        assert_eq!(e.render(), "❌ **Server Query Error**: Invalid OQL");
    }

    #[test]
    fn render_unknown_class() {
        let e = QueryError::Backend {
            class: "Incident".into(),
            message: "Unknown class 'Incident'".into(),
        };
        let text = e.render();
        assert!(text.starts_with("⚠️ **Incident Class Not Available**"));
        assert!(text.contains("Unknown class 'Incident'"));
    }

    #[test]
    fn client_errors_become_transport() {
        let e: QueryError = ClientError::Transport("connection refused".into()).into();
        assert!(matches!(e, QueryError::Transport(_)));
        assert!(e.render().contains("connection refused"));
    }

    #[test]
    fn invalid_query_has_guidance() {
        let text = QueryError::InvalidQuery("query text is empty".into()).render();
        assert!(text.contains("query text is empty"));
        assert!(text.contains("production servers"));
    }
}
