//! Conversions from external infrastructure errors into domain errors.

use edgekit_domain::EdgeError;
use reqwest::Error as HttpError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub EdgeError);

impl From<InfraError> for EdgeError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<EdgeError> for InfraError {
    fn from(value: EdgeError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoEdgeError {
    fn into_edge(self) -> EdgeError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → EdgeError */
/* -------------------------------------------------------------------------- */

impl IntoEdgeError for HttpError {
    fn into_edge(self) -> EdgeError {
        if self.is_timeout() {
            return EdgeError::Transport("HTTP request timed out".into());
        }

        if self.is_connect() {
            return EdgeError::Transport("HTTP connection failure".into());
        }

        if let Some(status) = self.status() {
            let code = status.as_u16();
            let message =
                format!("HTTP {} {}", code, status.canonical_reason().unwrap_or("unknown status"));

            return match code {
                401 | 403 => EdgeError::Auth(message),
                404 => EdgeError::NotFound(message),
                _ => EdgeError::Transport(message),
            };
        }

        EdgeError::Transport(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_edge())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use reqwest::{Client, StatusCode};
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[tokio::test]
    async fn http_status_401_maps_to_auth_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(StatusCode::UNAUTHORIZED))
            .mount(&server)
            .await;

        let client = Client::builder().no_proxy().build().unwrap();
        let error =
            client.get(server.uri()).send().await.unwrap().error_for_status().unwrap_err();

        let mapped: EdgeError = InfraError::from(error).into();
        match mapped {
            EdgeError::Auth(msg) => assert!(msg.contains("401")),
            other => panic!("expected auth error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn http_status_404_maps_to_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(StatusCode::NOT_FOUND))
            .mount(&server)
            .await;

        let client = Client::builder().no_proxy().build().unwrap();
        let error =
            client.get(server.uri()).send().await.unwrap().error_for_status().unwrap_err();

        let mapped: EdgeError = InfraError::from(error).into();
        assert!(matches!(mapped, EdgeError::NotFound(_)));
    }

    #[tokio::test]
    async fn http_status_500_maps_to_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(StatusCode::INTERNAL_SERVER_ERROR))
            .mount(&server)
            .await;

        let client = Client::builder().no_proxy().build().unwrap();
        let error =
            client.get(server.uri()).send().await.unwrap().error_for_status().unwrap_err();

        let mapped: EdgeError = InfraError::from(error).into();
        match mapped {
            EdgeError::Transport(msg) => assert!(msg.contains("500")),
            other => panic!("expected transport error, got {:?}", other),
        }
    }
}
