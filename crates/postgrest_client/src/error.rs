#[derive(thiserror::Error, Debug, serde::Serialize)]
#[serde(tag = "type")]
pub enum PostgrestError {
    #[error("datastore returned {status_code}: {message}")]
    UnexpectedStatus { status_code: u16, message: String },

    #[error("transport error: {details}")]
    Transport { details: String },

    #[error("error deserializing response body: {details}")]
    DeserializationFailed { details: String },
}

impl From<reqwest::Error> for PostgrestError {
    fn from(err: reqwest::Error) -> Self {
        PostgrestError::Transport {
            details: err.to_string(),
        }
    }
}

pub(crate) trait ResponseExt {
    #[allow(async_fn_in_trait)]
    async fn map_client_error(self) -> Result<reqwest::Response, PostgrestError>;
}

impl ResponseExt for reqwest::Response {
    async fn map_client_error(self) -> Result<reqwest::Response, PostgrestError> {
        let status = self.status();
        if status.is_success() {
            Ok(self)
        } else {
            Err(PostgrestError::UnexpectedStatus {
                status_code: status.as_u16(),
                message: self.text().await.unwrap_or_default(),
            })
        }
    }
}
