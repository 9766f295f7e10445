use crate::gateway::models::convert::ModelError;

#[derive(thiserror::Error, Debug)]
pub enum GatewayError {
    #[error("request failed: {0}")]
    Http(reqwest::Error),
    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },
    #[error("bad response: {0}")]
    Decode(#[from] ModelError),
    #[error("bad input: {0}")]
    BadInput(&'static str),
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        GatewayError::Http(err)
    }
}

impl GatewayError {
    pub fn is_network_error(&self) -> bool {
        matches!(self, GatewayError::Http(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, GatewayError::Status { status: 404, .. })
    }
}
