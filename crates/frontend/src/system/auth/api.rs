use contracts::system::auth::{LoginRequest, LoginResponse};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;
use crate::shared::error::FetchError;

/// Login with email and password
pub async fn login(email: String, password: String) -> Result<LoginResponse, FetchError> {
    let request = LoginRequest { email, password };

    let response = Request::post(&api_url("/auth/login"))
        .json(&request)
        .map_err(|e| FetchError::Query(e.to_string()))?
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if response.status() == 401 {
        return Err(FetchError::NotAuthenticated);
    }
    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    response
        .json::<LoginResponse>()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))
}
