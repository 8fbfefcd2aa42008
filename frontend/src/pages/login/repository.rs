use crate::api::{ApiClient, ApiError, LoginRequest};

pub async fn login(api: &ApiClient, request: LoginRequest) -> Result<(), ApiError> {
    api.login(&request).await
}
