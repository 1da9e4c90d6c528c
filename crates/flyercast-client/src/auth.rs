//! Auth endpoint bindings.

use flyercast_core::AppResult;
use flyercast_entity::session::{LoginRequest, RegisterRequest, Session};

use crate::http::ApiClient;

impl ApiClient {
    /// `POST /auth/login` — exchange credentials for a session.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<Session> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let session: Session = self.post_json("/auth/login", &body).await?;
        Ok(session)
    }

    /// `POST /auth/register` — create a company account and return its
    /// session.
    pub async fn register(&self, profile: &RegisterRequest) -> AppResult<Session> {
        let session: Session = self.post_json("/auth/register", profile).await?;
        Ok(session)
    }
}
