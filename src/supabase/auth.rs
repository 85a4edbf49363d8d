use serde::Deserialize;

use super::{AuthUser, SupabaseClient, SupabaseError};

#[derive(Debug, Deserialize)]
struct AdminUserList {
    users: Vec<AuthUser>,
}

impl SupabaseClient {
    /// Resolve an access token to the account it belongs to.
    ///
    /// Returns `Ok(None)` for expired or otherwise rejected tokens; only
    /// transport failures and unexpected provider statuses surface as errors.
    pub async fn user_for_token(
        &self,
        access_token: &str,
    ) -> Result<Option<AuthUser>, SupabaseError> {
        let resp = self
            .http
            .get(self.endpoint("/auth/v1/user"))
            .header("apikey", &self.api_key)
            .bearer_auth(access_token)
            .send()
            .await?;

        match resp.status().as_u16() {
            200 => Ok(Some(resp.json().await?)),
            401 | 403 => Ok(None),
            _ => Err(Self::api_error(resp).await),
        }
    }

    /// List accounts via the admin endpoint. Only works on a client built
    /// with the service role key.
    pub async fn list_users(&self) -> Result<Vec<AuthUser>, SupabaseError> {
        let resp = self
            .http
            .get(self.endpoint("/auth/v1/admin/users"))
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(Self::api_error(resp).await);
        }

        let list: AdminUserList = resp.json().await?;
        Ok(list.users)
    }
}
