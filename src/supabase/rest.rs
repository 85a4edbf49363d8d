use serde_json::Value;

use super::{SupabaseClient, SupabaseError};

impl SupabaseClient {
    /// Fetch rows from a table with `select=*`.
    ///
    /// Filters are PostgREST operator expressions paired with their column,
    /// e.g. `("id", "eq.7c4e1d8a-...")`.
    pub async fn rows(
        &self,
        table: &str,
        filters: &[(&str, &str)],
        limit: Option<u32>,
    ) -> Result<Vec<Value>, SupabaseError> {
        let mut url = self.endpoint(&format!("/rest/v1/{}", table));
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("select", "*");
            for (column, filter) in filters {
                pairs.append_pair(column, filter);
            }
            if let Some(limit) = limit {
                pairs.append_pair("limit", &limit.to_string());
            }
        }

        let resp = self
            .http
            .get(url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(Self::api_error(resp).await);
        }
        Ok(resp.json().await?)
    }

    /// Fetch at most one row, `None` when nothing matches the filters.
    pub async fn maybe_single(
        &self,
        table: &str,
        filters: &[(&str, &str)],
    ) -> Result<Option<Value>, SupabaseError> {
        let mut rows = self.rows(table, filters, Some(1)).await?;
        if rows.is_empty() {
            Ok(None)
        } else {
            Ok(Some(rows.remove(0)))
        }
    }

    /// Insert or update a single row, returning the stored representation.
    ///
    /// Uses `merge-duplicates` so a row that already exists under the same
    /// primary key is updated in place.
    pub async fn upsert(&self, table: &str, row: &Value) -> Result<Value, SupabaseError> {
        let url = self.endpoint(&format!("/rest/v1/{}", table));

        let resp = self
            .http
            .post(url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Prefer", "resolution=merge-duplicates,return=representation")
            .json(&[row])
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(Self::api_error(resp).await);
        }

        let mut rows: Vec<Value> = resp.json().await?;
        if rows.is_empty() {
            return Err(SupabaseError::Parse(
                "upsert returned an empty representation".to_string(),
            ));
        }
        Ok(rows.remove(0))
    }

    /// Call a Postgres function through the REST rpc endpoint.
    pub async fn rpc(&self, function: &str, args: &Value) -> Result<Value, SupabaseError> {
        let url = self.endpoint(&format!("/rest/v1/rpc/{}", function));

        let resp = self
            .http
            .post(url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .json(args)
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(Self::api_error(resp).await);
        }
        Ok(resp.json().await?)
    }

    /// Reachability check against the REST root.
    pub async fn health_check(&self) -> Result<(), SupabaseError> {
        let resp = self
            .http
            .get(self.endpoint("/rest/v1/"))
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(Self::api_error(resp).await);
        }
        Ok(())
    }
}
