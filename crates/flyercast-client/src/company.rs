//! Company registry endpoint bindings.

use flyercast_core::AppResult;
use flyercast_core::types::CompanyId;
use flyercast_entity::company::{Company, CreateCompany, UpdateCompany};

use crate::http::ApiClient;

impl ApiClient {
    /// `GET /company` — list all companies.
    pub async fn list_companies(&self) -> AppResult<Vec<Company>> {
        Ok(self.get_json("/company").await?)
    }

    /// `GET /company/:id` — fetch one company.
    pub async fn get_company(&self, id: CompanyId) -> AppResult<Company> {
        Ok(self.get_json(&format!("/company/{id}")).await?)
    }

    /// `POST /company` — create a company record.
    pub async fn create_company(&self, company: &CreateCompany) -> AppResult<Company> {
        Ok(self.post_json("/company", company).await?)
    }

    /// `PUT /company/:id` — update a company record.
    pub async fn update_company(
        &self,
        id: CompanyId,
        update: &UpdateCompany,
    ) -> AppResult<Company> {
        Ok(self.put_json(&format!("/company/{id}"), update).await?)
    }

    /// `DELETE /company/:id` — delete a company record.
    pub async fn delete_company(&self, id: CompanyId) -> AppResult<()> {
        Ok(self.delete(&format!("/company/{id}")).await?)
    }
}
