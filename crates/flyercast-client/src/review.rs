//! Review-request registry endpoint bindings.

use flyercast_core::AppResult;
use flyercast_core::types::{CompanyId, CustomerId};
use flyercast_entity::review::{CreateReviewCustomer, ReviewCustomer};

use crate::http::ApiClient;

impl ApiClient {
    /// `POST /review/customer` — enroll a customer for review requests.
    pub async fn add_review_customer(
        &self,
        customer: &CreateReviewCustomer,
    ) -> AppResult<ReviewCustomer> {
        Ok(self.post_json("/review/customer", customer).await?)
    }

    /// `GET /review/customers/:companyId` — list a company's customers.
    pub async fn list_review_customers(
        &self,
        company_id: CompanyId,
    ) -> AppResult<Vec<ReviewCustomer>> {
        Ok(self
            .get_json(&format!("/review/customers/{company_id}"))
            .await?)
    }

    /// `GET /review/customer/:id` — fetch one customer.
    pub async fn get_review_customer(&self, id: CustomerId) -> AppResult<ReviewCustomer> {
        Ok(self.get_json(&format!("/review/customer/{id}")).await?)
    }

    /// `DELETE /review/customer/:id` — soft-delete; stops further
    /// automated messages for this customer.
    pub async fn deactivate_review_customer(&self, id: CustomerId) -> AppResult<()> {
        Ok(self.delete(&format!("/review/customer/{id}")).await?)
    }
}
