//! Activity field service
//!
//! Besides CRUD, resolves the cost (weight) that applies to a company through
//! the activity field it is registered in.

use std::sync::Arc;

use tracing::{debug, info};
use uuid::Uuid;

use crate::domain::{
    ActivityField, ActivityFieldRepository, CompanyRepository, DomainError, DomainResult,
};
use crate::shared::errors::ResultExt;
use crate::shared::{invalid, validate_fields, PaginationParams};

pub struct ActivityFieldService {
    fields: Arc<dyn ActivityFieldRepository>,
    companies: Arc<dyn CompanyRepository>,
}

impl ActivityFieldService {
    pub fn new(
        fields: Arc<dyn ActivityFieldRepository>,
        companies: Arc<dyn CompanyRepository>,
    ) -> Self {
        Self { fields, companies }
    }

    pub async fn create(&self, field: ActivityField) -> DomainResult<()> {
        validate_fields(&field)?;

        if field.has_zero_cost() {
            return Err(invalid("activity field cost cannot be zero"));
        }

        let id = field.id;
        self.fields
            .create(field)
            .await
            .context("creating activity field")?;

        info!(activity_field_id = %id, "Activity field created");
        Ok(())
    }

    pub async fn delete_by_id(&self, id: Uuid) -> DomainResult<()> {
        self.fields
            .delete_by_id(id)
            .await
            .context("deleting activity field by id")
    }

    pub async fn update(&self, field: ActivityField) -> DomainResult<()> {
        self.fields
            .update(field)
            .await
            .context("updating activity field")
    }

    pub async fn get_by_id(&self, id: Uuid) -> DomainResult<ActivityField> {
        self.find_field(id).await
    }

    pub async fn get_cost_by_company_id(&self, company_id: Uuid) -> DomainResult<f64> {
        let company = self
            .companies
            .find_by_id(company_id)
            .await
            .and_then(|found| {
                found.ok_or_else(|| DomainError::not_found("Company", "id", company_id))
            })
            .context("getting company by id")?;

        let field = self.find_field(company.activity_field_id).await?;

        debug!(company_id = %company_id, cost = field.cost, "Resolved company cost");
        Ok(field.cost)
    }

    pub async fn get_max_cost(&self) -> DomainResult<f64> {
        self.fields
            .max_cost()
            .await
            .and_then(|max| {
                max.ok_or_else(|| DomainError::not_found("ActivityField", "cost", "max"))
            })
            .context("getting max activity field cost")
    }

    pub async fn get_all(&self, page: PaginationParams) -> DomainResult<Vec<ActivityField>> {
        self.fields
            .find_all(Some(page))
            .await
            .context("listing activity fields")
    }

    async fn find_field(&self, id: Uuid) -> DomainResult<ActivityField> {
        self.fields
            .find_by_id(id)
            .await
            .and_then(|found| {
                found.ok_or_else(|| DomainError::not_found("ActivityField", "id", id))
            })
            .context("getting activity field by id")
    }
}
