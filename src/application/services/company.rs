//! Company service

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::domain::{Company, CompanyRepository, DomainError, DomainResult};
use crate::shared::errors::ResultExt;
use crate::shared::{validate_fields, PaginationParams};

pub struct CompanyService {
    companies: Arc<dyn CompanyRepository>,
}

impl CompanyService {
    pub fn new(companies: Arc<dyn CompanyRepository>) -> Self {
        Self { companies }
    }

    /// Name and city must be filled in.
    pub async fn create(&self, company: Company) -> DomainResult<()> {
        validate_fields(&company)?;

        let id = company.id;
        self.companies
            .create(company)
            .await
            .context("creating company")?;

        info!(company_id = %id, "Company created");
        Ok(())
    }

    pub async fn get_by_id(&self, id: Uuid) -> DomainResult<Company> {
        self.companies
            .find_by_id(id)
            .await
            .and_then(|found| found.ok_or_else(|| DomainError::not_found("Company", "id", id)))
            .context("getting company by id")
    }

    pub async fn get_by_owner_id(
        &self,
        owner_id: Uuid,
        page: PaginationParams,
    ) -> DomainResult<Vec<Company>> {
        self.companies
            .find_by_owner_id(owner_id, Some(page))
            .await
            .context("listing companies by owner id")
    }

    pub async fn get_all(&self, page: PaginationParams) -> DomainResult<Vec<Company>> {
        self.companies
            .find_all(Some(page))
            .await
            .context("listing companies")
    }

    pub async fn update(&self, company: Company) -> DomainResult<()> {
        self.companies
            .update(company)
            .await
            .context("updating company")
    }

    pub async fn delete_by_id(&self, id: Uuid) -> DomainResult<()> {
        self.companies
            .delete_by_id(id)
            .await
            .context("deleting company by id")
    }
}
