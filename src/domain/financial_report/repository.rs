use async_trait::async_trait;
use uuid::Uuid;

use super::{FinancialReport, Period};
use crate::domain::DomainResult;

#[async_trait]
pub trait FinancialReportRepository: Send + Sync {
    async fn create(&self, report: FinancialReport) -> DomainResult<()>;
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<FinancialReport>>;
    /// Reports of `company_id` whose (year, quarter) falls inside `period`.
    async fn find_by_company(
        &self,
        company_id: Uuid,
        period: &Period,
    ) -> DomainResult<Vec<FinancialReport>>;
    async fn update(&self, report: FinancialReport) -> DomainResult<()>;
    async fn delete_by_id(&self, id: Uuid) -> DomainResult<()>;
}
