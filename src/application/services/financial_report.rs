//! Financial report service
//!
//! Reports are accepted only for quarters that are already over: a report for
//! the current (or a future) quarter is rejected. "Now" comes from a [`Clock`]
//! so the rule can be tested against fixed dates.

use std::sync::Arc;

use chrono::Datelike;
use tracing::info;
use uuid::Uuid;

use crate::domain::{
    DomainError, DomainResult, FinancialReport, FinancialReportByPeriod,
    FinancialReportRepository, Period,
};
use crate::shared::errors::ResultExt;
use crate::shared::{completed_quarters, invalid, validate_fields, Clock, SystemClock};

pub struct FinancialReportService {
    reports: Arc<dyn FinancialReportRepository>,
    clock: Arc<dyn Clock>,
}

impl FinancialReportService {
    pub fn new(reports: Arc<dyn FinancialReportRepository>) -> Self {
        Self::with_clock(reports, Arc::new(SystemClock))
    }

    pub fn with_clock(
        reports: Arc<dyn FinancialReportRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self { reports, clock }
    }

    pub async fn create(&self, report: FinancialReport) -> DomainResult<()> {
        self.check_report(&report)?;

        let (id, company_id) = (report.id, report.company_id);
        let (year, quarter) = (report.year, report.quarter);
        self.reports
            .create(report)
            .await
            .context("creating financial report")?;

        info!(
            report_id = %id,
            company_id = %company_id,
            year,
            quarter,
            "Financial report created"
        );
        Ok(())
    }

    /// Create reports one by one; the first failure stops the batch; reports
    /// already created stay in place.
    pub async fn create_by_period(&self, reports: Vec<FinancialReport>) -> DomainResult<()> {
        for report in reports {
            self.create(report)
                .await
                .context("creating reports for period")?;
        }
        Ok(())
    }

    pub async fn get_by_id(&self, id: Uuid) -> DomainResult<FinancialReport> {
        self.reports
            .find_by_id(id)
            .await
            .and_then(|found| {
                found.ok_or_else(|| DomainError::not_found("FinancialReport", "id", id))
            })
            .context("getting financial report by id")
    }

    pub async fn get_by_company(
        &self,
        company_id: Uuid,
        period: Period,
    ) -> DomainResult<FinancialReportByPeriod> {
        if period.is_reversed() {
            return Err(invalid("period end must not be earlier than its start"));
        }

        let reports = self
            .reports
            .find_by_company(company_id, &period)
            .await
            .context("getting financial reports by company id")?;

        Ok(FinancialReportByPeriod::new(reports, period))
    }

    pub async fn update(&self, report: FinancialReport) -> DomainResult<()> {
        self.reports
            .update(report)
            .await
            .context("updating financial report")
    }

    pub async fn delete_by_id(&self, id: Uuid) -> DomainResult<()> {
        self.reports
            .delete_by_id(id)
            .await
            .context("deleting financial report by id")
    }

    fn check_report(&self, report: &FinancialReport) -> DomainResult<()> {
        // revenue >= 0, costs >= 0, quarter in 1..=4
        validate_fields(report)?;

        let now = self.clock.now();
        if report.year > now.year() {
            return Err(invalid("year cannot be later than the current year"));
        }

        if report.year == now.year() && report.quarter > completed_quarters(&now) {
            return Err(invalid("cannot add a report for a quarter that has not ended yet"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::InMemoryFinancialReportRepository;
    use crate::shared::FixedClock;
    use chrono::{TimeZone, Utc};

    /// 2024-08-20: Q1 and Q2 of 2024 are over, Q3 is running.
    fn service() -> FinancialReportService {
        let now = Utc.with_ymd_and_hms(2024, 8, 20, 10, 0, 0).unwrap();
        FinancialReportService::with_clock(
            Arc::new(InMemoryFinancialReportRepository::new()),
            Arc::new(FixedClock(now)),
        )
    }

    fn report(company: Uuid, year: i32, quarter: i32) -> FinancialReport {
        FinancialReport::new(company, year, quarter, 1000.0, 400.0)
    }

    fn rejection(err: DomainError) -> String {
        match err {
            DomainError::Validation(msg) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn accepts_finished_quarters() {
        let svc = service();
        let company = Uuid::new_v4();
        for (year, quarter) in [(2023, 4), (2024, 1), (2024, 2)] {
            svc.create(report(company, year, quarter)).await.unwrap();
        }
    }

    #[tokio::test]
    async fn negative_revenue_is_rejected() {
        let mut r = report(Uuid::new_v4(), 2023, 1);
        r.revenue = -1.0;
        let msg = rejection(service().create(r).await.unwrap_err());
        assert_eq!(msg, "revenue cannot be negative");
    }

    #[tokio::test]
    async fn negative_costs_are_rejected() {
        let mut r = report(Uuid::new_v4(), 2023, 1);
        r.costs = -0.01;
        let msg = rejection(service().create(r).await.unwrap_err());
        assert_eq!(msg, "costs cannot be negative");
    }

    #[tokio::test]
    async fn zero_revenue_and_costs_are_fine() {
        let mut r = report(Uuid::new_v4(), 2023, 1);
        r.revenue = 0.0;
        r.costs = 0.0;
        service().create(r).await.unwrap();
    }

    #[tokio::test]
    async fn quarter_out_of_range_is_rejected() {
        let svc = service();
        for quarter in [0, 5, -1] {
            let msg = rejection(
                svc.create(report(Uuid::new_v4(), 2022, quarter))
                    .await
                    .unwrap_err(),
            );
            assert_eq!(msg, "quarter must be between 1 and 4");
        }
    }

    #[tokio::test]
    async fn future_year_is_rejected() {
        let msg = rejection(
            service()
                .create(report(Uuid::new_v4(), 2025, 1))
                .await
                .unwrap_err(),
        );
        assert_eq!(msg, "year cannot be later than the current year");
    }

    #[tokio::test]
    async fn running_and_upcoming_quarters_are_rejected() {
        let svc = service();
        for quarter in [3, 4] {
            let msg = rejection(
                svc.create(report(Uuid::new_v4(), 2024, quarter))
                    .await
                    .unwrap_err(),
            );
            assert!(msg.contains("has not ended"), "quarter {quarter}");
        }
    }

    #[tokio::test]
    async fn first_quarter_of_year_has_nothing_finished() {
        let now = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();
        let svc = FinancialReportService::with_clock(
            Arc::new(InMemoryFinancialReportRepository::new()),
            Arc::new(FixedClock(now)),
        );
        let err = svc.create(report(Uuid::new_v4(), 2024, 1)).await.unwrap_err();
        assert!(err.is_validation());
        svc.create(report(Uuid::new_v4(), 2023, 4)).await.unwrap();
    }

    #[tokio::test]
    async fn create_by_period_stops_at_first_failure() {
        let svc = service();
        let company = Uuid::new_v4();
        let batch = vec![
            report(company, 2023, 1),
            report(company, 2023, 2),
            report(company, 2023, 7),
            report(company, 2023, 4),
        ];

        let err = svc.create_by_period(batch).await.unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().starts_with("creating reports for period: Validation"));

        let stored = svc.get_by_company(company, Period::year(2023)).await.unwrap();
        let quarters: Vec<_> = stored.reports.iter().map(|r| r.quarter).collect();
        assert_eq!(quarters, [1, 2]);
    }

    #[tokio::test]
    async fn reports_by_company_and_period() {
        let svc = service();
        let company = Uuid::new_v4();
        svc.create_by_period(vec![
            FinancialReport::new(company, 2023, 3, 300.0, 100.0),
            FinancialReport::new(company, 2023, 1, 100.0, 50.0),
            FinancialReport::new(company, 2024, 1, 999.0, 1.0),
        ])
        .await
        .unwrap();

        let by_period = svc
            .get_by_company(company, Period::new(2023, 1, 2023, 4))
            .await
            .unwrap();
        assert_eq!(by_period.reports.len(), 2);
        assert_eq!(by_period.reports[0].quarter, 1);
        assert_eq!(by_period.total_revenue(), 400.0);
        assert_eq!(by_period.profit(), 250.0);
    }

    #[tokio::test]
    async fn reversed_period_is_rejected() {
        let svc = service();
        for period in [Period::new(2024, 1, 2023, 4), Period::new(2023, 3, 2023, 2)] {
            let err = svc.get_by_company(Uuid::new_v4(), period).await.unwrap_err();
            assert!(err.is_validation());
        }
    }

    #[tokio::test]
    async fn get_update_delete() {
        let svc = service();
        let mut r = report(Uuid::new_v4(), 2022, 2);
        svc.create(r.clone()).await.unwrap();
        assert_eq!(svc.get_by_id(r.id).await.unwrap(), r);

        r.revenue = 5000.0;
        svc.update(r.clone()).await.unwrap();
        assert_eq!(svc.get_by_id(r.id).await.unwrap().revenue, 5000.0);

        svc.delete_by_id(r.id).await.unwrap();
        let err = svc.get_by_id(r.id).await.unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().starts_with("getting financial report by id:"));
    }
}
