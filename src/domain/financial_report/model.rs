//! Financial report domain entity

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct FinancialReport {
    pub id: Uuid,
    pub company_id: Uuid,
    pub year: i32,
    #[validate(range(min = 1, max = 4, message = "quarter must be between 1 and 4"))]
    pub quarter: i32,
    #[validate(range(min = 0.0, message = "revenue cannot be negative"))]
    pub revenue: f64,
    #[validate(range(min = 0.0, message = "costs cannot be negative"))]
    pub costs: f64,
}

impl FinancialReport {
    pub fn new(company_id: Uuid, year: i32, quarter: i32, revenue: f64, costs: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            company_id,
            year,
            quarter,
            revenue,
            costs,
        }
    }

    pub fn profit(&self) -> f64 {
        self.revenue - self.costs
    }
}

/// Inclusive range of (year, quarter) pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub start_year: i32,
    pub start_quarter: i32,
    pub end_year: i32,
    pub end_quarter: i32,
}

impl Period {
    pub fn new(start_year: i32, start_quarter: i32, end_year: i32, end_quarter: i32) -> Self {
        Self {
            start_year,
            start_quarter,
            end_year,
            end_quarter,
        }
    }

    /// The whole of one calendar year.
    pub fn year(year: i32) -> Self {
        Self::new(year, 1, year, 4)
    }

    /// Start comes after end.
    pub fn is_reversed(&self) -> bool {
        (self.start_year, self.start_quarter) > (self.end_year, self.end_quarter)
    }

    pub fn contains(&self, year: i32, quarter: i32) -> bool {
        let at = (year, quarter);
        (self.start_year, self.start_quarter) <= at && at <= (self.end_year, self.end_quarter)
    }
}

/// Reports of one company over a period, ordered by (year, quarter).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialReportByPeriod {
    pub reports: Vec<FinancialReport>,
    pub period: Period,
}

impl FinancialReportByPeriod {
    pub fn new(mut reports: Vec<FinancialReport>, period: Period) -> Self {
        reports.sort_by_key(|r| (r.year, r.quarter));
        Self { reports, period }
    }

    pub fn total_revenue(&self) -> f64 {
        self.reports.iter().map(|r| r.revenue).sum()
    }

    pub fn total_costs(&self) -> f64 {
        self.reports.iter().map(|r| r.costs).sum()
    }

    pub fn profit(&self) -> f64 {
        self.total_revenue() - self.total_costs()
    }
}
