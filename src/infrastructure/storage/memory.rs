//! In-memory repositories
//!
//! Backed by `DashMap`, intended for development and testing. Listings are
//! sorted before pagination so pages are stable between calls.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::{DashMap, DashSet};
use uuid::Uuid;

use crate::domain::{
    ActivityField, ActivityFieldRepository, AuthRepository, Company, CompanyRepository, Contact,
    ContactRepository, DomainError, DomainResult, FinancialReport, FinancialReportRepository,
    Period, RepositoryProvider, Skill, SkillRepository, User, UserAuth, UserRepository, UserSkill,
    UserSkillRepository,
};
use crate::shared::{paginate, PaginationParams};

/// Rows keyed by id, shared by every entity repository below.
struct Table<T> {
    entity: &'static str,
    rows: DashMap<Uuid, T>,
}

impl<T: Clone> Table<T> {
    fn new(entity: &'static str) -> Self {
        Self {
            entity,
            rows: DashMap::new(),
        }
    }

    fn insert(&self, id: Uuid, row: T) -> DomainResult<()> {
        match self.rows.entry(id) {
            Entry::Occupied(_) => Err(DomainError::Conflict(format!(
                "{} with id={}",
                self.entity, id
            ))),
            Entry::Vacant(slot) => {
                slot.insert(row);
                Ok(())
            }
        }
    }

    fn get(&self, id: Uuid) -> Option<T> {
        self.rows.get(&id).map(|row| row.clone())
    }

    fn replace(&self, id: Uuid, row: T) -> DomainResult<()> {
        match self.rows.get_mut(&id) {
            Some(mut existing) => {
                *existing = row;
                Ok(())
            }
            None => Err(DomainError::not_found(self.entity, "id", id)),
        }
    }

    fn remove(&self, id: Uuid) -> DomainResult<()> {
        self.rows
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| DomainError::not_found(self.entity, "id", id))
    }

    fn select<K: Ord>(
        &self,
        filter: impl Fn(&T) -> bool,
        sort_key: impl Fn(&T) -> K,
        page: Option<PaginationParams>,
    ) -> Vec<T> {
        let mut rows: Vec<T> = self
            .rows
            .iter()
            .filter(|row| filter(row.value()))
            .map(|row| row.value().clone())
            .collect();
        rows.sort_by_key(|row| sort_key(row));
        paginate(rows, page)
    }
}

// ── Users ───────────────────────────────────────────────────────

pub struct InMemoryUserRepository {
    table: Table<User>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            table: Table::new("User"),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> DomainResult<()> {
        if self.find_by_username(&user.username).await?.is_some() {
            return Err(DomainError::Conflict(format!(
                "User with username={}",
                user.username
            )));
        }
        self.table.insert(user.id, user)
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<User>> {
        Ok(self.table.get(id))
    }

    async fn find_by_username(&self, username: &str) -> DomainResult<Option<User>> {
        Ok(self
            .table
            .rows
            .iter()
            .find(|row| row.username == username)
            .map(|row| row.clone()))
    }

    async fn find_all(&self, page: Option<PaginationParams>) -> DomainResult<Vec<User>> {
        Ok(self.table.select(|_| true, |u| u.username.clone(), page))
    }

    async fn update(&self, user: User) -> DomainResult<()> {
        self.table.replace(user.id, user)
    }

    async fn delete_by_id(&self, id: Uuid) -> DomainResult<()> {
        self.table.remove(id)
    }
}

// ── Auth ────────────────────────────────────────────────────────

pub struct InMemoryAuthRepository {
    by_username: DashMap<String, UserAuth>,
}

impl InMemoryAuthRepository {
    pub fn new() -> Self {
        Self {
            by_username: DashMap::new(),
        }
    }
}

impl Default for InMemoryAuthRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuthRepository for InMemoryAuthRepository {
    async fn register(&self, auth: UserAuth) -> DomainResult<()> {
        match self.by_username.entry(auth.username.clone()) {
            Entry::Occupied(_) => Err(DomainError::Conflict(format!(
                "User with username={}",
                auth.username
            ))),
            Entry::Vacant(slot) => {
                slot.insert(auth);
                Ok(())
            }
        }
    }

    async fn find_by_username(&self, username: &str) -> DomainResult<Option<UserAuth>> {
        Ok(self.by_username.get(username).map(|a| a.clone()))
    }
}

// ── Companies ───────────────────────────────────────────────────

pub struct InMemoryCompanyRepository {
    table: Table<Company>,
}

impl InMemoryCompanyRepository {
    pub fn new() -> Self {
        Self {
            table: Table::new("Company"),
        }
    }
}

impl Default for InMemoryCompanyRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CompanyRepository for InMemoryCompanyRepository {
    async fn create(&self, company: Company) -> DomainResult<()> {
        self.table.insert(company.id, company)
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Company>> {
        Ok(self.table.get(id))
    }

    async fn find_by_owner_id(
        &self,
        owner_id: Uuid,
        page: Option<PaginationParams>,
    ) -> DomainResult<Vec<Company>> {
        Ok(self
            .table
            .select(|c| c.owner_id == owner_id, |c| c.name.clone(), page))
    }

    async fn find_all(&self, page: Option<PaginationParams>) -> DomainResult<Vec<Company>> {
        Ok(self.table.select(|_| true, |c| c.name.clone(), page))
    }

    async fn update(&self, company: Company) -> DomainResult<()> {
        self.table.replace(company.id, company)
    }

    async fn delete_by_id(&self, id: Uuid) -> DomainResult<()> {
        self.table.remove(id)
    }
}

// ── Activity fields ─────────────────────────────────────────────

pub struct InMemoryActivityFieldRepository {
    table: Table<ActivityField>,
}

impl InMemoryActivityFieldRepository {
    pub fn new() -> Self {
        Self {
            table: Table::new("ActivityField"),
        }
    }
}

impl Default for InMemoryActivityFieldRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ActivityFieldRepository for InMemoryActivityFieldRepository {
    async fn create(&self, field: ActivityField) -> DomainResult<()> {
        self.table.insert(field.id, field)
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<ActivityField>> {
        Ok(self.table.get(id))
    }

    async fn find_all(&self, page: Option<PaginationParams>) -> DomainResult<Vec<ActivityField>> {
        Ok(self.table.select(|_| true, |f| f.name.clone(), page))
    }

    async fn max_cost(&self) -> DomainResult<Option<f64>> {
        Ok(self
            .table
            .rows
            .iter()
            .map(|row| row.cost)
            .reduce(f64::max))
    }

    async fn update(&self, field: ActivityField) -> DomainResult<()> {
        self.table.replace(field.id, field)
    }

    async fn delete_by_id(&self, id: Uuid) -> DomainResult<()> {
        self.table.remove(id)
    }
}

// ── Contacts ────────────────────────────────────────────────────

pub struct InMemoryContactRepository {
    table: Table<Contact>,
}

impl InMemoryContactRepository {
    pub fn new() -> Self {
        Self {
            table: Table::new("Contact"),
        }
    }
}

impl Default for InMemoryContactRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn create(&self, contact: Contact) -> DomainResult<()> {
        self.table.insert(contact.id, contact)
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Contact>> {
        Ok(self.table.get(id))
    }

    async fn find_by_owner_id(
        &self,
        owner_id: Uuid,
        page: Option<PaginationParams>,
    ) -> DomainResult<Vec<Contact>> {
        Ok(self.table.select(
            |c| c.owner_id == owner_id,
            |c| (c.name.clone(), c.value.clone()),
            page,
        ))
    }

    async fn update(&self, contact: Contact) -> DomainResult<()> {
        self.table.replace(contact.id, contact)
    }

    async fn delete_by_id(&self, id: Uuid) -> DomainResult<()> {
        self.table.remove(id)
    }
}

// ── Financial reports ───────────────────────────────────────────

pub struct InMemoryFinancialReportRepository {
    table: Table<FinancialReport>,
}

impl InMemoryFinancialReportRepository {
    pub fn new() -> Self {
        Self {
            table: Table::new("FinancialReport"),
        }
    }
}

impl Default for InMemoryFinancialReportRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FinancialReportRepository for InMemoryFinancialReportRepository {
    async fn create(&self, report: FinancialReport) -> DomainResult<()> {
        self.table.insert(report.id, report)
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<FinancialReport>> {
        Ok(self.table.get(id))
    }

    async fn find_by_company(
        &self,
        company_id: Uuid,
        period: &Period,
    ) -> DomainResult<Vec<FinancialReport>> {
        Ok(self.table.select(
            |r| r.company_id == company_id && period.contains(r.year, r.quarter),
            |r| (r.year, r.quarter),
            None,
        ))
    }

    async fn update(&self, report: FinancialReport) -> DomainResult<()> {
        self.table.replace(report.id, report)
    }

    async fn delete_by_id(&self, id: Uuid) -> DomainResult<()> {
        self.table.remove(id)
    }
}

// ── Skills ──────────────────────────────────────────────────────

pub struct InMemorySkillRepository {
    table: Table<Skill>,
}

impl InMemorySkillRepository {
    pub fn new() -> Self {
        Self {
            table: Table::new("Skill"),
        }
    }
}

impl Default for InMemorySkillRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SkillRepository for InMemorySkillRepository {
    async fn create(&self, skill: Skill) -> DomainResult<()> {
        self.table.insert(skill.id, skill)
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Skill>> {
        Ok(self.table.get(id))
    }

    async fn find_all(&self, page: Option<PaginationParams>) -> DomainResult<Vec<Skill>> {
        Ok(self.table.select(|_| true, |s| s.name.clone(), page))
    }

    async fn update(&self, skill: Skill) -> DomainResult<()> {
        self.table.replace(skill.id, skill)
    }

    async fn delete_by_id(&self, id: Uuid) -> DomainResult<()> {
        self.table.remove(id)
    }
}

// ── User–skill pairs ────────────────────────────────────────────

pub struct InMemoryUserSkillRepository {
    pairs: DashSet<UserSkill>,
}

impl InMemoryUserSkillRepository {
    pub fn new() -> Self {
        Self {
            pairs: DashSet::new(),
        }
    }

    fn select(
        &self,
        filter: impl Fn(&UserSkill) -> bool,
        page: Option<PaginationParams>,
    ) -> Vec<UserSkill> {
        let mut pairs: Vec<UserSkill> = self
            .pairs
            .iter()
            .filter(|pair| filter(pair.key()))
            .map(|pair| *pair.key())
            .collect();
        pairs.sort_by_key(|p| (p.user_id, p.skill_id));
        paginate(pairs, page)
    }
}

impl Default for InMemoryUserSkillRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserSkillRepository for InMemoryUserSkillRepository {
    async fn create(&self, pair: UserSkill) -> DomainResult<()> {
        if self.pairs.insert(pair) {
            Ok(())
        } else {
            Err(DomainError::Conflict(format!(
                "UserSkill with user_id={} skill_id={}",
                pair.user_id, pair.skill_id
            )))
        }
    }

    async fn delete(&self, pair: UserSkill) -> DomainResult<()> {
        self.pairs
            .remove(&pair)
            .map(|_| ())
            .ok_or_else(|| DomainError::not_found("UserSkill", "user_id", pair.user_id))
    }

    async fn find_by_user_id(
        &self,
        user_id: Uuid,
        page: Option<PaginationParams>,
    ) -> DomainResult<Vec<UserSkill>> {
        Ok(self.select(|p| p.user_id == user_id, page))
    }

    async fn find_by_skill_id(
        &self,
        skill_id: Uuid,
        page: Option<PaginationParams>,
    ) -> DomainResult<Vec<UserSkill>> {
        Ok(self.select(|p| p.skill_id == skill_id, page))
    }
}

// ── Provider ────────────────────────────────────────────────────

/// Unified repository provider backed by in-memory maps.
#[derive(Clone)]
pub struct InMemoryRepositoryProvider {
    users: Arc<InMemoryUserRepository>,
    auth: Arc<InMemoryAuthRepository>,
    companies: Arc<InMemoryCompanyRepository>,
    activity_fields: Arc<InMemoryActivityFieldRepository>,
    contacts: Arc<InMemoryContactRepository>,
    financial_reports: Arc<InMemoryFinancialReportRepository>,
    skills: Arc<InMemorySkillRepository>,
    user_skills: Arc<InMemoryUserSkillRepository>,
}

impl InMemoryRepositoryProvider {
    pub fn new() -> Self {
        Self {
            users: Arc::new(InMemoryUserRepository::new()),
            auth: Arc::new(InMemoryAuthRepository::new()),
            companies: Arc::new(InMemoryCompanyRepository::new()),
            activity_fields: Arc::new(InMemoryActivityFieldRepository::new()),
            contacts: Arc::new(InMemoryContactRepository::new()),
            financial_reports: Arc::new(InMemoryFinancialReportRepository::new()),
            skills: Arc::new(InMemorySkillRepository::new()),
            user_skills: Arc::new(InMemoryUserSkillRepository::new()),
        }
    }
}

impl Default for InMemoryRepositoryProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl RepositoryProvider for InMemoryRepositoryProvider {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.users.clone()
    }

    fn auth(&self) -> Arc<dyn AuthRepository> {
        self.auth.clone()
    }

    fn companies(&self) -> Arc<dyn CompanyRepository> {
        self.companies.clone()
    }

    fn activity_fields(&self) -> Arc<dyn ActivityFieldRepository> {
        self.activity_fields.clone()
    }

    fn contacts(&self) -> Arc<dyn ContactRepository> {
        self.contacts.clone()
    }

    fn financial_reports(&self) -> Arc<dyn FinancialReportRepository> {
        self.financial_reports.clone()
    }

    fn skills(&self) -> Arc<dyn SkillRepository> {
        self.skills.clone()
    }

    fn user_skills(&self) -> Arc<dyn UserSkillRepository> {
        self.user_skills.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn duplicate_id_is_a_conflict() {
        let repo = InMemorySkillRepository::new();
        let skill = Skill::new("Rust", "Systems programming");
        repo.create(skill.clone()).await.unwrap();

        let err = repo.create(skill).await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn update_and_delete_of_missing_rows_are_not_found() {
        let repo = InMemoryContactRepository::new();
        let contact = Contact::new(Uuid::new_v4(), "email", "a@b.c");

        assert!(repo.update(contact.clone()).await.unwrap_err().is_not_found());
        assert!(repo.delete_by_id(contact.id).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn listings_are_sorted_and_paginated() {
        let repo = InMemoryActivityFieldRepository::new();
        for name in ["delta", "alpha", "charlie", "bravo"] {
            repo.create(ActivityField::new(name, "d", 1.0)).await.unwrap();
        }

        let page = repo
            .find_all(Some(PaginationParams::new(Some(2), Some(2))))
            .await
            .unwrap();
        let names: Vec<_> = page.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["charlie", "delta"]);
        assert_eq!(repo.find_all(None).await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn max_cost_of_empty_table_is_none() {
        let repo = InMemoryActivityFieldRepository::new();
        assert_eq!(repo.max_cost().await.unwrap(), None);

        repo.create(ActivityField::new("a", "d", 0.4)).await.unwrap();
        repo.create(ActivityField::new("b", "d", 1.7)).await.unwrap();
        assert_eq!(repo.max_cost().await.unwrap(), Some(1.7));
    }

    #[tokio::test]
    async fn reports_are_filtered_by_company_and_period() {
        let repo = InMemoryFinancialReportRepository::new();
        let company = Uuid::new_v4();
        for (year, quarter) in [(2022, 4), (2023, 1), (2023, 3), (2024, 1)] {
            repo.create(FinancialReport::new(company, year, quarter, 1.0, 1.0))
                .await
                .unwrap();
        }
        repo.create(FinancialReport::new(Uuid::new_v4(), 2023, 1, 1.0, 1.0))
            .await
            .unwrap();

        let found = repo
            .find_by_company(company, &Period::year(2023))
            .await
            .unwrap();
        let quarters: Vec<_> = found.iter().map(|r| (r.year, r.quarter)).collect();
        assert_eq!(quarters, [(2023, 1), (2023, 3)]);
    }

    #[tokio::test]
    async fn user_skill_pairs() {
        let repo = InMemoryUserSkillRepository::new();
        let user = Uuid::new_v4();
        let pair = UserSkill::new(user, Uuid::new_v4());

        repo.create(pair).await.unwrap();
        assert!(matches!(repo.create(pair).await, Err(DomainError::Conflict(_))));
        assert_eq!(repo.find_by_user_id(user, None).await.unwrap(), vec![pair]);
        assert_eq!(repo.find_by_skill_id(pair.skill_id, None).await.unwrap(), vec![pair]);

        repo.delete(pair).await.unwrap();
        assert!(repo.delete(pair).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn duplicate_username_is_a_conflict() {
        let repo = InMemoryAuthRepository::new();
        repo.register(UserAuth::new("ivanov", "hash")).await.unwrap();
        let err = repo.register(UserAuth::new("ivanov", "hash2")).await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }
}
