//! Contact service

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::domain::{Contact, ContactRepository, DomainError, DomainResult};
use crate::shared::errors::ResultExt;
use crate::shared::{validate_fields, PaginationParams};

pub struct ContactService {
    contacts: Arc<dyn ContactRepository>,
}

impl ContactService {
    pub fn new(contacts: Arc<dyn ContactRepository>) -> Self {
        Self { contacts }
    }

    pub async fn create(&self, contact: Contact) -> DomainResult<()> {
        validate_fields(&contact)?;

        let (id, owner_id) = (contact.id, contact.owner_id);
        self.contacts
            .create(contact)
            .await
            .context("creating contact")?;

        info!(contact_id = %id, owner_id = %owner_id, "Contact created");
        Ok(())
    }

    pub async fn get_by_id(&self, id: Uuid) -> DomainResult<Contact> {
        self.contacts
            .find_by_id(id)
            .await
            .and_then(|found| found.ok_or_else(|| DomainError::not_found("Contact", "id", id)))
            .context("getting contact by id")
    }

    pub async fn get_by_owner_id(
        &self,
        owner_id: Uuid,
        page: PaginationParams,
    ) -> DomainResult<Vec<Contact>> {
        self.contacts
            .find_by_owner_id(owner_id, Some(page))
            .await
            .context("listing contacts by owner id")
    }

    pub async fn update(&self, contact: Contact) -> DomainResult<()> {
        self.contacts
            .update(contact)
            .await
            .context("updating contact")
    }

    pub async fn delete_by_id(&self, id: Uuid) -> DomainResult<()> {
        self.contacts
            .delete_by_id(id)
            .await
            .context("deleting contact by id")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::InMemoryContactRepository;

    fn service() -> ContactService {
        ContactService::new(Arc::new(InMemoryContactRepository::new()))
    }

    #[tokio::test]
    async fn create_requires_name_and_value() {
        let svc = service();
        let owner = Uuid::new_v4();

        let err = svc.create(Contact::new(owner, "", "+7 999")).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(msg) if msg == "contact name is required"));

        let err = svc.create(Contact::new(owner, "phone", "")).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(msg) if msg == "contact value is required"));
    }

    #[tokio::test]
    async fn contacts_of_owner() {
        let svc = service();
        let owner = Uuid::new_v4();
        let phone = Contact::new(owner, "phone", "+7 999 000 00 00");
        let mail = Contact::new(owner, "email", "ivanov@example.com");
        svc.create(phone.clone()).await.unwrap();
        svc.create(mail.clone()).await.unwrap();
        svc.create(Contact::new(Uuid::new_v4(), "tg", "@petrov"))
            .await
            .unwrap();

        let found = svc
            .get_by_owner_id(owner, PaginationParams::default())
            .await
            .unwrap();
        assert_eq!(found, vec![mail, phone.clone()]);
        assert_eq!(svc.get_by_id(phone.id).await.unwrap(), phone);
    }

    #[tokio::test]
    async fn update_missing_contact_fails_with_context() {
        let svc = service();
        let err = svc
            .update(Contact::new(Uuid::new_v4(), "phone", "1"))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().starts_with("updating contact:"));
    }

    #[tokio::test]
    async fn delete_contact() {
        let svc = service();
        let c = Contact::new(Uuid::new_v4(), "phone", "1");
        svc.create(c.clone()).await.unwrap();
        svc.delete_by_id(c.id).await.unwrap();
        assert!(svc.get_by_id(c.id).await.unwrap_err().is_not_found());
    }
}
