//! Person operations. Each call forwards to the repository and tags errors
//! with the service operation name; no extra policy lives here yet.

use crate::error::{AppError, ResultExt};
use crate::models::{Person, PersonInput};
use crate::repository::PersonRepository;

#[derive(Clone)]
pub struct PersonService {
    repository: PersonRepository,
}

impl PersonService {
    pub fn new(repository: PersonRepository) -> Self {
        Self { repository }
    }

    pub async fn get_person(&self, id: i64) -> Result<Person, AppError> {
        self.repository
            .get_person(id)
            .await
            .context("person_service.get_person")
    }

    pub async fn get_persons(&self, limit: i64, offset: i64) -> Result<Vec<Person>, AppError> {
        self.repository
            .get_persons(limit, offset)
            .await
            .context("person_service.get_persons")
    }

    pub async fn create_person(&self, person: &PersonInput) -> Result<i64, AppError> {
        self.repository
            .create_person(person)
            .await
            .context("person_service.create_person")
    }

    pub async fn update_person(&self, person: &PersonInput, id: i64) -> Result<i64, AppError> {
        self.repository
            .update_person(person, id)
            .await
            .context("person_service.update_person")
    }

    pub async fn delete_person(&self, id: i64) -> Result<(), AppError> {
        self.repository
            .delete_person(id)
            .await
            .context("person_service.delete_person")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::store::memory_pool;

    async fn service() -> PersonService {
        PersonService::new(PersonRepository::new(memory_pool().await))
    }

    #[tokio::test]
    async fn get_missing_person_fails_with_chain() {
        let err = service().await.get_person(-1).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(
            err.to_string(),
            "person_service.get_person: person_repository.get_person: not found: person -1"
        );
    }

    #[tokio::test]
    async fn insert_update_and_delete() {
        let service = service().await;
        let created = PersonInput {
            email: Some("test".into()),
            phone: Some("test".into()),
            first_name: "test".into(),
            last_name: "test".into(),
        };
        let id = service.create_person(&created).await.unwrap();
        let person = service.get_person(id).await.unwrap();
        assert_eq!(person.id, id);
        assert_eq!(person.first_name, "test");

        let update = PersonInput {
            first_name: "test1".into(),
            last_name: "test1".into(),
            ..created
        };
        let updated_id = service.update_person(&update, id).await.unwrap();
        assert_eq!(updated_id, id);
        let updated = service.get_person(updated_id).await.unwrap();
        assert_eq!(updated.email.as_deref(), Some("test"));
        assert_eq!(updated.first_name, "test1");
        assert_eq!(updated.last_name, "test1");

        service.delete_person(id).await.unwrap();
        let err = service.get_person(id).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn duplicate_create_is_conflict() {
        let service = service().await;
        let p = PersonInput {
            first_name: "A".into(),
            last_name: "B".into(),
            ..Default::default()
        };
        service.create_person(&p).await.unwrap();
        let err = service.create_person(&p).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Conflict);
        assert!(err.to_string().starts_with("person_service.create_person: "));
    }
}
