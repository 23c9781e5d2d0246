use crate::domain::category::Category;
use crate::forms::categories::AddCategoryForm;
use crate::repository::{CategoryReader, CategoryWriter};
use crate::services::{ServiceError, ServiceResult, validation};

/// Returns all categories sorted by name.
pub fn list_categories<R>(repo: &R) -> ServiceResult<Vec<Category>>
where
    R: CategoryReader + ?Sized,
{
    repo.list_categories().map_err(ServiceError::from)
}

/// Creates a new category after checking name uniqueness.
pub fn create_category<R>(repo: &R, form: AddCategoryForm) -> ServiceResult<Category>
where
    R: CategoryReader + CategoryWriter + ?Sized,
{
    let new_category = form
        .into_new_category()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    validation::ensure_category_name_available(repo, &new_category.name)?;

    repo.create_category(&new_category)
        .map_err(ServiceError::from)
}

/// Deletes a category and, by cascade, its products.
pub fn remove_category<R>(repo: &R, category_id: i32) -> ServiceResult<()>
where
    R: CategoryWriter + ?Sized,
{
    repo.delete_category(category_id).map_err(ServiceError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    use crate::repository::errors::{RepositoryError, RepositoryResult};
    use crate::repository::mock::{MockCategoryReader, MockCategoryWriter};

    fn datetime() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .unwrap_or_default()
    }

    fn sample_category(id: i32, name: &str) -> Category {
        Category {
            id,
            name: name.to_string(),
            created_at: datetime(),
            updated_at: datetime(),
        }
    }

    struct FakeRepo {
        reader: MockCategoryReader,
        writer: MockCategoryWriter,
    }

    impl FakeRepo {
        fn new() -> Self {
            Self {
                reader: MockCategoryReader::new(),
                writer: MockCategoryWriter::new(),
            }
        }
    }

    impl CategoryReader for FakeRepo {
        fn get_category_by_id(&self, id: i32) -> RepositoryResult<Option<Category>> {
            self.reader.get_category_by_id(id)
        }

        fn get_category_by_name(&self, name: &str) -> RepositoryResult<Option<Category>> {
            self.reader.get_category_by_name(name)
        }

        fn list_categories(&self) -> RepositoryResult<Vec<Category>> {
            self.reader.list_categories()
        }
    }

    impl CategoryWriter for FakeRepo {
        fn create_category(
            &self,
            new_category: &crate::domain::category::NewCategory,
        ) -> RepositoryResult<Category> {
            self.writer.create_category(new_category)
        }

        fn delete_category(&self, category_id: i32) -> RepositoryResult<()> {
            self.writer.delete_category(category_id)
        }
    }

    #[test]
    fn create_category_persists_new_entry() {
        let mut repo = FakeRepo::new();

        repo.reader
            .expect_get_category_by_name()
            .times(1)
            .withf(|name| name == "Rings")
            .returning(|_| Ok(None));

        repo.writer
            .expect_create_category()
            .times(1)
            .withf(|new_category| new_category.name == "Rings")
            .returning(|new_category| Ok(sample_category(5, &new_category.name)));

        let form = AddCategoryForm {
            name: " Rings ".to_string(),
        };

        let created = create_category(&repo, form).expect("expected success");

        assert_eq!(created.id, 5);
        assert_eq!(created.name, "Rings");
    }

    #[test]
    fn create_category_rejects_duplicate_name() {
        let mut repo = FakeRepo::new();

        repo.reader
            .expect_get_category_by_name()
            .returning(|name| Ok(Some(sample_category(1, name))));

        let form = AddCategoryForm {
            name: "Rings".to_string(),
        };

        let result = create_category(&repo, form);

        assert!(matches!(result, Err(ServiceError::DuplicateName(_))));
    }

    #[test]
    fn create_category_rejects_invalid_form() {
        let repo = FakeRepo::new();

        let form = AddCategoryForm {
            name: "  ".to_string(),
        };

        let result = create_category(&repo, form);

        assert!(matches!(result, Err(ServiceError::Form(_))));
    }

    #[test]
    fn remove_category_maps_missing_id_to_not_found() {
        let mut repo = MockCategoryWriter::new();

        repo.expect_delete_category()
            .times(1)
            .returning(|_| Err(RepositoryError::NotFound));

        let result = remove_category(&repo, 99);

        assert!(matches!(result, Err(ServiceError::NotFound)));
    }

    #[test]
    fn list_categories_passes_through() {
        let mut repo = MockCategoryReader::new();

        repo.expect_list_categories()
            .times(1)
            .returning(|| Ok(vec![sample_category(1, "Bracelets"), sample_category(2, "Rings")]));

        let categories = list_categories(&repo).expect("expected success");

        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].name, "Bracelets");
    }
}
