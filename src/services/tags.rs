use crate::domain::tag::Tag;
use crate::forms::tags::AddTagForm;
use crate::repository::{TagReader, TagWriter};
use crate::services::{ServiceError, ServiceResult, validation};

/// Returns all tags sorted by name.
pub fn list_tags<R>(repo: &R) -> ServiceResult<Vec<Tag>>
where
    R: TagReader + ?Sized,
{
    repo.list_tags().map_err(ServiceError::from)
}

/// Creates a new tag after checking name uniqueness.
pub fn create_tag<R>(repo: &R, form: AddTagForm) -> ServiceResult<Tag>
where
    R: TagReader + TagWriter + ?Sized,
{
    let new_tag = form
        .into_new_tag()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    validation::ensure_tag_name_available(repo, &new_tag.name)?;

    repo.create_tag(&new_tag).map_err(ServiceError::from)
}

/// Deletes a tag, dropping only its product associations.
pub fn remove_tag<R>(repo: &R, tag_id: i32) -> ServiceResult<()>
where
    R: TagWriter + ?Sized,
{
    repo.delete_tag(tag_id).map_err(ServiceError::from)
}
