//! Referential and uniqueness checks run before any write is committed.

use std::collections::HashSet;

use crate::repository::{CategoryReader, TagReader};
use crate::services::{ServiceError, ServiceResult};

/// Fail with `DuplicateName` when a category with this name already exists.
pub fn ensure_category_name_available<R>(repo: &R, name: &str) -> ServiceResult<()>
where
    R: CategoryReader + ?Sized,
{
    match repo.get_category_by_name(name)? {
        Some(_) => Err(ServiceError::DuplicateName(format!("category `{name}`"))),
        None => Ok(()),
    }
}

/// Fail with `DuplicateName` when a tag with this name already exists.
pub fn ensure_tag_name_available<R>(repo: &R, name: &str) -> ServiceResult<()>
where
    R: TagReader + ?Sized,
{
    match repo.get_tag_by_name(name)? {
        Some(_) => Err(ServiceError::DuplicateName(format!("tag `{name}`"))),
        None => Ok(()),
    }
}

/// Fail with `MissingReference` when the category id does not resolve.
pub fn ensure_category_exists<R>(repo: &R, category_id: i32) -> ServiceResult<()>
where
    R: CategoryReader + ?Sized,
{
    match repo.get_category_by_id(category_id)? {
        Some(_) => Ok(()),
        None => Err(ServiceError::MissingReference(format!(
            "category {category_id} does not exist"
        ))),
    }
}

/// Fail with `MissingReference` when any supplied tag id does not resolve.
///
/// Ids are checked as a set: duplicates collapse to one check each, and the
/// number of resolved distinct ids must equal the number supplied.
pub fn ensure_tags_exist<R>(repo: &R, tag_ids: &[i32]) -> ServiceResult<()>
where
    R: TagReader + ?Sized,
{
    let distinct: HashSet<i32> = tag_ids.iter().copied().collect();
    if distinct.is_empty() {
        return Ok(());
    }

    let ids: Vec<i32> = distinct.iter().copied().collect();
    let found = repo.list_tags_by_ids(&ids)?;

    if found.len() != distinct.len() {
        let found_ids: HashSet<i32> = found.iter().map(|tag| tag.id).collect();
        let mut missing: Vec<i32> = distinct.difference(&found_ids).copied().collect();
        missing.sort_unstable();
        return Err(ServiceError::MissingReference(format!(
            "tags {missing:?} do not exist"
        )));
    }

    Ok(())
}
