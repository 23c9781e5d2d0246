use diesel::prelude::*;

/// Insertable row of the product/tag join table. Rows are only ever created
/// and deleted wholesale alongside their product, so no queryable model or
/// changeset is needed.
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::product_tags)]
pub struct NewProductTag {
    pub product_id: i32,
    pub tag_id: i32,
}
