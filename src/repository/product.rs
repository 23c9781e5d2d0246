use std::collections::{HashMap, HashSet};

use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::domain::product::{
    NewProduct as DomainNewProduct, Product as DomainProduct, ProductListQuery,
    UpdateProduct as DomainUpdateProduct,
};
use crate::domain::product_image::{
    NewProductImage as DomainNewProductImage, ProductImage as DomainProductImage,
};
use crate::domain::tag::Tag as DomainTag;
use crate::models::category::Category as DbCategory;
use crate::models::product::{
    NewProduct as DbNewProduct, Product as DbProduct, UpdateProduct as DbUpdateProduct,
};
use crate::models::product_image::{
    NewProductImage as DbNewProductImage, ProductImage as DbProductImage,
};
use crate::models::product_tag::NewProductTag as DbNewProductTag;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, ProductReader, ProductWriter};

impl ProductReader for DieselRepository {
    fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<DomainProduct>> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let product = products::table
            .filter(products::id.eq(id))
            .first::<DbProduct>(&mut conn)
            .optional()?;

        match product {
            Some(db_product) => Ok(Some(load_product_graph(&mut conn, db_product)?)),
            None => Ok(None),
        }
    }

    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<Vec<DomainProduct>> {
        use crate::schema::{categories, products};

        let mut conn = self.conn()?;

        let db_products = products::table
            .order(products::id.asc())
            .offset(query.skip)
            .limit(query.limit)
            .load::<DbProduct>(&mut conn)?;

        if db_products.is_empty() {
            return Ok(Vec::new());
        }

        let product_ids: Vec<i32> = db_products.iter().map(|product| product.id).collect();
        let category_ids: Vec<i32> = db_products
            .iter()
            .map(|product| product.category_id)
            .collect();

        let category_map: HashMap<i32, DbCategory> = categories::table
            .filter(categories::id.eq_any(&category_ids))
            .load::<DbCategory>(&mut conn)?
            .into_iter()
            .map(|category| (category.id, category))
            .collect();

        let mut tag_map = load_tags_for_products(&mut conn, &product_ids)?;
        let mut image_map = load_images_for_products(&mut conn, &product_ids)?;

        let mut domain_products = Vec::with_capacity(db_products.len());
        for db_product in db_products {
            let category = category_map
                .get(&db_product.category_id)
                .cloned()
                .ok_or(RepositoryError::NotFound)?;

            let id = db_product.id;
            let mut domain = DomainProduct::from((db_product, category));
            domain.tags = tag_map.remove(&id).unwrap_or_default();
            domain.images = image_map.remove(&id).unwrap_or_default();
            domain_products.push(domain);
        }

        Ok(domain_products)
    }
}

impl ProductWriter for DieselRepository {
    /// Inserts the product row, its tag associations, and its image rows in
    /// one transaction so no partial product ever becomes visible.
    fn create_product(&self, new_product: &DomainNewProduct) -> RepositoryResult<DomainProduct> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        conn.transaction::<DomainProduct, RepositoryError, _>(|conn| {
            let db_new = DbNewProduct::from(new_product);

            let created = diesel::insert_into(products::table)
                .values(&db_new)
                .get_result::<DbProduct>(conn)?;

            replace_tag_associations(conn, created.id, &new_product.tag_ids)?;
            insert_images(conn, created.id, &new_product.images)?;

            load_product_graph(conn, created)
        })
    }

    /// Scalar fields are overwritten unconditionally; tags and images are
    /// replaced wholesale only when the update supplies a list.
    fn update_product(
        &self,
        product_id: i32,
        updates: &DomainUpdateProduct,
    ) -> RepositoryResult<DomainProduct> {
        use crate::schema::{product_images, product_tags, products};

        let mut conn = self.conn()?;

        conn.transaction::<DomainProduct, RepositoryError, _>(|conn| {
            let db_updates = DbUpdateProduct::from(updates);

            let updated = diesel::update(products::table.filter(products::id.eq(product_id)))
                .set(&db_updates)
                .get_result::<DbProduct>(conn)
                .optional()?
                .ok_or(RepositoryError::NotFound)?;

            if let Some(tag_ids) = &updates.tag_ids {
                diesel::delete(
                    product_tags::table.filter(product_tags::product_id.eq(product_id)),
                )
                .execute(conn)?;
                replace_tag_associations(conn, product_id, tag_ids)?;
            }

            if let Some(images) = &updates.images {
                diesel::delete(
                    product_images::table.filter(product_images::product_id.eq(product_id)),
                )
                .execute(conn)?;
                insert_images(conn, product_id, images)?;
            }

            load_product_graph(conn, updated)
        })
    }

    fn delete_product(&self, product_id: i32) -> RepositoryResult<()> {
        use crate::schema::{product_images, product_tags, products};

        let mut conn = self.conn()?;

        conn.transaction::<(), RepositoryError, _>(|conn| {
            diesel::delete(
                product_images::table.filter(product_images::product_id.eq(product_id)),
            )
            .execute(conn)?;

            diesel::delete(product_tags::table.filter(product_tags::product_id.eq(product_id)))
                .execute(conn)?;

            let deleted = diesel::delete(products::table.filter(products::id.eq(product_id)))
                .execute(conn)?;

            if deleted == 0 {
                return Err(RepositoryError::NotFound);
            }

            Ok(())
        })
    }
}

fn replace_tag_associations(
    conn: &mut SqliteConnection,
    product_id: i32,
    tag_ids: &[i32],
) -> RepositoryResult<()> {
    use crate::schema::product_tags;

    if tag_ids.is_empty() {
        return Ok(());
    }

    // Tag ids are a set: duplicates collapse to one association each, and
    // the join table's unique index must never fire on valid input.
    let mut seen = HashSet::new();
    let rows: Vec<DbNewProductTag> = tag_ids
        .iter()
        .copied()
        .filter(|tag_id| seen.insert(*tag_id))
        .map(|tag_id| DbNewProductTag { product_id, tag_id })
        .collect();

    diesel::insert_into(product_tags::table)
        .values(&rows)
        .execute(conn)?;

    Ok(())
}

fn insert_images(
    conn: &mut SqliteConnection,
    product_id: i32,
    images: &[DomainNewProductImage],
) -> RepositoryResult<()> {
    use crate::schema::product_images;

    // One insert per image keeps the supplied order as the id order.
    for image in images {
        diesel::insert_into(product_images::table)
            .values(DbNewProductImage {
                product_id,
                url: image.url.as_str(),
            })
            .execute(conn)?;
    }

    Ok(())
}

fn load_product_graph(
    conn: &mut SqliteConnection,
    db_product: DbProduct,
) -> RepositoryResult<DomainProduct> {
    use crate::schema::categories;

    let category = categories::table
        .filter(categories::id.eq(db_product.category_id))
        .first::<DbCategory>(conn)?;

    let id = db_product.id;
    let mut domain = DomainProduct::from((db_product, category));
    domain.tags = load_tags_for_products(conn, &[id])?
        .remove(&id)
        .unwrap_or_default();
    domain.images = load_images_for_products(conn, &[id])?
        .remove(&id)
        .unwrap_or_default();

    Ok(domain)
}

fn load_tags_for_products(
    conn: &mut SqliteConnection,
    product_ids: &[i32],
) -> RepositoryResult<HashMap<i32, Vec<DomainTag>>> {
    use crate::models::tag::Tag as DbTag;
    use crate::schema::{product_tags, tags};

    if product_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows = product_tags::table
        .inner_join(tags::table)
        .filter(product_tags::product_id.eq_any(product_ids))
        .order((product_tags::product_id.asc(), tags::id.asc()))
        .select((product_tags::product_id, DbTag::as_select()))
        .load::<(i32, DbTag)>(conn)?;

    let mut map: HashMap<i32, Vec<DomainTag>> = HashMap::new();
    for (product_id, tag) in rows {
        map.entry(product_id).or_default().push(tag.into());
    }

    Ok(map)
}

fn load_images_for_products(
    conn: &mut SqliteConnection,
    product_ids: &[i32],
) -> RepositoryResult<HashMap<i32, Vec<DomainProductImage>>> {
    use crate::schema::product_images;

    if product_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows = product_images::table
        .filter(product_images::product_id.eq_any(product_ids))
        .order(product_images::id.asc())
        .load::<DbProductImage>(conn)?;

    let mut map: HashMap<i32, Vec<DomainProductImage>> = HashMap::new();
    for row in rows {
        map.entry(row.product_id).or_default().push(row.into());
    }

    Ok(map)
}
