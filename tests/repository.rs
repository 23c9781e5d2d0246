use saaj_catalog::domain::category::NewCategory;
use saaj_catalog::domain::product::{NewProduct, ProductListQuery, UpdateProduct};
use saaj_catalog::domain::product_image::NewProductImage;
use saaj_catalog::domain::tag::NewTag;
use saaj_catalog::repository::errors::RepositoryError;
use saaj_catalog::repository::{
    CategoryReader, CategoryWriter, ProductReader, ProductWriter, TagReader, TagWriter,
};

mod common;

#[test]
fn test_category_repository_crud() {
    let test_db = common::TestDb::new("test_category_repository_crud.db");
    let repo = test_db.repo();

    let rings = repo
        .create_category(&NewCategory::new("Rings"))
        .expect("create category");
    repo.create_category(&NewCategory::new("Bracelets"))
        .expect("create category");

    let listed = repo.list_categories().expect("list categories");
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].name, "Bracelets"); // sorted by name
    assert_eq!(listed[1].name, "Rings");

    let by_name = repo
        .get_category_by_name("Rings")
        .expect("get by name")
        .expect("category exists");
    assert_eq!(by_name.id, rings.id);

    let by_id = repo
        .get_category_by_id(rings.id)
        .expect("get by id")
        .expect("category exists");
    assert_eq!(by_id.name, "Rings");

    repo.delete_category(rings.id).expect("delete category");
    assert!(repo.get_category_by_id(rings.id).expect("get by id").is_none());

    let err = repo
        .delete_category(rings.id)
        .expect_err("expected repeated delete to fail");
    assert!(matches!(err, RepositoryError::NotFound));
}

#[test]
fn test_tag_repository_crud() {
    let test_db = common::TestDb::new("test_tag_repository_crud.db");
    let repo = test_db.repo();

    let gold = repo.create_tag(&NewTag::new("Gold")).expect("create tag");
    let silver = repo.create_tag(&NewTag::new("Silver")).expect("create tag");

    let listed = repo.list_tags().expect("list tags");
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].name, "Gold");

    let by_ids = repo
        .list_tags_by_ids(&[gold.id, silver.id, 999])
        .expect("list by ids");
    assert_eq!(by_ids.len(), 2);

    assert!(repo.list_tags_by_ids(&[]).expect("empty ids").is_empty());

    repo.delete_tag(silver.id).expect("delete tag");
    assert!(repo.get_tag_by_id(silver.id).expect("get by id").is_none());
}

#[test]
fn test_product_create_resolves_relations() {
    let test_db = common::TestDb::new("test_product_create_resolves_relations.db");
    let repo = test_db.repo();

    let rings = repo
        .create_category(&NewCategory::new("Rings"))
        .expect("create category");
    let gold = repo.create_tag(&NewTag::new("Gold")).expect("create tag");
    let new_arrival = repo
        .create_tag(&NewTag::new("New Arrival"))
        .expect("create tag");

    let new_product = NewProduct::new("Simple Band", "A plain gold band.", 99.99, rings.id)
        .with_discount(10)
        .with_tags(vec![gold.id, new_arrival.id])
        .with_images(vec![
            NewProductImage::new("https://cdn.test/band-front.jpg"),
            NewProductImage::new("https://cdn.test/band-side.jpg"),
        ]);

    let product = repo.create_product(&new_product).expect("create product");

    assert_eq!(product.name, "Simple Band");
    assert_eq!(product.discount, 10);
    assert_eq!(product.category.name, "Rings");
    assert_eq!(product.tags.len(), 2);
    assert_eq!(product.images.len(), 2);
    assert_eq!(product.images[0].url, "https://cdn.test/band-front.jpg");
    assert_eq!(product.images[1].url, "https://cdn.test/band-side.jpg");

    let fetched = repo
        .get_product_by_id(product.id)
        .expect("get product")
        .expect("product exists");
    assert_eq!(fetched.tags.len(), 2);
    assert_eq!(fetched.images.len(), 2);
}

#[test]
fn test_product_tags_collapse_duplicate_ids() {
    let test_db = common::TestDb::new("test_product_tags_collapse_duplicates.db");
    let repo = test_db.repo();

    let rings = repo
        .create_category(&NewCategory::new("Rings"))
        .expect("create category");
    let gold = repo.create_tag(&NewTag::new("Gold")).expect("create tag");
    let silver = repo.create_tag(&NewTag::new("Silver")).expect("create tag");

    let product = repo
        .create_product(
            &NewProduct::new("Band", "A band.", 50.0, rings.id)
                .with_tags(vec![gold.id, gold.id, silver.id]),
        )
        .expect("create product");
    assert_eq!(product.tags.len(), 2);

    let updated = repo
        .update_product(
            product.id,
            &UpdateProduct::new("Band", "A band.", 50.0, 0, rings.id)
                .tags(vec![silver.id, silver.id]),
        )
        .expect("update product");
    assert_eq!(updated.tags.len(), 1);
    assert_eq!(updated.tags[0].id, silver.id);
}

#[test]
fn test_product_update_distinguishes_unset_and_empty_tags() {
    let test_db = common::TestDb::new("test_product_update_unset_vs_empty.db");
    let repo = test_db.repo();

    let rings = repo
        .create_category(&NewCategory::new("Rings"))
        .expect("create category");
    let gold = repo.create_tag(&NewTag::new("Gold")).expect("create tag");

    let product = repo
        .create_product(
            &NewProduct::new("Band", "A band.", 50.0, rings.id).with_tags(vec![gold.id]),
        )
        .expect("create product");

    // Unset tags: scalars change, associations stay.
    let updated = repo
        .update_product(
            product.id,
            &UpdateProduct::new("Band", "A band.", 45.0, 0, rings.id),
        )
        .expect("update product");
    assert_eq!(updated.price, 45.0);
    assert_eq!(updated.tags.len(), 1);

    // Empty list clears the associations.
    let cleared = repo
        .update_product(
            product.id,
            &UpdateProduct::new("Band", "A band.", 45.0, 0, rings.id).tags(Vec::new()),
        )
        .expect("update product");
    assert!(cleared.tags.is_empty());
}

#[test]
fn test_product_update_replaces_images_in_order() {
    let test_db = common::TestDb::new("test_product_update_replaces_images.db");
    let repo = test_db.repo();

    let rings = repo
        .create_category(&NewCategory::new("Rings"))
        .expect("create category");

    let product = repo
        .create_product(
            &NewProduct::new("Band", "A band.", 50.0, rings.id)
                .with_images(vec![NewProductImage::new("https://cdn.test/old.jpg")]),
        )
        .expect("create product");

    let updated = repo
        .update_product(
            product.id,
            &UpdateProduct::new("Band", "A band.", 50.0, 0, rings.id).images(vec![
                NewProductImage::new("https://cdn.test/new-1.jpg"),
                NewProductImage::new("https://cdn.test/new-2.jpg"),
            ]),
        )
        .expect("update product");

    let urls: Vec<&str> = updated.images.iter().map(|img| img.url.as_str()).collect();
    assert_eq!(urls, vec!["https://cdn.test/new-1.jpg", "https://cdn.test/new-2.jpg"]);
}

#[test]
fn test_update_missing_product_reports_not_found() {
    let test_db = common::TestDb::new("test_update_missing_product.db");
    let repo = test_db.repo();

    let rings = repo
        .create_category(&NewCategory::new("Rings"))
        .expect("create category");

    let err = repo
        .update_product(999, &UpdateProduct::new("X", "X", 1.0, 0, rings.id))
        .expect_err("expected missing product to fail");
    assert!(matches!(err, RepositoryError::NotFound));
}

#[test]
fn test_category_delete_cascades_to_products() {
    let test_db = common::TestDb::new("test_category_delete_cascades.db");
    let repo = test_db.repo();

    let rings = repo
        .create_category(&NewCategory::new("Rings"))
        .expect("create category");
    let gold = repo.create_tag(&NewTag::new("Gold")).expect("create tag");

    let product = repo
        .create_product(
            &NewProduct::new("Band", "A band.", 50.0, rings.id)
                .with_tags(vec![gold.id])
                .with_images(vec![NewProductImage::new("https://cdn.test/band.jpg")]),
        )
        .expect("create product");

    repo.delete_category(rings.id).expect("delete category");

    assert!(repo.get_product_by_id(product.id).expect("get product").is_none());
    // The tag itself survives the cascade.
    assert!(repo.get_tag_by_id(gold.id).expect("get tag").is_some());
}

#[test]
fn test_tag_delete_leaves_products_in_place() {
    let test_db = common::TestDb::new("test_tag_delete_leaves_products.db");
    let repo = test_db.repo();

    let rings = repo
        .create_category(&NewCategory::new("Rings"))
        .expect("create category");
    let gold = repo.create_tag(&NewTag::new("Gold")).expect("create tag");

    let product = repo
        .create_product(&NewProduct::new("Band", "A band.", 50.0, rings.id).with_tags(vec![gold.id]))
        .expect("create product");

    repo.delete_tag(gold.id).expect("delete tag");

    let fetched = repo
        .get_product_by_id(product.id)
        .expect("get product")
        .expect("product exists");
    assert!(fetched.tags.is_empty());
}

#[test]
fn test_product_listing_windows_by_id() {
    let test_db = common::TestDb::new("test_product_listing_windows.db");
    let repo = test_db.repo();

    let rings = repo
        .create_category(&NewCategory::new("Rings"))
        .expect("create category");

    for index in 0..5 {
        repo.create_product(&NewProduct::new(
            format!("Band {index}"),
            "A band.",
            10.0 + index as f64,
            rings.id,
        ))
        .expect("create product");
    }

    let window = repo
        .list_products(ProductListQuery::new().skip(1).limit(2))
        .expect("list products");

    assert_eq!(window.len(), 2);
    assert_eq!(window[0].name, "Band 1");
    assert_eq!(window[1].name, "Band 2");

    let all = repo
        .list_products(ProductListQuery::new())
        .expect("list products");
    assert_eq!(all.len(), 5);
}
