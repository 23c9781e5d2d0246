use std::env;
use std::sync::Arc;

use actix_cors::Cors;
use actix_files::Files;
use actix_web::{App, HttpServer, middleware, web};
use dotenvy::dotenv;

use saaj_catalog::config::ServerConfig;
use saaj_catalog::db::establish_connection_pool;
use saaj_catalog::repository::DieselRepository;
use saaj_catalog::routes::categories::{add_category, delete_category, show_categories};
use saaj_catalog::routes::images::upload;
use saaj_catalog::routes::products::{
    add_product, delete_product, edit_product, show_product, show_products,
};
use saaj_catalog::routes::tags::{add_tag, delete_tag, show_tags};
use saaj_catalog::storage::{ImageStore, LocalImageStore};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenv().ok(); // Load .env file

    let database_url = env::var("DATABASE_URL").unwrap_or("catalog.db".to_string());
    let port = env::var("PORT").unwrap_or("8080".to_string());
    let port = port.parse::<u16>().unwrap_or(8080);
    let address = env::var("ADDRESS").unwrap_or("127.0.0.1".to_string());

    let admin_api_key = match env::var("ADMIN_API_KEY") {
        Ok(key) if !key.is_empty() => key,
        _ => {
            log::error!("ADMIN_API_KEY environment variable not set");
            std::process::exit(1);
        }
    };
    let config = ServerConfig::new(admin_api_key);

    // Comma-separated browser origins; unset means any origin is accepted.
    let allowed_origins: Vec<String> = env::var("ALLOWED_ORIGINS")
        .map(|value| {
            value
                .split(',')
                .map(|origin| origin.trim().to_string())
                .filter(|origin| !origin.is_empty())
                .collect()
        })
        .unwrap_or_default();

    let media_root = env::var("MEDIA_ROOT").unwrap_or("media".to_string());
    let media_base_url =
        env::var("MEDIA_BASE_URL").unwrap_or(format!("http://{address}:{port}/media"));

    let pool = match establish_connection_pool(&database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };
    let repo = DieselRepository::new(pool);

    let store = match LocalImageStore::new(&media_root, media_base_url) {
        Ok(store) => Arc::new(store) as Arc<dyn ImageStore>,
        Err(e) => {
            log::error!("Failed to prepare media directory: {e}");
            std::process::exit(1);
        }
    };
    let store = web::Data::from(store);

    HttpServer::new(move || {
        let cors = if allowed_origins.is_empty() {
            Cors::permissive()
        } else {
            let mut cors = Cors::default()
                .allow_any_method()
                .allow_any_header()
                .supports_credentials();
            for origin in &allowed_origins {
                cors = cors.allowed_origin(origin);
            }
            cors
        };

        App::new()
            .wrap(cors)
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new("/media", media_root.clone()))
            .service(show_categories)
            .service(add_category)
            .service(delete_category)
            .service(show_tags)
            .service(add_tag)
            .service(delete_tag)
            .service(show_products)
            .service(show_product)
            .service(add_product)
            .service(edit_product)
            .service(delete_product)
            .service(upload)
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(config.clone()))
            .app_data(store.clone())
    })
    .bind((address, port))?
    .run()
    .await
}
