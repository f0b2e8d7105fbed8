#[cfg(feature = "ssr")]
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    use actix_files::Files;
    use actix_web::*;
    use leptos::*;
    use leptos::logging::{error, log};
    use leptos_actix::{generate_route_list, LeptosRoutes};
    use storefront::api;
    use storefront::app::*;
    use storefront::config::ServerConfig;
    use storefront::db::Database;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    let config = ServerConfig::from_env();

    // Initialize the database
    let db = Database::new(&config.db_path).map_err(to_io_error)?;
    db.create_schema().await.map_err(to_io_error)?;
    if config.seed_demo_data {
        if let Err(e) = db.seed_if_empty().await {
            error!("[SERVER] Demo seed failed: {}", e);
        }
    }
    let db = web::Data::new(Arc::new(Mutex::new(db)));
    log!("[SERVER] Schema ready");

    // Load configuration
    let conf = get_configuration(None).await.map_err(to_io_error)?;
    let addr = conf.leptos_options.site_addr;

    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(App);
    log!("[SERVER] listening on http://{}", &addr);

    HttpServer::new(move || {
        let leptos_options = &conf.leptos_options;
        let site_root = &leptos_options.site_root;

        App::new()
            .app_data(db.clone())
            // JSON API before the Leptos catch-all routes
            .configure(api::configure)
            // Serve JS/WASM/CSS from `pkg`
            .service(Files::new("/pkg", format!("{site_root}/pkg")))
            .service(Files::new("/images", format!("{site_root}/images")))
            .service(Files::new("/assets", site_root))
            .service(favicon)
            .leptos_routes(leptos_options.to_owned(), routes.to_owned(), App)
            .app_data(web::Data::new(leptos_options.to_owned()))
    })
    .bind(&addr)?
    .run()
    .await
}

#[cfg(feature = "ssr")]
fn to_io_error(e: impl std::fmt::Display) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
}

#[cfg(feature = "ssr")]
#[actix_web::get("favicon.ico")]
async fn favicon(
    leptos_options: actix_web::web::Data<leptos::LeptosOptions>,
) -> actix_web::Result<actix_files::NamedFile> {
    let leptos_options = leptos_options.into_inner();
    let site_root = &leptos_options.site_root;
    Ok(actix_files::NamedFile::open(format!(
        "{site_root}/favicon.ico"
    ))?)
}

#[cfg(not(any(feature = "ssr", feature = "csr")))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}

#[cfg(all(not(feature = "ssr"), feature = "csr"))]
pub fn main() {
    // a client-side main function is required for using `trunk serve`
    // to run: `trunk serve --open --features csr`
    use storefront::app::*;

    console_error_panic_hook::set_once();

    leptos::mount_to_body(App);
}
