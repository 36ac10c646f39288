use std::time::Duration;

use actix_cors::Cors;
use actix_web::middleware::{Compress, DefaultHeaders};
use actix_web::{App, HttpServer, web};
use human_panic::setup_panic;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rust_relieving_system::config::AppConfig;
use rust_relieving_system::models::AppStartTime;
use rust_relieving_system::routes::{
    configure_auth_routes, configure_file_routes, configure_request_routes,
};
use rust_relieving_system::runtime::lifetime::{listen_for_shutdown, prepare};
use rust_relieving_system::utils::parameter_error_handler::{
    json_error_handler, path_error_handler, query_error_handler,
};

fn build_cors(config: &AppConfig) -> Cors {
    let mut cors = Cors::default()
        .max_age(config.cors.max_age)
        .supports_credentials();

    if config.cors.allowed_origins.iter().any(|o| o == "*") {
        cors = cors.allow_any_origin();
    } else {
        for origin in &config.cors.allowed_origins {
            cors = cors.allowed_origin(origin);
        }
    }
    if config.cors.allowed_methods.iter().any(|m| m == "*") {
        cors = cors.allow_any_method();
    } else {
        cors = cors.allowed_methods(
            config.cors.allowed_methods.iter().map(String::as_str),
        );
    }
    if config.cors.allowed_headers.iter().any(|h| h == "*") {
        cors = cors.allow_any_header();
    } else {
        for header in &config.cors.allowed_headers {
            cors = cors.allowed_header(header.as_str());
        }
    }
    cors
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    setup_panic!();

    let start_time = AppStartTime {
        start_datetime: chrono::Utc::now(),
    };

    if let Err(e) = AppConfig::init() {
        eprintln!("Failed to load configuration: {e}");
        std::process::exit(1);
    }
    let config = AppConfig::get();

    // 日志：开发环境带源码位置的彩色输出，生产环境 JSON
    let (writer, _log_guard) = tracing_appender::non_blocking(std::io::stdout());
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.app.log_level));
    if config.is_production() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(writer)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(writer)
            .with_file(true)
            .with_line_number(true)
            .init();
    }

    info!("Starting {}", config.app.system_name);

    let context = match prepare().await {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Startup failed: {}", e.format_simple());
            std::process::exit(1);
        }
    };
    let storage = context.storage;
    let cache = context.cache;

    let elapsed = chrono::Utc::now() - start_time.start_datetime;
    info!(
        "Startup preparation finished in {} ms",
        elapsed.num_milliseconds()
    );

    let app_start_time = web::Data::new(start_time);
    let server = HttpServer::new({
        let storage = storage.clone();
        let cache = cache.clone();
        let app_start_time = app_start_time.clone();
        move || {
            App::new()
                .wrap(build_cors(config))
                .wrap(Compress::default())
                .wrap(DefaultHeaders::new().add(("X-Content-Type-Options", "nosniff")))
                .app_data(web::Data::new(storage.clone()))
                .app_data(web::Data::new(cache.clone()))
                .app_data(app_start_time.clone())
                .app_data(web::PayloadConfig::new(config.server.limits.max_payload_size))
                .app_data(web::JsonConfig::default().error_handler(json_error_handler))
                .app_data(web::QueryConfig::default().error_handler(query_error_handler))
                .app_data(web::PathConfig::default().error_handler(path_error_handler))
                .configure(configure_auth_routes)
                .configure(configure_request_routes)
                .configure(configure_file_routes)
        }
    })
    .keep_alive(Duration::from_secs(config.server.timeouts.keep_alive))
    .client_request_timeout(Duration::from_millis(config.server.timeouts.client_request))
    .client_disconnect_timeout(Duration::from_millis(
        config.server.timeouts.client_disconnect,
    ))
    .workers(config.server.workers);

    #[cfg(unix)]
    let server = if let Some(socket_path) = config.unix_socket_path() {
        info!("Listening on unix socket {}", socket_path);
        server.bind_uds(socket_path)?
    } else {
        info!("Listening on http://{}", config.server_bind_address());
        server.bind(config.server_bind_address())?
    };
    #[cfg(not(unix))]
    let server = {
        info!("Listening on http://{}", config.server_bind_address());
        server.bind(config.server_bind_address())?
    };

    let server = server.run();
    let handle = server.handle();

    tokio::select! {
        result = server => result,
        _ = listen_for_shutdown() => {
            handle.stop(true).await;
            info!("Server stopped");
            Ok(())
        }
    }
}
