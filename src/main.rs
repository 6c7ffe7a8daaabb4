use actix_web::{App, HttpServer, middleware, web};

use prompt2deck::config::Config;
use prompt2deck::gemini::GeminiClient;
use prompt2deck::handlers;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    // Model credentials are required — fail at startup, not at first request.
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    std::fs::create_dir_all(&config.output_dir)?;

    let gemini = match GeminiClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            log::error!("Failed to build model client: {e}");
            std::process::exit(1);
        }
    };

    let bind_addr = config.bind_addr.clone();
    log::info!("Starting server at http://{bind_addr}");

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(config.clone()))
            .app_data(web::Data::new(gemini.clone()))
            .configure(handlers::configure)
    })
    .bind(&bind_addr)?
    .run()
    .await
}
