use clap::Parser;
use std::sync::Arc;
use traffic_volume_web::utils::{logger, validation::Validate};
use traffic_volume_web::{build_router, ModelArtifacts, PredictionService, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = ServerConfig::parse();

    // 初始化日誌
    logger::init_server_logger(config.verbose);

    tracing::info!("Starting traffic-volume-web v{}", env!("CARGO_PKG_VERSION"));
    if config.verbose {
        tracing::debug!("Server config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    // 載入模型artifacts（進程啟動時一次，之後只讀）
    let artifacts = match ModelArtifacts::load(&config.artifacts) {
        Ok(artifacts) => artifacts,
        Err(e) => {
            tracing::error!("❌ Failed to load model artifacts: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let service = Arc::new(PredictionService::new(artifacts));
    let app = build_router(service);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("✅ Listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
