// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use wcagrs::application::use_cases::analysis_use_case::AnalysisUseCase;
use wcagrs::config::settings::Settings;
use wcagrs::domain::dom::ScraperParser;
use wcagrs::domain::rules::WcagAnalyser;
use wcagrs::domain::services::analysis_orchestrator::AnalysisOrchestrator;
use wcagrs::engines::reqwest_engine::ReqwestEngine;
use wcagrs::infrastructure::database::connection;
use wcagrs::infrastructure::realtime::progress_broadcaster::ProgressBroadcaster;
use wcagrs::infrastructure::repositories::analysis_repo_impl::AnalysisRepositoryImpl;
use wcagrs::presentation::handlers::ws_handler::RealtimeState;
use wcagrs::presentation::routes;
use wcagrs::queue::analysis_queue::ChannelAnalysisQueue;
use wcagrs::workers::manager::{shutdown_signal, WorkerManager};
use wcagrs::workers::AnalysisWorker;

use migration::{Migrator, MigratorTrait};
use wcagrs::utils::telemetry;

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting wcagrs...");

    // 2. Load configuration
    let settings = Arc::new(Settings::new()?);
    info!("Configuration loaded");

    wcagrs::infrastructure::metrics::init_metrics(&settings.metrics);

    // 3. Connect to database
    let db = connection::create_pool(&settings.database).await?;
    let db = Arc::new(db);
    info!("Database connection established");

    // Run database migrations
    info!("Running database migrations...");
    Migrator::up(db.as_ref(), None).await?;
    info!("Database migrations applied");

    // 4. Initialize components
    let repository = Arc::new(AnalysisRepositoryImpl::new(db.clone()));
    let (queue, receiver) = ChannelAnalysisQueue::channel();
    let queue = Arc::new(queue);
    let broadcaster = Arc::new(ProgressBroadcaster::new());
    let engine = Arc::new(ReqwestEngine::new(&settings.fetch)?);
    let analyser = Arc::new(WcagAnalyser::with_default_rules());
    info!(rules = ?analyser.rule_names(), "Rule set loaded");

    let orchestrator = Arc::new(AnalysisOrchestrator::new(
        repository.clone(),
        engine,
        Arc::new(ScraperParser),
        analyser,
        broadcaster.clone(),
    ));

    // 5. Start workers
    let mut worker_manager = WorkerManager::new();
    worker_manager.start_worker(AnalysisWorker::new(orchestrator), receiver);

    // 6. Start HTTP server
    let use_case = Arc::new(AnalysisUseCase::new(repository, queue));
    let realtime = RealtimeState {
        broadcaster,
        observer_buffer: settings.broadcast.observer_buffer,
    };
    let app = routes::app_router(use_case, realtime, &settings.cors);

    let addr = settings.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    worker_manager.shutdown();
    Ok(())
}
