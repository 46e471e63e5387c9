// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::Router;
use axum_test::TestServer;
use migration::{Migrator, MigratorTrait};
use sea_orm::DatabaseConnection;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use uuid::Uuid;
use wcagrs::application::use_cases::analysis_use_case::AnalysisUseCase;
use wcagrs::config::settings::{CorsSettings, DatabaseSettings, FetchSettings};
use wcagrs::domain::dom::ScraperParser;
use wcagrs::domain::models::analysis::Analysis;
use wcagrs::domain::repositories::analysis_repository::AnalysisRepository;
use wcagrs::domain::rules::WcagAnalyser;
use wcagrs::domain::services::analysis_orchestrator::AnalysisOrchestrator;
use wcagrs::engines::reqwest_engine::ReqwestEngine;
use wcagrs::infrastructure::database::connection;
use wcagrs::infrastructure::realtime::progress_broadcaster::ProgressBroadcaster;
use wcagrs::infrastructure::repositories::analysis_repo_impl::AnalysisRepositoryImpl;
use wcagrs::presentation::handlers::ws_handler::RealtimeState;
use wcagrs::presentation::routes;
use wcagrs::queue::analysis_queue::ChannelAnalysisQueue;
use wcagrs::workers::manager::WorkerManager;
use wcagrs::workers::AnalysisWorker;

/// 创建迁移完成的内存 SQLite 连接
///
/// 连接池大小由 `create_pool` 对内存库固定为一个连接。
pub async fn create_test_db() -> Arc<DatabaseConnection> {
    let settings = DatabaseSettings {
        url: "sqlite::memory:".to_string(),
        max_connections: None,
        min_connections: None,
        connect_timeout: Some(5),
        idle_timeout: None,
    };
    let db = connection::create_pool(&settings).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    Arc::new(db)
}

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub repository: Arc<AnalysisRepositoryImpl>,
    pub broadcaster: Arc<ProgressBroadcaster>,
    pub worker_manager: WorkerManager,
}

impl TestApp {
    pub fn server(&self) -> TestServer {
        TestServer::new(self.router.clone()).unwrap()
    }

    /// 在随机端口上启动真实 HTTP 服务（WebSocket 测试使用）
    pub async fn spawn_http(&self) -> SocketAddr {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = self.router.clone();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        addr
    }

    /// 轮询直到记录进入终态
    pub async fn wait_for_terminal(&self, id: Uuid) -> Analysis {
        let deadline = tokio::time::Instant::now() + Duration::from_secs(10);
        loop {
            let analysis = self.repository.find_by_id(id).await.unwrap().unwrap();
            if analysis.status.is_terminal() {
                return analysis;
            }
            assert!(
                tokio::time::Instant::now() < deadline,
                "analysis {} stuck in {}",
                id,
                analysis.status
            );
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
    }

    /// 等待 WebSocket 观察者完成注册
    pub async fn wait_for_observers(&self, count: usize) {
        let deadline = tokio::time::Instant::now() + Duration::from_secs(5);
        while self.broadcaster.observer_count() < count {
            assert!(
                tokio::time::Instant::now() < deadline,
                "observer never registered"
            );
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    }
}

/// 组装完整应用：数据库、队列、工作器、广播器与路由
pub async fn create_test_app() -> TestApp {
    let db = create_test_db().await;
    let repository = Arc::new(AnalysisRepositoryImpl::new(db));
    let (queue, receiver) = ChannelAnalysisQueue::channel();
    let broadcaster = Arc::new(ProgressBroadcaster::new());

    let engine = ReqwestEngine::new(&FetchSettings {
        timeout_secs: 5,
        user_agent: "wcagrs-test".to_string(),
    })
    .unwrap();
    let orchestrator = Arc::new(AnalysisOrchestrator::new(
        repository.clone(),
        Arc::new(engine),
        Arc::new(ScraperParser),
        Arc::new(WcagAnalyser::with_default_rules()),
        broadcaster.clone(),
    ));

    let mut worker_manager = WorkerManager::new();
    worker_manager.start_worker(AnalysisWorker::new(orchestrator), receiver);

    let use_case = Arc::new(AnalysisUseCase::new(repository.clone(), Arc::new(queue)));
    let router = routes::app_router(
        use_case,
        RealtimeState {
            broadcaster: broadcaster.clone(),
            observer_buffer: 16,
        },
        &CorsSettings {
            frontend_url: "http://localhost:3001".to_string(),
        },
    );

    TestApp {
        router,
        repository,
        broadcaster,
        worker_manager,
    }
}
