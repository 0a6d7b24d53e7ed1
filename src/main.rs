// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use axum::Extension;
use listbridge::config::settings::Settings;
use listbridge::domain::services::graph_service::GraphService;
use listbridge::infrastructure::auth::token_provider::TokenProvider;
use listbridge::infrastructure::graph::client::GraphClient;
use listbridge::presentation::routes;
use listbridge::utils::telemetry;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting listbridge...");

    // Initialize Prometheus Metrics
    listbridge::infrastructure::metrics::init_metrics();

    // 2. Load configuration
    let settings = Arc::new(Settings::new()?);
    info!("Configuration loaded");

    // 3. Build the shared HTTP client
    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(settings.graph.timeout_secs))
        .build()?;

    // 4. Initialize Components
    let token_provider = TokenProvider::new(settings.auth.clone(), http.clone());
    let graph_client = GraphClient::new(&settings.graph, http);
    let graph_service = Arc::new(GraphService::new(token_provider, graph_client));
    info!("Document graph service initialized");

    // 5. Start HTTP server
    let app = routes::routes::<GraphService>()
        .layer(Extension(graph_service))
        .layer(Extension(settings.clone()))
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
