use std::sync::Arc;

use clap::Parser;
use dotenv::dotenv;
use reservation_desk_backend::config::Config;
use reservation_desk_backend::controller::{self, AppState};
use reservation_desk_backend::repositories::memory_repo::MemoryRepo;
use reservation_desk_backend::views::HtmlRenderer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::parse();

    let repo = Arc::new(MemoryRepo::new());
    let app_state = AppState {
        customers: repo.clone(),
        reservations: repo,
        views: Arc::new(HtmlRenderer),
        strict_forms: config.strict_forms,
    };

    controller::serve(app_state, &config).await
}
