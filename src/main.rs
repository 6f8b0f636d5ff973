// File: src/main.rs

mod app;
mod app_state;
mod call;
mod config;
mod error;
mod http;
mod media;

use app::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = App::bootstrap()?;
    app.run().await
}
