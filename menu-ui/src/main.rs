//! Menu UI server - serves pages with the navigation menu drawn for each request.

mod routes;
mod state;

use std::net::SocketAddr;
use std::path::PathBuf;

use axum::Router;
use clap::Parser;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::info;

use crate::state::AppState;

#[derive(Parser)]
#[command(name = "menu-ui")]
#[command(about = "Web server rendering navigation menus per request path")]
struct Args {
    /// Address to bind the server to
    #[arg(long, default_value = "127.0.0.1")]
    bind: String,

    /// Port to listen on
    #[arg(long, default_value = "3001")]
    port: u16,

    /// Project directory (contains menu.toml)
    #[arg(long, default_value = ".")]
    project_dir: PathBuf,

    /// Menu drawn into every page
    #[arg(long, default_value = "main_menu")]
    menu: String,

    /// Directory served under /static
    #[arg(long)]
    static_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("menu_ui=info".parse()?),
        )
        .init();

    let args = Args::parse();

    let project_dir = args.project_dir.canonicalize().unwrap_or(args.project_dir);
    info!(project_dir = %project_dir.display(), menu = %args.menu, "starting menu-ui");

    let state = AppState::new(&project_dir, args.menu)?;

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut app = Router::new().nest("/api", routes::api_router().layer(cors));

    if let Some(static_dir) = args.static_dir {
        info!(static_dir = %static_dir.display(), "serving static files");
        app = app.nest_service("/static", ServeDir::new(static_dir));
    }

    let app = app.fallback(routes::page).with_state(state);

    let addr: SocketAddr = format!("{}:{}", args.bind, args.port).parse()?;
    info!(addr = %addr, "listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
