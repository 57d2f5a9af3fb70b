//! Route table checker.
//!
//! Loads a route table and reports which handler a path dispatches to.
//!
//! ```text
//! path-router --config routes.toml /docs/intro
//! ```

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use path_router::config::load_config;
use path_router::{Router, StaticLocation};

#[derive(Parser)]
#[command(name = "path-router")]
#[command(about = "Check which handler a path dispatches to", long_about = None)]
struct Cli {
    /// Route table (TOML).
    #[arg(short, long, default_value = "routes.toml")]
    config: PathBuf,

    /// Path to dispatch.
    path: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "path_router=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli.config)?;

    tracing::info!(
        config = %cli.config.display(),
        routes = config.routes.len(),
        "Route table loaded"
    );

    let selected = Rc::new(RefCell::new(None));
    let router = Router::from_config(&config, |route| {
        let selected = selected.clone();
        let name = route.handler.clone();
        Box::new(move || *selected.borrow_mut() = Some(name.clone()))
    })?;

    router.route(&StaticLocation::new(cli.path))?;

    if let Some(handler) = selected.borrow().as_deref() {
        println!("{}", handler);
    }
    Ok(())
}
