#[cfg(feature = "ssr")]
mod server {
    use std::{net::SocketAddr, path::PathBuf};

    use axum::Router;
    use clap::{Parser, Subcommand};
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list_with_ssg, LeptosRoutes};
    use portfolio_site::{app::*, error::SiteError, export::export_site};
    use tower_http::services::ServeDir;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    /// Portfolio site server and static exporter
    #[derive(Parser, Debug)]
    #[command(author, version, about, long_about = None)]
    struct Cli {
        /// Enable verbose logging
        #[arg(short, long, global = true)]
        verbose: bool,

        #[command(subcommand)]
        command: Option<Command>,
    }

    #[derive(Subcommand, Debug)]
    enum Command {
        /// Serve the site with server-side rendering (default)
        Serve,
        /// Pre-render every static route into the site root and exit
        Export,
        /// Serve an exported site root as plain static files
        Preview {
            /// Directory to serve, defaults to the configured site root
            #[arg(short, long)]
            dir: Option<PathBuf>,
            /// Address to bind, defaults to the configured site address
            #[arg(short, long)]
            addr: Option<SocketAddr>,
        },
    }

    pub async fn run() -> Result<(), SiteError> {
        let cli = Cli::parse();

        let filter = if cli.verbose { "debug" } else { "info" };
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| filter.into()),
            )
            .with(tracing_subscriber::fmt::layer())
            .init();

        let conf = get_configuration(None).map_err(|e| SiteError::Config(e.to_string()))?;
        let leptos_options = conf.leptos_options;

        match cli.command.unwrap_or(Command::Serve) {
            Command::Serve => serve(leptos_options).await,
            Command::Export => {
                let pages = export_site(&leptos_options).await?;
                tracing::info!(
                    "exported {} page(s) to {}",
                    pages.len(),
                    leptos_options.site_root
                );
                Ok(())
            }
            Command::Preview { dir, addr } => {
                let dir = dir.unwrap_or_else(|| PathBuf::from(leptos_options.site_root.as_ref()));
                let addr = addr.unwrap_or(leptos_options.site_addr);
                preview(dir, addr).await
            }
        }
    }

    async fn serve(leptos_options: LeptosOptions) -> Result<(), SiteError> {
        let addr = leptos_options.site_addr;
        // Generate the list of routes in your Leptos App, rendering static ones up front
        let (routes, static_routes) = generate_route_list_with_ssg({
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        });
        static_routes.generate(&leptos_options).await;

        let app = Router::new()
            .leptos_routes(&leptos_options, routes, {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            })
            .fallback(leptos_axum::file_and_error_handler(shell))
            .with_state(leptos_options);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|source| SiteError::Bind { addr, source })?;
        tracing::info!("listening on http://{}", &addr);
        axum::serve(listener, app.into_make_service())
            .await
            .map_err(SiteError::Serve)
    }

    async fn preview(dir: PathBuf, addr: SocketAddr) -> Result<(), SiteError> {
        if !dir.join("index.html").is_file() {
            return Err(SiteError::MissingPage {
                route: "/".to_string(),
                path: dir.join("index.html"),
            });
        }
        let app = Router::new().fallback_service(ServeDir::new(&dir));

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|source| SiteError::Bind { addr, source })?;
        tracing::info!("previewing {} on http://{}", dir.display(), &addr);
        axum::serve(listener, app.into_make_service())
            .await
            .map_err(SiteError::Serve)
    }
}

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), portfolio_site::error::SiteError> {
    server::run().await
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // unless we want this to work with e.g., Trunk for pure client-side testing
    // see lib.rs for hydration function instead
}
