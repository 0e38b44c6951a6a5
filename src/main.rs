//! CLI entry point for mdblog

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "mdblog")]
#[command(version)]
#[command(about = "A minimal Markdown blog: post listing and post pages by slug", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new blog
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Create a new post
    New {
        /// Title of the new post
        title: String,

        /// Slug (file name) to use instead of one derived from the title
        #[arg(short, long)]
        slug: Option<String>,
    },

    /// List posts, newest first
    #[command(alias = "ls")]
    List,

    /// Show a single post by slug
    Show {
        /// Slug of the post
        slug: String,

        /// Print the detail payload as JSON
        #[arg(long)]
        json: bool,
    },

    /// Start the JSON API server
    #[command(alias = "s")]
    Serve {
        /// Port to listen on (defaults to server.port in _config.yml)
        #[arg(short, long)]
        port: Option<u16>,

        /// IP address to bind to (defaults to server.ip in _config.yml)
        #[arg(short, long)]
        ip: Option<String>,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "mdblog=debug,info"
    } else {
        "mdblog=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing blog in {:?}", target_dir);
            mdblog::commands::init::init_site(&target_dir)?;
            println!("Initialized empty blog in {:?}", target_dir);
        }

        Commands::New { title, slug } => {
            let blog = mdblog::Blog::new(&base_dir)?;
            tracing::info!("Creating new post with title: {}", title);
            let path = mdblog::commands::new::create_post(&blog, &title, slug.as_deref())?;
            println!("Created: {:?}", path);
        }

        Commands::List => {
            let blog = mdblog::Blog::new(&base_dir)?;
            mdblog::commands::list::run(&blog).await?;
        }

        Commands::Show { slug, json } => {
            let blog = mdblog::Blog::new(&base_dir)?;
            mdblog::commands::show::run(&blog, &slug, json).await?;
        }

        Commands::Serve { port, ip } => {
            let blog = mdblog::Blog::new(&base_dir)?;
            let ip = ip.unwrap_or_else(|| blog.config.server.ip.clone());
            let port = port.unwrap_or(blog.config.server.port);

            tracing::info!("Starting server at http://{}:{}", ip, port);
            mdblog::server::start(&blog, &ip, port).await?;
        }

        Commands::Version => {
            println!("mdblog version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
