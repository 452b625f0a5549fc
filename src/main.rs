//! CLI entry point for draftpress

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use draftpress::commands::draft::DraftOptions;
use draftpress::config::ProviderConfig;
use draftpress::drafting::Provider;

#[derive(Parser)]
#[command(name = "draftpress")]
#[command(version)]
#[command(about = "Publish markdown drafts as a static blog", long_about = None)]
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
    /// Build the static site
    #[command(aliases = ["b", "g"])]
    Build,

    /// Generate a post from a draft with an AI provider
    Draft {
        /// Draft markdown/text file
        #[arg(long)]
        draft: PathBuf,

        /// Author profile (defaults to the configured profile)
        #[arg(long)]
        profile: Option<PathBuf>,

        /// Output directory (defaults to the posts directory)
        #[arg(long)]
        outdir: Option<PathBuf>,

        /// Print the post instead of writing it
        #[arg(long)]
        dry_run: bool,
    },

    /// Remove the generated site
    Clean,

    /// List posts in build order
    List,

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "draftpress=debug,info"
    } else {
        "draftpress=info"
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
        Commands::Build => {
            let site = draftpress::Site::new(&base_dir)?;
            tracing::info!("Building site...");
            let report = site.build()?;
            println!("Built {} posts successfully!", report.posts);
        }

        Commands::Draft {
            draft,
            profile,
            outdir,
            dry_run,
        } => {
            let site = draftpress::Site::new(&base_dir)?;
            let options = DraftOptions::resolve(&site, draft, profile, outdir, dry_run);
            let outcome = draftpress::commands::draft::run(&options, || {
                let config = ProviderConfig::from_env()?;
                tracing::debug!("Using provider {:?}", config);
                Provider::new(config)
            })
            .await?;
            println!("{}", outcome.message());
        }

        Commands::Clean => {
            let site = draftpress::Site::new(&base_dir)?;
            tracing::info!("Cleaning public folder...");
            site.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::List => {
            let site = draftpress::Site::new(&base_dir)?;
            draftpress::commands::list::run(&site)?;
        }

        Commands::Version => {
            println!("draftpress version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
