//! Trove CLI - knowledge-base editing from the terminal
//!
//! Plays the part the listing page plays in a browser: invokes the
//! editing actions and follows the navigation the controller hands back.

mod config;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::Input;

use config::Config;
use trove::{KbClient, Navigation, Navigator};

#[derive(Parser)]
#[command(name = "trove")]
#[command(about = "Trove CLI - knowledge-base editing", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Delete a triple from the knowledge base
    Delete {
        /// The triple to delete, exactly as the listing shows it (prompts if omitted)
        triple: Option<String>,
        /// Treat the argument as raw JSON and forward it as-is
        #[arg(long)]
        json: bool,
    },

    /// Persist the server's in-memory graph to durable storage
    Save,

    /// Add a new triple
    Add {
        subject: String,
        predicate: String,
        object: String,
    },

    /// Point the CLI at a knowledge-base server and store its address
    Connect {
        /// Server address (prompts if not provided)
        url: Option<String>,
    },

    /// Show current configuration
    Config,
}

/// Dispatches navigation commands by showing where the interface lands.
struct ConsoleNavigator {
    base_url: String,
}

impl Navigator for ConsoleNavigator {
    fn navigate(&self, nav: &Navigation) {
        println!("  {} {}", "→".dimmed(), nav.resolve(&self.base_url).dimmed());
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Delete { triple, json } => cmd_delete(triple, json).await,
        Commands::Save => cmd_save().await,
        Commands::Add {
            subject,
            predicate,
            object,
        } => cmd_add(subject, predicate, object).await,
        Commands::Connect { url } => cmd_connect(url).await,
        Commands::Config => cmd_config(),
    }
}

// ============================================
// Command Implementations
// ============================================

async fn cmd_delete(triple: Option<String>, json: bool) -> Result<()> {
    let config = Config::load()?;
    let kb = KbClient::new(&config.base_url);
    let navigator = ConsoleNavigator {
        base_url: config.base_url.clone(),
    };

    let raw = match triple {
        Some(t) => t,
        None => Input::new()
            .with_prompt("Triple to delete")
            .interact_text()
            .context("Failed to read input")?,
    };

    let nav = if json {
        let value: serde_json::Value =
            serde_json::from_str(&raw).context("--json argument is not valid JSON")?;
        kb.delete_triple(&value)
            .await
            .context("Could not reach the knowledge base")?
    } else {
        kb.delete_triple(raw.as_str())
            .await
            .context("Could not reach the knowledge base")?
    };

    println!("{} Deletion requested", "✓".green());
    navigator.navigate(&nav);

    Ok(())
}

async fn cmd_save() -> Result<()> {
    let config = Config::load()?;
    let kb = KbClient::new(&config.base_url);
    let navigator = ConsoleNavigator {
        base_url: config.base_url.clone(),
    };

    let nav = kb
        .save_graph()
        .await
        .context("Could not reach the knowledge base")?;

    println!("{} Graph save requested", "✓".green());
    navigator.navigate(&nav);

    Ok(())
}

async fn cmd_add(subject: String, predicate: String, object: String) -> Result<()> {
    let config = Config::load()?;
    let kb = KbClient::new(&config.base_url);
    let navigator = ConsoleNavigator {
        base_url: config.base_url.clone(),
    };

    let nav = kb
        .add_triple(&subject, &predicate, &object)
        .await
        .context("Could not reach the knowledge base")?;

    println!(
        "{} Submitted: {} {} {}",
        "✓".green(),
        subject.cyan(),
        predicate.dimmed(),
        object.cyan()
    );
    navigator.navigate(&nav);

    Ok(())
}

async fn cmd_connect(url: Option<String>) -> Result<()> {
    let mut config = Config::load()?;

    let base_url = match url {
        Some(u) => u,
        None => Input::new()
            .with_prompt("Server address")
            .default(config.base_url.clone())
            .interact_text()
            .context("Failed to read input")?,
    };

    let kb = KbClient::new(&base_url);
    print!("Checking {} ... ", kb.base_url());

    match kb.probe().await {
        Ok(true) => {
            println!("{}", "OK".green());
        }
        Ok(false) => {
            println!("{}", "reachable, but the listing did not load".yellow());
        }
        Err(_) => {
            println!("{}", "Failed".red());
            bail!("Could not reach a knowledge base at {}", base_url);
        }
    }

    config.set_base_url(base_url);
    config.save()?;

    println!(
        "{} Server address saved to {:?}",
        "✓".green(),
        Config::config_path()?
    );

    Ok(())
}

fn cmd_config() -> Result<()> {
    let config = Config::load()?;

    println!("{}", "Configuration:".bold());
    println!("  Path: {:?}", Config::config_path()?);
    println!("  Base URL: {}", config.base_url);

    Ok(())
}
