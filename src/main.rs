use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use medley::model::{self, RemoteConfig};
use medley::remote::CatalogClient;

#[derive(Parser)]
#[command(name = "medley")]
#[command(about = "Local media library manager", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive browser
    Tui {
        /// Start route, e.g. "settings" or "category/3"
        route: Option<String>,
    },

    /// Configure or show the catalog backend
    Remote {
        #[command(subcommand)]
        command: RemoteCommands,
    },

    /// Manage categories
    Categories {
        #[command(subcommand)]
        command: CategoryCommands,
    },

    /// Manage media folders
    Folders {
        #[command(subcommand)]
        command: FolderCommands,
    },

    /// Control the streaming server
    Server {
        #[command(subcommand)]
        command: ServerCommands,
    },
}

#[derive(Subcommand)]
enum RemoteCommands {
    /// Show the configured backend
    Show {
        #[arg(long)]
        json: bool,
    },
    /// Set the configured backend
    Set {
        #[arg(long)]
        url: String,
        #[arg(long)]
        token: Option<String>,
    },
}

#[derive(Subcommand)]
enum CategoryCommands {
    /// List categories
    List {
        #[arg(long)]
        json: bool,
    },
    /// Add a category
    Add { name: String },
    /// Remove a category
    Rm { id: i64 },
}

#[derive(Subcommand)]
enum FolderCommands {
    /// List the folders of a category
    List {
        category_id: i64,
        #[arg(long)]
        json: bool,
    },
    /// Attach a folder to a category
    Add {
        category_id: i64,
        /// Folder path; when omitted the backend picker supplies one
        #[arg(long)]
        path: Option<String>,
    },
    /// Detach a folder
    Rm { id: i64 },
}

#[derive(Subcommand)]
enum ServerCommands {
    /// Start the streaming server
    Start,
    /// Stop the streaming server
    Stop,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Tui { route: None }) {
        Commands::Tui { route } => medley::tui::run(route),

        Commands::Remote { command } => match command {
            RemoteCommands::Show { json } => {
                let cfg = model::load_config()?;
                if json {
                    println!(
                        "{}",
                        serde_json::to_string_pretty(&cfg.remote)
                            .context("serialize remote json")?
                    );
                } else if let Some(remote) = cfg.remote {
                    println!("url: {}", remote.base_url);
                    println!(
                        "token: {}",
                        if remote.token.is_some() { "set" } else { "none" }
                    );
                } else {
                    println!("No backend configured (using {})", RemoteConfig::default_local().base_url);
                }
                Ok(())
            }
            RemoteCommands::Set { url, token } => {
                let mut cfg = model::load_config()?;
                cfg.remote = Some(RemoteConfig {
                    base_url: url,
                    token,
                });
                model::save_config(&cfg)?;
                println!("Backend configured");
                Ok(())
            }
        },

        Commands::Categories { command } => {
            let client = client_from_config()?;
            match command {
                CategoryCommands::List { json } => {
                    let categories = client.list_categories()?;
                    if json {
                        println!(
                            "{}",
                            serde_json::to_string_pretty(&categories)
                                .context("serialize categories json")?
                        );
                    } else {
                        for c in categories {
                            println!("{}\t{}", c.id, c.name);
                        }
                    }
                }
                CategoryCommands::Add { name } => {
                    let category = client.create_category(&name)?;
                    println!("{}\t{}", category.id, category.name);
                }
                CategoryCommands::Rm { id } => {
                    client.delete_category(id)?;
                    println!("Removed category {}", id);
                }
            }
            Ok(())
        }

        Commands::Folders { command } => {
            let client = client_from_config()?;
            match command {
                FolderCommands::List { category_id, json } => {
                    let folders = client.list_folders(category_id)?;
                    if json {
                        println!(
                            "{}",
                            serde_json::to_string_pretty(&folders)
                                .context("serialize folders json")?
                        );
                    } else {
                        for f in folders {
                            println!("{}\t{}", f.id, f.path);
                        }
                    }
                }
                FolderCommands::Add { category_id, path } => {
                    if let Some(path) = path {
                        client.select_folder_source(&path)?;
                    }
                    let folder = client.create_folder_source(category_id)?;
                    println!("{}\t{}", folder.id, folder.path);
                }
                FolderCommands::Rm { id } => {
                    client.delete_folder(id)?;
                    println!("Removed folder {}", id);
                }
            }
            Ok(())
        }

        Commands::Server { command } => {
            let client = client_from_config()?;
            match command {
                ServerCommands::Start => {
                    client.start_server()?;
                    println!("Streaming server started");
                }
                ServerCommands::Stop => {
                    client.stop_server()?;
                    println!("Streaming server stopped");
                }
            }
            Ok(())
        }
    }
}

fn client_from_config() -> Result<CatalogClient> {
    let cfg = model::load_config()?;
    let remote = cfg.remote.unwrap_or_else(RemoteConfig::default_local);
    CatalogClient::new(remote)
}
