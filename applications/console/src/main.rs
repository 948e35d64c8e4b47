/// Roster console - operator console for a remote user directory
use clap::{Parser, Subcommand};
use roster_console::{config::ConsoleConfig, render};
use roster_core::{CreateUser, UpdateUser, UserId};
use roster_directory_client::{DirectoryClient, DirectoryConfig};
use roster_listview::ListView;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Operator console for a remote user directory", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all users in the directory
    List,
    /// Show one user
    Show {
        /// User id
        id: UserId,
    },
    /// Add a user to the directory
    Add {
        /// Display name
        #[arg(long)]
        name: String,
        /// Login name
        #[arg(long)]
        username: String,
        /// Email address
        #[arg(long)]
        email: String,
    },
    /// Replace an existing user
    Update {
        /// User id
        id: UserId,
        /// Display name
        #[arg(long)]
        name: String,
        /// Login name
        #[arg(long)]
        username: String,
        /// Email address
        #[arg(long)]
        email: String,
    },
    /// Delete a user, then resync and print the table
    Delete {
        /// User id
        id: UserId,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roster=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = ConsoleConfig::load()?;
    let client = DirectoryClient::new(DirectoryConfig::new(config.directory_url()?))?;

    match cli.command {
        Commands::List => {
            let mut view = ListView::new(client);
            view.activate().await?;
            print!("{}", render::format_table(&view.rows()));
        }
        Commands::Show { id } => {
            let user = client.get_user(id).await?;
            println!("id:       {}", user.id);
            println!("name:     {}", user.name);
            println!("username: {}", user.username);
            println!("email:    {}", user.email);
        }
        Commands::Add {
            name,
            username,
            email,
        } => {
            let created = client
                .create_user(&CreateUser {
                    name,
                    username,
                    email,
                })
                .await?;
            tracing::info!(user_id = %created.id, "User created");
            println!("Created user {}", created.id);
        }
        Commands::Update {
            id,
            name,
            username,
            email,
        } => {
            let updated = client
                .update_user(
                    id,
                    &UpdateUser {
                        name,
                        username,
                        email,
                    },
                )
                .await?;
            println!("Updated user {}", updated.id);
        }
        Commands::Delete { id } => {
            let mut view = ListView::new(client);
            view.activate().await?;
            view.delete(id).await?;
            print!("{}", render::format_table(&view.rows()));
        }
    }

    Ok(())
}
