//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use secondserve_core::dto::FoodCondition;
use secondserve_core::{ApiClient, Config, Session, SessionStore, UserRole};

mod commands;

#[derive(Parser)]
#[command(name = "secondserve")]
#[command(version = "1.0")]
#[command(about = "SecondServe surplus-food donation client")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Credentials for commands that talk to the backend. The session lives
/// only for the lifetime of the process, so every invocation logs in.
#[derive(clap::Args, Debug, Clone)]
struct AuthArgs {
    /// Account email
    #[arg(long, env = "SECONDSERVE_EMAIL")]
    email: String,

    /// Account password
    #[arg(long, env = "SECONDSERVE_PASSWORD")]
    password: String,

    /// Account role
    #[arg(long, value_enum, default_value_t = RoleArg::HotelManager)]
    role: RoleArg,
}

#[derive(clap::ValueEnum, Debug, Clone, Copy)]
enum RoleArg {
    KitchenStaff,
    HotelManager,
    Ngo,
}

impl From<RoleArg> for UserRole {
    fn from(role: RoleArg) -> Self {
        match role {
            RoleArg::KitchenStaff => UserRole::KitchenStaff,
            RoleArg::HotelManager => UserRole::HotelManager,
            RoleArg::Ngo => UserRole::Ngo,
        }
    }
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Verify credentials against the backend
    Login {
        #[command(flatten)]
        auth: AuthArgs,
    },
    /// Show weekly stats and the pending request queue (hotel manager)
    Dashboard {
        #[command(flatten)]
        auth: AuthArgs,
    },
    /// Work with the hotel's logged food items
    FoodItems {
        #[command(subcommand)]
        command: FoodItemCommands,
    },
    /// Manage donation requests
    Requests {
        #[command(subcommand)]
        command: RequestCommands,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum FoodItemCommands {
    /// List the hotel's logged food items
    List {
        #[command(flatten)]
        auth: AuthArgs,

        /// Only items awaiting manager approval
        #[arg(long)]
        pending: bool,
    },
    /// Log a leftover item (kitchen staff)
    Log {
        #[command(flatten)]
        auth: AuthArgs,

        /// Name of the dish
        #[arg(long)]
        name: String,

        /// Quantity, e.g. "2.5"
        #[arg(long)]
        quantity: String,

        /// Unit of measure, e.g. kg
        #[arg(long)]
        unit: String,

        /// Condition of the food; determines the expiry date
        #[arg(long, value_enum, default_value_t = ConditionArg::Fresh)]
        condition: ConditionArg,

        /// Food category, e.g. "Cooked Meal"
        #[arg(long)]
        category: Option<String>,

        /// Free-form notes
        #[arg(long)]
        description: Option<String>,
    },
}

#[derive(clap::ValueEnum, Debug, Clone, Copy)]
enum ConditionArg {
    Fresh,
    Good,
    NearExpiry,
}

impl From<ConditionArg> for FoodCondition {
    fn from(condition: ConditionArg) -> Self {
        match condition {
            ConditionArg::Fresh => FoodCondition::Fresh,
            ConditionArg::Good => FoodCondition::Good,
            ConditionArg::NearExpiry => FoodCondition::NearExpiry,
        }
    }
}

#[derive(clap::Subcommand)]
enum RequestCommands {
    /// List requests for the logged-in hotel or NGO
    List {
        #[command(flatten)]
        auth: AuthArgs,

        /// Only PENDING requests (hotel manager)
        #[arg(long)]
        pending: bool,
    },
    /// Approve a pending request
    Approve {
        #[command(flatten)]
        auth: AuthArgs,

        /// The ID of the request to approve
        #[arg(value_name = "REQUEST_ID")]
        id: i64,
    },
    /// Reject a pending request
    Reject {
        #[command(flatten)]
        auth: AuthArgs,

        /// The ID of the request to reject
        #[arg(value_name = "REQUEST_ID")]
        id: i64,
    },
    /// Mark an approved request as completed
    Complete {
        #[command(flatten)]
        auth: AuthArgs,

        /// The ID of the request to complete
        #[arg(value_name = "REQUEST_ID")]
        id: i64,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
    /// Print the effective configuration
    Show,
    /// Set the backend base URL
    SetUrl {
        /// Base URL of the backend, e.g. http://localhost:8080
        #[arg(value_name = "URL")]
        url: String,
    },
}

pub fn run() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

async fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Login { auth } => {
            let api = client()?;
            let session = login(&api, &auth).await?;
            println!(
                "Logged in as {} ({})",
                session.display_name,
                session.role.display_name()
            );
            Ok(())
        }
        Commands::Dashboard { auth } => {
            let api = client()?;
            login(&api, &auth).await?;
            commands::dashboard::show(api).await
        }
        Commands::FoodItems { command } => match command {
            FoodItemCommands::List { auth, pending } => {
                let api = client()?;
                login(&api, &auth).await?;
                commands::food_items::list(&api, pending).await
            }
            FoodItemCommands::Log {
                auth,
                name,
                quantity,
                unit,
                condition,
                category,
                description,
            } => {
                let api = client()?;
                login(&api, &auth).await?;
                commands::food_items::log(
                    &api,
                    &name,
                    &quantity,
                    &unit,
                    condition.into(),
                    category,
                    description,
                )
                .await
            }
        },
        Commands::Requests { command } => match command {
            RequestCommands::List { auth, pending } => {
                let api = client()?;
                let session = login(&api, &auth).await?;
                commands::requests::list(&api, &session, pending).await
            }
            RequestCommands::Approve { auth, id } => {
                let api = client()?;
                login(&api, &auth).await?;
                commands::requests::approve(&api, id).await
            }
            RequestCommands::Reject { auth, id } => {
                let api = client()?;
                login(&api, &auth).await?;
                commands::requests::reject(&api, id).await
            }
            RequestCommands::Complete { auth, id } => {
                let api = client()?;
                login(&api, &auth).await?;
                commands::requests::complete(&api, id).await
            }
        },
        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
            ConfigCommands::Show => commands::config::show(),
            ConfigCommands::SetUrl { url } => commands::config::set_url(&url),
        },
    }
}

fn client() -> Result<ApiClient> {
    let config = Config::load().context("load config")?;
    ApiClient::new(&config, SessionStore::new()).context("build API client")
}

async fn login(api: &ApiClient, auth: &AuthArgs) -> Result<Session> {
    let session = api
        .login(&auth.email, &auth.password, auth.role.into())
        .await?;
    Ok(session)
}
