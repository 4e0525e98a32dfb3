use clap::{Parser, Subcommand};
use event_service::api::dto::RegisterRequest;
use event_service::api::routes::routes;
use event_service::api::server_state::ServerState;
use event_service::application::configuration::app::EnvNames as AppEnvNames;
use event_service::application::configuration::configuration::Configuration;
use event_service::application::configuration::database::{
    EnvNames as DatabaseEnvNames, redact_credentials,
};
use event_service::application::service::auth_service::create_auth_service;
use event_service::domain::crypto::SchemeAwareHasher;
use event_service::domain::user::{PasswordHandler, normalize_email};
use event_service::domain::validation::Validate;
use event_service::infrastructure::database::create_pool;
use event_service::infrastructure::repository::{
    create_attendee_repository, create_event_repository, create_user_repository,
};
use std::error::Error;
use tokio::signal;

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "🚀 Start the server")]
    Start,
    CreateUser {
        #[arg(short, long)]
        email: String,
        #[arg(short, long)]
        password: String,
        #[arg(short, long)]
        name: String,
    },
    GetUserByEmail {
        #[arg(short, long)]
        email: String,
    },
    CheckPassword {
        #[arg(short, long)]
        email: String,
        #[arg(short, long)]
        password: String,
    },
    ListEvents,
    HealthCheck,
}

#[tokio::main(flavor = "multi_thread", worker_threads = 4)]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = Configuration::default();
    let cli = Cli::parse();

    setup_logging(&config);
    debug_config(&config);

    let db_pool = create_pool(config.db()).await?;
    db_pool.migrate().await?;

    let user_repository = create_user_repository(db_pool.clone());
    let event_repository = create_event_repository(db_pool.clone());
    let attendee_repository = create_attendee_repository(db_pool.clone());
    let hashing_scheme = config.app().password_hashing_scheme();

    match cli.command {
        Some(Commands::Start) | None => {
            let addr = format!("{}:{}", config.app().host(), config.app().port());
            let auth_service = create_auth_service(config.app(), user_repository.clone());

            let state = ServerState::new(
                config.app().clone(),
                user_repository,
                event_repository,
                attendee_repository,
                auth_service,
            );

            let listener = tokio::net::TcpListener::bind(&addr).await.map_err(|e| {
                tracing::error!("Failed to bind to {}: {}", addr, e);
                e
            })?;

            tracing::info!("Server started at {}", &addr);
            axum::serve(listener, routes(state))
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            db_pool.close().await;
            tracing::info!("Server stopped");
        }
        Some(Commands::CreateUser {
            email,
            password,
            name,
        }) => {
            let request = RegisterRequest {
                email,
                password,
                name,
            };
            let mut user = request.validate()?;
            user.hash_password(&SchemeAwareHasher::with_scheme(hashing_scheme))?;

            match user_repository.insert(&user).await {
                Ok(user) => println!("User created: {} {} {}", user.id, user.email, user.name),
                Err(e) => println!("Error: {}", e),
            }
        }
        Some(Commands::GetUserByEmail { email }) => {
            match user_repository.get_by_email(&normalize_email(&email)).await {
                Ok(user) => println!("User found: {} {} {}", user.id, user.email, user.name),
                Err(e) => println!("Error: {}", e),
            }
        }
        Some(Commands::CheckPassword { email, password }) => {
            match user_repository.get_by_email(&normalize_email(&email)).await {
                Ok(user) => {
                    let hasher = SchemeAwareHasher::with_scheme(hashing_scheme);

                    if user.verify_password(&hasher, &password) {
                        println!("User: {} {} password is correct", user.id, user.email);
                    } else {
                        println!("Invalid password");
                    }
                }
                Err(e) => println!("Error: {}", e),
            }
        }
        Some(Commands::ListEvents) => {
            let events = event_repository.get_all().await?;

            if events.is_empty() {
                println!("No events found");
            }

            for event in events {
                println!(
                    "{} {} {} ({}) owner: {}",
                    event.id, event.date, event.name, event.location, event.owner_id
                );
            }
        }
        Some(Commands::HealthCheck) => {
            println!("OK");
        }
    }

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
        }
        tracing::info!("Received Ctrl+C, starting graceful shutdown");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                tracing::info!("Received terminate signal, starting graceful shutdown");
            }
            Err(e) => {
                tracing::error!("Failed to listen for terminate signal: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

fn setup_logging(config: &Configuration) {
    tracing_subscriber::fmt()
        .with_target(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_max_level(config.app().log_level())
        .json()
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting event service");
}

fn debug_config(config: &Configuration) {
    let message = "Configuration loaded successfully";
    for (name, value) in config.envs() {
        match name.as_str() {
            AppEnvNames::SECRET => {
                tracing::debug!(message, env = name, value = "****");
            }
            DatabaseEnvNames::DATABASE_URL => {
                tracing::debug!(message, env = name, value = %redact_credentials(&value));
            }
            _ => {
                tracing::debug!(message, env = name, value = %value);
            }
        }
    }
}
