mod config;
mod container;
mod data;
mod domain;
mod infrastructure;
mod presentation;
mod telemetry;
mod validation;

use std::fmt::Display;

use clap::{Parser, Subcommand};
use config::AppConfig;
use container::Container;
use domain::error::{DomainError, DomainResult};
use domain::models::account::AccountModel;
use presentation::pages::login::{LoginField, LoginState};
use presentation::pages::signup::{SignUpField, SignUpState};
use telemetry::TelemetryError;
use thiserror::Error;
use tokio::sync::watch;

#[cfg(test)]
mod tests;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Configuration(#[from] figment::Error),
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
    #[error(transparent)]
    HttpClient(#[from] reqwest::Error),
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("{0}")]
    InvalidForm(String),
}

#[derive(Parser, Debug)]
#[command(name = "clean-signup", version, about = "Sign up and log in against the accounts API")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a new account
    Signup {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        password_confirmation: String,
    },
    /// Authenticate an existing account
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
}

async fn run(cli: Cli) -> Result<(), AppError> {
    let config = AppConfig::load()?;

    let provider = telemetry::configure(&config.service, &config.logging)?;

    let container = Container::new(&config.api)?;

    let result = execute(&container, cli.command).await;

    telemetry::shutdown(provider)?;

    let account = result?;

    println!("Welcome, {}", account.name);
    println!("Access token: {}", account.access_token);

    Ok(())
}

async fn execute(container: &Container, command: Command) -> Result<AccountModel, AppError> {
    match command {
        Command::Signup {
            name,
            email,
            password,
            password_confirmation,
        } => {
            let mut page = container.signup();

            page.populate(SignUpField::Name, name);
            page.populate(SignUpField::Email, email);
            page.populate(SignUpField::Password, password);
            page.populate(SignUpField::PasswordConfirmation, password_confirmation);

            ensure_valid(page.state().errors())?;
            show_loading(page.subscribe(), |state: &SignUpState| state.is_loading);
            submitted(page.submit().await)
        }
        Command::Login { email, password } => {
            let mut page = container.login();

            page.populate(LoginField::Email, email);
            page.populate(LoginField::Password, password);

            ensure_valid(page.state().errors())?;
            show_loading(page.subscribe(), |state: &LoginState| state.is_loading);
            submitted(page.submit().await)
        }
    }
}

fn ensure_valid<F: Display>(errors: Vec<(F, String)>) -> Result<(), AppError> {
    if errors.is_empty() {
        return Ok(());
    }

    let message = errors
        .iter()
        .map(|(field, error)| format!("{field}: {error}"))
        .collect::<Vec<_>>()
        .join("\n");

    Err(AppError::InvalidForm(message))
}

fn show_loading<S: Send + Sync + 'static>(mut state: watch::Receiver<S>, is_loading: fn(&S) -> bool) {
    tokio::spawn(async move {
        while state.changed().await.is_ok() {
            if is_loading(&state.borrow_and_update()) {
                eprintln!("Submitting...");
            }
        }
    });
}

fn submitted(result: DomainResult<Option<AccountModel>>) -> Result<AccountModel, AppError> {
    result?.ok_or_else(|| AppError::InvalidForm("form is invalid".to_string()))
}

#[tokio::main]
async fn main() {
    if let Err(err) = run(Cli::parse()).await {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
