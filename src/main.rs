use anyhow::Result;
use clap::{Parser, Subcommand};
use mail9::{config::Config, service::MailerService};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "mail9", version, about = "Transactional account-email service")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Connect and authenticate against the SMTP relay without sending
    Check,
    /// Send a test email to verify the configuration end-to-end
    SendTest {
        /// Recipient address
        #[arg(long)]
        to: String,
    },
    /// Send a password reset email
    ResetPassword {
        /// Recipient address
        #[arg(long)]
        to: String,
        /// Reset token to embed in the link
        #[arg(long)]
        token: String,
    },
    /// Send the confirmation for a completed password reset
    ResetConfirmation {
        /// Recipient address
        #[arg(long)]
        to: String,
    },
    /// Send an email verification request
    VerifyEmail {
        /// Recipient address
        #[arg(long)]
        to: String,
        /// Verification token to embed in the link
        #[arg(long)]
        token: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mail9=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    let mailer = MailerService::new(config)?;

    match cli.command {
        Commands::Check => {
            mailer.test_connection().await?;
            info!("SMTP connection and authentication OK");
        }
        Commands::SendTest { to } => {
            let receipt = mailer.send_test_email(&to).await?;
            info!(
                message_id = receipt.message_id.as_deref().unwrap_or("-"),
                "Test email sent to {}", to
            );
        }
        Commands::ResetPassword { to, token } => {
            let receipt = mailer.send_password_reset(&to, &token).await?;
            info!(
                message_id = receipt.message_id.as_deref().unwrap_or("-"),
                "Password reset email sent to {}", to
            );
        }
        Commands::ResetConfirmation { to } => {
            let receipt = mailer.send_password_reset_confirmation(&to).await?;
            info!(
                message_id = receipt.message_id.as_deref().unwrap_or("-"),
                "Password reset confirmation sent to {}", to
            );
        }
        Commands::VerifyEmail { to, token } => {
            let receipt = mailer.send_email_verification(&to, &token).await?;
            info!(
                message_id = receipt.message_id.as_deref().unwrap_or("-"),
                "Verification email sent to {}", to
            );
        }
    }

    Ok(())
}
