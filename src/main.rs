use anyhow::Result;
use clap::{Parser, Subcommand};
use lubricants_form::Fields;

/// Industrial Lubricants contact form service
#[derive(Parser)]
#[command(name = "lubricants")]
#[command(about = "Contact form endpoint and client for the Industrial Lubricants site", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Submit an inquiry to a running server
    Submit {
        /// Base URL of the server
        #[arg(long, default_value = "http://127.0.0.1:3000")]
        server: String,

        #[arg(long, default_value = "")]
        name: String,

        #[arg(long, default_value = "")]
        email: String,

        #[arg(long, default_value = "")]
        mobile: String,

        #[arg(long, default_value = "")]
        message: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = lubricants::Config::load(cli.config)?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    lubricants::observability::init_observability("lubricants", &config.logging)?;

    match cli.command {
        Commands::Serve { host, port } => {
            config.email.validate().map_err(|e| anyhow::anyhow!(e))?;
            lubricants::server::serve(config, host, port).await
        }
        Commands::Submit {
            server,
            name,
            email,
            mobile,
            message,
        } => {
            lubricants::submit::submit(
                &server,
                Fields {
                    name,
                    email,
                    mobile,
                    message,
                },
            )
            .await
        }
    }
}
