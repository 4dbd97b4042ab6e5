//! userstore-client CLI entry point.

use clap::Parser;
use userstore_client::cli::{Cli, Commands, OutputFormat};
use userstore_client::client::UserstoreClient;
use userstore_client::output::{format_output, pretty};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = UserstoreClient::new(&cli.base_url);

    match cli.command {
        Commands::Users(users_cmd) => {
            use userstore_client::cli::users::UsersAction;
            match users_cmd.action {
                UsersAction::Create { name, email } => {
                    let created = client.create_user(&name, &email).await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&created, cli.format)),
                        OutputFormat::Pretty => println!("{}", pretty::format_created(&created)),
                    }
                }
                UsersAction::Get { id } => {
                    let user = client.get_user(&id).await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&user, cli.format)),
                        OutputFormat::Pretty => println!("{}", pretty::format_user(&user)),
                    }
                }
                UsersAction::Delete { id } => {
                    let response = client.delete_user(&id).await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&response, cli.format)),
                        OutputFormat::Pretty if !cli.quiet => {
                            println!("{} ({})", response.message, id)
                        }
                        OutputFormat::Pretty => {}
                    }
                }
            }
        }
        Commands::Health(health_cmd) => {
            use userstore_client::cli::health::HealthAction;
            match health_cmd.action {
                HealthAction::Live => {
                    client.livez().await?;
                    if !cli.quiet {
                        println!("OK");
                    }
                }
            }
        }
    }

    Ok(())
}
