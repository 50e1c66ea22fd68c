//! SocialAuto CLI
//!
//! Command-line client for the SocialAuto API:
//! - List users in the directory
//! - Show a user's stats
//! - Resolve a session token
//! - Check server status
//! - Generate a default config file

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use socialauto::api::dto::{SessionResponse, UserListResponse};
use socialauto::directory::{User, UserStats};

#[derive(Parser)]
#[command(name = "socialauto-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Command-line client for the SocialAuto API")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API server URL
    #[arg(long, default_value = "http://localhost:8082", global = true)]
    pub api_url: String,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List users in the directory
    Users {
        /// Leave this user id out of the list
        #[arg(short, long)]
        exclude: Option<String>,
    },

    /// Show aggregate stats for a user
    Stats {
        /// User id
        user_id: String,
    },

    /// Resolve a session token to its user
    Session {
        /// Session token
        #[arg(short, long)]
        token: String,
    },

    /// Show server status
    Status,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let json_output = cli.format == "json";

    match cli.command {
        Commands::Users { exclude } => {
            let mut request = client.get(format!("{}/api/v1/users", cli.api_url));
            if let Some(id) = &exclude {
                request = request.query(&[("exclude", id)]);
            }

            let response = request.send().await?;
            if !response.status().is_success() {
                let status = response.status();
                let text = response.text().await.unwrap_or_default();
                eprintln!("Failed to list users ({}): {}", status, text);
                std::process::exit(1);
            }

            let list: UserListResponse = response.json().await?;
            if json_output {
                println!("{}", serde_json::to_string_pretty(&list.users)?);
            } else if list.users.is_empty() {
                println!("No users found.");
            } else {
                print_users(&list.users);
            }
        }

        Commands::Stats { user_id } => {
            let response = client
                .get(stats_url(&cli.api_url, &user_id))
                .send()
                .await?;

            if response.status() == reqwest::StatusCode::NOT_FOUND {
                eprintln!("User {} not found", user_id);
                std::process::exit(1);
            }
            if !response.status().is_success() {
                eprintln!("Failed to fetch stats: {}", response.status());
                std::process::exit(1);
            }

            let stats: UserStats = response.json().await?;
            if json_output {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                print_stats(&user_id, &stats);
            }
        }

        Commands::Session { token } => {
            let response = client
                .get(format!("{}/api/v1/session", cli.api_url))
                .bearer_auth(&token)
                .send()
                .await?;

            if !response.status().is_success() {
                eprintln!("Session lookup failed: {}", response.status());
                std::process::exit(1);
            }

            let body: SessionResponse = response.json().await?;
            match (json_output, body.session) {
                (true, session) => println!("{}", serde_json::to_string_pretty(&session)?),
                (false, Some(session)) => {
                    println!("Signed in as {}", describe_user(&session.user));
                    println!("Resolved at {}", session.issued_at.format("%Y-%m-%d %H:%M:%S UTC"));
                }
                (false, None) => {
                    println!("No session for this token.");
                    std::process::exit(2);
                }
            }
        }

        Commands::Status => {
            let response = client.get(format!("{}/health", cli.api_url)).send().await;

            match response {
                Ok(resp) if resp.status().is_success() => {
                    let health: serde_json::Value = resp.json().await?;

                    println!("SocialAuto v{}", env!("CARGO_PKG_VERSION"));
                    println!();
                    println!("API Status: {}", health["status"].as_str().unwrap_or("unknown"));
                    println!("Directory:  {}", health["directory"].as_str().unwrap_or("unknown"));

                    if let Some(uptime) = health["uptime_seconds"].as_u64() {
                        println!();
                        println!("Uptime: {}", format_duration(uptime));
                    }
                }
                Ok(resp) => {
                    eprintln!("API returned error: {}", resp.status());
                    std::process::exit(1);
                }
                Err(e) => {
                    eprintln!("Cannot connect to SocialAuto API at {}", cli.api_url);
                    eprintln!("Error: {}", e);
                    eprintln!();
                    eprintln!("Make sure the SocialAuto API server is running:");
                    eprintln!("  cargo run --bin socialauto");
                    std::process::exit(1);
                }
            }
        }

        Commands::Config { output } => {
            let config = socialauto::config::generate_default_config();

            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &config)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}

/// Stats endpoint for a user; the id is percent-encoded as one path segment
fn stats_url(api_url: &str, user_id: &str) -> String {
    format!(
        "{}/api/v1/users/{}/stats",
        api_url.trim_end_matches('/'),
        urlencoding::encode(user_id)
    )
}

fn print_users(users: &[User]) {
    println!("{:<8} {:<24} {:<32} {}", "ID", "Name", "Email", "Avatar");
    println!("{}", "-".repeat(72));

    for user in users {
        println!(
            "{:<8} {:<24} {:<32} {}",
            user.id,
            user.display_name().unwrap_or("-"),
            user.email.as_deref().unwrap_or("-"),
            if user.image.is_some() { "image" } else { "initials" }
        );
    }
}

fn print_stats(user_id: &str, stats: &UserStats) {
    println!("Stats for user {}", user_id);
    println!("{}", "-".repeat(32));
    println!("{:<18} {}", "Messages", stats.total_messages);
    println!("{:<18} {}", "Contacts", stats.total_contacts);
    println!("{:<18} {}", "Active time", stats.active_time);
    println!("{:<18} {}", "Response rate", stats.response_rate);
}

fn describe_user(user: &User) -> String {
    match (user.display_name(), user.email.as_deref()) {
        (Some(name), Some(email)) => format!("{} <{}> (id {})", name, email, user.id),
        (Some(name), None) => format!("{} (id {})", name, user.id),
        (None, Some(email)) => format!("{} (id {})", email, user.id),
        (None, None) => format!("user {}", user.id),
    }
}

fn format_duration(seconds: u64) -> String {
    let days = seconds / 86400;
    let hours = (seconds % 86400) / 3600;
    let minutes = (seconds % 3600) / 60;

    if days > 0 {
        format!("{}d {}h {}m", days, hours, minutes)
    } else if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(59), "0m");
        assert_eq!(format_duration(3_660), "1h 1m");
        assert_eq!(format_duration(90_000), "1d 1h 0m");
    }

    #[test]
    fn test_stats_url_encodes_user_id() {
        assert_eq!(
            stats_url("http://localhost:8082/", "2"),
            "http://localhost:8082/api/v1/users/2/stats"
        );
        assert_eq!(
            stats_url("http://localhost:8082", "a/b?c#d"),
            "http://localhost:8082/api/v1/users/a%2Fb%3Fc%23d/stats"
        );
    }

    #[test]
    fn test_describe_user() {
        assert_eq!(describe_user(&User::new("5")), "user 5");
        assert_eq!(
            describe_user(&User::new("2").name("Alex").email("a@x.io")),
            "Alex <a@x.io> (id 2)"
        );
    }
}
