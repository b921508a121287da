//! EVNOVA CLI
//!
//! Command-line client for the mock API:
//! - Browse and inspect hackathons
//! - Log in and sign up against the mock directory
//! - Print dashboards
//! - Check status and generate a config file

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use evnova::api::dto::HealthResponse;
use evnova::dashboard::{format_count, OrganiserDashboard, ParticipantDashboard};
use evnova::model::{Hackathon, PlatformStats, User};
use serde::{de::DeserializeOwned, Serialize};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "evnova")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Hackathon platform client for the EVNOVA mock API")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API server URL
    #[arg(long, default_value = "http://localhost:8083", global = true)]
    pub api_url: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum DashboardKind {
    Organiser,
    Participant,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List hackathons
    Hackathons {
        /// Search title and description
        #[arg(short, long)]
        search: Option<String>,
        /// online or offline
        #[arg(short, long)]
        mode: Option<String>,
        /// open, upcoming, ongoing or completed
        #[arg(long)]
        status: Option<String>,
        /// Theme, e.g. "AI/ML"
        #[arg(short, long)]
        domain: Option<String>,
    },

    /// Show one hackathon
    Show {
        id: String,
    },

    /// Platform headline numbers
    Stats,

    /// Check credentials against the mock directory
    Login {
        email: String,
        password: String,
    },

    /// Create a mock account
    Signup {
        name: String,
        email: String,
        password: String,
    },

    /// Print a dashboard
    Dashboard {
        #[arg(value_enum)]
        kind: DashboardKind,
    },

    /// Show API status
    Status,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Flat hackathon row for table and CSV output
#[derive(Serialize)]
struct HackathonRow<'a> {
    id: &'a str,
    title: &'a str,
    mode: String,
    status: String,
    start: String,
    prize_pool: &'a str,
    participants: u32,
}

impl<'a> From<&'a Hackathon> for HackathonRow<'a> {
    fn from(h: &'a Hackathon) -> Self {
        Self {
            id: &h.id,
            title: &h.title,
            mode: h.mode.to_string(),
            status: h.status.to_string(),
            start: h.start_date.to_string(),
            prize_pool: &h.prize_pool,
            participants: h.participants,
        }
    }
}

#[derive(serde::Deserialize)]
struct HackathonList {
    hackathons: Vec<Hackathon>,
    label: String,
}

struct Client {
    http: reqwest::Client,
    base: String,
}

impl Client {
    fn new(base: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base: base.trim_end_matches('/').to_string(),
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> anyhow::Result<T> {
        let response = self
            .http
            .get(format!("{}{}", self.base, path))
            .query(query)
            .send()
            .await
            .with_context(|| format!("Cannot connect to EVNOVA API at {}", self.base))?;
        Self::decode(response).await
    }

    async fn send<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> anyhow::Result<T> {
        let response = self
            .http
            .post(format!("{}{}", self.base, path))
            .json(body)
            .send()
            .await
            .with_context(|| format!("Cannot connect to EVNOVA API at {}", self.base))?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> anyhow::Result<T> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }
        let body: serde_json::Value = response.json().await.unwrap_or_default();
        let message = body["error"]["message"].as_str().unwrap_or("request failed");
        bail!("{} ({})", message, status)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let client = Client::new(&cli.api_url);

    match cli.command {
        Commands::Hackathons {
            search,
            mode,
            status,
            domain,
        } => {
            let query: Vec<(&str, String)> = [
                ("search", search),
                ("mode", mode),
                ("status", status),
                ("domain", domain),
            ]
            .into_iter()
            .filter_map(|(k, v)| v.map(|v| (k, v)))
            .collect();

            let list: HackathonList = client.get("/api/v1/hackathons", &query).await?;
            match cli.format {
                OutputFormat::Json => print_json(&list.hackathons)?,
                OutputFormat::Csv => {
                    print_csv(list.hackathons.iter().map(HackathonRow::from))?
                }
                OutputFormat::Table => {
                    print_hackathon_table(&list.hackathons);
                    println!();
                    println!("{}", list.label);
                }
            }
        }

        Commands::Show { id } => {
            let h: Hackathon = client.get(&format!("/api/v1/hackathons/{}", id), &[]).await?;
            match cli.format {
                OutputFormat::Json => print_json(&h)?,
                OutputFormat::Csv => print_csv(std::iter::once(HackathonRow::from(&h)))?,
                OutputFormat::Table => print_hackathon_detail(&h),
            }
        }

        Commands::Stats => {
            let stats: PlatformStats = client.get("/api/v1/stats", &[]).await?;
            match cli.format {
                OutputFormat::Json => print_json(&stats)?,
                OutputFormat::Csv => print_csv(std::iter::once(&stats))?,
                OutputFormat::Table => {
                    println!("Hackathons Hosted:  {}", format_count(stats.hackathons_hosted));
                    println!("Total Participants: {}", format_count(stats.total_participants));
                    println!("Teams Formed:       {}", format_count(stats.teams_formed));
                    println!("Prizes Awarded:     {}", stats.prizes_awarded);
                }
            }
        }

        Commands::Login { email, password } => {
            let body = serde_json::json!({ "email": email, "password": password });
            let user: User = client.send("/api/v1/auth/login", &body).await?;
            print_user(cli.format, &user)?;
        }

        Commands::Signup {
            name,
            email,
            password,
        } => {
            let body = serde_json::json!({ "name": name, "email": email, "password": password });
            let user: User = client.send("/api/v1/auth/signup", &body).await?;
            print_user(cli.format, &user)?;
        }

        Commands::Dashboard { kind } => match kind {
            DashboardKind::Organiser => {
                let dash: OrganiserDashboard = client.get("/api/v1/dashboard/organiser", &[]).await?;
                match cli.format {
                    OutputFormat::Json => print_json(&dash)?,
                    OutputFormat::Csv => print_csv(dash.hackathons.iter())?,
                    OutputFormat::Table => print_organiser(&dash),
                }
            }
            DashboardKind::Participant => {
                let dash: ParticipantDashboard =
                    client.get("/api/v1/dashboard/participant", &[]).await?;
                match cli.format {
                    OutputFormat::Json => print_json(&dash)?,
                    OutputFormat::Csv => print_csv(dash.stat_cards().iter())?,
                    OutputFormat::Table => print_participant(&dash),
                }
            }
        },

        Commands::Status => match client.get::<HealthResponse>("/health", &[]).await {
            Ok(health) => {
                println!("EVNOVA v{}", env!("CARGO_PKG_VERSION"));
                println!();
                println!("API Status: {}", health.status);
                println!("Hackathons: {}", health.hackathons);
                println!("Users:      {}", health.users);
                println!();
                println!("Uptime: {}", format_duration(health.uptime_seconds));
            }
            Err(e) => {
                eprintln!("{:#}", e);
                eprintln!();
                eprintln!("Make sure the EVNOVA API server is running:");
                eprintln!("  cargo run --bin evnova-api");
                std::process::exit(1);
            }
        },

        Commands::Config { output } => {
            let config = evnova::config::generate_default_config();

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

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_csv<I, T>(rows: I) -> anyhow::Result<()>
where
    I: IntoIterator<Item = T>,
    T: Serialize,
{
    let mut writer = csv::Writer::from_writer(std::io::stdout());
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

fn print_user(format: OutputFormat, user: &User) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => print_json(user),
        OutputFormat::Csv => print_csv(std::iter::once(user)),
        OutputFormat::Table => {
            let role = user
                .role
                .map(|r| r.to_string())
                .unwrap_or_else(|| "(none, pick one in the app)".to_string());
            println!("Signed in as {} <{}>", user.name, user.email);
            println!("ID:   {}", user.id);
            println!("Role: {}", role);
            Ok(())
        }
    }
}

fn print_hackathon_table(hackathons: &[Hackathon]) {
    println!(
        "{:<4} {:<28} {:<8} {:<10} {:<6} {:>9}",
        "ID", "Title", "Mode", "Status", "Start", "Prize"
    );
    println!("{}", "-".repeat(72));

    for h in hackathons {
        println!(
            "{:<4} {:<28} {:<8} {:<10} {:<6} {:>9}",
            h.id,
            truncate(&h.title, 28),
            h.mode,
            h.status,
            h.short_start_date(),
            h.prize_pool
        );
    }
}

fn print_hackathon_detail(h: &Hackathon) {
    println!("{}", h.title);
    println!("{}", "=".repeat(h.title.chars().count()));
    println!("{}", h.description);
    println!();
    println!("Organiser:   {}", h.organiser);
    println!("Type:        {}", h.mode.title());
    if let Some(venue) = &h.venue {
        println!("Venue:       {}", venue);
    }
    println!("Status:      {}", h.status.title());
    println!("Dates:       {} → {}", h.start_date, h.end_date);
    println!("Deadline:    {}", h.registration_deadline);
    println!("Prize Pool:  {}", h.prize_pool);
    println!("Team Size:   up to {}", h.max_team_size);
    println!("Themes:      {}", h.themes.join(", "));
    println!(
        "Joined:      {} participants in {} teams",
        format_count(h.participants),
        format_count(h.teams)
    );
}

fn print_organiser(dash: &OrganiserDashboard) {
    for stat in &dash.stats {
        println!(
            "{} {:<20} {:>7}  {}",
            stat.icon.glyph(),
            stat.label,
            format_count(stat.value),
            stat.change
        );
    }

    println!();
    println!("Domains:");
    for slice in &dash.domains {
        println!("  {:<12} {:>3}%", slice.name, slice.percent);
    }

    println!();
    println!("Your Hackathons:");
    for h in &dash.hackathons {
        println!(
            "  {:<26} {:<10} {:>5} participants  {}",
            h.title,
            h.status,
            format_count(h.participants),
            h.date_range()
        );
    }
}

fn print_participant(dash: &ParticipantDashboard) {
    for card in dash.stat_cards() {
        println!("{:<18} {}", card.label, card.value);
    }

    println!();
    println!("My Registrations:");
    for r in &dash.registrations {
        println!("  {} [{}]", r.hackathon_title, r.status);
        println!("    {}", r.team_summary());
        if r.has_repo() {
            println!("    {}", r.github_repo);
        }
    }

    println!();
    println!("Team Requests ({} pending):", dash.pending_requests());
    for req in &dash.team_requests {
        println!("  {} ({}): {}", req.from, req.skills.join(", "), req.message);
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}

fn format_duration(seconds: u64) -> String {
    if seconds < 60 {
        format!("{}s", seconds)
    } else if seconds < 3600 {
        format!("{}m {}s", seconds / 60, seconds % 60)
    } else if seconds < 86400 {
        format!("{}h {}m", seconds / 3600, (seconds % 3600) / 60)
    } else {
        format!("{}d {}h", seconds / 86400, (seconds % 86400) / 3600)
    }
}
