//! Folio CLI
//!
//! Terminal client for the portfolio:
//! - Render a page as text
//! - List a content section
//! - Add or remove items through the admin gate
//! - Generate a default config file

use anyhow::{bail, Context};
use chrono::Datelike;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use folio::config::{generate_default_config, Config, SourceMode};
use folio::view::{FormState, EMPTY_LIST_NOTICE};
use folio::{logging, Page, Portfolio, Section, View};

#[derive(Parser)]
#[command(name = "folio")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Personal portfolio site client")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: ~/.config/folio/config.toml or ./folio.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Portfolio backend URL, including the API prefix
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Use the embedded content instead of a backend
    #[arg(long, global = true)]
    pub local: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a page (home, about, works, certifications, blog, contact)
    Page {
        /// Page id
        #[arg(default_value = "home")]
        page: String,
    },

    /// List the items of a section
    List {
        /// Section (works, certifications, blog)
        section: Section,
        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Add an item to a section
    Add {
        /// Section (works, certifications, blog)
        section: Section,
        /// Field values in name=value format
        #[arg(short = 'F', long = "field")]
        fields: Vec<String>,
        /// Admin password
        #[arg(short, long)]
        password: String,
    },

    /// Remove an item from a section
    Remove {
        /// Section (works, certifications, blog)
        section: Section,
        /// Item id
        id: String,
        /// Admin password
        #[arg(short, long)]
        password: String,
    },

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

    if let Commands::Config { output } = &cli.command {
        let content = generate_default_config();
        match output {
            Some(path) => {
                std::fs::write(path, content)
                    .with_context(|| format!("Failed to write {:?}", path))?;
                println!("Config written to {:?}", path);
            }
            None => print!("{}", content),
        }
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(url) = cli.api_url {
        config.content.api_url = url;
        config.content.source = SourceMode::Remote;
    }
    if cli.local {
        config.content.source = SourceMode::Local;
    }

    logging::init_logging(&config.logging)?;
    tracing::debug!("Folio v{}", env!("CARGO_PKG_VERSION"));

    let source = config.content.build_source()?;
    let mut site = Portfolio::new(source, config.admin.gate(), config.profile.clone())
        .with_skills(config.skills.clone());

    if let Err(e) = site.load().await {
        eprintln!("Could not load content: {}", e);
    }

    match cli.command {
        Commands::Page { page } => {
            site.navigate(Page::from_id(&page));
            print_view(&site.render());
            println!();
            println!("{}", site.profile().footer_line(chrono::Utc::now().year()));
        }

        Commands::List { section, format } => {
            let items = site.collections().items(section);
            match format.as_str() {
                "json" => println!("{}", serde_json::to_string_pretty(&items)?),
                _ => {
                    if items.is_empty() {
                        println!("{}", EMPTY_LIST_NOTICE);
                    } else {
                        println!("{:<16} {:<36} {}", "ID", "Title", "Details");
                        println!("{}", "-".repeat(72));
                        for item in &items {
                            println!("{:<16} {:<36} {}", item.id(), item.headline(), item.subtitle());
                        }
                    }
                }
            }
        }

        Commands::Add {
            section,
            fields,
            password,
        } => {
            site.navigate(Page::Admin);
            site.login(&password)?;
            site.select_admin_tab(section);

            let mut form = FormState::new(section);
            for pair in &fields {
                let Some((name, value)) = pair.split_once('=') else {
                    bail!("Invalid field '{}': expected name=value", pair);
                };
                form.set(name.trim(), value)?;
            }

            match site.submit_form(&mut form).await? {
                Some(item) => println!("Added {} '{}' (id {})", section.singular(), item.headline(), item.id()),
                None => bail!("Failed to add {}", section.singular()),
            }
        }

        Commands::Remove {
            section,
            id,
            password,
        } => {
            site.navigate(Page::Admin);
            site.login(&password)?;

            match site.remove(section, &id).await {
                Some(removal) => {
                    if let Some(e) = &removal.remote_error {
                        eprintln!("Warning: backend delete failed: {}", e);
                    }
                    println!("Removed {} item(s) from {}", removal.removed, section);
                }
                None => bail!("Not logged in"),
            }
        }

        Commands::Config { .. } => {}
    }

    Ok(())
}

fn print_view(view: &View<'_>) {
    match view {
        View::Loading => println!("Loading data from the server..."),
        View::Home { profile } => {
            println!("Hi, I'm {}", profile.name);
            println!("{}", profile.title_words().join(" "));
            println!();
            println!("GitHub:   {}", profile.socials.github);
            println!("LinkedIn: {}", profile.socials.linkedin);
            println!("Twitter:  {}", profile.socials.twitter);
            println!("Email:    {}", profile.mailto());
        }
        View::About { profile, skills } => {
            println!("About Me");
            println!();
            println!("{}", profile.bio);
            println!();
            println!("My Skills");
            for skill in skills.iter() {
                let filled = usize::from(skill.level) / 5;
                println!("  {:<16} {:<20} {}%", skill.name, "#".repeat(filled), skill.level);
            }
        }
        View::Works(works) => {
            println!("My Works");
            for work in works.iter() {
                println!();
                println!("{} [{}]", work.title, work.category);
                println!("  {}", work.description);
            }
        }
        View::Certifications(certifications) => {
            println!("Certifications");
            for cert in certifications.iter() {
                println!();
                println!("{}", cert.name);
                println!("  {} - {}", cert.issuer, cert.date);
            }
        }
        View::Blog(posts) => {
            println!("My Blog");
            for post in posts.iter() {
                println!();
                println!("{}  {}", post.date, post.title);
                println!("  {}", post.excerpt);
                println!("  Read More: {}", post.href());
            }
        }
        View::Contact => {
            println!("Contact Me");
            println!("Have a project in mind or just want to say hi? Feel free to reach out.");
        }
        View::AdminLogin { error } => {
            println!("Admin Login");
            if let Some(error) = error {
                println!("{}", error);
            }
        }
        View::AdminPanel { tab, form, items } => {
            println!("Admin Panel - Manage {}", tab);
            println!("{}", form.list_heading());
            if items.is_empty() {
                println!("  {}", EMPTY_LIST_NOTICE);
            }
            for item in items {
                println!("  {} {} ({})", item.id(), item.headline(), item.subtitle());
            }
        }
    }
}
