use anyhow::{Context, Result};
use chat_commands::environment::load_settings;
use chat_commands::utils::{read_message, single_line};
use chat_commands::{Card, RenderOutcome, Renderer};
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::json;
use std::path::PathBuf;
use tracing::info;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "jobchat")]
#[command(about = "Render slash-command cards from job assistant chat messages")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Settings file with one section per environment
    #[arg(long, global = true, default_value = "config.yaml")]
    config: PathBuf,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,
}

#[derive(clap::Args)]
struct MessageInput {
    /// Message text; read from --file or stdin when omitted
    #[arg(long, short)]
    message: Option<String>,

    #[arg(long, short, conflicts_with = "message")]
    file: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

#[derive(Subcommand)]
enum Command {
    /// Render a message into cards
    Render {
        #[command(flatten)]
        input: MessageInput,

        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Print the command detected in a message
    Detect {
        #[command(flatten)]
        input: MessageInput,
    },
    /// Print the favicon URL used for a link
    Favicon { link: String },
    /// List the configured job portal catalog
    Portals,
}

fn init_logging(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_current_span(false)
                    .with_span_list(false),
            )
            .init();
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
            .init();
    }
}

fn print_cards(cards: &[Card]) {
    for card in cards {
        println!("• {} ({})", card.title, card.subtitle);
        if let Some(badge) = &card.badge {
            println!("    {}", badge);
        }
        if let Some(body) = &card.body {
            println!("    {}", single_line(body));
        }
        if let Some(posted) = &card.posted_label {
            println!("    {}", posted);
        }
        println!("    🔗 {}", card.link);
        println!("    🖼️  {}", card.icon_url);
    }
}

fn render(renderer: &Renderer, message: &str, format: OutputFormat) -> Result<()> {
    let outcome = renderer.render_outcome(message);
    let now = chrono::Utc::now();

    match (format, outcome) {
        (OutputFormat::Json, RenderOutcome::Rendered(descriptor)) => {
            let cards = descriptor.cards(renderer.settings(), now);
            let output = json!({ "descriptor": descriptor, "cards": cards });
            println!(
                "{}",
                serde_json::to_string_pretty(&output).context("Failed to serialize output")?
            );
        }
        (OutputFormat::Json, skipped) => {
            println!(
                "{}",
                serde_json::to_string_pretty(&skipped).context("Failed to serialize output")?
            );
        }
        (OutputFormat::Text, RenderOutcome::Rendered(descriptor)) => {
            println!(
                "✓ {} ({} item(s))",
                descriptor.kind.label(),
                descriptor.records.len()
            );
            print_cards(&descriptor.cards(renderer.settings(), now));
        }
        (OutputFormat::Text, RenderOutcome::Skipped { reason }) => {
            println!("Nothing to render [{}]: {}", reason.code(), reason);
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_json);

    let settings = load_settings(&cli.config)?;
    info!("Favicon service: {}", settings.favicon_service_url);
    let renderer = Renderer::new(settings);

    match cli.command {
        Command::Render { input, format } => {
            let message = read_message(input.message, input.file.as_deref())?;
            render(&renderer, &message, format)?;
        }
        Command::Detect { input } => {
            let message = read_message(input.message, input.file.as_deref())?;
            match renderer.detect_command(&message) {
                Some(kind) => println!("{}", kind),
                None => println!("none"),
            }
        }
        Command::Favicon { link } => {
            println!("{}", renderer.favicon_url(&link));
        }
        Command::Portals => {
            print_cards(
                &renderer
                    .settings()
                    .job_portals
                    .iter()
                    .map(|portal| {
                        Card::from_record(
                            &chat_commands::StructuredRecord::Entity(portal.clone()),
                            renderer.settings(),
                            chrono::Utc::now(),
                        )
                    })
                    .collect::<Vec<_>>(),
            );
        }
    }

    Ok(())
}
