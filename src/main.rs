//! Reabertura CLI
//!
//! Fetches the unit list, applies the filter given on the command line and
//! prints one card per visible unit.

use clap::{Parser, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use reabertura::{
    config::AppConfig,
    models::{FilterState, LocationRecord, Period},
    services::{HttpLocationSource, LocationStore},
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PeriodArg {
    Manha,
    Tarde,
    Noite,
}

impl From<PeriodArg> for Period {
    fn from(arg: PeriodArg) -> Self {
        match arg {
            PeriodArg::Manha => Period::Manha,
            PeriodArg::Tarde => Period::Tarde,
            PeriodArg::Noite => Period::Noite,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "reabertura", about = "Find gym units open in a training period")]
struct Cli {
    /// Training period to filter by
    #[arg(long, value_enum)]
    period: Option<PeriodArg>,

    /// Include closed units in the results
    #[arg(long)]
    show_closed: bool,

    /// Override the configured locations endpoint
    #[arg(long)]
    url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("reabertura={}", config.logging.level).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Reabertura v{}", env!("CARGO_PKG_VERSION"));

    let url = cli.url.unwrap_or(config.source.url);
    tracing::info!("Fetching locations from {}", url);

    // The single suspension point: everything below waits for this fetch
    let source = HttpLocationSource::new(url);
    let store = LocationStore::load(&source).await;

    let filter_state = FilterState::new(cli.period.map(Period::from), cli.show_closed);
    let visible = store.visible(&filter_state);

    println!("REABERTURA SMART FIT");
    if let Some(period) = filter_state.period {
        println!("Período: {} ({})", period.label(), period.time_range());
    }
    println!("Resultados encontrados: {}", visible.len());

    for record in &visible {
        render_card(record);
    }

    Ok(())
}

/// Print one text card, mirroring what the web page shows per unit
fn render_card(record: &LocationRecord) {
    let badge = if record.is_open() { "Aberto" } else { "Fechado" };

    println!();
    println!("[{}] {}", badge, record.title());
    if !record.content().is_empty() {
        println!("{}", record.content());
    }

    match record {
        LocationRecord::Operating(location) => {
            let icons: Vec<&str> = location
                .icons()
                .iter()
                .flatten()
                .map(|icon| icon.as_str())
                .collect();
            if !icons.is_empty() {
                println!("Medidas: {}", icons.join(", "));
            }
            for schedule in &location.schedules {
                println!("  {} - {}", schedule.weekdays, schedule.hour);
            }
        }
        LocationRecord::Placeholder(placeholder) => {
            println!("{}", placeholder.address_line());
        }
    }
}
