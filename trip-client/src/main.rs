use std::num::NonZeroU32;
use std::path::PathBuf;
use std::process::ExitCode;

use chrono::FixedOffset;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use trip_client::config::PlannerConfig;
use trip_client::domain::{DEFAULT_UTC_OFFSET, parse_offset};
use trip_client::entur::{EnturClient, MockEnturClient, Transport};
use trip_client::planner::{PlannerError, plan_trip};
use trip_client::query::{DEFAULT_RESULT_COUNT, QueryBuilder, TemplateStore, TripRequest};
use trip_client::render::render_trip;
use trip_client::stops::StopDirectory;

/// Plan a public transport trip between two stops.
#[derive(Parser)]
#[command(name = "trip-client", version, about)]
struct Cli {
    /// Origin stop, e.g. "Lillestrøm stasjon"
    origin: String,

    /// Destination stop, e.g. "Forskningsparken"
    destination: String,

    /// Number of trip patterns to request
    #[arg(short = 'n', long, default_value_t = DEFAULT_RESULT_COUNT)]
    count: NonZeroU32,

    /// Journey planner GraphQL endpoint
    #[arg(long, env = "ENTUR_ENDPOINT")]
    endpoint: Option<String>,

    /// Client name sent in the ET-Client-Name header
    #[arg(long, env = "ET_CLIENT_NAME")]
    client_name: Option<String>,

    /// Stop catalogue CSV
    #[arg(long, env = "TRIP_STOPS")]
    stops: Option<PathBuf>,

    /// Directory of query templates
    #[arg(long, env = "TRIP_TEMPLATES")]
    templates: Option<PathBuf>,

    /// Name of the trip query template
    #[arg(long)]
    template: Option<String>,

    /// UTC offset stamped on the departure time
    #[arg(long, env = "TRIP_UTC_OFFSET", default_value = DEFAULT_UTC_OFFSET, value_parser = parse_offset)]
    utc_offset: FixedOffset,

    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Answer from a recorded response file instead of the network
    #[arg(long)]
    mock: Option<PathBuf>,

    /// Print the generated query
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn config(&self) -> PlannerConfig {
        let mut config = PlannerConfig::default().with_result_count(self.count);
        config.utc_offset = self.utc_offset;
        if let Some(endpoint) = &self.endpoint {
            config = config.with_endpoint(endpoint);
        }
        if let Some(name) = &self.client_name {
            config = config.with_client_name(name);
        }
        if let Some(path) = &self.stops {
            config = config.with_stops_path(path);
        }
        if let Some(dir) = &self.templates {
            config = config.with_template_dir(dir);
        }
        if let Some(name) = &self.template {
            config = config.with_template_name(name);
        }
        if let Some(secs) = self.timeout {
            config = config.with_timeout(secs);
        }
        config
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.config();

    // Load the stop catalogue and templates (fail fast if unavailable)
    let stops = match StopDirectory::load(&config.stops_path) {
        Ok(stops) => stops,
        Err(e) => {
            eprintln!("error: {}: {e}", config.stops_path.display());
            return ExitCode::FAILURE;
        }
    };
    let templates = match TemplateStore::load(&config.template_dir) {
        Ok(templates) => templates,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let request = TripRequest::now(&cli.origin, &cli.destination, config.utc_offset)
        .with_result_count(config.result_count);

    let result = match &cli.mock {
        Some(path) => match MockEnturClient::from_file(path) {
            Ok(mock) => run(&mock, &stops, &templates, &request, &config, cli.verbose).await,
            Err(e) => Err(e.into()),
        },
        None => match EnturClient::new(config.entur()) {
            Ok(client) => run(&client, &stops, &templates, &request, &config, cli.verbose).await,
            Err(e) => Err(e.into()),
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}: {e}", e.reason());
            ExitCode::FAILURE
        }
    }
}

async fn run<T: Transport>(
    transport: &T,
    stops: &StopDirectory,
    templates: &TemplateStore,
    request: &TripRequest,
    config: &PlannerConfig,
    verbose: bool,
) -> Result<(), PlannerError> {
    let builder = QueryBuilder::new(stops, templates);
    let planned = plan_trip(transport, &builder, request, &config.template_name).await?;

    let origin = stops.resolve(&request.origin).map(|s| s.name()).unwrap_or(&request.origin);
    let destination = stops
        .resolve(&request.destination)
        .map(|s| s.name())
        .unwrap_or(&request.destination);
    let title = format!("From {origin} to {destination}:");
    println!("{title}");
    println!("{}", "=".repeat(title.chars().count()));

    if verbose {
        println!("QUERY:");
        println!("{}", planned.query);
        println!();
    }

    if planned.trip.is_empty() {
        println!("Service returned zero itineraries.");
        return Ok(());
    }

    let text = render_trip(&planned.trip)?;
    println!("{text}");
    Ok(())
}
