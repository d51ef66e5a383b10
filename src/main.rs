use chrono::Local;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use servicelog::api;
use servicelog::config::Config;
use servicelog::domain::DomainError;
use servicelog::models::{FieldChange, FormField, ServiceType};
use servicelog::AppState;

/// Walk through one create session: edit, let the draft autosave, submit
async fn run_demo_session(app: &AppState) -> Result<(), DomainError> {
    let mut session = api::logs::create_log_session(app)?;

    session.set_raw(FormField::ProviderId, "provider-004")?;
    session.set_raw(FormField::ServiceOrder, "SO-2024-004")?;
    session.set_raw(FormField::CarId, "car-002")?;
    session.set_raw(FormField::Odometer, "31250")?;
    session.set_raw(FormField::EngineHours, "910")?;
    session.set_field(FieldChange::ServiceType(ServiceType::Repair));
    session.set_raw(FormField::ServiceDescription, "Replaced worn serpentine belt")?;

    tokio::time::sleep(app.config().autosave_debounce * 2).await;
    tracing::info!(
        "Draft {} status {:?}, {} draft(s) stored",
        session.draft_id(),
        session.save_status(),
        api::drafts::list_drafts(app, "").len()
    );

    let log = session.submit()?;
    tracing::info!(
        "Created {} for {}, {} draft(s) left",
        log.id,
        log.car_id,
        api::drafts::list_drafts(app, "").len()
    );
    Ok(())
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "servicelog=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let mut config = Config::from_env();

    // Check for --profile CLI argument
    let args: Vec<String> = std::env::args().collect();
    if let Some(pos) = args.iter().position(|arg| arg == "--profile") {
        if let Some(val) = args.get(pos + 1) {
            config.profile = val.clone();
        }
    }

    tracing::info!(
        "Starting service log core (profile '{}', autosave after {:?})",
        config.profile,
        config.autosave_debounce
    );

    let app = match AppState::initialize(config) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!("Failed to initialize store: {}", e);
            std::process::exit(1);
        }
    };

    let stats = api::logs::weekly_overview(&app, Local::now().date_naive());
    tracing::info!(
        "Weekly overview: {}h avg engine hours, {} miles, {} logs added",
        stats.avg_engine_hours,
        stats.miles_label(),
        stats.logs_count
    );

    if args.iter().any(|arg| arg == "--demo") {
        if let Err(e) = run_demo_session(&app).await {
            tracing::error!("Demo session failed: {}", e);
            std::process::exit(1);
        }
    }

    for log in api::logs::list_logs(&app, "") {
        tracing::info!(
            "{} {} {} {} -> {} ({})",
            log.id,
            log.service_order,
            log.service_type,
            log.start_date,
            log.end_date,
            log.service_description
        );
    }
}
