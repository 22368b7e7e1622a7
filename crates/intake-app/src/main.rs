//! Intake application binary - composition root.
//!
//! 1. Parse CLI flags and load configuration from TOML
//! 2. Initialize tracing
//! 3. Build the backend collaborators (HTTP or offline)
//! 4. Run one interactive intake session on stdin/stdout
//! 5. Offer doctor and slot selection, then book

mod cli;
mod console;
mod repl;

use std::sync::Arc;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use intake_chat::{IntakeOrchestrator, RandomPicker};
use intake_client::Collaborators;
use intake_core::{IntakeConfig, IntakeSession, UserContext};

use crate::cli::CliArgs;

type Input = Lines<BufReader<Stdin>>;

/// Run the questionnaire until the patient confirms or input ends.
async fn run_questionnaire(
    orchestrator: &IntakeOrchestrator,
    mut session: IntakeSession,
    input: &mut Input,
) -> Result<Option<IntakeSession>, Box<dyn std::error::Error>> {
    while let Some(line) = input.next_line().await? {
        let step = repl::handle_line(orchestrator, session, &line).await?;
        for text in &step.output {
            println!("{}", text);
        }
        if step.confirmed {
            return Ok(Some(step.session));
        }
        session = step.session;
    }

    tracing::info!(session_id = %session.session_id(), "Input closed before confirmation");
    Ok(None)
}

/// Prompt until a valid 1-based choice is entered.
async fn choose(input: &mut Input, count: usize) -> std::io::Result<Option<usize>> {
    while let Some(line) = input.next_line().await? {
        if let Some(choice) = console::parse_choice(&line, count) {
            return Ok(Some(choice));
        }
        println!("Please enter a number between 1 and {}.", count);
    }
    Ok(None)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // Config.
    let config_file = args.resolve_config_path();
    let (mut config, load_error) = match IntakeConfig::load(&config_file) {
        Ok(config) => (config, None),
        Err(e) => (IntakeConfig::default(), Some(e)),
    };

    // Tracing.
    let log_level = args.resolve_log_level(&config.general.log_level);
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Starting intake v{}", env!("CARGO_PKG_VERSION"));
    match load_error {
        None => tracing::info!(path = %config_file.display(), "Configuration loaded"),
        Some(e) => tracing::warn!(
            path = %config_file.display(),
            error = %e,
            "Configuration unavailable, using defaults"
        ),
    }

    // Collaborators.
    config.backend.base_url = args.resolve_backend_url(&config.backend.base_url);
    if args.offline {
        config.backend.enabled = false;
    }
    let collaborators = Collaborators::from_config(&config.backend)?;
    tracing::info!(
        backend = %config.backend.base_url,
        enabled = config.backend.enabled,
        "Collaborators ready"
    );

    let orchestrator =
        IntakeOrchestrator::new(collaborators, config.intake.clone(), Arc::new(RandomPicker));

    // Session.
    let user = UserContext {
        display_name: args.name.clone(),
        user_id: args.user_id.clone(),
        emergency: args.emergency,
    };
    let started = orchestrator.start(user).await;
    let source = started.source();
    let Some(session) = started.into_value() else {
        return Err("could not open an intake session".into());
    };
    tracing::info!(session_id = %session.session_id(), source, "Session ready");

    if let Some(opening) = session.transcript.last() {
        println!("{}\n", opening.content);
    }

    let mut input = BufReader::new(tokio::io::stdin()).lines();
    let Some(session) = run_questionnaire(&orchestrator, session, &mut input).await? else {
        return Ok(());
    };

    // Doctor matching.
    let matched = orchestrator.match_doctors(&session).await;
    println!("{}", console::render_doctors(&matched));
    let Some(doctors) = matched.into_value() else {
        return Ok(());
    };
    let candidates: Vec<_> = doctors.candidates().cloned().collect();
    if candidates.is_empty() {
        return Ok(());
    }

    println!("Choose a doctor (1-{}):", candidates.len());
    let Some(choice) = choose(&mut input, candidates.len()).await? else {
        return Ok(());
    };
    let doctor = &candidates[choice];

    if doctor.available_slots.is_empty() {
        println!("{} has no open slots right now. Please contact the clinic.", doctor.name);
        return Ok(());
    }
    println!("{}", console::render_slots(doctor));
    println!("Choose a slot (1-{}):", doctor.available_slots.len());
    let Some(slot_idx) = choose(&mut input, doctor.available_slots.len()).await? else {
        return Ok(());
    };
    let slot = &doctor.available_slots[slot_idx];

    // Booking.
    let booked = orchestrator.book(&session, doctor, slot).await;
    println!("\n{}", console::render_booking(&booked, doctor, slot));
    tracing::info!(session_id = %session.session_id(), source = booked.source(), "Intake finished");

    Ok(())
}
