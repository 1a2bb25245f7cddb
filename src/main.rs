use kart_tracker::{TrackerSession, View};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kart_tracker=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting kart tracker session");

    let mut session = TrackerSession::new();

    // Submit the sample match the entry form starts with
    if let Err(err) = session.submit_draft() {
        warn!(%err, "Sample match was rejected");
        return;
    }

    for record in session.history() {
        info!(
            match_id = %record.id,
            date = %record.display_date(),
            team1 = %record.team1.name,
            team2 = %record.team2.name,
            winner = %record.winner_label(),
            "History"
        );
    }

    session.set_view(View::Stats);
    let leaderboard = session.leaderboard();
    if leaderboard.is_empty() {
        info!("No matches available to display statistics");
        return;
    }

    match serde_json::to_string_pretty(leaderboard.entries()) {
        Ok(json) => println!("{json}"),
        Err(err) => warn!(%err, "Failed to render leaderboard"),
    }
}
