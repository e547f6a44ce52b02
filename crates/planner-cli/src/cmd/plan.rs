use crate::output::{print_calendar, print_json};
use crate::publish::publish_calendar;
use crate::session::Session;
use anyhow::{bail, Context};
use gemini_client::GeminiClient;
use planner_core::{export, PlanningRequest, Presets};
use std::path::{Path, PathBuf};
use trello_client::TrelloClient;

pub struct PlanArgs {
    pub month: String,
    pub frequency: u8,
    pub days: String,
    pub pillars: Vec<String>,
    pub csv: Option<PathBuf>,
    pub board: Option<String>,
    pub list: Option<String>,
    pub prefix: Option<String>,
}

/// Drive the full flow: generate, render/export, optionally publish.
pub fn run(presets_path: &Path, args: PlanArgs, json: bool) -> anyhow::Result<()> {
    let presets = Presets::load(presets_path)?;
    let pillars = presets.resolve_pillars(&args.pillars)?;
    let request = PlanningRequest::new(args.month, args.frequency, args.days, pillars)?;
    let mut session = Session::new(presets);

    // Generation phase. A failure here leaves the session without a calendar
    // and aborts the run; the operator re-invokes manually.
    let gemini = GeminiClient::from_env()?;
    let calendar = gemini
        .generate_calendar(&session.presets, &request)
        .context("calendar generation failed")?;
    session.store_calendar(calendar);
    let calendar = session.calendar().context("no calendar in session")?;

    // Review & export phase.
    if json {
        print_json(calendar)?;
    } else {
        println!("Generated {} posts for {}.\n", calendar.len(), request.month);
        print_calendar(calendar);
    }
    if let Some(path) = &args.csv {
        export::write_csv(calendar, path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        if !json {
            println!("\nCSV written to {}", path.display());
        }
    }

    // Publishing phase, only when a destination was given.
    match (&args.board, &args.list) {
        (Some(board), Some(list)) => {
            publish_phase(&session, board, list, args.prefix.as_deref(), json)
        }
        (None, None) => Ok(()),
        _ => bail!("--board and --list must be used together"),
    }
}

fn publish_phase(
    session: &Session,
    board_selector: &str,
    list_selector: &str,
    prefix: Option<&str>,
    json: bool,
) -> anyhow::Result<()> {
    let trello = TrelloClient::from_env()?;
    let boards = trello.member_boards().context("failed to list boards")?;
    let board = super::find_board(&boards, board_selector)?;
    let lists = trello
        .board_lists(&board.id)
        .with_context(|| format!("failed to list lists of board '{}'", board.name))?;
    let list = super::find_list(&lists, list_selector)?;

    let calendar = session.calendar().context("no calendar to publish")?;
    let prefix = prefix.unwrap_or_else(|| session.presets.card_prefix());
    let report = publish_calendar(&trello, &list.id, prefix, calendar);

    for failure in &report.failures {
        eprintln!(
            "warning: card for {} failed: {}",
            failure.date, failure.error
        );
    }

    if json {
        #[derive(serde::Serialize)]
        struct PublishOutput<'a> {
            board: &'a str,
            list: &'a str,
            created: usize,
            failed: usize,
            urls: Vec<&'a str>,
        }
        return print_json(&PublishOutput {
            board: &board.name,
            list: &list.name,
            created: report.created.len(),
            failed: report.failures.len(),
            urls: report.created.iter().map(|c| c.link()).collect(),
        });
    }

    println!(
        "\nCreated {} cards in '{}' / '{}'.",
        report.created.len(),
        board.name,
        list.name
    );
    for card in &report.created {
        println!("  • {}", card.link());
    }
    Ok(())
}
