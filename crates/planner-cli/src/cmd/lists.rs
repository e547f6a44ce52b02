use crate::output::{print_json, print_table};
use anyhow::Context;
use trello_client::TrelloClient;

pub fn run(board_selector: &str, json: bool) -> anyhow::Result<()> {
    let trello = TrelloClient::from_env()?;
    let boards = trello.member_boards().context("failed to list boards")?;
    let board = super::find_board(&boards, board_selector)?;
    let lists = trello
        .board_lists(&board.id)
        .with_context(|| format!("failed to list lists of board '{}'", board.name))?;

    if json {
        return print_json(&lists);
    }
    let rows: Vec<Vec<String>> = lists
        .iter()
        .map(|l| vec![l.id.clone(), l.name.clone()])
        .collect();
    print_table(&["id", "name"], rows);
    Ok(())
}
