use crate::output::{print_json, print_table};
use anyhow::Context;
use trello_client::TrelloClient;

pub fn run(json: bool) -> anyhow::Result<()> {
    let trello = TrelloClient::from_env()?;
    let boards = trello.member_boards().context("failed to list boards")?;

    if json {
        return print_json(&boards);
    }
    let rows: Vec<Vec<String>> = boards
        .iter()
        .map(|b| vec![b.id.clone(), b.name.clone()])
        .collect();
    print_table(&["id", "name"], rows);
    Ok(())
}
