pub mod boards;
pub mod init;
pub mod lists;
pub mod plan;

use anyhow::bail;
use trello_client::{Board, BoardList};

/// Resolve a board by id or exact name.
pub(crate) fn find_board<'a>(boards: &'a [Board], selector: &str) -> anyhow::Result<&'a Board> {
    if let Some(board) = boards
        .iter()
        .find(|b| b.id == selector || b.name == selector)
    {
        return Ok(board);
    }
    let names: Vec<&str> = boards.iter().map(|b| b.name.as_str()).collect();
    bail!(
        "board '{}' not found; available boards: {}",
        selector,
        names.join(", ")
    )
}

/// Resolve a list by id or exact name.
pub(crate) fn find_list<'a>(lists: &'a [BoardList], selector: &str) -> anyhow::Result<&'a BoardList> {
    if let Some(list) = lists.iter().find(|l| l.id == selector || l.name == selector) {
        return Ok(list);
    }
    let names: Vec<&str> = lists.iter().map(|l| l.name.as_str()).collect();
    bail!(
        "list '{}' not found; available lists: {}",
        selector,
        names.join(", ")
    )
}
