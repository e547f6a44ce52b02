use planner_core::{card_draft, ContentCalendar};
use trello_client::{Card, TrelloClient, TrelloError};

/// Seam over card creation so the publishing loop can be exercised without a
/// live board service.
pub trait CardCreator {
    fn create_card(
        &self,
        list_id: &str,
        name: &str,
        desc: &str,
        due: Option<&str>,
        labels: &[String],
    ) -> Result<Card, TrelloError>;
}

impl CardCreator for TrelloClient {
    fn create_card(
        &self,
        list_id: &str,
        name: &str,
        desc: &str,
        due: Option<&str>,
        labels: &[String],
    ) -> Result<Card, TrelloError> {
        TrelloClient::create_card(self, list_id, name, desc, due, labels)
    }
}

/// One row that failed to publish.
#[derive(Debug)]
pub struct RowFailure {
    pub date: String,
    pub error: String,
}

/// Outcome of one publishing run, in processing order.
#[derive(Debug, Default)]
pub struct PublishReport {
    pub created: Vec<Card>,
    pub failures: Vec<RowFailure>,
}

/// Create one card per calendar row, strictly in order. A row's failure is
/// recorded and the loop moves on; it never aborts the batch. Running this
/// twice creates duplicate cards; deduplication is the operator's call.
pub fn publish_calendar(
    creator: &impl CardCreator,
    list_id: &str,
    prefix: &str,
    calendar: &ContentCalendar,
) -> PublishReport {
    let mut report = PublishReport::default();
    for item in calendar.iter() {
        let draft = card_draft(item, prefix);
        match creator.create_card(
            list_id,
            &draft.name,
            &draft.description,
            draft.due.as_deref(),
            &draft.labels,
        ) {
            Ok(card) => report.created.push(card),
            Err(err) => report.failures.push(RowFailure {
                date: item.date.clone(),
                error: err.to_string(),
            }),
        }
    }
    report
}
