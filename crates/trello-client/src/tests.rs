/// Wire-level tests against a mock Trello server.
#[cfg(test)]
mod unit {
    use crate::{TrelloClient, TrelloError};
    use mockito::Matcher;

    fn client(server: &mockito::Server) -> TrelloClient {
        TrelloClient::new("k", "t")
            .unwrap()
            .with_base_url(server.url())
    }

    const CARD_BODY: &str = r#"{"id":"card1","name":"2025-11-03 · P · X","url":"https://trello.com/c/card1/long","shortUrl":"https://trello.com/c/card1"}"#;

    #[test]
    fn empty_credentials_fail_at_construction() {
        assert!(matches!(
            TrelloClient::new("", "t"),
            Err(TrelloError::MissingCredentials)
        ));
        assert!(matches!(
            TrelloClient::new("k", ""),
            Err(TrelloError::MissingCredentials)
        ));
    }

    #[test]
    fn member_boards_filters_archived_boards() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/members/me/boards")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("key".into(), "k".into()),
                Matcher::UrlEncoded("token".into(), "t".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"[{"id":"b1","name":"Conteúdo","closed":false},
                    {"id":"b2","name":"Arquivo","closed":true}]"#,
            )
            .create();

        let boards = client(&server).member_boards().unwrap();

        mock.assert();
        assert_eq!(boards.len(), 1);
        assert_eq!(boards[0].id, "b1");
        assert_eq!(boards[0].name, "Conteúdo");
    }

    #[test]
    fn non_2xx_maps_to_api_error_with_status() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", "/boards/b1/lists")
            .match_query(Matcher::Any)
            .with_status(401)
            .with_body("invalid token")
            .create();

        let err = client(&server).board_lists("b1").unwrap_err();
        let TrelloError::Api { status, body, .. } = err else {
            panic!("expected Api error")
        };
        assert_eq!(status, 401);
        assert_eq!(body, "invalid token");
    }

    #[test]
    fn create_card_sends_list_name_desc_and_due() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/cards")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("idList".into(), "l1".into()),
                Matcher::UrlEncoded("name".into(), "2025-11-03 · P · X".into()),
                Matcher::UrlEncoded("desc".into(), "descrição".into()),
                Matcher::UrlEncoded("due".into(), "2025-11-03".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(CARD_BODY)
            .create();

        let card = client(&server)
            .create_card("l1", "2025-11-03 · P · X", "descrição", Some("2025-11-03"), &[])
            .unwrap();

        mock.assert();
        assert_eq!(card.id, "card1");
        assert_eq!(card.link(), "https://trello.com/c/card1");
    }

    #[test]
    fn empty_labels_issue_zero_label_calls() {
        let mut server = mockito::Server::new();
        let card_mock = server
            .mock("POST", "/cards")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(CARD_BODY)
            .create();
        let label_mock = server
            .mock("POST", Matcher::Regex(r"^/cards/.+/labels$".to_string()))
            .match_query(Matcher::Any)
            .expect(0)
            .create();

        client(&server)
            .create_card("l1", "n", "d", None, &[])
            .unwrap();

        card_mock.assert();
        label_mock.assert();
    }

    #[test]
    fn labels_are_attached_as_uncolored_named_labels() {
        let mut server = mockito::Server::new();
        server
            .mock("POST", "/cards")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(CARD_BODY)
            .create();
        let label_mock = server
            .mock("POST", "/cards/card1/labels")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("color".into(), "null".into()),
                Matcher::UrlEncoded("name".into(), "Bastidores".into()),
            ]))
            .with_status(200)
            .with_body("{}")
            .create();

        client(&server)
            .create_card("l1", "n", "d", None, &["Bastidores".to_string()])
            .unwrap();

        label_mock.assert();
    }

    #[test]
    fn label_failure_is_swallowed_and_card_is_returned() {
        let mut server = mockito::Server::new();
        server
            .mock("POST", "/cards")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(CARD_BODY)
            .create();
        let label_mock = server
            .mock("POST", "/cards/card1/labels")
            .match_query(Matcher::Any)
            .with_status(500)
            .with_body("boom")
            .expect(2)
            .create();

        let card = client(&server)
            .create_card(
                "l1",
                "n",
                "d",
                None,
                &["Bastidores".to_string(), "Reel".to_string()],
            )
            .unwrap();

        label_mock.assert();
        assert_eq!(card.id, "card1");
    }

    #[test]
    fn card_link_falls_back_to_long_url() {
        let card: crate::Card =
            serde_json::from_str(r#"{"id":"c","url":"https://trello.com/c/c/long"}"#).unwrap();
        assert_eq!(card.link(), "https://trello.com/c/c/long");
    }
}
