use arrival::{
    model::message::SenderType,
    state::messaging::{MessagingFetch, MessagingPanel},
};
use mockito::Matcher;
use serde_json::json;

use super::*;

/// Tests opening a student's conversation from the admin dashboard.
///
/// Verifies that opening resolves the conversation, reads its messages and then marks them
/// read once for the admin side.
///
/// Expected: two messages shown, one mark-read call with reader_type=ADMIN
#[tokio::test]
async fn open_reads_messages_and_marks_read() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_get(
            "/api/students/s1/conversation",
            factory::conversation("conv1", "s1"),
            1,
        )
        .with_get(
            "/api/conversations/conv1/messages",
            json!([
                factory::message("m1", "conv1", "STUDENT", "Hi, my visa letter?"),
                factory::message("m2", "conv1", "ADMIN", "On its way")
            ]),
            1,
        )
        .with_mock_endpoint(|server| {
            server
                .mock("POST", "/api/conversations/conv1/mark-read")
                .match_query(Matcher::UrlEncoded(
                    "reader_type".to_string(),
                    "ADMIN".to_string(),
                ))
                .with_status(200)
                .expect(1)
                .create()
        })
        .build()
        .await?;
    let client = api(&test);

    let (mut panel, mut fetches) = MessagingPanel::for_admin().open("s1".to_string());
    while let Some(fetch) = fetches.pop() {
        let (next, more) = panel.fetched(fetch.run(&client).await);
        panel = next;
        fetches.extend(more);
    }

    assert_eq!(panel.conversation().map(|c| c.id.as_str()), Some("conv1"));
    assert_eq!(panel.messages.len(), 2);
    assert!(panel.is_own(&panel.messages.items()[1]));
    assert!(!panel.is_loading());
    test.assert_mocks();

    Ok(())
}

/// Tests sending a message as the student.
///
/// Verifies the message is posted with the student's sender id and the list is re-read.
///
/// Expected: draft cleared, refreshed list shown, mark-read follows
#[tokio::test]
async fn send_posts_and_refetches() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_get(
            "/api/students/s1/conversation",
            factory::conversation("conv1", "s1"),
            1,
        )
        .with_get("/api/conversations/conv1/messages", json!([]), 1)
        .with_mock_endpoint(|server| {
            server
                .mock("POST", "/api/conversations/conv1/messages")
                .match_body(Matcher::Json(json!({
                    "sender_type": "STUDENT",
                    "sender_id": "s1",
                    "content": "Hello"
                })))
                .with_status(201)
                .with_header("content-type", "application/json")
                .with_body("{}")
                .expect(1)
                .create()
        })
        .with_get(
            "/api/conversations/conv1/messages",
            json!([factory::message("m1", "conv1", "STUDENT", "Hello")]),
            1,
        )
        .with_post("/api/conversations/conv1/mark-read", json!({}), 2)
        .build()
        .await?;
    let client = api(&test);

    let (mut panel, mut fetches) = MessagingPanel::for_student("s1").open("s1".to_string());
    while let Some(fetch) = fetches.pop() {
        let (next, more) = panel.fetched(fetch.run(&client).await);
        panel = next;
        fetches.extend(more);
    }
    assert!(panel.messages.is_empty());

    panel.draft = "  Hello ".to_string();
    let (panel, send) = panel.send();
    assert!(panel.is_sending());

    let (panel, more) = panel.sent(send.unwrap().commit(&client).await);

    assert!(panel.draft.is_empty());
    assert!(!panel.is_sending());
    assert_eq!(panel.messages.items()[0].sender_type, SenderType::Student);
    assert!(matches!(
        more.as_slice(),
        [MessagingFetch::MarkRead {
            reader: SenderType::Student,
            ..
        }]
    ));

    for fetch in more {
        let (_, rest) = panel.clone().fetched(fetch.run(&client).await);
        assert!(rest.is_empty());
    }
    test.assert_mocks();

    Ok(())
}
