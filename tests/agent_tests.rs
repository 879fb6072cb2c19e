//! Integration tests for the respond loop against a mocked
//! OpenAI-compatible completion endpoint.

use mnemo::prompt::build_system_prompt;
use mnemo::{Agent, AgentError, ChatMessage, MemoryStore, OpenAIClient};
use rstest::rstest;
use serde_json::{json, Value};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn completion_with_text(content: &str) -> Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "created": 1_700_000_000u32,
        "model": "gpt-4o-mini",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop",
            "logprobs": null
        }]
    })
}

fn completion_with_tool_call(tool_name: &str, arguments: &str) -> Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "created": 1_700_000_000u32,
        "model": "gpt-4o-mini",
        "choices": [{
            "index": 0,
            "message": {
                "role": "assistant",
                "content": null,
                "tool_calls": [{
                    "id": "call_1",
                    "type": "function",
                    "function": { "name": tool_name, "arguments": arguments }
                }]
            },
            "finish_reason": "tool_calls",
            "logprobs": null
        }]
    })
}

async fn mock_completion(server: &MockServer, body: Value) {
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

fn agent_for(server: &MockServer, store: &MemoryStore) -> Agent {
    let client = OpenAIClient::new(
        "test-key".to_string(),
        server.uri(),
        "gpt-4o-mini".to_string(),
    );
    Agent::with_save_memory(Box::new(client), store.clone())
}

fn history(user: &str, memories: &[String]) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(build_system_prompt(user, memories)),
        ChatMessage::user(user),
    ]
}

#[rstest]
#[case("4")]
#[case("The capital of France is Paris.")]
#[tokio::test]
async fn test_text_reply_is_returned_verbatim(#[case] content: &str) {
    let server = MockServer::start().await;
    mock_completion(&server, completion_with_text(content)).await;

    let dir = TempDir::new().unwrap();
    let store = MemoryStore::new(dir.path().join("memories.txt"));
    let agent = agent_for(&server, &store);

    let reply = agent.respond(&history("What's 2+2?", &[])).await.unwrap();
    assert_eq!(reply, content);
    assert!(store.load().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_save_memory_call_appends_in_order_and_confirms() {
    let server = MockServer::start().await;
    mock_completion(
        &server,
        completion_with_tool_call(
            "save_memory",
            r#"{"memories": ["User's favorite color is blue", "User lives in Lisbon"]}"#,
        ),
    )
    .await;

    let dir = TempDir::new().unwrap();
    let store = MemoryStore::new(dir.path().join("memories.txt"));
    let agent = agent_for(&server, &store);

    let reply = agent
        .respond(&history("My favorite color is blue", &[]))
        .await
        .unwrap();

    assert_eq!(reply, "Saved 2 memories.");
    assert_eq!(
        store.load().await.unwrap(),
        vec!["User's favorite color is blue", "User lives in Lisbon"]
    );
}

#[tokio::test]
async fn test_saved_memory_round_trips_into_next_prompt() {
    let server = MockServer::start().await;
    mock_completion(
        &server,
        completion_with_tool_call("save_memory", r#"{"memories": ["User likes tea"]}"#),
    )
    .await;

    let dir = TempDir::new().unwrap();
    let store = MemoryStore::new(dir.path().join("memories.txt"));
    let agent = agent_for(&server, &store);

    agent.respond(&history("I like tea", &[])).await.unwrap();

    let memories = store.load().await.unwrap();
    let next_prompt = build_system_prompt("", &memories);
    assert!(next_prompt.contains("User likes tea"));
}

#[tokio::test]
async fn test_unsupported_tool_is_an_explicit_fault() {
    let server = MockServer::start().await;
    mock_completion(
        &server,
        completion_with_tool_call("get_weather", r#"{"city": "Lisbon"}"#),
    )
    .await;

    let dir = TempDir::new().unwrap();
    let store = MemoryStore::new(dir.path().join("memories.txt"));
    let agent = agent_for(&server, &store);

    let result = agent.respond(&history("weather?", &[])).await;
    assert!(matches!(
        result,
        Err(AgentError::UnsupportedTool(name)) if name == "get_weather"
    ));
}

#[tokio::test]
async fn test_malformed_argument_shape_leaves_store_unchanged() {
    let server = MockServer::start().await;
    mock_completion(
        &server,
        completion_with_tool_call("save_memory", r#"{"memories": "not-a-list"}"#),
    )
    .await;

    let dir = TempDir::new().unwrap();
    let store = MemoryStore::new(dir.path().join("memories.txt"));
    let agent = agent_for(&server, &store);

    let result = agent.respond(&history("remember this", &[])).await;
    assert!(matches!(result, Err(AgentError::InvalidArguments(_))));
    assert!(store.load().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_unparseable_argument_string_is_a_fault() {
    let server = MockServer::start().await;
    mock_completion(
        &server,
        completion_with_tool_call("save_memory", "not json at all"),
    )
    .await;

    let dir = TempDir::new().unwrap();
    let store = MemoryStore::new(dir.path().join("memories.txt"));
    let agent = agent_for(&server, &store);

    let result = agent.respond(&history("remember this", &[])).await;
    assert!(matches!(result, Err(AgentError::InvalidArguments(_))));
    assert!(store.load().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_transport_fault_propagates_without_retry() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {
                "message": "bad request",
                "type": "invalid_request_error",
                "param": null,
                "code": null
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let store = MemoryStore::new(dir.path().join("memories.txt"));
    let agent = agent_for(&server, &store);

    let result = agent.respond(&history("hello", &[])).await;
    assert!(matches!(result, Err(AgentError::Llm(_))));
    assert!(store.load().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_request_carries_history_and_tool_declaration() {
    let server = MockServer::start().await;
    mock_completion(&server, completion_with_text("ok")).await;

    let dir = TempDir::new().unwrap();
    let store = MemoryStore::new(dir.path().join("memories.txt"));
    store.append(&["User likes tea".to_string()]).await.unwrap();
    let agent = agent_for(&server, &store);

    let memories = store.load().await.unwrap();
    agent.respond(&history("hi", &memories)).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1, "exactly one completion request per turn");

    let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body["model"], "gpt-4o-mini");
    assert_eq!(body["messages"][0]["role"], "system");
    assert!(body["messages"][0]["content"]
        .as_str()
        .unwrap()
        .contains("User likes tea"));
    assert_eq!(body["tools"][0]["function"]["name"], "save_memory");
}
