use hello_world_plugin::proto::plugin_server::Plugin as _;
use hello_world_plugin::{
    proto, Config, HelloWorldHandler, Plugin, PluginAdapter, Request, GUARD_MESSAGE,
    PROMPT_FRAGMENTS,
};
use serde::Deserialize;

const FIXED_FRAGMENT: &str = "In which year was the first Hello, World! printed in Go?";

#[derive(Debug, Deserialize)]
struct Guard {
    send_to_llm: bool,
    message: String,
}

fn handler() -> HelloWorldHandler {
    HelloWorldHandler::new(Config::default().with_fixed_fragment(FIXED_FRAGMENT))
}

fn content_for(handler: &HelloWorldHandler, text: &str) -> String {
    let resp = handler
        .execute(Request::new("id1", "prepare").with_arg("text", text))
        .unwrap();
    assert_eq!(resp.error, None, "unexpected error for {text:?}");
    resp.content.unwrap()
}

#[test]
fn hello_becomes_hello_world_with_fragment() {
    assert_eq!(
        content_for(&handler(), "hello"),
        "hello world\n\nIn which year was the first Hello, World! printed in Go?"
    );
}

#[test]
fn qualifying_inputs_split_into_two_parts() {
    let cases = [
        ("hello", "hello world"),
        ("hello world", "hello world"),
        ("  HELLO  ", "HELLO world"),
        ("oh hello, World", "oh hello, World"),
        ("hellO there", "hellO there world"),
    ];

    for (input, expected) in cases {
        let content = content_for(&handler(), input);
        let parts: Vec<&str> = content.splitn(2, "\n\n").collect();
        assert_eq!(parts.len(), 2, "content {content:?}");
        assert_eq!(parts[0], expected, "input {input:?}");
        assert_eq!(parts[1], FIXED_FRAGMENT);
    }
}

#[test]
fn transform_is_idempotent_on_its_own_output() {
    let first = content_for(&handler(), "hello");
    let transformed = first.split_once("\n\n").unwrap().0;

    let second = content_for(&handler(), transformed);
    assert_eq!(second.split_once("\n\n").unwrap().0, "hello world");
}

#[test]
fn non_qualifying_inputs_return_guard() {
    for input in ["foo bar", "", "   ", "hell o", "world"] {
        let content = content_for(&handler(), input);
        let guard: Guard = serde_json::from_str(&content)
            .unwrap_or_else(|e| panic!("content {content:?} is not JSON: {e}"));
        assert!(!guard.send_to_llm);
        assert_eq!(guard.message, GUARD_MESSAGE);
    }
}

#[test]
fn unknown_action_is_reported_in_response() {
    let resp = handler()
        .execute(Request::new("id1", "unknown").with_arg("text", "hello"))
        .unwrap();
    let error = resp.error.unwrap();
    assert!(error.contains("unknown"));
    assert!(error.contains("unknown action: unknown"));
}

#[test]
fn random_fragments_come_from_known_set() {
    let handler = HelloWorldHandler::new(Config::default());
    for _ in 0..100 {
        let content = content_for(&handler, "hello");
        let fragment = content.split_once("\n\n").unwrap().1;
        assert!(PROMPT_FRAGMENTS.contains(&fragment));
    }
}

#[test]
fn config_from_lookup_feeds_handler() {
    let config = Config::from_lookup(|key| {
        (key == "HELLO_WORLD_PROMPT_FRAGMENT").then(|| FIXED_FRAGMENT.to_string())
    });
    let content = content_for(&HelloWorldHandler::new(config), "hello");
    assert!(content.ends_with(FIXED_FRAGMENT));
}

#[tokio::test]
async fn grpc_adapter_serves_handler() {
    let adapter = PluginAdapter::new(handler());

    let caps = adapter
        .capabilities(tonic::Request::new(proto::Empty {}))
        .await
        .unwrap()
        .into_inner();
    assert_eq!(caps.name, "hello-world");
    assert_eq!(caps.actions[0].name, "prepare");
    assert_eq!(caps.actions[0].parameters[0].name, "text");

    let mut req = proto::Request {
        id: "abc".to_string(),
        action: "prepare".to_string(),
        ..Default::default()
    };
    req.args.insert("text".to_string(), "  HELLO  ".to_string());
    let resp = adapter
        .execute(tonic::Request::new(req))
        .await
        .unwrap()
        .into_inner();
    assert_eq!(resp.call_id, "abc");
    assert_eq!(resp.content, format!("HELLO world\n\n{FIXED_FRAGMENT}"));
    assert!(resp.error.is_empty());

    let unknown = proto::Request {
        id: "def".to_string(),
        action: "summarize".to_string(),
        ..Default::default()
    };
    let resp = adapter
        .execute(tonic::Request::new(unknown))
        .await
        .unwrap()
        .into_inner();
    assert_eq!(resp.error, "unknown action: summarize");
    assert!(resp.content.is_empty());
}
