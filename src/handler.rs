//! The `prepare` action: turns "hello" into "hello world" and attaches a
//! Hello, World! trivia question for the LLM.

use crate::config::Config;
use crate::constants::{
    ACTION_PREPARE, FRAGMENT_SEPARATOR, GUARD_MESSAGE, PARAM_TEXT, PLUGIN_NAME, PROMPT_FRAGMENTS,
};
use crate::plugin::{Action, Capabilities, Parameter, Plugin, Request, Response};
use crate::Result;
use rand::Rng;
use serde::Serialize;
use tracing::{debug, warn};

const PLUGIN_DESCRIPTION: &str = "When the user types 'hello', adds 'world' (so 'hello' becomes \
'hello world') and attaches a random prompt fragment about Hello, World! history (first \
language, which year for C/Java/Ruby/Go etc.).";

const PREPARE_DESCRIPTION: &str = "If user text contains 'hello', add ' world' to it and return \
a random prompt fragment (e.g. which year Java/Ruby/Go first printed Hello, World!).";

const TEXT_DESCRIPTION: &str = "User message or text to transform";

/// Source of randomness for fragment selection.
pub trait FragmentPicker: Send + Sync + 'static {
    /// Returns an index in `0..len`. `len` is never zero.
    fn pick(&self, len: usize) -> usize;
}

/// Uniform pick backed by the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomPicker;

impl FragmentPicker for RandomPicker {
    fn pick(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Returned instead of the transform when the input does not mention "hello".
#[derive(Debug, Serialize)]
struct Guard {
    message: &'static str,
    send_to_llm: bool,
}

/// Handler for the hello-world plugin.
pub struct HelloWorldHandler<R = RandomPicker> {
    fixed_fragment: Option<String>,
    picker: R,
}

impl HelloWorldHandler<RandomPicker> {
    pub fn new(config: Config) -> Self {
        Self::with_picker(config, RandomPicker)
    }
}

impl<R: FragmentPicker> HelloWorldHandler<R> {
    pub fn with_picker(config: Config, picker: R) -> Self {
        Self {
            fixed_fragment: config.fixed_fragment,
            picker,
        }
    }

    fn pick_fragment(&self) -> &str {
        match &self.fixed_fragment {
            Some(fragment) => fragment,
            None => PROMPT_FRAGMENTS[self.picker.pick(PROMPT_FRAGMENTS.len())],
        }
    }

    fn prepare(&self, text: &str) -> Result<String> {
        if !text.trim().to_lowercase().contains("hello") {
            debug!("Input does not mention hello, returning guard");
            return guard_payload();
        }

        let mut transformed = text.trim().to_string();
        if !transformed.to_lowercase().ends_with("world") {
            transformed.push_str(" world");
        }

        let fragment = self.pick_fragment();
        Ok(format!("{transformed}{FRAGMENT_SEPARATOR}{fragment}"))
    }
}

impl<R: FragmentPicker> Plugin for HelloWorldHandler<R> {
    fn capabilities(&self) -> Capabilities {
        Capabilities {
            name: PLUGIN_NAME.to_string(),
            description: PLUGIN_DESCRIPTION.to_string(),
            actions: vec![Action {
                name: ACTION_PREPARE.to_string(),
                description: PREPARE_DESCRIPTION.to_string(),
                parameters: vec![Parameter {
                    name: PARAM_TEXT.to_string(),
                    description: TEXT_DESCRIPTION.to_string(),
                    kind: "string".to_string(),
                    required: true,
                }],
            }],
        }
    }

    fn execute(&self, request: Request) -> Result<Response> {
        debug!("Executing {} for call {}", request.action, request.id);

        if request.action != ACTION_PREPARE {
            let error = format!("unknown action: {}", request.action);
            warn!("Rejecting call {}: {}", request.id, error);
            return Ok(Response::error(request.id, error));
        }

        let content = self.prepare(request.arg(PARAM_TEXT))?;
        Ok(Response::content(request.id, content))
    }
}

fn guard_payload() -> Result<String> {
    let guard = Guard {
        message: GUARD_MESSAGE,
        send_to_llm: false,
    };
    Ok(serde_json::to_string(&guard)?)
}
