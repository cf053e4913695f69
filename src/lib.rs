//! # hello-world-plugin
//!
//! A single-action plugin for the opentalon plugin host. When the user's text
//! mentions "hello", the `prepare` action appends " world" and attaches a
//! random trivia question about the history of Hello, World! programs. Any
//! other text is answered with a guard payload telling the host not to forward
//! it to the LLM.
//!
//! ## Behavior
//!
//! - `"hello"` becomes `"hello world\n\n<fragment>"`
//! - `"  HELLO  "` becomes `"HELLO world\n\n<fragment>"` (casing kept, whitespace trimmed)
//! - `"hello world"` is left as is, so "world" is never doubled
//! - anything without "hello" (including empty text) yields
//!   `{"send_to_llm":false,"message":"..."}`
//! - any action other than `prepare` yields `error = "unknown action: <action>"`
//!
//! Setting `HELLO_WORLD_PROMPT_FRAGMENT` pins the fragment for every call.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use hello_world_plugin::{serve, Config, HelloWorldHandler};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let handler = HelloWorldHandler::new(Config::from_env());
//!     serve(handler, None).await?;
//!     Ok(())
//! }
//! ```
//!
//! Run the plugin:
//!
//! ```bash
//! cargo run -- --address /tmp/hello-world.sock --network unix
//! ```
//!
//! The handler can also be driven directly through the [`Plugin`] trait:
//!
//! ```rust
//! use hello_world_plugin::{Config, HelloWorldHandler, Plugin, Request};
//!
//! let handler = HelloWorldHandler::new(Config::default().with_fixed_fragment("Why?"));
//! let response = handler
//!     .execute(Request::new("1", "prepare").with_arg("text", "hello"))
//!     .unwrap();
//! assert_eq!(response.content.as_deref(), Some("hello world\n\nWhy?"));
//! ```

pub mod proto;

mod config;
mod constants;
mod error;
mod handler;
mod plugin;
mod server;

// Re-export public API.
pub use config::Config;
pub use constants::{
    ACTION_PREPARE, FIXED_FRAGMENT_ENV, GUARD_MESSAGE, PARAM_TEXT, PLUGIN_NAME, PROMPT_FRAGMENTS,
};
pub use error::{PluginError, Result};
pub use handler::{FragmentPicker, HelloWorldHandler, RandomPicker};
pub use plugin::{Action, Capabilities, Parameter, Plugin, PluginAdapter, Request, Response};
pub use server::serve;
