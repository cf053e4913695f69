//! Wire types for the `opentalon.plugin.v1.Plugin` gRPC service.

use std::collections::HashMap;

/// Placeholder for calls that carry no payload.
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct Empty {}

/// A single call from the host.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Request {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub action: String,
    #[prost(map = "string, string", tag = "3")]
    pub args: HashMap<String, String>,
}

/// Result of a call. An empty `content` or `error` means the field is unset.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Response {
    #[prost(string, tag = "1")]
    pub call_id: String,
    #[prost(string, tag = "2")]
    pub content: String,
    #[prost(string, tag = "3")]
    pub error: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Parameter {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, tag = "2")]
    pub description: String,
    #[prost(string, tag = "3")]
    pub r#type: String,
    #[prost(bool, tag = "4")]
    pub required: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Action {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, tag = "2")]
    pub description: String,
    #[prost(message, repeated, tag = "3")]
    pub parameters: Vec<Parameter>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Capabilities {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, tag = "2")]
    pub description: String,
    #[prost(message, repeated, tag = "3")]
    pub actions: Vec<Action>,
}

// Generated service glue (see build.rs).
#[allow(clippy::all)]
#[allow(missing_docs)]
mod generated {
    include!(concat!(env!("OUT_DIR"), "/opentalon.plugin.v1.Plugin.rs"));
}

pub use generated::plugin_server;
