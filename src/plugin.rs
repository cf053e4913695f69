use crate::proto::{self, plugin_server::Plugin as PluginService};
use crate::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tonic::Status;

/// A call from the host: which action to run and its string arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    /// Correlation token, echoed back as [`Response::call_id`].
    pub id: String,
    pub action: String,
    #[serde(default)]
    pub args: HashMap<String, String>,
}

impl Request {
    pub fn new(id: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            action: action.into(),
            args: HashMap::new(),
        }
    }

    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.args.insert(key.into(), value.into());
        self
    }

    /// Returns the argument value, or `""` when the key is absent.
    pub fn arg(&self, key: &str) -> &str {
        self.args.get(key).map(String::as_str).unwrap_or_default()
    }
}

/// Outcome of a call. Exactly one of `content` and `error` is set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub call_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Response {
    pub fn content(call_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            call_id: call_id.into(),
            content: Some(content.into()),
            error: None,
        }
    }

    pub fn error(call_id: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            call_id: call_id.into(),
            content: None,
            error: Some(error.into()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Static description of what a plugin offers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    pub name: String,
    pub description: String,
    pub actions: Vec<Action>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub name: String,
    pub description: String,
    pub parameters: Vec<Parameter>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub required: bool,
}

/// The two operations a host needs from a plugin.
///
/// Implementations know nothing about the transport; [`PluginAdapter`] maps
/// them onto the gRPC service.
///
/// # Example
///
/// ```rust
/// use hello_world_plugin::{Capabilities, Plugin, Request, Response, Result};
///
/// struct Echo;
///
/// impl Plugin for Echo {
///     fn capabilities(&self) -> Capabilities {
///         Capabilities {
///             name: "echo".to_string(),
///             ..Default::default()
///         }
///     }
///
///     fn execute(&self, request: Request) -> Result<Response> {
///         let text = request.arg("text").to_string();
///         Ok(Response::content(request.id, text))
///     }
/// }
/// ```
pub trait Plugin: Send + Sync + 'static {
    /// Describes the plugin and its actions. Must not depend on any request.
    fn capabilities(&self) -> Capabilities;

    /// Runs one request.
    ///
    /// Problems the caller should see (such as an unknown action) belong in
    /// [`Response::error`]. `Err` is for internal failures only and reaches the
    /// host as a gRPC status.
    fn execute(&self, request: Request) -> Result<Response>;
}

impl From<proto::Request> for Request {
    fn from(req: proto::Request) -> Self {
        Self {
            id: req.id,
            action: req.action,
            args: req.args,
        }
    }
}

impl From<Response> for proto::Response {
    fn from(resp: Response) -> Self {
        Self {
            call_id: resp.call_id,
            content: resp.content.unwrap_or_default(),
            error: resp.error.unwrap_or_default(),
        }
    }
}

impl From<Parameter> for proto::Parameter {
    fn from(param: Parameter) -> Self {
        Self {
            name: param.name,
            description: param.description,
            r#type: param.kind,
            required: param.required,
        }
    }
}

impl From<Action> for proto::Action {
    fn from(action: Action) -> Self {
        Self {
            name: action.name,
            description: action.description,
            parameters: action.parameters.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<Capabilities> for proto::Capabilities {
    fn from(caps: Capabilities) -> Self {
        Self {
            name: caps.name,
            description: caps.description,
            actions: caps.actions.into_iter().map(Into::into).collect(),
        }
    }
}

/// Adapter that implements the generated gRPC service trait using our Plugin trait.
pub struct PluginAdapter<P: Plugin> {
    plugin: P,
}

impl<P: Plugin> PluginAdapter<P> {
    pub fn new(plugin: P) -> Self {
        Self { plugin }
    }
}

#[tonic::async_trait]
impl<P: Plugin> PluginService for PluginAdapter<P> {
    async fn capabilities(
        &self,
        _request: tonic::Request<proto::Empty>,
    ) -> std::result::Result<tonic::Response<proto::Capabilities>, Status> {
        Ok(tonic::Response::new(self.plugin.capabilities().into()))
    }

    async fn execute(
        &self,
        request: tonic::Request<proto::Request>,
    ) -> std::result::Result<tonic::Response<proto::Response>, Status> {
        let response = self.plugin.execute(request.into_inner().into())?;
        Ok(tonic::Response::new(response.into()))
    }

    async fn check_health(
        &self,
        _request: tonic::Request<proto::Empty>,
    ) -> std::result::Result<tonic::Response<proto::Empty>, Status> {
        Ok(tonic::Response::new(proto::Empty {}))
    }
}
