//! CATS MCP tools
//!
//! Every tool is a thin mapping from MCP arguments to one CATS API call. The
//! mappings are declared as [`Endpoint`] tables, one submodule per toolset
//! family, and served by the generic [`EndpointTool`]:
//! - Default: candidates, jobs, pipelines, context, tasks
//! - Recruiting: companies, contacts, activities, portals, work history
//! - Data: tags, webhooks, users, triggers, attachments, backups, events

pub mod activities;
pub mod candidates;
pub mod companies;
pub mod contacts;
pub mod context;
pub mod data;
pub mod jobs;
pub mod pipelines;
pub mod portals;
pub mod tasks;
pub mod work_history;

use crate::clients::gateway::{ApiRequest, RequestGateway};
use crate::server::{McpServerError, McpServerResult, Tool, ToolContext};
use crate::summarize::summarize_list_response;
use crate::toolset::Toolset;
use crate::types::{ToolDefinition, ToolResult};
use async_trait::async_trait;
use reqwest::Method;
use serde_json::{json, Map, Value};
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{debug, instrument};

/// JSON type accepted for an argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    Integer,
    String,
    Boolean,
    Object,
    IntegerArray,
    StringArray,
    /// Integer or string identifier.
    Id,
}

impl ParamKind {
    fn accepts(self, value: &Value) -> bool {
        match self {
            ParamKind::Integer => value.is_i64() || value.is_u64(),
            ParamKind::String => value.is_string(),
            ParamKind::Boolean => value.is_boolean(),
            ParamKind::Object => value.is_object(),
            ParamKind::IntegerArray => value
                .as_array()
                .is_some_and(|items| items.iter().all(|v| v.is_i64() || v.is_u64())),
            ParamKind::StringArray => value
                .as_array()
                .is_some_and(|items| items.iter().all(Value::is_string)),
            ParamKind::Id => value.is_i64() || value.is_u64() || value.is_string(),
        }
    }

    fn expected(self) -> &'static str {
        match self {
            ParamKind::Integer => "an integer",
            ParamKind::String => "a string",
            ParamKind::Boolean => "a boolean",
            ParamKind::Object => "an object",
            ParamKind::IntegerArray => "an array of integers",
            ParamKind::StringArray => "an array of strings",
            ParamKind::Id => "an integer or string identifier",
        }
    }

    fn schema(self) -> Value {
        match self {
            ParamKind::Integer => json!({"type": "integer"}),
            ParamKind::String => json!({"type": "string"}),
            ParamKind::Boolean => json!({"type": "boolean"}),
            ParamKind::Object => json!({"type": "object"}),
            ParamKind::IntegerArray => json!({"type": "array", "items": {"type": "integer"}}),
            ParamKind::StringArray => json!({"type": "array", "items": {"type": "string"}}),
            ParamKind::Id => json!({"type": ["integer", "string"]}),
        }
    }
}

/// Where an argument ends up in the outgoing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// Substituted into `{name}` in the path template.
    Path,
    /// Query parameter with the given key.
    Query(&'static str),
    /// Body member with the given key.
    Body(&'static str),
    /// Object whose members are merged into the body.
    MergeBody,
    /// Object sent as the whole body.
    WholeBody,
    /// Consumed by the tool itself, never sent.
    Local,
}

/// One tool argument.
#[derive(Debug, Clone)]
pub struct Param {
    pub name: &'static str,
    pub kind: ParamKind,
    pub location: Location,
    pub required: bool,
    pub default: Option<Value>,
    pub description: &'static str,
}

impl Param {
    fn new(name: &'static str, kind: ParamKind, location: Location, description: &'static str) -> Self {
        Self {
            name,
            kind,
            location,
            required: false,
            default: None,
            description,
        }
    }

    /// Required path segment.
    pub fn path(name: &'static str, kind: ParamKind, description: &'static str) -> Self {
        Self::new(name, kind, Location::Path, description).required()
    }

    /// Optional query parameter sent under its own name.
    pub fn query(name: &'static str, kind: ParamKind, description: &'static str) -> Self {
        Self::new(name, kind, Location::Query(name), description)
    }

    /// Optional body member sent under its own name.
    pub fn body(name: &'static str, kind: ParamKind, description: &'static str) -> Self {
        Self::new(name, kind, Location::Body(name), description)
    }

    /// Required object merged into the body.
    pub fn merge(name: &'static str, description: &'static str) -> Self {
        Self::new(name, ParamKind::Object, Location::MergeBody, description).required()
    }

    /// Required object sent as the request body.
    pub fn whole_body(name: &'static str, description: &'static str) -> Self {
        Self::new(name, ParamKind::Object, Location::WholeBody, description).required()
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Value sent when the caller omits the argument.
    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Send the argument under a different wire key.
    pub fn as_key(mut self, key: &'static str) -> Self {
        self.location = match self.location {
            Location::Query(_) => Location::Query(key),
            Location::Body(_) => Location::Body(key),
            other => other,
        };
        self
    }

    /// Move a query parameter into the body, keeping its key.
    pub fn in_body(mut self) -> Self {
        if let Location::Query(key) = self.location {
            self.location = Location::Body(key);
        }
        self
    }

    fn schema(&self) -> Value {
        let mut schema = self.kind.schema();
        if let Value::Object(ref mut map) = schema {
            map.insert("description".to_string(), json!(self.description));
            if let Some(ref default) = self.default {
                map.insert("default".to_string(), default.clone());
            }
        }
        schema
    }
}

/// `per_page` query parameter.
pub fn per_page(default: i64) -> Param {
    Param::query("per_page", ParamKind::Integer, "Number of results per page").with_default(default)
}

/// `page` query parameter, defaulting to the first page.
pub fn page() -> Param {
    Param::query("page", ParamKind::Integer, "Page number").with_default(1)
}

/// `fields` value that skips summarization and returns the raw API response.
pub const FULL_RESPONSE: &str = "all";

/// Comma-separated field selection for summarized list tools.
pub fn fields() -> Param {
    Param::new(
        "fields",
        ParamKind::String,
        Location::Local,
        "Comma-separated fields to return per item, or \"all\" for the full response (default: summary fields)",
    )
}

/// Declarative description of one tool.
#[derive(Debug, Clone)]
pub struct Endpoint {
    pub name: &'static str,
    pub description: &'static str,
    pub toolset: Option<Toolset>,
    pub method: Method,
    pub path: &'static str,
    pub params: Vec<Param>,
    pub constants: Vec<(&'static str, Value)>,
    /// Entity type used to summarize the list response.
    pub summarize: Option<&'static str>,
}

impl Endpoint {
    pub fn new(method: Method, name: &'static str, path: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            toolset: None,
            method,
            path,
            params: Vec::new(),
            constants: Vec::new(),
            summarize: None,
        }
    }

    pub fn get(name: &'static str, path: &'static str, description: &'static str) -> Self {
        Self::new(Method::GET, name, path, description)
    }

    pub fn post(name: &'static str, path: &'static str, description: &'static str) -> Self {
        Self::new(Method::POST, name, path, description)
    }

    pub fn put(name: &'static str, path: &'static str, description: &'static str) -> Self {
        Self::new(Method::PUT, name, path, description)
    }

    pub fn delete(name: &'static str, path: &'static str, description: &'static str) -> Self {
        Self::new(Method::DELETE, name, path, description)
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    /// Fixed body member sent on every call.
    pub fn constant(mut self, key: &'static str, value: impl Into<Value>) -> Self {
        self.constants.push((key, value.into()));
        self
    }

    /// Summarize the response as a list of `entity_type` and accept `fields`.
    pub fn summarized(mut self, entity_type: &'static str) -> Self {
        self.summarize = Some(entity_type);
        self.params.push(fields());
        self
    }

    pub fn in_toolset(mut self, toolset: Toolset) -> Self {
        self.toolset = Some(toolset);
        self
    }

    /// MCP definition with the JSON schema derived from the parameters.
    pub fn definition(&self) -> ToolDefinition {
        let properties: Map<String, Value> = self
            .params
            .iter()
            .map(|p| (p.name.to_string(), p.schema()))
            .collect();
        let required: Vec<&str> = self
            .params
            .iter()
            .filter(|p| p.required)
            .map(|p| p.name)
            .collect();

        let definition = ToolDefinition::new(self.name, self.description).with_schema(json!({
            "type": "object",
            "properties": properties,
            "required": required
        }));

        match self.toolset {
            Some(toolset) => definition.with_toolset(toolset),
            None => definition,
        }
    }

    /// Validate `args` and build the API request.
    ///
    /// Absent and `null` optional arguments are omitted. Arguments are
    /// applied in declaration order, so explicit body keys declared after a
    /// merged object take precedence over its members.
    pub fn build_request(&self, args: &Value) -> McpServerResult<ApiRequest> {
        let empty = Map::new();
        let args = match args {
            Value::Object(map) => map,
            Value::Null => &empty,
            _ => {
                return Err(McpServerError::InvalidParams(
                    "Arguments must be an object".to_string(),
                ))
            }
        };

        let mut path = self.path.to_string();
        let mut request = ApiRequest::new(self.method.clone(), String::new());
        let mut body = Map::new();
        let mut whole_body = None;

        for param in &self.params {
            let value = match args.get(param.name).filter(|v| !v.is_null()) {
                Some(value) => value.clone(),
                None => match param.default {
                    Some(ref default) => default.clone(),
                    None if param.required => {
                        return Err(McpServerError::InvalidParams(format!(
                            "Missing required parameter: {}",
                            param.name
                        )))
                    }
                    None => continue,
                },
            };

            if !param.kind.accepts(&value) {
                return Err(McpServerError::InvalidParams(format!(
                    "Parameter '{}' must be {}",
                    param.name,
                    param.kind.expected()
                )));
            }

            match param.location {
                Location::Path => {
                    let segment = match value {
                        Value::String(ref s) => s.clone(),
                        ref other => other.to_string(),
                    };
                    path = path.replace(
                        &format!("{{{}}}", param.name),
                        &urlencoding::encode(&segment),
                    );
                }
                Location::Query(key) => {
                    request.query.insert(key.to_string(), value);
                }
                Location::Body(key) => {
                    body.insert(key.to_string(), value);
                }
                Location::MergeBody => {
                    if let Value::Object(members) = value {
                        body.extend(members);
                    }
                }
                Location::WholeBody => whole_body = Some(value),
                Location::Local => {}
            }
        }

        for (key, value) in &self.constants {
            body.insert(key.to_string(), value.clone());
        }

        request.path = path;
        request.body = match whole_body {
            Some(value) => Some(value),
            None if self.sends_body() => Some(Value::Object(body)),
            None => None,
        };
        Ok(request)
    }

    fn sends_body(&self) -> bool {
        !self.constants.is_empty()
            || self.params.iter().any(|p| {
                matches!(
                    p.location,
                    Location::Body(_) | Location::MergeBody | Location::WholeBody
                )
            })
    }
}

/// [`Tool`] that executes an [`Endpoint`] through the gateway.
pub struct EndpointTool {
    endpoint: Endpoint,
    gateway: Arc<RequestGateway>,
}

impl EndpointTool {
    pub fn new(endpoint: Endpoint, gateway: Arc<RequestGateway>) -> Self {
        Self { endpoint, gateway }
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }
}

#[async_trait]
impl Tool for EndpointTool {
    fn definition(&self) -> ToolDefinition {
        self.endpoint.definition()
    }

    #[instrument(skip(self, args, _context), fields(tool = self.endpoint.name))]
    async fn execute(&self, args: Value, _context: &ToolContext) -> McpServerResult<ToolResult> {
        let request = self.endpoint.build_request(&args)?;
        debug!("Calling {} {}", request.method, request.path);

        let raw = self.gateway.execute(request).await?;

        let fields = args.get("fields").and_then(Value::as_str);
        let result = match (self.endpoint.summarize, fields) {
            (Some(_), Some(FULL_RESPONSE)) | (None, _) => raw,
            (Some(entity_type), fields) => summarize_list_response(Some(&raw), entity_type, fields),
        };
        Ok(ToolResult::json(result))
    }
}

/// Endpoint table for one toolset.
pub fn endpoints(toolset: Toolset) -> Vec<Endpoint> {
    let endpoints = match toolset {
        Toolset::Candidates => candidates::endpoints(),
        Toolset::Jobs => jobs::endpoints(),
        Toolset::Pipelines => pipelines::endpoints(),
        Toolset::Context => context::endpoints(),
        Toolset::Tasks => tasks::endpoints(),
        Toolset::Companies => companies::endpoints(),
        Toolset::Contacts => contacts::endpoints(),
        Toolset::Activities => activities::endpoints(),
        Toolset::Portals => portals::endpoints(),
        Toolset::WorkHistory => work_history::endpoints(),
        Toolset::Tags => data::tags(),
        Toolset::Webhooks => data::webhooks(),
        Toolset::Users => data::users(),
        Toolset::Triggers => data::triggers(),
        Toolset::Attachments => data::attachments(),
        Toolset::Backups => data::backups(),
        Toolset::Events => data::events(),
    };

    endpoints
        .into_iter()
        .map(|endpoint| endpoint.in_toolset(toolset))
        .collect()
}

/// Tools for the selected toolsets, in catalogue order.
pub fn tools_for(selected: &BTreeSet<Toolset>, gateway: Arc<RequestGateway>) -> Vec<Arc<dyn Tool>> {
    Toolset::ALL
        .into_iter()
        .filter(|toolset| selected.contains(toolset))
        .flat_map(endpoints)
        .map(|endpoint| Arc::new(EndpointTool::new(endpoint, gateway.clone())) as Arc<dyn Tool>)
        .collect()
}

/// Every tool in every toolset.
pub fn all_tools(gateway: Arc<RequestGateway>) -> Vec<Arc<dyn Tool>> {
    tools_for(&Toolset::ALL.into_iter().collect(), gateway)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::config::ApiConfig;
    use std::collections::HashSet;

    fn gateway() -> Arc<RequestGateway> {
        Arc::new(RequestGateway::new(Arc::new(ApiConfig::default())).unwrap())
    }

    fn find(name: &str) -> Endpoint {
        Toolset::ALL
            .into_iter()
            .flat_map(endpoints)
            .find(|e| e.name == name)
            .unwrap_or_else(|| panic!("no endpoint named {}", name))
    }

    #[test]
    fn test_all_tools_count() {
        let tools = all_tools(gateway());
        assert_eq!(tools.len(), 170, "Expected 170 total tools");
    }

    #[test]
    fn test_all_tools_unique_names() {
        let tools = all_tools(gateway());
        let mut names = HashSet::new();

        for tool in tools {
            let def = tool.definition();
            assert!(
                names.insert(def.name.clone()),
                "Duplicate tool name: {}",
                def.name
            );
        }
    }

    #[test]
    fn test_toolset_counts() {
        let expected = [
            (Toolset::Candidates, 28),
            (Toolset::Jobs, 29),
            (Toolset::Pipelines, 12),
            (Toolset::Context, 3),
            (Toolset::Tasks, 5),
            (Toolset::Companies, 30),
            (Toolset::Contacts, 28),
            (Toolset::Activities, 6),
            (Toolset::Portals, 8),
            (Toolset::WorkHistory, 3),
            (Toolset::Tags, 2),
            (Toolset::Webhooks, 4),
            (Toolset::Users, 2),
            (Toolset::Triggers, 2),
            (Toolset::Attachments, 4),
            (Toolset::Backups, 3),
            (Toolset::Events, 1),
        ];

        for (toolset, count) in expected {
            assert_eq!(endpoints(toolset).len(), count, "Toolset {}", toolset);
        }
    }

    #[test]
    fn test_default_selection() {
        let selected = Toolset::DEFAULT.into_iter().collect();
        assert_eq!(tools_for(&selected, gateway()).len(), 77);
    }

    #[test]
    fn test_path_params_match_templates() {
        for endpoint in Toolset::ALL.into_iter().flat_map(endpoints) {
            for param in endpoint.params.iter().filter(|p| p.location == Location::Path) {
                assert!(
                    endpoint.path.contains(&format!("{{{}}}", param.name)),
                    "{}: path parameter {} missing from {}",
                    endpoint.name,
                    param.name,
                    endpoint.path
                );
            }
            let placeholders = endpoint.path.matches('{').count();
            let path_params = endpoint
                .params
                .iter()
                .filter(|p| p.location == Location::Path)
                .count();
            assert_eq!(placeholders, path_params, "{}", endpoint.name);
        }
    }

    #[test]
    fn test_definition_schema() {
        let def = find("create_candidate").definition();
        assert_eq!(def.toolset, Some(Toolset::Candidates));
        assert_eq!(
            def.input_schema["required"],
            json!(["first_name", "last_name", "email"])
        );
        assert_eq!(def.input_schema["properties"]["phone"]["type"], "string");

        let def = find("list_companies").definition();
        assert_eq!(def.input_schema["properties"]["per_page"]["default"], 10);
        assert!(def.input_schema["properties"].get("fields").is_some());
    }

    #[test]
    fn test_build_list_request_applies_defaults() {
        let request = find("list_candidates").build_request(&json!({})).unwrap();

        assert_eq!(request.method, Method::GET);
        assert_eq!(request.path, "/candidates");
        assert_eq!(request.query["per_page"], 25);
        assert_eq!(request.query["page"], 1);
        assert!(request.body.is_none());
    }

    #[test]
    fn test_build_request_omits_absent_optionals() {
        let request = find("create_candidate")
            .build_request(&json!({
                "first_name": "Ada",
                "last_name": "Lovelace",
                "email": "ada@example.test",
                "phone": null
            }))
            .unwrap();

        assert_eq!(
            request.body,
            Some(json!({"first_name": "Ada", "last_name": "Lovelace", "email": "ada@example.test"}))
        );
    }

    #[test]
    fn test_build_request_missing_required() {
        let err = find("get_candidate").build_request(&json!({})).unwrap_err();
        assert!(matches!(err, McpServerError::InvalidParams(_)));
        assert!(err.to_string().contains("candidate_id"));
    }

    #[test]
    fn test_build_request_wrong_type() {
        let err = find("get_candidate")
            .build_request(&json!({"candidate_id": "seven"}))
            .unwrap_err();
        assert!(err.to_string().contains("must be an integer"));

        let err = find("replace_candidate_tags")
            .build_request(&json!({"candidate_id": 1, "tag_ids": [1, "2"]}))
            .unwrap_err();
        assert!(err.to_string().contains("array of integers"));
    }

    #[test]
    fn test_build_request_rejects_non_object_args() {
        let err = find("list_jobs").build_request(&json!([1, 2])).unwrap_err();
        assert!(matches!(err, McpServerError::InvalidParams(_)));
    }

    #[test]
    fn test_path_segments_are_encoded() {
        let request = find("get_company")
            .build_request(&json!({"company_id": "a/b c"}))
            .unwrap();
        assert_eq!(request.path, "/companies/a%2Fb%20c");
    }

    #[test]
    fn test_renamed_keys_and_constants() {
        let request = find("search_candidates")
            .build_request(&json!({"query": "smith"}))
            .unwrap();
        assert_eq!(request.query["q"], "smith");

        let request = find("search_companies")
            .build_request(&json!({"query": "acme"}))
            .unwrap();
        assert_eq!(request.query["query"], "acme");
        assert_eq!(request.query["per_page"], 10);

        let request = find("create_job_list")
            .build_request(&json!({"name": "Hot jobs"}))
            .unwrap();
        assert_eq!(request.body, Some(json!({"name": "Hot jobs", "type": "job"})));

        let request = find("create_candidate_activity")
            .build_request(&json!({"candidate_id": 3, "activity_type": "call", "description": "Intro"}))
            .unwrap();
        assert_eq!(
            request.body,
            Some(json!({"candidate_id": 3, "type": "call", "description": "Intro"}))
        );
    }

    #[test]
    fn test_merged_filters() {
        let request = find("filter_companies")
            .build_request(&json!({"filters": {"city": "Austin", "page": 9}, "page": 2}))
            .unwrap();

        assert_eq!(request.method, Method::POST);
        assert!(request.query.is_empty());
        assert_eq!(
            request.body,
            Some(json!({"city": "Austin", "per_page": 10, "page": 2}))
        );
    }

    #[test]
    fn test_whole_body() {
        let request = find("update_job_custom_fields")
            .build_request(&json!({"job_id": 4, "fields": {"salary_band": "B"}}))
            .unwrap();

        assert_eq!(request.path, "/jobs/4/custom_fields");
        assert_eq!(request.body, Some(json!({"salary_band": "B"})));
    }

    #[test]
    fn test_empty_update_sends_empty_body() {
        let request = find("update_task")
            .build_request(&json!({"task_id": 5}))
            .unwrap();
        assert_eq!(request.body, Some(json!({})));

        let request = find("delete_task")
            .build_request(&json!({"task_id": 5}))
            .unwrap();
        assert!(request.body.is_none());
    }
}
