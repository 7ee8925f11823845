//! MCP server bootstrap and request dispatch.

use std::{borrow::Cow, sync::Arc};

use crate::{
    mcp::{
        format::{json_resource_contents, length_presets_snapshot, serialize_json},
        handlers::summarize::{handle_summarize_text, handle_summarize_video},
        registry,
    },
    service::SummarizationService,
    tools::{SUMMARIZE_TEXT, SUMMARIZE_VIDEO, catalog, schemas},
};
use rmcp::{
    ErrorData as McpError,
    handler::server::ServerHandler,
    model::{
        AnnotateAble, CallToolRequestParam, CallToolResult, ListResourcesResult, ListToolsResult,
        RawResource, ReadResourceRequestParam, ReadResourceResult, Resource, ServerCapabilities,
        ServerInfo, Tool, ToolAnnotations,
    },
};

const LENGTH_PRESETS_URI: &str = "mcp://length-presets";
const USAGE_URI: &str = "mcp://usage";

/// MCP server implementation exposing the summarization tools.
#[derive(Clone)]
pub struct SummarizerMcpServer {
    service: Arc<SummarizationService>,
    registry: Arc<registry::Registry>,
}

impl SummarizerMcpServer {
    /// Create a new MCP server backed by the supplied service.
    pub fn new(service: Arc<SummarizationService>) -> Self {
        let mut registry = registry::Registry::default();
        registry.register_resource(LENGTH_PRESETS_URI, resource_length_presets);
        registry.register_resource(USAGE_URI, resource_usage);

        registry.register_tool(SUMMARIZE_TEXT, tool_summarize_text);
        registry.register_tool(SUMMARIZE_VIDEO, tool_summarize_video);
        tracing::debug!(tools = ?registry.tool_names(), "Registered MCP tools");

        Self {
            service,
            registry: Arc::new(registry),
        }
    }

    fn describe_tools(&self) -> Vec<Tool> {
        catalog()
            .into_iter()
            .map(|descriptor| {
                let annotations = ToolAnnotations::with_title(descriptor.title)
                    .read_only(true)
                    .idempotent(true)
                    .open_world(descriptor.name == SUMMARIZE_VIDEO);
                Tool {
                    name: Cow::Borrowed(descriptor.name),
                    title: Some(descriptor.title.to_string()),
                    description: Some(Cow::Borrowed(descriptor.description)),
                    input_schema: Arc::new(schemas::strict(descriptor.parameters)),
                    output_schema: None,
                    annotations: Some(annotations),
                    icons: None,
                }
            })
            .collect()
    }

    fn describe_resources(&self) -> Vec<Resource> {
        let mut presets = RawResource::new(LENGTH_PRESETS_URI, "length-presets");
        presets.description =
            Some("Named summary lengths, their word targets, and the default".into());

        let mut usage = RawResource::new(USAGE_URI, "usage");
        usage.description = Some(
            "How to pick a tool and a summary_length; extractive output only, no paraphrasing."
                .into(),
        );

        vec![presets.no_annotation(), usage.no_annotation()]
    }
}

fn resource_length_presets(
    _server: &SummarizerMcpServer,
    _request: ReadResourceRequestParam,
) -> registry::ResourceFuture {
    Box::pin(async move {
        Ok(ReadResourceResult {
            contents: vec![json_resource_contents(
                LENGTH_PRESETS_URI,
                serialize_json(&length_presets_snapshot(), LENGTH_PRESETS_URI),
            )],
        })
    })
}

fn resource_usage(
    _server: &SummarizerMcpServer,
    _request: ReadResourceRequestParam,
) -> registry::ResourceFuture {
    Box::pin(async move {
        let usage = serde_json::json!({
            "title": "Rusty Summarizer MCP Usage",
            "policy": [
                "Summaries are extractive: every sentence comes verbatim from the source.",
                "Use summarize_text_content for pasted text and summarize_youtube_video for video links.",
                "summary_length accepts short, medium, long, or a word count such as '150 words'.",
                "Text with two sentences or fewer, or already within the target, is returned unchanged.",
            ],
            "flows": [
                {
                    "name": "Summarize Text",
                    "steps": ["summarize_text_content({ text_content, summary_length? })"]
                },
                {
                    "name": "Summarize Video",
                    "steps": ["summarize_youtube_video({ youtube_url, summary_length? })"]
                }
            ]
        });
        Ok(ReadResourceResult {
            contents: vec![json_resource_contents(
                USAGE_URI,
                serialize_json(&usage, USAGE_URI),
            )],
        })
    })
}

fn tool_summarize_text(
    _server: &SummarizerMcpServer,
    request: CallToolRequestParam,
) -> registry::ToolFuture {
    Box::pin(async move { handle_summarize_text(request.arguments).await })
}

fn tool_summarize_video(
    server: &SummarizerMcpServer,
    request: CallToolRequestParam,
) -> registry::ToolFuture {
    let service = server.service.clone();
    Box::pin(async move { handle_summarize_video(&service, request.arguments).await })
}

impl ServerHandler for SummarizerMcpServer {
    fn get_info(&self) -> ServerInfo {
        let mut implementation = rmcp::model::Implementation::from_build_env();
        implementation.name = "rustysum".to_string();
        implementation.title = Some("Rusty Summarizer MCP".to_string());
        implementation.version = env!("CARGO_PKG_VERSION").to_string();

        ServerInfo {
            capabilities: ServerCapabilities::builder()
                .enable_resources()
                .enable_tools()
                .build(),
            server_info: implementation,
            instructions: Some(
                "Use this server to condense long text or YouTube transcripts into extractive summaries. Pass the text or video URL and an optional summary_length (short, medium, long, or a word count).".into(),
            ),
            ..ServerInfo::default()
        }
    }

    fn list_resources(
        &self,
        _request: Option<rmcp::model::PaginatedRequestParam>,
        _context: rmcp::service::RequestContext<rmcp::service::RoleServer>,
    ) -> impl std::future::Future<Output = Result<ListResourcesResult, McpError>> + Send + '_ {
        let resources = self.describe_resources();
        std::future::ready(Ok(ListResourcesResult::with_all_items(resources)))
    }

    fn list_tools(
        &self,
        _request: Option<rmcp::model::PaginatedRequestParam>,
        _context: rmcp::service::RequestContext<rmcp::service::RoleServer>,
    ) -> impl std::future::Future<Output = Result<ListToolsResult, McpError>> + Send + '_ {
        let tools = self.describe_tools();
        std::future::ready(Ok(ListToolsResult::with_all_items(tools)))
    }

    #[allow(clippy::manual_async_fn)]
    fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: rmcp::service::RequestContext<rmcp::service::RoleServer>,
    ) -> impl std::future::Future<Output = Result<ReadResourceResult, McpError>> + Send + '_ {
        async move {
            if let Some(handler) = self.registry.resource(&request.uri) {
                return handler(self, request).await;
            }

            Err(McpError::invalid_params(
                format!("Unknown resource URI: {}", request.uri),
                None,
            ))
        }
    }

    #[allow(clippy::manual_async_fn)]
    fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: rmcp::service::RequestContext<rmcp::service::RoleServer>,
    ) -> impl std::future::Future<Output = Result<CallToolResult, McpError>> + Send + '_ {
        async move {
            if let Some(handler) = self.registry.tool(request.name.as_ref()) {
                return handler(self, request).await;
            }

            Err(McpError::invalid_params(
                format!("Unknown tool: {}", request.name),
                None,
            ))
        }
    }
}
