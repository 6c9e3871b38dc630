//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes the scoring engine over the MCP protocol, making it available to
//! AI assistants via stdio transport.
//!
//! # Architecture
//!
//! The MCP server is a presentation layer: it wraps the same core library
//! that the CLI commands use. Each `#[tool]` method delegates to core library
//! functions rather than implementing business logic directly.

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};

use seo_editor_core::keywords::analyze_keyword_density;
use seo_editor_core::readability::check_readability;
use seo_editor_core::{ContentRecord, KeywordList, ResearchContext, SeoEditor, TextStats};

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for the `optimize_content` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct OptimizeContentParams {
    /// Post title.
    #[serde(default)]
    pub title: String,
    /// Meta description.
    #[serde(default)]
    pub meta_description: String,
    /// Full body text (markdown headings allowed).
    pub text: String,
    /// Target keywords, primary first. Omit to use research or server defaults.
    pub keywords: Option<Vec<String>>,
    /// Research output supplying fallback keywords and citations.
    pub research: Option<ResearchContext>,
    /// Output format: "json" (full report) or "text" (summary)
    #[serde(default = "default_report_format")]
    pub format: String,
}

impl OptimizeContentParams {
    /// Bytes of caller-supplied content: text, title, meta description,
    /// keywords, and research as JSON.
    fn payload_len(&self) -> Result<usize, McpError> {
        let research = match self.research {
            Some(ref research) => serde_json::to_vec(research)
                .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?
                .len(),
            None => 0,
        };
        let keywords: usize = self.keywords.iter().flatten().map(String::len).sum();
        Ok(self.text.len() + self.title.len() + self.meta_description.len() + keywords + research)
    }
}

fn default_report_format() -> String {
    "json".to_string()
}

/// Parameters for the `analyze_keywords` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct AnalyzeKeywordsParams {
    /// The text to analyze.
    pub text: String,
    /// Target keywords, primary first.
    pub keywords: Vec<String>,
}

/// Parameters for the `check_readability` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct CheckReadabilityParams {
    /// The text to analyze.
    pub text: String,
}

/// MCP server exposing the scoring engine to AI assistants.
///
/// Each `#[tool]` method in the `#[tool_router]` impl block is automatically
/// registered and callable via the MCP protocol.
#[derive(Clone)]
pub struct ProjectServer {
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
    max_input_bytes: Option<usize>,
    default_keywords: KeywordList,
}

impl Default for ProjectServer {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectServer {
    /// Limit the size of text accepted by tools (`None` disables the check).
    pub const fn with_input_limit(mut self, max_input_bytes: Option<usize>) -> Self {
        self.max_input_bytes = max_input_bytes;
        self
    }

    /// Keywords used by `optimize_content` when the caller passes none.
    pub fn with_default_keywords(mut self, keywords: KeywordList) -> Self {
        self.default_keywords = keywords;
        self
    }

    fn check_size(&self, len: usize) -> Result<(), McpError> {
        match self.max_input_bytes {
            Some(max) if len > max => Err(McpError::invalid_params(
                format!("input too large: {len} bytes (limit: {max} bytes)"),
                None,
            )),
            _ => Ok(()),
        }
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, McpError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))
}

#[tool_router]
impl ProjectServer {
    /// Create a new MCP server instance.
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
            max_input_bytes: Some(seo_editor_core::DEFAULT_MAX_INPUT_BYTES),
            default_keywords: KeywordList::default(),
        }
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let info = serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "description": env!("CARGO_PKG_DESCRIPTION"),
        });

        let text = if params.format == "json" {
            to_json(&info)?
        } else {
            format!(
                "{} v{}\n{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
            )
        };

        tracing::info!(tool = "get_info", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Score content and return the optimization report.
    #[tool(
        description = "Score blog content for SEO. Returns keyword density, title and meta description suggestions, readability, technical checks, a 0-100 score with grade, and a performance forecast."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn optimize_content(
        &self,
        Parameters(params): Parameters<OptimizeContentParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(
            tool = "optimize_content",
            keywords = ?params.keywords,
            has_research = params.research.is_some(),
            "executing MCP tool"
        );
        self.check_size(params.payload_len()?)?;

        let content = ContentRecord::new(params.title, params.meta_description, params.text);
        let research = params.research.unwrap_or_default();
        let requested: KeywordList = match params.keywords {
            Some(keywords) => keywords.into_iter().collect(),
            None => self.default_keywords.clone(),
        };

        let mut editor = SeoEditor::new();
        let total = editor
            .optimize(&content, &research, Some(&requested))
            .seo_score
            .total_score;

        let text = if params.format == "text" {
            editor.format_report()
        } else {
            match editor.last_report() {
                Some(report) => to_json(report)?,
                None => editor.format_report(),
            }
        };

        tracing::info!(tool = "optimize_content", total, "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Keyword density for the given keywords.
    #[tool(
        description = "Analyze keyword density. Returns per-keyword counts, densities, status against the target range, and suggestions."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn analyze_keywords(
        &self,
        Parameters(params): Parameters<AnalyzeKeywordsParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "analyze_keywords", keywords = ?params.keywords, "executing MCP tool");
        self.check_size(params.text.len())?;

        let keywords: KeywordList = params.keywords.into_iter().collect();
        let stats = TextStats::from_text(&params.text);
        let analysis = analyze_keyword_density(&params.text, &stats, &keywords);
        let json = to_json(&analysis)?;

        tracing::info!(
            tool = "analyze_keywords",
            analyzed = analysis.keywords.len(),
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Classify readability.
    #[tool(
        description = "Check readability of text. Returns a level (excellent, good, fair, needs improvement), sentence and paragraph averages, transition word ratio, and suggestions."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn check_readability(
        &self,
        Parameters(params): Parameters<CheckReadabilityParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "check_readability", "executing MCP tool");
        self.check_size(params.text.len())?;

        let stats = TextStats::from_text(&params.text);
        let report = check_readability(&params.text, &stats);
        let json = to_json(&report)?;

        tracing::info!(
            tool = "check_readability",
            level = report.score.as_str(),
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

#[tool_handler]
impl ServerHandler for ProjectServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Use optimize_content to score blog content for SEO.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}
