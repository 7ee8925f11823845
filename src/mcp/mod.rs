//! Model Context Protocol (MCP) integration for the summarizer.
//!
//! This module wires the summarization service into an MCP server so editors and agent hosts can
//! summarize text and videos over stdio. The surface area consists of:
//!
//! - Tools: `summarize_text_content` and `summarize_youtube_video`, declared with the same
//!   schemas the chat router sends to the model (closed against unknown keys here).
//! - Resources: `mcp://length-presets` and `mcp://usage`.
//!
//! Handlers and formatting helpers are kept in focused submodules to make tests and reviews small
//! and targeted.

mod format;
pub mod handlers;
mod registry;
mod server;

pub use server::SummarizerMcpServer;
