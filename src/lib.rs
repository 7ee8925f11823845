#![deny(missing_docs)]

//! Core library for the Rusty Summarizer HTTP and MCP servers.

/// HTTP routing and REST handlers.
pub mod api;
/// Conversational function routing over a chat model.
pub mod chat;
/// Environment-driven configuration management.
pub mod config;
/// Extractive summarization engine.
pub mod engine;
/// Structured logging and tracing setup.
pub mod logging;
/// Model Context Protocol server implementation.
pub mod mcp;
/// Summarization service shared by the HTTP and MCP surfaces.
pub mod service;
/// Summarization tool catalog and argument decoding.
pub mod tools;
/// Video reference parsing and transcript fetching.
pub mod transcript;
