/// Backend API module
///
/// This module talks to the AI service:
/// - Multipart image upload and JSON result parsing (client.rs)
///
/// The endpoint path and the response shape come from the
/// `AnalysisResult` implementation of the requested result type.

pub mod client;

pub use client::SolverClient;
