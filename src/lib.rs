//! Clinician research lookup: PubMed identifier search, title
//! resolution, optional LLM summarization, and profile-link building.

pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod logging;
pub mod nlp;
pub mod report;
