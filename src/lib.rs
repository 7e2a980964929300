//! # repo-scout
//!
//! A web application that searches a user's repositories on demand and
//! enriches every match with the repository's README, memoizing enriched
//! results in a shared cache so repeated searches skip the expensive fetch.
//!
//! ## Pipeline
//!
//! ```text
//!   query + page
//!        │
//!        ▼
//!  ┌─────────────┐    catalog page     ┌──────────────────────────┐
//!  │ orchestrator│ ──────────────────▶ │ one task per repository  │
//!  └─────────────┘                     └────────────┬─────────────┘
//!        ▲                                          │
//!        │ join in catalog order          ┌─────────▼─────────┐
//!        │                                │ cache probe       │
//!        │                                │  hit → render     │
//!        │                                │  stale/corrupt →  │
//!        │                                │    repair + miss  │
//!        │                                └─────────┬─────────┘
//!        │                                          │ miss
//!        │                                ┌─────────▼─────────┐
//!        │                                │ query filter      │
//!        │                                └─────────┬─────────┘
//!        │                                          │ match
//!        │                                ┌─────────▼─────────┐
//!        │                                │ paced README fetch│
//!        │                                │ (one at a time)   │
//!        │                                └─────────┬─────────┘
//!        │                                          │
//!        └─────────── rendered fragment ◀─ cache write-back
//! ```
//!
//! ## Module Overview
//!
//! - [`config`] - Environment-based configuration for the server, catalog,
//!   pacing, and cache lifetimes
//! - [`models`] - `RepoSummary` (catalog row) and `RepoRecord` (cached
//!   enriched record with a versioned wire format)
//! - [`cache`] - The `CacheStore` interface and the in-process TTL store
//! - [`catalog`] - Candidate page fetch with bounded retry
//! - [`fetch`] - The `DocumentFetcher` interface and the README fetcher
//! - [`search`] - The orchestrator, per-repository enrichment with
//!   self-repairing cache reads, and the fetch pacer
//! - [`render`] - Enriched records to HTML fragments
//! - [`api`] - Axum handlers for the landing page and partial search
//! - [`state`] - Shared application state built once at startup

pub mod api;
pub mod cache;
pub mod catalog;
pub mod config;
pub mod fetch;
pub mod models;
pub mod render;
pub mod search;
pub mod state;
