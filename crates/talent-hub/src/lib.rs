//! Talent marketplace core: mock catalog, role-aware views, and the guided
//! workflows (CV upload, job posting, interview scheduling) that sit behind the
//! client, admin, and talent dashboards.

pub mod catalog;
pub mod config;
pub mod display;
pub mod domain;
pub mod error;
pub mod integrations;
pub mod session;
pub mod telemetry;
pub mod views;
pub mod workflows;
