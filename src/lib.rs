//! Flow site library - typed markup, validation, and export for the Flow
//! renewable-energy marketing site.
//!
//! This library exposes the core functionality of the `flow` CLI for use in
//! tests and potentially other applications.
//!
//! # Modules
//!
//! - `markup`: Typed HTML templates for every page
//! - `widgets`: Declarative interactivity bindings (nav, accordions, carousel)
//! - `content`: Copy tables the templates render
//! - `icons`: Inline SVG artwork
//! - `assets`: Declared stylesheets, scripts, fonts, and media
//! - `check`: Rendered-output validation
//! - `export`: Static site export with manifest
//! - `server`: Local preview server
//! - `config`: Configuration file handling
//! - `error`: Error types with user-recoverable hints
//! - `output`: Output mode abstraction (robot/human)
#![forbid(unsafe_code)]

pub mod assets;
pub mod check;
pub mod cli;
pub mod config;
pub mod content;
pub mod error;
pub mod export;
pub mod icons;
pub mod logging;
pub mod markup;
pub mod output;
pub mod server;
pub mod theme;
pub mod widgets;
