//! Third and Grove - Dioxus Fullstack Site
//!
//! Server-rendered marketing pages: the contact form and the job posting
//! template. Contact submissions are forwarded to an external form backend;
//! job pages are rendered from the job catalog produced by the content
//! pipeline.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! dx serve --features web,server
//! ```
//!
//! Production build:
//! ```bash
//! dx build --release --features web,server
//! ```

#![allow(non_snake_case)]

pub mod app;
pub mod components;
pub mod config;
pub mod contact;
pub mod jobs;
pub mod pages;
pub mod routes;
