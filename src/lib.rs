//! Learnist - A Terminal User Interface (TUI) for the Learnist learning
//! platform.
//!
//! This library provides a terminal-based client for browsing the course
//! catalog, working through lessons, reviewing flashcard decks, and
//! administering students and curators. It talks to the Learnist REST
//! API, caches reads behind composite query keys, and renders a rich
//! interactive UI built with Ratatui.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`api`] - REST client and backend abstraction
//! * [`cache`] - Key-based query cache with staleness windows
//! * [`config`] - Application configuration management
//! * [`prefs`] - Durable catalog preferences shared with the web client
//! * [`service`] - Cache-through data access layer
//! * [`ui`] - Terminal user interface components

/// REST API client, request/response types, and the backend trait
pub mod api;

/// Key-based query cache
pub mod cache;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Domain models for courses, lessons, flashcards, stories, and users
pub mod models;

/// Lesson outline grouping and unlock rules
pub mod outline;

/// Durable preference storage
pub mod prefs;

/// Cache-through data service between the UI and the API
pub mod service;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for date/time handling, debouncing, and timers
pub mod utils;
