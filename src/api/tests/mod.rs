//! Unit tests for the HTTP API.
