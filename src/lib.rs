//! Workspace-level integration tests for picalc (see `tests/`).
