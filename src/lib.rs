//! Workspace-level integration tests for pairop live under `tests/`.
