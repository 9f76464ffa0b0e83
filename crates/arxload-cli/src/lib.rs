//! arxload-cli — the per-file ingestion loop behind the `arxload` binary.

pub mod pipeline;
