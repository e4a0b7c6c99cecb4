//! Single test binary entry point.
//!
//! This consolidates all tests into a single binary following matklad's best practices,
//! reducing linking overhead.
//!
//! Structure:
//! - helpers: Builders and fixtures shared by the other modules
//! - integration: Multi-component workflow tests
//! - unit: Single-component unit tests
