// This is a metapackage for workspace-level tests
// The member crates are re-exported through their own packages

// Test helpers and utilities
pub mod test_helpers {
}
