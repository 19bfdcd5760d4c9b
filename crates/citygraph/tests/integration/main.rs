//! Integration test target: end-to-end dataset flows.
