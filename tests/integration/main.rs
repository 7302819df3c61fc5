//! Integration tests for the send-push HTTP surface.

mod dispatch_test;
mod registry_test;
