//! Tests for order service

mod service_tests;
