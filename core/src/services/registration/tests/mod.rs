//! Tests for registration service

mod mocks;
