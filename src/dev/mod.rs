/// Development utilities module
///
/// This module contains utilities for development, debugging and tests,
/// such as a fixture-backed data provider.

pub mod mock_client;

pub use mock_client::MockClient;
