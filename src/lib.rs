// #![deny(clippy::missing_errors_doc)]
#![deny(clippy::cargo_common_metadata)]
#![deny(clippy::panic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::missing_assert_message)]

pub mod datasource;
pub mod processor;
pub mod processors;
pub mod record;
pub mod selector;
pub mod service;
pub mod storage;
