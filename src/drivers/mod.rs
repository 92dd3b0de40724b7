pub mod http;

pub use http::HttpDriver;

use crate::ChargeApi;
use crate::config::ClientConfig;
use crate::core::{ChargeError, Result};

/// `load_config` already rejects other schemes for command-line input; this
/// guards configs that library users build or modify by hand.
pub fn create_driver(config: ClientConfig) -> Result<Box<dyn ChargeApi>> {
    if config.base_url.starts_with("http://") || config.base_url.starts_with("https://") {
        Ok(Box::new(HttpDriver::new(config)?))
    } else {
        Err(ChargeError::InvalidBaseUrl {
            url: config.base_url,
        })
    }
}
