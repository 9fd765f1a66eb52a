use crate::error::{LinkVaultError, Result};
use crate::validate::is_valid_link;

/// Open `url` in the system browser, refusing anything that is not http/https.
pub fn open_link_safely(url: &str) -> Result<()> {
    if !is_valid_link(url) {
        return Err(LinkVaultError::InvalidInput("Invalid URL protocol".to_string()));
    }
    open::that(url).map_err(|e| LinkVaultError::Browser(e.to_string()))
}
