use anyhow::Result;

use crate::core::interfaces::ports::LinkOpener;

pub struct SystemBrowserLinkOpener;

impl SystemBrowserLinkOpener {
    pub fn new() -> Self {
        Self
    }
}

impl LinkOpener for SystemBrowserLinkOpener {
    fn open_in_new_window(&self, url: &str) -> Result<()> {
        log::info!("[BROWSER] Opening {}", url);
        open::that(url)?;
        Ok(())
    }
}
