use anyhow::Result;

pub trait LinkOpener: Send + Sync {
    fn open_in_new_window(&self, url: &str) -> Result<()>;
}
