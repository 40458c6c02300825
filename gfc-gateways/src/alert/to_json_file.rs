use std::{io, path::Path};

use jfs::Store;
use serde::{Deserialize, Serialize};

use gfc_core::{entities::*, gateways::alert::AlertGateway};

/// A dummy alert gateway for testing purposes.
pub struct AlertToJsonFile {
    json_store: Store,
}

impl AlertToJsonFile {
    pub fn try_new<P: AsRef<Path>>(directory: P) -> io::Result<Self> {
        let json_store = Store::new(directory)?;
        Ok(Self { json_store })
    }

    pub fn path(&self) -> &Path {
        self.json_store.path()
    }
}

#[derive(Debug, Deserialize, Serialize)]
struct JsonAlert {
    title: String,
    body: String,
}

impl JsonAlert {
    fn new(content: &AlertContent) -> Self {
        let AlertContent { title, body } = content.clone();
        Self { title, body }
    }
}

impl AlertGateway for AlertToJsonFile {
    fn show_alert(&self, content: &AlertContent) {
        let now = Timestamp::now().as_millis();
        let key = format!("{now}-alert");
        let alert = JsonAlert::new(content);
        if let Err(err) = self.json_store.save_with_id(&alert, &key) {
            log::warn!("Unable to save alert in JSON file: {err}");
        }
    }
}
