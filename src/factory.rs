//! Factory registered with the host for `headlessdam` connections.

use headless_dam_common::Result;

use crate::adapter::HeadlessDamAdapter;
use crate::config::HeadlessDamSettings;
use crate::folder::ADAPTER_TYPE;
use crate::hub::ContentHubAdapterFactory;

#[derive(Debug, Clone, Copy, Default)]
pub struct HeadlessDamAdapterFactory;

impl HeadlessDamAdapterFactory {
    pub fn new() -> Self {
        Self
    }
}

impl ContentHubAdapterFactory for HeadlessDamAdapterFactory {
    type Settings = HeadlessDamSettings;
    type Adapter = HeadlessDamAdapter;

    fn id(&self) -> &'static str {
        ADAPTER_TYPE
    }

    fn create_adapter(
        &self,
        settings: &HeadlessDamSettings,
        connection_id: &str,
    ) -> Result<HeadlessDamAdapter> {
        HeadlessDamAdapter::new(settings, connection_id)
    }
}
