use super::ConfigType;
use crate::record::record;

record! {
    /// A profile given as raw core configuration.
    pub struct Custom {
        const KIND = Config;
        const VERSION = 0;

        name: String = String::new();
        config_type: ConfigType = ConfigType::Outbound;
        /// JSON text, interpreted according to `config_type`.
        config: String = String::new();
    }
}
