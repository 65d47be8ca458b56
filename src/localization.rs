use anyhow::{anyhow, Result};
use fluent_bundle::concurrent::FluentBundle;
use fluent_bundle::{FluentArgs, FluentResource, FluentValue};
use std::sync::LazyLock;
use tracing::{error, warn};
use unic_langid::LanguageIdentifier;

/// English message catalogue, compiled into the binary
const EN_MESSAGES: &str = include_str!("../locales/en/main.ftl");

/// Localization manager for the meter bot
pub struct LocalizationManager {
    bundle: FluentBundle<FluentResource>,
}

impl LocalizationManager {
    /// Create a new localization manager with the built-in English catalogue
    pub fn new() -> Result<Self> {
        Self::from_source(EN_MESSAGES)
    }

    /// Create a localization manager from Fluent source text
    pub fn from_source(source: &str) -> Result<Self> {
        let en_locale: LanguageIdentifier = "en".parse()?;
        let mut bundle = FluentBundle::new_concurrent(vec![en_locale]);
        // Placeables go straight into plain Telegram text
        bundle.set_use_isolating(false);

        let resource = FluentResource::try_new(source.to_string())
            .map_err(|(_, errors)| anyhow!("Invalid Fluent resource: {errors:?}"))?;
        bundle
            .add_resource(resource)
            .map_err(|errors| anyhow!("Duplicate Fluent messages: {errors:?}"))?;

        Ok(Self { bundle })
    }

    /// Manager without any messages; every lookup reports a missing translation
    fn empty() -> Self {
        Self {
            bundle: FluentBundle::new_concurrent(vec![LanguageIdentifier::default()]),
        }
    }

    /// Get a localized message
    pub fn get_message(&self, key: &str, args: Option<&FluentArgs>) -> String {
        let msg = match self.bundle.get_message(key) {
            Some(msg) => msg,
            None => return format!("Missing translation: {key}"),
        };

        let pattern = match msg.value() {
            Some(pattern) => pattern,
            None => return format!("Missing value for key: {key}"),
        };

        let mut errors = vec![];
        let value = self.bundle.format_pattern(pattern, args, &mut errors);
        if !errors.is_empty() {
            warn!(key, errors = ?errors, "Message formatted with errors");
        }
        value.into_owned()
    }

    /// Get a localized message with simple string arguments
    pub fn get_message_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, FluentValue::from(*value));
        }
        self.get_message(key, Some(&fluent_args))
    }
}

static LOCALIZATION_MANAGER: LazyLock<LocalizationManager> = LazyLock::new(|| {
    LocalizationManager::new().unwrap_or_else(|e| {
        error!(error = %e, "Failed to load message catalogue, using empty one");
        LocalizationManager::empty()
    })
});

/// Get the global localization manager
pub fn get_localization_manager() -> &'static LocalizationManager {
    &LOCALIZATION_MANAGER
}

/// Convenience function to get a localized message
pub fn t(key: &str) -> String {
    get_localization_manager().get_message(key, None)
}

/// Convenience function to get a localized message with arguments
pub fn t_args(key: &str, args: &[(&str, &str)]) -> String {
    get_localization_manager().get_message_with_args(key, args)
}
