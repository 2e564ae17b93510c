//! Tracing filter construction.
//!
//! Translates [`LoggingConfig`](crate::config::LoggingConfig) into the
//! directive string handed to `tracing_subscriber::EnvFilter`.

/// Build filter directives from a logging configuration.
///
/// The base level applies crate-wide; per-component overrides scope to
/// `skybridge::<component>`.
///
/// # Examples
///
/// ```
/// use skybridge::config::{LogFormat, LoggingConfig};
/// use skybridge::logging::build_filter_directives;
/// use std::collections::HashMap;
///
/// let mut component_levels = HashMap::new();
/// component_levels.insert("dispatch".to_string(), "debug".to_string());
///
/// let config = LoggingConfig {
///     level: "info".to_string(),
///     format: LogFormat::Pretty,
///     component_levels: Some(component_levels),
/// };
///
/// assert_eq!(build_filter_directives(&config), "info,skybridge::dispatch=debug");
/// ```
pub fn build_filter_directives(config: &crate::config::LoggingConfig) -> String {
    let mut filter_str = config.level.clone();

    if let Some(component_levels) = &config.component_levels {
        for (component, level) in component_levels {
            filter_str.push_str(&format!(",skybridge::{}={}", component, level));
        }
    }

    filter_str
}
