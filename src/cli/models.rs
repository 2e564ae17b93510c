//! Models command implementation

use crate::cli::output::{format_models_json, format_models_table};
use crate::cli::ModelsArgs;
use crate::dispatch::descriptors;

/// Handle `skybridge models` command
pub fn handle_models(args: &ModelsArgs) -> Result<String, Box<dyn std::error::Error>> {
    let models = descriptors();

    if args.json {
        Ok(format_models_json(&models))
    } else {
        Ok(format_models_table(&models))
    }
}
