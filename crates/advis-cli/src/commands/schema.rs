use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

#[derive(Debug, Serialize)]
struct SchemaNamesResponse {
    schemas: &'static [&'static str],
}

/// Handle `advis schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    match &args.type_name {
        Some(name) => {
            let schema = advis_core::schema::schema_for_name(name).map_err(|error| {
                anyhow::anyhow!(
                    "{error}. Known schemas: {}",
                    advis_core::schema::names().join(", ")
                )
            })?;
            output(&schema, flags.format)
        }
        None => output(
            &SchemaNamesResponse {
                schemas: advis_core::schema::names(),
            },
            flags.format,
        ),
    }
}
