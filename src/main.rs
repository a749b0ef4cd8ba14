mod client;
mod convert;
mod error;
mod merge;
mod model;
mod output;

use clap::Parser;
use error::{CliError, Result};
use model::DeviceMapping;
use std::path::PathBuf;

const OMA_REGISTRY_URL: &str = "http://www.openmobilealliance.org/api";

/// LwM2M Objects to OneDM Things converter.
///
/// Fetches LwM2M object definitions from the OMA registry and converts them
/// into OneDM Thing descriptions, one Thing per requested object instance.
/// Repeating an object id requests an additional instance of it; instances
/// past the first get a numeric suffix on their identifier.
///
/// Examples:
///   lwm2m-onedm --id 3                        # one Device thing, to stdout
///   lwm2m-onedm --id 3 --id 3 --id 6          # Device, Device_2, Location
///   lwm2m-onedm --id 3 --base mapping.json --output device.json
///
/// With --base, the generated mapping is injected into the base document's
/// '.templates[0].mappings.things' list, which must exist and be empty.
#[derive(Parser, Debug)]
#[command(name = "lwm2m-onedm", version, about, long_about)]
struct Cli {
    /// Identifiers of the LwM2M objects (repeat an id to add instances)
    #[arg(short, long, required = true, num_args = 1..)]
    id: Vec<u16>,

    /// Existing mapping document to merge the generated things into
    #[arg(short, long)]
    base: Option<PathBuf>,

    /// Output file (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Registry base URL
    #[arg(long, env = "LWM2M_REGISTRY_URL", default_value = OMA_REGISTRY_URL)]
    registry_url: String,
}

/// Counts requested instances per object id, keeping first-occurrence order.
fn group_requested_ids(ids: &[u16]) -> Vec<(u16, usize)> {
    let mut grouped: Vec<(u16, usize)> = Vec::new();
    for &id in ids {
        match grouped.iter_mut().find(|(seen, _)| *seen == id) {
            Some((_, count)) => *count += 1,
            None => grouped.push((id, 1)),
        }
    }
    grouped
}

async fn run(cli: Cli) -> Result<()> {
    let registry = client::RegistryClient::new(cli.registry_url.clone());

    // One failing object id aborts the whole run; nothing is written.
    let mut things = Vec::new();
    for (object_id, instance_count) in group_requested_ids(&cli.id) {
        let definition = registry.object_definition(object_id).await?.ok_or_else(|| {
            CliError::Registry(format!("no definition available for object {object_id}"))
        })?;
        things.extend(convert::convert_object(&definition, object_id, instance_count)?);
    }

    let root = DeviceMapping {
        id: "DeviceMapping".into(),
        name: "LwM2M Objects".into(),
        things,
    };

    let document = merge::merge_into_base(cli.base.as_deref(), serde_json::to_value(root)?)?;
    output::write_document(&document, cli.output.as_deref())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        output::print_error(&e.to_string());
        std::process::exit(1);
    }
}
