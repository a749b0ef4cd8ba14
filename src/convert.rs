use crate::error::{CliError, Result};
use crate::model::{EntryMapping, ObjectDefinition, Thing, ThingEntry};
use crate::output;

const LWM2M_PROTOCOL: &str = "LWM2M";
const EXECUTE_OPERATION: &str = "LWM2M_EXECUTE";

/// Strips the characters OneDM identifiers cannot carry: spaces become
/// underscores, slashes and parentheses are removed. Idempotent.
pub fn normalize_name(name: &str) -> String {
    name.replace(' ', "_").replace(['/', '(', ')'], "")
}

/// Converts one object definition into `instance_count` OneDM Things, one
/// per requested instance. Resources whose operations include execute become
/// actions, everything else becomes a property.
pub fn convert_object(
    def: &ObjectDefinition,
    object_id: u16,
    instance_count: usize,
) -> Result<Vec<Thing>> {
    let items = def.resources.as_ref().map(|r| r.items.as_slice());
    let (name, items) = match (def.name.as_deref(), items) {
        (Some(name), Some(items)) if !items.is_empty() => (name, items),
        _ => {
            return Err(CliError::InvalidObject(
                "Received object definition is not valid".into(),
            ))
        }
    };

    let mut things = Vec::with_capacity(instance_count);

    for instance_id in 0..instance_count {
        let mut identifier = normalize_name(name);
        if instance_id > 0 {
            identifier = format!("{}_{}", identifier, instance_id + 1);
        }

        let mut properties: Vec<ThingEntry> = Vec::new();
        let mut actions: Vec<ThingEntry> = Vec::new();

        for item in items {
            let (Some(resource_id), Some(resource_name), Some(operations)) =
                (item.id, item.name.as_deref(), item.operations.as_deref())
            else {
                output::print_warning("Object resource definition is not valid");
                continue;
            };

            let resource_name = normalize_name(resource_name);
            let is_action = operations.contains('E');

            let mut entry = ThingEntry {
                id: resource_name.clone(),
                name: resource_name,
                mapping: EntryMapping {
                    protocol: LWM2M_PROTOCOL.into(),
                    protocol_path: format!("/{object_id}/{instance_id}/{resource_id}"),
                    operation: is_action.then(|| EXECUTE_OPERATION.into()),
                    default_value: is_action.then(String::new),
                },
            };

            let accepted = if is_action {
                &mut actions
            } else {
                &mut properties
            };
            rename_on_collision(&mut entry, accepted);
            accepted.push(entry);
        }

        things.push(Thing {
            id: identifier.clone(),
            name: identifier,
            properties,
            actions,
        });
    }

    Ok(things)
}

/// Single pass over the already-accepted entries: a second entry with a
/// taken name gets a `_Bis` suffix. A third colliding name ends up with the
/// same suffixed name and is not disambiguated further.
fn rename_on_collision(entry: &mut ThingEntry, accepted: &[ThingEntry]) {
    if accepted.iter().any(|e| e.name == entry.name) {
        entry.name = format!("{}_Bis", entry.name);
    }
}
