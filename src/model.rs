//! Serde data structures for the two wire formats the converter touches:
//! the registry's LwM2M object definition XML on the way in, and the OneDM
//! mapping document on the way out.

use serde::{Deserialize, Serialize};

/// Root `<LWM2M>` envelope of a registry object definition document.
#[derive(Debug, Deserialize)]
#[serde(rename = "LWM2M")]
pub struct Lwm2m {
    #[serde(rename = "Object")]
    pub object: Option<ObjectDefinition>,
}

/// The `<Object>` subtree. Only the fields the conversion needs are kept;
/// everything else in the schema (ObjectID, ObjectURN, descriptions) is
/// ignored during deserialization.
#[derive(Debug, Deserialize)]
pub struct ObjectDefinition {
    #[serde(rename = "Name")]
    pub name: Option<String>,
    #[serde(rename = "Resources")]
    pub resources: Option<Resources>,
}

#[derive(Debug, Deserialize)]
pub struct Resources {
    #[serde(rename = "Item", default)]
    pub items: Vec<ResourceItem>,
}

/// One `<Item>` entry. All fields are optional so presence can be checked
/// per resource instead of failing the whole document.
#[derive(Debug, Deserialize)]
pub struct ResourceItem {
    #[serde(rename = "@ID")]
    pub id: Option<u16>,
    #[serde(rename = "Name")]
    pub name: Option<String>,
    #[serde(rename = "Operations")]
    pub operations: Option<String>,
}

/// Root object of the generated output, holding every converted Thing.
#[derive(Debug, Serialize)]
pub struct DeviceMapping {
    pub id: String,
    pub name: String,
    pub things: Vec<Thing>,
}

/// One OneDM Thing, corresponding to one instance of an LwM2M object.
#[derive(Debug, Serialize)]
pub struct Thing {
    pub id: String,
    pub name: String,
    pub properties: Vec<ThingEntry>,
    pub actions: Vec<ThingEntry>,
}

/// A property or action of a Thing.
#[derive(Debug, Serialize)]
pub struct ThingEntry {
    pub id: String,
    pub name: String,
    pub mapping: EntryMapping,
}

/// Protocol binding of a property or action. `operation` and `defaultValue`
/// are only present on actions.
#[derive(Debug, Serialize)]
pub struct EntryMapping {
    pub protocol: String,
    #[serde(rename = "protocolPath")]
    pub protocol_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<String>,
    #[serde(rename = "defaultValue", skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEVICE_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<LWM2M xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
  <Object ObjectType="MODefinition">
    <Name>Device</Name>
    <ObjectID>3</ObjectID>
    <ObjectURN>urn:oma:lwm2m:oma:3</ObjectURN>
    <Resources>
      <Item ID="0">
        <Name>Manufacturer</Name>
        <Operations>R</Operations>
        <Type>String</Type>
      </Item>
      <Item ID="4">
        <Name>Reboot</Name>
        <Operations>E</Operations>
      </Item>
    </Resources>
  </Object>
</LWM2M>"#;

    #[test]
    fn test_parse_object_definition() {
        let envelope: Lwm2m = quick_xml::de::from_str(DEVICE_XML).unwrap();
        let object = envelope.object.unwrap();
        assert_eq!(object.name.as_deref(), Some("Device"));

        let items = &object.resources.unwrap().items;
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, Some(0));
        assert_eq!(items[0].name.as_deref(), Some("Manufacturer"));
        assert_eq!(items[0].operations.as_deref(), Some("R"));
        assert_eq!(items[1].id, Some(4));
        assert_eq!(items[1].operations.as_deref(), Some("E"));
    }

    #[test]
    fn test_parse_item_with_missing_fields() {
        let xml = r#"<LWM2M>
  <Object>
    <Name>Broken</Name>
    <Resources>
      <Item ID="1">
        <Name>NoOperations</Name>
      </Item>
    </Resources>
  </Object>
</LWM2M>"#;

        let envelope: Lwm2m = quick_xml::de::from_str(xml).unwrap();
        let object = envelope.object.unwrap();
        let items = &object.resources.unwrap().items;
        assert_eq!(items.len(), 1);
        assert!(items[0].operations.is_none());
    }

    #[test]
    fn test_parse_envelope_without_object() {
        let envelope: Lwm2m = quick_xml::de::from_str("<LWM2M></LWM2M>").unwrap();
        assert!(envelope.object.is_none());
    }

    #[test]
    fn test_action_mapping_serializes_extra_fields() {
        let mapping = EntryMapping {
            protocol: "LWM2M".into(),
            protocol_path: "/3/0/4".into(),
            operation: Some("LWM2M_EXECUTE".into()),
            default_value: Some(String::new()),
        };
        let value = serde_json::to_value(&mapping).unwrap();
        assert_eq!(value["protocolPath"], "/3/0/4");
        assert_eq!(value["operation"], "LWM2M_EXECUTE");
        assert_eq!(value["defaultValue"], "");
    }

    #[test]
    fn test_property_mapping_omits_action_fields() {
        let mapping = EntryMapping {
            protocol: "LWM2M".into(),
            protocol_path: "/3/0/0".into(),
            operation: None,
            default_value: None,
        };
        let value = serde_json::to_value(&mapping).unwrap();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["protocol", "protocolPath"]);
    }
}
