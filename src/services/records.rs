use crate::error::{AugmentError, Result};
use crate::models::{
    ID_ATTRIBUTE, INPUT_FILE_PATH_ATTRIBUTE, INPUT_TEXT_ATTRIBUTE, OUTPUT_FILE_PATH_ATTRIBUTE,
    Record,
};
use async_trait::async_trait;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::types::AttributeValue;
use std::collections::HashMap;

/// Key-value store collaborator holding job records.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn get_record(&self, table: &str, id: &str) -> Result<Option<Record>>;

    /// Sets `output_file_path` on an existing record.
    async fn set_output_file_path(&self, table: &str, id: &str, locator: &str) -> Result<()>;

    async fn put_record(&self, table: &str, record: &Record) -> Result<()>;
}

pub struct DynamoRecordStore {
    client: Client,
}

impl DynamoRecordStore {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

/// Reads an optional string attribute. Attributes of any other type are
/// treated as absent.
fn string_attribute(
    item: &HashMap<String, AttributeValue>,
    id: &str,
    name: &str,
) -> Option<String> {
    match item.get(name) {
        Some(AttributeValue::S(value)) => Some(value.clone()),
        Some(_) => {
            tracing::warn!(
                "{}",
                AugmentError::MalformedAttribute {
                    id: id.to_string(),
                    attribute: name.to_string(),
                }
            );
            None
        }
        None => None,
    }
}

pub(crate) fn record_from_item(id: &str, item: &HashMap<String, AttributeValue>) -> Record {
    Record {
        id: id.to_string(),
        input_text: string_attribute(item, id, INPUT_TEXT_ATTRIBUTE),
        input_file_path: string_attribute(item, id, INPUT_FILE_PATH_ATTRIBUTE),
        output_file_path: string_attribute(item, id, OUTPUT_FILE_PATH_ATTRIBUTE),
    }
}

pub(crate) fn item_from_record(record: &Record) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();
    item.insert(
        ID_ATTRIBUTE.to_string(),
        AttributeValue::S(record.id.clone()),
    );
    let optional = [
        (INPUT_TEXT_ATTRIBUTE, &record.input_text),
        (INPUT_FILE_PATH_ATTRIBUTE, &record.input_file_path),
        (OUTPUT_FILE_PATH_ATTRIBUTE, &record.output_file_path),
    ];
    for (name, value) in optional {
        if let Some(value) = value {
            item.insert(name.to_string(), AttributeValue::S(value.clone()));
        }
    }
    item
}

#[async_trait]
impl RecordStore for DynamoRecordStore {
    async fn get_record(&self, table: &str, id: &str) -> Result<Option<Record>> {
        tracing::debug!("Getting record {} from table {}", id, table);

        let res = self
            .client
            .get_item()
            .table_name(table)
            .key(ID_ATTRIBUTE, AttributeValue::S(id.to_string()))
            .send()
            .await
            .map_err(AugmentError::record_store)?;

        Ok(res.item.map(|item| record_from_item(id, &item)))
    }

    async fn set_output_file_path(&self, table: &str, id: &str, locator: &str) -> Result<()> {
        self.client
            .update_item()
            .table_name(table)
            .key(ID_ATTRIBUTE, AttributeValue::S(id.to_string()))
            .update_expression(format!("SET {} = :val1", OUTPUT_FILE_PATH_ATTRIBUTE))
            .expression_attribute_values(":val1", AttributeValue::S(locator.to_string()))
            .send()
            .await
            .map_err(AugmentError::record_store)?;
        Ok(())
    }

    async fn put_record(&self, table: &str, record: &Record) -> Result<()> {
        self.client
            .put_item()
            .table_name(table)
            .set_item(Some(item_from_record(record)))
            .send()
            .await
            .map_err(AugmentError::record_store)?;
        Ok(())
    }
}
