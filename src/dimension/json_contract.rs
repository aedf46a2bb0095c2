use serde::{Deserialize, Serialize};

use crate::error::{DimensionError, DimensionResult};

use super::ValueDimension;

pub const VALUE_DIMENSION_JSON_SCHEMA_V1: u32 = 1;

/// Schema-versioned JSON wrapper for persisted dimension state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueDimensionJsonContractV1 {
    pub schema_version: u32,
    pub dimension: ValueDimension,
}

impl ValueDimension {
    pub fn to_json_contract_v1_pretty(&self) -> DimensionResult<String> {
        let payload = ValueDimensionJsonContractV1 {
            schema_version: VALUE_DIMENSION_JSON_SCHEMA_V1,
            dimension: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            DimensionError::InvalidData(format!("failed to serialize dimension contract v1: {e}"))
        })
    }

    /// Parses either a bare dimension payload or the versioned wrapper.
    /// Wrapped payloads with an unknown schema version are rejected.
    pub fn from_json_compat_str(input: &str) -> DimensionResult<Self> {
        if let Ok(dimension) = serde_json::from_str::<ValueDimension>(input) {
            return Ok(dimension);
        }
        let payload: ValueDimensionJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            DimensionError::InvalidData(format!("failed to parse dimension json payload: {e}"))
        })?;
        if payload.schema_version != VALUE_DIMENSION_JSON_SCHEMA_V1 {
            return Err(DimensionError::InvalidData(format!(
                "unsupported dimension schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.dimension)
    }
}
