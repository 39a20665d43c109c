use ca_types::{AxisSpec, AxisValue};

/// One selectable partition value.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SheetOption {
    pub value: AxisValue,
    pub label: String,
}

/// Lets the user browse a table one value of `axis` at a time.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sheet {
    pub axis: AxisSpec,
    pub options: Vec<SheetOption>,

    /// The first value, selected until the user picks another one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<AxisValue>,
}

impl Sheet {
    pub fn new(axis: AxisSpec, values: Vec<AxisValue>) -> Self {
        let default_value = values.first().cloned();
        let options = values
            .into_iter()
            .map(|value| SheetOption {
                label: value.to_string(),
                value,
            })
            .collect();

        Self {
            axis,
            options,
            default_value,
        }
    }
}
