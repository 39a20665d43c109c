use ca_view_table::TableDisplayState;

/// State of one chart editor.
///
/// Only the title and template are known here: everything else belongs to the chart UI and
/// is kept as-is.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GraphState {
    pub title: String,
    pub template: String,

    #[serde(flatten)]
    pub rest: serde_json::Map<String, serde_json::Value>,
}

impl GraphState {
    pub fn new(title: impl Into<String>, template: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            template: template.into(),
            rest: Default::default(),
        }
    }
}

/// Per-block UI state, persisted by the host alongside [`crate::BlockArgs`].
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UiState {
    pub graph_state_stacked_bar: GraphState,
    pub graph_state_barplot: GraphState,
    pub table_state: TableDisplayState,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            graph_state_stacked_bar: GraphState::new("Cell Group Composition", "stackedBar"),
            graph_state_barplot: GraphState::new("Cell Group Abundance", "bar"),
            table_state: TableDisplayState::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_graph_fields_survive() {
        let json = serde_json::json!({
            "graphStateBarplot": {
                "title": "Abundance by timepoint",
                "template": "bar",
                "currentTab": "axes",
                "layersSettings": { "bar": { "fillColor": "#99e099" } },
            },
        });

        let state: UiState = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(state.graph_state_barplot.title, "Abundance by timepoint");
        assert_eq!(state.graph_state_stacked_bar, UiState::default().graph_state_stacked_bar);

        let back = serde_json::to_value(&state).unwrap();
        assert_eq!(back["graphStateBarplot"], json["graphStateBarplot"]);
    }
}
