use ca_frame::{ConditionalExclusion, compose};
use ca_pool::{OptionsConfig, extract_baseline_values, resolve_options};
use ca_types::{ColumnSet, SemanticRole};
use ca_view_table::assemble_table;

use crate::{
    AnalysisMethod, BlockOutputs, OutputError, OutputResult, OutputSpec, OutputValue, Snapshot,
};

/// Shown instead of significance values when the run had to fall back to fold changes.
pub const REPLICATE_WARNING: &str = "Not enough replicates per group: the compositional model \
    was skipped and log2 fold changes were calculated instead. No q-values are available.";

/// A link in the block's navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Section {
    Link {
        href: &'static str,
        label: &'static str,
    },
}

const SECTIONS: [Section; 3] = [
    Section::Link {
        href: "/",
        label: "Main",
    },
    Section::Link {
        href: "/barplot",
        label: "Cell Group Abundance",
    },
    Section::Link {
        href: "/stacked-bar",
        label: "Cell Group Composition",
    },
];

/// The compositional analysis block: which outputs exist and how each is computed.
#[derive(Debug, Clone)]
pub struct BlockModel {
    outputs: Vec<OutputSpec>,
}

impl Default for BlockModel {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockModel {
    pub fn new() -> Self {
        Self {
            outputs: vec![
                OutputSpec::new("metadataOptions", metadata_options),
                OutputSpec::new("clusterAnnotationOptions", cluster_annotation_options),
                OutputSpec::new("baselineOptions", baseline_options),
                OutputSpec::new("resultsPt", results_table),
                OutputSpec::new("boxplotPf", boxplot_frame),
                OutputSpec::new("stackedBarPf", stacked_bar_frame),
                OutputSpec::new("barplotPCols", barplot_columns),
                OutputSpec::new("stackedBarPCols", stacked_bar_columns),
                OutputSpec::new("isRunning", is_running),
                OutputSpec::new("replicateWarning", replicate_warning),
            ],
        }
    }

    #[inline]
    pub fn outputs(&self) -> &[OutputSpec] {
        &self.outputs
    }

    /// Recomputes every output from scratch.
    pub fn compute_outputs(&self, snapshot: &Snapshot<'_>) -> BlockOutputs {
        ca_tracing::profile_function!();

        self.outputs
            .iter()
            .map(|output| (output.name, output.evaluate(snapshot)))
            .collect()
    }

    pub fn title(snapshot: &Snapshot<'_>) -> String {
        let prefix = &snapshot.config.title_prefix;
        match snapshot.args.title.as_deref() {
            Some(title) if !title.is_empty() => format!("{prefix} - {title}"),
            _ => prefix.to_string(),
        }
    }

    #[inline]
    pub fn sections() -> &'static [Section] {
        &SECTIONS
    }
}

// --- Options ---

fn metadata_options(snapshot: &Snapshot<'_>) -> OutputResult {
    let options = resolve_options(
        snapshot.pool,
        &SemanticRole::Metadata.rule(),
        OptionsConfig::default(),
    );
    Ok(Some(OutputValue::Options(options)))
}

fn cluster_annotation_options(snapshot: &Snapshot<'_>) -> OutputResult {
    let options = resolve_options(
        snapshot.pool,
        &SemanticRole::ClusterAnnotation.rule(),
        OptionsConfig::NATIVE_LABEL_AS_SUFFIX,
    );
    Ok(Some(OutputValue::Options(options)))
}

fn baseline_options(snapshot: &Snapshot<'_>) -> OutputResult {
    let Some(contrast_factor) = &snapshot.args.contrast_factor else {
        return Ok(None);
    };

    let values = extract_baseline_values(contrast_factor, snapshot.pool, snapshot.store)?;
    Ok(values.map(OutputValue::Strings))
}

// --- Workflow outputs ---

fn raw_columns(snapshot: &Snapshot<'_>, output: &str) -> Option<ColumnSet> {
    snapshot.outputs?.resolve(output)?.columns().cloned()
}

/// The run's analysis method indicator, as produced by the workflow.
fn analysis_indicator<'a>(snapshot: &Snapshot<'a>) -> Option<&'a serde_json::Value> {
    snapshot
        .outputs?
        .resolve(&snapshot.config.outputs.analysis_method)?
        .data_as_json()
}

fn analysis_method(snapshot: &Snapshot<'_>) -> Result<Option<AnalysisMethod>, OutputError> {
    match analysis_indicator(snapshot) {
        None => Ok(None),
        Some(serde_json::Value::String(method)) => Ok(Some(AnalysisMethod::from(method.as_str()))),
        Some(value) => Err(OutputError::NotAString {
            output: snapshot.config.outputs.analysis_method.to_string(),
            value: value.clone(),
        }),
    }
}

fn results_table(snapshot: &Snapshot<'_>) -> OutputResult {
    let Some(raw) = raw_columns(snapshot, &snapshot.config.outputs.results) else {
        return Ok(None);
    };

    // Q-values are meaningless when the model could not be fitted.
    let exclusion = ConditionalExclusion::new(
        SemanticRole::SignificanceScore.rule(),
        AnalysisMethod::FoldChange.as_str(),
    );
    let columns = exclusion.apply(raw, analysis_indicator(snapshot));

    let table = assemble_table(
        &columns,
        &snapshot.ui_state.table_state,
        snapshot.store,
        snapshot.tables,
    );
    Ok(table.map(OutputValue::Table))
}

/// The columns of a chart output, joined with the sample metadata.
fn chart_columns(snapshot: &Snapshot<'_>, output: &str) -> Option<ColumnSet> {
    let raw = raw_columns(snapshot, output)?;
    Some(compose(
        raw,
        snapshot.pool,
        &snapshot.config.join_axis,
        &SemanticRole::Metadata.rule(),
    ))
}

fn chart_frame(snapshot: &Snapshot<'_>, output: &str) -> OutputResult {
    let Some(columns) = chart_columns(snapshot, output) else {
        return Ok(None);
    };
    if columns.is_empty() {
        return Ok(None);
    }

    Ok(Some(OutputValue::Frame(snapshot.frames.create_frame(&columns))))
}

fn chart_column_specs(snapshot: &Snapshot<'_>, output: &str) -> OutputResult {
    let columns = chart_columns(snapshot, output);
    Ok(columns.map(|columns| OutputValue::Columns(columns.ids_and_specs())))
}

fn boxplot_frame(snapshot: &Snapshot<'_>) -> OutputResult {
    chart_frame(snapshot, &snapshot.config.outputs.boxplot)
}

fn stacked_bar_frame(snapshot: &Snapshot<'_>) -> OutputResult {
    chart_frame(snapshot, &snapshot.config.outputs.stacked_bar)
}

fn barplot_columns(snapshot: &Snapshot<'_>) -> OutputResult {
    chart_column_specs(snapshot, &snapshot.config.outputs.boxplot)
}

fn stacked_bar_columns(snapshot: &Snapshot<'_>) -> OutputResult {
    chart_column_specs(snapshot, &snapshot.config.outputs.stacked_bar)
}

// --- Run status ---

fn is_running(snapshot: &Snapshot<'_>) -> OutputResult {
    let running = snapshot
        .outputs
        .is_some_and(|outputs| !outputs.is_ready_or_error());
    Ok(Some(OutputValue::Bool(running)))
}

fn replicate_warning(snapshot: &Snapshot<'_>) -> OutputResult {
    let method = analysis_method(snapshot)?;
    Ok(method
        .filter(AnalysisMethod::lacks_statistical_power)
        .map(|_| OutputValue::Text(REPLICATE_WARNING.to_owned())))
}
