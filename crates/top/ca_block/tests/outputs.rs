use ca_block::{
    BlockArgs, BlockModel, BlockOutputs, OutputState, OutputValue, REPLICATE_WARNING, Snapshot,
    UiState,
};
use ca_frame::{FrameDriver as _, HashFrameDriver};
use ca_pool::{ColumnOption, ColumnPool, MemoryStore, PoolEntry, ResolvedOutput, RunOutputs};
use ca_types::{AxisSpec, Column, ColumnSpec, LABEL_ANNOTATION, Reference, ValueType, names};
use ca_view_table::{TableDisplayState, TableDriver as _};

// --- Fixtures ---

const CELL_GROUP_AXIS: &str = "pl7.app/rna-seq/cellGroup";

fn column(id: &str, name: &str, axis: &str) -> Column {
    Column::new(
        id,
        ColumnSpec::new(name, ValueType::String).with_axis(AxisSpec::new(axis, ValueType::String)),
        format!("{id}-data").as_str(),
    )
}

fn timepoint() -> Column {
    column("timepoint", names::METADATA, names::SAMPLE_ID_AXIS)
}

fn batch() -> Column {
    column("batch", names::METADATA, "pl7.app/cellId")
}

fn treatment() -> Column {
    column("treatment", names::METADATA, names::SAMPLE_ID_AXIS)
}

fn leiden() -> Column {
    let mut leiden = column("leiden", names::LEIDEN_CLUSTER, "pl7.app/cellId");
    leiden.spec = leiden.spec.with_annotation(LABEL_ANNOTATION, "Leiden");
    leiden
}

fn abundance() -> Column {
    column("abundance", "pl7.app/rna-seq/abundance", CELL_GROUP_AXIS)
}

fn qvalue() -> Column {
    column("qvalue", names::QVALUE, CELL_GROUP_AXIS)
}

fn proportion() -> Column {
    column("proportion", "pl7.app/rna-seq/proportion", names::SAMPLE_ID_AXIS)
}

fn pool() -> ColumnPool {
    vec![
        PoolEntry::new(Reference::new("samples", "timepoint"), timepoint())
            .with_upstream_label("Timepoint"),
        PoolEntry::new(Reference::new("clustering", "leiden"), leiden())
            .with_upstream_label("Clustering #1"),
        PoolEntry::new(Reference::new("samples", "batch"), batch()).with_upstream_label("Batch"),
        PoolEntry::new(Reference::new("samples", "treatment"), treatment())
            .with_upstream_label("Treatment"),
        PoolEntry::new(
            Reference::new("counts", "umi"),
            column("umi", names::COUNT_MATRIX, "pl7.app/cellId"),
        ),
    ]
    .into()
}

fn store() -> MemoryStore {
    MemoryStore::new()
        .with_json(
            "timepoint-data",
            serde_json::json!({ "data": { "s1": "day0", "s2": "day7", "s3": "day0" } }),
        )
        .with_json("batch-data", serde_json::json!([1, 2]))
        .with_json("treatment-data", serde_json::json!({ "data": null }))
        .with_partition_keys("abundance-data", vec![vec!["B cell".into(), "T cell".into()]])
}

fn run_outputs(analysis_method: serde_json::Value) -> RunOutputs {
    RunOutputs::new(true)
        .with_output("resultsPf", ResolvedOutput::from_columns(vec![abundance(), qvalue()]))
        .with_output("boxplotPf", ResolvedOutput::from_columns(vec![proportion()]))
        .with_output("stackedBarPf", ResolvedOutput::from_columns(vec![proportion()]))
        .with_output("analysisMethod", ResolvedOutput::from_json(analysis_method))
}

fn compute(args: &BlockArgs, outputs: Option<&RunOutputs>) -> BlockOutputs {
    ca_log::setup_logging();

    let ui_state = UiState::default();
    let pool = pool();
    let store = store();

    let mut snapshot = Snapshot::new(args, &ui_state, &pool, &store, &HashFrameDriver);
    if let Some(outputs) = outputs {
        snapshot = snapshot.with_outputs(outputs);
    }

    BlockModel::new().compute_outputs(&snapshot)
}

fn labels(outputs: &BlockOutputs, name: &str) -> anyhow::Result<Vec<String>> {
    match outputs.value(name) {
        Some(OutputValue::Options(options)) => {
            Ok(options.iter().map(|option| option.label.clone()).collect())
        }
        other => anyhow::bail!("{name} should be a list of options, got {other:?}"),
    }
}

// --- Options ---

#[test]
fn metadata_options() -> anyhow::Result<()> {
    let outputs = compute(&BlockArgs::default(), None);

    let Some(OutputValue::Options(options)) = outputs.value("metadataOptions") else {
        anyhow::bail!("expected metadata options");
    };

    similar_asserts::assert_eq!(
        options,
        &vec![
            ColumnOption {
                reference: Reference::new("samples", "timepoint"),
                label: "Timepoint".to_owned(),
            },
            ColumnOption {
                reference: Reference::new("samples", "batch"),
                label: "Batch".to_owned(),
            },
            ColumnOption {
                reference: Reference::new("samples", "treatment"),
                label: "Treatment".to_owned(),
            },
        ]
    );

    Ok(())
}

#[test]
fn cluster_annotation_options_carry_native_label() -> anyhow::Result<()> {
    let outputs = compute(&BlockArgs::default(), None);
    assert_eq!(
        labels(&outputs, "clusterAnnotationOptions")?,
        ["Clustering #1 / Leiden"]
    );
    Ok(())
}

#[test]
fn baseline_options() -> anyhow::Result<()> {
    // Not chosen yet: pending, neither empty nor an error.
    let outputs = compute(&BlockArgs::default(), None);
    assert_eq!(outputs.get("baselineOptions"), Some(&OutputState::Pending));

    let args = BlockArgs {
        contrast_factor: Some(Reference::new("samples", "timepoint")),
        ..Default::default()
    };
    let outputs = compute(&args, None);
    let Some(OutputValue::Strings(values)) = outputs.value("baselineOptions") else {
        anyhow::bail!("expected baseline values");
    };
    let mut values = values.clone();
    values.sort();
    assert_eq!(values, ["day0", "day7"]);

    // In the pool, values not written yet.
    let args = BlockArgs {
        contrast_factor: Some(Reference::new("samples", "treatment")),
        ..Default::default()
    };
    let outputs = compute(&args, None);
    assert_eq!(outputs.get("baselineOptions"), Some(&OutputState::Pending));

    // Not in the pool (yet).
    let args = BlockArgs {
        contrast_factor: Some(Reference::new("samples", "dose")),
        ..Default::default()
    };
    let outputs = compute(&args, None);
    assert_eq!(outputs.get("baselineOptions"), Some(&OutputState::Pending));

    Ok(())
}

#[test]
fn malformed_baseline_data_only_fails_its_output() {
    let args = BlockArgs {
        contrast_factor: Some(Reference::new("samples", "batch")),
        ..Default::default()
    };
    let outputs = compute(&args, None);

    assert_eq!(
        outputs.get("baselineOptions"),
        Some(&OutputState::Failed {
            error: "Couldn't read the baseline values: Data of column 'batch' is not a JSON object"
                .to_owned()
        })
    );
    assert!(matches!(
        outputs.get("metadataOptions"),
        Some(OutputState::Ready { .. })
    ));
}

// --- Workflow outputs ---

#[test]
fn nothing_to_show_before_the_run() {
    let outputs = compute(&BlockArgs::default(), None);

    for name in [
        "resultsPt",
        "boxplotPf",
        "stackedBarPf",
        "barplotPCols",
        "stackedBarPCols",
        "replicateWarning",
    ] {
        assert_eq!(outputs.get(name), Some(&OutputState::Pending), "{name}");
    }
    assert_eq!(outputs.value("isRunning"), Some(&OutputValue::Bool(false)));
}

#[test]
fn fold_change_hides_qvalues_and_warns() -> anyhow::Result<()> {
    let run = run_outputs("foldChange".into());
    let outputs = compute(&BlockArgs::default(), Some(&run));

    let Some(OutputValue::Table(table)) = outputs.value("resultsPt") else {
        anyhow::bail!("expected a results table");
    };
    assert_eq!(
        table.table,
        HashFrameDriver.create_table(&[abundance()], &TableDisplayState::default())
    );
    assert_eq!(table.sheets.len(), 1);
    assert_eq!(table.sheets[0].axis.name, CELL_GROUP_AXIS);

    assert_eq!(
        outputs.value("replicateWarning"),
        Some(&OutputValue::Text(REPLICATE_WARNING.to_owned()))
    );

    Ok(())
}

#[test]
fn sccoda_keeps_qvalues() -> anyhow::Result<()> {
    let run = run_outputs("sccoda".into());
    let outputs = compute(&BlockArgs::default(), Some(&run));

    let Some(OutputValue::Table(table)) = outputs.value("resultsPt") else {
        anyhow::bail!("expected a results table");
    };
    assert_eq!(
        table.table,
        HashFrameDriver.create_table(&[abundance(), qvalue()], &TableDisplayState::default())
    );
    assert_eq!(outputs.get("replicateWarning"), Some(&OutputState::Pending));

    Ok(())
}

#[test]
fn malformed_analysis_method() {
    let run = run_outputs(serde_json::json!(42));
    let outputs = compute(&BlockArgs::default(), Some(&run));

    assert_eq!(
        outputs.get("replicateWarning"),
        Some(&OutputState::Failed {
            error: r#"Workflow output "analysisMethod" should be a JSON string, got 42"#.to_owned()
        })
    );

    // Not a fold change, so q-values stay.
    assert!(matches!(
        outputs.value("resultsPt"),
        Some(OutputValue::Table(_))
    ));
}

#[test]
fn chart_frames_are_joined_with_sample_metadata() -> anyhow::Result<()> {
    let run = run_outputs("sccoda".into());
    let outputs = compute(&BlockArgs::default(), Some(&run));

    // `batch` is metadata too, but not per sample.
    let expected = HashFrameDriver.create_frame(&[proportion(), timepoint(), treatment()]);
    assert_eq!(outputs.value("boxplotPf"), Some(&OutputValue::Frame(expected.clone())));
    assert_eq!(outputs.value("stackedBarPf"), Some(&OutputValue::Frame(expected)));

    let Some(OutputValue::Columns(columns)) = outputs.value("barplotPCols") else {
        anyhow::bail!("expected chart columns");
    };
    let ids: Vec<_> = columns.iter().map(|column| column.column_id.as_str()).collect();
    assert_eq!(ids, ["proportion", "timepoint", "treatment"]);
    assert_eq!(columns[1].spec, timepoint().spec);

    Ok(())
}

#[test]
fn empty_chart_outputs_have_no_frame() {
    let run = RunOutputs::new(true)
        .with_output("boxplotPf", ResolvedOutput::from_columns(Vec::<Column>::new()));
    let outputs = compute(&BlockArgs::default(), Some(&run));

    assert_eq!(outputs.get("boxplotPf"), Some(&OutputState::Pending));
    assert_eq!(outputs.value("barplotPCols"), Some(&OutputValue::Columns(vec![])));
}

#[test]
fn is_running() {
    let is_running = |outputs: Option<&RunOutputs>| {
        compute(&BlockArgs::default(), outputs)
            .value("isRunning")
            .cloned()
    };

    assert_eq!(is_running(None), Some(OutputValue::Bool(false)));
    assert_eq!(
        is_running(Some(&RunOutputs::new(false))),
        Some(OutputValue::Bool(true))
    );
    assert_eq!(
        is_running(Some(&RunOutputs::new(true))),
        Some(OutputValue::Bool(false))
    );
}

// --- Determinism ---

#[test]
fn unchanged_snapshot_gives_identical_outputs() -> anyhow::Result<()> {
    let args = BlockArgs {
        contrast_factor: Some(Reference::new("samples", "timepoint")),
        ..Default::default()
    };
    let run = run_outputs("foldChange".into());

    let first = serde_json::to_string(&compute(&args, Some(&run)))?;
    let second = serde_json::to_string(&compute(&args, Some(&run)))?;
    similar_asserts::assert_eq!(first, second);

    Ok(())
}

#[test]
fn fresh_block() -> anyhow::Result<()> {
    ca_log::setup_logging();

    let args = BlockArgs::default();
    let ui_state = UiState::default();
    let pool = ColumnPool::default();
    let store = MemoryStore::new();
    let snapshot = Snapshot::new(&args, &ui_state, &pool, &store, &HashFrameDriver);

    let model = BlockModel::new();
    insta::assert_snapshot!(
        serde_json::to_string(&model.compute_outputs(&snapshot))?,
        @r#"{"barplotPCols":{"state":"pending"},"baselineOptions":{"state":"pending"},"boxplotPf":{"state":"pending"},"clusterAnnotationOptions":{"state":"ready","value":[]},"isRunning":{"state":"ready","value":false},"metadataOptions":{"state":"ready","value":[]},"replicateWarning":{"state":"pending"},"resultsPt":{"state":"pending"},"stackedBarPCols":{"state":"pending"},"stackedBarPf":{"state":"pending"}}"#
    );
    insta::assert_snapshot!(
        serde_json::to_string(BlockModel::sections())?,
        @r#"[{"type":"link","href":"/","label":"Main"},{"type":"link","href":"/barplot","label":"Cell Group Abundance"},{"type":"link","href":"/stacked-bar","label":"Cell Group Composition"}]"#
    );
    assert_eq!(BlockModel::title(&snapshot), "Compositional Analysis");

    Ok(())
}
