use alphapredict_brnn::{AlphaPredictor, PredictorConfig};
use alphapredict_graph::{graph, GraphOptions};
use alphapredict_test_data::{TestNetwork, GOLDEN_SEQUENCE};

#[test]
fn test_graph_writes_svg() -> anyhow::Result<()> {
    let (artifact, _dir) = TestNetwork::small().create_temp()?;
    let predictor = AlphaPredictor::from_artifact_path(&artifact, PredictorConfig::default())?;
    let out = tempfile::tempdir()?;
    let output = out.path().join("golden.svg");

    let options = GraphOptions::builder()
        .shaded_regions(vec![(3, 6)])
        .confidence_threshold(70.0)
        .build();
    let document = graph(&predictor, GOLDEN_SEQUENCE, &options, Some(&output))?;

    let written = std::fs::read_to_string(&output)?;
    assert!(written.contains("<svg"));
    assert!(written.contains("Predicted Confidence Score"));
    assert!(written.contains("class=\"shaded-region\""));
    assert!(document.to_string().contains("class=\"confidence\""));
    Ok(())
}

#[test]
fn test_graph_propagates_invalid_sequence() -> anyhow::Result<()> {
    let (artifact, _dir) = TestNetwork::small().create_temp()?;
    let predictor = AlphaPredictor::from_artifact_path(&artifact, PredictorConfig::default())?;
    let err = graph(&predictor, "MKT-AY", &GraphOptions::default(), None).unwrap_err();
    assert_eq!(err.to_string(), "invalid residue '-' at position 3");
    Ok(())
}
