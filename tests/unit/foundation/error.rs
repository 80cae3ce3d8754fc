use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        StepdeckError::malformed_range("x")
            .to_string()
            .contains("malformed range:")
    );
    assert!(
        StepdeckError::structure("x")
            .to_string()
            .contains("structure error:")
    );
    assert!(
        StepdeckError::unsupported_mode("x")
            .to_string()
            .contains("unsupported mode:")
    );
    assert!(
        StepdeckError::markup("x")
            .to_string()
            .contains("markup error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = StepdeckError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
