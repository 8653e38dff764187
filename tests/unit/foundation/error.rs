use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        GlimmerError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(GlimmerError::media("x").to_string().contains("media error:"));
    assert!(
        GlimmerError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = GlimmerError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
