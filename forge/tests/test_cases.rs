mod aux;

use aux::{forge_case, read_case};
use std::path::PathBuf;

#[rstest::rstest]
fn test_forge_cases(
    #[files("tests/cases/*.toml")] path: PathBuf,
) -> Result<(), Box<dyn std::error::Error>> {
    let (config, case) = read_case(&path)?;
    let card = forge_case(format!("{:?}", path.file_name().unwrap()), &config, &case);
    let mismatches = case.expect.mismatches(&card);
    assert!(
        mismatches.is_empty(),
        "Case `{:?}` failed:\n{}",
        path.file_name().unwrap(),
        mismatches.join("\n")
    );
    Ok(())
}
