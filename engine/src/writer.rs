use std::{
    ffi::OsString,
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use log::info;
use merkle_fixture_common::fixture::MerkleInput;

use crate::error::FixtureResult;

/// Serialize `input` as compact json and move it into place at `path`.
///
/// The document is written to a sibling `.tmp` file, synced, then
/// renamed over `path`. If any step fails the temp file is removed and
/// whatever was at `path` before is left untouched.
pub fn write_merkle_input(
    path: &Path,
    input: &MerkleInput,
) -> FixtureResult<()> {
    let bytes = serde_json::to_vec(input)?;

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty())
    {
        fs::create_dir_all(dir)?;
    }

    let tmp = temp_path(path)?;
    if let Err(e) = write_then_rename(&tmp, path, &bytes) {
        let _ = fs::remove_file(&tmp);
        return Err(e.into());
    }

    info!("wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

fn write_then_rename(
    tmp: &Path,
    path: &Path,
    bytes: &[u8],
) -> io::Result<()> {
    {
        let mut file = BufWriter::new(File::create(tmp)?);
        file.write_all(bytes)?;
        file.flush()?;
        file.get_ref().sync_all()?;
    }
    fs::rename(tmp, path)
}

fn temp_path(path: &Path) -> io::Result<PathBuf> {
    let Some(name) = path.file_name() else {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("output path {} has no file name", path.display()),
        ));
    };
    let mut name = OsString::from(name);
    name.push(".tmp");
    Ok(path.with_file_name(name))
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use merkle_fixture_common::claimant::{
        claimant_address, ClaimantRecord,
    };

    use super::*;
    use crate::error::FixtureError;

    fn sample_input() -> MerkleInput {
        let values = (0..3)
            .map(|i| {
                (
                    i,
                    ClaimantRecord {
                        claimant: claimant_address(i),
                        category: "2".into(),
                        tokens: vec!["0xa".into(), "0xb".into()],
                        amounts: vec![i + 1, i + 2],
                        trailing: "10".into(),
                    },
                )
            })
            .collect::<BTreeMap<_, _>>();
        MerkleInput::new(values)
    }

    #[test]
    fn writes_and_parses_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/target/input2.json");
        let input = sample_input();

        write_merkle_input(&path, &input).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text, serde_json::to_string(&input).unwrap());
        let parsed: MerkleInput = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, input);

        // Temp file was renamed away
        assert!(!temp_path(&path).unwrap().exists());
    }

    #[test]
    fn replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.json");
        fs::write(&path, "stale").unwrap();

        write_merkle_input(&path, &sample_input()).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with(r#"{"types":"#));
    }

    #[test]
    fn failed_rename_leaves_target_alone() {
        let dir = tempfile::tempdir().unwrap();

        // A non-empty directory cannot be replaced by a file
        let path = dir.path().join("input.json");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep"), "keep").unwrap();

        let result = write_merkle_input(&path, &sample_input());
        assert!(matches!(result, Err(FixtureError::Io(_))));

        assert!(!temp_path(&path).unwrap().exists());
        assert_eq!(fs::read_to_string(path.join("keep")).unwrap(), "keep");
    }

    #[test]
    fn path_without_file_name() {
        let result = write_merkle_input(Path::new("/"), &sample_input());
        assert!(matches!(result, Err(FixtureError::Io(_))));
    }

    #[test]
    fn temp_path_is_sibling() {
        let tmp = temp_path(Path::new("a/b/input2.json")).unwrap();
        assert_eq!(tmp, Path::new("a/b/input2.json.tmp"));
    }
}
