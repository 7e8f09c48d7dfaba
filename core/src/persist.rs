use crate::error::{GroupError, Result};
use crate::GroupingResult;
use std::fs::File;
use std::io::Write;
use std::path::Path;

pub const DEFAULT_OUTPUT: &str = "results_stemmed.json";

/// Pretty JSON with two-space indentation, keys in rank order.
pub fn render(result: &GroupingResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Renders the whole document first, then writes it in one go.
pub fn write_results<P: AsRef<Path>>(path: P, result: &GroupingResult) -> Result<()> {
    let path = path.as_ref();
    let json = render(result)?;
    let write_err = |source| GroupError::Write { path: path.to_path_buf(), source };
    let mut f = File::create(path).map_err(write_err)?;
    f.write_all(json.as_bytes()).map_err(write_err)?;
    f.flush().map_err(write_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Aggregator, RankFilter};
    use tempfile::tempdir;

    fn sample() -> GroupingResult {
        let mut agg = Aggregator::new();
        let pairs = [
            ("cats", "cat"),
            ("cat", "cat"),
            ("cats", "cat"),
            ("dog", "dog"),
            ("dogs", "dog"),
        ];
        for (surface, stem) in pairs {
            agg.push(surface, stem);
        }
        RankFilter::default().apply(agg.into_groups())
    }

    #[test]
    fn renders_pretty_json() {
        let json = render(&sample()).unwrap();
        let want = r#"{
  "cat": {
    "count": 3,
    "words": {
      "cats": 2,
      "cat": 1
    }
  },
  "dog": {
    "count": 2,
    "words": {
      "dog": 1,
      "dogs": 1
    }
  }
}"#;
        assert_eq!(json, want);
    }

    #[test]
    fn writes_file() {
        let dir = tempdir().unwrap();
        let out = dir.path().join(DEFAULT_OUTPUT);
        write_results(&out, &sample()).unwrap();
        let written = std::fs::read_to_string(&out).unwrap();
        assert_eq!(written, render(&sample()).unwrap());
    }

    #[test]
    fn unwritable_sink() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("missing").join("out.json");
        match write_results(&out, &sample()) {
            Err(GroupError::Write { path, .. }) => assert_eq!(path, out),
            other => panic!("expected write error, got {other:?}"),
        }
    }
}
