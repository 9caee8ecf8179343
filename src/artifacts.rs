//! Loading of the three pretrained artifacts.
//!
//! The scaler, the model column vocabulary and the classifier are read once
//! at startup, checked against each other, and then shared read-only. Each
//! file is JSON (`.json`) or bincode (`.bin`), chosen by extension.

use crate::model::{ClassifierParams, InferenceModel, ModelError};
use crate::preprocessing::{
    FeatureEncoder, FittedScaler, FittedTransformer, ModelColumnSet, PreprocessingError,
    ScalerParams,
};
use crate::serialization::SerializableParams;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("failed to access artifact {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unsupported artifact format for {0} (expected .json or .bin)")]
    UnsupportedFormat(PathBuf),
    #[error("failed to decode artifact {path}: {message}")]
    Decode { path: PathBuf, message: String },
    #[error("failed to encode artifact {path}: {message}")]
    Encode { path: PathBuf, message: String },
    #[error(transparent)]
    Preprocessing(#[from] PreprocessingError),
    #[error(transparent)]
    Model(#[from] ModelError),
    #[error("classifier expects {classifier} features but the model column set has {columns}")]
    WidthMismatch { classifier: usize, columns: usize },
}

/// On-disk encoding of an artifact.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArtifactFormat {
    Json,
    Bincode,
}

impl ArtifactFormat {
    pub fn from_path(path: &Path) -> Result<Self, ArtifactError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(ArtifactFormat::Json),
            Some(ext) if ext.eq_ignore_ascii_case("bin") => Ok(ArtifactFormat::Bincode),
            _ => Err(ArtifactError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

/// Reads and decodes one artifact file.
pub fn read_artifact<T: Serialize + DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
    let format = ArtifactFormat::from_path(path)?;
    let bytes = fs::read(path).map_err(|source| ArtifactError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let decode = |message: String| ArtifactError::Decode {
        path: path.to_path_buf(),
        message,
    };
    match format {
        ArtifactFormat::Json => serde_json::from_slice(&bytes).map_err(|e| decode(e.to_string())),
        ArtifactFormat::Bincode => T::from_bytes(&bytes).map_err(|e| decode(e.to_string())),
    }
}

/// Encodes and writes one artifact file.
pub fn write_artifact<T: Serialize + DeserializeOwned>(
    path: &Path,
    value: &T,
) -> Result<(), ArtifactError> {
    let encode = |message: String| ArtifactError::Encode {
        path: path.to_path_buf(),
        message,
    };
    let bytes = match ArtifactFormat::from_path(path)? {
        ArtifactFormat::Json => {
            serde_json::to_vec_pretty(value).map_err(|e| encode(e.to_string()))?
        }
        ArtifactFormat::Bincode => value.to_bytes().map_err(|e| encode(e.to_string()))?,
    };
    fs::write(path, bytes).map_err(|source| ArtifactError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Locations of the three artifact files.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArtifactPaths {
    pub scaler: PathBuf,
    pub columns: PathBuf,
    pub classifier: PathBuf,
}

impl Default for ArtifactPaths {
    fn default() -> Self {
        Self {
            scaler: PathBuf::from("artifacts/scaler.json"),
            columns: PathBuf::from("artifacts/model_columns.json"),
            classifier: PathBuf::from("artifacts/classifier.json"),
        }
    }
}

impl ArtifactPaths {
    /// Resolves relative paths against `base`.
    pub fn resolve_against(&self, base: &Path) -> Self {
        let resolve = |path: &PathBuf| {
            if path.is_absolute() {
                path.clone()
            } else {
                base.join(path)
            }
        };
        Self {
            scaler: resolve(&self.scaler),
            columns: resolve(&self.columns),
            classifier: resolve(&self.classifier),
        }
    }
}

/// The loaded, mutually consistent artifact set.
#[derive(Debug)]
pub struct Artifacts {
    columns: ModelColumnSet,
    scaler: FittedScaler,
    classifier: Box<dyn InferenceModel>,
}

impl Artifacts {
    /// Assembles an artifact set, checking the scaler and classifier widths.
    pub fn new(
        columns: ModelColumnSet,
        scaler: FittedScaler,
        classifier: Box<dyn InferenceModel>,
    ) -> Result<Self, ArtifactError> {
        FeatureEncoder::new(&columns, &scaler)?;
        if classifier.n_features() != columns.len() {
            return Err(ArtifactError::WidthMismatch {
                classifier: classifier.n_features(),
                columns: columns.len(),
            });
        }
        Ok(Self {
            columns,
            scaler,
            classifier,
        })
    }

    pub fn load(paths: &ArtifactPaths) -> Result<Self, ArtifactError> {
        let columns: ModelColumnSet = read_artifact(&paths.columns)?;
        debug!(path = %paths.columns.display(), columns = columns.len(), "loaded model columns");

        let scaler = FittedScaler::from_params(read_artifact::<ScalerParams>(&paths.scaler)?)?;
        debug!(path = %paths.scaler.display(), kind = scaler.kind(), "loaded scaler");

        let classifier = read_artifact::<ClassifierParams>(&paths.classifier)?.into_model()?;
        debug!(path = %paths.classifier.display(), kind = classifier.kind(), "loaded classifier");

        let artifacts = Self::new(columns, scaler, classifier)?;
        info!(
            columns = artifacts.columns.len(),
            scaler = artifacts.scaler.kind(),
            classifier = artifacts.classifier.kind(),
            "artifacts loaded"
        );
        Ok(artifacts)
    }

    pub fn columns(&self) -> &ModelColumnSet {
        &self.columns
    }

    pub fn scaler(&self) -> &FittedScaler {
        &self.scaler
    }

    pub fn classifier(&self) -> &dyn InferenceModel {
        self.classifier.as_ref()
    }

    /// An encoder bound to these artifacts.
    pub fn encoder(&self) -> Result<FeatureEncoder<'_>, PreprocessingError> {
        FeatureEncoder::new(&self.columns, &self.scaler)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LinearParams;
    use crate::preprocessing::StandardScalerParams;

    fn write_all(dir: &Path, ext: &str, width: usize) -> ArtifactPaths {
        let paths = ArtifactPaths {
            scaler: dir.join(format!("scaler.{ext}")),
            columns: dir.join(format!("columns.{ext}")),
            classifier: dir.join(format!("classifier.{ext}")),
        };
        let columns = ModelColumnSet::full_vocabulary().unwrap();
        write_artifact(&paths.columns, &columns).unwrap();
        write_artifact(
            &paths.scaler,
            &ScalerParams::Standard(StandardScalerParams::identity(9)),
        )
        .unwrap();
        write_artifact(
            &paths.classifier,
            &ClassifierParams::Linear(LinearParams {
                weights: vec![0.1; width],
                bias: 0.0,
            }),
        )
        .unwrap();
        paths
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            ArtifactFormat::from_path(Path::new("a/scaler.json")).unwrap(),
            ArtifactFormat::Json
        );
        assert_eq!(
            ArtifactFormat::from_path(Path::new("model.BIN")).unwrap(),
            ArtifactFormat::Bincode
        );
        assert!(matches!(
            ArtifactFormat::from_path(Path::new("model.pkl")),
            Err(ArtifactError::UnsupportedFormat(_))
        ));
        assert!(ArtifactFormat::from_path(Path::new("model")).is_err());
    }

    #[test]
    fn test_load_json_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let paths = write_all(dir.path(), "json", 27);
        let artifacts = Artifacts::load(&paths).unwrap();
        assert_eq!(artifacts.columns().len(), 27);
        assert_eq!(artifacts.scaler().kind(), "standard");
        assert_eq!(artifacts.classifier().kind(), "linear");
    }

    #[test]
    fn test_load_bincode_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let paths = write_all(dir.path(), "bin", 27);
        let artifacts = Artifacts::load(&paths).unwrap();
        assert_eq!(artifacts.classifier().n_features(), 27);
    }

    #[test]
    fn test_load_rejects_classifier_width() {
        let dir = tempfile::tempdir().unwrap();
        let paths = write_all(dir.path(), "json", 26);
        assert!(matches!(
            Artifacts::load(&paths),
            Err(ArtifactError::WidthMismatch {
                classifier: 26,
                columns: 27
            })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut paths = write_all(dir.path(), "json", 27);
        paths.scaler = dir.path().join("absent.json");
        assert!(matches!(
            Artifacts::load(&paths),
            Err(ArtifactError::Io { .. })
        ));
    }

    #[test]
    fn test_load_corrupt_columns() {
        let dir = tempfile::tempdir().unwrap();
        let paths = write_all(dir.path(), "json", 27);
        fs::write(&paths.columns, r#"["Age","Age"]"#).unwrap();
        assert!(matches!(
            Artifacts::load(&paths),
            Err(ArtifactError::Decode { .. })
        ));
    }

    #[test]
    fn test_resolve_against() {
        let paths = ArtifactPaths {
            scaler: PathBuf::from("/abs/scaler.json"),
            ..ArtifactPaths::default()
        };
        let resolved = paths.resolve_against(Path::new("/etc/app"));
        assert_eq!(resolved.scaler, PathBuf::from("/abs/scaler.json"));
        assert_eq!(
            resolved.columns,
            PathBuf::from("/etc/app/artifacts/model_columns.json")
        );
    }
}
