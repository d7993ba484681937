//! JSON configuration for the `box_blur_demo` binary.
//!
//! Every field has a default, so an empty object (or no config file at all)
//! reproduces the classic run: `lena.jpg`, a 5×5 box kernel, the global
//! thread pool and shown buffers written to `output/`.
use crate::error::{ConvError, Result};
use crate::kernel::{Kernel, GAUSSIAN_5TAP};
use crate::parallel::{ParallelFor, Partition};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub input: PathBuf,
    pub kernel: KernelConfig,
    pub parallel: ParallelConfig,
    pub output: DemoOutputConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("lena.jpg"),
            kernel: KernelConfig::default(),
            parallel: ParallelConfig::default(),
            output: DemoOutputConfig::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KernelKind {
    /// Uniform `1 / size²` weights.
    #[default]
    Box,
    /// 1×1 kernel with weight 1; `size` is ignored.
    Identity,
    /// Outer product of the 5-tap binomial `[1, 4, 6, 4, 1] / 16`; `size` is ignored.
    Gaussian5,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct KernelConfig {
    pub kind: KernelKind,
    pub size: usize,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            kind: KernelKind::Box,
            size: 5,
        }
    }
}

impl KernelConfig {
    pub fn build(&self) -> Result<Kernel> {
        match self.kind {
            KernelKind::Box => Kernel::box_filter(self.size),
            KernelKind::Identity => Ok(Kernel::identity()),
            KernelKind::Gaussian5 => Kernel::from_separable(&GAUSSIAN_5TAP),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ParallelConfig {
    /// Dedicated pool size. `None` uses the global pool (one worker per
    /// hardware thread).
    pub threads: Option<usize>,
    /// Run the whole range as one chunk on the calling thread. Overrides
    /// `stripes` and `chunk_len`.
    pub single: bool,
    /// Number of near-equal chunks. Takes precedence over `chunk_len`.
    pub stripes: Option<usize>,
    /// Fixed chunk length in pixels.
    pub chunk_len: Option<usize>,
}

impl ParallelConfig {
    pub fn partition(&self) -> Partition {
        if self.single {
            return Partition::Single;
        }
        match (self.stripes, self.chunk_len) {
            (Some(n), _) => Partition::Stripes(n),
            (None, Some(n)) => Partition::ChunkLen(n),
            (None, None) => Partition::Auto,
        }
    }

    pub fn build(&self) -> Result<ParallelFor> {
        let executor = ParallelFor::new().with_partition(self.partition());
        match self.threads {
            Some(threads) => executor.with_threads(threads),
            None => Ok(executor),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DemoOutputConfig {
    /// Directory receiving one PNG per shown buffer.
    pub dir: PathBuf,
    /// Optional JSON run report.
    pub report_json: Option<PathBuf>,
}

impl Default for DemoOutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("output"),
            report_json: None,
        }
    }
}

pub fn load_config(path: &Path) -> Result<DemoConfig> {
    let data = fs::read_to_string(path).map_err(|source| ConvError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&data).map_err(|source| ConvError::Config {
        path: path.to_path_buf(),
        source,
    })
}

pub fn parse_config(json: &str) -> std::result::Result<DemoConfig, serde_json::Error> {
    serde_json::from_str(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let config = parse_config("{}").unwrap();
        assert_eq!(config.input, PathBuf::from("lena.jpg"));
        assert_eq!(config.kernel.kind, KernelKind::Box);
        assert_eq!(config.kernel.size, 5);
        assert_eq!(config.parallel.partition(), Partition::Auto);
        assert_eq!(config.output.dir, PathBuf::from("output"));
        assert!(config.output.report_json.is_none());
    }

    #[test]
    fn stripes_take_precedence_over_chunk_len() {
        let config =
            parse_config(r#"{ "parallel": { "stripes": 8, "chunk_len": 64 } }"#).unwrap();
        assert_eq!(config.parallel.partition(), Partition::Stripes(8));
        let config = parse_config(r#"{ "parallel": { "chunk_len": 64 } }"#).unwrap();
        assert_eq!(config.parallel.partition(), Partition::ChunkLen(64));
    }

    #[test]
    fn single_flag_selects_one_chunk() {
        let config =
            parse_config(r#"{ "parallel": { "single": true, "stripes": 8 } }"#).unwrap();
        assert_eq!(config.parallel.partition(), Partition::Single);
        let executor = config.parallel.build().unwrap();
        assert_eq!(executor.partition(), Partition::Single);
        assert_eq!(executor.chunk_len(100), 100);
    }

    #[test]
    fn kernel_kinds_build() {
        let config = parse_config(r#"{ "kernel": { "kind": "gaussian5" } }"#).unwrap();
        assert_eq!(config.kernel.build().unwrap().ksize(), 5);
        let config = parse_config(r#"{ "kernel": { "kind": "identity", "size": 4 } }"#).unwrap();
        assert_eq!(config.kernel.build().unwrap(), Kernel::identity());
        let config = parse_config(r#"{ "kernel": { "kind": "box", "size": 4 } }"#).unwrap();
        assert!(config.kernel.build().unwrap_err().is_invalid_argument());
    }

    #[test]
    fn unknown_kernel_kind_is_a_parse_error() {
        assert!(parse_config(r#"{ "kernel": { "kind": "sobel" } }"#).is_err());
    }

    #[test]
    fn load_config_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();
        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, ConvError::Config { .. }), "{err}");
        assert!(err.to_string().contains("broken.json"));
    }
}
