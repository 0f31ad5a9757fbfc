//! Reading and compiling shader stages from disk.
//!
//! Both stages are WGSL, one stage per file (`.vert` and `.frag`). Before
//! anything reaches the GPU the text is parsed and validated with `naga`, so a
//! typo in a shader being edited shows up as a [`ShaderError`] instead of a
//! device error.

use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    /// Name of the function the pipeline enters this stage through.
    pub fn entry_point(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "vs_main",
            ShaderStage::Fragment => "fs_main",
        }
    }

    fn naga_stage(self) -> naga::ShaderStage {
        match self {
            ShaderStage::Vertex => naga::ShaderStage::Vertex,
            ShaderStage::Fragment => naga::ShaderStage::Fragment,
        }
    }
}

impl std::fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ShaderError {
    #[error("could not read {stage} shader {path:?}")]
    Io {
        stage: ShaderStage,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{stage} shader does not parse:\n{message}")]
    Parse { stage: ShaderStage, message: String },
    #[error("{stage} shader failed validation: {message}")]
    Validation { stage: ShaderStage, message: String },
    #[error("{stage} shader has no entry point `{entry_point}`")]
    MissingEntryPoint {
        stage: ShaderStage,
        entry_point: &'static str,
    },
    /// Both stages compiled on their own but the device rejected them as a
    /// pipeline, e.g. a binding the pipeline layout does not provide.
    #[error("shader stages failed to link: {message}")]
    Link { message: String },
}

/// WGSL source that passed parsing and validation for one stage.
#[derive(Clone, Debug)]
pub struct CompiledStage {
    pub stage: ShaderStage,
    pub source: String,
}

impl CompiledStage {
    pub fn entry_point(&self) -> &'static str {
        self.stage.entry_point()
    }

    pub(crate) fn descriptor(&self) -> wgpu::ShaderModuleDescriptor<'_> {
        wgpu::ShaderModuleDescriptor {
            label: Some(match self.stage {
                ShaderStage::Vertex => "Vertex Shader",
                ShaderStage::Fragment => "Fragment Shader",
            }),
            source: wgpu::ShaderSource::Wgsl(self.source.as_str().into()),
        }
    }
}

/// Parse and validate `source` as the given stage.
pub fn compile(source: &str, stage: ShaderStage) -> Result<CompiledStage, ShaderError> {
    let module = naga::front::wgsl::parse_str(source).map_err(|e| ShaderError::Parse {
        stage,
        message: e.emit_to_string(source),
    })?;

    let mut validator = naga::valid::Validator::new(
        naga::valid::ValidationFlags::all(),
        naga::valid::Capabilities::all(),
    );
    validator
        .validate(&module)
        .map_err(|e| ShaderError::Validation {
            stage,
            message: e.to_string(),
        })?;

    let entry_point = stage.entry_point();
    let has_entry = module
        .entry_points
        .iter()
        .any(|ep| ep.name == entry_point && ep.stage == stage.naga_stage());
    if !has_entry {
        return Err(ShaderError::MissingEntryPoint { stage, entry_point });
    }

    Ok(CompiledStage {
        stage,
        source: source.to_string(),
    })
}

/// Read a shader file and compile it.
pub async fn read_stage(path: &Path, stage: ShaderStage) -> Result<CompiledStage, ShaderError> {
    let source = tokio::fs::read_to_string(path).await.map_err(|source| ShaderError::Io {
        stage,
        path: path.to_path_buf(),
        source,
    })?;
    compile(&source, stage)
}

/// Where the two stages of a program are read from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgramSource {
    pub vertex_path: PathBuf,
    pub fragment_path: PathBuf,
}

impl ProgramSource {
    pub fn new(vertex_path: impl Into<PathBuf>, fragment_path: impl Into<PathBuf>) -> Self {
        Self {
            vertex_path: vertex_path.into(),
            fragment_path: fragment_path.into(),
        }
    }

    /// Read and compile both stages, vertex first.
    pub async fn load(&self) -> Result<(CompiledStage, CompiledStage), ShaderError> {
        let vertex = read_stage(&self.vertex_path, ShaderStage::Vertex).await?;
        let fragment = read_stage(&self.fragment_path, ShaderStage::Fragment).await?;
        Ok((vertex, fragment))
    }
}
