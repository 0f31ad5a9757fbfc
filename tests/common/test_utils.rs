#![allow(dead_code)]

use std::{
    fs,
    path::{Path, PathBuf},
};

use lightbox::resources::shader::ProgramSource;

/// Shader files shipped with the crate.
pub fn shipped_shaders() -> ProgramSource {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("shaders");
    ProgramSource::new(
        root.join("base_vertex_shader.vert"),
        root.join("light_fragment_shader.frag"),
    )
}

/// A fresh directory under the system temp dir, unique per test and process.
pub fn scratch_dir(test_name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "lightbox-{}-{}",
        test_name,
        std::process::id()
    ));
    if dir.exists() {
        fs::remove_dir_all(&dir).expect("Failed to clear scratch dir");
    }
    fs::create_dir_all(&dir).expect("Failed to create scratch dir");
    dir
}

/// Copy the shipped shaders into `dir` so a test can edit them.
pub fn editable_shaders(dir: &Path) -> ProgramSource {
    let shipped = shipped_shaders();
    let editable = ProgramSource::new(
        dir.join("base_vertex_shader.vert"),
        dir.join("light_fragment_shader.frag"),
    );
    fs::copy(&shipped.vertex_path, &editable.vertex_path).expect("Failed to copy vertex shader");
    fs::copy(&shipped.fragment_path, &editable.fragment_path)
        .expect("Failed to copy fragment shader");
    editable
}

/// A device without a window, or `None` when the machine has no usable adapter.
#[cfg(feature = "integration-tests")]
pub async fn headless_device() -> Option<(wgpu::Device, wgpu::Queue)> {
    let instance = wgpu::Instance::new(wgpu::InstanceDescriptor::new_without_display_handle());
    let adapter = instance
        .request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::default(),
            compatible_surface: None,
            force_fallback_adapter: false,
        })
        .await
        .ok()?;
    adapter
        .request_device(&wgpu::DeviceDescriptor::default())
        .await
        .ok()
}
