use lightbox::{SandboxConfig, flow};

fn main() -> anyhow::Result<()> {
    flow::run(SandboxConfig::default())
}
