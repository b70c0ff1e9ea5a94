//! The pyxis-sync command-line executable.

fn main() -> anyhow::Result<()> {
    pyxis_sync::run()
}
