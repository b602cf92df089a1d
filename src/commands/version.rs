use anyhow::Result;

pub fn execute() -> Result<()> {
    println!("quota-tray version {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
