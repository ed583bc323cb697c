use anyhow::Result;

fn main() -> Result<()> {
    tde4_cli::main_entry()
}
