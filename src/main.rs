mod app;
mod cli;
mod domain;
mod guard;
mod telemetry;

fn main() -> anyhow::Result<()> {
    app::run()?;

    Ok(())
}
