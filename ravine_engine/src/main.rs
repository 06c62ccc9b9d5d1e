use anyhow::Result;

mod cli;
mod host;
mod runtime;
mod scenario;
mod timeline;

fn main() -> Result<()> {
    env_logger::init();
    let args = cli::parse()?;
    runtime::execute(args)
}
