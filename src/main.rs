use ps_icongen::{Backend, GeneratorConfig};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = GeneratorConfig::default();
    let mut stdout = std::io::stdout().lock();
    ps_icongen::run(&mut stdout, &config, Backend::detect())?;
    Ok(())
}
