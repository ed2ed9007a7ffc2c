use std::io;

use env_logger::Env;

use ini_config::Config;

fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let mut config = Config::new();
    config.add_section("my little section")?;
    config.add_section("temporary section")?;
    config.remove_section("temporary section")?;

    config.set("my little section", "temp property", "temp value")?;
    config.remove_property("my little section", "temp property")?;
    config.set("my little section", "greeting", "hello")?;

    // Adding the same section again is refused
    if let Err(e) = config.add_section("my little section") {
        log::warn!("{}", e);
    }

    config.write_to(io::stdout().lock())?;
    println!();

    Ok(())
}
