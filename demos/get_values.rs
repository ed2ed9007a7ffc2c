use env_logger::Env;

use ini_config::Config;

fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let content = r#"[section]
goethe quote = Da steh ich nun, ich armer Tor! Und bin so klug als wie zuvor.
sense of life = 42
sqrt of two = 1.41421356237
is this a boolean = true
fruits = apples, bananas, pears
"#;

    let config: Config = content.parse()?;

    let quote = config.get("section", "goethe quote")?;
    println!("the value of \"goethe quote\" is: {:?}", quote);

    let integer = config.get_int("section", "sense of life")?;
    println!("the value of \"sense of life\" is: {}", integer);

    let float = config.get_f32("section", "sqrt of two")?;
    println!("the value of \"sqrt of two\" is: {:.6}", float);

    let boolean = config.get_bool("section", "is this a boolean")?;
    println!("the value of \"is this a boolean\" is: {}", boolean);

    let fruits: Vec<String> = config.get_transformed("section", "fruits", |s| {
        anyhow::Ok(s.split(',').map(|v| v.trim().to_string()).collect())
    })?;
    println!("the value of \"fruits\" is: {:?}", fruits);

    let missing = config.get_or("section", "missing", "nothing");
    println!("the value of \"missing\" is: {:?}", missing);

    Ok(())
}
