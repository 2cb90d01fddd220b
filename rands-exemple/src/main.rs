use rands_core::{chars, Generator, GeneratorConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // A string of 6 to 8 characters (9 excluded) made of lower case letters and digits
    let mut alphabet = chars::lower_alpha().to_vec();
    alphabet.extend_from_slice(chars::number());
    println!("String(6, 9): {}", rands_core::string(6, 9, &alphabet)?);

    // max - min == 1 means a fixed length
    println!("Bytes(6, 7): {:?}", rands_core::bytes(6, 7, b"abc")?);

    // Code points work as well as bytes
    let greek: Vec<char> = "αβγδεζηθ".chars().collect();
    println!("String(4, 6, greek): {}", rands_core::string(4, 6, &greek)?);

    // Invalid arguments fail before anything is drawn
    match rands_core::bytes(0, 5, b"ab") {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("Bytes(0, 5): {e}"),
    }
    match rands_core::bytes::<u8>(5, 7, &[]) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("Bytes(5, 7, empty): {e}"),
    }

    // The process-wide source can be re-seeded to replay a sequence
    rands_core::seed(42);
    let first = rands_core::string(8, 12, chars::alpha())?;
    rands_core::seed(42);
    let second = rands_core::string(8, 12, chars::alpha())?;
    println!("Replayed after seed(42): {first} == {second}");

    // A buffered generator keeps up to 'capacity' strings ready in the background
    let config = GeneratorConfig {
        seed: Some(2024),
        capacity: 5,
        min: 5,
        max: 7,
    };
    let (generator, producer) = Generator::spawn(&config, chars::alpha_number_punct())?;
    for i in 0..5 {
        println!("Buffered {}: {}", i + 1, generator.string().await);
    }

    // Takes effect on the next string produced, not on the queued ones
    generator.reseed(7);
    println!("After reseed: {}", generator.string().await);

    // Once shut down, queued strings are drained, then takes return empty values
    generator.shutdown();
    println!("Producer ended with: {:?}", producer.await?);
    loop {
        let value = generator.string().await;
        if value.is_empty() {
            println!("Generator drained");
            break;
        }
        println!("Drained: {value}");
    }

    Ok(())
}
