use crate::cli::{args::DecodeArgs, commands::read_data, config::Settings};

pub fn handle(args: DecodeArgs, settings: &Settings) -> Result<(), Box<dyn std::error::Error>> {
    if args.no_compress {
        tracing::debug!("--no-compress has no effect when decoding");
    }

    let token = read_data(args.data)?;
    let text = settings.encoder.decode(&token)?;
    println!("{}", text);
    Ok(())
}
