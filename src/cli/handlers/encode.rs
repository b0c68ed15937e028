use crate::cli::{args::EncodeArgs, commands::read_data, config::Settings};

pub fn handle(args: EncodeArgs, settings: &Settings) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_data(args.data)?;

    let compress = if args.no_compress {
        false
    } else {
        args.compress || settings.compress_by_default
    };

    let token = settings.encoder.encode(&text, compress)?;
    println!("{}", token);
    Ok(())
}
