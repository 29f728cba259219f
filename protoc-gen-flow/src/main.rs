use std::io::{Error, ErrorKind, Read, Result, Write};

use flow_build::Config;
use prost::Message;
use prost_types::compiler::{CodeGeneratorRequest, CodeGeneratorResponse};

fn main() {
    env_logger::init();

    if let Err(e) = faillible_main() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn faillible_main() -> Result<()> {
    let mut buf = Vec::new();
    std::io::stdin().read_to_end(&mut buf)?;

    let request = CodeGeneratorRequest::decode(buf.as_slice()).map_err(|error| {
        Error::new(
            ErrorKind::InvalidInput,
            format!("invalid CodeGeneratorRequest: {}", error),
        )
    })?;

    let config = Config::from_parameter(request.parameter());
    let response = match config {
        Ok(config) => config.compile_request(request),
        Err(error) => CodeGeneratorResponse {
            error: Some(error.to_string()),
            ..Default::default()
        },
    };

    buf.clear();
    response.encode(&mut buf).map_err(|error| {
        Error::new(
            ErrorKind::Other,
            format!("failed to encode CodeGeneratorResponse: {}", error),
        )
    })?;
    std::io::stdout().write_all(&buf)?;

    Ok(())
}
