use std::io::Write;

use tracing::{info, warn};

use crate::cmd::FmtArgs;
use crate::exit::{io_error, schema_error, CliResult, FAILURE, SUCCESS};

pub fn run(args: FmtArgs) -> CliResult<i32> {
    let text = args.registry.read()?;
    let registry = netreg_schema::parse_registry(&text)
        .map_err(|err| schema_error("validation failed", err))?;
    let canonical = netreg_schema::registry_to_json(&registry)
        .map_err(|err| schema_error("serialization failed", err))?;

    if args.check {
        if canonical == text {
            return Ok(SUCCESS);
        }
        warn!(path = %args.registry.registry.display(), "registry is not canonically formatted");
        eprintln!("{} is not formatted", args.registry.registry.display());
        return Ok(FAILURE);
    }

    match &args.output {
        Some(path) => {
            std::fs::write(path, canonical.as_bytes())
                .map_err(|err| io_error(&format!("write {}", path.display()), &err))?;
            info!(path = %path.display(), networks = registry.networks.len(), "wrote registry");
        }
        None => {
            let mut out = std::io::stdout().lock();
            out.write_all(canonical.as_bytes())
                .and_then(|()| out.flush())
                .map_err(|err| io_error("write stdout", &err))?;
        }
    }
    Ok(SUCCESS)
}
