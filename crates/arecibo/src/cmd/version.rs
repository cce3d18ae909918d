use arecibo_glyph::uscii_5x7;

use crate::cmd::VersionArgs;
use crate::exit::{CliResult, SUCCESS};

pub fn run(args: VersionArgs) -> CliResult<i32> {
    if !args.extended {
        println!("arecibo {}", env!("CARGO_PKG_VERSION"));
        return Ok(SUCCESS);
    }

    let table = uscii_5x7();
    println!("name: arecibo");
    println!("version: {}", env!("CARGO_PKG_VERSION"));
    println!(
        "target: {}",
        option_env!("ARECIBO_BUILD_TARGET").unwrap_or("unknown")
    );
    println!("target_os: {}", std::env::consts::OS);
    println!("target_arch: {}", std::env::consts::ARCH);
    println!(
        "builtin_table: {} v{} ({}x{}, {} codepoints)",
        table.name(),
        table.info().version,
        table.width(),
        table.height(),
        table.len()
    );

    Ok(SUCCESS)
}
