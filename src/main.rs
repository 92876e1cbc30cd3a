// SPDX-License-Identifier: MPL-2.0
use folio::app::{self, paths, Flags};
use folio::domain::Section;
use folio::logging;

const HELP: &str = "\
Folio - personal portfolio viewer

USAGE:
    folio [OPTIONS]

OPTIONS:
    --lang <ID>          UI language (e.g. en-US, fr)
    --assets-dir <DIR>   Directory holding portfolio images and the resume
    --config-dir <DIR>   Directory holding settings.toml
    --section <NAME>     Start on home, movies, drawings, resume or music
    -h, --help           Print this help

ENVIRONMENT:
    FOLIO_CONFIG_DIR     Same as --config-dir
    FOLIO_ASSETS_DIR     Same as --assets-dir
    RUST_LOG             Log filter (default: folio=info)
";

fn parse_args() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let lang: Option<String> = args.opt_value_from_str("--lang")?;
    let assets_dir: Option<String> = args.opt_value_from_str("--assets-dir")?;
    let config_dir: Option<String> = args.opt_value_from_str("--config-dir")?;
    let start_section: Option<Section> = args.opt_value_from_str("--section")?;

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }

    paths::init_cli_overrides(config_dir, assets_dir);
    Ok(Some(Flags {
        lang,
        start_section,
    }))
}

fn main() -> iced::Result {
    logging::init();

    match parse_args() {
        Ok(Some(flags)) => app::run(flags),
        Ok(None) => {
            print!("{HELP}");
            Ok(())
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    }
}
